pub mod health;
pub mod sms;
