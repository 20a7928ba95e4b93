pub mod sms;
pub mod token;

pub use sms::{provider_rejected, SendRequest, SendResponse};
pub use token::TokenRecord;
