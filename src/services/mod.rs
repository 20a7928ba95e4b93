pub mod messaging;
pub mod relay;
pub mod token_store;
