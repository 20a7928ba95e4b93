use crate::config::AppConfig;
use crate::services::messaging::SmsProvider;
use crate::services::token_store::TokenStore;

pub struct AppState {
    pub config: AppConfig,
    pub token_store: Box<dyn TokenStore>,
    pub sms: Box<dyn SmsProvider>,
}
