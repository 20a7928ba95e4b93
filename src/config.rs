use std::env;

pub const DEFAULT_VONAGE_URL: &str = "https://rest.nexmo.com/sms/json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub vonage_api_key: String,
    pub vonage_api_secret: String,
    pub vonage_sender: String,
    pub vonage_url: String,
    pub token_store_url: String,
    /// Client-facing credentials. When both are unset the header check is skipped.
    pub client_api_key: Option<String>,
    pub client_api_secret: Option<String>,
    pub quota_enforced: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            vonage_api_key: env::var("VONAGE_API_KEY").unwrap_or_default(),
            vonage_api_secret: env::var("VONAGE_API_SECRET").unwrap_or_default(),
            vonage_sender: non_empty("VONAGE_SENDER").unwrap_or_else(|| "test1".to_string()),
            vonage_url: non_empty("VONAGE_URL").unwrap_or_else(|| DEFAULT_VONAGE_URL.to_string()),
            token_store_url: env::var("FIREBASE_URL").unwrap_or_default(),
            client_api_key: non_empty("API_KEY"),
            client_api_secret: non_empty("API_SECRET"),
            quota_enforced: env::var("QUOTA_ENFORCED")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    pub fn client_auth_enabled(&self) -> bool {
        self.client_api_key.is_some() || self.client_api_secret.is_some()
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
