pub mod vonage;

use async_trait::async_trait;

#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Sends `text` to `to` and returns the provider's raw JSON response.
    async fn send_sms(&self, to: &str, text: &str) -> anyhow::Result<serde_json::Value>;
}
