use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use super::SmsProvider;

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub struct VonageSmsProvider {
    api_key: String,
    api_secret: String,
    sender: String,
    url: String,
    client: reqwest::Client,
}

impl VonageSmsProvider {
    pub fn new(
        api_key: String,
        api_secret: String,
        sender: String,
        url: String,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .context("failed to build Vonage HTTP client")?;

        Ok(Self {
            api_key,
            api_secret,
            sender,
            url,
            client,
        })
    }
}

#[async_trait]
impl SmsProvider for VonageSmsProvider {
    async fn send_sms(&self, to: &str, text: &str) -> anyhow::Result<serde_json::Value> {
        let resp = self
            .client
            .post(&self.url)
            .form(&[
                ("api_key", self.api_key.as_str()),
                ("api_secret", self.api_secret.as_str()),
                ("to", to),
                ("from", self.sender.as_str()),
                ("text", text),
            ])
            .send()
            .await
            .context("failed to send Vonage SMS")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .with_context(|| format!("failed to parse Vonage response ({status})"))?;

        if !status.is_success() {
            tracing::warn!(%status, "Vonage API returned non-success status");
        }

        Ok(data)
    }
}
