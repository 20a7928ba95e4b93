use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::json;

use super::TokenStore;
use crate::models::TokenRecord;

const STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Token records in a Firebase Realtime Database (or any REST document store
/// serving `<base>/<key>.json`).
pub struct FirebaseTokenStore {
    base_url: Url,
    client: reqwest::Client,
}

impl FirebaseTokenStore {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).context("invalid token store URL")?;
        anyhow::ensure!(
            !base_url.cannot_be_a_base(),
            "token store URL cannot be used as a base: {base_url}"
        );
        let client = reqwest::Client::builder()
            .timeout(STORE_TIMEOUT)
            .build()
            .context("failed to build token store HTTP client")?;

        Ok(Self { base_url, client })
    }

    fn record_url(&self, token: &str) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("token store URL cannot be used as a base"))?
            .pop_if_empty()
            .push(&format!("{token}.json"));
        Ok(url)
    }
}

#[async_trait]
impl TokenStore for FirebaseTokenStore {
    async fn fetch(&self, token: &str) -> anyhow::Result<Option<TokenRecord>> {
        let url = self.record_url(token)?;

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("failed to reach token store")?;

        if resp.status() != StatusCode::OK {
            tracing::debug!(status = %resp.status(), "token store lookup returned non-200");
            return Ok(None);
        }

        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse token store response")?;

        match data {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(ref map) if map.is_empty() => Ok(None),
            other => serde_json::from_value(other)
                .map(Some)
                .context("malformed token record"),
        }
    }

    async fn record_use(&self, token: &str, used: i64) -> anyhow::Result<()> {
        let url = self.record_url(token)?;

        self.client
            .patch(url)
            .json(&json!({ "used": used }))
            .send()
            .await
            .context("failed to update token usage")?
            .error_for_status()
            .context("token store rejected usage update")?;

        Ok(())
    }
}
