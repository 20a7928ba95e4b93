pub mod firebase;

use async_trait::async_trait;

use crate::models::TokenRecord;

#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns `None` when the token has no record.
    async fn fetch(&self, token: &str) -> anyhow::Result<Option<TokenRecord>>;

    /// Overwrites the `used` counter on the token's record.
    async fn record_use(&self, token: &str, used: i64) -> anyhow::Result<()>;
}
