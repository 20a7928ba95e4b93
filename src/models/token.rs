use serde::{Deserialize, Serialize};

/// Account record stored under a token in the remote document store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub quota: Option<i64>,
    #[serde(default)]
    pub used: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TokenRecord {
    pub fn stored_phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|p| !p.is_empty())
    }

    pub fn used(&self) -> i64 {
        self.used.unwrap_or(0)
    }

    /// A record without a quota has no sends available.
    pub fn quota_exhausted(&self) -> bool {
        self.used() >= self.quota.unwrap_or(0)
    }
}
