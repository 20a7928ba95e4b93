use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendRequest {
    #[serde(default, deserialize_with = "scalar_string")]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub message: Option<String>,
}

impl SendRequest {
    /// Caller-supplied recipient: `phone` wins over `to`, empty values are skipped.
    pub fn recipient(&self) -> Option<&str> {
        [self.phone.as_deref(), self.to.as_deref()]
            .into_iter()
            .flatten()
            .find(|p| !p.is_empty())
    }
}

/// Accepts strings and bare numbers (`"phone": 66812345678`) as text.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub status: &'static str,
    #[serde(rename = "vonage_response")]
    pub provider_response: serde_json::Value,
}

impl SendResponse {
    pub fn success(provider_response: serde_json::Value) -> Self {
        Self {
            status: "success",
            provider_response,
        }
    }
}

/// True when the provider reports any message in the batch as rejected.
///
/// Vonage answers HTTP 200 even for rejected messages; each entry in
/// `messages` carries a `status` of `"0"` on acceptance.
pub fn provider_rejected(response: &serde_json::Value) -> bool {
    response["messages"]
        .as_array()
        .map(|messages| {
            messages
                .iter()
                .any(|m| m["status"].as_str().is_some_and(|s| s != "0"))
        })
        .unwrap_or(false)
}
