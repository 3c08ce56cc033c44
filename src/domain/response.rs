use std::fmt;

use serde_json::Value;

use crate::domain::value::MessageId;

/// Successful gateway answer together with the body that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult {
    /// Top-level `status`, e.g. `"ok"`.
    pub status: Option<String>,
    /// Per-message records from `messages`, passed through untouched.
    pub result: Vec<Value>,
    /// JSON body that was posted, kept for correlation.
    pub request: Value,
}

impl ApiResult {
    /// Ids of the messages in [`ApiResult::result`] that carry a `providerId`.
    ///
    /// Records without a usable id are skipped; the order of the rest is kept.
    pub fn provider_ids(&self) -> Vec<MessageId> {
        self.result
            .iter()
            .filter_map(|record| match record.get(MessageId::FIELD)? {
                Value::Number(number) => number.as_u64().map(MessageId::Numeric),
                Value::String(token) => MessageId::token(token.as_str()).ok(),
                _ => None,
            })
            .collect()
    }
}

/// `Code` / `Description` pair from a rejected request.
///
/// Either part may be missing when the gateway answers with an unexpected body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code.as_deref(), self.description.as_deref()) {
            (Some(code), Some(description)) => write!(f, "{code}: {description}"),
            (Some(code), None) => f.write_str(code),
            (None, Some(description)) => f.write_str(description),
            (None, None) => f.write_str("no error details"),
        }
    }
}
