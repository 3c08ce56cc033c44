use serde_json::Value;

use crate::domain::ApiResult;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn decode_json_answer(body: &str) -> Result<Value, TransportError> {
    Ok(serde_json::from_str(body)?)
}

/// Pair a successful answer with the body that was posted.
///
/// `status` and `messages` are read leniently: a missing or differently typed
/// field leaves the corresponding part empty.
pub fn api_result_from_answer(answer: &Value, request: Value) -> ApiResult {
    let status = answer
        .get("status")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);
    let result = answer
        .get("messages")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    ApiResult {
        status,
        result,
        request,
    }
}
