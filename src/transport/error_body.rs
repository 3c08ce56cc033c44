use serde::Deserialize;
use serde_json::Value;

use crate::domain::GatewayError;

/// Text-like value in an error body: strings are kept, numbers are rendered,
/// anything else is treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TransportText(Option<String>);

impl<'de> Deserialize<'de> for TransportText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }))
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorJsonBody {
    #[serde(rename = "Code", default)]
    code: TransportText,
    #[serde(rename = "Description", default)]
    description: TransportText,
}

/// Extract `Code` / `Description` from a rejection body.
///
/// Never fails: an unreadable body yields a [`GatewayError`] with both parts missing.
pub fn decode_gateway_error(body: &str) -> GatewayError {
    let parsed = match serde_json::from_str::<Value>(body) {
        Ok(object @ Value::Object(_)) => {
            serde_json::from_value::<ErrorJsonBody>(object).unwrap_or_default()
        }
        _ => ErrorJsonBody::default(),
    };
    GatewayError {
        code: parsed.code.0,
        description: parsed.description.0,
    }
}
