use serde::Serialize;
use serde_json::Value;

use crate::domain::{CheckStatus, MessageId};

#[derive(Debug, Serialize)]
struct CheckStatusJsonRequest<'a> {
    messages: &'a [MessageId],
}

pub fn encode_check_status_json(request: &CheckStatus) -> Result<Value, serde_json::Error> {
    serde_json::to_value(CheckStatusJsonRequest {
        messages: request.message_ids(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn encode_single_numeric_id() {
        let request = CheckStatus::one(MessageId::from(1));
        assert_eq!(
            encode_check_status_json(&request).unwrap(),
            json!({"messages": [1]})
        );
    }

    #[test]
    fn encode_keeps_order_and_id_kinds() {
        let request = CheckStatus::new(vec![
            MessageId::from(3_158_021_375),
            MessageId::token("abc-1").unwrap(),
            MessageId::from(2),
        ])
        .unwrap();

        assert_eq!(
            encode_check_status_json(&request).unwrap(),
            json!({"messages": [3_158_021_375_u64, "abc-1", 2]})
        );
    }
}
