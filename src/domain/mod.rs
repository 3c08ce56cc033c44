//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Button, CheckStatus, SendOptions, SendViber, SmsFallback, ViberContent};
pub use response::{ApiResult, GatewayError};
pub use validation::ValidationError;
pub use value::{
    Address, ButtonAction, ButtonCaption, ContentType, ImageUrl, Login, MessageId, MessageText,
    Password, Priority, SmsSenderAddress, Subject, ValidityPeriod,
};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn login_rejects_blank_and_trims() {
        assert!(matches!(
            Login::new("   "),
            Err(ValidationError::Empty {
                field: Login::FIELD
            })
        ));
        assert_eq!(Login::new(" user ").unwrap().as_str(), "user");
    }

    #[test]
    fn password_keeps_whitespace_and_hides_debug() {
        assert!(Password::new("").is_err());
        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert_eq!(format!("{password:?}"), "Password(***)");
    }

    #[test]
    fn priority_parses_only_known_values() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("normal".parse::<Priority>().unwrap(), Priority::Normal);
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("realtime".parse::<Priority>().unwrap(), Priority::Realtime);

        for bad in ["", "urgent", "NORMAL", "very_high"] {
            assert!(matches!(
                bad.parse::<Priority>(),
                Err(ValidationError::UnknownPriority { .. })
            ));
        }
    }

    #[test]
    fn content_type_parses_only_known_values() {
        for known in [ContentType::Text, ContentType::Image, ContentType::Button] {
            assert_eq!(known.as_str().parse::<ContentType>().unwrap(), known);
        }

        for bad in ["", "video", "Text"] {
            assert!(matches!(
                bad.parse::<ContentType>(),
                Err(ValidationError::UnknownContentType { .. })
            ));
        }
    }

    #[test]
    fn urls_must_be_absolute() {
        assert_eq!(
            ImageUrl::new("http://test.test/test_image.jpeg")
                .unwrap()
                .as_str(),
            "http://test.test/test_image.jpeg"
        );
        assert!(matches!(
            ImageUrl::new("test_image.jpeg"),
            Err(ValidationError::InvalidUrl {
                field: ImageUrl::FIELD,
                ..
            })
        ));
        assert!(ButtonAction::new("").is_err());
    }

    #[test]
    fn validity_period_rejects_zero_and_defaults_to_one_day() {
        assert!(ValidityPeriod::new(0).is_err());
        assert_eq!(ValidityPeriod::new(60).unwrap().seconds(), 60);
        assert_eq!(ValidityPeriod::default().seconds(), 86_400);
    }

    #[test]
    fn send_options_default_to_normal_priority_and_one_day() {
        let options = SendOptions::default();
        assert_eq!(options.priority, Priority::Normal);
        assert_eq!(options.validity.seconds(), ValidityPeriod::DEFAULT_SECONDS);
        assert!(options.sms_fallback.is_none());
        assert!(options.comment.is_none());
    }

    #[test]
    fn content_type_follows_content_variant() {
        let address = Address::new("79251234567").unwrap();
        let subject = Subject::new("shop").unwrap();

        let request = SendViber::image(
            address.clone(),
            subject.clone(),
            ImageUrl::new("https://example.com/a.png").unwrap(),
        );
        assert_eq!(request.content_type(), ContentType::Image);

        let button = Button {
            text: MessageText::new("hi").unwrap(),
            caption: ButtonCaption::new("open").unwrap(),
            action: ButtonAction::new("https://example.com").unwrap(),
            image: None,
        };
        let request = SendViber::button(address, subject, button);
        assert_eq!(request.content_type(), ContentType::Button);
    }

    #[test]
    fn check_status_requires_ids() {
        assert!(matches!(
            CheckStatus::new(Vec::new()),
            Err(ValidationError::Empty {
                field: MessageId::FIELD
            })
        ));
        let request = CheckStatus::new(vec![MessageId::from(2), MessageId::from(1)]).unwrap();
        assert_eq!(
            request.message_ids(),
            &[MessageId::Numeric(2), MessageId::Numeric(1)]
        );
    }

    #[test]
    fn message_id_serializes_as_received() {
        assert_eq!(serde_json::to_value(MessageId::from(7)).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(MessageId::token(" abc ").unwrap()).unwrap(),
            json!("abc")
        );
        assert!(MessageId::token("  ").is_err());
    }

    #[test]
    fn provider_ids_skip_records_without_id() {
        let result = ApiResult {
            status: Some("ok".to_owned()),
            result: vec![
                json!({"providerId": 3_158_021_375_u64, "code": "ok"}),
                json!({"code": "error-address-unknown"}),
                json!({"providerId": "abc", "code": "ok"}),
                json!({"providerId": null}),
            ],
            request: json!({}),
        };

        assert_eq!(
            result.provider_ids(),
            vec![
                MessageId::Numeric(3_158_021_375),
                MessageId::Token("abc".to_owned())
            ]
        );
    }

    #[test]
    fn gateway_error_display_handles_missing_parts() {
        let full = GatewayError {
            code: Some("internal_error".to_owned()),
            description: Some("test error".to_owned()),
        };
        assert_eq!(full.to_string(), "internal_error: test error");
        assert_eq!(GatewayError::default().to_string(), "no error details");
    }
}
