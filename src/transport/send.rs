use serde_json::{Map, Value, json};

use crate::domain::{
    Address, Button, ButtonAction, ButtonCaption, ContentType, ImageUrl, MessageText, Priority,
    SendOptions, SendViber, SmsFallback, SmsSenderAddress, Subject, ValidityPeriod, ViberContent,
};

/// Channel discriminator for every message posted to `/send`.
pub const VIBER_TYPE: &str = "viber";

const MESSAGES_FIELD: &str = "messages";
const TYPE_FIELD: &str = "type";
const CONTENT_FIELD: &str = "content";
const COMMENT_FIELD: &str = "comment";
const RESEND_SMS_FIELD: &str = "resendSms";
const SMS_TEXT_FIELD: &str = "smsText";
const SMS_VALIDITY_FIELD: &str = "smsValidityPeriodSec";

/// Build the `/send` body for a single message.
///
/// Optional parts are added only when present, never as `null`.
pub fn encode_send_json(request: &SendViber) -> Value {
    let options = request.options();

    let mut message = Map::new();
    message.insert(Subject::FIELD.to_owned(), json!(request.subject().as_str()));
    message.insert(Priority::FIELD.to_owned(), json!(options.priority.as_str()));
    message.insert(TYPE_FIELD.to_owned(), json!(VIBER_TYPE));
    message.insert(
        ContentType::FIELD.to_owned(),
        json!(request.content_type().as_str()),
    );
    message.insert(Address::FIELD.to_owned(), json!(request.address().as_str()));
    message.insert(
        CONTENT_FIELD.to_owned(),
        Value::Object(encode_content(request.content())),
    );
    message.insert(
        ValidityPeriod::FIELD.to_owned(),
        json!(options.validity.seconds()),
    );
    push_comment(&mut message, options);

    let mut body = Map::new();
    body.insert(
        MESSAGES_FIELD.to_owned(),
        Value::Array(vec![Value::Object(message)]),
    );
    if let Some(fallback) = options.sms_fallback.as_ref() {
        push_sms_fallback(&mut body, fallback);
    }

    Value::Object(body)
}

fn encode_content(content: &ViberContent) -> Map<String, Value> {
    let mut map = Map::new();
    match content {
        ViberContent::Text(text) => {
            map.insert(MessageText::FIELD.to_owned(), json!(text.as_str()));
        }
        ViberContent::Image(image) => {
            map.insert(ImageUrl::FIELD.to_owned(), json!(image.as_str()));
        }
        ViberContent::Button(button) => push_button(&mut map, button),
    }
    map
}

fn push_button(map: &mut Map<String, Value>, button: &Button) {
    map.insert(MessageText::FIELD.to_owned(), json!(button.text.as_str()));
    map.insert(
        ButtonCaption::FIELD.to_owned(),
        json!(button.caption.as_str()),
    );
    map.insert(ButtonAction::FIELD.to_owned(), json!(button.action.as_str()));
    if let Some(image) = button.image.as_ref() {
        map.insert(ImageUrl::FIELD.to_owned(), json!(image.as_str()));
    }
}

fn push_comment(message: &mut Map<String, Value>, options: &SendOptions) {
    if let Some(comment) = options.comment.as_deref().filter(|it| !it.is_empty()) {
        message.insert(COMMENT_FIELD.to_owned(), json!(comment));
    }
}

fn push_sms_fallback(body: &mut Map<String, Value>, fallback: &SmsFallback) {
    if let Some(validity) = fallback.validity {
        body.insert(SMS_VALIDITY_FIELD.to_owned(), json!(validity.seconds()));
    }
    body.insert(RESEND_SMS_FIELD.to_owned(), json!(true));
    body.insert(SMS_TEXT_FIELD.to_owned(), json!(fallback.text.as_str()));
    body.insert(
        SmsSenderAddress::FIELD.to_owned(),
        json!(fallback.src_address.as_str()),
    );
}

#[cfg(test)]
mod tests {
    use crate::domain::{SendOptions, SmsFallback};

    use super::*;

    fn address() -> Address {
        Address::new("test phone number").unwrap()
    }

    fn subject() -> Subject {
        Subject::new("your subject").unwrap()
    }

    #[test]
    fn encode_text_message_base_shape() {
        let request = SendViber::text(address(), subject(), MessageText::new("test text").unwrap());

        assert_eq!(
            encode_send_json(&request),
            json!({
                "messages": [{
                    "subject": "your subject",
                    "priority": "normal",
                    "type": "viber",
                    "contentType": "text",
                    "address": "test phone number",
                    "content": {"text": "test text"},
                    "validityPeriodSec": 86400
                }]
            })
        );
    }

    #[test]
    fn encode_sms_fallback_and_comment() {
        let fallback = SmsFallback::new(
            MessageText::new("test sms text").unwrap(),
            SmsSenderAddress::new("test number of sender").unwrap(),
        )
        .with_validity(ValidityPeriod::new(86_400).unwrap());
        let options = SendOptions {
            priority: Priority::High,
            validity: ValidityPeriod::new(84_600).unwrap(),
            sms_fallback: Some(fallback),
            comment: Some("test comment".to_owned()),
        };
        let request = SendViber::text(address(), subject(), MessageText::new("hi").unwrap())
            .with_options(options);

        let body = encode_send_json(&request);
        assert_eq!(body["smsValidityPeriodSec"], json!(86400));
        assert_eq!(body["resendSms"], json!(true));
        assert_eq!(body["smsText"], json!("test sms text"));
        assert_eq!(body["smsSrcAddress"], json!("test number of sender"));

        let message = &body["messages"][0];
        assert_eq!(message["priority"], json!("high"));
        assert_eq!(message["validityPeriodSec"], json!(84600));
        assert_eq!(message["comment"], json!("test comment"));
    }

    #[test]
    fn encode_sms_fallback_without_validity_omits_only_validity() {
        let fallback = SmsFallback::new(
            MessageText::new("sms").unwrap(),
            SmsSenderAddress::new("sender").unwrap(),
        );
        let options = SendOptions {
            sms_fallback: Some(fallback),
            ..Default::default()
        };
        let request = SendViber::text(address(), subject(), MessageText::new("hi").unwrap())
            .with_options(options);

        let body = encode_send_json(&request);
        let top = body.as_object().unwrap();
        assert!(!top.contains_key("smsValidityPeriodSec"));
        assert_eq!(top["resendSms"], json!(true));
        assert!(top.contains_key("smsText"));
        assert!(top.contains_key("smsSrcAddress"));
    }

    #[test]
    fn encode_without_fallback_has_no_sms_keys() {
        let options = SendOptions {
            comment: Some(String::new()),
            ..Default::default()
        };
        let request = SendViber::text(address(), subject(), MessageText::new("hi").unwrap())
            .with_options(options);

        let body = encode_send_json(&request);
        let top = body.as_object().unwrap();
        assert_eq!(top.keys().collect::<Vec<_>>(), vec!["messages"]);
        assert!(body["messages"][0].get("comment").is_none());
    }

    #[test]
    fn encode_image_content_only_has_image_url() {
        let request = SendViber::image(
            address(),
            subject(),
            ImageUrl::new("http://test.test/test_image.jpeg").unwrap(),
        );

        let body = encode_send_json(&request);
        assert_eq!(body["messages"][0]["contentType"], json!("image"));
        assert_eq!(
            body["messages"][0]["content"],
            json!({"imageUrl": "http://test.test/test_image.jpeg"})
        );
    }

    #[test]
    fn encode_button_content_with_and_without_image() {
        let mut button = Button {
            text: MessageText::new("test text").unwrap(),
            caption: ButtonCaption::new("test text button").unwrap(),
            action: ButtonAction::new("http://test.test/url_for_button").unwrap(),
            image: Some(ImageUrl::new("http://test.test/test_image.jpeg").unwrap()),
        };

        let request = SendViber::button(address(), subject(), button.clone());
        let body = encode_send_json(&request);
        assert_eq!(body["messages"][0]["contentType"], json!("button"));
        assert_eq!(
            body["messages"][0]["content"],
            json!({
                "text": "test text",
                "caption": "test text button",
                "action": "http://test.test/url_for_button",
                "imageUrl": "http://test.test/test_image.jpeg"
            })
        );

        button.image = None;
        let request = SendViber::button(address(), subject(), button);
        let body = encode_send_json(&request);
        assert!(body["messages"][0]["content"].get("imageUrl").is_none());
    }
}
