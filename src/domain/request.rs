use crate::domain::validation::ValidationError;
use crate::domain::value::{
    Address, ButtonAction, ButtonCaption, ContentType, ImageUrl, MessageId, MessageText, Priority,
    SmsSenderAddress, Subject, ValidityPeriod,
};

/// Options shared by every send operation.
///
/// The default matches what the gateway expects for an ordinary message: normal
/// priority, a one-day validity period, no SMS fallback and no comment.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    pub priority: Priority,
    pub validity: ValidityPeriod,
    pub sms_fallback: Option<SmsFallback>,
    /// Free-form note stored with the message; empty strings are not sent.
    pub comment: Option<String>,
}

/// Resend the message as an SMS if Viber delivery fails.
#[derive(Debug, Clone)]
pub struct SmsFallback {
    pub text: MessageText,
    pub src_address: SmsSenderAddress,
    pub validity: Option<ValidityPeriod>,
}

impl SmsFallback {
    pub fn new(text: MessageText, src_address: SmsSenderAddress) -> Self {
        Self {
            text,
            src_address,
            validity: None,
        }
    }

    pub fn with_validity(mut self, validity: ValidityPeriod) -> Self {
        self.validity = Some(validity);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    pub text: MessageText,
    pub caption: ButtonCaption,
    pub action: ButtonAction,
    pub image: Option<ImageUrl>,
}

/// Message body. The variant decides the `contentType` sent to the gateway.
#[derive(Debug, Clone)]
pub enum ViberContent {
    Text(MessageText),
    Image(ImageUrl),
    Button(Button),
}

impl ViberContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Text(_) => ContentType::Text,
            Self::Image(_) => ContentType::Image,
            Self::Button(_) => ContentType::Button,
        }
    }
}

/// A single Viber message addressed to one recipient.
#[derive(Debug, Clone)]
pub struct SendViber {
    address: Address,
    subject: Subject,
    content: ViberContent,
    options: SendOptions,
}

impl SendViber {
    pub fn new(
        address: Address,
        subject: Subject,
        content: ViberContent,
        options: SendOptions,
    ) -> Self {
        Self {
            address,
            subject,
            content,
            options,
        }
    }

    pub fn text(address: Address, subject: Subject, text: MessageText) -> Self {
        Self::new(
            address,
            subject,
            ViberContent::Text(text),
            SendOptions::default(),
        )
    }

    pub fn image(address: Address, subject: Subject, image: ImageUrl) -> Self {
        Self::new(
            address,
            subject,
            ViberContent::Image(image),
            SendOptions::default(),
        )
    }

    pub fn button(address: Address, subject: Subject, button: Button) -> Self {
        Self::new(
            address,
            subject,
            ViberContent::Button(button),
            SendOptions::default(),
        )
    }

    pub fn with_options(mut self, options: SendOptions) -> Self {
        self.options = options;
        self
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn content(&self) -> &ViberContent {
        &self.content
    }

    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// Status query for previously sent messages.
///
/// Invariant: at least one id; order is preserved on the wire.
#[derive(Debug, Clone)]
pub struct CheckStatus {
    message_ids: Vec<MessageId>,
}

impl CheckStatus {
    pub fn new(message_ids: Vec<MessageId>) -> Result<Self, ValidationError> {
        if message_ids.is_empty() {
            return Err(ValidationError::Empty {
                field: MessageId::FIELD,
            });
        }
        Ok(Self { message_ids })
    }

    pub fn one(message_id: MessageId) -> Self {
        Self {
            message_ids: vec![message_id],
        }
    }

    pub fn message_ids(&self) -> &[MessageId] {
        &self.message_ids
    }
}
