use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::validation::ValidationError;

fn non_empty_trimmed(value: String, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(trimmed.to_owned())
}

fn absolute_url(value: String, field: &'static str) -> Result<String, ValidationError> {
    let value = non_empty_trimmed(value, field)?;
    match url::Url::parse(&value) {
        Ok(_) => Ok(value),
        Err(_) => Err(ValidationError::InvalidUrl { field, input: value }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Devino account login.
///
/// Invariant: non-empty after trimming.
pub struct Login(String);

impl Login {
    pub const FIELD: &'static str = "login";

    /// Create a validated [`Login`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    /// Borrow the validated login.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Devino account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient identifier (`address`), usually a phone number in international format.
///
/// The gateway does not define a strict format, so only emptiness is checked.
pub struct Address(String);

impl Address {
    /// JSON key used by the gateway (`address`).
    pub const FIELD: &'static str = "address";

    /// Create a validated [`Address`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    /// Borrow the validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender name registered for the account (`subject`).
pub struct Subject(String);

impl Subject {
    /// JSON key used by the gateway (`subject`).
    pub const FIELD: &'static str = "subject";

    /// Create a validated [`Subject`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text, used both for Viber content (`text`) and the SMS fallback.
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON key used inside the Viber content map (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Label shown on a Viber button (`caption`).
pub struct ButtonCaption(String);

impl ButtonCaption {
    pub const FIELD: &'static str = "caption";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// URL opened when the recipient taps the button (`action`).
///
/// Invariant: parses as an absolute URL. The trimmed input is kept verbatim.
pub struct ButtonAction(String);

impl ButtonAction {
    pub const FIELD: &'static str = "action";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        absolute_url(value.into(), Self::FIELD).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Publicly reachable image URL (`imageUrl`).
///
/// Invariant: parses as an absolute URL. The trimmed input is kept verbatim so the
/// gateway receives exactly what the caller passed.
pub struct ImageUrl(String);

impl ImageUrl {
    pub const FIELD: &'static str = "imageUrl";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        absolute_url(value.into(), Self::FIELD).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender address used for the SMS fallback (`smsSrcAddress`).
pub struct SmsSenderAddress(String);

impl SmsSenderAddress {
    pub const FIELD: &'static str = "smsSrcAddress";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// How long the gateway keeps trying to deliver a message, in seconds.
///
/// Invariant: at least one second.
pub struct ValidityPeriod(u32);

impl ValidityPeriod {
    /// JSON key for the Viber validity period (`validityPeriodSec`).
    pub const FIELD: &'static str = "validityPeriodSec";
    /// One day, the period applied when none is chosen.
    pub const DEFAULT_SECONDS: u32 = 86_400;

    /// Create a validated [`ValidityPeriod`].
    pub fn new(seconds: u32) -> Result<Self, ValidationError> {
        if seconds == 0 {
            return Err(ValidationError::ZeroValidityPeriod { field: Self::FIELD });
        }
        Ok(Self(seconds))
    }

    pub fn seconds(self) -> u32 {
        self.0
    }
}

impl Default for ValidityPeriod {
    fn default() -> Self {
        Self(Self::DEFAULT_SECONDS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
/// Identifier of a sent message, as returned in `providerId` by `/send`.
///
/// The gateway issues numeric ids, but the value is treated as an opaque token and
/// serialized exactly as it was received.
pub enum MessageId {
    Numeric(u64),
    Token(String),
}

impl MessageId {
    pub const FIELD: &'static str = "providerId";

    /// Create a string-valued id. Invariant: non-empty after trimming.
    pub fn token(value: impl Into<String>) -> Result<Self, ValidationError> {
        non_empty_trimmed(value.into(), Self::FIELD).map(Self::Token)
    }
}

impl From<u64> for MessageId {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Token(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Delivery priority (`priority`).
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    /// Sent as `realtime`.
    Realtime,
}

impl Priority {
    pub const FIELD: &'static str = "priority";

    /// Wire value understood by the gateway.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Realtime => "realtime",
        }
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            "realtime" => Ok(Self::Realtime),
            other => Err(ValidationError::UnknownPriority {
                input: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Shape of the Viber message body (`contentType`).
pub enum ContentType {
    Text,
    Image,
    /// Text with a button and an optional image.
    Button,
}

impl ContentType {
    pub const FIELD: &'static str = "contentType";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Button => "button",
        }
    }
}

impl FromStr for ContentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "button" => Ok(Self::Button),
            other => Err(ValidationError::UnknownContentType {
                input: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
