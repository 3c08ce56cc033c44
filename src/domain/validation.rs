use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidUrl { field: &'static str, input: String },
    UnknownPriority { input: String },
    UnknownContentType { input: String },
    ZeroValidityPeriod { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidUrl { field, input } => write!(f, "{field} is not a valid URL: {input}"),
            Self::UnknownPriority { input } => write!(
                f,
                "unknown priority: {input} (expected low, normal, high or realtime)"
            ),
            Self::UnknownContentType { input } => write!(
                f,
                "unknown content type: {input} (expected text, image or button)"
            ),
            Self::ZeroValidityPeriod { field } => {
                write!(f, "{field} must be at least one second")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
