use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidFieldError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Date parsing error: {0}")]
    DateParseError(#[from] chrono::ParseError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CpfError {
    pub fn invalid_field(field: &str, value: &str, reason: impl Into<String>) -> Self {
        CpfError::InvalidFieldError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            CpfError::InvalidFieldError { field, .. } => Some(field),
            CpfError::MissingFieldError { field } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CpfError>;
