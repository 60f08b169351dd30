use thiserror::Error;

#[derive(Error, Debug)]
pub enum NestlyError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API request failed ({status}): {message}")]
    ApiResponseError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Booking not confirmed after {attempts} attempts")]
    CommitFailed {
        attempts: u32,
        #[source]
        source: Box<NestlyError>,
    },
}

impl NestlyError {
    /// True when a payment has been captured but the booking could not be
    /// persisted. Callers must present support-contact guidance for this
    /// case instead of a plain validation message.
    pub fn is_commit_failure(&self) -> bool {
        matches!(self, NestlyError::CommitFailed { .. })
    }
}

pub type Result<T> = std::result::Result<T, NestlyError>;
