use thiserror::Error;

/// Shown whenever a submission is missing a required selection.
pub const REQUIRED_FIELDS_WARNING: &str = "Please fill all required fields";

/// Failures of the text-generation provider. All of them surface to the user
/// the same way, through their `Display` text.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API key not configured: set GOOGLE_API_KEY (or API_KEY) or add it to the config file")]
    MissingApiKey,
    #[error("{0}")]
    Transport(String),
    #[error("{status}: {message}")]
    Status { status: u16, message: String },
    #[error("Invalid response from model: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum SchemeError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl SchemeError {
    pub fn validation() -> Self {
        SchemeError::Validation(REQUIRED_FIELDS_WARNING.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchemeError>;
