use thiserror::Error;

/// Failures that stop an event from producing a response.
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Invalid intent: {0}")]
    UnrecognizedIntent(String),

    #[error("Invalid Application ID: {0}")]
    InvalidApplicationId(String),

    #[error("Failed to parse skill event: {0}")]
    InvalidEvent(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SkillError {
    fn from(error: serde_json::Error) -> Self {
        SkillError::InvalidEvent(error.to_string())
    }
}

/// A `When` slot value that is not an ISO calendar date.
///
/// Recovered by asking the user for another day; never reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date format: {0}")]
pub struct InvalidDateFormat(pub String);
