use thiserror::Error;

/// A verification call that did not produce a result: a non-success status,
/// an unreadable success body, or a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VerificationRequestError {
    pub message: String,
}

impl VerificationRequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for VerificationRequestError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(format!("Could not reach the verification service: {}", e))
    }
}

/// A token that does not carry a verification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no certificate data available")]
pub struct DecodeFailure;
