use thiserror::Error;

/// Failure reported by an authenticator.
///
/// Carries the human-readable message that the form shows in its top-level
/// alert. Validation problems never become an `AuthError`; they stay inside
/// the form as inline field messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
