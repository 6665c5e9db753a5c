//! Error taxonomy for the clinic UI.
//!
//! ERROR HANDLING
//! ==============
//! Every variant maps to one inline, user-visible message. Nothing here is
//! retried by the UI layer; a real service client owns any retry policy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors surfaced by UI state transitions and service clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClinicError {
    /// A required login field was empty.
    #[error("required field missing")]
    Validation,

    /// A login submit arrived while another one was still pending.
    #[error("login already in progress")]
    SubmitInProgress,

    /// The date control produced a value that is not a calendar date.
    #[error("invalid date value: {0:?}")]
    InvalidDate(String),

    /// The auth service rejected the credentials.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A service could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The requested slot was taken or closed.
    #[error("slot unavailable: {0}")]
    SlotUnavailable(String),

    /// The assistant backend failed to answer.
    #[error("chat service error: {0}")]
    ChatService(String),
}

impl ClinicError {
    /// Stable machine-readable code for logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation => "E_VALIDATION",
            Self::SubmitInProgress => "E_SUBMIT_IN_PROGRESS",
            Self::InvalidDate(_) => "E_INVALID_DATE",
            Self::Auth(_) => "E_AUTH",
            Self::Network(_) => "E_NETWORK",
            Self::SlotUnavailable(_) => "E_SLOT_UNAVAILABLE",
            Self::ChatService(_) => "E_CHAT_SERVICE",
        }
    }

    /// Text shown inline to the user.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation => "Please fill in all fields",
            Self::SubmitInProgress => "Login already in progress",
            Self::InvalidDate(_) => "Please choose a valid date",
            Self::Auth(_) => "Invalid email or password",
            Self::Network(_) => "Unable to reach the clinic. Please try again.",
            Self::SlotUnavailable(_) => "That time slot is no longer available",
            Self::ChatService(_) => "The assistant is unavailable right now",
        }
    }
}
