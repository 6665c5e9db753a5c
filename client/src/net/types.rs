//! Wire schema for the clinic backend contracts.
//!
//! These shapes describe what a real auth, scheduling, and assistant service
//! would exchange with the UI. The stub clients never serialize them; they are
//! the contract a network-backed client implements against.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ClinicError;

/// Email + password pair submitted by the login form (`POST /auth/login`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `{ok|error}` body shared by login and booking responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ApiOutcome {
    Ok,
    Error { message: String },
}

impl ApiOutcome {
    /// Convert to a `Result`, wrapping the server message with `on_error`.
    ///
    /// # Errors
    ///
    /// Returns `on_error(message)` for the `error` variant.
    pub fn into_result(self, on_error: fn(String) -> ClinicError) -> Result<(), ClinicError> {
        match self {
            Self::Ok => Ok(()),
            Self::Error { message } => Err(on_error(message)),
        }
    }
}

/// A bookable time label with a fixed availability flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}

impl TimeSlot {
    #[must_use]
    pub fn new(time: &str, available: bool) -> Self {
        Self { time: time.to_owned(), available }
    }

    /// Whether the slot may be clicked at all.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.available
    }
}

/// `POST /appointments` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
}

/// `POST /chat/message` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// `POST /chat/message` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
