//! Login form state: field values, inline error, and the loading flag.
//!
//! DESIGN
//! ======
//! Two states, derived from `loading`: `Idle` and `Submitting`. `submit`
//! either rejects with a validation error (loading never turns on) or enters
//! `Submitting` and hands back the credentials for the auth client.
//! `complete` leaves `Submitting` and yields the redirect target on success.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::error::ClinicError;
use crate::net::types::Credentials;
use crate::util::navigation::DASHBOARD_PATH;

/// Coarse form status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginStatus {
    Idle,
    Submitting,
}

/// Login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl LoginState {
    #[must_use]
    pub fn status(&self) -> LoginStatus {
        if self.loading { LoginStatus::Submitting } else { LoginStatus::Idle }
    }

    /// Start a submit attempt.
    ///
    /// # Errors
    ///
    /// - [`ClinicError::SubmitInProgress`] while a previous attempt is pending
    ///   (state untouched).
    /// - [`ClinicError::Validation`] when either field is empty; the inline
    ///   error is set and the form stays `Idle`.
    pub fn submit(&mut self) -> Result<Credentials, ClinicError> {
        if self.loading {
            return Err(ClinicError::SubmitInProgress);
        }
        self.error = None;
        if self.email.is_empty() || self.password.is_empty() {
            let err = ClinicError::Validation;
            self.error = Some(err.user_message().to_owned());
            return Err(err);
        }
        self.loading = true;
        log::debug!("login submitting for {}", self.email);
        Ok(Credentials { email: self.email.clone(), password: self.password.clone() })
    }

    /// Finish a submit attempt with the auth client's verdict.
    ///
    /// Returns the path to navigate to on success.
    pub fn complete(&mut self, result: Result<(), ClinicError>) -> Option<&'static str> {
        self.loading = false;
        match result {
            Ok(()) => {
                self.error = None;
                Some(DASHBOARD_PATH)
            }
            Err(err) => {
                log::warn!("login failed: {} ({err})", err.error_code());
                self.error = Some(err.user_message().to_owned());
                None
            }
        }
    }

    /// Label for the submit button.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.loading { "Logging in..." } else { "Login" }
    }
}
