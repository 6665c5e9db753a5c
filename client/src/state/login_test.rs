use super::*;
use crate::net::api::AuthClient;
use crate::net::stub::StubAuthClient;
use futures::executor::block_on;
use std::time::Duration;

fn filled(email: &str, password: &str) -> LoginState {
    LoginState { email: email.to_owned(), password: password.to_owned(), ..LoginState::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn login_state_default_idle() {
    let state = LoginState::default();
    assert_eq!(state.status(), LoginStatus::Idle);
    assert!(state.error.is_none());
    assert_eq!(state.button_label(), "Login");
}

// =============================================================
// submit: validation
// =============================================================

#[test]
fn submit_with_empty_email_sets_error_and_stays_idle() {
    let mut state = filled("", "secret");
    assert_eq!(state.submit(), Err(ClinicError::Validation));
    assert_eq!(state.status(), LoginStatus::Idle);
    assert_eq!(state.error.as_deref(), Some("Please fill in all fields"));
}

#[test]
fn submit_with_empty_password_sets_error_and_stays_idle() {
    let mut state = filled("a@b.com", "");
    assert!(state.submit().is_err());
    assert!(!state.loading);
    assert!(state.error.as_deref().is_some_and(|e| !e.is_empty()));
}

#[test]
fn submit_with_both_empty_sets_error() {
    let mut state = LoginState::default();
    assert_eq!(state.submit(), Err(ClinicError::Validation));
    assert!(!state.loading);
}

#[test]
fn whitespace_counts_as_filled() {
    let mut state = filled(" ", " ");
    assert!(state.submit().is_ok());
    assert_eq!(state.status(), LoginStatus::Submitting);
}

// =============================================================
// submit: success path
// =============================================================

#[test]
fn submit_clears_previous_error_and_enters_submitting() {
    let mut state = filled("", "pw");
    let _ = state.submit();
    state.email = "a@b.com".to_owned();
    let creds = state.submit().unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "pw");
    assert!(state.error.is_none());
    assert_eq!(state.status(), LoginStatus::Submitting);
    assert_eq!(state.button_label(), "Logging in...");
}

#[test]
fn submit_while_submitting_is_rejected_without_change() {
    let mut state = filled("a@b.com", "pw");
    state.submit().unwrap();
    let before = state.clone();
    assert_eq!(state.submit(), Err(ClinicError::SubmitInProgress));
    assert_eq!(state, before);
}

// =============================================================
// complete
// =============================================================

#[test]
fn complete_ok_returns_dashboard_path() {
    let mut state = filled("a@b.com", "pw");
    state.submit().unwrap();
    assert_eq!(state.complete(Ok(())), Some("/dashboard"));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn complete_err_surfaces_user_message() {
    let mut state = filled("a@b.com", "pw");
    state.submit().unwrap();
    assert_eq!(state.complete(Err(ClinicError::Auth("rejected".to_owned()))), None);
    assert_eq!(state.status(), LoginStatus::Idle);
    assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
}

#[test]
fn any_filled_form_reaches_dashboard_with_stub_client() {
    let client = StubAuthClient::new(Duration::ZERO);
    for (email, password) in [("a@b.com", "pw"), ("nobody", "x"), ("x@y", "long password with spaces")] {
        let mut state = filled(email, password);
        let creds = state.submit().unwrap();
        let result = block_on(client.login(&creds));
        assert_eq!(state.complete(result), Some(DASHBOARD_PATH));
    }
}
