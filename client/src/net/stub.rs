//! Timer-backed stand-ins for the clinic services.
//!
//! TRADE-OFFS
//! ==========
//! The stubs never fail and ignore their inputs: every well-formed login
//! succeeds, every chat message gets the same scripted answer, and slots do
//! not vary by date. They exist so the UI flow can be exercised end to end
//! before any backend exists; they must not be mistaken for real services.

#[cfg(test)]
#[path = "stub_test.rs"]
mod stub_test;

use std::time::Duration;

use time::Date;

use super::api::{AuthClient, CHAT_ENDPOINT, ChatClient, LOGIN_ENDPOINT, SchedulingClient, slots_endpoint};
use super::error::ClinicError;
use super::types::{ApiOutcome, ChatReply, ChatRequest, Credentials, TimeSlot};
use crate::state::booking::default_time_slots;
use crate::util::timer::sleep;

/// Simulated latency of the login call.
pub const LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// Simulated latency before the assistant answers.
pub const CHAT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// The assistant's only answer.
pub const SCRIPTED_REPLY: &str =
    "Thanks for your message. I'll help you book an appointment with Dr. Ajith. Would you prefer morning or afternoon?";

/// Accepts any credentials after [`LOGIN_DELAY`].
#[derive(Clone, Debug)]
pub struct StubAuthClient {
    delay: Duration,
}

impl StubAuthClient {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StubAuthClient {
    fn default() -> Self {
        Self::new(LOGIN_DELAY)
    }
}

#[async_trait::async_trait(?Send)]
impl AuthClient for StubAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<(), ClinicError> {
        log::debug!("stub {LOGIN_ENDPOINT} for {}", credentials.email);
        sleep(self.delay).await;
        ApiOutcome::Ok.into_result(ClinicError::Auth)
    }
}

/// Answers every message with [`SCRIPTED_REPLY`] after [`CHAT_REPLY_DELAY`].
#[derive(Clone, Debug)]
pub struct StubChatClient {
    delay: Duration,
}

impl StubChatClient {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StubChatClient {
    fn default() -> Self {
        Self::new(CHAT_REPLY_DELAY)
    }
}

#[async_trait::async_trait(?Send)]
impl ChatClient for StubChatClient {
    async fn reply(&self, message: &str) -> Result<String, ClinicError> {
        let request = ChatRequest { text: message.to_owned() };
        log::debug!("stub {CHAT_ENDPOINT} queued for {} byte message", request.text.len());
        sleep(self.delay).await;
        let response = ChatReply { reply: SCRIPTED_REPLY.to_owned() };
        Ok(response.reply)
    }
}

/// Returns the same slot list for every date, immediately.
#[derive(Clone, Debug)]
pub struct StubSchedulingClient {
    slots: Vec<TimeSlot>,
}

impl StubSchedulingClient {
    #[must_use]
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        Self { slots }
    }
}

impl Default for StubSchedulingClient {
    fn default() -> Self {
        Self::new(default_time_slots())
    }
}

#[async_trait::async_trait(?Send)]
impl SchedulingClient for StubSchedulingClient {
    async fn available_slots(&self, date: Date) -> Result<Vec<TimeSlot>, ClinicError> {
        log::debug!("stub {}", slots_endpoint(date));
        Ok(self.slots.clone())
    }
}
