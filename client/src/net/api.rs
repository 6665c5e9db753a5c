//! Async client contracts for the external clinic services.
//!
//! DESIGN
//! ======
//! UI components depend only on these traits. The shipped implementations in
//! [`super::stub`] stand in for the network with fixed delays; a real backend
//! client or a test double can be swapped in through component props without
//! touching rendering code.
//!
//! Futures are `?Send` because they run on the single-threaded browser event
//! loop; the client objects themselves are `Send + Sync` so they can be
//! captured by reactive closures.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use time::Date;

use super::error::ClinicError;
use super::types::{Credentials, TimeSlot};
use crate::util::date_value::format_date_value;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const BOOKING_ENDPOINT: &str = "/appointments";
pub const CHAT_ENDPOINT: &str = "/chat/message";

/// `GET /appointments/slots?date=YYYY-MM-DD`.
#[must_use]
pub fn slots_endpoint(date: Date) -> String {
    format!("/appointments/slots?date={}", format_date_value(date))
}

/// Authentication service.
#[async_trait::async_trait(?Send)]
pub trait AuthClient: Send + Sync {
    /// Verify credentials. `Ok` means the browser may proceed to the dashboard.
    async fn login(&self, credentials: &Credentials) -> Result<(), ClinicError>;
}

/// Conversational assistant backend.
#[async_trait::async_trait(?Send)]
pub trait ChatClient: Send + Sync {
    /// Produce the assistant's answer to one user message.
    async fn reply(&self, message: &str) -> Result<String, ClinicError>;
}

/// Appointment availability.
#[async_trait::async_trait(?Send)]
pub trait SchedulingClient: Send + Sync {
    /// Slots offered on `date`, in display order.
    async fn available_slots(&self, date: Date) -> Result<Vec<TimeSlot>, ClinicError>;
}
