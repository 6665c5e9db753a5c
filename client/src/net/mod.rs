//! Service-client seams for the clinic backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` declares the async client traits and endpoint paths, `types` the wire
//! schema a real backend would speak, `error` the user-facing error taxonomy,
//! and `stub` the timer-backed clients the UI ships with today.

pub mod api;
pub mod error;
pub mod stub;
pub mod types;
