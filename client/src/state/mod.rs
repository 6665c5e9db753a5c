//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by component (`booking`, `chat`, `login`) so each owner
//! holds a small focused model. Nothing here is global: pages create the
//! signals and pass them down.

pub mod booking;
pub mod chat;
pub mod login;
