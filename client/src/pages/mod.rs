//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signals and a `TaskScope` for simulated-latency
//! work, and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
