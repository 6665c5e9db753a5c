//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and interaction surfaces from state
//! signals handed down by the owning page; none of them reach for global
//! context.

pub mod chat_widget;
pub mod date_picker;
pub mod doctor_card;
pub mod navbar;
pub mod time_slot_picker;
