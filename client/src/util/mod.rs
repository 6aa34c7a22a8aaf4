//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod alert;
pub mod auth;
pub mod clock;
pub mod dark_mode;
pub mod schedule;
pub mod truncate;
