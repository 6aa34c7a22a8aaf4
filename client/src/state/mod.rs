//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `editor`, `records`, `ui`) so individual
//! components can depend on small focused models. Each is provided to the
//! component tree as an `RwSignal` context.

pub mod auth;
pub mod editor;
pub mod records;
pub mod ui;
