//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor chrome and record surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod record_card;
pub mod record_form;
pub mod record_list;
pub mod sidebar;
pub mod toolbar;
