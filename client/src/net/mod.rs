//! Networking and external-collaborator modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `service` defines the record data-service interface, `memory` is its
//! in-process implementation, `api` talks to the authentication provider, and
//! `types` defines the shared record/user schema.

pub mod api;
pub mod memory;
pub mod service;
pub mod types;
