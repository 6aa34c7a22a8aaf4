//! Data-service interface for records.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record store is an external, real-time service. The UI only needs four
//! things from it: a snapshot subscription plus create, full-replace update
//! and delete. Keeping that behind a trait lets the editor and list logic run
//! against [`crate::net::memory::MemoryRecordService`] in tests and local runs.
//!
//! ERROR HANDLING
//! ==============
//! Mutations return typed [`ServiceError`]s. Callers in the UI treat them as
//! fire-and-forget: failures are logged, never retried or rolled back. The
//! next snapshot is the only success signal.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use super::types::{Record, RecordFields, RecordId};

/// Callback receiving the full, service-ordered record set.
pub type SnapshotListener = Arc<dyn Fn(Vec<Record>) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("record not found: {0}")]
    NotFound(RecordId),
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Remote record store with push-based snapshots.
#[async_trait::async_trait]
pub trait RecordService: Send + Sync {
    /// Create a record; the service assigns its id.
    async fn create(&self, fields: RecordFields) -> Result<Record, ServiceError>;

    /// Replace every editable field of record `id`.
    async fn update(&self, id: &RecordId, fields: RecordFields) -> Result<Record, ServiceError>;

    async fn delete(&self, id: &RecordId) -> Result<(), ServiceError>;

    /// Register `listener` for snapshots. The current snapshot is delivered
    /// before this returns, then again after every change until the returned
    /// [`Subscription`] is cancelled or dropped.
    fn observe(&self, listener: SnapshotListener) -> Subscription;
}

/// Live snapshot subscription. Unregisters its listener on drop.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { teardown: Some(Box::new(teardown)) }
    }

    /// A subscription with nothing to tear down.
    pub fn detached() -> Self {
        Self { teardown: None }
    }

    pub fn cancel(mut self) {
        self.run_teardown();
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.teardown.is_some()).finish()
    }
}

/// Shared handle to the injected record service, provided via Leptos context.
#[derive(Clone)]
pub struct RecordServiceHandle(Arc<dyn RecordService>);

impl RecordServiceHandle {
    pub fn new(service: impl RecordService + 'static) -> Self {
        Self(Arc::new(service))
    }

    pub fn from_arc(service: Arc<dyn RecordService>) -> Self {
        Self(service)
    }
}

impl Deref for RecordServiceHandle {
    type Target = dyn RecordService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for RecordServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RecordServiceHandle")
    }
}
