//! In-process record service.
//!
//! DESIGN
//! ======
//! Stands in for the hosted data service in local runs and tests. Records are
//! kept in creation order, which is the order snapshots are pushed in. Every
//! successful mutation pushes the whole set to every listener; there are no
//! deltas.
//!
//! Listeners are invoked after the state lock is released, so a listener may
//! call back into the service. Each snapshot carries the generation it was
//! read at, and a listener never receives a snapshot older than one it has
//! already seen.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use super::service::{RecordService, ServiceError, SnapshotListener, Subscription};
use super::types::{Record, RecordFields, RecordId};
use crate::util::clock::{Clock, SystemClock};

#[derive(Default)]
struct Inner {
    records: Vec<Record>,
    /// Bumped on every successful mutation.
    generation: u64,
    listeners: Vec<Arc<ListenerSlot>>,
    next_listener_id: u64,
}

/// A registered listener plus the newest generation handed to it.
struct ListenerSlot {
    id: u64,
    listener: SnapshotListener,
    /// Generation + 1 of the last delivered snapshot; 0 before the first.
    delivered: AtomicU64,
}

impl ListenerSlot {
    fn new(id: u64, listener: SnapshotListener) -> Self {
        Self { id, listener, delivered: AtomicU64::new(0) }
    }

    /// Hand `records` (read at `generation`) to the listener unless a newer
    /// snapshot already went out.
    fn deliver(&self, generation: u64, records: Vec<Record>) {
        let mark = generation + 1;
        if self.delivered.fetch_max(mark, Ordering::SeqCst) < mark {
            (self.listener)(records);
        }
    }
}

/// Record service backed by process memory.
#[derive(Clone)]
pub struct MemoryRecordService {
    inner: Arc<Mutex<Inner>>,
    clock: Arc<dyn Clock>,
}

impl Default for MemoryRecordService {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecordService {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Service whose `created_at`/`updated_at` stamps come from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { inner: Arc::new(Mutex::new(Inner::default())), clock }
    }

    /// Current snapshot, in service order.
    pub fn snapshot(&self) -> Vec<Record> {
        lock(&self.inner).records.clone()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    fn publish(&self) {
        let (generation, records, listeners) = {
            let inner = lock(&self.inner);
            (inner.generation, inner.records.clone(), inner.listeners.clone())
        };
        for slot in listeners {
            slot.deliver(generation, records.clone());
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

fn check_required(fields: &RecordFields) -> Result<(), ServiceError> {
    if fields.title.is_empty() {
        return Err(ServiceError::Rejected("title is required".to_owned()));
    }
    if fields.body.is_empty() {
        return Err(ServiceError::Rejected("body is required".to_owned()));
    }
    Ok(())
}

#[async_trait::async_trait]
impl RecordService for MemoryRecordService {
    async fn create(&self, fields: RecordFields) -> Result<Record, ServiceError> {
        check_required(&fields)?;
        let now = self.clock.now();
        let record = Record {
            id: RecordId::generate(),
            title: fields.title,
            body: fields.body,
            date: fields.date,
            tags: fields.tags,
            created_at: now,
            updated_at: now,
        };
        {
            let mut inner = lock(&self.inner);
            inner.records.push(record.clone());
            inner.generation += 1;
        }
        self.publish();
        Ok(record)
    }

    async fn update(&self, id: &RecordId, fields: RecordFields) -> Result<Record, ServiceError> {
        check_required(&fields)?;
        let now = self.clock.now();
        let updated = {
            let mut inner = lock(&self.inner);
            let record = inner
                .records
                .iter_mut()
                .find(|r| &r.id == id)
                .ok_or_else(|| ServiceError::NotFound(id.clone()))?;
            record.title = fields.title;
            record.body = fields.body;
            record.date = fields.date;
            record.tags = fields.tags;
            record.updated_at = now;
            let updated = record.clone();
            inner.generation += 1;
            updated
        };
        self.publish();
        Ok(updated)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ServiceError> {
        {
            let mut inner = lock(&self.inner);
            let before = inner.records.len();
            inner.records.retain(|r| &r.id != id);
            if inner.records.len() == before {
                return Err(ServiceError::NotFound(id.clone()));
            }
            inner.generation += 1;
        }
        self.publish();
        Ok(())
    }

    fn observe(&self, listener: SnapshotListener) -> Subscription {
        let (slot, generation, records) = {
            let mut inner = lock(&self.inner);
            let slot = Arc::new(ListenerSlot::new(inner.next_listener_id, listener));
            inner.next_listener_id += 1;
            inner.listeners.push(Arc::clone(&slot));
            (slot, inner.generation, inner.records.clone())
        };
        slot.deliver(generation, records);
        let listener_id = slot.id;

        let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).listeners.retain(|slot| slot.id != listener_id);
            }
        })
    }
}
