//! Live record list and per-card display state.
//!
//! DESIGN
//! ======
//! `items` is always the last snapshot the data service pushed, replaced
//! wholesale; there is no local merge. Expansion flags are pure presentation
//! keyed by record id and are never sent anywhere.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use std::borrow::Cow;
use std::collections::HashSet;

use crate::net::types::{Record, RecordId};
use crate::util::truncate::{PREVIEW_CHARS, needs_toggle, truncate_body};

/// Record list state fed by the snapshot subscription.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordsState {
    pub items: Vec<Record>,
    pub expanded: HashSet<RecordId>,
    /// True until the first snapshot arrives.
    pub loading: bool,
}

impl Default for RecordsState {
    fn default() -> Self {
        Self { items: Vec::new(), expanded: HashSet::new(), loading: true }
    }
}

impl RecordsState {
    /// Replace the list with `items`. Expansion flags of records that are no
    /// longer present are dropped.
    pub fn apply_snapshot(&mut self, items: Vec<Record>) {
        let present: HashSet<&RecordId> = items.iter().map(|r| &r.id).collect();
        self.expanded.retain(|id| present.contains(id));
        self.items = items;
        self.loading = false;
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expanded.contains(id)
    }

    pub fn toggle_expanded(&mut self, id: &RecordId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.items.iter().find(|r| &r.id == id)
    }

    /// Body text to render for `record`: full when expanded, else a preview.
    pub fn display_body<'a>(&self, record: &'a Record) -> Cow<'a, str> {
        if self.is_expanded(&record.id) {
            Cow::Borrowed(record.body.as_str())
        } else {
            truncate_body(&record.body, PREVIEW_CHARS)
        }
    }

    /// Label for the card's show more/less control, or `None` when the body
    /// fits in the preview.
    pub fn toggle_label(&self, record: &Record) -> Option<&'static str> {
        if !needs_toggle(&record.body, PREVIEW_CHARS) {
            return None;
        }
        Some(if self.is_expanded(&record.id) { "Show less" } else { "Show more" })
    }
}
