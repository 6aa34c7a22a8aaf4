//! Record editor form state and submit flow.
//!
//! DESIGN
//! ======
//! The form holds raw input text (date and time are kept as the strings the
//! inputs produce) and an edit mode. Validation turns that text into a
//! [`Submission`] without touching the network; the page then hands the
//! submission to [`dispatch`]. This split keeps every validation rule testable
//! against a plain struct.
//!
//! Mode transitions:
//!
//! ```text
//! Idle --begin_edit--> Editing(id) --submit ok | cancel--> Idle
//! ```
//!
//! ERROR HANDLING
//! ==============
//! A rejected submit leaves the form untouched. Service failures after a
//! successful submit are only logged; the form has already been cleared.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use time::{OffsetDateTime, UtcOffset};

use crate::net::service::RecordService;
use crate::net::types::{PlatformTags, Record, RecordFields, RecordId};
use crate::util::schedule::{parse_schedule, split_schedule};

/// Whether the form creates a new record or rewrites an existing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(RecordId),
}

/// Form contents for the record editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    pub title: String,
    pub body: String,
    /// Date input text (`YYYY-MM-DD`); empty means unscheduled.
    pub date: String,
    /// Time input text (`HH:MM`); ignored while `date` is empty.
    pub time: String,
    pub tags: PlatformTags,
    pub mode: EditMode,
}

/// A validated request ready to send to the data service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Create(RecordFields),
    Update(RecordId, RecordFields),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Both title and body are required")]
    MissingFields,
    #[error("Scheduled date or time is not valid: {0}")]
    InvalidSchedule(String),
    #[error("Scheduled date and time must be in the future")]
    ScheduleNotInFuture,
}

impl EditorState {
    pub fn editing_id(&self) -> Option<&RecordId> {
        match &self.mode {
            EditMode::Idle => None,
            EditMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Label for the form's primary button.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Save" } else { "+ New" }
    }

    /// Load `record` into the form and target it for update.
    ///
    /// The schedule is split into input text in `offset`, the user's local
    /// offset.
    pub fn begin_edit(&mut self, record: &Record, offset: UtcOffset) {
        let (date, time) = record
            .date
            .map(|at| split_schedule(at, offset))
            .unwrap_or_default();
        *self = Self {
            title: record.title.clone(),
            body: record.body.clone(),
            date,
            time,
            tags: record.tags,
            mode: EditMode::Editing(record.id.clone()),
        };
    }

    /// Drop any edit in progress and clear the form.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Check the form against `now` and build the request it describes.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingFields`] if title or body is empty.
    /// - [`ValidationError::InvalidSchedule`] if the date/time text does not parse.
    /// - [`ValidationError::ScheduleNotInFuture`] if the schedule is not after `now`.
    pub fn validate(&self, now: OffsetDateTime) -> Result<Submission, ValidationError> {
        if self.title.is_empty() || self.body.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let date = if self.date.trim().is_empty() {
            None
        } else {
            let at = parse_schedule(&self.date, &self.time, now.offset())
                .map_err(|e| ValidationError::InvalidSchedule(e.0))?;
            if at <= now {
                return Err(ValidationError::ScheduleNotInFuture);
            }
            Some(at)
        };

        let fields = RecordFields { title: self.title.clone(), body: self.body.clone(), date, tags: self.tags };
        Ok(match &self.mode {
            EditMode::Idle => Submission::Create(fields),
            EditMode::Editing(id) => Submission::Update(id.clone(), fields),
        })
    }

    /// Validate, then clear the form and leave edit mode.
    ///
    /// # Errors
    ///
    /// Same as [`EditorState::validate`]; on error the form is unchanged.
    pub fn submit(&mut self, now: OffsetDateTime) -> Result<Submission, ValidationError> {
        let submission = self.validate(now)?;
        self.cancel();
        Ok(submission)
    }
}

/// Send a validated submission. Returns the stored record on success.
pub async fn dispatch(service: &dyn RecordService, submission: Submission) -> Option<Record> {
    let result = match submission {
        Submission::Create(fields) => service.create(fields).await,
        Submission::Update(id, fields) => service.update(&id, fields).await,
    };
    match result {
        Ok(record) => Some(record),
        Err(e) => {
            leptos::logging::warn!("record save failed: {e}");
            None
        }
    }
}

/// Delete record `id` without confirmation. Returns whether the service accepted it.
pub async fn delete_record(service: &dyn RecordService, id: RecordId) -> bool {
    match service.delete(&id).await {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("record delete failed: {e}");
            false
        }
    }
}
