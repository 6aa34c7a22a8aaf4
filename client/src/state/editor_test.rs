use super::*;
use std::sync::{Arc, Mutex};

use futures::executor::block_on;
use time::Duration;
use time::macros::{datetime, offset};

use crate::net::memory::MemoryRecordService;
use crate::net::service::{ServiceError, SnapshotListener, Subscription};
use crate::util::clock::FixedClock;

// =============================================================
// Helpers
// =============================================================

const NOW: OffsetDateTime = datetime!(2026-10-19 12:00 UTC);

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    Create(RecordFields),
    Update(RecordId, RecordFields),
    Delete(RecordId),
}

/// Service double that records every call and fails on demand.
#[derive(Default)]
struct RecordingService {
    calls: Mutex<Vec<Call>>,
    fail: bool,
}

impl RecordingService {
    fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn stored(id: RecordId, fields: RecordFields) -> Record {
        Record {
            id,
            title: fields.title,
            body: fields.body,
            date: fields.date,
            tags: fields.tags,
            created_at: NOW,
            updated_at: NOW,
        }
    }

    fn outcome<T>(&self, ok: T) -> Result<T, ServiceError> {
        if self.fail { Err(ServiceError::Unavailable("offline".to_owned())) } else { Ok(ok) }
    }
}

#[async_trait::async_trait]
impl RecordService for RecordingService {
    async fn create(&self, fields: RecordFields) -> Result<Record, ServiceError> {
        self.calls.lock().unwrap().push(Call::Create(fields.clone()));
        self.outcome(Self::stored(RecordId::new("new"), fields))
    }

    async fn update(&self, id: &RecordId, fields: RecordFields) -> Result<Record, ServiceError> {
        self.calls.lock().unwrap().push(Call::Update(id.clone(), fields.clone()));
        self.outcome(Self::stored(id.clone(), fields))
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ServiceError> {
        self.calls.lock().unwrap().push(Call::Delete(id.clone()));
        self.outcome(())
    }

    fn observe(&self, listener: SnapshotListener) -> Subscription {
        listener(Vec::new());
        Subscription::detached()
    }
}

fn filled(title: &str, body: &str) -> EditorState {
    EditorState { title: title.to_owned(), body: body.to_owned(), ..EditorState::default() }
}

fn existing_record() -> Record {
    Record {
        id: RecordId::new("r-1"),
        title: "Launch".to_owned(),
        body: "Ship it".to_owned(),
        date: Some(datetime!(2026-10-25 18:30 UTC)),
        tags: PlatformTags { twitter: false, facebook: true, instagram: false },
        created_at: NOW,
        updated_at: NOW,
    }
}

/// Run the page's submit path: validate, then dispatch on success.
fn submit_and_dispatch(editor: &mut EditorState, service: &dyn RecordService) -> Result<(), ValidationError> {
    let submission = editor.submit(NOW)?;
    block_on(dispatch(service, submission));
    Ok(())
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn empty_title_issues_no_request() {
    let service = RecordingService::default();
    let mut editor = filled("", "body");
    assert_eq!(submit_and_dispatch(&mut editor, &service), Err(ValidationError::MissingFields));
    assert!(service.calls().is_empty());
    assert_eq!(editor.body, "body");
}

#[test]
fn empty_body_issues_no_request() {
    let service = RecordingService::default();
    let mut editor = filled("title", "");
    assert_eq!(submit_and_dispatch(&mut editor, &service), Err(ValidationError::MissingFields));
    assert!(service.calls().is_empty());
}

#[test]
fn missing_fields_message_matches_alert_text() {
    assert_eq!(ValidationError::MissingFields.to_string(), "Both title and body are required");
}

// =============================================================
// Schedule
// =============================================================

#[test]
fn schedule_equal_to_now_is_rejected_without_request() {
    let service = RecordingService::default();
    let mut editor = EditorState { date: "2026-10-19".to_owned(), time: "12:00".to_owned(), ..filled("t", "b") };
    assert_eq!(submit_and_dispatch(&mut editor, &service), Err(ValidationError::ScheduleNotInFuture));
    assert!(service.calls().is_empty());
    assert_eq!(editor.date, "2026-10-19");
}

#[test]
fn schedule_in_past_is_rejected() {
    let editor = EditorState { date: "2026-10-18".to_owned(), time: "23:59".to_owned(), ..filled("t", "b") };
    assert_eq!(editor.validate(NOW), Err(ValidationError::ScheduleNotInFuture));
}

#[test]
fn schedule_one_minute_ahead_is_accepted() {
    let editor = EditorState { date: "2026-10-19".to_owned(), time: "12:01".to_owned(), ..filled("t", "b") };
    let Ok(Submission::Create(fields)) = editor.validate(NOW) else {
        panic!("expected create submission");
    };
    assert_eq!(fields.date, Some(datetime!(2026-10-19 12:01 UTC)));
}

#[test]
fn schedule_is_read_in_now_offset() {
    // 13:30 at +02:00 is 11:30 UTC, before noon UTC.
    let now = NOW.to_offset(offset!(+2));
    let editor = EditorState { date: "2026-10-19".to_owned(), time: "13:30".to_owned(), ..filled("t", "b") };
    assert_eq!(editor.validate(now), Err(ValidationError::ScheduleNotInFuture));
}

#[test]
fn date_without_time_means_midnight() {
    let editor = EditorState { date: "2026-10-19".to_owned(), ..filled("t", "b") };
    assert_eq!(editor.validate(NOW), Err(ValidationError::ScheduleNotInFuture));
    let editor = EditorState { date: "2026-10-20".to_owned(), ..filled("t", "b") };
    let Ok(Submission::Create(fields)) = editor.validate(NOW) else {
        panic!("expected create submission");
    };
    assert_eq!(fields.date, Some(datetime!(2026-10-20 00:00 UTC)));
}

#[test]
fn time_without_date_is_ignored() {
    let editor = EditorState { time: "08:00".to_owned(), ..filled("t", "b") };
    let Ok(Submission::Create(fields)) = editor.validate(NOW) else {
        panic!("expected create submission");
    };
    assert_eq!(fields.date, None);
}

#[test]
fn unparseable_schedule_is_rejected() {
    let editor = EditorState { date: "tomorrow".to_owned(), ..filled("t", "b") };
    assert!(matches!(editor.validate(NOW), Err(ValidationError::InvalidSchedule(_))));
}

// =============================================================
// Create
// =============================================================

#[test]
fn successful_create_resets_form() {
    let service = RecordingService::default();
    let mut editor = EditorState {
        date: "2026-10-20".to_owned(),
        time: "09:00".to_owned(),
        tags: PlatformTags { twitter: true, facebook: true, instagram: true },
        ..filled("Launch", "Ship it")
    };
    submit_and_dispatch(&mut editor, &service).unwrap();

    assert_eq!(editor, EditorState::default());
    assert_eq!(
        service.calls(),
        vec![Call::Create(RecordFields {
            title: "Launch".to_owned(),
            body: "Ship it".to_owned(),
            date: Some(datetime!(2026-10-20 09:00 UTC)),
            tags: PlatformTags { twitter: true, facebook: true, instagram: true },
        })]
    );
}

#[test]
fn failed_create_still_clears_form() {
    let service = RecordingService::failing();
    let mut editor = filled("t", "b");
    let submission = editor.submit(NOW).unwrap();
    assert!(block_on(dispatch(&service, submission)).is_none());
    assert_eq!(editor, EditorState::default());
    assert_eq!(service.calls().len(), 1);
}

// =============================================================
// Edit mode
// =============================================================

#[test]
fn begin_edit_copies_record_into_form() {
    let mut editor = EditorState::default();
    editor.begin_edit(&existing_record(), UtcOffset::UTC);
    assert_eq!(editor.title, "Launch");
    assert_eq!(editor.body, "Ship it");
    assert_eq!(editor.date, "2026-10-25");
    assert_eq!(editor.time, "18:30");
    assert!(editor.tags.facebook);
    assert_eq!(editor.mode, EditMode::Editing(RecordId::new("r-1")));
    assert_eq!(editor.submit_label(), "Save");
}

#[test]
fn begin_edit_then_submit_unchanged_issues_update_with_same_id() {
    let service = RecordingService::default();
    let record = existing_record();
    let mut editor = EditorState::default();
    editor.begin_edit(&record, UtcOffset::UTC);
    submit_and_dispatch(&mut editor, &service).unwrap();

    assert_eq!(service.calls(), vec![Call::Update(record.id.clone(), record.fields())]);
    assert_eq!(editor.mode, EditMode::Idle);
}

#[test]
fn seconds_precision_schedule_survives_edit_round_trip() {
    let now = datetime!(2026-10-19 12:00:10 UTC);
    let service = MemoryRecordService::with_clock(Arc::new(FixedClock(now)));
    let mut editor = EditorState { date: "2026-10-19".to_owned(), time: "12:00:30".to_owned(), ..filled("t", "b") };
    block_on(dispatch(&service, editor.submit(now).unwrap())).unwrap();

    let stored = service.snapshot().pop().unwrap();
    editor.begin_edit(&stored, UtcOffset::UTC);
    assert_eq!(editor.time, "12:00:30");

    let submission = editor.submit(now).unwrap();
    assert_eq!(submission, Submission::Update(stored.id.clone(), stored.fields()));
    assert_eq!(stored.date, Some(datetime!(2026-10-19 12:00:30 UTC)));
}

#[test]
fn begin_edit_replaces_previous_target() {
    let mut editor = EditorState::default();
    editor.begin_edit(&existing_record(), UtcOffset::UTC);
    let other = Record { id: RecordId::new("r-2"), date: None, ..existing_record() };
    editor.begin_edit(&other, UtcOffset::UTC);
    assert_eq!(editor.editing_id(), Some(&RecordId::new("r-2")));
    assert!(editor.date.is_empty());
}

#[test]
fn cancel_returns_to_idle_with_empty_form() {
    let mut editor = EditorState::default();
    editor.begin_edit(&existing_record(), UtcOffset::UTC);
    editor.cancel();
    assert_eq!(editor, EditorState::default());
    assert_eq!(editor.submit_label(), "+ New");
}

#[test]
fn rejected_submit_keeps_edit_target() {
    let mut editor = EditorState::default();
    editor.begin_edit(&existing_record(), UtcOffset::UTC);
    editor.body.clear();
    assert_eq!(editor.submit(NOW), Err(ValidationError::MissingFields));
    assert!(editor.is_editing());
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_record_sends_delete_for_id() {
    let service = RecordingService::default();
    assert!(block_on(delete_record(&service, RecordId::new("r-1"))));
    assert_eq!(service.calls(), vec![Call::Delete(RecordId::new("r-1"))]);
}

#[test]
fn delete_record_reports_failure() {
    let service = RecordingService::failing();
    assert!(!block_on(delete_record(&service, RecordId::new("r-1"))));
}

// =============================================================
// End to end against the in-process service
// =============================================================

#[test]
fn create_then_edit_round_trip_through_memory_service() {
    let service = MemoryRecordService::with_clock(Arc::new(FixedClock(NOW)));
    let mut editor = EditorState { date: (NOW + Duration::days(1)).date().to_string(), ..filled("Launch", "b") };
    submit_and_dispatch(&mut editor, &service).unwrap();

    let created = service.snapshot().pop().unwrap();
    editor.begin_edit(&created, UtcOffset::UTC);
    editor.title = "Launch v2".to_owned();
    submit_and_dispatch(&mut editor, &service).unwrap();

    let snapshot = service.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, created.id);
    assert_eq!(snapshot[0].title, "Launch v2");
    assert_eq!(snapshot[0].date, Some(datetime!(2026-10-20 00:00 UTC)));
}
