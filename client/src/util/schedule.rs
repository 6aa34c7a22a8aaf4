//! Conversions between schedule instants and `<input type="date|time">` text.
//!
//! Date inputs produce `YYYY-MM-DD`, time inputs produce `HH:MM` (some
//! browsers append `:SS`). Both are interpreted in the caller-supplied offset.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

const DATE_INPUT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_INPUT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");
const TIME_INPUT_SECONDS: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");
const CARD_DISPLAY: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Schedule text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid schedule input: {0}")]
pub struct ScheduleParseError(pub String);

/// Combine date and time input text into an instant in `offset`.
///
/// Empty `time` means midnight.
///
/// # Errors
///
/// Returns [`ScheduleParseError`] when either text is not a valid input value.
pub fn parse_schedule(date: &str, time: &str, offset: UtcOffset) -> Result<OffsetDateTime, ScheduleParseError> {
    let date = Date::parse(date.trim(), DATE_INPUT).map_err(|_| ScheduleParseError(date.to_owned()))?;
    let time = parse_time_input(time)?;
    Ok(PrimitiveDateTime::new(date, time).assume_offset(offset))
}

fn parse_time_input(raw: &str) -> Result<Time, ScheduleParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Time::MIDNIGHT);
    }
    Time::parse(raw, TIME_INPUT)
        .or_else(|_| Time::parse(raw, TIME_INPUT_SECONDS))
        .map_err(|_| ScheduleParseError(raw.to_owned()))
}

/// Split an instant into date and time input text, expressed in `offset`.
///
/// Seconds are kept when non-zero so the text parses back to the same instant.
pub fn split_schedule(at: OffsetDateTime, offset: UtcOffset) -> (String, String) {
    let local = at.to_offset(offset);
    let date = local.date().format(DATE_INPUT).unwrap_or_default();
    let format = if local.second() == 0 { TIME_INPUT } else { TIME_INPUT_SECONDS };
    let time = local.time().format(format).unwrap_or_default();
    (date, time)
}

/// Short human-readable form for record cards, expressed in `offset`.
pub fn format_for_card(at: OffsetDateTime, offset: UtcOffset) -> String {
    at.to_offset(offset).format(CARD_DISPLAY).unwrap_or_default()
}
