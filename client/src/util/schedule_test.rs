use super::*;
use time::macros::{datetime, offset};

#[test]
fn parse_schedule_combines_date_and_time_in_offset() {
    let at = parse_schedule("2026-10-20", "09:30", offset!(+2)).unwrap();
    assert_eq!(at, datetime!(2026-10-20 09:30 +2));
    assert_eq!(at, datetime!(2026-10-20 07:30 UTC));
}

#[test]
fn parse_schedule_accepts_seconds() {
    let at = parse_schedule("2026-10-20", "09:30:15", UtcOffset::UTC).unwrap();
    assert_eq!(at, datetime!(2026-10-20 09:30:15 UTC));
}

#[test]
fn parse_schedule_empty_time_is_midnight() {
    let at = parse_schedule("2026-10-20", "", UtcOffset::UTC).unwrap();
    assert_eq!(at, datetime!(2026-10-20 00:00 UTC));
}

#[test]
fn parse_schedule_rejects_malformed_date() {
    assert!(parse_schedule("20-10-2026", "09:30", UtcOffset::UTC).is_err());
    assert!(parse_schedule("2026-02-30", "09:30", UtcOffset::UTC).is_err());
}

#[test]
fn parse_schedule_rejects_malformed_time() {
    let err = parse_schedule("2026-10-20", "25:00", UtcOffset::UTC).unwrap_err();
    assert_eq!(err, ScheduleParseError("25:00".to_owned()));
}

#[test]
fn split_schedule_renders_input_text_in_offset() {
    let (date, time) = split_schedule(datetime!(2026-10-20 23:30 UTC), offset!(+1));
    assert_eq!(date, "2026-10-21");
    assert_eq!(time, "00:30");
}

#[test]
fn split_then_parse_recovers_minute_precision_instant() {
    let at = datetime!(2026-12-01 18:45 -5);
    let (date, time) = split_schedule(at, offset!(-5));
    assert_eq!(parse_schedule(&date, &time, offset!(-5)).unwrap(), at);
}

#[test]
fn split_keeps_non_zero_seconds() {
    let at = datetime!(2026-10-19 12:00:30 UTC);
    let (date, time) = split_schedule(at, UtcOffset::UTC);
    assert_eq!(time, "12:00:30");
    assert_eq!(parse_schedule(&date, &time, UtcOffset::UTC).unwrap(), at);
}

#[test]
fn format_for_card_uses_offset() {
    assert_eq!(format_for_card(datetime!(2026-10-20 09:05 UTC), UtcOffset::UTC), "2026-10-20 09:05");
}
