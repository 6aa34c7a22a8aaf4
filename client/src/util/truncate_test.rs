use super::*;

#[test]
fn short_body_is_borrowed_unchanged() {
    let out = truncate_body("hello", PREVIEW_CHARS);
    assert!(matches!(out, Cow::Borrowed("hello")));
}

#[test]
fn body_at_exact_limit_is_not_truncated() {
    let body = "x".repeat(PREVIEW_CHARS);
    assert_eq!(truncate_body(&body, PREVIEW_CHARS), body.as_str());
    assert!(!needs_toggle(&body, PREVIEW_CHARS));
}

#[test]
fn long_body_keeps_limit_chars_plus_ellipsis() {
    let body = "x".repeat(300);
    let out = truncate_body(&body, PREVIEW_CHARS);
    assert_eq!(out, format!("{}...", "x".repeat(75)));
    assert!(needs_toggle(&body, PREVIEW_CHARS));
}

#[test]
fn multibyte_chars_are_counted_not_bytes() {
    let body = "é".repeat(10);
    assert_eq!(truncate_body(&body, 4), "éééé...");
    assert_eq!(truncate_body(&body, 10), body.as_str());
}

#[test]
fn empty_body_never_needs_toggle() {
    assert_eq!(truncate_body("", PREVIEW_CHARS), "");
    assert!(!needs_toggle("", PREVIEW_CHARS));
}
