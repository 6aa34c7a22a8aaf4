//! Body preview truncation for collapsed record cards.

#[cfg(test)]
#[path = "truncate_test.rs"]
mod truncate_test;

use std::borrow::Cow;

/// Number of body characters shown while a card is collapsed.
pub const PREVIEW_CHARS: usize = 75;

const ELLIPSIS: &str = "...";

/// First `limit` characters of `body` plus `"..."` when it is longer than
/// `limit` characters; `body` unchanged otherwise. Never splits a `char`.
pub fn truncate_body(body: &str, limit: usize) -> Cow<'_, str> {
    match body.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &body[..cut])),
        None => Cow::Borrowed(body),
    }
}

/// Whether a show more/less control is needed for `body`.
pub fn needs_toggle(body: &str, limit: usize) -> bool {
    body.chars().nth(limit).is_some()
}
