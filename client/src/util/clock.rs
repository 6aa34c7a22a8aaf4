//! Wall-clock access for schedule validation and service timestamps.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation compares a form's schedule against "now" in the user's local
//! offset. Routing that through a trait keeps the comparison testable.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{OffsetDateTime, UtcOffset};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// Current instant, expressed in the local offset.
    fn now(&self) -> OffsetDateTime;
}

/// Real clock. Uses the browser's local offset under `hydrate`, UTC otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(local_offset())
    }
}

/// Clock pinned to a single instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Convert a JS `getTimezoneOffset()` value (minutes *behind* UTC) to an offset.
pub(crate) fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    #[allow(clippy::cast_possible_truncation)]
    let seconds = (-minutes * 60.0).round() as i32;
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

fn local_offset() -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        offset_from_js_minutes(js_sys::Date::new_0().get_timezone_offset())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UtcOffset::UTC
    }
}
