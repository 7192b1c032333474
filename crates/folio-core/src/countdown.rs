//! Birthday countdown
//!
//! Computes the time remaining until the next occurrence of a
//! month/day anniversary, rolling over to next year once the date has
//! passed.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Next occurrence of `month`/`day` at midnight UTC, strictly after `now`
/// unless today is the day itself. Returns `None` for an invalid date.
pub fn next_birthday(month: u32, day: u32, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let this_year = Utc.with_ymd_and_hms(now.year(), month, day, 0, 0, 0).single()?;

    if this_year >= now || (now.month() == month && now.day() == day) {
        Some(this_year)
    } else {
        Utc.with_ymd_and_hms(now.year() + 1, month, day, 0, 0, 0).single()
    }
}

/// Break the span from `now` to `target` into days/hours/minutes/seconds.
/// A target in the past yields all zeros.
pub fn countdown_to(target: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    let total = (target - now).num_seconds().max(0);

    Countdown {
        days: total / 86_400,
        hours: (total % 86_400) / 3_600,
        minutes: (total % 3_600) / 60,
        seconds: total % 60,
    }
}
