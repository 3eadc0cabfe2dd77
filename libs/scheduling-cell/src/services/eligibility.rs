use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{BlockedDays, DayStatus};

/// How far ahead `first_selectable` looks before giving up.
pub const SEARCH_HORIZON_DAYS: usize = 366;

/// Classify `date` relative to `today`. Only strictly past days count as
/// past; today itself stays selectable.
pub fn classify(date: NaiveDate, today: NaiveDate, blocked: &BlockedDays) -> DayStatus {
    if date < today {
        DayStatus::Past
    } else if date.weekday() == Weekday::Sun {
        DayStatus::Sunday
    } else if blocked.contains(date) {
        DayStatus::Blocked
    } else {
        DayStatus::Selectable
    }
}

pub fn is_selectable(date: NaiveDate, today: NaiveDate, blocked: &BlockedDays) -> bool {
    classify(date, today, blocked).is_selectable()
}

/// Earliest selectable day starting from `today`.
pub fn first_selectable(today: NaiveDate, blocked: &BlockedDays) -> Option<NaiveDate> {
    today
        .iter_days()
        .take(SEARCH_HORIZON_DAYS)
        .find(|date| is_selectable(*date, today, blocked))
}
