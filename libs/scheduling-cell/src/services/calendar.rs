use chrono::{Datelike, Days};
use tracing::debug;

use crate::error::SchedulingError;
use crate::models::{CalendarDay, CalendarGrid, CalendarMonth};

/// Six weeks of seven days.
pub const GRID_DAYS: usize = 42;

/// Build the month view for `month0` (0-based) of `year`.
///
/// The grid always holds 42 days and starts on the Monday on or before the
/// 1st, so leading and trailing days of the neighbouring months fill the
/// first and last rows.
pub fn generate(year: i32, month0: u32) -> Result<CalendarGrid, SchedulingError> {
    let month = CalendarMonth::new(year, month0)?;
    grid_for(month)
}

pub fn grid_for(month: CalendarMonth) -> Result<CalendarGrid, SchedulingError> {
    let first = month.first_day();
    let leading = u64::from(first.weekday().num_days_from_monday());

    let start = first
        .checked_sub_days(Days::new(leading))
        .ok_or(SchedulingError::InvalidMonth { year: month.year, month0: month.month0 })?;

    let days: Vec<CalendarDay> = start
        .iter_days()
        .take(GRID_DAYS)
        .map(|date| CalendarDay {
            date,
            in_current_month: month.contains(date),
        })
        .collect();

    // iter_days stops early only at the edge of chrono's representable range
    if days.len() != GRID_DAYS {
        return Err(SchedulingError::InvalidMonth { year: month.year, month0: month.month0 });
    }

    debug!("Generated calendar grid for {}-{:02} starting {}", month.year, month.month0 + 1, start);

    Ok(CalendarGrid {
        year: month.year,
        month0: month.month0,
        days,
    })
}
