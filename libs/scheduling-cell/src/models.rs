use std::collections::BTreeSet;

use chrono::{Datelike, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::SchedulingError;

/// One cell of the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
}

/// A displayed month. `month0` is 0-based (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month0: u32,
    #[serde(skip)]
    first_day: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month0: u32) -> Result<Self, SchedulingError> {
        if month0 > 11 {
            return Err(SchedulingError::InvalidMonth { year, month0 });
        }

        let first_day = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .ok_or(SchedulingError::InvalidMonth { year, month0 })?;

        Ok(Self { year, month0, first_day })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    pub fn next(&self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(Self::containing)
    }

    pub fn previous(&self) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(Self::containing)
    }
}

/// The 6x7 Monday-first grid for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub year: i32,
    pub month0: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarGrid {
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|day| day.date)
    }
}

/// Why a day can or cannot be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Selectable,
    Past,
    Sunday,
    Blocked,
}

impl DayStatus {
    pub fn is_selectable(self) -> bool {
        self == DayStatus::Selectable
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Selectable => write!(f, "selectable"),
            DayStatus::Past => write!(f, "in the past"),
            DayStatus::Sunday => write!(f, "a Sunday"),
            DayStatus::Blocked => write!(f, "blocked"),
        }
    }
}

/// Dates explicitly taken out of booking, e.g. confirmed vacation days.
/// Past days and Sundays are excluded by the eligibility predicate itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedDays(BTreeSet<NaiveDate>);

impl BlockedDays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.0.insert(date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.0.iter()
    }
}

impl FromIterator<NaiveDate> for BlockedDays {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A bookable time on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AppointmentSlot {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub hour: NaiveTime,
}

impl AppointmentSlot {
    pub fn new(date: NaiveDate, hour: NaiveTime) -> Self {
        Self { date, hour }
    }

    pub fn hour_label(&self) -> String {
        self.hour.format(hhmm::FORMAT).to_string()
    }
}

/// `NaiveTime` <-> "HH:MM".
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    pub fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(raw.trim(), FORMAT)
    }

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoctorQuery {
    pub doctor_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotQuery {
    pub date: NaiveDate,
    pub doctor_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationDayRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationSnapshot {
    pub doctor_id: String,
    pub pending: Vec<NaiveDate>,
    pub confirmed: Vec<NaiveDate>,
    pub max_days: usize,
}
