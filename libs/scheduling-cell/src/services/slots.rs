use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use tracing::debug;

use shared_config::AppConfig;

use crate::error::SchedulingError;
use crate::models::{hhmm, AppointmentSlot, BlockedDays};

/// Produces the bookable hours for a day from a fixed candidate list.
#[derive(Debug, Clone)]
pub struct SlotService {
    candidates: Vec<NaiveTime>,
}

impl SlotService {
    pub fn new<S: AsRef<str>>(hours: &[S]) -> Result<Self, SchedulingError> {
        let mut candidates = hours
            .iter()
            .map(|raw| {
                let raw = raw.as_ref();
                hhmm::parse(raw).map_err(|_| SchedulingError::InvalidHour(raw.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        candidates.sort();
        candidates.dedup();

        Ok(Self { candidates })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, SchedulingError> {
        Self::new(&config.slot_hours)
    }

    pub fn candidates(&self) -> &[NaiveTime] {
        &self.candidates
    }

    /// Sundays and past days get nothing, today only keeps hours strictly
    /// after `now`, any later day gets the full list.
    pub fn available_slots(&self, date: NaiveDate, now: NaiveDateTime) -> Vec<AppointmentSlot> {
        if date.weekday() == Weekday::Sun {
            return Vec::new();
        }

        let today = now.date();
        if date < today {
            return Vec::new();
        }

        let slots: Vec<AppointmentSlot> = self
            .candidates
            .iter()
            .filter(|hour| date > today || **hour > now.time())
            .map(|hour| AppointmentSlot::new(date, *hour))
            .collect();

        debug!("{} slots available on {}", slots.len(), date);
        slots
    }

    pub fn available_slots_for(
        &self,
        date: NaiveDate,
        now: NaiveDateTime,
        blocked: &BlockedDays,
    ) -> Vec<AppointmentSlot> {
        if blocked.contains(date) {
            debug!("{} is blocked, no slots", date);
            return Vec::new();
        }

        self.available_slots(date, now)
    }

    pub fn is_available(
        &self,
        date: NaiveDate,
        hour: NaiveTime,
        now: NaiveDateTime,
        blocked: &BlockedDays,
    ) -> bool {
        self.available_slots_for(date, now, blocked)
            .iter()
            .any(|slot| slot.hour == hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_config::DEFAULT_SLOT_HOURS;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(day: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        day.and_hms_opt(h, m, 0).unwrap()
    }

    fn service() -> SlotService {
        SlotService::new(&DEFAULT_SLOT_HOURS).unwrap()
    }

    #[test]
    fn candidates_are_sorted_and_deduplicated() {
        let service = SlotService::new(&["16:30", "08:00", "16:30", "09:30"]).unwrap();
        let labels: Vec<String> = service
            .candidates()
            .iter()
            .map(|t| t.format("%H:%M").to_string())
            .collect();
        assert_eq!(labels, vec!["08:00", "09:30", "16:30"]);
    }

    #[test]
    fn malformed_hour_is_rejected() {
        let err = SlotService::new(&["8 o'clock"]).unwrap_err();
        assert_eq!(err, SchedulingError::InvalidHour("8 o'clock".to_string()));
    }

    #[test]
    fn future_weekday_gets_full_list() {
        let now = at(date(2025, 6, 16), 12, 0);
        let slots = service().available_slots(date(2025, 6, 18), now);
        assert_eq!(slots.len(), DEFAULT_SLOT_HOURS.len());
    }

    #[test]
    fn sunday_is_empty_even_when_it_is_today() {
        let sunday = date(2025, 6, 15);
        assert!(service().available_slots(sunday, at(sunday, 6, 0)).is_empty());
        assert!(service().available_slots(sunday, at(date(2025, 6, 10), 6, 0)).is_empty());
    }

    #[test]
    fn today_drops_elapsed_and_current_hours() {
        let today = date(2025, 6, 16);
        let now = at(today, 14, 30);
        let hours: Vec<String> = service()
            .available_slots(today, now)
            .iter()
            .map(|s| s.hour_label())
            .collect();
        assert_eq!(hours, vec!["15:00", "16:00", "16:30"]);
    }

    #[test]
    fn past_day_is_empty() {
        let now = at(date(2025, 6, 16), 7, 0);
        assert!(service().available_slots(date(2025, 6, 13), now).is_empty());
    }

    #[test]
    fn blocked_day_is_empty() {
        let now = at(date(2025, 6, 16), 7, 0);
        let blocked: BlockedDays = [date(2025, 6, 17)].into_iter().collect();
        let service = service();
        assert!(service.available_slots_for(date(2025, 6, 17), now, &blocked).is_empty());
        assert!(!service.is_available(
            date(2025, 6, 17),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            now,
            &blocked
        ));
    }
}
