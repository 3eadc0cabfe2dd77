use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::SchedulingError;
use crate::models::{BlockedDays, VacationSnapshot};
use crate::services::eligibility;

pub const MAX_VACATION_DAYS: usize = 7;

/// Vacation picker for one doctor: a pending selection capped at
/// `MAX_VACATION_DAYS`, and the confirmed days that actually block booking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VacationDaySet {
    pending: BTreeSet<NaiveDate>,
    confirmed: BTreeSet<NaiveDate>,
}

impl VacationDaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Ok(false)` when the day was already selected.
    pub fn add(&mut self, date: NaiveDate, today: NaiveDate) -> Result<bool, SchedulingError> {
        if self.pending.contains(&date) {
            return Ok(false);
        }

        let status = eligibility::classify(date, today, &BlockedDays::new());
        if !status.is_selectable() {
            return Err(SchedulingError::DayNotSelectable { date, status });
        }

        if self.pending.len() >= MAX_VACATION_DAYS {
            return Err(SchedulingError::VacationLimitReached { max: MAX_VACATION_DAYS });
        }

        Ok(self.pending.insert(date))
    }

    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.pending.remove(&date)
    }

    /// Click behaviour of the picker. Returns whether the day ends up selected.
    pub fn toggle(&mut self, date: NaiveDate, today: NaiveDate) -> Result<bool, SchedulingError> {
        if self.remove(date) {
            return Ok(false);
        }
        self.add(date, today).map(|_| true)
    }

    pub fn confirm(&mut self) -> Vec<NaiveDate> {
        self.confirmed = self.pending.clone();
        self.confirmed()
    }

    pub fn pending(&self) -> Vec<NaiveDate> {
        self.pending.iter().copied().collect()
    }

    pub fn confirmed(&self) -> Vec<NaiveDate> {
        self.confirmed.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn blocked_days(&self) -> BlockedDays {
        self.confirmed.iter().copied().collect()
    }
}

/// Vacation sets for every doctor, keyed by doctor id.
#[derive(Debug, Default)]
pub struct VacationService {
    sets: RwLock<HashMap<String, VacationDaySet>>,
}

impl VacationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self, doctor_id: &str) -> VacationSnapshot {
        let sets = self.sets.read().await;
        let set = sets.get(doctor_id).cloned().unwrap_or_default();
        to_snapshot(doctor_id, &set)
    }

    pub async fn add_day(
        &self,
        doctor_id: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<VacationSnapshot, SchedulingError> {
        let mut sets = self.sets.write().await;
        let set = sets.entry(doctor_id.to_string()).or_default();
        if set.add(date, today)? {
            debug!("Vacation day {} selected for doctor {}", date, doctor_id);
        }
        Ok(to_snapshot(doctor_id, set))
    }

    pub async fn toggle_day(
        &self,
        doctor_id: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<VacationSnapshot, SchedulingError> {
        let mut sets = self.sets.write().await;
        let set = sets.entry(doctor_id.to_string()).or_default();
        let selected = set.toggle(date, today)?;
        debug!("Vacation day {} toggled for doctor {} (selected: {})", date, doctor_id, selected);
        Ok(to_snapshot(doctor_id, set))
    }

    pub async fn remove_day(&self, doctor_id: &str, date: NaiveDate) -> (bool, VacationSnapshot) {
        let mut sets = self.sets.write().await;
        match sets.get_mut(doctor_id) {
            Some(set) => {
                let removed = set.remove(date);
                (removed, to_snapshot(doctor_id, set))
            }
            None => (false, to_snapshot(doctor_id, &VacationDaySet::new())),
        }
    }

    pub async fn confirm(&self, doctor_id: &str) -> Vec<NaiveDate> {
        let mut sets = self.sets.write().await;
        let confirmed = sets.entry(doctor_id.to_string()).or_default().confirm();
        info!("Confirmed {} vacation days for doctor {}", confirmed.len(), doctor_id);
        confirmed
    }

    pub async fn blocked_days(&self, doctor_id: &str) -> BlockedDays {
        self.sets
            .read()
            .await
            .get(doctor_id)
            .map(VacationDaySet::blocked_days)
            .unwrap_or_default()
    }
}

fn to_snapshot(doctor_id: &str, set: &VacationDaySet) -> VacationSnapshot {
    VacationSnapshot {
        doctor_id: doctor_id.to_string(),
        pending: set.pending(),
        confirmed: set.confirmed(),
        max_days: MAX_VACATION_DAYS,
    }
}
