use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};

use shared_config::AppConfig;

use crate::error::SchedulingError;
use crate::models::BlockedDays;
use crate::services::{SlotService, VacationService};

/// Source of "now" for every availability computation.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(at) => *at,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Shared by the scheduling and booking routers.
pub struct SchedulingState {
    pub config: Arc<AppConfig>,
    pub clock: Clock,
    pub slots: SlotService,
    pub vacations: VacationService,
    doctor_ids: Option<BTreeSet<String>>,
}

impl SchedulingState {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, SchedulingError> {
        Self::with_clock(config, Clock::System)
    }

    pub fn with_clock(config: Arc<AppConfig>, clock: Clock) -> Result<Self, SchedulingError> {
        let slots = SlotService::from_config(&config)?;
        Ok(Self {
            config,
            clock,
            slots,
            vacations: VacationService::new(),
            doctor_ids: None,
        })
    }

    /// Restrict doctor ids to `ids`. Without a roster any id is accepted.
    pub fn with_doctor_roster<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doctor_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn ensure_known_doctor(&self, doctor_id: &str) -> Result<(), SchedulingError> {
        match &self.doctor_ids {
            Some(ids) if !ids.contains(doctor_id) => {
                Err(SchedulingError::UnknownDoctor(doctor_id.to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Like [`SchedulingState::blocked_days`], but rejects ids outside the roster.
    pub async fn known_blocked_days(&self, doctor_id: Option<&str>) -> Result<BlockedDays, SchedulingError> {
        if let Some(id) = doctor_id {
            self.ensure_known_doctor(id)?;
        }
        Ok(self.blocked_days(doctor_id).await)
    }

    /// Days blocked for `doctor_id`; no doctor means nothing is blocked.
    pub async fn blocked_days(&self, doctor_id: Option<&str>) -> BlockedDays {
        match doctor_id {
            Some(id) => self.vacations.blocked_days(id).await,
            None => BlockedDays::new(),
        }
    }
}
