use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use scheduling_cell::models::{hhmm, BlockedDays};
use scheduling_cell::services::{eligibility, SlotService};

use crate::error::BookingError;
use crate::models::{Appointment, AppointmentStatus, BookAppointmentRequest};
use crate::services::directory::DirectoryService;

/// In-memory appointment store.
#[derive(Debug, Default)]
pub struct AppointmentBook {
    appointments: RwLock<HashMap<Uuid, Appointment>>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book an appointment after validating the selection chain, the day and
    /// the hour against the slots generated for that day.
    pub async fn book(
        &self,
        request: BookAppointmentRequest,
        directory: &DirectoryService,
        slots: &SlotService,
        now: NaiveDateTime,
        blocked: &BlockedDays,
    ) -> Result<Appointment, BookingError> {
        debug!("Booking {} with {} on {} at {}", request.department, request.doctor_id, request.date, request.hour);

        let doctor = directory.resolve_doctor(
            &request.city,
            &request.hospital,
            &request.department,
            &request.doctor_id,
        )?;

        let hour = hhmm::parse(&request.hour).map_err(|_| {
            BookingError::ValidationError(format!("Invalid hour '{}', expected HH:MM", request.hour))
        })?;

        let status = eligibility::classify(request.date, now.date(), blocked);
        if !status.is_selectable() {
            return Err(BookingError::ValidationError(format!(
                "{} cannot be booked: day is {}",
                request.date, status
            )));
        }

        if !slots.is_available(request.date, hour, now, blocked) {
            return Err(BookingError::ValidationError(format!(
                "{} is not an available hour on {}",
                request.hour, request.date
            )));
        }

        let mut appointments = self.appointments.write().await;

        let taken = appointments.values().any(|a| {
            a.status.is_active() && a.doctor_id == doctor.id && a.date == request.date && a.hour == hour
        });
        if taken {
            return Err(BookingError::Conflict(format!(
                "{} is already booked on {} at {}",
                doctor.name, request.date, request.hour
            )));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            city: request.city,
            hospital: request.hospital,
            department: request.department,
            doctor_id: doctor.id,
            doctor_name: doctor.name,
            doctor_specialty: doctor.specialty,
            date: request.date,
            hour,
            status: AppointmentStatus::Upcoming,
            details: request.details.filter(|d| !d.trim().is_empty()),
            reason: None,
            created_at: Utc::now(),
        };

        appointments.insert(appointment.id, appointment.clone());
        info!("Appointment {} booked with {}", appointment.id, appointment.doctor_name);

        Ok(appointment)
    }

    /// All appointments, or only those with `status`, ordered by date and hour.
    pub async fn list(&self, status: Option<AppointmentStatus>) -> Vec<Appointment> {
        let appointments = self.appointments.read().await;
        let mut result: Vec<Appointment> = appointments
            .values()
            .filter(|a| status.map_or(true, |s| a.status == s))
            .cloned()
            .collect();
        result.sort_by_key(|a| (a.date, a.hour, a.created_at));
        result
    }

    pub async fn get(&self, id: Uuid) -> Result<Appointment, BookingError> {
        self.appointments
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| BookingError::NotFound(format!("Appointment {}", id)))
    }

    pub async fn cancel(&self, id: Uuid, reason: &str) -> Result<Appointment, BookingError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(BookingError::ValidationError(
                "A reason is required to cancel an appointment".to_string(),
            ));
        }

        self.transition(id, AppointmentStatus::Cancelled, Some(reason.to_string()))
            .await
    }

    pub async fn complete(&self, id: Uuid) -> Result<Appointment, BookingError> {
        self.transition(id, AppointmentStatus::Completed, None).await
    }

    async fn transition(
        &self,
        id: Uuid,
        to: AppointmentStatus,
        reason: Option<String>,
    ) -> Result<Appointment, BookingError> {
        let mut appointments = self.appointments.write().await;
        let appointment = appointments
            .get_mut(&id)
            .ok_or_else(|| BookingError::NotFound(format!("Appointment {}", id)))?;

        if !appointment.status.is_active() {
            return Err(BookingError::Conflict(format!(
                "Appointment is already {}",
                appointment.status
            )));
        }

        appointment.status = to;
        if reason.is_some() {
            appointment.reason = reason;
        }
        info!("Appointment {} is now {}", id, to);

        Ok(appointment.clone())
    }
}
