use chrono::NaiveDate;
use thiserror::Error;

use shared_models::error::AppError;

use crate::models::DayStatus;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("Invalid month {month0} (0-based) for year {year}")]
    InvalidMonth { year: i32, month0: u32 },

    #[error("Invalid slot hour '{0}', expected HH:MM")]
    InvalidHour(String),

    #[error("{date} cannot be selected: day is {status}")]
    DayNotSelectable { date: NaiveDate, status: DayStatus },

    #[error("At most {max} vacation days can be selected")]
    VacationLimitReached { max: usize },

    #[error("Doctor '{0}' not found")]
    UnknownDoctor(String),
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::InvalidMonth { .. } | SchedulingError::InvalidHour(_) => {
                AppError::BadRequest(err.to_string())
            }
            SchedulingError::UnknownDoctor(_) => AppError::NotFound(err.to_string()),
            SchedulingError::DayNotSelectable { .. }
            | SchedulingError::VacationLimitReached { .. } => {
                AppError::ValidationError(err.to_string())
            }
        }
    }
}
