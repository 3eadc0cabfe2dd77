pub mod calendar;
pub mod eligibility;
pub mod slots;
pub mod vacation;

pub use slots::SlotService;
pub use vacation::{VacationDaySet, VacationService, MAX_VACATION_DAYS};
