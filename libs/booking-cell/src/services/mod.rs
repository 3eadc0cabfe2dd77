pub mod appointments;
pub mod directory;

pub use appointments::AppointmentBook;
pub use directory::DirectoryService;
