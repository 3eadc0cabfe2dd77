use crate::error::BookingError;
use crate::models::{City, Department, Doctor};

const CITIES: &[(&str, &[&str])] = &[
    (
        "Chișinău",
        &[
            "Spitalul Clinic Municipal",
            "Spitalul Republican",
            "Medpark",
            "Spitalul de Urgență",
            "Spitalul Sfânta Treime",
        ],
    ),
    (
        "Bălți",
        &[
            "Spitalul Municipal Bălți",
            "Clinica MedExpert Bălți",
            "Clinica Sănătate Bălți",
        ],
    ),
    ("Cahul", &["Spitalul Raional Cahul", "Clinica Sănătate Cahul"]),
    ("Orhei", &["Spitalul Raional Orhei", "Clinica Orhei"]),
    ("Ungheni", &["Spitalul Raional Ungheni", "Centrul Medical Ungheni"]),
    ("Soroca", &["Spitalul Raional Soroca", "Clinica Soroca"]),
    ("Comrat", &["Spitalul Raional Comrat", "Clinica Comrat"]),
];

// (id, name, image)
const STAFF: &[(&str, &str, &str)] = &[
    ("tacu-igor", "Dr. Tacu Igor", "igordoc.jpg"),
    ("toderita-loredana", "Dr. Toderiță Loredana", "loredanadoc.jpg"),
    ("pancenco-ina", "Dr. Pancenco Ina", "inadoc.jpg"),
    ("rusnac-nichita", "Dr. Rusnac Nichita", "nichitadoc.jpg"),
];

// Specialty of each STAFF member, in the same order, per department.
const DEPARTMENTS: &[(&str, [&str; 4])] = &[
    (
        "Pediatrie",
        ["Chirurg pediatru", "Asistentă medicală", "Anesteziolog", "Terapeut"],
    ),
    (
        "Cardiologie",
        ["Cardiolog", "Asistentă cardiologie", "Anesteziolog", "Terapeut"],
    ),
    (
        "Dermatologie",
        ["Dermatolog", "Asistentă dermatologie", "Anesteziolog", "Terapeut"],
    ),
    (
        "Ortopedie",
        ["Chirurg ortoped", "Asistentă ortopedie", "Anesteziolog", "Terapeut"],
    ),
];

/// Read-only catalog behind the city -> hospital -> department -> doctor picker.
#[derive(Debug, Clone, Default)]
pub struct DirectoryService;

impl DirectoryService {
    pub fn new() -> Self {
        Self
    }

    pub fn cities(&self) -> Vec<City> {
        CITIES
            .iter()
            .map(|(name, hospitals)| City {
                name: name.to_string(),
                hospitals: hospitals.iter().map(|h| h.to_string()).collect(),
            })
            .collect()
    }

    pub fn hospitals(&self, city: &str) -> Result<Vec<String>, BookingError> {
        CITIES
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, hospitals)| hospitals.iter().map(|h| h.to_string()).collect())
            .ok_or_else(|| BookingError::NotFound(format!("City '{}'", city)))
    }

    /// Ids of every doctor, whichever department they are listed under.
    pub fn doctor_ids(&self) -> Vec<String> {
        STAFF.iter().map(|(id, _, _)| id.to_string()).collect()
    }

    pub fn departments(&self) -> Vec<String> {
        DEPARTMENTS.iter().map(|(name, _)| name.to_string()).collect()
    }

    pub fn department(&self, department: &str) -> Result<Department, BookingError> {
        let (name, specialties) = DEPARTMENTS
            .iter()
            .find(|(name, _)| *name == department)
            .ok_or_else(|| BookingError::NotFound(format!("Department '{}'", department)))?;

        let doctors = STAFF
            .iter()
            .zip(specialties.iter())
            .map(|((id, doctor_name, image), specialty)| Doctor {
                id: id.to_string(),
                name: doctor_name.to_string(),
                specialty: specialty.to_string(),
                image: image.to_string(),
            })
            .collect();

        Ok(Department {
            name: name.to_string(),
            doctors,
        })
    }

    pub fn doctors(&self, department: &str) -> Result<Vec<Doctor>, BookingError> {
        self.department(department).map(|d| d.doctors)
    }

    /// Check that the whole selection chain exists and hangs together.
    pub fn resolve_doctor(
        &self,
        city: &str,
        hospital: &str,
        department: &str,
        doctor_id: &str,
    ) -> Result<Doctor, BookingError> {
        let hospitals = self
            .hospitals(city)
            .map_err(|_| BookingError::ValidationError(format!("Unknown city '{}'", city)))?;

        if !hospitals.iter().any(|h| h == hospital) {
            return Err(BookingError::ValidationError(format!(
                "Hospital '{}' is not in {}",
                hospital, city
            )));
        }

        let doctors = self
            .doctors(department)
            .map_err(|_| BookingError::ValidationError(format!("Unknown department '{}'", department)))?;

        doctors
            .into_iter()
            .find(|d| d.id == doctor_id)
            .ok_or_else(|| {
                BookingError::ValidationError(format!(
                    "Doctor '{}' does not work in {}",
                    doctor_id, department
                ))
            })
    }
}
