use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_name: String,
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: String, // e.g., "10:00 AM"
    pub location: String,
    pub reason: String,
    pub status: AppointmentStatus,
    pub kind: String, // e.g., "Consultation", "Screening"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Past,
    Canceled,
}

/// A bookable specialist shown in the patient actions panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialist {
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    pub available: bool,
}
