//! Domain models for the MedVision prototype.
//!
//! Everything here is plain data: mock entities are static literal records
//! owned by the `data` registry and are never created, updated, or deleted
//! through the UI.

pub mod appointment;
pub mod message;
pub mod patient;

pub use appointment::{Appointment, AppointmentStatus, Specialist};
pub use message::{ChatMessage, Conversation};
pub use patient::{CaseStatus, PatientCase};

use serde::{Deserialize, Serialize};
use strum::Display;

/// Account role selected at login/signup; switches which UI shell and
/// fields are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
}

/// Logical pages reachable through in-memory navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Page {
    Login,
    Signup,
    DoctorDashboard,
    PatientDashboard,
    Appointments,
    Messages,
    Profile,
    Settings,
    Screening,
}

/// A demo sign-in known to the mock directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoAccount {
    pub email: String,
    pub role: Role,
}

/// Profile record backing the profile page for either role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub role: Role,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String, // YYYY-MM-DD
    pub address: String,
    // Patient-only
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    // Doctor-only
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub hospital: Option<String>,
}

impl UserProfile {
    /// Initials shown in the avatar placeholder, e.g. "Sarah Johnson" -> "SJ".
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// One stat tile on the doctor dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
}

/// One entry of the patient-dashboard tip carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthTip {
    pub title: String,
    pub text: String,
}

/// Snapshot of the in-flight analysis shown on the patient dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub file_name: String,
    pub file_size: String,
    pub progress: u8,
    /// AI processing activity series, label -> value.
    pub activity: Vec<(String, u32)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_match_navigation_keys() {
        assert_eq!(Page::DoctorDashboard.to_string(), "doctor-dashboard");
        assert_eq!(Page::Screening.to_string(), "screening");
    }

    #[test]
    fn initials_collapse_to_leading_letters() {
        let profile = UserProfile {
            role: Role::Patient,
            full_name: "Sarah Johnson".into(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: String::new(),
            address: String::new(),
            emergency_contact: None,
            emergency_phone: None,
            specialty: None,
            license_number: None,
            hospital: None,
        };
        assert_eq!(profile.initials(), "SJ");
    }
}
