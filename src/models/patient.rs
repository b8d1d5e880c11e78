use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A screened case row on the doctor dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientCase {
    pub id: Uuid,
    pub name: String,
    pub case_number: String, // e.g., "#P-1024"
    pub uploaded: NaiveDate,
    pub status: CaseStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    HighRisk,
    LowRisk,
    Pending,
}

impl CaseStatus {
    /// Status text as rendered in the case table.
    pub fn display_text(&self) -> &'static str {
        match self {
            CaseStatus::HighRisk => "AI: High Risk (Further Review)",
            CaseStatus::LowRisk => "AI: Low Risk (Benign Indicator)",
            CaseStatus::Pending => "AI Analysis in Progress...",
        }
    }

    /// Call-to-action label for the row; pending cases are not reviewable.
    pub fn action_label(&self) -> &'static str {
        match self {
            CaseStatus::HighRisk => "Review Case",
            CaseStatus::LowRisk | CaseStatus::Pending => "View Details",
        }
    }
}

impl PatientCase {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}
