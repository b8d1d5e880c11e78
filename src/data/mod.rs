//! Hard-coded demo data for the MedVision prototype.
//!
//! Everything in this module is fictional and lives for the life of the
//! process. It stands in for the clinical backend a production deployment
//! would talk to; nothing the user does mutates it (the messages page keeps
//! its own local copy of the chat thread).

use chrono::NaiveDate;
use lazy_static::lazy_static;
use uuid::Uuid;

use crate::models::{
    AnalysisSnapshot, Appointment, AppointmentStatus, CaseStatus, ChatMessage, Conversation,
    DashboardStat, DemoAccount, HealthTip, PatientCase, Role, Specialist, UserProfile,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("literal date")
}

lazy_static! {
    static ref DEMO_ACCOUNTS: Vec<DemoAccount> = vec![
        DemoAccount {
            email: "patient@example.com".into(),
            role: Role::Patient,
        },
        DemoAccount {
            email: "doctor@example.com".into(),
            role: Role::Doctor,
        },
    ];

    static ref PATIENT_CASES: Vec<PatientCase> = vec![
        case("Sarah Johnson", "#P-1024", date(2024, 10, 25), CaseStatus::HighRisk),
        case("Maria Rodriguez", "#P-1025", date(2024, 10, 25), CaseStatus::LowRisk),
        case("Ahmed Ali", "#P-1026", date(2024, 10, 24), CaseStatus::Pending),
        case("Jennifer Smith", "#P-1027", date(2024, 10, 24), CaseStatus::HighRisk),
        case("Robert Chen", "#P-1028", date(2024, 10, 23), CaseStatus::LowRisk),
        case("Emily Davis", "#P-1029", date(2024, 10, 23), CaseStatus::LowRisk),
    ];

    static ref APPOINTMENTS: Vec<Appointment> = vec![
        Appointment {
            id: Uuid::new_v4(),
            doctor_name: "Dr. Emily Carter".into(),
            patient_name: "Sarah Johnson".into(),
            date: date(2024, 11, 30),
            time: "10:00 AM".into(),
            location: "Medical Center Downtown - Room 302".into(),
            reason: "Follow-up mammogram review".into(),
            status: AppointmentStatus::Upcoming,
            kind: "Consultation".into(),
        },
        Appointment {
            id: Uuid::new_v4(),
            doctor_name: "Dr. Michael Chen".into(),
            patient_name: "Maria Rodriguez".into(),
            date: date(2024, 12, 2),
            time: "2:30 PM".into(),
            location: "Imaging Center - Suite 101".into(),
            reason: "Annual screening".into(),
            status: AppointmentStatus::Upcoming,
            kind: "Screening".into(),
        },
        Appointment {
            id: Uuid::new_v4(),
            doctor_name: "Dr. Emily Carter".into(),
            patient_name: "Ahmed Ali".into(),
            date: date(2024, 10, 15),
            time: "11:00 AM".into(),
            location: "Medical Center Downtown - Room 302".into(),
            reason: "Initial consultation".into(),
            status: AppointmentStatus::Past,
            kind: "Consultation".into(),
        },
    ];

    static ref CONVERSATIONS: Vec<Conversation> = vec![
        Conversation {
            id: Uuid::new_v4(),
            sender: "Dr. Emily Carter".into(),
            sender_role: "Breast Imaging Specialist".into(),
            subject: "Follow-up on Recent Screening Results".into(),
            preview: "Hi Sarah, I wanted to follow up on your recent screening results. Everything looks normal...".into(),
            timestamp: "10:30 AM".into(),
            unread: true,
            initials: "EC".into(),
        },
        Conversation {
            id: Uuid::new_v4(),
            sender: "Medical Center Admin".into(),
            sender_role: "Administration".into(),
            subject: "Appointment Confirmation".into(),
            preview: "Your appointment has been confirmed for November 30th at 10:00 AM...".into(),
            timestamp: "Yesterday".into(),
            unread: true,
            initials: "MA".into(),
        },
        Conversation {
            id: Uuid::new_v4(),
            sender: "Dr. Michael Chen".into(),
            sender_role: "Oncology Radiologist".into(),
            subject: "Annual Screening Reminder".into(),
            preview: "It's time for your annual breast cancer screening. Please schedule an appointment...".into(),
            timestamp: "2 days ago".into(),
            unread: false,
            initials: "MC".into(),
        },
    ];

    static ref CHAT_THREAD: Vec<ChatMessage> = vec![
        chat("Dr. Emily Carter", "Hi Sarah, I wanted to follow up on your recent screening results.", "10:28 AM", false),
        chat("Dr. Emily Carter", "Everything looks normal, but I noticed a small area that we should monitor.", "10:29 AM", false),
        chat("Sarah Johnson", "Thank you for letting me know, Dr. Carter. Should I schedule a follow-up appointment?", "10:32 AM", true),
        chat("Dr. Emily Carter", "Yes, let's schedule something in about 3 months. In the meantime, please continue with monthly self-examinations.", "10:35 AM", false),
    ];

    static ref SPECIALISTS: Vec<Specialist> = vec![
        Specialist {
            name: "Dr. Emily Carter".into(),
            specialty: "Breast Imaging Specialist".into(),
            rating: 4.9,
            reviews: 248,
            location: "Medical Center Downtown".into(),
            available: true,
        },
        Specialist {
            name: "Dr. Michael Chen".into(),
            specialty: "Oncology Radiologist".into(),
            rating: 4.8,
            reviews: 312,
            location: "Central Hospital".into(),
            available: true,
        },
    ];

    static ref HEALTH_TIPS: Vec<HealthTip> = vec![
        tip("Self-Examination", "Did you know? Regular self-exams can help detect changes early. Swipe to learn how."),
        tip("Annual Screening", "Women over 40 should have annual mammograms. Early detection saves lives."),
        tip("Healthy Lifestyle", "Maintaining a healthy weight and regular exercise can reduce breast cancer risk by 20%."),
        tip("Know Your History", "Family history matters. Share your family's health history with your doctor."),
        tip("Stay Informed", "Stay up to date with the latest screening guidelines and recommendations."),
    ];

    static ref DASHBOARD_STATS: Vec<DashboardStat> = vec![
        stat("Pending Reviews", "12"),
        stat("New Uploads Today", "5"),
        stat("Total Patients", "145"),
    ];

    static ref ANALYSIS_SNAPSHOT: AnalysisSnapshot = AnalysisSnapshot {
        file_name: "scan_results.pdf".into(),
        file_size: "2.4 MB".into(),
        progress: 73,
        activity: vec![
            ("0s".into(), 20),
            ("2s".into(), 45),
            ("4s".into(), 35),
            ("6s".into(), 60),
            ("8s".into(), 55),
            ("10s".into(), 75),
            ("12s".into(), 70),
            ("14s".into(), 85),
        ],
    };

    static ref PATIENT_PROFILE: UserProfile = UserProfile {
        role: Role::Patient,
        full_name: "Sarah Johnson".into(),
        email: "sarah.johnson@email.com".into(),
        phone: "+1 (555) 123-4567".into(),
        date_of_birth: "1985-03-15".into(),
        address: "123 Main Street, San Francisco, CA 94122".into(),
        emergency_contact: Some("John Johnson".into()),
        emergency_phone: Some("+1 (555) 987-6543".into()),
        specialty: None,
        license_number: None,
        hospital: None,
    };

    static ref DOCTOR_PROFILE: UserProfile = UserProfile {
        role: Role::Doctor,
        full_name: "Dr. Emily Carter".into(),
        email: "emily.carter@medvision.com".into(),
        phone: "+1 (555) 123-4567".into(),
        date_of_birth: "1985-03-15".into(),
        address: "123 Main Street, San Francisco, CA 94122".into(),
        emergency_contact: None,
        emergency_phone: None,
        specialty: Some("Breast Imaging Specialist".into()),
        license_number: Some("MD-CA-123456".into()),
        hospital: Some("Medical Center Downtown".into()),
    };
}

fn case(name: &str, number: &str, uploaded: NaiveDate, status: CaseStatus) -> PatientCase {
    PatientCase {
        id: Uuid::new_v4(),
        name: name.into(),
        case_number: number.into(),
        uploaded,
        status,
    }
}

fn chat(sender: &str, body: &str, timestamp: &str, outgoing: bool) -> ChatMessage {
    ChatMessage {
        sender: sender.into(),
        body: body.into(),
        timestamp: timestamp.into(),
        outgoing,
    }
}

fn tip(title: &str, text: &str) -> HealthTip {
    HealthTip {
        title: title.into(),
        text: text.into(),
    }
}

fn stat(title: &str, value: &str) -> DashboardStat {
    DashboardStat {
        title: title.into(),
        value: value.into(),
    }
}

pub fn demo_accounts() -> &'static [DemoAccount] {
    &DEMO_ACCOUNTS
}

/// All screened cases, pending rows included.
pub fn patient_cases() -> &'static [PatientCase] {
    &PATIENT_CASES
}

/// Case-table rows: pending analyses are not listed.
pub fn reviewable_cases() -> Vec<&'static PatientCase> {
    PATIENT_CASES
        .iter()
        .filter(|case| case.status != CaseStatus::Pending)
        .collect()
}

pub fn dashboard_stats() -> &'static [DashboardStat] {
    &DASHBOARD_STATS
}

pub fn appointments() -> &'static [Appointment] {
    &APPOINTMENTS
}

/// Doctor choices offered by the booking dialog.
pub fn bookable_doctors() -> &'static [&'static str] {
    &[
        "Dr. Emily Carter - Breast Imaging Specialist",
        "Dr. Michael Chen - Oncology Radiologist",
        "Dr. Sarah Johnson - General Radiologist",
    ]
}

/// Time slots offered by the booking dialog.
pub fn time_slots() -> &'static [&'static str] {
    &[
        "09:00 AM", "10:00 AM", "11:00 AM", "02:00 PM", "03:00 PM", "04:00 PM",
    ]
}

pub fn conversations() -> &'static [Conversation] {
    &CONVERSATIONS
}

pub fn chat_thread() -> &'static [ChatMessage] {
    &CHAT_THREAD
}

pub fn specialists() -> &'static [Specialist] {
    &SPECIALISTS
}

pub fn health_tips() -> &'static [HealthTip] {
    &HEALTH_TIPS
}

pub fn analysis_snapshot() -> &'static AnalysisSnapshot {
    &ANALYSIS_SNAPSHOT
}

pub fn profile_for(role: Role) -> UserProfile {
    match role {
        Role::Patient => PATIENT_PROFILE.clone(),
        Role::Doctor => DOCTOR_PROFILE.clone(),
    }
}

/// Sidebar badge count for the messages entry.
pub fn unread_messages(role: Role) -> usize {
    match role {
        Role::Patient => CONVERSATIONS.iter().filter(|c| c.unread).count(),
        // The doctor inbox is not part of the mock data set.
        Role::Doctor => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_cases_are_excluded_from_the_table() {
        assert_eq!(patient_cases().len(), 6);
        let rows = reviewable_cases();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|case| case.status != CaseStatus::Pending));
    }

    #[test]
    fn ids_are_stable_across_lookups() {
        let first = conversations().first().map(|c| c.id);
        let again = conversations().first().map(|c| c.id);
        assert_eq!(first, again);
    }

    #[test]
    fn the_demo_directory_knows_both_roles() {
        assert_eq!(demo_accounts().len(), 2);
        assert!(demo_accounts().iter().any(|a| a.role == Role::Doctor));
        assert!(demo_accounts().iter().any(|a| a.role == Role::Patient));
    }

    #[test]
    fn patient_badge_counts_unread_conversations() {
        assert_eq!(unread_messages(Role::Patient), 2);
    }
}
