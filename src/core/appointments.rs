//! Appointments page state: view mode, status filter, booking drafts.

use strum::{Display, EnumIter};
use tracing::info;
use validator::Validate;

use crate::core::validate::{self, FieldErrors};
use crate::models::{Appointment, AppointmentStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
#[strum(serialize_all = "title_case")]
pub enum StatusFilter {
    #[default]
    All,
    Upcoming,
    Past,
    Canceled,
}

impl StatusFilter {
    pub fn matches(&self, status: AppointmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Upcoming => status == AppointmentStatus::Upcoming,
            StatusFilter::Past => status == AppointmentStatus::Past,
            StatusFilter::Canceled => status == AppointmentStatus::Canceled,
        }
    }
}

/// The "book new appointment" dialog form. Nothing is persisted: a valid
/// confirmation just closes the dialog, the mock list never changes.
#[derive(Debug, Default, Clone, Validate)]
pub struct BookingDraft {
    #[validate(length(min = 1, message = "Please choose a doctor"))]
    pub doctor: String,
    #[validate(length(min = 1, message = "Please pick a date"))]
    pub date: String, // YYYY-MM-DD
    #[validate(length(min = 1, message = "Please select a time"))]
    pub time: String,
    #[validate(length(min = 1, message = "Please describe the reason for your visit"))]
    pub reason: String,
}

#[derive(Debug, Default, Clone)]
pub struct AppointmentsView {
    pub mode: ViewMode,
    pub filter: StatusFilter,
    /// Some while the booking dialog is open.
    pub booking: Option<BookingDraft>,
    pub booking_errors: FieldErrors,
}

impl AppointmentsView {
    pub fn open_booking(&mut self) {
        self.booking = Some(BookingDraft::default());
        self.booking_errors.clear();
    }

    pub fn close_booking(&mut self) {
        self.booking = None;
        self.booking_errors.clear();
    }

    pub fn clear_booking_error(&mut self, field: &str) {
        self.booking_errors.remove(field);
    }

    /// Confirm the open draft; true closes the dialog.
    pub fn confirm_booking(&mut self) -> bool {
        let Some(draft) = &self.booking else {
            return false;
        };
        let errors = validate::collect(draft.validate());
        if errors.is_empty() {
            info!(doctor = %draft.doctor, date = %draft.date, "appointment booked (demo)");
            self.booking = None;
            self.booking_errors.clear();
            true
        } else {
            self.booking_errors = errors;
            false
        }
    }

    pub fn filtered<'a>(&self, all: &'a [Appointment]) -> Vec<&'a Appointment> {
        all.iter()
            .filter(|appointment| self.filter.matches(appointment.status))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn the_all_filter_keeps_everything() {
        let view = AppointmentsView::default();
        assert_eq!(view.filtered(data::appointments()).len(), data::appointments().len());
    }

    #[test]
    fn status_filters_partition_the_list() {
        let mut view = AppointmentsView::default();
        view.filter = StatusFilter::Upcoming;
        assert!(view
            .filtered(data::appointments())
            .iter()
            .all(|a| a.status == AppointmentStatus::Upcoming));

        view.filter = StatusFilter::Canceled;
        assert!(view.filtered(data::appointments()).is_empty());
    }

    #[test]
    fn an_empty_draft_cannot_be_confirmed() {
        let mut view = AppointmentsView::default();
        view.open_booking();
        assert!(!view.confirm_booking());
        for field in ["doctor", "date", "time", "reason"] {
            assert!(view.booking_errors.contains_key(field), "missing {field}");
        }
        assert!(view.booking.is_some());
    }

    #[test]
    fn a_complete_draft_confirms_and_closes_the_dialog() {
        let mut view = AppointmentsView::default();
        view.open_booking();
        if let Some(draft) = view.booking.as_mut() {
            draft.doctor = "Dr. Emily Carter - Breast Imaging Specialist".into();
            draft.date = "2024-12-05".into();
            draft.time = "10:00 AM".into();
            draft.reason = "Follow-up".into();
        }
        assert!(view.confirm_booking());
        assert!(view.booking.is_none());
        assert!(view.booking_errors.is_empty());
    }
}
