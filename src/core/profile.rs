//! Profile page: view/edit toggle over the role's mock profile.

use tracing::info;

use crate::core::validate::{self, FieldErrors};
use crate::data;
use crate::models::{Role, UserProfile};

#[derive(Debug, Clone)]
pub struct ProfileView {
    saved: UserProfile,
    /// Working copy while editing.
    pub draft: UserProfile,
    pub editing: bool,
    pub errors: FieldErrors,
}

impl ProfileView {
    pub fn new(role: Role) -> Self {
        let profile = data::profile_for(role);
        Self {
            draft: profile.clone(),
            saved: profile,
            editing: false,
            errors: FieldErrors::new(),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.saved
    }

    pub fn begin_edit(&mut self) {
        self.draft = self.saved.clone();
        self.errors.clear();
        self.editing = true;
    }

    /// Discard the draft and leave edit mode.
    pub fn cancel(&mut self) {
        self.draft = self.saved.clone();
        self.errors.clear();
        self.editing = false;
    }

    pub fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.draft.full_name.trim().is_empty() {
            errors.insert("full_name".into(), "Full name is required".into());
        }
        if let Err(failure) = validate::required_email(&self.draft.email) {
            if let Some(message) = failure.message {
                errors.insert("email".into(), message.to_string());
            }
        }
        if let Err(failure) = validate::required_phone(&self.draft.phone) {
            if let Some(message) = failure.message {
                errors.insert("phone".into(), message.to_string());
            }
        }
        errors
    }

    /// Persist the draft in memory; true leaves edit mode.
    pub fn save(&mut self) -> bool {
        let errors = self.validate();
        if errors.is_empty() {
            self.saved = self.draft.clone();
            self.errors.clear();
            self.editing = false;
            info!(name = %self.saved.full_name, "profile updated (in-memory)");
            true
        } else {
            self.errors = errors;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_match_the_role() {
        let patient = ProfileView::new(Role::Patient);
        assert_eq!(patient.profile().full_name, "Sarah Johnson");
        assert!(patient.profile().specialty.is_none());

        let doctor = ProfileView::new(Role::Doctor);
        assert_eq!(doctor.profile().full_name, "Dr. Emily Carter");
        assert!(doctor.profile().specialty.is_some());
    }

    #[test]
    fn saving_a_malformed_email_keeps_edit_mode() {
        let mut view = ProfileView::new(Role::Patient);
        view.begin_edit();
        view.draft.email = "broken@address".into();
        assert!(!view.save());
        assert!(view.editing);
        assert_eq!(view.errors.get("email").map(String::as_str), Some("Invalid email format"));
        // The saved profile is untouched.
        assert_ne!(view.profile().email, "broken@address");
    }

    #[test]
    fn saving_a_valid_draft_replaces_the_profile() {
        let mut view = ProfileView::new(Role::Patient);
        view.begin_edit();
        view.draft.phone = "+1 (555) 222-3344".into();
        assert!(view.save());
        assert!(!view.editing);
        assert_eq!(view.profile().phone, "+1 (555) 222-3344");
    }

    #[test]
    fn cancel_restores_the_last_saved_values() {
        let mut view = ProfileView::new(Role::Patient);
        view.begin_edit();
        view.draft.full_name = "Someone Else".into();
        view.cancel();
        assert_eq!(view.draft.full_name, view.profile().full_name);
        assert!(!view.editing);
    }
}
