//! Settings page: preference toggles and the password-change dialog.

use strum::{Display, EnumIter};
use tracing::info;

use crate::core::validate::{self, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Language {
    #[default]
    English,
    #[strum(serialize = "Español")]
    Spanish,
    #[strum(serialize = "Français")]
    French,
    #[strum(serialize = "Deutsch")]
    German,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Timezone {
    #[default]
    #[strum(serialize = "Pacific Time (PST)")]
    Pacific,
    #[strum(serialize = "Mountain Time (MST)")]
    Mountain,
    #[strum(serialize = "Central Time (CST)")]
    Central,
    #[strum(serialize = "Eastern Time (EST)")]
    Eastern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
#[strum(serialize_all = "title_case")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

/// In-memory account preferences; defaults mirror the demo account.
#[derive(Debug, Clone)]
pub struct Preferences {
    pub language: Language,
    pub timezone: Timezone,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub app_notifications: bool,
    pub appointment_reminders: bool,
    pub results_notifications: bool,
    pub marketing_emails: bool,
    pub data_sharing: bool,
    pub profile_visibility: Visibility,
    pub two_factor_auth: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::English,
            timezone: Timezone::Pacific,
            email_notifications: true,
            sms_notifications: false,
            app_notifications: true,
            appointment_reminders: true,
            results_notifications: true,
            marketing_emails: false,
            data_sharing: true,
            profile_visibility: Visibility::Private,
            two_factor_auth: true,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct PasswordChange {
    pub current: String,
    pub new_password: String,
    pub confirm: String,
}

#[derive(Debug, Default, Clone)]
pub struct SettingsView {
    pub prefs: Preferences,
    /// Some while the change-password dialog is open.
    pub password: Option<PasswordChange>,
    pub password_errors: FieldErrors,
    pub confirm_delete: bool,
}

impl SettingsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_password_change(&mut self) {
        self.password = Some(PasswordChange::default());
        self.password_errors.clear();
    }

    pub fn cancel_password_change(&mut self) {
        self.password = None;
        self.password_errors.clear();
    }

    pub fn clear_password_error(&mut self, field: &str) {
        self.password_errors.remove(field);
    }

    /// Validate the dialog; true closes it. The "change" is as simulated
    /// as the rest of the account.
    pub fn submit_password_change(&mut self) -> bool {
        let Some(change) = &self.password else {
            return false;
        };
        let mut errors = FieldErrors::new();
        if change.current.is_empty() {
            errors.insert("current".into(), "Current password is required".into());
        }
        if let Err(failure) = validate::required_password(&change.new_password) {
            if let Some(message) = failure.message {
                errors.insert("new_password".into(), message.to_string());
            }
        }
        if change.confirm.is_empty() {
            errors.insert("confirm".into(), "Please confirm password".into());
        } else if change.confirm != change.new_password {
            errors.insert("confirm".into(), "Passwords do not match".into());
        }

        if errors.is_empty() {
            info!("password changed (demo)");
            self.password = None;
            self.password_errors.clear();
            true
        } else {
            self.password_errors = errors;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_demo_account() {
        let prefs = Preferences::default();
        assert!(prefs.email_notifications);
        assert!(!prefs.sms_notifications);
        assert!(prefs.two_factor_auth);
        assert_eq!(prefs.profile_visibility, Visibility::Private);
    }

    #[test]
    fn an_empty_dialog_reports_every_field() {
        let mut view = SettingsView::new();
        view.open_password_change();
        assert!(!view.submit_password_change());
        for field in ["current", "new_password", "confirm"] {
            assert!(view.password_errors.contains_key(field), "missing {field}");
        }
        assert!(view.password.is_some());
    }

    #[test]
    fn a_weak_new_password_is_rejected() {
        let mut view = SettingsView::new();
        view.open_password_change();
        if let Some(change) = view.password.as_mut() {
            change.current = "OldSecret1".into();
            change.new_password = "alllowercase1".into();
            change.confirm = "alllowercase1".into();
        }
        assert!(!view.submit_password_change());
        assert!(view.password_errors.contains_key("new_password"));
    }

    #[test]
    fn a_valid_change_closes_the_dialog() {
        let mut view = SettingsView::new();
        view.open_password_change();
        if let Some(change) = view.password.as_mut() {
            change.current = "OldSecret1".into();
            change.new_password = "NewSecret2".into();
            change.confirm = "NewSecret2".into();
        }
        assert!(view.submit_password_change());
        assert!(view.password.is_none());
    }
}
