//! Login form state and demo-account role resolution.
//!
//! There is no real authentication: a valid-looking submission enters a
//! short simulated confirmation delay and resolves to a role from the mock
//! directory.

use tracing::{debug, info};

use crate::core::validate;
use crate::data;
use crate::models::Role;

#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub remember: bool,
    pub error: Option<String>,
    pub loading: bool,
}

impl LoginForm {
    /// Editing either field clears the banner error.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.error = None;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.error = None;
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Validate and, on success, enter the loading state and return the
    /// role the simulated backend will confirm.
    pub fn submit(&mut self) -> Option<Role> {
        self.error = None;

        if self.email.is_empty() || self.password.is_empty() {
            self.error = Some("Please fill in all fields".into());
            return None;
        }
        if !validate::is_valid_email(&self.email) {
            self.error = Some("Please enter a valid email address".into());
            return None;
        }

        self.loading = true;
        let role = resolve_role(&self.email);
        info!(%role, "sign-in accepted, awaiting confirmation");
        Some(role)
    }
}

/// Map a sign-in address to a role via the demo directory. Addresses the
/// directory does not know fall back to the patient experience.
pub fn resolve_role(email: &str) -> Role {
    data::demo_accounts()
        .iter()
        .find(|account| account.email.eq_ignore_ascii_case(email))
        .map(|account| account.role)
        .unwrap_or_else(|| {
            debug!("unknown address, defaulting to patient role");
            Role::Patient
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_requires_both_fields() {
        let mut form = LoginForm::default();
        assert_eq!(form.submit(), None);
        assert_eq!(form.error.as_deref(), Some("Please fill in all fields"));
        assert!(!form.loading);
    }

    #[test]
    fn submit_rejects_malformed_email() {
        let mut form = LoginForm {
            email: "not-an-email".into(),
            password: "whatever".into(),
            ..LoginForm::default()
        };
        assert_eq!(form.submit(), None);
        assert_eq!(
            form.error.as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn editing_clears_the_banner_error() {
        let mut form = LoginForm::default();
        form.submit();
        assert!(form.error.is_some());
        form.set_email("sarah@example.com".into());
        assert!(form.error.is_none());
    }

    #[test]
    fn valid_submission_enters_loading_and_resolves_a_role() {
        let mut form = LoginForm {
            email: "doctor@example.com".into(),
            password: "Abcdefg1".into(),
            ..LoginForm::default()
        };
        assert_eq!(form.submit(), Some(Role::Doctor));
        assert!(form.loading);
    }

    #[test]
    fn unknown_addresses_default_to_patient() {
        assert_eq!(resolve_role("patient@example.com"), Role::Patient);
        assert_eq!(resolve_role("doctor@example.com"), Role::Doctor);
        assert_eq!(resolve_role("someone@else.org"), Role::Patient);
    }
}
