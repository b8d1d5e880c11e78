//! Three-step signup wizard.
//!
//! Step flow: role selection, personal details (with role-conditional
//! sections), then security. A step transition happens only when the
//! current step validates cleanly; editing a field clears only that
//! field's error, and a full re-validation runs on every advance attempt.

use strum::{Display, EnumIter};
use tracing::info;
use validator::Validate;

use crate::core::validate::{self, FieldErrors, PasswordChecks};
use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Role,
    Details,
    Security,
}

impl Step {
    /// One-based position for the step indicator.
    pub fn position(&self) -> u8 {
        match self {
            Step::Role => 1,
            Step::Details => 2,
            Step::Security => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Step::Role => "Role Selection",
            Step::Details => "Personal Info",
            Step::Security => "Security",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Specialty {
    Radiology,
    Oncology,
    Surgery,
    #[strum(serialize = "General Practice")]
    GeneralPractice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Default, Clone, Validate)]
pub struct PersonalDetails {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(custom = "crate::core::validate::required_email")]
    pub email: String,
    #[validate(custom = "crate::core::validate::required_phone")]
    pub phone: String,
    #[validate(length(min = 1, message = "Date of birth is required"))]
    pub date_of_birth: String, // YYYY-MM-DD
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
}

/// Patient-only section of step 2.
#[derive(Debug, Default, Clone, Validate)]
pub struct EmergencyContact {
    #[validate(length(min = 1, message = "Emergency contact is required"))]
    pub emergency_contact: String,
    #[validate(length(min = 1, message = "Emergency phone is required"))]
    pub emergency_phone: String,
}

/// Doctor-only section of step 2; the specialty picker lives outside the
/// derive because it is a closed enum, not free text.
#[derive(Debug, Default, Clone, Validate)]
pub struct DoctorCredentials {
    #[validate(length(min = 1, message = "License number is required"))]
    pub license_number: String,
    #[validate(length(min = 1, message = "Hospital affiliation is required"))]
    pub hospital: String,
}

#[derive(Debug, Default, Clone, Validate)]
pub struct SecurityDetails {
    #[validate(custom = "crate::core::validate::required_password")]
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Default, Clone)]
pub struct SignupWizard {
    pub step: Step,
    pub role: Option<Role>,
    pub personal: PersonalDetails,
    pub gender: Option<Gender>,
    pub emergency: EmergencyContact,
    pub specialty: Option<Specialty>,
    pub credentials: DoctorCredentials,
    pub security: SecurityDetails,
    pub accept_terms: bool,
    pub show_password: bool,
    pub show_confirm: bool,
    pub errors: FieldErrors,
}

impl SignupWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step 1: picking a role advances straight to the details step.
    pub fn choose_role(&mut self, role: Role) {
        self.role = Some(role);
        self.step = Step::Details;
        info!(%role, "signup role selected");
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            Step::Security => Step::Details,
            _ => Step::Role,
        };
    }

    /// Drop a single field's pending error; call after every edit.
    pub fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn validate_details(&self) -> FieldErrors {
        let mut errors = validate::collect(self.personal.validate());
        if self.gender.is_none() {
            errors.insert("gender".into(), "Gender is required".into());
        }
        match self.role {
            Some(Role::Patient) => {
                errors.extend(validate::collect(self.emergency.validate()));
            }
            Some(Role::Doctor) => {
                if self.specialty.is_none() {
                    errors.insert("specialty".into(), "Specialty is required".into());
                }
                errors.extend(validate::collect(self.credentials.validate()));
            }
            None => {}
        }
        errors
    }

    pub fn validate_security(&self) -> FieldErrors {
        let mut errors = validate::collect(self.security.validate());
        if self.security.confirm_password.is_empty() {
            errors.insert("confirm_password".into(), "Please confirm password".into());
        } else if self.security.confirm_password != self.security.password {
            errors.insert("confirm_password".into(), "Passwords do not match".into());
        }
        if !self.accept_terms {
            errors.insert(
                "accept_terms".into(),
                "You must accept the terms and conditions".into(),
            );
        }
        errors
    }

    /// Try to move from the details step to security. Returns whether the
    /// transition happened; on failure the step errors are surfaced.
    pub fn advance(&mut self) -> bool {
        if self.step != Step::Details {
            return false;
        }
        let errors = self.validate_details();
        if errors.is_empty() {
            self.errors.clear();
            self.step = Step::Security;
            true
        } else {
            self.errors = errors;
            false
        }
    }

    /// Final submission from the security step; true means the wizard is
    /// complete and the shell should return to login.
    pub fn submit(&mut self) -> bool {
        if self.step != Step::Security {
            return false;
        }
        let errors = self.validate_security();
        if errors.is_empty() {
            self.errors.clear();
            info!(role = ?self.role, "signup completed (demo)");
            true
        } else {
            self.errors = errors;
            false
        }
    }

    pub fn password_checks(&self) -> PasswordChecks {
        PasswordChecks::evaluate(&self.security.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_details(role: Role) -> SignupWizard {
        let mut wizard = SignupWizard::new();
        wizard.choose_role(role);
        wizard.personal = PersonalDetails {
            full_name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: "+1 555 123 4567".into(),
            date_of_birth: "1985-03-15".into(),
            address: "123 Main St".into(),
        };
        wizard.gender = Some(Gender::Male);
        wizard
    }

    #[test]
    fn choosing_a_role_advances_to_details() {
        let mut wizard = SignupWizard::new();
        assert_eq!(wizard.step, Step::Role);
        wizard.choose_role(Role::Patient);
        assert_eq!(wizard.step, Step::Details);
        assert_eq!(wizard.role, Some(Role::Patient));
    }

    #[test]
    fn empty_details_surface_an_error_per_required_field() {
        let mut wizard = SignupWizard::new();
        wizard.choose_role(Role::Patient);
        assert!(!wizard.advance());
        assert_eq!(wizard.step, Step::Details);
        for field in [
            "full_name",
            "email",
            "phone",
            "date_of_birth",
            "gender",
            "address",
            "emergency_contact",
            "emergency_phone",
        ] {
            assert!(wizard.error(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn doctor_details_require_the_professional_section() {
        let mut wizard = filled_details(Role::Doctor);
        assert!(!wizard.advance());
        assert!(wizard.error("specialty").is_some());
        assert!(wizard.error("license_number").is_some());
        assert!(wizard.error("hospital").is_some());
        // Patient-only fields must not be demanded from doctors.
        assert!(wizard.error("emergency_contact").is_none());

        wizard.specialty = Some(Specialty::Radiology);
        wizard.credentials.license_number = "MD-123456".into();
        wizard.credentials.hospital = "Medical Center Downtown".into();
        assert!(wizard.advance());
        assert_eq!(wizard.step, Step::Security);
    }

    #[test]
    fn malformed_email_blocks_the_details_step() {
        let mut wizard = filled_details(Role::Patient);
        wizard.emergency.emergency_contact = "Jane Doe".into();
        wizard.emergency.emergency_phone = "+1 555 987 6543".into();
        wizard.personal.email = "john@example".into();
        assert!(!wizard.advance());
        assert_eq!(wizard.error("email"), Some("Invalid email format"));
    }

    #[test]
    fn editing_clears_only_the_touched_field() {
        let mut wizard = SignupWizard::new();
        wizard.choose_role(Role::Patient);
        wizard.advance();
        assert!(wizard.error("full_name").is_some());
        assert!(wizard.error("email").is_some());

        wizard.personal.full_name = "John".into();
        wizard.clear_error("full_name");
        assert!(wizard.error("full_name").is_none());
        assert!(wizard.error("email").is_some());
    }

    #[test]
    fn security_step_checks_strength_match_and_terms() {
        let mut wizard = filled_details(Role::Patient);
        wizard.emergency.emergency_contact = "Jane Doe".into();
        wizard.emergency.emergency_phone = "+1 555 987 6543".into();
        assert!(wizard.advance());

        wizard.security.password = "weak".into();
        wizard.security.confirm_password = "other".into();
        assert!(!wizard.submit());
        assert!(wizard.error("password").is_some());
        assert_eq!(wizard.error("confirm_password"), Some("Passwords do not match"));
        assert!(wizard.error("accept_terms").is_some());

        wizard.security.password = "Abcdefg1".into();
        wizard.security.confirm_password = "Abcdefg1".into();
        wizard.accept_terms = true;
        assert!(wizard.submit());
    }

    #[test]
    fn back_never_steps_below_role_selection() {
        let mut wizard = SignupWizard::new();
        wizard.back();
        assert_eq!(wizard.step, Step::Role);
        wizard.choose_role(Role::Patient);
        wizard.back();
        assert_eq!(wizard.step, Step::Role);
    }
}
