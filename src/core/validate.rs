//! Presentation-agnostic field validation.
//!
//! All user-facing "errors" in this prototype are per-field messages; this
//! module owns the format rules and the `FieldErrors` map the page state
//! machines accumulate them in.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

lazy_static! {
    /// `local@domain.tld`, no whitespace anywhere.
    pub static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    /// Digits and common phone separators only.
    pub static ref PHONE_RE: Regex = Regex::new(r"^[\d\s\-\+\(\)]+$").unwrap();
    static ref DECIMAL_RE: Regex = Regex::new(r"^\d*\.?\d*$").unwrap();
}

/// Field key -> human-readable message. Empty iff the form may proceed.
pub type FieldErrors = BTreeMap<String, String>;

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value) && value.len() >= 10
}

/// Accept a keystroke into a decimal-only input: digits with at most one
/// dot. The empty string is allowed so the field can be cleared.
pub fn accepts_decimal_input(raw: &str) -> bool {
    DECIMAL_RE.is_match(raw)
}

pub fn is_positive_number(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .map(|n| n.is_finite() && n >= 0.0)
        .unwrap_or(false)
}

/// Per-requirement password report; the signup page renders these as a live
/// checklist while the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
}

impl PasswordChecks {
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.len() >= 8,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    pub fn satisfied(&self) -> bool {
        self.min_length && self.uppercase && self.lowercase && self.digit
    }
}

pub fn is_strong_password(password: &str) -> bool {
    PasswordChecks::evaluate(password).satisfied()
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// `validator` hook: required + format check for email fields.
pub fn required_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("email_required", "Email is required"));
    }
    if !is_valid_email(value) {
        return Err(failure("email_format", "Invalid email format"));
    }
    Ok(())
}

/// `validator` hook: required + format check for phone fields.
pub fn required_phone(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("phone_required", "Phone number is required"));
    }
    if !is_valid_phone(value) {
        return Err(failure("phone_format", "Invalid phone number"));
    }
    Ok(())
}

/// `validator` hook: required + strength check for password fields.
pub fn required_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(failure("password_required", "Password is required"));
    }
    if !is_strong_password(value) {
        return Err(failure(
            "password_strength",
            "Password must be at least 8 characters with uppercase, lowercase, and numbers",
        ));
    }
    Ok(())
}

/// Flatten `validator` output into the crate's field-error map, keeping the
/// first message reported for each field.
pub fn collect(outcome: Result<(), ValidationErrors>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Err(failures) = outcome {
        for (field, field_failures) in failures.field_errors() {
            if let Some(first) = field_failures.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                errors.insert(field.to_string(), message);
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("john@example.com", true; "plain address")]
    #[test_case("a@b.co", true; "short address")]
    #[test_case("johnexample.com", false; "missing at sign")]
    #[test_case("john@example", false; "missing domain dot")]
    #[test_case("john doe@example.com", false; "whitespace in local part")]
    #[test_case("", false; "empty")]
    fn email_rule(input: &str, expected: bool) {
        assert_eq!(is_valid_email(input), expected);
    }

    #[test_case("+20 10 1234 5678", true; "international with spaces")]
    #[test_case("(555) 123-4567", true; "parenthesized")]
    #[test_case("12345", false; "too short")]
    #[test_case("555-CALL-NOW", false; "letters rejected")]
    fn phone_rule(input: &str, expected: bool) {
        assert_eq!(is_valid_phone(input), expected);
    }

    #[test_case("Abcdefg1", true; "meets all requirements")]
    #[test_case("abcdefg1", false; "no uppercase")]
    #[test_case("ABCDEFG1", false; "no lowercase")]
    #[test_case("Abcdefgh", false; "no digit")]
    #[test_case("Abc1", false; "too short")]
    fn password_rule(input: &str, expected: bool) {
        assert_eq!(is_strong_password(input), expected);
    }

    #[test]
    fn password_checks_report_individual_requirements() {
        let checks = PasswordChecks::evaluate("abc");
        assert!(!checks.min_length);
        assert!(!checks.uppercase);
        assert!(checks.lowercase);
        assert!(!checks.digit);
    }

    #[test_case("", true; "empty clears the field")]
    #[test_case("12", true; "digits")]
    #[test_case("12.5", true; "decimal")]
    #[test_case("12.", true; "trailing dot while typing")]
    #[test_case(".5", true; "leading dot")]
    #[test_case("12.5.1", false; "second dot")]
    #[test_case("12a", false; "letters")]
    #[test_case("-4", false; "sign")]
    fn decimal_input_filter(raw: &str, expected: bool) {
        assert_eq!(accepts_decimal_input(raw), expected);
    }

    #[test_case("0", true)]
    #[test_case("17.99", true)]
    #[test_case("", false)]
    #[test_case("abc", false)]
    fn positive_number_rule(input: &str, expected: bool) {
        assert_eq!(is_positive_number(input), expected);
    }
}
