//! Process-level error types.
//!
//! Field validation failures are data (`core::validate::FieldErrors`), not
//! errors; this enum covers the failures a page cannot render inline.

use thiserror::Error;

use crate::models::{Page, Role};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("page {page} requires an authenticated session")]
    Unauthenticated { page: Page },
    #[error("page {page} is not available to the {role} role")]
    WrongRole { page: Page, role: Role },
}
