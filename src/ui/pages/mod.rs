//! Per-page view functions and their event handlers.

pub mod appointments;
pub mod dashboard;
pub mod login;
pub mod messages;
pub mod profile;
pub mod screening;
pub mod settings;
pub mod signup;
