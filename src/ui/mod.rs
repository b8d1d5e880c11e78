//! Desktop UI shell for MedVision.
//!
//! Elm-style: one state struct, one message enum, pure view functions per
//! page, and a timer subscription for the simulated analysis.

pub mod app;
pub mod components;
pub mod pages;

pub use app::MedVision;
