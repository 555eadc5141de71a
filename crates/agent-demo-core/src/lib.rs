//! Core of the GitHub Agent showcase.
//!
//! The crate grants simulated sessions through a [`session::SessionService`]
//! and narrates a fixed demo with [`narrator::Narrator`]. No source-control,
//! network or AI work happens anywhere; every result is a literal.

pub mod config;
pub mod error;
pub mod narrator;
pub mod operation;
pub mod session;

// Re-export common types
pub use config::DemoConfig;
pub use error::{DemoError, Result};
pub use narrator::{Narrator, report_outcome, run_demo};
