//! Core module for the calculator domain: models, summary math, session
//! state, configuration, and the export encoders.

pub mod config;
pub mod export;
pub mod models;
pub mod session;
pub mod summary;

/// Returns the current version of the `cgpa-calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
