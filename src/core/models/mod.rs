//! Domain models for the calculator

pub mod entry;
pub mod transcript;

pub use entry::{SemesterEntry, GRADE_MAX, GRADE_MIN};
pub use transcript::Transcript;
