//! Semester entry model

use serde::{Deserialize, Serialize};

/// Lowest accepted grade-point value
pub const GRADE_MIN: f64 = 0.0;
/// Highest accepted grade-point value
pub const GRADE_MAX: f64 = 10.0;

/// One recorded semester: a grade-point (SGPA) paired with the credit
/// weight of that term.
///
/// Entries are immutable once constructed; the validating constructor is the
/// only way to build one, so every stored entry is already range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemesterEntry {
    /// Grade-point for the term, in `[0, 10]`
    grade: f64,
    /// Credit weight for the term, `>= 0`
    credit: f64,
}

impl SemesterEntry {
    /// Create a new entry after range-checking both fields.
    ///
    /// # Arguments
    /// * `grade` - Grade-point in `[0, 10]`
    /// * `credit` - Credit weight, non-negative
    ///
    /// # Errors
    /// Returns a message describing the offending field when `grade` is
    /// outside `[0, 10]`, `credit` is negative, or either value is not finite.
    pub fn new(grade: f64, credit: f64) -> Result<Self, String> {
        if !grade.is_finite() {
            return Err(format!("Grade must be a finite number, got '{grade}'"));
        }
        if !credit.is_finite() {
            return Err(format!("Credits must be a finite number, got '{credit}'"));
        }
        if !(GRADE_MIN..=GRADE_MAX).contains(&grade) {
            return Err(format!(
                "Grade must be between {GRADE_MIN} and {GRADE_MAX}, got {grade}"
            ));
        }
        if credit < 0.0 {
            return Err(format!("Credits must be non-negative, got {credit}"));
        }
        Ok(Self { grade, credit })
    }

    /// Grade-point for the term
    #[must_use]
    pub const fn grade(&self) -> f64 {
        self.grade
    }

    /// Credit weight for the term
    #[must_use]
    pub const fn credit(&self) -> f64 {
        self.credit
    }

    /// Contribution of this entry to the weighted sum
    #[must_use]
    pub fn weighted(&self) -> f64 {
        self.grade * self.credit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_values() {
        let entry = SemesterEntry::new(8.5, 20.0).expect("valid entry");
        assert_eq!(entry.grade(), 8.5);
        assert_eq!(entry.credit(), 20.0);
        assert_eq!(entry.weighted(), 170.0);
    }

    #[test]
    fn accepts_boundary_grades() {
        assert!(SemesterEntry::new(0.0, 1.0).is_ok());
        assert!(SemesterEntry::new(10.0, 1.0).is_ok());
        assert!(SemesterEntry::new(5.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_grade() {
        assert!(SemesterEntry::new(-0.1, 1.0).is_err());
        assert!(SemesterEntry::new(10.1, 1.0).is_err());
    }

    #[test]
    fn rejects_negative_credit() {
        let err = SemesterEntry::new(5.0, -0.5).unwrap_err();
        assert!(err.contains("non-negative"));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(SemesterEntry::new(f64::NAN, 1.0).is_err());
        assert!(SemesterEntry::new(5.0, f64::INFINITY).is_err());
    }
}
