//! Summary statistics over a transcript

use super::models::SemesterEntry;

/// Derived summary for a list of semester entries.
///
/// Never stored: recomputed from the entry list on every read, so there is
/// no staleness to manage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranscriptSummary {
    /// Sum of `grade * credit` over all entries
    pub weighted_sum: f64,
    /// Sum of credits over all entries
    pub total_credits: f64,
    /// Credit-weighted average, `0.0` when no credits are recorded
    pub cgpa: f64,
}

impl TranscriptSummary {
    /// Compute the summary for a list of entries.
    ///
    /// The division is guarded: a transcript whose credits sum to zero
    /// (including the empty transcript) yields a CGPA of `0.0`.
    #[must_use]
    pub fn from_entries(entries: &[SemesterEntry]) -> Self {
        let weighted_sum: f64 = entries.iter().map(SemesterEntry::weighted).sum();
        let total_credits: f64 = entries.iter().map(SemesterEntry::credit).sum();
        let cgpa = if total_credits > 0.0 {
            weighted_sum / total_credits
        } else {
            0.0
        };

        Self {
            weighted_sum,
            total_credits,
            cgpa,
        }
    }
}
