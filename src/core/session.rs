//! Session state for one interactive run
//!
//! The session object replaces ambient globals: it owns the transcript,
//! every handler borrows it explicitly, and dropping it at the end of the
//! run is the teardown. Actions run to completion one at a time; nothing is
//! shared across sessions.

use super::export::{self, ExportContext, ExportFormat, ExportPayload};
use super::models::{SemesterEntry, Transcript};
use super::summary::TranscriptSummary;
use std::error::Error;

/// In-memory state for one interactive calculator session
#[derive(Debug, Clone, Default)]
pub struct Session {
    transcript: Transcript,
}

impl Session {
    /// Start an empty session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transcript: Transcript::new(),
        }
    }

    /// Validate and record a new semester entry.
    ///
    /// # Errors
    /// Returns the validation message when `grade` is outside `[0, 10]` or
    /// `credit` is negative; the transcript is unchanged in that case.
    pub fn add_entry(&mut self, grade: f64, credit: f64) -> Result<SemesterEntry, String> {
        let entry = SemesterEntry::new(grade, credit)?;
        self.transcript.add(entry);
        crate::debug!(
            "Recorded entry {} of grade {grade}, credit {credit}",
            self.transcript.len()
        );
        Ok(entry)
    }

    /// Remove the most recently added entry, if any.
    ///
    /// This is the guarded wrapper over the transcript's LIFO removal: on an
    /// empty transcript it returns `None` instead of touching the list.
    pub fn remove_last(&mut self) -> Option<SemesterEntry> {
        if self.transcript.is_empty() {
            return None;
        }
        Some(self.transcript.remove_last())
    }

    /// Remove every recorded entry
    pub fn clear_all(&mut self) {
        self.transcript.clear_all();
    }

    /// The recorded entries
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Compute the summary for the current entries.
    ///
    /// Derived on every call; nothing is cached.
    #[must_use]
    pub fn summary(&self) -> TranscriptSummary {
        TranscriptSummary::from_entries(self.transcript.entries())
    }

    /// Encode the current entries and summary for the given format.
    ///
    /// # Errors
    /// Returns an error when the encoder fails (for the document and image
    /// containers this includes a missing browser).
    pub fn export(
        &self,
        format: ExportFormat,
        converter: Option<&str>,
    ) -> Result<ExportPayload, Box<dyn Error>> {
        let summary = self.summary();
        let ctx = ExportContext::new(self.transcript.entries(), &summary);
        export::export(format, &ctx, converter)
    }
}
