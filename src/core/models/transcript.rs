//! Transcript model: the ordered list of semester entries for one session

use super::entry::SemesterEntry;
use serde::{Deserialize, Serialize};

/// Ordered list of semester entries.
///
/// Insertion order is significant: it is the display order, and removal is
/// strictly last-in first-out. The list lives in memory for the duration of
/// one session and is never shared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<SemesterEntry>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry to the end of the transcript
    pub fn add(&mut self, entry: SemesterEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the most recently added entry.
    ///
    /// Callers must guard with [`Self::is_empty`]; removal from an empty
    /// transcript is a caller bug.
    ///
    /// # Panics
    /// Panics when the transcript is empty.
    pub fn remove_last(&mut self) -> SemesterEntry {
        assert!(
            !self.entries.is_empty(),
            "remove_last called on an empty transcript"
        );
        match self.entries.pop() {
            Some(entry) => entry,
            None => unreachable!(),
        }
    }

    /// Remove every entry
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[SemesterEntry] {
        &self.entries
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(grade: f64, credit: f64) -> SemesterEntry {
        SemesterEntry::new(grade, credit).expect("valid entry")
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.add(entry(8.5, 20.0));
        transcript.add(entry(9.0, 22.0));
        transcript.add(entry(7.25, 18.0));

        let grades: Vec<f64> = transcript.entries().iter().map(|e| e.grade()).collect();
        assert_eq!(grades, vec![8.5, 9.0, 7.25]);
    }

    #[test]
    fn add_then_remove_last_restores_prior_list() {
        let mut transcript = Transcript::new();
        transcript.add(entry(8.5, 20.0));
        transcript.add(entry(9.0, 22.0));
        let before = transcript.clone();

        transcript.add(entry(6.0, 10.0));
        let removed = transcript.remove_last();

        assert_eq!(removed, entry(6.0, 10.0));
        assert_eq!(transcript, before);
    }

    #[test]
    fn clear_all_empties_regardless_of_contents() {
        let mut transcript = Transcript::new();
        for i in 0..5 {
            transcript.add(entry(f64::from(i), 2.0));
        }
        transcript.clear_all();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    #[should_panic(expected = "remove_last called on an empty transcript")]
    fn remove_last_on_empty_fails_loudly() {
        let mut transcript = Transcript::new();
        let _ = transcript.remove_last();
    }
}
