//! Delimited-text encoder

use crate::core::export::table::{entry_rows, trailer_rows, COLUMNS};
use crate::core::export::{ExportContext, ExportEncoder};
use std::error::Error;
use std::fmt::Write;

/// CSV encoder: header row, one row per entry, then the two trailer rows
/// pairing the placeholder marker with the formatted totals.
pub struct CsvEncoder;

impl CsvEncoder {
    /// Create a new CSV encoder
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_row(out: &mut String, cells: &[String; 2]) {
        let _ = writeln!(out, "{},{}", escape_field(&cells[0]), escape_field(&cells[1]));
    }
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportEncoder for CsvEncoder {
    fn encode(&self, ctx: &ExportContext) -> Result<Vec<u8>, Box<dyn Error>> {
        let mut out = String::new();
        let _ = writeln!(out, "{},{}", COLUMNS[0], COLUMNS[1]);

        for row in entry_rows(ctx) {
            Self::write_row(&mut out, &row);
        }
        for row in trailer_rows(ctx) {
            Self::write_row(&mut out, &row);
        }

        Ok(out.into_bytes())
    }
}

/// Quote a field when it contains a delimiter, quote, or newline
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::SemesterEntry;
    use crate::core::summary::TranscriptSummary;

    fn encode(pairs: &[(f64, f64)]) -> String {
        let entries: Vec<SemesterEntry> = pairs
            .iter()
            .map(|&(g, c)| SemesterEntry::new(g, c).expect("valid entry"))
            .collect();
        let summary = TranscriptSummary::from_entries(&entries);
        let ctx = ExportContext::new(&entries, &summary);
        let bytes = CsvEncoder::new().encode(&ctx).expect("encode csv");
        String::from_utf8(bytes).expect("utf-8 csv")
    }

    #[test]
    fn header_plus_entries_plus_two_trailer_rows() {
        let csv = encode(&[(8.5, 20.0), (9.0, 22.0)]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 1 + 2 + 2);
        assert_eq!(lines[0], "Grade,Credits");
        assert_eq!(lines[1], "8.50,20.0");
        assert_eq!(lines[2], "9.00,22.0");
        assert_eq!(lines[3], "--,Total Credits: 42.0");
        assert_eq!(lines[4], "CGPA: 8.76,--");
    }

    #[test]
    fn round_trips_first_data_row() {
        let csv = encode(&[(7.0, 10.0)]);
        let first_data_row = csv.lines().nth(1).expect("data row");
        let mut fields = first_data_row.split(',');

        let grade: f64 = fields.next().expect("grade field").parse().expect("grade");
        let credit: f64 = fields.next().expect("credit field").parse().expect("credit");
        assert_eq!(grade, 7.0);
        assert_eq!(credit, 10.0);
    }

    #[test]
    fn empty_transcript_yields_header_and_trailers_only() {
        let csv = encode(&[]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Grade,Credits");
        assert_eq!(lines[1], "--,Total Credits: 0.0");
        assert_eq!(lines[2], "CGPA: 0.00,--");
    }

    #[test]
    fn quotes_fields_containing_delimiters() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
