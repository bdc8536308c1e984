//! Fixed-width plain-text encoder

use crate::core::export::table::{entry_rows, trailer_rows, COLUMNS};
use crate::core::export::{ExportContext, ExportEncoder};
use std::error::Error;
use std::fmt::Write;

/// Gap between the two columns
const GUTTER: &str = "  ";

/// Plain-text encoder: the same table as the delimited container, rendered
/// fixed-width with right-aligned columns.
pub struct TxtEncoder;

impl TxtEncoder {
    /// Create a new plain-text encoder
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TxtEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportEncoder for TxtEncoder {
    fn encode(&self, ctx: &ExportContext) -> Result<Vec<u8>, Box<dyn Error>> {
        let mut rows: Vec<[String; 2]> = Vec::with_capacity(ctx.entry_count() + 3);
        rows.push([COLUMNS[0].to_string(), COLUMNS[1].to_string()]);
        rows.extend(entry_rows(ctx));
        rows.extend(trailer_rows(ctx));

        // Pad each column to its widest cell
        let widths = rows.iter().fold([0usize; 2], |acc, row| {
            [acc[0].max(row[0].len()), acc[1].max(row[1].len())]
        });

        let mut out = String::new();
        for row in &rows {
            let _ = writeln!(
                out,
                "{:>w0$}{GUTTER}{:>w1$}",
                row[0],
                row[1],
                w0 = widths[0],
                w1 = widths[1]
            );
        }

        Ok(out.into_bytes())
    }
}
