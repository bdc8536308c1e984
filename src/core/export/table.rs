//! Shared tabular model for the export encoders
//!
//! Builds the cell text once so every container carries the same logical
//! content: the `Grade`/`Credits` columns, one row per entry, and the
//! computed totals.

use super::ExportContext;

/// Column headers for every export
pub const COLUMNS: [&str; 2] = ["Grade", "Credits"];

/// Placeholder marker used in the delimited-text trailer rows
pub const PLACEHOLDER: &str = "--";

/// Render a grade cell (2 decimal places)
#[must_use]
pub fn format_grade(grade: f64) -> String {
    format!("{grade:.2}")
}

/// Render a credit cell (1 decimal place)
#[must_use]
pub fn format_credit(credit: f64) -> String {
    format!("{credit:.1}")
}

/// One formatted cell row per entry, in insertion order
#[must_use]
pub fn entry_rows(ctx: &ExportContext) -> Vec<[String; 2]> {
    ctx.entries
        .iter()
        .map(|e| [format_grade(e.grade()), format_credit(e.credit())])
        .collect()
}

/// The two trailer rows appended by the tabular containers (CSV/XLSX/TXT):
/// each pairs the placeholder marker with one formatted total.
#[must_use]
pub fn trailer_rows(ctx: &ExportContext) -> [[String; 2]; 2] {
    [
        [
            PLACEHOLDER.to_string(),
            format!("Total Credits: {}", ctx.formatted_total_credits()),
        ],
        [
            format!("CGPA: {}", ctx.formatted_cgpa()),
            PLACEHOLDER.to_string(),
        ],
    ]
}

/// The single summary row appended by the image container
#[must_use]
pub fn summary_row(ctx: &ExportContext) -> [String; 2] {
    [
        format!("CGPA: {}", ctx.formatted_cgpa()),
        format!("Total Credits: {}", ctx.formatted_total_credits()),
    ]
}
