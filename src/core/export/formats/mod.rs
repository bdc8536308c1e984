//! Export encoder implementations
//!
//! Provides encoders for the supported containers: CSV, XLSX, TXT, PDF, and
//! PNG. Every encoder serializes the same logical table; only the container
//! format differs.

pub mod csv;
pub mod html;
pub mod pdf;
pub mod png;
pub mod text;
pub mod xlsx;

pub use csv::CsvEncoder;
pub use pdf::PdfEncoder;
pub use png::PngEncoder;
pub use text::TxtEncoder;
pub use xlsx::XlsxEncoder;

use std::fmt;
use std::str::FromStr;

/// File stem shared by every export, regardless of container
pub const EXPORT_FILE_STEM: &str = "cgpa_export";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-delimited text
    Csv,
    /// Spreadsheet workbook with a single sheet
    Xlsx,
    /// Fixed-width plain text
    Txt,
    /// Paginated document with a bordered table (rendered via headless browser)
    Pdf,
    /// Table image, auto-sized to the row count (rendered via headless browser)
    Png,
}

impl ExportFormat {
    /// All supported formats, in selector order
    pub const ALL: [Self; 5] = [Self::Csv, Self::Xlsx, Self::Txt, Self::Pdf, Self::Png];

    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Txt => "txt",
            Self::Pdf => "pdf",
            Self::Png => "png",
        }
    }

    /// Get the MIME type advertised for this format
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Txt => "text/plain",
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
        }
    }

    /// File name the export is written under (`cgpa_export.<ext>`)
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{EXPORT_FILE_STEM}.{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            "txt" | "text" => Ok(Self::Txt),
            "pdf" => Ok(Self::Pdf),
            "png" | "image" => Ok(Self::Png),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Xlsx => write!(f, "xlsx"),
            Self::Txt => write!(f, "txt"),
            Self::Pdf => write!(f, "pdf"),
            Self::Png => write!(f, "png"),
        }
    }
}
