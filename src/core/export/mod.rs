//! Export module: serializes the current transcript plus its computed
//! summary into one of several container formats on demand.
//!
//! Each encoder reproduces the same logical content (the `Grade`/`Credits`
//! table and the computed totals); only the container differs.

pub mod chrome;
pub mod formats;
pub mod table;

use crate::core::models::SemesterEntry;
use crate::core::summary::TranscriptSummary;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{
    CsvEncoder, ExportFormat, PdfEncoder, PngEncoder, TxtEncoder, XlsxEncoder, EXPORT_FILE_STEM,
};

/// Data context for export encoding
///
/// Aggregates everything an encoder needs to render the export, providing a
/// single source of truth so all containers carry identical content.
#[derive(Debug, Clone, Copy)]
pub struct ExportContext<'a> {
    /// Recorded entries, in insertion order
    pub entries: &'a [SemesterEntry],
    /// Summary computed over the same entries
    pub summary: &'a TranscriptSummary,
}

impl<'a> ExportContext<'a> {
    /// Create a new export context
    #[must_use]
    pub const fn new(entries: &'a [SemesterEntry], summary: &'a TranscriptSummary) -> Self {
        Self { entries, summary }
    }

    /// Number of data rows the export will carry
    #[must_use]
    pub const fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// CGPA rendered for display (2 decimal places)
    #[must_use]
    pub fn formatted_cgpa(&self) -> String {
        format!("{:.2}", self.summary.cgpa)
    }

    /// Total credits rendered for display (1 decimal place)
    #[must_use]
    pub fn formatted_total_credits(&self) -> String {
        format!("{:.1}", self.summary.total_credits)
    }
}

/// Trait for export encoders
pub trait ExportEncoder {
    /// Encode the export into an in-memory byte payload.
    ///
    /// # Errors
    /// Returns an error if encoding fails (including conversion-tool
    /// failures for the document and image containers).
    fn encode(&self, ctx: &ExportContext) -> Result<Vec<u8>, Box<dyn Error>>;

    /// Encode the export and write it to a file.
    ///
    /// # Errors
    /// Returns an error if encoding or file writing fails.
    fn export_to_file(&self, ctx: &ExportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let bytes = self.encode(ctx)?;
        fs::write(output_path, bytes)?;
        Ok(())
    }
}

/// A finished export: the fixed file name, its MIME type, and the bytes
#[derive(Debug, Clone)]
pub struct ExportPayload {
    /// `cgpa_export.<ext>`
    pub file_name: String,
    /// MIME type for the container
    pub mime_type: &'static str,
    /// Encoded container bytes
    pub bytes: Vec<u8>,
}

/// Build the encoder for a format.
///
/// The document and image encoders shell out to a headless browser; pass
/// `converter` to override the auto-detected binary (from the
/// `export.pdf_converter` config key or the `--pdf-converter` flag).
#[must_use]
pub fn encoder_for(format: ExportFormat, converter: Option<&str>) -> Box<dyn ExportEncoder> {
    match (format, converter) {
        (ExportFormat::Csv, _) => Box::new(CsvEncoder::new()),
        (ExportFormat::Xlsx, _) => Box::new(XlsxEncoder::new()),
        (ExportFormat::Txt, _) => Box::new(TxtEncoder::new()),
        (ExportFormat::Pdf, Some(c)) => Box::new(PdfEncoder::with_converter(c)),
        (ExportFormat::Pdf, None) => Box::new(PdfEncoder::new()),
        (ExportFormat::Png, Some(c)) => Box::new(PngEncoder::with_converter(c)),
        (ExportFormat::Png, None) => Box::new(PngEncoder::new()),
    }
}

/// Encode the context into a ready-to-write payload for the given format.
///
/// # Errors
/// Returns an error when the underlying encoder fails.
pub fn export(
    format: ExportFormat,
    ctx: &ExportContext,
    converter: Option<&str>,
) -> Result<ExportPayload, Box<dyn Error>> {
    let encoder = encoder_for(format, converter);
    let bytes = encoder.encode(ctx)?;
    crate::debug!(
        "Encoded {} export: {} data rows, {} bytes",
        format,
        ctx.entry_count(),
        bytes.len()
    );
    Ok(ExportPayload {
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        bytes,
    })
}
