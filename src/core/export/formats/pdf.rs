//! Paginated-document encoder via HTML-to-PDF conversion
//!
//! Renders the titled, bordered results table as HTML and converts it with
//! headless Chrome/Chromium or another specified converter.
//!
//! This approach produces high-quality output with real table layout and
//! avoids a dependency on complex PDF generation libraries.

use crate::core::export::chrome::{self, CaptureTarget};
use crate::core::export::formats::html;
use crate::core::export::{ExportContext, ExportEncoder};
use std::error::Error;

/// PDF encoder using HTML-to-PDF conversion
pub struct PdfEncoder {
    /// Optional custom converter command
    converter: Option<String>,
}

impl PdfEncoder {
    /// Create a new PDF encoder with browser auto-detection
    #[must_use]
    pub const fn new() -> Self {
        Self { converter: None }
    }

    /// Create a PDF encoder with a custom converter binary
    #[must_use]
    pub fn with_converter(converter: &str) -> Self {
        Self {
            converter: Some(converter.to_owned()),
        }
    }
}

impl Default for PdfEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportEncoder for PdfEncoder {
    fn encode(&self, ctx: &ExportContext) -> Result<Vec<u8>, Box<dyn Error>> {
        let page = html::render_document(ctx);
        chrome::capture_html(self.converter.as_deref(), &page, CaptureTarget::Pdf)
    }
}
