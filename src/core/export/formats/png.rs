//! Table-image encoder via HTML-to-PNG conversion

use crate::core::export::chrome::{self, CaptureTarget};
use crate::core::export::formats::html;
use crate::core::export::{ExportContext, ExportEncoder};
use std::error::Error;

/// Viewport width for every capture
const IMAGE_WIDTH: u32 = 600;
/// Pixels reserved for margins plus the header row
const IMAGE_BASE_HEIGHT: u32 = 200;
/// Pixels per table row
const IMAGE_ROW_HEIGHT: u32 = 50;

/// PNG encoder: renders the entry table plus one summary row and captures
/// it with a headless browser, viewport height scaled to the row count.
pub struct PngEncoder {
    /// Optional custom converter command
    converter: Option<String>,
}

impl PngEncoder {
    /// Create a new PNG encoder with browser auto-detection
    #[must_use]
    pub const fn new() -> Self {
        Self { converter: None }
    }

    /// Create a PNG encoder with a custom converter binary
    #[must_use]
    pub fn with_converter(converter: &str) -> Self {
        Self {
            converter: Some(converter.to_owned()),
        }
    }
}

impl Default for PngEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Viewport height for a transcript of `entry_count` entries (the captured
/// table carries one extra summary row)
fn image_height(entry_count: usize) -> u32 {
    let rows = u32::try_from(entry_count).unwrap_or(u32::MAX).saturating_add(1);
    IMAGE_BASE_HEIGHT.saturating_add(rows.saturating_mul(IMAGE_ROW_HEIGHT))
}

impl ExportEncoder for PngEncoder {
    fn encode(&self, ctx: &ExportContext) -> Result<Vec<u8>, Box<dyn Error>> {
        let page = html::render_image_table(ctx);
        chrome::capture_html(
            self.converter.as_deref(),
            &page,
            CaptureTarget::Screenshot {
                width: IMAGE_WIDTH,
                height: image_height(ctx.entry_count()),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_height_scales_with_row_count() {
        assert_eq!(image_height(0), 250);
        assert_eq!(image_height(2), 350);
        assert!(image_height(10) > image_height(2));
    }

    #[test]
    fn image_height_saturates_instead_of_overflowing() {
        let _ = image_height(usize::MAX);
    }
}
