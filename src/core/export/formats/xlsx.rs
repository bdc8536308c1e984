//! Spreadsheet encoder

use crate::core::export::table::{trailer_rows, COLUMNS};
use crate::core::export::{ExportContext, ExportEncoder};
use rust_xlsxwriter::{Format, Workbook};
use std::error::Error;

/// Name of the single sheet every workbook carries
const SHEET_NAME: &str = "CGPA";

/// XLSX encoder: the same table as the delimited container, written to a
/// single named sheet. Entry cells stay numeric so the spreadsheet can keep
/// computing over them; trailer cells are text.
pub struct XlsxEncoder;

impl XlsxEncoder {
    /// Create a new spreadsheet encoder
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for XlsxEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportEncoder for XlsxEncoder {
    fn encode(&self, ctx: &ExportContext) -> Result<Vec<u8>, Box<dyn Error>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let header_format = Format::new().set_bold();
        for (col, name) in COLUMNS.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
        }

        let mut row: u32 = 1;
        for entry in ctx.entries {
            worksheet.write_number(row, 0, entry.grade())?;
            worksheet.write_number(row, 1, entry.credit())?;
            row += 1;
        }

        for cells in trailer_rows(ctx) {
            worksheet.write_string(row, 0, cells[0].as_str())?;
            worksheet.write_string(row, 1, cells[1].as_str())?;
            row += 1;
        }

        worksheet.set_column_width(0, 18)?;
        worksheet.set_column_width(1, 22)?;

        let bytes = workbook.save_to_buffer()?;
        Ok(bytes)
    }
}
