//! HTML rendering stage for the document and image encoders
//!
//! The PDF and PNG containers are produced by rendering a self-contained
//! HTML page and handing it to a headless browser. The page embeds all CSS,
//! so conversion needs no network access.

use crate::core::export::table::{entry_rows, summary_row, COLUMNS};
use crate::core::export::ExportContext;
use std::fmt::Write;

/// Embedded page template
const TABLE_TEMPLATE: &str = include_str!("../templates/table.html");

/// Title shown on the paginated document
pub const DOCUMENT_TITLE: &str = "CGPA Calculator Results";

/// Render the paginated-document page: title, header row, all entries, a
/// blank separator row, then the `Total Credits` and `CGPA` rows.
#[must_use]
pub fn render_document(ctx: &ExportContext) -> String {
    let mut rows = entry_rows(ctx);
    rows.push(["\u{a0}".to_string(), "\u{a0}".to_string()]);
    rows.push([
        "Total Credits".to_string(),
        ctx.formatted_total_credits(),
    ]);
    rows.push(["CGPA".to_string(), ctx.formatted_cgpa()]);

    render(&format!("<h1>{DOCUMENT_TITLE}</h1>"), &rows)
}

/// Render the table-image page: no title, all entries, one appended summary
/// row carrying both totals.
#[must_use]
pub fn render_image_table(ctx: &ExportContext) -> String {
    let mut rows = entry_rows(ctx);
    rows.push(summary_row(ctx));

    render("", &rows)
}

/// Substitute the template placeholders
fn render(title_block: &str, rows: &[[String; 2]]) -> String {
    let mut body_rows = String::new();
    for row in rows {
        let _ = writeln!(
            body_rows,
            "    <tr><td>{}</td><td>{}</td></tr>",
            row[0], row[1]
        );
    }

    let mut output = TABLE_TEMPLATE.to_string();
    output = output.replace(
        "{{page_title}}",
        if title_block.is_empty() {
            "CGPA Export"
        } else {
            DOCUMENT_TITLE
        },
    );
    output = output.replace("{{title_block}}", title_block);
    output = output.replace("{{col_grade}}", COLUMNS[0]);
    output = output.replace("{{col_credits}}", COLUMNS[1]);
    output = output.replace("{{body_rows}}", body_rows.trim_end());

    output
}
