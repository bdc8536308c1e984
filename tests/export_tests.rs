//! Integration tests for the export encoders
//!
//! Every encoder must carry the same logical content for the same entry
//! list: one data row per entry plus that container's fixed summary rows.

use cgpa_calc::core::export::formats::html;
use cgpa_calc::core::export::{
    self, CsvEncoder, ExportContext, ExportEncoder, ExportFormat, TxtEncoder, XlsxEncoder,
};
use cgpa_calc::core::models::SemesterEntry;
use cgpa_calc::core::summary::TranscriptSummary;
use tempfile::TempDir;

fn build_entries(pairs: &[(f64, f64)]) -> Vec<SemesterEntry> {
    pairs
        .iter()
        .map(|&(g, c)| SemesterEntry::new(g, c).expect("valid entry"))
        .collect()
}

fn encode_text(encoder: &dyn ExportEncoder, entries: &[SemesterEntry]) -> String {
    let summary = TranscriptSummary::from_entries(entries);
    let ctx = ExportContext::new(entries, &summary);
    String::from_utf8(encoder.encode(&ctx).expect("encode")).expect("utf-8 output")
}

#[test]
fn tabular_encoders_agree_on_row_counts() {
    let entries = build_entries(&[(8.5, 20.0), (9.0, 22.0), (7.25, 18.0)]);

    // CSV and TXT carry: header + one row per entry + two trailer rows
    let expected_lines = 1 + entries.len() + 2;
    let csv = encode_text(&CsvEncoder::new(), &entries);
    let txt = encode_text(&TxtEncoder::new(), &entries);

    assert_eq!(csv.lines().count(), expected_lines);
    assert_eq!(txt.lines().count(), expected_lines);
}

#[test]
fn document_and_image_pages_carry_fixed_summary_rows() {
    let entries = build_entries(&[(8.5, 20.0), (9.0, 22.0), (7.25, 18.0)]);
    let summary = TranscriptSummary::from_entries(&entries);
    let ctx = ExportContext::new(&entries, &summary);

    // Document: header + entries + blank separator + Total Credits + CGPA
    let document = html::render_document(&ctx);
    assert_eq!(document.matches("<tr>").count(), 1 + entries.len() + 3);

    // Image: header + entries + one summary row
    let image = html::render_image_table(&ctx);
    assert_eq!(image.matches("<tr>").count(), 1 + entries.len() + 1);
}

#[test]
fn every_container_reflects_the_same_totals() {
    let entries = build_entries(&[(8.5, 20.0), (9.0, 22.0)]);
    let summary = TranscriptSummary::from_entries(&entries);
    let ctx = ExportContext::new(&entries, &summary);

    let csv = encode_text(&CsvEncoder::new(), &entries);
    let txt = encode_text(&TxtEncoder::new(), &entries);
    let document = html::render_document(&ctx);
    let image = html::render_image_table(&ctx);

    for rendered in [&csv, &txt, &image] {
        assert!(rendered.contains("CGPA: 8.76"), "missing CGPA in output");
        assert!(
            rendered.contains("Total Credits: 42.0"),
            "missing total credits in output"
        );
    }
    assert!(document.contains("<td>CGPA</td><td>8.76</td>"));
    assert!(document.contains("<td>Total Credits</td><td>42.0</td>"));
}

#[test]
fn csv_round_trips_entries() {
    let entries = build_entries(&[(7.0, 10.0)]);
    let csv = encode_text(&CsvEncoder::new(), &entries);

    let first_data_row = csv.lines().nth(1).expect("data row");
    let fields: Vec<&str> = first_data_row.split(',').collect();
    assert_eq!(fields.len(), 2);

    let grade: f64 = fields[0].parse().expect("grade");
    let credit: f64 = fields[1].parse().expect("credit");
    assert_eq!(grade, 7.0);
    assert_eq!(credit, 10.0);
}

#[test]
fn empty_transcript_exports_produce_header_only_bodies() {
    let entries = build_entries(&[]);

    let csv = encode_text(&CsvEncoder::new(), &entries);
    assert_eq!(csv.lines().next(), Some("Grade,Credits"));
    assert_eq!(csv.lines().count(), 3);

    let txt = encode_text(&TxtEncoder::new(), &entries);
    assert_eq!(txt.lines().count(), 3);

    let summary = TranscriptSummary::from_entries(&entries);
    let ctx = ExportContext::new(&entries, &summary);
    let bytes = XlsxEncoder::new().encode(&ctx).expect("encode xlsx");
    assert!(!bytes.is_empty());
}

#[test]
fn xlsx_is_a_zip_container() {
    let entries = build_entries(&[(8.5, 20.0)]);
    let summary = TranscriptSummary::from_entries(&entries);
    let ctx = ExportContext::new(&entries, &summary);

    let bytes = XlsxEncoder::new().encode(&ctx).expect("encode xlsx");
    assert_eq!(&bytes[0..4], b"PK\x03\x04");
}

#[test]
fn export_payload_names_and_mime_types() {
    let entries = build_entries(&[(7.0, 10.0)]);
    let summary = TranscriptSummary::from_entries(&entries);
    let ctx = ExportContext::new(&entries, &summary);

    let csv = export::export(ExportFormat::Csv, &ctx, None).expect("csv payload");
    assert_eq!(csv.file_name, "cgpa_export.csv");
    assert_eq!(csv.mime_type, "text/csv");

    let xlsx = export::export(ExportFormat::Xlsx, &ctx, None).expect("xlsx payload");
    assert_eq!(xlsx.file_name, "cgpa_export.xlsx");
    assert_eq!(
        xlsx.mime_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let txt = export::export(ExportFormat::Txt, &ctx, None).expect("txt payload");
    assert_eq!(txt.file_name, "cgpa_export.txt");
    assert_eq!(txt.mime_type, "text/plain");
}

#[test]
fn export_to_file_writes_the_encoded_bytes() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output_path = temp_dir.path().join("cgpa_export.csv");

    let entries = build_entries(&[(8.5, 20.0), (9.0, 22.0)]);
    let summary = TranscriptSummary::from_entries(&entries);
    let ctx = ExportContext::new(&entries, &summary);

    CsvEncoder::new()
        .export_to_file(&ctx, &output_path)
        .expect("export to file");

    let written = std::fs::read_to_string(&output_path).expect("read exported file");
    assert!(written.starts_with("Grade,Credits"));
    assert!(written.contains("CGPA: 8.76"));
}

#[test]
fn document_export_fails_cleanly_without_a_converter() {
    let entries = build_entries(&[(8.5, 20.0)]);
    let summary = TranscriptSummary::from_entries(&entries);
    let ctx = ExportContext::new(&entries, &summary);

    // A bogus converter binary must surface as an error, not a panic,
    // and must not leave the session unusable.
    let result = export::export(
        ExportFormat::Pdf,
        &ctx,
        Some("/definitely/not/a/browser"),
    );
    assert!(result.is_err());
}
