//! Integration tests driving the session object end-to-end

use cgpa_calc::core::export::ExportFormat;
use cgpa_calc::core::session::Session;

#[test]
fn full_session_lifecycle() {
    let mut session = Session::new();
    assert!(session.transcript().is_empty());

    session.add_entry(8.5, 20.0).expect("first entry");
    session.add_entry(9.0, 22.0).expect("second entry");

    let summary = session.summary();
    assert_eq!(summary.weighted_sum, 368.0);
    assert_eq!(summary.total_credits, 42.0);
    assert_eq!(format!("{:.2}", summary.cgpa), "8.76");

    // Adding then removing the last entry restores the prior state
    let before = session.transcript().clone();
    session.add_entry(6.0, 12.0).expect("third entry");
    session.remove_last().expect("removable entry");
    assert_eq!(session.transcript(), &before);

    session.clear_all();
    assert!(session.transcript().is_empty());
    assert_eq!(session.summary().cgpa, 0.0);
}

#[test]
fn repeated_add_remove_sequences_restore_exactly() {
    let mut session = Session::new();
    let pairs = [(8.5, 20.0), (9.0, 22.0), (7.0, 10.0), (6.25, 4.5)];

    for &(g, c) in &pairs {
        session.add_entry(g, c).expect("valid entry");
    }
    for _ in 0..pairs.len() {
        session.remove_last().expect("entry to remove");
    }

    assert!(session.transcript().is_empty());
    assert!(session.remove_last().is_none());
}

#[test]
fn rejected_entries_leave_the_session_untouched() {
    let mut session = Session::new();
    session.add_entry(8.0, 20.0).expect("valid entry");

    assert!(session.add_entry(10.5, 20.0).is_err());
    assert!(session.add_entry(-1.0, 20.0).is_err());
    assert!(session.add_entry(8.0, -2.0).is_err());

    assert_eq!(session.transcript().len(), 1);
    let summary = session.summary();
    assert_eq!(summary.total_credits, 20.0);
}

#[test]
fn zero_credit_session_reports_zero_cgpa() {
    let mut session = Session::new();
    session.add_entry(9.5, 0.0).expect("zero-credit entry");

    let summary = session.summary();
    assert_eq!(summary.total_credits, 0.0);
    assert_eq!(summary.cgpa, 0.0);
}

#[test]
fn session_export_covers_all_tabular_formats() {
    let mut session = Session::new();
    session.add_entry(7.0, 10.0).expect("valid entry");

    for format in [ExportFormat::Csv, ExportFormat::Txt, ExportFormat::Xlsx] {
        let payload = session.export(format, None).expect("export payload");
        assert_eq!(payload.file_name, format.file_name());
        assert_eq!(payload.mime_type, format.mime_type());
        assert!(!payload.bytes.is_empty());
    }
}

#[test]
fn empty_session_export_is_header_only_at_the_library_level() {
    // The interactive control refuses an empty export; the library itself
    // yields a header-plus-summary body without error.
    let session = Session::new();
    let payload = session
        .export(ExportFormat::Csv, None)
        .expect("empty export payload");

    let text = String::from_utf8(payload.bytes).expect("utf-8 csv");
    assert_eq!(text.lines().next(), Some("Grade,Credits"));
    assert_eq!(text.lines().count(), 3);
}
