//! Interactive session command handler
//!
//! One action runs to completion before the next line is read; the session
//! object is created on entry and dropped (with all recorded entries) when
//! the loop ends.

use super::export::write_export;
use cgpa_calc::config::Config;
use cgpa_calc::core::export::ExportFormat;
use cgpa_calc::core::models::{GRADE_MAX, GRADE_MIN};
use cgpa_calc::core::session::Session;
use cgpa_calc::{error, info};
use std::io::{self, Write};

/// Run the interactive calculator session.
pub fn run(config: &Config) {
    println!("=== CGPA Calculator ===");
    println!("Type 'help' for the list of actions.\n");

    let mut session = Session::new();
    info!("Interactive session started");

    loop {
        print!("cgpa> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break, // EOF ends the session
            Ok(_) => {
                if !dispatch(line.trim(), &mut session, config) {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read input: {e}");
                break;
            }
        }
    }

    println!("Session ended.");
    info!("Interactive session ended");
}

/// Handle one input line. Returns `false` when the session should end.
fn dispatch(line: &str, session: &mut Session, config: &Config) -> bool {
    let mut parts = line.split_whitespace();
    let Some(action) = parts.next() else {
        return true;
    };

    match action {
        "add" => handle_add(parts.next(), parts.next(), session),
        "remove" | "undo" => handle_remove(session),
        "clear" => {
            session.clear_all();
            println!("✓ All semesters cleared.");
        }
        "list" | "show" => print_table(session),
        "export" => handle_export(parts.next(), session, config),
        "help" => print_help(),
        "quit" | "exit" | "q" => return false,
        other => {
            println!("✗ Unknown action '{other}'. Type 'help' for the list.");
        }
    }

    true
}

fn handle_add(grade_arg: Option<&str>, credit_arg: Option<&str>, session: &mut Session) {
    let (Some(grade_str), Some(credit_str)) = (grade_arg, credit_arg) else {
        println!("✗ Usage: add <grade> <credit>");
        return;
    };

    let Ok(grade) = grade_str.parse::<f64>() else {
        println!("✗ Grade must be a number, got '{grade_str}'");
        return;
    };
    let Ok(credit) = credit_str.parse::<f64>() else {
        println!("✗ Credits must be a number, got '{credit_str}'");
        return;
    };

    match session.add_entry(grade, credit) {
        Ok(_) => {
            println!("✓ Added: grade = {grade}, credits = {credit}");
            print_cgpa_line(session);
        }
        Err(e) => println!("✗ {e}"),
    }
}

fn handle_remove(session: &mut Session) {
    // The remove control is disabled while the transcript is empty
    match session.remove_last() {
        Some(entry) => {
            println!(
                "✓ Last semester removed (grade = {}, credits = {}).",
                entry.grade(),
                entry.credit()
            );
        }
        None => println!("✗ Nothing to remove — no semesters recorded."),
    }
}

fn handle_export(format_arg: Option<&str>, session: &Session, config: &Config) {
    // Export is disabled while the transcript is empty
    if session.transcript().is_empty() {
        println!("✗ Nothing to export — add at least one semester first.");
        return;
    }

    let format_str = format_arg.unwrap_or(&config.export.default_format);
    match write_export(session, format_str, None, config) {
        Ok(path) => println!("✓ Exported: {}", path.display()),
        Err(e) => {
            error!("Export failed: {e}");
            eprintln!("{e}");
        }
    }
}

fn print_table(session: &Session) {
    if session.transcript().is_empty() {
        println!("No semesters recorded yet.");
        return;
    }

    println!("  #    Grade    Credits");
    for (i, entry) in session.transcript().entries().iter().enumerate() {
        println!(
            "{:>3}  {:>7.2}  {:>9.1}",
            i + 1,
            entry.grade(),
            entry.credit()
        );
    }
    print_cgpa_line(session);
}

fn print_cgpa_line(session: &Session) {
    let summary = session.summary();
    println!(
        "Your CGPA is: {:.2}  (total credits: {:.1})",
        summary.cgpa, summary.total_credits
    );
}

fn print_help() {
    let formats: Vec<&str> = ExportFormat::ALL.iter().map(ExportFormat::extension).collect();
    println!("Actions:");
    println!("  add <grade> <credit>   Record a semester (grade {GRADE_MIN}-{GRADE_MAX}, step 0.1; credits >= 0, step 0.5)");
    println!("  remove                 Remove the most recently added semester");
    println!("  clear                  Remove all semesters");
    println!("  list                   Show recorded semesters and the current CGPA");
    println!("  export [format]        Write cgpa_export.<ext>  (formats: {})", formats.join(", "));
    println!("  help                   Show this list");
    println!("  quit                   End the session");
}
