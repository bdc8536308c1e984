//! One-shot export command handler
//!
//! Builds a throwaway session from GRADE:CREDIT pairs given on the command
//! line and writes the encoded export, without entering the interactive loop.

use cgpa_calc::config::Config;
use cgpa_calc::core::export::ExportFormat;
use cgpa_calc::core::session::Session;
use cgpa_calc::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the export command.
///
/// # Arguments
/// * `entry_args` - Semester entries as `GRADE:CREDIT` strings
/// * `format` - Requested format; falls back to config `default_format`
/// * `output` - Explicit output path; defaults to config `out_dir`
/// * `config` - Loaded configuration
pub fn run(entry_args: &[String], format: Option<&str>, output: Option<&Path>, config: &Config) {
    match export_entries(entry_args, format, output, config) {
        Ok(path) => println!("✓ Exported: {}", path.display()),
        Err(e) => {
            error!("Export failed: {e}");
            eprintln!("{e}");
        }
    }
}

fn export_entries(
    entry_args: &[String],
    format: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    if entry_args.is_empty() {
        return Err("✗ No entries given. Pass GRADE:CREDIT pairs, e.g. 8.5:20 9.0:22".to_string());
    }

    let mut session = Session::new();
    for arg in entry_args {
        let (grade, credit) = parse_entry_arg(arg)?;
        session
            .add_entry(grade, credit)
            .map_err(|e| format!("✗ Invalid entry '{arg}': {e}"))?;
    }

    let format_str = format.unwrap_or(&config.export.default_format);
    write_export(&session, format_str, output, config)
}

/// Encode the session in the requested format and write it to disk.
///
/// Shared with the interactive session's export action: resolves the format
/// string, the converter override, and the output path from configuration.
///
/// # Errors
/// Returns a user-facing message when the format is unknown, encoding fails,
/// or the file cannot be written.
pub fn write_export(
    session: &Session,
    format_str: &str,
    output: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ExportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: csv, xlsx, txt, pdf, or png"))?;

    let converter = (!config.export.pdf_converter.is_empty())
        .then_some(config.export.pdf_converter.as_str());

    let payload = session
        .export(format, converter)
        .map_err(|e| format!("✗ Failed to encode {format} export: {e}"))?;

    let final_path: PathBuf = if let Some(out) = output {
        out.to_path_buf()
    } else {
        let out_dir = if config.export.out_dir.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&config.export.out_dir)
        };
        std::fs::create_dir_all(&out_dir).map_err(|e| {
            format!(
                "✗ Failed to create export directory {}: {e}",
                out_dir.display()
            )
        })?;
        out_dir.join(&payload.file_name)
    };

    std::fs::write(&final_path, &payload.bytes)
        .map_err(|e| format!("✗ Failed to write {}: {e}", final_path.display()))?;

    info!(
        "Export written to: {} ({})",
        final_path.display(),
        payload.mime_type
    );
    Ok(final_path)
}

fn parse_entry_arg(arg: &str) -> Result<(f64, f64), String> {
    let (grade_str, credit_str) = arg
        .split_once(':')
        .ok_or_else(|| format!("✗ Invalid entry '{arg}': expected GRADE:CREDIT"))?;

    let grade: f64 = grade_str
        .trim()
        .parse()
        .map_err(|_| format!("✗ Invalid grade in '{arg}': '{grade_str}' is not a number"))?;
    let credit: f64 = credit_str
        .trim()
        .parse()
        .map_err(|_| format!("✗ Invalid credits in '{arg}': '{credit_str}' is not a number"))?;

    Ok((grade, credit))
}
