//! Headless-browser conversion used by the document and image encoders
//!
//! Renders a self-contained HTML page to PDF or PNG using headless
//! Chrome/Chromium (or another converter binary supplied by the user).
//! Temp files live under the OS temp dir only for the duration of one
//! conversion call.

use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};

/// What the browser should produce from the rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureTarget {
    /// Paginated PDF document
    Pdf,
    /// PNG screenshot at a fixed viewport size
    Screenshot {
        /// Viewport width in pixels
        width: u32,
        /// Viewport height in pixels
        height: u32,
    },
}

impl CaptureTarget {
    const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Screenshot { .. } => "png",
        }
    }
}

/// Distinguishes temp files when one process runs several exports
static CAPTURE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Detect an available Chrome/Chromium browser
#[must_use]
pub fn detect_browser() -> Option<String> {
    // Try common Chrome/Chromium executables in order of preference
    let candidates = [
        "google-chrome",
        "chrome",
        "chromium",
        "chromium-browser",
        "google-chrome-stable",
        "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome", // macOS
        "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",   // Windows
        "C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
    ];

    for candidate in candidates {
        if let Ok(output) = Command::new(candidate).arg("--version").output() {
            if output.status.success() {
                return Some(candidate.to_owned());
            }
        }
    }

    None
}

/// Run the browser over an HTML file
fn convert(
    browser: &str,
    html_path: &Path,
    output_path: &Path,
    target: CaptureTarget,
) -> Result<(), Box<dyn Error>> {
    let mut command = Command::new(browser);
    command
        .arg("--headless=new")
        .arg("--disable-gpu")
        .arg("--no-sandbox")
        .arg("--hide-scrollbars")
        // Force complete rendering before capture
        .arg("--run-all-compositor-stages-before-draw")
        .arg("--virtual-time-budget=10000");

    match target {
        CaptureTarget::Pdf => {
            command.arg(format!("--print-to-pdf={}", output_path.display()));
        }
        CaptureTarget::Screenshot { width, height } => {
            command
                .arg(format!("--window-size={width},{height}"))
                .arg(format!("--screenshot={}", output_path.display()));
        }
    }

    let status = command
        .arg(format!("file://{}", html_path.canonicalize()?.display()))
        .stderr(Stdio::null())
        .stdout(Stdio::null())
        .status()?;

    if !status.success() {
        return Err("Browser conversion failed".into());
    }

    Ok(())
}

/// Convert an in-memory HTML page to the requested container bytes.
///
/// # Arguments
/// * `converter` - Browser binary override; auto-detected when `None`
/// * `html` - Self-contained page to render
/// * `target` - PDF or sized PNG capture
///
/// # Errors
/// Returns an error when no browser is available, when the conversion
/// process fails, or on temp-file I/O failures. The temp HTML and output
/// files never outlive the call.
pub fn capture_html(
    converter: Option<&str>,
    html: &str,
    target: CaptureTarget,
) -> Result<Vec<u8>, Box<dyn Error>> {
    let browser = match converter {
        Some(c) => c.to_owned(),
        None => detect_browser().ok_or_else(missing_browser_error)?,
    };

    let seq = CAPTURE_SEQ.fetch_add(1, Ordering::SeqCst);
    let stem = format!("cgpacalc_export_{}_{seq}", std::process::id());
    let temp_dir = std::env::temp_dir();
    let html_path = temp_dir.join(format!("{stem}.html"));
    let output_path = temp_dir.join(format!("{stem}.{}", target.extension()));

    fs::write(&html_path, html)?;
    crate::debug!("Rendering {} via {browser}", output_path.display());

    let converted = convert(&browser, &html_path, &output_path, target);
    let _ = fs::remove_file(&html_path);
    if let Err(e) = converted {
        let _ = fs::remove_file(&output_path);
        return Err(e);
    }

    let bytes = fs::read(&output_path);
    let _ = fs::remove_file(&output_path);
    Ok(bytes?)
}

fn missing_browser_error() -> Box<dyn Error> {
    "Conversion failed: Chrome/Chromium not found.\n\
     \n\
     PDF and PNG exports need Chrome or Chromium installed:\n\
     \n\
     • Ubuntu/Debian:  sudo apt install chromium-browser\n\
     • Fedora/RHEL:    sudo dnf install chromium\n\
     • macOS:          brew install --cask google-chrome\n\
     • Windows:        Download from https://www.google.com/chrome/\n\
     \n\
     Alternatively, point cgpacalc at a converter binary:\n\
       --pdf-converter /path/to/chrome\n\
     or set the `pdf_converter` config key.\n\
    "
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_extension_tracks_target() {
        assert_eq!(CaptureTarget::Pdf.extension(), "pdf");
        assert_eq!(
            CaptureTarget::Screenshot {
                width: 600,
                height: 400
            }
            .extension(),
            "png"
        );
    }

    #[test]
    fn nonexistent_converter_surfaces_an_error() {
        let result = capture_html(
            Some("/definitely/not/a/browser"),
            "<html><body>x</body></html>",
            CaptureTarget::Pdf,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_browser_error_mentions_override_flag() {
        let message = missing_browser_error().to_string();
        assert!(message.contains("--pdf-converter"));
        assert!(message.contains("pdf_converter"));
    }
}
