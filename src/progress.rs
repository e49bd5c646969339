//! Progress display module
//!
//! Styled terminal output plus the throttled per-run progress tracking used
//! by the converter.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════╗
║                      LOG2WIGLE v1.0.0                    ║
║            Capture Log to WiGLE CSV Converter            ║
╚══════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a bytes-based progress bar
pub fn create_bytes_progress_bar(total_bytes: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {bytes}/{total_bytes} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("█▓░")
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Create a styled spinner for when the input size is unknown
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// A throttled progress update worth displaying
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    /// Valid rows written so far
    pub rows: u64,
    /// Raw bytes consumed from the input so far
    pub bytes: u64,
    /// Completion percentage, `None` when the input size is unknown
    pub percent: Option<f64>,
}

/// Final summary for a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    /// Total valid rows written
    pub rows: u64,
    /// Final completion percentage (100 when the input size was unknown)
    pub percent: f64,
}

/// Per-run progress state, discarded when the run ends.
///
/// Checkpoints every [`Self::UPDATE_EVERY`] valid rows; at a checkpoint the
/// completion percentage is bytes consumed over total input size, capped at
/// 100, and an update is surfaced only when the percentage moved by at least
/// [`Self::MIN_DELTA`] points since the last one. With the input size
/// unavailable the percentage is omitted while row counts keep flowing.
#[derive(Debug)]
pub struct ProgressTracker {
    total_bytes: Option<u64>,
    rows: u64,
    last_percent: Option<f64>,
}

impl ProgressTracker {
    /// Rows between progress checkpoints
    pub const UPDATE_EVERY: u64 = 500;
    /// Minimum percentage-point change worth redrawing
    pub const MIN_DELTA: f64 = 0.1;

    pub fn new(total_bytes: Option<u64>) -> Self {
        Self {
            total_bytes,
            rows: 0,
            last_percent: None,
        }
    }

    /// Valid rows recorded so far
    pub fn rows(&self) -> u64 {
        self.rows
    }

    fn percent(&self, bytes_consumed: u64) -> Option<f64> {
        match self.total_bytes {
            Some(total) if total > 0 => {
                Some((bytes_consumed as f64 / total as f64 * 100.0).min(100.0))
            }
            _ => None,
        }
    }

    /// Record one valid row written; returns an update when one is due.
    pub fn record_row(&mut self, bytes_consumed: u64) -> Option<ProgressUpdate> {
        self.rows += 1;

        if self.rows % Self::UPDATE_EVERY != 0 {
            return None;
        }

        match self.percent(bytes_consumed) {
            Some(pct) => {
                let moved = match self.last_percent {
                    Some(last) => (pct - last).abs() >= Self::MIN_DELTA,
                    None => true,
                };
                if !moved {
                    return None;
                }
                self.last_percent = Some(pct);
                Some(ProgressUpdate {
                    rows: self.rows,
                    bytes: bytes_consumed,
                    percent: Some(pct),
                })
            }
            // Size query failed: keep the row count moving, skip percentages
            None => Some(ProgressUpdate {
                rows: self.rows,
                bytes: bytes_consumed,
                percent: None,
            }),
        }
    }

    /// Produce the end-of-run summary
    pub fn finish(&self, bytes_consumed: u64) -> ProgressSummary {
        ProgressSummary {
            rows: self.rows,
            percent: self.percent(bytes_consumed).unwrap_or(100.0),
        }
    }
}

/// Terminal rendering for one conversion run
pub struct ProgressDisplay {
    bar: ProgressBar,
    quiet: bool,
}

impl ProgressDisplay {
    pub fn new(total_bytes: Option<u64>, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            match total_bytes {
                Some(total) if total > 0 => create_bytes_progress_bar(total, "rows: 0"),
                _ => create_spinner("rows: 0"),
            }
        };

        Self { bar, quiet }
    }

    pub fn update(&self, update: &ProgressUpdate) {
        if update.percent.is_some() {
            self.bar.set_position(update.bytes);
        }
        self.bar.set_message(format!("rows: {}", update.rows));
    }

    pub fn finish(&self, summary: &ProgressSummary) {
        self.bar.finish_and_clear();
        if !self.quiet {
            print_info(&format!(
                "Processed {} rows ({:.1}%)",
                summary.rows, summary.percent
            ));
        }
    }

    pub fn abandon(&self) {
        self.bar.finish_and_clear();
    }
}

/// Format a byte count for the configuration echo
pub fn format_size(bytes: u64) -> String {
    ByteSize(bytes).to_string()
}
