//! Command-line interface definition for log2wigle
//!
//! Provides argument parsing and normalization of dragged/pasted paths.

use clap::Parser;
use std::path::PathBuf;

/// Convert 8-column capture logs into WiGLE-compatible CSV files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "log2wigle",
    version,
    about = "Convert 8-column capture logs into WiGLE-compatible CSV files",
    long_about = r#"
╔══════════════════════════════════════════════════════════╗
║                      LOG2WIGLE v1.0.0                    ║
║            Capture Log to WiGLE CSV Converter            ║
╚══════════════════════════════════════════════════════════╝

Reads a comma-delimited capture log, keeps the first 8 fields of every row
that has at least 8, and writes a WiGLE-compatible CSV next to the input
(<name>.wigle.csv). Rows with fewer than 8 fields are dropped silently.

EXAMPLES:
    # Convert a file given on the command line
    log2wigle /captures/drive.log

    # No argument: prompt for a path (drag the file into the terminal)
    log2wigle

    # Script-friendly output
    log2wigle --quiet /captures/drive.log
"#
)]
pub struct Args {
    /// Path to the input log file (you can drag the file into the terminal)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Input path with drag-and-drop artifacts stripped
    pub fn normalized_input(&self) -> Option<PathBuf> {
        self.input
            .as_ref()
            .and_then(|p| p.to_str())
            .map(|s| PathBuf::from(normalize_path(s)))
    }
}

/// Strip surrounding whitespace and quotes from a dragged/pasted path
pub fn normalize_path(raw: &str) -> &str {
    raw.trim()
        .trim_matches('"')
        .trim_matches('\'')
}
