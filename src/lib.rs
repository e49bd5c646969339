//! # log2wigle
//!
//! Convert simple 8-column capture logs into WiGLE-compatible CSV files.
//!
//! ## Features
//!
//! - **Single-pass conversion**: keeps the first 8 fields of every row with
//!   at least 8, drops the rest silently
//! - **WiGLE header**: fixed `MAC,SSID,AuthMode,FirstSeen,Channel,RSSI,
//!   CurrentLatitude,CurrentLongitude` header before the data
//! - **Permissive decoding**: encoding sniffing with lossy replacement, so a
//!   few bad bytes never kill a conversion
//! - **Throttled progress**: byte-position percentage reported every 500
//!   rows, redrawn only on a ≥0.1 point change
//!
//! ## Usage
//!
//! ```bash
//! # Convert a file given on the command line
//! log2wigle /captures/drive.log
//!
//! # No argument: interactive prompt
//! log2wigle
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use log2wigle::convert::{Converter, ConvertOptions};
//! use std::path::Path;
//!
//! let converter = Converter::new(ConvertOptions { quiet: true });
//! let conversion = converter.convert(Path::new("drive.log")).unwrap();
//! println!("{} rows -> {}", conversion.rows_written, conversion.output_path.display());
//! ```

pub mod cli;
pub mod convert;
pub mod encoding;
pub mod output;
pub mod progress;
pub mod prompt;

pub use cli::Args;
pub use convert::{ConvertError, ConvertOptions, Converter, Conversion};
