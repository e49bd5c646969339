//! Conversion engine
//!
//! Single-pass transform of an 8-column delimited capture log into a
//! WiGLE-compatible CSV written next to the input. Records with fewer than 8
//! fields are dropped silently; extra fields beyond the 8th are discarded.
//! Any I/O failure mid-pass aborts the run and leaves whatever was already
//! flushed on disk.

use crate::cli::Args;
use crate::encoding::{open_decoded, ByteCounter, DecodedInput};
use crate::output::{derive_output_path, CsvOutput};
use crate::progress::{format_size, print_header, print_info, ProgressDisplay, ProgressTracker};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Minimum field count for a record to be converted
pub const REQUIRED_FIELDS: usize = 8;

/// Failure modes of a conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("failed to open input {path}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output {path}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed while reading {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed while writing {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Path of the written WiGLE CSV
    pub output_path: PathBuf,
    /// Data rows written (header excluded)
    pub rows_written: u64,
}

/// Converter options
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub quiet: bool,
}

impl ConvertOptions {
    pub fn from_args(args: &Args) -> Self {
        Self { quiet: args.quiet }
    }
}

/// Main converter
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert one input file, returning the output path and row count.
    ///
    /// All per-run state lives on the stack of this call and is discarded
    /// when it returns; runs are independent.
    pub fn convert(&self, input: &Path) -> Result<Conversion, ConvertError> {
        if !input.is_file() {
            return Err(ConvertError::InputNotFound(input.to_path_buf()));
        }

        let output_path = derive_output_path(input);

        // A failed size query only disables percentage display
        let total_bytes = fs::metadata(input).map(|m| m.len()).ok();

        if !self.options.quiet {
            print_header("Converting...");
            print_info(&format!("Input:  {}", input.display()));
            print_info(&format!("Output: {}", output_path.display()));
            if let Some(size) = total_bytes {
                print_info(&format!("Size:   {}", format_size(size)));
            }
        }

        let (decoded, counter) = open_decoded(input).map_err(|source| ConvertError::OpenInput {
            path: input.to_path_buf(),
            source,
        })?;

        let mut output =
            CsvOutput::create(&output_path).map_err(|source| ConvertError::CreateOutput {
                path: output_path.clone(),
                source,
            })?;

        let display = ProgressDisplay::new(total_bytes, self.options.quiet);
        let mut tracker = ProgressTracker::new(total_bytes);

        let result = self.stream_records(
            input,
            decoded,
            &counter,
            &mut output,
            &mut tracker,
            &display,
        );

        if let Err(e) = result {
            display.abandon();
            return Err(e);
        }

        display.finish(&tracker.finish(counter.get()));

        Ok(Conversion {
            output_path,
            rows_written: output.rows_written(),
        })
    }

    fn stream_records(
        &self,
        input: &Path,
        decoded: DecodedInput,
        counter: &ByteCounter,
        output: &mut CsvOutput,
        tracker: &mut ProgressTracker,
        display: &ProgressDisplay,
    ) -> Result<(), ConvertError> {
        let output_path = output.path().to_path_buf();

        output
            .write_header()
            .map_err(|source| ConvertError::WriteOutput {
                path: output_path.clone(),
                source,
            })?;

        // flexible: ragged records are data here, not parse errors
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(decoded);

        let mut record = csv::StringRecord::new();
        let mut skipped: u64 = 0;

        loop {
            let more = reader
                .read_record(&mut record)
                .map_err(|source| ConvertError::ReadInput {
                    path: input.to_path_buf(),
                    source,
                })?;

            if !more {
                break;
            }

            if record.len() < REQUIRED_FIELDS {
                skipped += 1;
                continue;
            }

            output
                .write_row(record.iter().take(REQUIRED_FIELDS))
                .map_err(|source| ConvertError::WriteOutput {
                    path: output_path.clone(),
                    source,
                })?;

            if let Some(update) = tracker.record_row(counter.get()) {
                display.update(&update);
            }
        }

        output.flush().map_err(|source| ConvertError::WriteOutput {
            path: output_path.clone(),
            source,
        })?;

        if skipped > 0 {
            log::debug!(
                "skipped {} records with fewer than {} fields in {}",
                skipped,
                REQUIRED_FIELDS,
                input.display()
            );
        }

        Ok(())
    }
}
