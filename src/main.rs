//! log2wigle - capture log to WiGLE CSV converter
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use log2wigle::cli::Args;
use log2wigle::convert::{ConvertError, ConvertOptions, Converter};
use log2wigle::progress::{print_banner, print_error, print_info, print_success};
use log2wigle::prompt::prompt_for_file;

// Exit codes: user declining to pick a file is not a failure, and a missing
// input is distinguished from a mid-conversion I/O failure.
const EXIT_OK: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_NOT_FOUND: i32 = 2;

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    process::exit(run(args));
}

fn run(args: Args) -> i32 {
    if !args.quiet {
        print_banner();
    }

    let input = match resolve_input(&args) {
        Resolved::Path(path) => path,
        Resolved::Declined => {
            print_info("No file provided. Exiting.");
            return EXIT_OK;
        }
        Resolved::NotFound(path) => {
            print_error(&format!("File not found: {}", path.display()));
            return EXIT_NOT_FOUND;
        }
    };

    let converter = Converter::new(ConvertOptions::from_args(&args));

    match converter.convert(&input) {
        Ok(conversion) => {
            print_success(&format!(
                "Done! WiGLE CSV saved as: {}",
                conversion.output_path.display()
            ));
            EXIT_OK
        }
        Err(ConvertError::InputNotFound(path)) => {
            print_error(&format!("File not found: {}", path.display()));
            EXIT_NOT_FOUND
        }
        Err(e) => {
            print_error(&format!("{}", e));

            // Print chain of errors
            let mut source = e.source();
            while let Some(err) = source {
                print_error(&format!("  Caused by: {}", err));
                source = err.source();
            }

            EXIT_FAILURE
        }
    }
}

enum Resolved {
    Path(PathBuf),
    Declined,
    NotFound(PathBuf),
}

/// Resolve the input path from the argument or the interactive prompt
fn resolve_input(args: &Args) -> Resolved {
    match args.normalized_input() {
        Some(path) => {
            if path.is_file() {
                Resolved::Path(path)
            } else {
                Resolved::NotFound(path)
            }
        }
        None => match prompt_for_file() {
            Some(path) => Resolved::Path(path),
            None => Resolved::Declined,
        },
    }
}
