//! Interactive prompt loop
//!
//! Used when no path is given on the command line: re-prompts until the user
//! supplies an existing file, or gives up with `q`/EOF.

use crate::cli::normalize_path;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const PROMPT: &str = "Drag or write file here (or type 'q' to quit): ";

/// Prompt on stdin/stdout until a valid file path is given.
///
/// Returns `None` when the user quits (explicitly or via EOF).
pub fn prompt_for_file() -> Option<PathBuf> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_loop(stdin.lock(), stdout.lock(), Path::is_file).unwrap_or(None)
}

/// The re-prompt loop, generic over its streams and the file check so the
/// control flow is testable without a terminal.
fn prompt_loop<R, W, F>(mut input: R, mut output: W, is_file: F) -> io::Result<Option<PathBuf>>
where
    R: BufRead,
    W: Write,
    F: Fn(&Path) -> bool,
{
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF counts as quitting
            writeln!(output)?;
            return Ok(None);
        }

        let entered = line.trim();
        if entered.is_empty() {
            writeln!(
                output,
                "Please type a path or drag a file into the terminal. Type 'q' to quit."
            )?;
            continue;
        }

        if matches!(entered.to_lowercase().as_str(), "q" | "quit" | "exit") {
            return Ok(None);
        }

        let path = PathBuf::from(normalize_path(entered));
        if is_file(&path) {
            return Ok(Some(path));
        }

        writeln!(
            output,
            "File not found: {}\nPlease try again or type 'q' to quit.",
            path.display()
        )?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, is_file: impl Fn(&Path) -> bool) -> Option<PathBuf> {
        let mut output = Vec::new();
        prompt_loop(Cursor::new(input), &mut output, is_file).unwrap()
    }

    #[test]
    fn test_quit_immediately() {
        assert_eq!(run("q\n", |_| false), None);
        assert_eq!(run("QUIT\n", |_| false), None);
        assert_eq!(run("exit\n", |_| false), None);
    }

    #[test]
    fn test_eof_quits() {
        assert_eq!(run("", |_| false), None);
    }

    #[test]
    fn test_valid_path_returned() {
        let result = run("/tmp/capture.log\n", |_| true);
        assert_eq!(result, Some(PathBuf::from("/tmp/capture.log")));
    }

    #[test]
    fn test_quoted_dragged_path_is_normalized() {
        let result = run("'/tmp/my capture.log'\n", |_| true);
        assert_eq!(result, Some(PathBuf::from("/tmp/my capture.log")));
    }

    #[test]
    fn test_reprompts_on_empty_and_missing() {
        // Blank line, then a missing file, then a good one
        let calls = std::cell::RefCell::new(0);
        let result = run("\n/missing.log\n/found.log\n", |p| {
            *calls.borrow_mut() += 1;
            p == Path::new("/found.log")
        });
        assert_eq!(result, Some(PathBuf::from("/found.log")));
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_missing_then_quit() {
        assert_eq!(run("/missing.log\nq\n", |_| false), None);
    }
}
