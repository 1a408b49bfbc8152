//! Line source for piped station-dump output.
//!
//! Reads the whole input stream, then splits it into newline-terminated
//! lines. Text after the last newline is not a complete line and is dropped.

use std::io::{self, IsTerminal, Read};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No input: pipe the output of `iw dev <iface> station dump` into stdin")]
    NoInput,

    #[error("Failed to read input: {0}")]
    Read(#[from] io::Error),
}

/// Split text into lines, keeping only those terminated by `'\n'`.
///
/// The terminator is stripped. A carriage return before it is kept.
///
/// ```
/// use wifi_station_exporter::input::split_terminated_lines;
///
/// assert_eq!(split_terminated_lines("a\nb\n"), vec!["a", "b"]);
/// assert_eq!(split_terminated_lines("a\npartial"), vec!["a"]);
/// ```
pub fn split_terminated_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n')
        .filter_map(|line| line.strip_suffix('\n'))
        .map(str::to_string)
        .collect()
}

/// Drain a reader and return its complete lines.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub fn read_lines<R: Read>(mut reader: R) -> Result<Vec<String>, InputError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    let text = String::from_utf8_lossy(&raw);
    let lines = split_terminated_lines(&text);
    debug!("Read {} bytes, {} lines", raw.len(), lines.len());

    Ok(lines)
}

/// Read all lines from stdin.
///
/// Fails with [`InputError::NoInput`] when stdin is an interactive terminal.
pub fn read_stdin_lines() -> Result<Vec<String>, InputError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(InputError::NoInput);
    }
    read_lines(stdin.lock())
}
