//! Grid line source.
//!
//! Reads lines from stdin or a file until the first empty line or end of
//! input. Everything after the blank line is ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Errors that can occur while reading the grid.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to open input file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input: {0}")]
    Read(#[from] io::Error),
}

/// Open the grid source: the file at `path`, or stdin when `None`.
pub fn open_source(path: Option<&Path>) -> Result<Box<dyn BufRead>, InputError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| InputError::Open {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Read grid lines until the first empty line or end of input.
///
/// A trailing carriage return is stripped from each line. Bytes that are not
/// valid UTF-8 decode to U+FFFD, which is background for any ASCII marker.
pub fn read_lines<R: BufRead>(mut reader: R) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        if buf.is_empty() {
            break;
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    log::debug!("read {} grid line(s)", lines.len());
    Ok(lines)
}
