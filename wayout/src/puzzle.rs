//! Puzzle-file reading.
//!
//! A puzzle is plain text: one maze row per line. Blank lines never belong
//! to a maze; on a stream they terminate it (so a puzzle can be typed
//! interactively and finished with an empty line), while
//! [`load_puzzle`] simply skips them.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read maze rows from a stream until EOF or the first blank line.
pub fn read_puzzle<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        rows.push(line);
    }
    Ok(rows)
}

/// Read maze rows from a file, skipping blank lines entirely.
pub fn load_puzzle<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            rows.push(line);
        }
    }
    Ok(rows)
}
