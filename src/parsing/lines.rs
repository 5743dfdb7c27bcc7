//! Loader for newline-delimited sequence lists.
//!
//! Each line is one sequence, taken verbatim: content is split on `'\n'` only,
//! so a trailing `'\r'` or whitespace stays part of the sequence. A final
//! newline does not add an empty sequence. Files ending in `.gz` are
//! decompressed transparently.

use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{} is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },
}

/// Load every line of `path` as a sequence
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, read, or
/// decompressed, or `ParseError::InvalidUtf8` if its content is not UTF-8.
pub fn load_sequences(path: &Path) -> Result<Vec<String>, ParseError> {
    let bytes = if is_gzipped(path) {
        let mut decoder = GzDecoder::new(std::fs::File::open(path)?);
        let mut buf = Vec::new();
        decoder.read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(path)?
    };

    let text = String::from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    let sequences = split_sequences(&text);
    debug!("Loaded {} sequences from {}", sequences.len(), path.display());
    Ok(sequences)
}

/// Split text into sequences, one per `'\n'`-terminated line
#[must_use]
pub fn split_sequences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').map(str::to_string).collect()
}

fn is_gzipped(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}
