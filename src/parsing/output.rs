//! Writer for matched pairs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::matching::results::MatchMapping;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Cannot create output file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed writing output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Create (or truncate) `path` and close it again
///
/// Run this before any comparison work so an unwritable destination fails fast.
///
/// # Errors
///
/// Returns `OutputError::Create` if the file cannot be created.
pub fn ensure_writable(path: &Path) -> Result<(), OutputError> {
    File::create(path)
        .map(drop)
        .map_err(|source| OutputError::Create {
            path: path.to_path_buf(),
            source,
        })
}

/// Write one `query\tmatch` line per mapping entry to `path`
///
/// The file is truncated first. Line order follows the mapping's iteration
/// order and is not stable between runs.
///
/// # Errors
///
/// Returns `OutputError::Create` if the file cannot be created, or
/// `OutputError::Write` if writing or flushing fails.
pub fn write_pairs(path: &Path, mapping: &MatchMapping) -> Result<usize, OutputError> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    let written = write_pairs_to(&mut writer, mapping).map_err(write_err)?;
    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .and_then(|file| file.sync_all())
        .map_err(write_err)?;

    Ok(written)
}

/// Write pairs to any writer, returning the number of lines written
///
/// # Errors
///
/// Propagates any I/O error from the writer.
pub fn write_pairs_to<W: Write>(writer: &mut W, mapping: &MatchMapping) -> std::io::Result<usize> {
    let mut written = 0;
    for (query, matched) in mapping.pairs() {
        writeln!(writer, "{query}\t{matched}")?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_pairs_to_buffer() {
        let mut mapping = MatchMapping::for_queries(2);
        mapping.insert("ACGA".to_string(), "ACGT".to_string());

        let mut buf = Vec::new();
        let written = write_pairs_to(&mut buf, &mapping).unwrap();

        assert_eq!(written, 1);
        assert_eq!(String::from_utf8(buf).unwrap(), "ACGA\tACGT\n");
    }

    #[test]
    fn test_write_pairs_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        std::fs::write(&path, "stale content\n").unwrap();

        let written = write_pairs(&path, &MatchMapping::default()).unwrap();
        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_ensure_writable_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");

        ensure_writable(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_ensure_writable_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.tsv");

        let result = ensure_writable(&path);
        assert!(matches!(result, Err(OutputError::Create { .. })));
    }
}
