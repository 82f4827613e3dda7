//! Whole-file document I/O.
//!
//! Documents are read in full and, when changed, overwritten in full. Each
//! handle is scoped to a single call.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use memchr::memchr;

use crate::error::MigrateError;

/// Default read limit: 10 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

const BINARY_SNIFF_BYTES: usize = 8192;

/// Quick binary detection - checks first 8KB for NULL bytes.
#[must_use]
pub fn is_binary(buffer: &[u8]) -> bool {
    let check_len = buffer.len().min(BINARY_SNIFF_BYTES);
    memchr(0, &buffer[..check_len]).is_some()
}

/// Read a document as UTF-8 text with size and binary checks.
///
/// Invalid UTF-8 is rejected rather than decoded lossily so a later rewrite
/// cannot alter bytes outside the transformed region.
///
/// # Errors
///
/// Returns `TooLarge`, `BinaryFile`, `Encoding`, or `Io` on failure.
pub fn read_document(path: &Path, max_bytes: u64) -> Result<String, MigrateError> {
    let metadata = fs::metadata(path)?;
    if metadata.len() > max_bytes {
        return Err(MigrateError::TooLarge(metadata.len(), max_bytes));
    }

    let mut file = fs::File::open(path)?;
    let mut buffer = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or_default());
    file.read_to_end(&mut buffer)?;

    if is_binary(&buffer) {
        return Err(MigrateError::BinaryFile);
    }
    String::from_utf8(buffer).map_err(|_| MigrateError::Encoding)
}

/// Overwrite a document with `content`.
///
/// # Errors
///
/// Returns `Io` when the file cannot be created or written.
pub fn write_document(path: &Path, content: &str) -> Result<(), MigrateError> {
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_write_roundtrip() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("note.md");
        write_document(&p, "# 제목\n").unwrap();
        assert_eq!(read_document(&p, 1024).unwrap(), "# 제목\n");
    }

    #[test]
    fn test_binary_rejected() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("binary.md");
        fs::write(&p, b"# a\x00b").unwrap();
        assert!(matches!(
            read_document(&p, 1024),
            Err(MigrateError::BinaryFile)
        ));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("latin1.md");
        fs::write(&p, b"# caf\xe9\n").unwrap();
        assert!(matches!(read_document(&p, 1024), Err(MigrateError::Encoding)));
    }

    #[test]
    fn test_file_too_large() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("large.md");
        fs::write(&p, "12345678901234567890").unwrap();
        assert!(matches!(
            read_document(&p, 10),
            Err(MigrateError::TooLarge(20, 10))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = read_document(&dir.path().join("missing.md"), 1024);
        assert!(matches!(result, Err(MigrateError::Io(_))));
    }
}
