//! Model Loader - hash-verified artifacts
//!
//! A `LoadedModel` only exists after its SHA-256 matched (or was pinned).

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read model {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },
}

// ============================================================================
// LOADED MODEL
// ============================================================================

/// Verified model handle. Immutable, safe to share across evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedModel {
    path: PathBuf,
    hash: String,
}

impl LoadedModel {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lowercase hex SHA-256 of the artifact
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

// ============================================================================
// HASHING
// ============================================================================

/// Streaming SHA-256 of a file, lowercase hex
pub fn compute_file_hash(path: &Path) -> Result<String, ModelError> {
    let io_err = |source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::open(path).map_err(io_err)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(io_err)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Hash the artifact and compare against `expected_hash` (hex, case-insensitive).
///
/// `None` accepts whatever the file hashes to.
pub fn load_and_verify_model(
    path: impl AsRef<Path>,
    expected_hash: Option<&str>,
) -> Result<LoadedModel, ModelError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ModelError::NotFound(path.to_path_buf()));
    }

    let actual = compute_file_hash(path)?;

    if let Some(expected) = expected_hash {
        let expected = expected.trim().to_ascii_lowercase();
        if expected != actual {
            return Err(ModelError::HashMismatch { expected, actual });
        }
    }

    log::info!("Model verified: {} (sha256 {})", path.display(), actual);

    Ok(LoadedModel {
        path: path.to_path_buf(),
        hash: actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha256("hello")
    const HELLO_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    fn write_model(dir: &tempfile::TempDir, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join("m.bin");
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_compute_hash_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_model(&dir, b"hello");

        let hash = compute_file_hash(&path).unwrap();
        assert_eq!(hash, HELLO_SHA256);

        let model = load_and_verify_model(&path, Some(&hash)).unwrap();
        assert_eq!(model.path(), path.as_path());
        assert_eq!(model.hash(), HELLO_SHA256);
    }

    #[test]
    fn test_expected_hash_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_model(&dir, b"hello");
        let upper = HELLO_SHA256.to_ascii_uppercase();
        assert!(load_and_verify_model(&path, Some(&upper)).is_ok());
    }

    #[test]
    fn test_no_expected_hash_accepts_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_model(&dir, b"hello");
        let model = load_and_verify_model(&path, None).unwrap();
        assert_eq!(model.hash(), HELLO_SHA256);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_and_verify_model(dir.path().join("missing.bin"), None).unwrap_err();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn test_hash_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_model(&dir, b"hello");
        let err = load_and_verify_model(&path, Some("deadbeef")).unwrap_err();
        match err {
            ModelError::HashMismatch { expected, actual } => {
                assert_eq!(expected, "deadbeef");
                assert_eq!(actual, HELLO_SHA256);
            }
            other => panic!("expected HashMismatch, got {other:?}"),
        }
    }
}
