//! Filesystem utilities.

use std::fs;
use std::path::Path;

use crate::util::errors::BuildError;

/// Ensure a directory exists, creating it and any missing parents.
///
/// Idempotent: an existing directory is left untouched.
pub fn ensure_dir(path: &Path) -> Result<(), BuildError> {
    if path.is_dir() {
        return Ok(());
    }

    tracing::debug!(path = %path.display(), "creating directory");
    fs::create_dir_all(path).map_err(|source| BuildError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("build").join("py").join("ext");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Second call is a no-op
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_dir_fails_on_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("occupied");
        fs::write(&file, "not a directory").unwrap();

        let err = ensure_dir(&file.join("sub")).unwrap_err();
        assert!(matches!(err, BuildError::Filesystem { .. }));
    }
}
