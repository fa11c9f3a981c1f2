//! Filesystem primitives shared by the generators.

use std::fs::{DirBuilder, File};
use std::path::Path;

use crate::error::{DevgenError, DevgenResult};

/// Create `dir` and any missing parents (`rwxr-xr-x` on Unix).
pub fn ensure_dir(dir: &Path) -> DevgenResult<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(dir)
        .map_err(|source| DevgenError::DirectoryCreation {
            path: dir.to_path_buf(),
            source,
        })
}

/// Create-exclusively a file at `path`. Never overwrites.
pub fn create_new_file(path: &Path) -> DevgenResult<File> {
    File::create_new(path).map_err(|source| DevgenError::FileCreation {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_create_new_file_missing_parent() {
        let dir = TempDir::new().unwrap();
        let err = create_new_file(&dir.path().join("missing/x.sql")).unwrap_err();
        assert!(matches!(err, DevgenError::FileCreation { .. }));
        assert!(!err.is_already_exists());
    }
}
