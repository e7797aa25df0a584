//! SHA-256 digest of a directory tree
//!
//! The digest covers every regular file's relative path and content, in
//! sorted path order, so it is stable across filesystems and independent of
//! directory iteration order. Symlinks are skipped, matching size accounting.

use crate::domain::{ExportError, FsOperation, Result};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Calculate the SHA-256 digest of the tree rooted at `root`
///
/// Returns a hex-encoded string (64 characters).
pub fn tree_digest(root: &Path) -> Result<String> {
    let mut files = collect_files(root)?;
    files.sort();

    let mut hasher = Sha256::new();
    for relative in &files {
        let path = root.join(relative);

        let mut file_hasher = Sha256::new();
        let mut file =
            File::open(&path).map_err(|e| ExportError::filesystem(FsOperation::Measure, &path, e))?;
        io::copy(&mut file, &mut file_hasher)
            .map_err(|e| ExportError::filesystem(FsOperation::Measure, &path, e))?;

        hasher.update(portable_path(relative).as_bytes());
        hasher.update([0u8]);
        hasher.update(file_hasher.finalize());
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Compare a freshly computed digest against the one taken before relocation
pub fn verify_tree(root: &Path, expected: &str) -> Result<String> {
    let actual = tree_digest(root)?;
    if actual != expected {
        tracing::error!(
            path = %root.display(),
            expected = %expected,
            actual = %actual,
            "Tree digest mismatch after relocation"
        );
        return Err(ExportError::Verification(format!(
            "digest of {} is {actual}, expected {expected}",
            root.display()
        )));
    }
    Ok(actual)
}

fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![PathBuf::new()];

    while let Some(relative_dir) = pending.pop() {
        let dir = root.join(&relative_dir);
        let entries =
            fs::read_dir(&dir).map_err(|e| ExportError::filesystem(FsOperation::Measure, &dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| ExportError::filesystem(FsOperation::Measure, &dir, e))?;
            let relative = relative_dir.join(entry.file_name());
            let file_type = entry
                .file_type()
                .map_err(|e| ExportError::filesystem(FsOperation::Measure, entry.path(), e))?;

            if file_type.is_dir() {
                pending.push(relative);
            } else if file_type.is_file() {
                files.push(relative);
            }
        }
    }

    Ok(files)
}

/// Relative path with `/` separators
fn portable_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn populate(root: &Path) {
        fs::create_dir_all(root.join("weights")).unwrap();
        fs::write(root.join("model.json"), b"{\"format\":\"graph-model\"}").unwrap();
        fs::write(root.join("weights/group1-shard1of1.bin"), [1u8, 2, 3]).unwrap();
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let tmp = TempDir::new().unwrap();
        populate(tmp.path());
        let digest = tree_digest(tmp.path()).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_identical_trees_match() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        populate(a.path());
        populate(b.path());
        assert_eq!(tree_digest(a.path()).unwrap(), tree_digest(b.path()).unwrap());
    }

    #[test]
    fn test_content_change_is_detected() {
        let tmp = TempDir::new().unwrap();
        populate(tmp.path());
        let before = tree_digest(tmp.path()).unwrap();

        fs::write(tmp.path().join("weights/group1-shard1of1.bin"), [1u8, 2, 4]).unwrap();
        let err = verify_tree(tmp.path(), &before).unwrap_err();
        assert!(matches!(err, ExportError::Verification(_)));
    }

    #[test]
    fn test_rename_is_detected() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        fs::write(a.path().join("x.bin"), b"same").unwrap();
        fs::write(b.path().join("y.bin"), b"same").unwrap();
        assert_ne!(tree_digest(a.path()).unwrap(), tree_digest(b.path()).unwrap());
    }

    #[test]
    fn test_verify_tree_returns_digest() {
        let tmp = TempDir::new().unwrap();
        populate(tmp.path());
        let expected = tree_digest(tmp.path()).unwrap();
        assert_eq!(verify_tree(tmp.path(), &expected).unwrap(), expected);
    }
}
