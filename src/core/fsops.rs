//! Filesystem bookkeeping for relocating an exported artifact
//!
//! All functions here are blocking; the exporter runs them on the blocking
//! pool. Errors carry the step and the path they failed on.

use crate::domain::{ExportError, FsOperation, Relocation, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Regular-file totals of a directory tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSize {
    pub bytes: u64,
    pub files: usize,
}

/// Creates every missing ancestor of `dest`
pub fn ensure_parent(dest: &Path) -> Result<()> {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)
                .map_err(|e| ExportError::filesystem(FsOperation::CreateParent, parent, e))?;
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Removes whatever is at `dest`, returning whether anything was there
///
/// Directories are removed with their full contents. A symlink is removed
/// itself, never its target, even when `dest` ends in a separator.
pub fn remove_existing(dest: &Path) -> Result<bool> {
    let dest: PathBuf = dest.components().collect();
    let dest = dest.as_path();
    let meta = match fs::symlink_metadata(dest) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(ExportError::filesystem(FsOperation::Remove, dest, e)),
    };

    let removed = if meta.is_dir() {
        fs::remove_dir_all(dest)
    } else {
        fs::remove_file(dest)
    };
    removed.map_err(|e| ExportError::filesystem(FsOperation::Remove, dest, e))?;

    tracing::info!(path = %dest.display(), "Removed existing destination");
    Ok(true)
}

/// Moves the directory `src` to `dest`
///
/// Uses a single rename when both sit on the same volume, otherwise copies
/// the tree and then deletes `src`. `dest` must not exist.
pub fn move_dir(src: &Path, dest: &Path) -> Result<Relocation> {
    move_dir_with(src, dest, |from, to| fs::rename(from, to))
}

/// [`move_dir`] with the rename step supplied by the caller
fn move_dir_with<F>(src: &Path, dest: &Path, rename: F) -> Result<Relocation>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    match rename(src, dest) {
        Ok(()) => {
            tracing::debug!(from = %src.display(), to = %dest.display(), "Renamed directory");
            Ok(Relocation::Renamed)
        }
        Err(e) if is_cross_device(&e) => {
            tracing::info!(
                from = %src.display(),
                to = %dest.display(),
                "Destination is on another volume, copying"
            );
            copy_tree(src, dest)?;
            fs::remove_dir_all(src)
                .map_err(|e| ExportError::filesystem(FsOperation::Remove, src, e))?;
            Ok(Relocation::Copied)
        }
        Err(e) => Err(ExportError::filesystem(FsOperation::Move, src, e)),
    }
}

/// Recursively copies the directory `src` into a new directory `dest`
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir(dest).map_err(|e| ExportError::filesystem(FsOperation::Copy, dest, e))?;

    let mut pending = vec![(src.to_path_buf(), dest.to_path_buf())];
    while let Some((from_dir, to_dir)) = pending.pop() {
        let entries = fs::read_dir(&from_dir)
            .map_err(|e| ExportError::filesystem(FsOperation::Copy, &from_dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| ExportError::filesystem(FsOperation::Copy, &from_dir, e))?;
            let from = entry.path();
            let to = to_dir.join(entry.file_name());
            let file_type = entry
                .file_type()
                .map_err(|e| ExportError::filesystem(FsOperation::Copy, &from, e))?;

            if file_type.is_dir() {
                fs::create_dir(&to).map_err(|e| ExportError::filesystem(FsOperation::Copy, &to, e))?;
                pending.push((from, to));
            } else if file_type.is_symlink() {
                copy_symlink(&from, &to)?;
            } else {
                fs::copy(&from, &to).map_err(|e| ExportError::filesystem(FsOperation::Copy, &from, e))?;
            }
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    let target =
        fs::read_link(from).map_err(|e| ExportError::filesystem(FsOperation::Copy, from, e))?;
    std::os::unix::fs::symlink(&target, to)
        .map_err(|e| ExportError::filesystem(FsOperation::Copy, to, e))
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, _to: &Path) -> Result<()> {
    tracing::warn!(path = %from.display(), "Skipping symlink during cross-volume copy");
    Ok(())
}

/// Sums the sizes of every regular file under `root`
///
/// Symlinks are neither counted nor followed; directories contribute nothing.
pub fn tree_size(root: &Path) -> Result<TreeSize> {
    let mut size = TreeSize::default();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .map_err(|e| ExportError::filesystem(FsOperation::Measure, &dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| ExportError::filesystem(FsOperation::Measure, &dir, e))?;
            let path = entry.path();
            let meta = fs::symlink_metadata(&path)
                .map_err(|e| ExportError::filesystem(FsOperation::Measure, &path, e))?;

            if meta.is_dir() {
                pending.push(path);
            } else if meta.is_file() {
                size.bytes += meta.len();
                size.files += 1;
            }
        }
    }

    Ok(size)
}

/// Resolves `path` to an absolute form suitable for comparison
///
/// The longest existing prefix is canonicalized and the remaining components
/// are appended verbatim, so paths that do not exist yet still compare.
pub fn comparable_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut existing = absolute.as_path();
    let mut rest = Vec::new();
    loop {
        match existing.canonicalize() {
            Ok(mut resolved) => {
                for component in rest.iter().rev() {
                    match component {
                        Component::ParentDir => {
                            resolved.pop();
                        }
                        Component::CurDir => {}
                        other => resolved.push(other.as_os_str()),
                    }
                }
                return Ok(resolved);
            }
            Err(_) => match (existing.parent(), existing.components().next_back()) {
                (Some(parent), Some(last)) => {
                    rest.push(last);
                    existing = parent;
                }
                _ => return Ok(absolute),
            },
        }
    }
}

// EXDEV on Linux and macOS
#[cfg(unix)]
fn is_cross_device(err: &io::Error) -> bool {
    err.raw_os_error() == Some(18)
}

// ERROR_NOT_SAME_DEVICE
#[cfg(windows)]
fn is_cross_device(err: &io::Error) -> bool {
    err.raw_os_error() == Some(17)
}

#[cfg(not(any(unix, windows)))]
fn is_cross_device(_err: &io::Error) -> bool {
    false
}
