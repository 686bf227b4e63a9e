//! Whole-tree operations: copy and remove.
//!
//! Symlinks inside a source tree are followed; their targets are copied as
//! regular files and directories.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::{Error, Result};

/// Copy every file under `source` into `dest`, creating directories as needed.
///
/// Files already present at the destination are overwritten; destination
/// files with no counterpart in `source` are left alone. Returns the number
/// of regular files copied.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    if !source.is_dir() {
        return Err(Error::MissingSource {
            path: source.to_path_buf(),
        });
    }

    fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;

    let mut copied = 0;
    for entry in WalkDir::new(source).follow_links(true).min_depth(1) {
        let entry = entry.map_err(|e| Error::walk(source, e))?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| Error::io(&target, e))?;
            tracing::trace!(file = %relative.display(), "copied");
            copied += 1;
        }
    }

    Ok(copied)
}

/// Remove `path` and everything beneath it.
///
/// Returns `false` when there was nothing to remove. A plain file at `path`
/// is removed as well.
pub fn remove_tree(path: &Path) -> Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(path).map_err(|e| Error::io(path, e))?;
            Ok(true)
        }
        Ok(_) => {
            fs::remove_file(path).map_err(|e| Error::io(path, e))?;
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}
