//! SHA-256 digests of whole trees
//!
//! Checksums use the canonical `sha256:<hex>` format.

use std::path::Path;

use sha2::{Digest, Sha256};
use walkdir::WalkDir;

use crate::{Error, Result};

const PREFIX: &str = "sha256:";

/// Compute a digest over every file beneath `root`.
///
/// Relative paths (with `/` separators) and file contents both feed the
/// hash, in sorted path order, so two trees share a digest exactly when they
/// hold the same files with the same bytes. A missing root hashes as empty.
pub fn tree_checksum(root: &Path) -> Result<String> {
    let mut hasher = Sha256::new();

    if root.exists() {
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::walk(root, e))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let content = std::fs::read(entry.path()).map_err(|e| Error::io(entry.path(), e))?;

            hasher.update(key.as_bytes());
            hasher.update([0u8]);
            hasher.update((content.len() as u64).to_le_bytes());
            hasher.update(&content);
        }
    }

    Ok(format!("{}{:x}", PREFIX, hasher.finalize()))
}
