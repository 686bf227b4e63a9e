//! Mirror targets and their replace policies

use std::path::{Path, PathBuf};

use ralph_fs::tree;

use crate::mirror::{AssetSet, Subtree};
use crate::{Error, Result};

/// How a target treats files already present in a destination subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacePolicy {
    /// Remove the destination subtree, then copy the source subtree in.
    /// Files dropped or renamed upstream never survive.
    FullReplace,
    /// Overwrite same-named files; leave every other destination file alone.
    MergeOverwrite,
}

/// Result of synchronizing one subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtreeSync {
    /// The subtree was copied; `items` regular files were written.
    Synced { items: usize },
    /// The asset set does not ship this subtree.
    Skipped,
}

impl SubtreeSync {
    pub fn items(&self) -> usize {
        match self {
            Self::Synced { items } => *items,
            Self::Skipped => 0,
        }
    }
}

/// A destination root paired with its replace policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorTarget {
    root: PathBuf,
    policy: ReplacePolicy,
}

impl MirrorTarget {
    pub fn new(root: impl Into<PathBuf>, policy: ReplacePolicy) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    pub fn full_replace(root: impl Into<PathBuf>) -> Self {
        Self::new(root, ReplacePolicy::FullReplace)
    }

    pub fn merge_overwrite(root: impl Into<PathBuf>) -> Self {
        Self::new(root, ReplacePolicy::MergeOverwrite)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> ReplacePolicy {
        self.policy
    }

    pub fn subtree_path(&self, subtree: Subtree) -> PathBuf {
        self.root.join(subtree.as_str())
    }

    /// Synchronize one subtree of `assets` into this target.
    ///
    /// A subtree the asset set does not ship is skipped, not an error. Any
    /// I/O failure aborts this subtree only and surfaces as
    /// [`Error::SyncFailed`]; nothing already written is rolled back.
    pub fn sync_subtree(&self, assets: &AssetSet, subtree: Subtree) -> Result<SubtreeSync> {
        if !assets.contains(subtree) {
            tracing::debug!(%subtree, "subtree not shipped, skipping");
            return Ok(SubtreeSync::Skipped);
        }

        let source = assets.subtree_path(subtree);
        let dest = self.subtree_path(subtree);

        let copied = match self.policy {
            ReplacePolicy::FullReplace => tree::remove_tree(&dest)
                .and_then(|_| tree::copy_tree(&source, &dest)),
            ReplacePolicy::MergeOverwrite => tree::copy_tree(&source, &dest),
        }
        .map_err(|cause| self.failed(subtree, cause))?;

        tracing::info!(
            %subtree,
            dest = %dest.display(),
            policy = ?self.policy,
            items = copied,
            "subtree synchronized"
        );
        Ok(SubtreeSync::Synced { items: copied })
    }

    /// Remove one subtree from this target. Absent subtrees are not an error.
    ///
    /// Returns whether anything was removed.
    pub fn remove_subtree(&self, subtree: Subtree) -> Result<bool> {
        tree::remove_tree(&self.subtree_path(subtree)).map_err(|cause| self.failed(subtree, cause))
    }

    fn failed(&self, subtree: Subtree, cause: ralph_fs::Error) -> Error {
        tracing::warn!(%subtree, target = %self.root.display(), error = %cause, "subtree sync failed");
        Error::SyncFailed {
            subtree,
            target: self.root.clone(),
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn full_replace_drops_stale_files() {
        let temp = TempDir::new().unwrap();
        let assets = AssetSet::new(temp.path().join("core"));
        write(assets.root(), "lib/new.sh", "new");
        let target = MirrorTarget::full_replace(temp.path().join(".ralph"));
        write(target.root(), "lib/old.sh", "old");

        let result = target.sync_subtree(&assets, Subtree::Lib).unwrap();

        assert_eq!(result, SubtreeSync::Synced { items: 1 });
        assert!(target.subtree_path(Subtree::Lib).join("new.sh").exists());
        assert!(!target.subtree_path(Subtree::Lib).join("old.sh").exists());
    }

    #[test]
    fn merge_overwrite_keeps_unrelated_files() {
        let temp = TempDir::new().unwrap();
        let assets = AssetSet::new(temp.path().join("core"));
        write(assets.root(), "commands/ralph/plan.toml", "fresh");
        let target = MirrorTarget::merge_overwrite(temp.path().join(".gemini"));
        write(target.root(), "commands/ralph/plan.toml", "stale");
        write(target.root(), "commands/mine.toml", "keep");

        target.sync_subtree(&assets, Subtree::Commands).unwrap();

        let commands = target.subtree_path(Subtree::Commands);
        assert_eq!(fs::read_to_string(commands.join("ralph/plan.toml")).unwrap(), "fresh");
        assert_eq!(fs::read_to_string(commands.join("mine.toml")).unwrap(), "keep");
    }

    #[test]
    fn missing_source_subtree_is_skipped() {
        let temp = TempDir::new().unwrap();
        let assets = AssetSet::new(temp.path().join("core"));
        let target = MirrorTarget::full_replace(temp.path().join(".ralph"));
        write(target.root(), "templates/keep.md", "untouched");

        let result = target.sync_subtree(&assets, Subtree::Templates).unwrap();

        assert_eq!(result, SubtreeSync::Skipped);
        assert!(target.subtree_path(Subtree::Templates).join("keep.md").exists());
    }

    #[test]
    fn remove_subtree_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let target = MirrorTarget::full_replace(temp.path().join(".ralph"));
        write(target.root(), "scripts/ralph.sh", "#!/bin/bash");

        assert!(target.remove_subtree(Subtree::Scripts).unwrap());
        assert!(!target.remove_subtree(Subtree::Scripts).unwrap());
    }
}
