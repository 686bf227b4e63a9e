//! Resolved paths and environment for one run
//!
//! Every component receives a [`WorkspaceContext`] instead of consulting the
//! current directory or environment variables itself.

use std::path::{Path, PathBuf};

use ralph_fs::WorkspacePath;

use crate::mirror::{AssetSet, MirrorTarget};

/// Environment values captured once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// Login name of the invoking user (`$USER`), used as the default SSH user
    pub user: Option<String>,
}

impl EnvSnapshot {
    /// Capture the relevant variables from the process environment.
    pub fn capture() -> Self {
        Self {
            user: std::env::var("USER").ok().filter(|u| !u.trim().is_empty()),
        }
    }
}

/// All locations an install/update run touches.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    project_root: PathBuf,
    workspace_dir: PathBuf,
    secondary_dir: PathBuf,
    distribution_root: PathBuf,
    env: EnvSnapshot,
}

impl WorkspaceContext {
    /// Resolve the standard layout for a project and a distribution.
    pub fn new(project_root: impl Into<PathBuf>, distribution_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        Self {
            workspace_dir: project_root.join(WorkspacePath::WorkspaceDir),
            secondary_dir: project_root.join(WorkspacePath::SecondaryDir),
            project_root,
            distribution_root: distribution_root.into(),
            env: EnvSnapshot::default(),
        }
    }

    /// Attach an environment snapshot.
    pub fn with_env(mut self, env: EnvSnapshot) -> Self {
        self.env = env;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The private workspace root (`<project>/.ralph`).
    pub fn workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }

    /// The secondary mirror root (`<project>/.gemini`).
    pub fn secondary_dir(&self) -> &Path {
        &self.secondary_dir
    }

    pub fn distribution_root(&self) -> &Path {
        &self.distribution_root
    }

    pub fn env(&self) -> &EnvSnapshot {
        &self.env
    }

    pub fn config_path(&self) -> PathBuf {
        self.workspace_dir.join(WorkspacePath::ConfigFile)
    }

    pub fn version_marker_path(&self) -> PathBuf {
        self.workspace_dir.join(WorkspacePath::VersionMarker)
    }

    pub fn launcher_path(&self) -> PathBuf {
        self.project_root.join(WorkspacePath::Launcher)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.distribution_root
            .join(WorkspacePath::DistributionManifest)
    }

    /// The vendored asset set shipped with the distribution.
    pub fn asset_set(&self) -> AssetSet {
        AssetSet::new(self.distribution_root.join(WorkspacePath::AssetsDir))
    }

    /// Mirror target for the private workspace (full-replace per subtree).
    pub fn workspace_target(&self) -> MirrorTarget {
        MirrorTarget::full_replace(self.workspace_dir.clone())
    }

    /// Mirror target for the shared command directory (merge-overwrite).
    pub fn secondary_target(&self) -> MirrorTarget {
        MirrorTarget::merge_overwrite(self.secondary_dir.clone())
    }
}
