//! Asset mirroring
//!
//! The vendored [`AssetSet`] is copied subtree by subtree into
//! [`MirrorTarget`]s. Each target declares its [`ReplacePolicy`]; the sync
//! code never decides policy inline.

mod report;
mod target;

use std::fmt;
use std::path::{Path, PathBuf};

pub use report::{SyncEntry, SyncReport};
pub use target::{MirrorTarget, ReplacePolicy, SubtreeSync};

/// Named categories of the asset set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subtree {
    Lib,
    Scripts,
    Templates,
    Commands,
}

impl Subtree {
    /// Every subtree, in sync order.
    pub const ALL: [Subtree; 4] = [
        Subtree::Lib,
        Subtree::Scripts,
        Subtree::Templates,
        Subtree::Commands,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lib => "lib",
            Self::Scripts => "scripts",
            Self::Templates => "templates",
            Self::Commands => "commands",
        }
    }
}

impl fmt::Display for Subtree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which destination a sync entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorKind {
    /// The private workspace root
    Workspace,
    /// The shared secondary command directory
    Secondary,
}

impl fmt::Display for MirrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workspace => f.write_str("workspace"),
            Self::Secondary => f.write_str("secondary"),
        }
    }
}

/// The read-only vendored asset tree shipped with a distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSet {
    root: PathBuf,
}

impl AssetSet {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn subtree_path(&self, subtree: Subtree) -> PathBuf {
        self.root.join(subtree.as_str())
    }

    /// Whether the distribution ships this category at all.
    pub fn contains(&self, subtree: Subtree) -> bool {
        self.subtree_path(subtree).is_dir()
    }
}
