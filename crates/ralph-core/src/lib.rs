//! Install/update lifecycle for the ralph managed workspace
//!
//! This crate decides what an `install` or `update` run creates, overwrites,
//! and preserves:
//!
//! - **ConfigStore**: the persisted [`ConfigurationRecord`] and its
//!   preserve-on-update invariant
//! - **AssetMirror**: subtree synchronization into [`MirrorTarget`]s with a
//!   declared [`ReplacePolicy`]
//! - **VersionTracker**: installed vs. distribution version bookkeeping
//! - **LifecycleController**: the `install` and `update` state machines
//!
//! # Architecture
//!
//! ```text
//!                 ralph-cli
//!                     |
//!           LifecycleController
//!          /          |          \
//!   ConfigStore   AssetMirror   VersionTracker
//!          \          |          /
//!                 ralph-fs
//! ```
//!
//! Interaction with the outside world (prompts, tool probing, distribution
//! metadata) goes through the traits in [`collab`]; all paths and environment
//! values come from an explicit [`WorkspaceContext`].

pub mod collab;
pub mod config;
pub mod context;
pub mod error;
pub mod lifecycle;
pub mod mirror;
pub mod version;

pub use collab::{DistributionMetadata, Notice, Prompter, ToolProbe};
pub use config::{
    ConfigStore, ConfigWarning, ConfigurationRecord, Execution, ExecutionMode, Identity,
    InstallationState, ModelChoice, NotificationChannel, NotificationPolicy, RecordBuilder,
    SshTarget, StoredRecord, VmTarget,
};
pub use context::{EnvSnapshot, WorkspaceContext};
pub use error::{Error, Result};
pub use lifecycle::{
    CancelReason, InstallOutcome, InstallReport, LifecycleController, UpdateOutcome, UpdateReport,
};
pub use mirror::{AssetSet, MirrorKind, MirrorTarget, ReplacePolicy, Subtree, SubtreeSync, SyncReport};
pub use version::{FALLBACK_VERSION, ManifestMetadata, VersionTracker};
