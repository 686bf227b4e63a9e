//! Typed results of lifecycle operations

use std::path::PathBuf;

use crate::config::{ConfigWarning, ConfigurationRecord};
use crate::mirror::SyncReport;

/// Why an install stopped before touching the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    DisclaimerDeclined,
    ReinstallDeclined,
}

#[derive(Debug)]
pub enum InstallOutcome {
    /// The user declined; nothing was written.
    Cancelled(CancelReason),
    Installed(InstallReport),
}

#[derive(Debug)]
pub struct InstallReport {
    /// Whether a previous installation was replaced.
    pub reinstall: bool,
    /// The collected record, stamped with the distribution version.
    pub record: ConfigurationRecord,
    pub sync: SyncReport,
    /// Launcher path; `None` when finalization was skipped after a failed sync.
    pub launcher: Option<PathBuf>,
}

impl InstallReport {
    /// Every subtree synced and the record, marker and launcher were written.
    pub fn is_complete(&self) -> bool {
        self.sync.is_complete()
    }
}

#[derive(Debug)]
pub enum UpdateOutcome {
    /// No record exists; nothing was written.
    NotInstalled,
    Updated(UpdateReport),
}

#[derive(Debug)]
pub struct UpdateReport {
    /// The record as it was loaded, before the version bump.
    pub record: ConfigurationRecord,
    pub previous_version: String,
    pub current_version: String,
    /// The installed and distribution versions differ.
    pub upgraded: bool,
    pub warnings: Vec<ConfigWarning>,
    pub sync: SyncReport,
}

impl UpdateReport {
    /// Every subtree synced and the version was bumped.
    pub fn is_complete(&self) -> bool {
        self.sync.is_complete()
    }
}
