//! Orchestration of `install` and `update`
//!
//! install: Disclaimer -> CheckInstalled -> Configuring -> Syncing -> Finalized
//!
//! update:  CheckInstalled -> Syncing -> VersionBump -> Finalized
//!
//! Install may create or fully replace the configuration record. Update may
//! only advance its schema version; every other key of the stored
//! document, known or not, is written back unchanged.

use crate::collab::{DistributionMetadata, Prompter, ToolProbe};
use crate::config::{ConfigStore, InstallationState};
use crate::context::WorkspaceContext;
use crate::lifecycle::launcher::emit_launcher;
use crate::lifecycle::outcome::{
    CancelReason, InstallOutcome, InstallReport, UpdateOutcome, UpdateReport,
};
use crate::lifecycle::questionnaire::Questionnaire;
use crate::mirror::{MirrorKind, Subtree, SyncReport};
use crate::version::VersionTracker;
use crate::Result;

const DISCLAIMER_PROMPT: &str = "Do you accept the terms above?";
const REINSTALL_PROMPT: &str = "Ralph is already installed. Reinstall and reconfigure?";

/// Sequences the config store, asset mirror and version tracker.
pub struct LifecycleController<'a> {
    ctx: &'a WorkspaceContext,
    prompter: &'a dyn Prompter,
    probe: &'a dyn ToolProbe,
    metadata: &'a dyn DistributionMetadata,
}

impl<'a> LifecycleController<'a> {
    pub fn new(
        ctx: &'a WorkspaceContext,
        prompter: &'a dyn Prompter,
        probe: &'a dyn ToolProbe,
        metadata: &'a dyn DistributionMetadata,
    ) -> Self {
        Self {
            ctx,
            prompter,
            probe,
            metadata,
        }
    }

    /// Install into the workspace, or reinstall over an existing one.
    ///
    /// Nothing is written before the configuration dialogue has completed.
    /// When any subtree fails to sync, the record, version marker and
    /// launcher are not written.
    pub fn install(&self) -> Result<InstallOutcome> {
        if !self.prompter.confirm(DISCLAIMER_PROMPT, false)? {
            tracing::info!("install cancelled at disclaimer");
            return Ok(InstallOutcome::Cancelled(CancelReason::DisclaimerDeclined));
        }

        let store = ConfigStore::new(self.ctx);
        let reinstall = store.state() == InstallationState::Present;
        if reinstall && !self.prompter.confirm(REINSTALL_PROMPT, false)? {
            tracing::info!("reinstall declined");
            return Ok(InstallOutcome::Cancelled(CancelReason::ReinstallDeclined));
        }

        let tracker = VersionTracker::new(self.ctx, self.metadata);
        let version = tracker.current_distribution_version();

        let record =
            Questionnaire::new(self.prompter, self.probe, self.ctx.env()).collect(&version)?;
        tracing::info!(
            mode = %record.execution_mode(),
            model = %record.default_model(),
            reinstall,
            "configuration collected"
        );

        let sync = self.sync_assets();
        let launcher = if sync.is_complete() {
            store.save(&record)?;
            tracker.write_marker(&version)?;
            Some(emit_launcher(self.ctx)?)
        } else {
            tracing::warn!("sync incomplete, configuration not written");
            None
        };

        Ok(InstallOutcome::Installed(InstallReport {
            reinstall,
            record,
            sync,
            launcher,
        }))
    }

    /// Resynchronize assets and advance the recorded version.
    ///
    /// Never creates a configuration: without one this returns
    /// [`UpdateOutcome::NotInstalled`] having written nothing.
    pub fn update(&self) -> Result<UpdateOutcome> {
        let store = ConfigStore::new(self.ctx);
        if store.state() == InstallationState::Absent {
            tracing::info!(path = %store.path().display(), "not installed, nothing to update");
            return Ok(UpdateOutcome::NotInstalled);
        }

        let stored = store.load_stored()?;
        let record = stored.record().clone();
        let warnings = record.warnings();

        let tracker = VersionTracker::new(self.ctx, self.metadata);
        let previous_version = VersionTracker::installed_version(&record).to_string();
        let current_version = tracker.current_distribution_version();
        let upgraded = VersionTracker::is_upgrade(&previous_version, &current_version);
        if let Ok(Some(marker)) = tracker.read_marker() {
            if marker != previous_version {
                tracing::warn!(%marker, recorded = %previous_version, "version marker disagrees with config");
            }
        }
        tracing::info!(
            from = %previous_version,
            to = %current_version,
            upgraded,
            "updating workspace"
        );

        let sync = self.sync_assets();
        if sync.is_complete() {
            store.save_bumped(&stored, &current_version)?;
            tracker.write_marker(&current_version)?;
        } else {
            tracing::warn!("sync incomplete, version not bumped");
        }

        Ok(UpdateOutcome::Updated(UpdateReport {
            record,
            previous_version,
            current_version,
            upgraded,
            warnings,
            sync,
        }))
    }

    /// Full resync: every subtree into the workspace, then `commands` into
    /// the secondary mirror. Every subtree is attempted even after a failure.
    fn sync_assets(&self) -> SyncReport {
        let assets = self.ctx.asset_set();
        let mut report = SyncReport::new();

        let workspace = self.ctx.workspace_target();
        for subtree in Subtree::ALL {
            report.record(
                MirrorKind::Workspace,
                subtree,
                workspace.sync_subtree(&assets, subtree),
            );
        }

        let secondary = self.ctx.secondary_target();
        report.record(
            MirrorKind::Secondary,
            Subtree::Commands,
            secondary.sync_subtree(&assets, Subtree::Commands),
        );

        report
    }
}
