//! Aggregated results of a sync pass

use crate::Error;
use crate::mirror::{MirrorKind, Subtree, SubtreeSync};

/// Outcome of syncing one subtree into one target.
#[derive(Debug)]
pub struct SyncEntry {
    pub target: MirrorKind,
    pub subtree: Subtree,
    pub result: Result<SubtreeSync, Error>,
}

/// Every subtree attempted during one sync pass, in order.
#[derive(Debug, Default)]
pub struct SyncReport {
    entries: Vec<SyncEntry>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, target: MirrorKind, subtree: Subtree, result: Result<SubtreeSync, Error>) {
        self.entries.push(SyncEntry {
            target,
            subtree,
            result,
        });
    }

    pub fn entries(&self) -> &[SyncEntry] {
        &self.entries
    }

    /// Entries whose subtree failed to sync.
    pub fn failures(&self) -> impl Iterator<Item = (&SyncEntry, &Error)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.result.as_ref().err().map(|err| (entry, err)))
    }

    /// True when no subtree failed.
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Total regular files written across all targets.
    pub fn items(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|entry| entry.result.as_ref().ok())
            .map(SubtreeSync::items)
            .sum()
    }
}
