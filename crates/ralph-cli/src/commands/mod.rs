//! Command implementations for ralph-cli

pub mod install;
pub mod update;

pub use install::run_install;
pub use update::run_update;

use colored::Colorize;
use ralph_core::{MirrorKind, SubtreeSync, SyncReport};

use crate::error::CliError;

/// Print one line per attempted subtree.
pub(crate) fn print_sync_report(report: &SyncReport) {
    for entry in report.entries() {
        let dest = match entry.target {
            MirrorKind::Workspace => format!("{}/", entry.subtree),
            MirrorKind::Secondary => format!(".gemini/{}/", entry.subtree),
        };
        match &entry.result {
            Ok(SubtreeSync::Synced { items }) => {
                println!("  {} {} ({} files)", "+".green(), dest, items);
            }
            Ok(SubtreeSync::Skipped) => {
                println!("  {} {} {}", "-".dimmed(), dest, "(not shipped)".dimmed());
            }
            Err(e) => {
                println!("  {} {} {}", "x".red().bold(), dest, e.to_string().red());
            }
        }
    }
}

/// Turn an incomplete report into the process failure.
pub(crate) fn ensure_complete(report: &SyncReport) -> Result<(), CliError> {
    let failed = report.failures().count();
    if failed == 0 {
        return Ok(());
    }
    Err(CliError::IncompleteSync {
        failed,
        attempted: report.entries().len(),
    })
}
