//! Update command implementation

use colored::Colorize;
use ralph_core::{
    ConfigStore, InstallationState, LifecycleController, ManifestMetadata, UpdateOutcome,
    UpdateReport, WorkspaceContext,
};

use super::{ensure_complete, print_sync_report};
use crate::context::require_assets;
use crate::error::Result;
use crate::interactive::DialoguerPrompter;
use crate::probe::SystemProbe;

/// Run the update command
pub fn run_update(ctx: &WorkspaceContext) -> Result<()> {
    println!("{}", "Ralph Update".cyan().bold());
    println!();

    // Checked here as well so a missing install never complains about the
    // distribution.
    if ConfigStore::new(ctx).state() == InstallationState::Absent {
        return not_installed();
    }
    require_assets(ctx)?;

    let prompter = DialoguerPrompter;
    let probe = SystemProbe;
    let metadata = ManifestMetadata::for_context(ctx);
    let controller = LifecycleController::new(ctx, &prompter, &probe, &metadata);

    match controller.update()? {
        UpdateOutcome::NotInstalled => not_installed(),
        UpdateOutcome::Updated(report) => finish(&report),
    }
}

fn not_installed() -> Result<()> {
    println!("{}", "Ralph is not installed in this directory.".red());
    println!("{}", "Run: ralph install".dimmed());
    Ok(())
}

fn finish(report: &UpdateReport) -> Result<()> {
    let record = &report.record;
    println!("{}", "Current config:".dimmed());
    println!("{}", format!("  Execution: {}", record.execution_mode()).dimmed());
    println!("{}", format!("  Model: {}", record.default_model()).dimmed());
    println!(
        "{}",
        format!(
            "  Target: {}",
            record.execution().target_label().as_deref().unwrap_or("not set")
        )
        .dimmed()
    );
    println!();

    if !report.warnings.is_empty() {
        println!("{}", "  Missing config:".yellow());
        for warning in &report.warnings {
            println!("{}", format!("   - {warning}").yellow());
        }
        println!("{}", "   Fix by running: ralph install".dimmed());
        println!();
    }

    println!("{} Updating core files...", "=>".blue().bold());
    print_sync_report(&report.sync);
    ensure_complete(&report.sync)?;

    println!("  {} config.json preserved", "+".green());
    println!();
    if report.upgraded {
        println!(
            "{} Updated {} -> {}",
            "OK".green().bold(),
            report.previous_version,
            report.current_version
        );
    } else {
        println!(
            "{} Already at {}, core files refreshed",
            "OK".green().bold(),
            report.current_version
        );
    }
    Ok(())
}
