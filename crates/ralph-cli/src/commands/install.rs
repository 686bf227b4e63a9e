//! Install command implementation

use colored::Colorize;
use ralph_core::{
    CancelReason, InstallOutcome, InstallReport, LifecycleController, ManifestMetadata,
    WorkspaceContext,
};

use super::{ensure_complete, print_sync_report};
use crate::context::require_assets;
use crate::error::Result;
use crate::interactive::DialoguerPrompter;
use crate::probe::SystemProbe;

const BANNER_RULE: &str = "====================================================";

/// Run the install command
pub fn run_install(ctx: &WorkspaceContext) -> Result<()> {
    require_assets(ctx)?;

    print_banner();
    print_disclaimer();

    let prompter = DialoguerPrompter;
    let probe = SystemProbe;
    let metadata = ManifestMetadata::for_context(ctx);
    let controller = LifecycleController::new(ctx, &prompter, &probe, &metadata);

    match controller.install()? {
        InstallOutcome::Cancelled(CancelReason::DisclaimerDeclined) => {
            println!("{}", "Installation cancelled.".dimmed());
            Ok(())
        }
        InstallOutcome::Cancelled(CancelReason::ReinstallDeclined) => {
            println!(
                "Use {} to refresh the core files.",
                "ralph update".cyan()
            );
            Ok(())
        }
        InstallOutcome::Installed(report) => finish(ctx, &report),
    }
}

fn finish(ctx: &WorkspaceContext, report: &InstallReport) -> Result<()> {
    println!();
    println!("{} Installing into {}", "=>".blue().bold(), ctx.workspace_dir().display());
    print_sync_report(&report.sync);
    ensure_complete(&report.sync)?;
    println!("  {} {} files copied", "+".green(), report.sync.items());

    println!("  {} version {}", "+".green(), report.record.schema_version());
    println!("  {} config.json {}", "+".green(), if report.reinstall { "replaced" } else { "created" });
    if let Some(launcher) = &report.launcher {
        println!("  {} {} launcher created", "+".green(), launcher.display());
    }

    println!();
    println!("{}", BANNER_RULE.green());
    println!("{}", "          RALPH INSTALLED!".green().bold());
    println!("{}", BANNER_RULE.green());
    println!();
    println!("{}", "Next steps:".cyan());
    println!("{}", "  1. Run /ralph:discover in Gemini CLI to set up your project".dimmed());
    println!("{}", "  2. Or run: ./ralph --help".dimmed());
    println!();
    Ok(())
}

fn print_banner() {
    println!();
    println!("{}", BANNER_RULE.yellow());
    println!();
    println!("  {}", "R A L P H".blue().bold());
    println!("  {}", "Build while you sleep. Wake to working code".yellow());
    println!();
    println!("{}", BANNER_RULE.yellow());
}

fn print_disclaimer() {
    println!();
    println!("{}", "DISCLAIMER".yellow().bold());
    println!("{}", "------------------------------------------------------------".yellow());
    println!();
    println!("{}", "Ralph runs AI-driven autonomous code.".yellow());
    println!();
    println!("{}", "ALWAYS RUN RALPH IN AN EXTERNAL SANDBOX ENVIRONMENT!".red().bold());
    println!("{}", "Use a disposable VM that can be destroyed if something goes wrong.".red());
    println!("{}", "NEVER run Ralph directly on your local machine.".red());
    println!();
    for line in [
        "- YOU are fully responsible for all actions performed",
        "- Review generated code before running in production",
        "- NEVER store sensitive credentials in code or config",
        "- Ralph can make mistakes - monitor and verify results",
    ] {
        println!("{}", line.yellow());
    }
    println!();
    println!("{}", "By continuing, you accept full responsibility for usage.".yellow());
    println!("{}", "------------------------------------------------------------".yellow());
}
