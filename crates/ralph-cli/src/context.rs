//! Workspace context resolution
//!
//! The project is always the current directory. The distribution comes from
//! `RALPH_DISTRIBUTION_DIR`, falling back to the `share/ralph` directory
//! installed next to the binary.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use ralph_core::{EnvSnapshot, WorkspaceContext};

use crate::error::{CliError, Result};

/// Environment variable naming the distribution root.
pub const DISTRIBUTION_ENV: &str = "RALPH_DISTRIBUTION_DIR";

/// Relative location of the distribution from the executable's directory.
const SHARE_DIR: &[&str] = &["..", "share", "ralph"];

/// Pick the distribution root: a non-empty `RALPH_DISTRIBUTION_DIR` wins,
/// otherwise the directory shipped alongside the executable.
pub fn resolve_distribution_root(from_env: Option<OsString>) -> Result<PathBuf> {
    if let Some(path) = from_env.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let exe = std::env::current_exe()?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| CliError::user(format!("cannot locate the directory of {}", exe.display())))?;
    Ok(share_dir(exe_dir))
}

fn share_dir(exe_dir: &Path) -> PathBuf {
    SHARE_DIR.iter().fold(exe_dir.to_path_buf(), |path, part| path.join(part))
}

pub fn workspace_context(project_root: PathBuf, distribution_root: PathBuf) -> WorkspaceContext {
    WorkspaceContext::new(project_root, distribution_root).with_env(EnvSnapshot::capture())
}

/// Fail early when the distribution has no asset set to copy from.
pub fn require_assets(ctx: &WorkspaceContext) -> Result<()> {
    let assets = ctx.asset_set();
    if assets.root().is_dir() {
        return Ok(());
    }
    Err(CliError::user(format!(
        "no ralph distribution found at {} (set RALPH_DISTRIBUTION_DIR)",
        ctx.distribution_root().display()
    )))
}
