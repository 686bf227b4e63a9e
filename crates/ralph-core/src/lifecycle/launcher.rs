//! The executable entry point written into the project root

use std::path::PathBuf;

use ralph_fs::io;

use crate::Result;
use crate::context::WorkspaceContext;

/// Contents of the `ralph` launcher.
pub const LAUNCHER_SCRIPT: &str = r#"#!/bin/bash
# Ralph CLI wrapper
RALPH_DIR=".ralph"
exec "$RALPH_DIR/scripts/ralph.sh" "$@"
"#;

/// Write the launcher, replacing any existing one, and mark it executable.
pub fn emit_launcher(ctx: &WorkspaceContext) -> Result<PathBuf> {
    let path = ctx.launcher_path();
    io::write_text(&path, LAUNCHER_SCRIPT)?;
    io::make_executable(&path)?;
    tracing::debug!(path = %path.display(), "launcher written");
    Ok(path)
}
