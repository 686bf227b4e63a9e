//! Tool resolution on the host machine

use std::process::{Command, Stdio};

use ralph_core::ToolProbe;

/// Resolves tools on `$PATH` and asks the GitHub CLI who is logged in.
pub struct SystemProbe;

impl ToolProbe for SystemProbe {
    fn is_available(&self, command: &str) -> bool {
        match which::which(command) {
            Ok(path) => {
                tracing::debug!(command, path = %path.display(), "tool resolved");
                true
            }
            Err(_) => false,
        }
    }

    fn detect_identity(&self) -> Option<String> {
        if !self.is_available("gh") {
            return None;
        }

        let output = Command::new("gh")
            .args(["api", "user", "--jq", ".login"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            tracing::debug!(status = ?output.status, "gh did not report a login");
            return None;
        }

        let login = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!login.is_empty()).then_some(login)
    }
}
