//! Constants for the managed workspace filesystem layout.

use std::path::Path;

/// Well-known names in the project and distribution layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspacePath {
    /// The `.ralph` directory (private workspace root)
    WorkspaceDir,
    /// The `config.json` record inside the workspace root
    ConfigFile,
    /// The plain-text `version` marker inside the workspace root
    VersionMarker,
    /// The `.gemini` directory (secondary mirror root shared with Gemini CLI)
    SecondaryDir,
    /// The `ralph` launcher at the project root
    Launcher,
    /// The `core` directory holding the asset set inside a distribution
    AssetsDir,
    /// The `distribution.json` manifest at the distribution root
    DistributionManifest,
}

impl WorkspacePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkspaceDir => ".ralph",
            Self::ConfigFile => "config.json",
            Self::VersionMarker => "version",
            Self::SecondaryDir => ".gemini",
            Self::Launcher => "ralph",
            Self::AssetsDir => "core",
            Self::DistributionManifest => "distribution.json",
        }
    }
}

impl AsRef<Path> for WorkspacePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for WorkspacePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
