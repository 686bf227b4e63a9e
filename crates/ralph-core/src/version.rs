//! Installed vs. distribution version bookkeeping
//!
//! Versions are advisory: a missing or malformed declaration degrades to
//! [`FALLBACK_VERSION`] instead of aborting, and any mismatch between the
//! installed and current version counts as an update. No ordering is applied,
//! so an older distribution "updates" a newer workspace backwards.

use std::path::{Path, PathBuf};

use ralph_fs::io;
use serde::Deserialize;

use crate::collab::DistributionMetadata;
use crate::config::ConfigurationRecord;
use crate::context::WorkspaceContext;
use crate::{Error, Result};

/// Version assumed when the distribution does not declare a usable one.
pub const FALLBACK_VERSION: &str = "1.0.0";

/// Reads the version from the distribution's `distribution.json`.
#[derive(Debug, Clone)]
pub struct ManifestMetadata {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct DistributionManifest {
    version: String,
}

impl ManifestMetadata {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Manifest of the distribution described by `ctx`.
    pub fn for_context(ctx: &WorkspaceContext) -> Self {
        Self::new(ctx.manifest_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DistributionMetadata for ManifestMetadata {
    fn version(&self) -> Result<String> {
        let manifest: DistributionManifest =
            ralph_fs::json::load(&self.path).map_err(|e| Error::VersionUnavailable {
                reason: e.to_string(),
            })?;

        let version = manifest.version.trim();
        semver::Version::parse(version).map_err(|e| Error::VersionUnavailable {
            reason: format!("'{}' in {} is not a semantic version: {}", version, self.path.display(), e),
        })?;

        Ok(version.to_string())
    }
}

/// Tracks which asset-set version a workspace holds.
pub struct VersionTracker<'a> {
    metadata: &'a dyn DistributionMetadata,
    marker: PathBuf,
}

impl<'a> VersionTracker<'a> {
    pub fn new(ctx: &WorkspaceContext, metadata: &'a dyn DistributionMetadata) -> Self {
        Self {
            metadata,
            marker: ctx.version_marker_path(),
        }
    }

    /// The version the running distribution declares, or
    /// [`FALLBACK_VERSION`] when it declares none.
    pub fn current_distribution_version(&self) -> String {
        match self.metadata.version() {
            Ok(version) => version,
            Err(e) => {
                tracing::warn!(error = %e, fallback = FALLBACK_VERSION, "using fallback version");
                FALLBACK_VERSION.to_string()
            }
        }
    }

    /// The asset-set version recorded in `record`.
    pub fn installed_version(record: &ConfigurationRecord) -> &str {
        record.schema_version()
    }

    /// Whether the workspace needs its assets refreshed. Plain inequality.
    pub fn is_upgrade(installed: &str, current: &str) -> bool {
        installed != current
    }

    /// Write the plain-text `version` marker next to the record.
    pub fn write_marker(&self, version: &str) -> Result<()> {
        io::write_text(&self.marker, version)?;
        Ok(())
    }

    /// Contents of the `version` marker, if one has been written.
    pub fn read_marker(&self) -> Result<Option<String>> {
        if !self.marker.is_file() {
            return Ok(None);
        }
        Ok(Some(io::read_text(&self.marker)?.trim().to_string()))
    }
}
