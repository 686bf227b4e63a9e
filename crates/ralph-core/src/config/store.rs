//! Reading and writing `config.json`

use std::path::{Path, PathBuf};

use ralph_fs::json;
use serde_json::{Map, Value};

use crate::config::ConfigurationRecord;
use crate::context::WorkspaceContext;
use crate::{Error, Result};

/// Whether a workspace has been installed. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationState {
    Absent,
    Present,
}

/// Key of the only field an update may change.
const SCHEMA_VERSION_KEY: &str = "schemaVersion";

/// A validated record together with the exact document it was read from.
///
/// Updates patch the document rather than re-serializing the record, so
/// nested keys this release does not know and fields the file omits survive.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    record: ConfigurationRecord,
    document: Map<String, Value>,
}

impl StoredRecord {
    pub fn record(&self) -> &ConfigurationRecord {
        &self.record
    }

    pub fn into_record(self) -> ConfigurationRecord {
        self.record
    }

    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// The stored document with only `schemaVersion` replaced. Performs no I/O.
    pub fn bumped_document(&self, new_version: &str) -> Map<String, Value> {
        let mut document = self.document.clone();
        document.insert(
            SCHEMA_VERSION_KEY.to_string(),
            Value::String(new_version.to_string()),
        );
        document
    }
}

/// Owns the single [`ConfigurationRecord`] of a workspace.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store for the workspace described by `ctx`.
    pub fn new(ctx: &WorkspaceContext) -> Self {
        Self::at(ctx.config_path())
    }

    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True iff a record is persisted.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn state(&self) -> InstallationState {
        if self.exists() {
            InstallationState::Present
        } else {
            InstallationState::Absent
        }
    }

    /// Load the persisted record.
    ///
    /// Returns [`Error::NotInstalled`] when no record exists.
    pub fn load(&self) -> Result<ConfigurationRecord> {
        Ok(self.load_stored()?.into_record())
    }

    /// Load the persisted record along with its raw document.
    pub fn load_stored(&self) -> Result<StoredRecord> {
        if !self.exists() {
            return Err(Error::NotInstalled {
                path: self.path.clone(),
            });
        }

        let document: Map<String, Value> = json::load(&self.path)?;
        let record = serde_json::from_value(Value::Object(document.clone())).map_err(|e| {
            ralph_fs::Error::ConfigParse {
                path: self.path.clone(),
                format: "JSON".into(),
                message: e.to_string(),
            }
        })?;
        Ok(StoredRecord { record, document })
    }

    /// Persist `record`, replacing any previous record in full.
    pub fn save(&self, record: &ConfigurationRecord) -> Result<()> {
        json::save(&self.path, record)?;
        tracing::debug!(
            path = %self.path.display(),
            version = record.schema_version(),
            "configuration saved"
        );
        Ok(())
    }

    /// Return `record` with only its schema version replaced. Performs no I/O.
    pub fn bump_version(
        record: &ConfigurationRecord,
        new_version: impl Into<String>,
    ) -> ConfigurationRecord {
        record.with_schema_version(new_version)
    }

    /// Rewrite the stored document with only `schemaVersion` changed.
    pub fn save_bumped(&self, stored: &StoredRecord, new_version: &str) -> Result<()> {
        json::save(&self.path, &stored.bumped_document(new_version))?;
        tracing::debug!(
            path = %self.path.display(),
            version = new_version,
            "schema version bumped"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Execution, Identity, ModelChoice, SshTarget};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> ConfigurationRecord {
        ConfigurationRecord::builder("1.0.0")
            .execution(Execution::Ssh(SshTarget {
                host: "10.0.0.5".into(),
                user: "dev".into(),
            }))
            .default_model(ModelChoice::ProviderB)
            .identity(Identity::new("octocat"))
            .build()
            .unwrap()
    }

    #[test]
    fn load_absent_is_not_installed() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::at(temp.path().join("config.json"));

        assert_eq!(store.state(), InstallationState::Absent);
        assert!(matches!(store.load(), Err(Error::NotInstalled { .. })));
    }

    #[test]
    fn save_then_load_returns_same_record() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::at(temp.path().join(".ralph").join("config.json"));

        store.save(&sample()).unwrap();

        assert_eq!(store.state(), InstallationState::Present);
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn save_replaces_previous_record() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::at(temp.path().join("config.json"));
        store.save(&sample()).unwrap();

        let replacement = ConfigurationRecord::builder("1.1.0").build().unwrap();
        store.save(&replacement).unwrap();

        assert_eq!(store.load().unwrap(), replacement);
    }

    #[test]
    fn bump_version_is_pure() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::at(temp.path().join("config.json"));
        let record = sample();

        let bumped = ConfigStore::bump_version(&record, "2.0.0");

        assert!(!store.exists());
        assert_eq!(bumped.schema_version(), "2.0.0");
        assert_eq!(record.schema_version(), "1.0.0");
        assert_eq!(bumped.identity(), record.identity());
    }

    #[test]
    fn save_bumped_patches_only_schema_version() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
  "schemaVersion": "1.0.0",
  "executionMode": "container",
  "identity": { "username": "octocat", "email": "o@example.com" }
}"#,
        )
        .unwrap();
        let store = ConfigStore::at(&path);

        let stored = store.load_stored().unwrap();
        store.save_bumped(&stored, "1.2.0").unwrap();

        let after: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            after,
            serde_json::json!({
                "schemaVersion": "1.2.0",
                "executionMode": "container",
                "identity": { "username": "octocat", "email": "o@example.com" }
            })
        );
    }

    #[test]
    fn load_stored_validates_the_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{ "schemaVersion": "1.0.0", "executionMode": "ssh" }"#).unwrap();

        let result = ConfigStore::at(&path).load_stored();

        assert!(matches!(
            result,
            Err(Error::Fs(ralph_fs::Error::ConfigParse { .. }))
        ));
    }
}
