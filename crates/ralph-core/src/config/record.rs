//! The persisted configuration record
//!
//! A [`ConfigurationRecord`] is only ever constructed through validation:
//! either [`RecordBuilder::build`] or deserialization, which funnels through
//! the same checks.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// How the external execution environment is reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    #[default]
    None,
    VmManaged,
    Ssh,
    Container,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::VmManaged => "vm-managed",
            Self::Ssh => "ssh",
            Self::Container => "container",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cloud VM managed through the provider's CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmTarget {
    pub name: String,
    pub project: String,
    pub zone: String,
}

/// A self-hosted machine reached over SSH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshTarget {
    pub host: String,
    pub user: String,
}

/// Execution mode together with the fields that mode requires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Execution {
    #[default]
    None,
    VmManaged(VmTarget),
    Ssh(SshTarget),
    Container,
}

impl Execution {
    pub fn mode(&self) -> ExecutionMode {
        match self {
            Self::None => ExecutionMode::None,
            Self::VmManaged(_) => ExecutionMode::VmManaged,
            Self::Ssh(_) => ExecutionMode::Ssh,
            Self::Container => ExecutionMode::Container,
        }
    }

    /// Short human description of where execution happens.
    pub fn target_label(&self) -> Option<String> {
        match self {
            Self::VmManaged(vm) => Some(vm.name.clone()),
            Self::Ssh(ssh) => Some(format!("{}@{}", ssh.user, ssh.host)),
            Self::None | Self::Container => None,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::VmManaged(vm) => {
                require("vm-managed", "vmName", &vm.name)?;
                require("vm-managed", "zone", &vm.zone)
            }
            Self::Ssh(ssh) => {
                require("ssh", "host", &ssh.host)?;
                require("ssh", "user", &ssh.user)
            }
            Self::None | Self::Container => Ok(()),
        }
    }
}

fn require(mode: &str, field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid(format!(
            "execution mode '{mode}' requires a non-empty {field}"
        )));
    }
    Ok(())
}

/// Default model used for autonomous execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelChoice {
    /// Gemini CLI
    ProviderA,
    /// Claude via Antigravity
    ProviderB,
    /// Decided per project (AGENTS.md)
    #[default]
    Auto,
}

impl ModelChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProviderA => "provider-a",
            Self::ProviderB => "provider-b",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where run notifications are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationChannel {
    #[default]
    Os,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPolicy {
    pub enabled: bool,
    pub channel: NotificationChannel,
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            channel: NotificationChannel::Os,
        }
    }
}

/// External-account identity used for repository operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(default)]
    pub username: String,
}

impl Identity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn is_set(&self) -> bool {
        !self.username.trim().is_empty()
    }
}

/// Missing settings that do not block an update but deserve attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No VM, SSH host, or container is configured.
    ExecutionUnset,
    /// No external-account username is configured.
    IdentityUnset,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionUnset => {
                f.write_str("execution - VM, SSH host, or container is required for safe execution")
            }
            Self::IdentityUnset => f.write_str("identity.username - needed for repo operations"),
        }
    }
}

/// The single persisted settings object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordDocument", into = "RecordDocument")]
pub struct ConfigurationRecord {
    schema_version: String,
    execution: Execution,
    default_model: ModelChoice,
    notification_policy: NotificationPolicy,
    identity: Identity,
    /// Top-level keys this release does not know, carried through on save.
    extra: Map<String, Value>,
}

impl ConfigurationRecord {
    pub fn builder(schema_version: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(schema_version)
    }

    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    pub fn execution(&self) -> &Execution {
        &self.execution
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution.mode()
    }

    pub fn default_model(&self) -> ModelChoice {
        self.default_model
    }

    pub fn notification_policy(&self) -> &NotificationPolicy {
        &self.notification_policy
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Keys preserved verbatim from the loaded document.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Copy of this record with only the schema version replaced.
    pub fn with_schema_version(&self, schema_version: impl Into<String>) -> Self {
        Self {
            schema_version: schema_version.into(),
            ..self.clone()
        }
    }

    /// Advisory warnings for settings an operator still needs to fill in.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.execution.mode() == ExecutionMode::None {
            warnings.push(ConfigWarning::ExecutionUnset);
        }
        if !self.identity.is_set() {
            warnings.push(ConfigWarning::IdentityUnset);
        }
        warnings
    }
}

/// Assembles a [`ConfigurationRecord`] in memory; nothing is persisted until
/// the finished record is handed to the store.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    schema_version: String,
    execution: Execution,
    default_model: ModelChoice,
    notification_policy: NotificationPolicy,
    identity: Identity,
}

impl RecordBuilder {
    pub fn new(schema_version: impl Into<String>) -> Self {
        Self {
            schema_version: schema_version.into(),
            execution: Execution::None,
            default_model: ModelChoice::Auto,
            notification_policy: NotificationPolicy::default(),
            identity: Identity::default(),
        }
    }

    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn default_model(mut self, model: ModelChoice) -> Self {
        self.default_model = model;
        self
    }

    pub fn notification_policy(mut self, policy: NotificationPolicy) -> Self {
        self.notification_policy = policy;
        self
    }

    pub fn identity(mut self, identity: Identity) -> Self {
        self.identity = identity;
        self
    }

    /// Validate field combinations and produce the record.
    pub fn build(self) -> Result<ConfigurationRecord> {
        self.execution.validate()?;
        Ok(ConfigurationRecord {
            schema_version: self.schema_version,
            execution: self.execution,
            default_model: self.default_model,
            notification_policy: self.notification_policy,
            identity: self.identity,
            extra: Map::new(),
        })
    }
}

/// On-disk shape of `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordDocument {
    #[serde(default)]
    schema_version: String,
    #[serde(default)]
    execution_mode: ExecutionMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    execution_target: Option<TargetDocument>,
    #[serde(default)]
    default_model: ModelChoice,
    #[serde(default)]
    notification_policy: NotificationPolicy,
    #[serde(default)]
    identity: Identity,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TargetDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vm_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<String>,
}

impl TargetDocument {
    fn into_execution(self, mode: ExecutionMode) -> Result<Execution> {
        let stray = |fields: &[(&str, &Option<String>)]| -> Result<()> {
            match fields.iter().find(|(_, v)| v.is_some()) {
                Some((name, _)) => Err(Error::invalid(format!(
                    "executionTarget.{name} does not apply to execution mode '{mode}'"
                ))),
                None => Ok(()),
            }
        };

        match mode {
            ExecutionMode::VmManaged => {
                stray(&[("host", &self.host), ("user", &self.user)])?;
                Ok(Execution::VmManaged(VmTarget {
                    name: self.vm_name.unwrap_or_default(),
                    project: self.project.unwrap_or_default(),
                    zone: self.zone.unwrap_or_default(),
                }))
            }
            ExecutionMode::Ssh => {
                stray(&[
                    ("vmName", &self.vm_name),
                    ("project", &self.project),
                    ("zone", &self.zone),
                ])?;
                Ok(Execution::Ssh(SshTarget {
                    host: self.host.unwrap_or_default(),
                    user: self.user.unwrap_or_default(),
                }))
            }
            ExecutionMode::None | ExecutionMode::Container => Err(Error::invalid(format!(
                "executionTarget does not apply to execution mode '{mode}'"
            ))),
        }
    }
}

impl TryFrom<RecordDocument> for ConfigurationRecord {
    type Error = Error;

    fn try_from(doc: RecordDocument) -> Result<Self> {
        let execution = match (doc.execution_mode, doc.execution_target) {
            (mode, Some(target)) => target.into_execution(mode)?,
            (ExecutionMode::None, None) => Execution::None,
            (ExecutionMode::Container, None) => Execution::Container,
            (mode, None) => {
                return Err(Error::invalid(format!(
                    "execution mode '{mode}' requires an executionTarget"
                )));
            }
        };
        execution.validate()?;

        Ok(Self {
            schema_version: doc.schema_version,
            execution,
            default_model: doc.default_model,
            notification_policy: doc.notification_policy,
            identity: doc.identity,
            extra: doc.extra,
        })
    }
}

impl From<ConfigurationRecord> for RecordDocument {
    fn from(record: ConfigurationRecord) -> Self {
        let execution_mode = record.execution.mode();
        let execution_target = match record.execution {
            Execution::VmManaged(vm) => Some(TargetDocument {
                vm_name: Some(vm.name),
                project: Some(vm.project),
                zone: Some(vm.zone),
                ..Default::default()
            }),
            Execution::Ssh(ssh) => Some(TargetDocument {
                host: Some(ssh.host),
                user: Some(ssh.user),
                ..Default::default()
            }),
            Execution::None | Execution::Container => None,
        };

        Self {
            schema_version: record.schema_version,
            execution_mode,
            execution_target,
            default_model: record.default_model,
            notification_policy: record.notification_policy,
            identity: record.identity,
            extra: record.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn ssh(host: &str, user: &str) -> Execution {
        Execution::Ssh(SshTarget {
            host: host.into(),
            user: user.into(),
        })
    }

    #[test]
    fn minimal_record_serializes_camel_case() {
        let record = ConfigurationRecord::builder("1.2.0").build().unwrap();

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "schemaVersion": "1.2.0",
                "executionMode": "none",
                "defaultModel": "auto",
                "notificationPolicy": { "enabled": true, "channel": "os" },
                "identity": { "username": "" }
            })
        );
    }

    #[test]
    fn vm_record_serializes_target_fields() {
        let record = ConfigurationRecord::builder("1.2.0")
            .execution(Execution::VmManaged(VmTarget {
                name: "ralph-sandbox".into(),
                project: "acme".into(),
                zone: "europe-north1-a".into(),
            }))
            .default_model(ModelChoice::ProviderA)
            .build()
            .unwrap();

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["executionMode"], "vm-managed");
        assert_eq!(
            value["executionTarget"],
            json!({ "vmName": "ralph-sandbox", "project": "acme", "zone": "europe-north1-a" })
        );
        assert_eq!(value["defaultModel"], "provider-a");
    }

    #[rstest]
    #[case::ssh_without_host(ssh("", "dev"))]
    #[case::ssh_without_user(ssh("10.0.0.5", "  "))]
    #[case::vm_without_name(Execution::VmManaged(VmTarget {
        name: String::new(),
        project: "acme".into(),
        zone: "europe-north1-a".into(),
    }))]
    #[case::vm_without_zone(Execution::VmManaged(VmTarget {
        name: "sandbox".into(),
        project: String::new(),
        zone: String::new(),
    }))]
    fn builder_rejects_incomplete_targets(#[case] execution: Execution) {
        let result = ConfigurationRecord::builder("1.2.0")
            .execution(execution)
            .build();

        assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
    }

    #[test]
    fn vm_project_may_be_empty() {
        let record = ConfigurationRecord::builder("1.2.0")
            .execution(Execution::VmManaged(VmTarget {
                name: "sandbox".into(),
                project: String::new(),
                zone: "us-east1-b".into(),
            }))
            .build();

        assert!(record.is_ok());
    }

    #[test]
    fn missing_fields_take_defaults_on_load() {
        let record: ConfigurationRecord =
            serde_json::from_value(json!({ "schemaVersion": "1.0.0" })).unwrap();

        assert_eq!(record.execution(), &Execution::None);
        assert_eq!(record.default_model(), ModelChoice::Auto);
        assert_eq!(record.notification_policy(), &NotificationPolicy::default());
        assert!(!record.identity().is_set());
    }

    #[rstest]
    #[case::ssh_missing_target(json!({ "executionMode": "ssh" }))]
    #[case::ssh_empty_host(json!({ "executionMode": "ssh", "executionTarget": { "host": "", "user": "dev" } }))]
    #[case::target_on_container(json!({ "executionMode": "container", "executionTarget": { "host": "x" } }))]
    #[case::vm_fields_on_ssh(json!({
        "executionMode": "ssh",
        "executionTarget": { "host": "x", "user": "y", "zone": "z" }
    }))]
    #[case::unknown_mode(json!({ "executionMode": "kubernetes" }))]
    fn load_rejects_invalid_documents(#[case] doc: Value) {
        assert!(serde_json::from_value::<ConfigurationRecord>(doc).is_err());
    }

    #[test]
    fn unknown_keys_round_trip() {
        let doc = json!({
            "schemaVersion": "1.0.0",
            "executionMode": "container",
            "defaultModel": "provider-b",
            "notificationPolicy": { "enabled": false, "channel": "none" },
            "identity": { "username": "octocat" },
            "customHooks": { "prePush": "make lint" }
        });

        let record: ConfigurationRecord = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(record.extra()["customHooks"]["prePush"], "make lint");
        assert_eq!(serde_json::to_value(&record).unwrap(), doc);
    }

    #[test]
    fn warnings_flag_unset_execution_and_identity() {
        let bare = ConfigurationRecord::builder("1.0.0").build().unwrap();
        assert_eq!(
            bare.warnings(),
            vec![ConfigWarning::ExecutionUnset, ConfigWarning::IdentityUnset]
        );

        let complete = ConfigurationRecord::builder("1.0.0")
            .execution(ssh("10.0.0.5", "dev"))
            .identity(Identity::new("octocat"))
            .build()
            .unwrap();
        assert!(complete.warnings().is_empty());
    }

    #[test]
    fn with_schema_version_changes_nothing_else() {
        let record = ConfigurationRecord::builder("1.0.0")
            .execution(ssh("10.0.0.5", "dev"))
            .build()
            .unwrap();

        let bumped = record.with_schema_version("2.0.0");

        assert_eq!(bumped.schema_version(), "2.0.0");
        assert_eq!(bumped.execution(), record.execution());
        assert_eq!(bumped.with_schema_version("1.0.0"), record);
    }
}
