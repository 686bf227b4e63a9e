//! Persisted configuration: the record and its store

mod record;
mod store;

pub use record::{
    ConfigWarning, ConfigurationRecord, Execution, ExecutionMode, Identity, ModelChoice,
    NotificationChannel, NotificationPolicy, RecordBuilder, SshTarget, VmTarget,
};
pub use store::{ConfigStore, InstallationState, StoredRecord};
