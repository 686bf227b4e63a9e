//! The configuration dialogue run during install
//!
//! Answers are assembled in memory and only become a
//! [`ConfigurationRecord`] once every question has been answered.

use crate::collab::{Notice, Prompter, ToolProbe};
use crate::config::{
    ConfigurationRecord, Execution, ExecutionMode, Identity, ModelChoice, SshTarget, VmTarget,
};
use crate::context::EnvSnapshot;
use crate::{Error, Result};

pub const DEFAULT_VM_NAME: &str = "ralph-sandbox";
pub const DEFAULT_ZONE: &str = "europe-north1-a";
pub const DEFAULT_SSH_USER: &str = "ralph";

const EXECUTION_CHOICES: &[(&str, ExecutionMode)] = &[
    ("GCP VM (recommended)", ExecutionMode::VmManaged),
    ("Self-hosted VM (SSH)", ExecutionMode::Ssh),
    ("Docker (local fallback)", ExecutionMode::Container),
    ("Skip (configure later)", ExecutionMode::None),
];

const MODEL_CHOICES: &[(&str, ModelChoice)] = &[
    ("Gemini CLI (recommended)", ModelChoice::ProviderA),
    ("Claude via Antigravity", ModelChoice::ProviderB),
    ("Auto-detect (use AGENTS.md)", ModelChoice::Auto),
];

/// Auxiliary CLI each execution mode drives, with an install hint.
fn required_tool(mode: ExecutionMode) -> Option<(&'static str, &'static str)> {
    match mode {
        ExecutionMode::VmManaged => Some((
            "gcloud",
            "Install with: brew install --cask google-cloud-sdk",
        )),
        ExecutionMode::Container => Some(("docker", "Install Docker Desktop from docker.com")),
        ExecutionMode::Ssh | ExecutionMode::None => None,
    }
}

/// Collects a complete [`ConfigurationRecord`] through a [`Prompter`].
pub struct Questionnaire<'a> {
    prompter: &'a dyn Prompter,
    probe: &'a dyn ToolProbe,
    env: &'a EnvSnapshot,
}

impl<'a> Questionnaire<'a> {
    pub fn new(prompter: &'a dyn Prompter, probe: &'a dyn ToolProbe, env: &'a EnvSnapshot) -> Self {
        Self {
            prompter,
            probe,
            env,
        }
    }

    /// Ask every question and build a validated record stamped with
    /// `schema_version`.
    pub fn collect(&self, schema_version: &str) -> Result<ConfigurationRecord> {
        let mode = self.choose("Execution environment?", EXECUTION_CHOICES, 0)?;
        self.check_tool(mode);
        let execution = self.ask_target(mode)?;

        let model = self.choose("Default AI model for execution?", MODEL_CHOICES, 0)?;
        let identity = self.ask_identity()?;

        if model != ModelChoice::Auto {
            self.prompter.notify(&Notice::ModelSetup { model });
        }

        ConfigurationRecord::builder(schema_version)
            .execution(execution)
            .default_model(model)
            .identity(identity)
            .build()
    }

    fn choose<T: Copy>(&self, prompt: &str, choices: &[(&str, T)], default: usize) -> Result<T> {
        let labels: Vec<&str> = choices.iter().map(|(label, _)| *label).collect();
        let index = self.prompter.select(prompt, &labels, default)?;
        choices
            .get(index)
            .map(|(_, value)| *value)
            .ok_or_else(|| Error::Prompt {
                message: format!("selection {index} is out of range for '{prompt}'"),
            })
    }

    fn check_tool(&self, mode: ExecutionMode) {
        let Some((tool, install_hint)) = required_tool(mode) else {
            return;
        };

        if self.probe.is_available(tool) {
            self.prompter.notify(&Notice::ToolFound { tool });
        } else {
            tracing::warn!(tool, "auxiliary tool not found");
            self.prompter
                .notify(&Notice::AuxiliaryToolMissing { tool, install_hint });
        }
    }

    fn ask_target(&self, mode: ExecutionMode) -> Result<Execution> {
        Ok(match mode {
            ExecutionMode::None => Execution::None,
            ExecutionMode::Container => Execution::Container,
            ExecutionMode::VmManaged => Execution::VmManaged(VmTarget {
                name: self.prompter.input("VM name?", DEFAULT_VM_NAME, true)?,
                project: self.prompter.input("GCP project ID?", "", false)?,
                zone: self.prompter.input("GCP zone?", DEFAULT_ZONE, true)?,
            }),
            ExecutionMode::Ssh => {
                let host = self.prompter.input("VM IP address?", "", true)?;
                let default_user = self.env.user.as_deref().unwrap_or(DEFAULT_SSH_USER);
                let user = self.prompter.input("SSH user?", default_user, true)?;
                Execution::Ssh(SshTarget { host, user })
            }
        })
    }

    fn ask_identity(&self) -> Result<Identity> {
        let detected = self.probe.detect_identity().unwrap_or_default();
        if !detected.is_empty() {
            self.prompter.notify(&Notice::IdentityDetected {
                username: detected.clone(),
            });
        }

        let username = self.prompter.input("GitHub username?", &detected, false)?;
        Ok(Identity::new(username.trim()))
    }
}
