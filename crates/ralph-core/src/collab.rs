//! Collaborator interfaces for peripheral I/O
//!
//! The lifecycle never talks to a terminal, a `$PATH`, or a package manifest
//! directly; it goes through these traits so the CLI can supply interactive
//! implementations and tests can supply scripted ones.

use crate::Result;
use crate::config::ModelChoice;

/// Supplies answers to configuration questions.
///
/// Each call yields exactly one typed answer. The lifecycle performs no
/// validation beyond required-ness.
pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Ask the user to pick one of `items`; returns the chosen index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Ask for free text. When `required` is set an empty answer is not accepted.
    fn input(&self, prompt: &str, default: &str, required: bool) -> Result<String>;

    /// Show an advisory notice. Notices never change control flow.
    fn notify(&self, notice: &Notice);
}

/// Resolves auxiliary command-line tools on the current machine.
pub trait ToolProbe {
    /// Whether `command` is resolvable.
    fn is_available(&self, command: &str) -> bool;

    /// The external-account username, if a logged-in tool can report one.
    fn detect_identity(&self) -> Option<String>;
}

/// Declares the version of the running distribution.
pub trait DistributionMetadata {
    /// The declared version, or [`crate::Error::VersionUnavailable`].
    fn version(&self) -> Result<String>;
}

/// Advisory messages raised while collecting configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An auxiliary tool the chosen execution mode relies on was found.
    ToolFound { tool: &'static str },
    /// An auxiliary tool the chosen execution mode relies on is missing.
    AuxiliaryToolMissing {
        tool: &'static str,
        install_hint: &'static str,
    },
    /// An identity was detected and offered as the default answer.
    IdentityDetected { username: String },
    /// Setup guidance for the chosen model provider.
    ModelSetup { model: ModelChoice },
}
