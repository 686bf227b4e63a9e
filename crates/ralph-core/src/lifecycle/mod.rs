//! The `install` and `update` state machines

mod controller;
mod launcher;
mod outcome;
mod questionnaire;

pub use controller::LifecycleController;
pub use launcher::{LAUNCHER_SCRIPT, emit_launcher};
pub use outcome::{CancelReason, InstallOutcome, InstallReport, UpdateOutcome, UpdateReport};
pub use questionnaire::Questionnaire;
