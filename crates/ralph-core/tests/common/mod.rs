//! Scripted collaborators shared by the lifecycle tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use ralph_core::{
    DistributionMetadata, Error, LifecycleController, Notice, Prompter, Result, ToolProbe,
    WorkspaceContext,
};
use ralph_test_utils::TestProject;

/// One scripted answer.
#[derive(Debug, Clone)]
pub enum Answer {
    Confirm(bool),
    Select(usize),
    /// Free text; `None` accepts the offered default.
    Input(Option<&'static str>),
}

/// Replays answers in order and records every prompt and notice.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    pub prompts: RefCell<Vec<String>>,
    pub notices: RefCell<Vec<Notice>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer left for prompt: {prompt}"))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt) {
            Answer::Confirm(answer) => Ok(answer),
            other => panic!("expected a confirm answer for '{prompt}', got {other:?}"),
        }
    }

    fn select(&self, prompt: &str, items: &[&str], _default: usize) -> Result<usize> {
        match self.next(prompt) {
            Answer::Select(index) if index < items.len() => Ok(index),
            Answer::Select(index) => Err(Error::Prompt {
                message: format!("index {index} out of range"),
            }),
            other => panic!("expected a select answer for '{prompt}', got {other:?}"),
        }
    }

    fn input(&self, prompt: &str, default: &str, _required: bool) -> Result<String> {
        match self.next(prompt) {
            Answer::Input(Some(text)) => Ok(text.to_string()),
            Answer::Input(None) => Ok(default.to_string()),
            other => panic!("expected an input answer for '{prompt}', got {other:?}"),
        }
    }

    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

/// Probe with a fixed set of installed tools and an optional identity.
#[derive(Default)]
pub struct StubProbe {
    pub tools: Vec<&'static str>,
    pub identity: Option<&'static str>,
}

impl ToolProbe for StubProbe {
    fn is_available(&self, command: &str) -> bool {
        self.tools.iter().any(|tool| *tool == command)
    }

    fn detect_identity(&self) -> Option<String> {
        self.identity.map(str::to_string)
    }
}

/// Distribution metadata declaring a fixed version.
pub struct FixedVersion(pub &'static str);

impl DistributionMetadata for FixedVersion {
    fn version(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// Answers for a disclaimer-accepted install choosing "Skip" execution,
/// the "Auto" model, and the offered identity default.
pub fn minimal_install_answers() -> Vec<Answer> {
    vec![
        Answer::Confirm(true),
        Answer::Select(3),
        Answer::Select(2),
        Answer::Input(None),
    ]
}

/// Answers for an install choosing SSH execution.
pub fn ssh_install_answers(host: &'static str, user: &'static str) -> Vec<Answer> {
    vec![
        Answer::Confirm(true),
        Answer::Select(1),
        Answer::Input(Some(host)),
        Answer::Input(Some(user)),
        Answer::Select(0),
        Answer::Input(Some("octocat")),
    ]
}

pub fn context(project: &TestProject) -> WorkspaceContext {
    WorkspaceContext::new(project.project_root(), project.distribution_root())
}

/// Run `install` with the given scripted answers.
pub fn install(
    project: &TestProject,
    prompter: &ScriptedPrompter,
    version: &'static str,
) -> Result<ralph_core::InstallOutcome> {
    let ctx = context(project);
    let probe = StubProbe::default();
    let metadata = FixedVersion(version);
    LifecycleController::new(&ctx, prompter, &probe, &metadata).install()
}

/// Run `update`; the prompter must never be consulted.
pub fn update(project: &TestProject, version: &'static str) -> Result<ralph_core::UpdateOutcome> {
    let ctx = context(project);
    let prompter = ScriptedPrompter::default();
    let probe = StubProbe::default();
    let metadata = FixedVersion(version);
    LifecycleController::new(&ctx, &prompter, &probe, &metadata).update()
}
