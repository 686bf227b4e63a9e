mod common;

use common::{Answer, ScriptedPrompter, StubProbe};
use pretty_assertions::assert_eq;
use ralph_core::lifecycle::Questionnaire;
use ralph_core::{EnvSnapshot, Error, Execution, ExecutionMode, ModelChoice, Notice, SshTarget};

fn collect(
    answers: Vec<Answer>,
    probe: &StubProbe,
    env: &EnvSnapshot,
) -> (ScriptedPrompter, ralph_core::Result<ralph_core::ConfigurationRecord>) {
    let prompter = ScriptedPrompter::new(answers);
    let result = Questionnaire::new(&prompter, probe, env).collect("1.2.0");
    (prompter, result)
}

#[test]
fn container_mode_with_docker_present() {
    let probe = StubProbe {
        tools: vec!["docker"],
        identity: None,
    };
    let (prompter, record) = collect(
        vec![Answer::Select(2), Answer::Select(1), Answer::Input(Some(" octocat "))],
        &probe,
        &EnvSnapshot::default(),
    );
    let record = record.unwrap();

    assert_eq!(record.execution(), &Execution::Container);
    assert_eq!(record.default_model(), ModelChoice::ProviderB);
    assert_eq!(record.identity().username, "octocat");
    assert_eq!(record.schema_version(), "1.2.0");
    assert_eq!(
        *prompter.notices.borrow(),
        vec![
            Notice::ToolFound { tool: "docker" },
            Notice::ModelSetup {
                model: ModelChoice::ProviderB
            },
        ]
    );
}

#[test]
fn missing_docker_is_advisory() {
    let (prompter, record) = collect(
        vec![Answer::Select(2), Answer::Select(2), Answer::Input(None)],
        &StubProbe::default(),
        &EnvSnapshot::default(),
    );

    assert_eq!(record.unwrap().execution_mode(), ExecutionMode::Container);
    let notices = prompter.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert!(matches!(
        notices[0],
        Notice::AuxiliaryToolMissing { tool: "docker", .. }
    ));
}

#[test]
fn ssh_user_defaults_to_login_name() {
    let env = EnvSnapshot {
        user: Some("alice".into()),
    };
    let (prompter, record) = collect(
        vec![
            Answer::Select(1),
            Answer::Input(Some("192.168.1.20")),
            Answer::Input(None),
            Answer::Select(2),
            Answer::Input(None),
        ],
        &StubProbe::default(),
        &env,
    );

    assert_eq!(
        record.unwrap().execution(),
        &Execution::Ssh(SshTarget {
            host: "192.168.1.20".into(),
            user: "alice".into(),
        })
    );
    assert_eq!(
        *prompter.prompts.borrow(),
        vec![
            "Execution environment?",
            "VM IP address?",
            "SSH user?",
            "Default AI model for execution?",
            "GitHub username?",
        ]
    );
}

#[test]
fn detected_identity_is_offered_as_default() {
    let probe = StubProbe {
        tools: vec![],
        identity: Some("octocat"),
    };
    let (prompter, record) = collect(
        vec![Answer::Select(3), Answer::Select(2), Answer::Input(None)],
        &probe,
        &EnvSnapshot::default(),
    );

    assert_eq!(record.unwrap().identity().username, "octocat");
    assert_eq!(
        *prompter.notices.borrow(),
        vec![Notice::IdentityDetected {
            username: "octocat".into()
        }]
    );
}

#[test]
fn skipped_identity_stays_empty() {
    let (_, record) = collect(
        vec![Answer::Select(3), Answer::Select(2), Answer::Input(None)],
        &StubProbe::default(),
        &EnvSnapshot::default(),
    );

    let record = record.unwrap();
    assert!(!record.identity().is_set());
    assert_eq!(record.execution(), &Execution::None);
}

#[test]
fn out_of_range_selection_is_a_prompt_error() {
    let (_, record) = collect(vec![Answer::Select(9)], &StubProbe::default(), &EnvSnapshot::default());

    assert!(matches!(record, Err(Error::Prompt { .. })));
}
