//! Interactive prompts for the install dialogue
//!
//! Uses dialoguer for terminal-based selection and colored for notices.

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use ralph_core::{ModelChoice, Notice, Prompter};

const RULE: &str = "------------------------------------------------------------";

/// [`Prompter`] backed by the controlling terminal.
pub struct DialoguerPrompter;

fn prompt_error(e: dialoguer::Error) -> ralph_core::Error {
    ralph_core::Error::Prompt {
        message: e.to_string(),
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> ralph_core::Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> ralph_core::Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn input(&self, prompt: &str, default: &str, required: bool) -> ralph_core::Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(!required);
        if !default.is_empty() {
            input = input.default(default.to_string());
        }
        if required {
            input = input.validate_with(|value: &String| -> Result<(), &'static str> {
                if value.trim().is_empty() {
                    Err("a value is required")
                } else {
                    Ok(())
                }
            });
        }
        input.interact_text().map_err(prompt_error)
    }

    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::ToolFound { tool } => {
                println!("  {} {} CLI found", "+".green(), tool);
            }
            Notice::AuxiliaryToolMissing { tool, install_hint } => {
                println!();
                println!("  {}", format!("{tool} CLI not found.").yellow());
                println!("  {}", install_hint.dimmed());
            }
            Notice::IdentityDetected { username } => {
                println!("  {} GitHub detected: {}", "+".green(), username.cyan());
            }
            Notice::ModelSetup { model } => print_model_setup(*model),
        }
    }
}

fn print_model_setup(model: ModelChoice) {
    let (title, steps): (&str, &[&str]) = match model {
        ModelChoice::ProviderA => (
            "Gemini CLI Setup",
            &[
                "After the VM is created, make sure Gemini CLI is installed,",
                "then authenticate:",
                "",
                "    gemini auth login",
                "",
                "This opens a browser to complete the login.",
            ],
        ),
        ModelChoice::ProviderB => (
            "Claude via Antigravity Setup",
            &[
                "After the VM is created, make sure Antigravity is installed:",
                "",
                "    pip install antigravity",
                "",
                "Set your API key and add it to ~/.bashrc:",
                "",
                "    export ANTHROPIC_API_KEY=\"sk-ant-...\"",
            ],
        ),
        ModelChoice::Auto => return,
    };

    println!();
    println!("{}", RULE.cyan());
    println!("  {}", title.cyan().bold());
    println!("{}", RULE.cyan());
    println!();
    for line in steps {
        println!("  {}", line.cyan());
    }
    println!("{}", RULE.cyan());
}
