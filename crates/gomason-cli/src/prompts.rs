//! Interactive wizard front end.
//!
//! Drives the core wizard state machine one step at a time with dialoguer
//! prompts. All decision logic stays in the core: this module only collects
//! raw input, hands it to [`WizardState::apply_input`], displays validation
//! errors, and re-asks the same step until it is accepted.

use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};

use gomason_core::domain::wizard::{
    self, FEATURE_CHOICES, Step, StepInput, TOTAL_STEPS, WizardState,
};

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

/// Run the full wizard and return the completed state.
pub fn run_wizard(app_config: &AppConfig, output: &OutputManager) -> CliResult<WizardState> {
    let theme = ColorfulTheme::default();
    let mut state = WizardState::new();

    output.header("gomason — Go project generator")?;
    output.print("")?;

    while !state.is_complete() {
        let step = state.current_step;
        let prompt = step_prompt(&state);

        match step {
            _ if wizard::is_text_step(step) => {
                ask_text(&theme, &prompt, &mut state, app_config, output)?;
            }
            Step::Features => {
                let labels: Vec<&str> = FEATURE_CHOICES.iter().map(|t| t.label).collect();
                let defaults: Vec<bool> = FEATURE_CHOICES.iter().map(|t| t.default).collect();
                let selected = MultiSelect::with_theme(&theme)
                    .with_prompt(prompt)
                    .items(&labels)
                    .defaults(&defaults)
                    .interact()
                    .map_err(prompt_error)?;
                let mut toggles = vec![false; FEATURE_CHOICES.len()];
                for index in selected {
                    toggles[index] = true;
                }
                apply_or_bail(&mut state, StepInput::Toggles(&toggles), output)?;
            }
            _ => {
                let choices = wizard::choices_for(step).expect("non-text step has choices");
                let labels: Vec<&str> = choices.iter().map(|c| c.label).collect();
                let index = Select::with_theme(&theme)
                    .with_prompt(prompt)
                    .items(&labels)
                    .default(0)
                    .interact()
                    .map_err(prompt_error)?;
                apply_or_bail(&mut state, StepInput::Choice(index), output)?;
            }
        }
    }

    Ok(state)
}

/// Ask a text step, re-prompting until validation accepts the answer.
fn ask_text(
    theme: &ColorfulTheme,
    prompt: &str,
    state: &mut WizardState,
    app_config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    loop {
        let mut input = Input::<String>::with_theme(theme).with_prompt(prompt);
        input = match state.current_step {
            // Empty description is allowed; everything else must be typed.
            Step::Description => input.allow_empty(true),
            Step::Author => match &app_config.defaults.author {
                Some(author) => input.with_initial_text(author.clone()),
                None => input,
            },
            Step::ModulePath => match &app_config.defaults.module_prefix {
                Some(prefix) => input.with_initial_text(format!("{prefix}/")),
                None => input,
            },
            _ => input,
        };

        let answer = input.interact_text().map_err(prompt_error)?;
        match state.apply_input(StepInput::Text(answer.trim())) {
            Ok(()) => {
                state.advance();
                return Ok(());
            }
            // Validation errors never leave the wizard loop: show and re-ask.
            Err(e) => output.error(&e.to_string())?,
        }
    }
}

/// Apply a selection answer. Selection indices come from dialoguer and are
/// in range by construction, so a rejection here is a real error.
fn apply_or_bail(
    state: &mut WizardState,
    input: StepInput<'_>,
    output: &OutputManager,
) -> CliResult<()> {
    match state.apply_input(input) {
        Ok(()) => {
            state.advance();
            Ok(())
        }
        Err(e) => {
            output.error(&e.to_string())?;
            Err(CliError::Core(e.into()))
        }
    }
}

/// Prompt line: step counter, progress, and the question.
fn step_prompt(state: &WizardState) -> String {
    let step = state.current_step;
    format!(
        "[{}/{} {:>3}%] {}",
        step.ordinal() + 1,
        TOTAL_STEPS,
        wizard::progress_percent(state),
        question_for(step),
    )
}

fn question_for(step: Step) -> &'static str {
    match step {
        Step::ProjectName => "What is the name of your project?",
        Step::ModulePath => "What is the Go module path?",
        Step::Description => "Briefly describe your project",
        Step::Author => "Your name / maintainer",
        Step::ProjectType => "What type of project is this?",
        Step::Visibility => "Who is this project for?",
        Step::Criticality => "What is the criticality level?",
        Step::Features => "Select features to enable",
        Step::License => "Choose a license",
        Step::GitHub => "Create a GitHub repository?",
        Step::Done => "Done",
    }
}

/// Translate a dialoguer failure (almost always ctrl-c / closed tty).
fn prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        dialoguer::Error::IO(io) => CliError::IoError {
            message: "prompt failed".into(),
            source: io,
        },
    }
}
