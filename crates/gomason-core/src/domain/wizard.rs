//! The wizard state machine and configuration derivation.
//!
//! The wizard is a strict total order over ten questions. The front end
//! drives it one answer at a time: it hands the current step either a trimmed
//! string, a selection index, or the toggle positions, and reads back the
//! step label, validation error, and progress. Answers are stored only after
//! validation passes; a failed answer leaves the state untouched so the same
//! step can be re-asked.
//!
//! There is deliberately no branching or skipping in the step order. The
//! transition function is a single match so a conditional flow (for example
//! skipping GitHub questions for private libraries) would have exactly one
//! seam to grow through.

use crate::domain::config::{
    Features, GitHubConfig, LicenseKind, ProjectConfig, ProjectType, Visibility,
};
use crate::domain::error::DomainError;
use crate::domain::{security, validation};

// ── Step ──────────────────────────────────────────────────────────────────────

/// A single step in the interactive wizard, in answer order.
///
/// `Done` is terminal and not itself a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    ProjectName,
    ModulePath,
    Description,
    Author,
    ProjectType,
    Visibility,
    Criticality,
    Features,
    License,
    GitHub,
    Done,
}

/// Total number of wizard questions (excluding `Done`).
pub const TOTAL_STEPS: usize = 10;

impl Step {
    /// Human-readable label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ProjectName => "Project Name",
            Self::ModulePath => "Module Path",
            Self::Description => "Description",
            Self::Author => "Author",
            Self::ProjectType => "Project Type",
            Self::Visibility => "Visibility",
            Self::Criticality => "Criticality",
            Self::Features => "Features",
            Self::License => "License",
            Self::GitHub => "GitHub Integration",
            Self::Done => "Done",
        }
    }

    /// Zero-based position in the step order.
    pub const fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// The next step after `current` in the fixed total order.
pub const fn next_step(current: Step) -> Step {
    match current {
        Step::ProjectName => Step::ModulePath,
        Step::ModulePath => Step::Description,
        Step::Description => Step::Author,
        Step::Author => Step::ProjectType,
        Step::ProjectType => Step::Visibility,
        Step::Visibility => Step::Criticality,
        Step::Criticality => Step::Features,
        Step::Features => Step::License,
        Step::License => Step::GitHub,
        Step::GitHub | Step::Done => Step::Done,
    }
}

// ── Choices ───────────────────────────────────────────────────────────────────

/// A labeled selection option for single-choice steps.
#[derive(Debug, Clone, Copy)]
pub struct Choice {
    pub label: &'static str,
    pub value: &'static str,
}

/// A feature toggle option.
#[derive(Debug, Clone, Copy)]
pub struct ToggleChoice {
    pub key: &'static str,
    pub label: &'static str,
    pub default: bool,
}

pub const PROJECT_TYPE_CHOICES: [Choice; 6] = [
    Choice { label: "CLI Tool", value: "cli" },
    Choice { label: "REST API", value: "api" },
    Choice { label: "Microservice", value: "microservice" },
    Choice { label: "Library", value: "library" },
    Choice { label: "Security Tool", value: "security" },
    Choice { label: "Concurrent Worker / Service", value: "worker" },
];

pub const VISIBILITY_CHOICES: [Choice; 3] = [
    Choice { label: "Public (Open Source)", value: "public" },
    Choice { label: "Private (Internal)", value: "internal" },
    Choice { label: "Private (Commercial)", value: "private" },
];

pub const CRITICALITY_CHOICES: [Choice; 3] = [
    Choice { label: "Experimental", value: "experimental" },
    Choice { label: "Production", value: "production" },
    Choice { label: "Security Critical", value: "security-critical" },
];

pub const LICENSE_CHOICES: [Choice; 5] = [
    Choice { label: "Auto-suggest (based on context)", value: "auto" },
    Choice { label: "MIT", value: "mit" },
    Choice { label: "Apache-2.0", value: "apache-2.0" },
    Choice { label: "GPL-3.0", value: "gpl-3.0" },
    Choice { label: "Proprietary (no license)", value: "proprietary" },
];

pub const GITHUB_CHOICES: [Choice; 2] = [
    Choice { label: "Yes — create GitHub repository and push", value: "yes" },
    Choice { label: "No — local project only", value: "no" },
];

pub const FEATURE_CHOICES: [ToggleChoice; 7] = [
    ToggleChoice { key: "tests", label: "Unit Tests", default: true },
    ToggleChoice { key: "linting", label: "Linting (golangci-lint)", default: false },
    ToggleChoice { key: "static_analysis", label: "Static Analysis (staticcheck, gosec)", default: false },
    ToggleChoice { key: "github_actions", label: "GitHub Actions CI", default: false },
    ToggleChoice { key: "docker", label: "Docker", default: false },
    ToggleChoice { key: "dependabot", label: "Dependabot", default: false },
    ToggleChoice { key: "sast", label: "SAST / govulncheck", default: false },
];

/// The choice list for a single-selection step, `None` for text/toggle steps.
pub const fn choices_for(step: Step) -> Option<&'static [Choice]> {
    match step {
        Step::ProjectType => Some(&PROJECT_TYPE_CHOICES),
        Step::Visibility => Some(&VISIBILITY_CHOICES),
        Step::Criticality => Some(&CRITICALITY_CHOICES),
        Step::License => Some(&LICENSE_CHOICES),
        Step::GitHub => Some(&GITHUB_CHOICES),
        _ => None,
    }
}

/// `true` for steps answered with free text.
pub const fn is_text_step(step: Step) -> bool {
    matches!(
        step,
        Step::ProjectName | Step::ModulePath | Step::Description | Step::Author
    )
}

/// The feature record with every toggle at its declared default.
pub fn default_features() -> Features {
    let mut features = Features::default();
    for toggle in FEATURE_CHOICES {
        // KEYS and FEATURE_CHOICES agree by construction.
        let _ = features.set(toggle.key, toggle.default);
    }
    features
}

// ── WizardState ───────────────────────────────────────────────────────────────

/// Accumulator for all answers collected so far.
///
/// Scalar answers are stored as raw (validated) strings; they are parsed into
/// enums once, at derivation time. Mutated in place, one field per step, and
/// complete once `current_step` reaches [`Step::Done`].
#[derive(Debug, Clone)]
pub struct WizardState {
    pub current_step: Step,
    pub project_name: String,
    pub module_path: String,
    pub description: String,
    pub author: String,
    pub project_type: String,
    pub visibility: String,
    pub criticality: String,
    pub features: Features,
    pub license: String,
    pub github_enabled: bool,
    pub github_push: bool,
}

/// One answer, as supplied by the front end for the current step.
#[derive(Debug, Clone, Copy)]
pub enum StepInput<'a> {
    /// Trimmed free text (text steps).
    Text(&'a str),
    /// Index into the step's choice list (single-choice steps).
    Choice(usize),
    /// Toggle positions in [`FEATURE_CHOICES`] order (features step).
    Toggles(&'a [bool]),
}

impl WizardState {
    /// A fresh state at the first step, feature flags seeded to defaults.
    pub fn new() -> Self {
        Self {
            current_step: Step::ProjectName,
            project_name: String::new(),
            module_path: String::new(),
            description: String::new(),
            author: String::new(),
            project_type: String::new(),
            visibility: String::new(),
            criticality: String::new(),
            features: default_features(),
            license: String::new(),
            github_enabled: false,
            github_push: false,
        }
    }

    /// Apply an answer to the current step.
    ///
    /// Validates first; on failure the state is unchanged and the error is
    /// surfaced for the front end to display. Never advances; call
    /// [`Self::advance`] after a successful apply.
    pub fn apply_input(&mut self, input: StepInput<'_>) -> Result<(), DomainError> {
        match (self.current_step, input) {
            (Step::ProjectName, StepInput::Text(v)) => {
                validation::validate_project_name(v)?;
                self.project_name = validation::sanitize_project_name(v);
            }
            (Step::ModulePath, StepInput::Text(v)) => {
                validation::validate_module_path(v)?;
                self.module_path = v.trim().to_string();
            }
            (Step::Description, StepInput::Text(v)) => {
                validation::validate_description(v)?;
                self.description = v.trim().to_string();
            }
            (Step::Author, StepInput::Text(v)) => {
                validation::validate_author(v)?;
                self.author = v.trim().to_string();
            }
            (step @ (Step::ProjectType | Step::Visibility | Step::Criticality | Step::License), StepInput::Choice(index)) => {
                let choices = choices_for(step).expect("choice step has a choice list");
                let choice = choices.get(index).ok_or(DomainError::SelectionOutOfRange {
                    step: step.label(),
                    index,
                })?;
                match step {
                    Step::ProjectType => self.project_type = choice.value.to_string(),
                    Step::Visibility => self.visibility = choice.value.to_string(),
                    Step::Criticality => self.criticality = choice.value.to_string(),
                    Step::License => self.license = choice.value.to_string(),
                    _ => unreachable!(),
                }
            }
            (Step::Features, StepInput::Toggles(toggles)) => {
                if toggles.len() != FEATURE_CHOICES.len() {
                    return Err(DomainError::SelectionOutOfRange {
                        step: Step::Features.label(),
                        index: toggles.len(),
                    });
                }
                for (toggle, &enabled) in FEATURE_CHOICES.iter().zip(toggles) {
                    self.features.set(toggle.key, enabled)?;
                }
            }
            (Step::GitHub, StepInput::Choice(index)) => {
                if index >= GITHUB_CHOICES.len() {
                    return Err(DomainError::SelectionOutOfRange {
                        step: Step::GitHub.label(),
                        index,
                    });
                }
                // Yes/no answer drives both flags.
                let yes = index == 0;
                self.github_enabled = yes;
                self.github_push = yes;
            }
            (step, _) => {
                return Err(DomainError::InputKindMismatch { step: step.label() });
            }
        }
        Ok(())
    }

    /// Move to the next step in the fixed order.
    pub fn advance(&mut self) {
        self.current_step = next_step(self.current_step);
    }

    /// `true` once every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.current_step == Step::Done
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wizard completion as 0-100.
pub const fn progress_percent(state: &WizardState) -> usize {
    if state.current_step.ordinal() >= TOTAL_STEPS {
        return 100;
    }
    state.current_step.ordinal() * 100 / TOTAL_STEPS
}

// ── Derivation ────────────────────────────────────────────────────────────────

/// Convert a completed [`WizardState`] into a [`ProjectConfig`].
///
/// Post-processing, in order: the secure-configuration pre-pass, then license
/// auto-suggestion when no concrete license was chosen. No other mutation.
pub fn build_config(state: &WizardState) -> Result<ProjectConfig, DomainError> {
    let explicit_license: Option<LicenseKind> =
        if state.license.is_empty() || state.license.eq_ignore_ascii_case("auto") {
            None
        } else {
            Some(state.license.parse()?)
        };

    let mut config = ProjectConfig {
        name: state.project_name.clone(),
        module_path: state.module_path.clone(),
        description: state.description.clone(),
        author: state.author.clone(),
        project_type: state.project_type.parse()?,
        visibility: state.visibility.parse()?,
        criticality: state.criticality.parse()?,
        license: explicit_license.unwrap_or(LicenseKind::Proprietary),
        features: state.features,
        github: GitHubConfig {
            enabled: state.github_enabled,
            topics: Vec::new(),
            push_on_init: state.github_push,
        },
    };

    // Mandatory tooling for production / security-critical projects.
    security::enforce(&mut config);

    // Auto-suggest license when not set.
    if explicit_license.is_none() {
        config.license = suggest_license(&config);
    }

    Ok(config)
}

/// The recommended license for a configuration.
///
/// The private-visibility check runs before the library/public check, so a
/// private library still gets proprietary.
pub fn suggest_license(config: &ProjectConfig) -> LicenseKind {
    if config.visibility == Visibility::Private {
        LicenseKind::Proprietary
    } else if config.project_type == ProjectType::Library && config.is_public() {
        LicenseKind::Apache2
    } else if config.is_public() {
        LicenseKind::Mit
    } else {
        LicenseKind::Proprietary
    }
}

/// Resolve a license choice value, expanding the `auto` sentinel into a
/// concrete suggestion for the in-progress configuration.
pub fn license_from_choice(value: &str, config: &ProjectConfig) -> LicenseKind {
    if value.eq_ignore_ascii_case("auto") {
        return suggest_license(config);
    }
    value.parse().unwrap_or_else(|_| suggest_license(config))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk a state through every step with valid answers.
    fn complete_state() -> WizardState {
        let mut state = WizardState::new();
        state.apply_input(StepInput::Text("sentinel")).unwrap();
        state.advance();
        state
            .apply_input(StepInput::Text("github.com/user/sentinel"))
            .unwrap();
        state.advance();
        state.apply_input(StepInput::Text("A sentinel API")).unwrap();
        state.advance();
        state.apply_input(StepInput::Text("Test Author")).unwrap();
        state.advance();
        state.apply_input(StepInput::Choice(1)).unwrap(); // api
        state.advance();
        state.apply_input(StepInput::Choice(0)).unwrap(); // public
        state.advance();
        state.apply_input(StepInput::Choice(1)).unwrap(); // production
        state.advance();
        let toggles = [true, false, false, false, false, false, false];
        state.apply_input(StepInput::Toggles(&toggles)).unwrap();
        state.advance();
        state.apply_input(StepInput::Choice(0)).unwrap(); // auto license
        state.advance();
        state.apply_input(StepInput::Choice(1)).unwrap(); // no github
        state.advance();
        state
    }

    #[test]
    fn step_sequence_is_the_fixed_total_order() {
        let expected = [
            Step::ProjectName,
            Step::ModulePath,
            Step::Description,
            Step::Author,
            Step::ProjectType,
            Step::Visibility,
            Step::Criticality,
            Step::Features,
            Step::License,
            Step::GitHub,
            Step::Done,
        ];
        let mut visited = vec![Step::ProjectName];
        let mut current = Step::ProjectName;
        while current != Step::Done {
            let next = next_step(current);
            assert!(next > current, "no repeats, no going back: {current:?}");
            visited.push(next);
            current = next;
        }
        assert_eq!(visited, expected);
        assert_eq!(TOTAL_STEPS, expected.len() - 1);
    }

    #[test]
    fn done_is_absorbing() {
        assert_eq!(next_step(Step::Done), Step::Done);
    }

    #[test]
    fn progress_runs_zero_to_hundred() {
        let mut state = WizardState::new();
        assert_eq!(progress_percent(&state), 0);
        state.current_step = Step::Visibility;
        assert_eq!(progress_percent(&state), 50);
        state.current_step = Step::Done;
        assert_eq!(progress_percent(&state), 100);
    }

    #[test]
    fn invalid_text_answer_does_not_store_or_advance() {
        let mut state = WizardState::new();
        let err = state.apply_input(StepInput::Text("1bad name")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName(_)));
        assert!(state.project_name.is_empty());
        assert_eq!(state.current_step, Step::ProjectName);
    }

    #[test]
    fn project_name_is_sanitized_on_store() {
        let mut state = WizardState::new();
        state.apply_input(StepInput::Text("My App")).unwrap_err();
        // spaces are invalid pre-sanitization; a valid mixed-case name is kept lowered
        state.apply_input(StepInput::Text("MyApp")).unwrap();
        assert_eq!(state.project_name, "myapp");
    }

    #[test]
    fn choice_index_out_of_range_is_rejected() {
        let mut state = WizardState::new();
        state.current_step = Step::ProjectType;
        assert!(matches!(
            state.apply_input(StepInput::Choice(99)),
            Err(DomainError::SelectionOutOfRange { .. })
        ));
        assert!(state.project_type.is_empty());
    }

    #[test]
    fn wrong_input_kind_is_rejected() {
        let mut state = WizardState::new();
        assert!(matches!(
            state.apply_input(StepInput::Choice(0)),
            Err(DomainError::InputKindMismatch { .. })
        ));
    }

    #[test]
    fn feature_toggles_copy_into_the_record() {
        let mut state = WizardState::new();
        state.current_step = Step::Features;
        let toggles = [true, true, false, true, false, false, true];
        state.apply_input(StepInput::Toggles(&toggles)).unwrap();
        assert!(state.features.tests);
        assert!(state.features.linting);
        assert!(!state.features.static_analysis);
        assert!(state.features.github_actions);
        assert!(state.features.sast);
    }

    #[test]
    fn github_yes_sets_both_flags() {
        let mut state = WizardState::new();
        state.current_step = Step::GitHub;
        state.apply_input(StepInput::Choice(0)).unwrap();
        assert!(state.github_enabled);
        assert!(state.github_push);
    }

    #[test]
    fn default_features_enable_tests_only() {
        let features = default_features();
        assert!(features.tests);
        assert!(!features.linting);
        assert!(!features.docker);
        assert!(!features.sast);
    }

    #[test]
    fn suggest_license_cases() {
        let mut config = build_config(&complete_state()).unwrap();

        config.visibility = Visibility::Private;
        config.project_type = ProjectType::Library;
        assert_eq!(suggest_license(&config), LicenseKind::Proprietary);

        config.visibility = Visibility::Public;
        assert_eq!(suggest_license(&config), LicenseKind::Apache2);

        config.project_type = ProjectType::Cli;
        assert_eq!(suggest_license(&config), LicenseKind::Mit);

        config.visibility = Visibility::Internal;
        assert_eq!(suggest_license(&config), LicenseKind::Proprietary);
    }

    #[test]
    fn license_from_choice_resolves_auto() {
        let config = build_config(&complete_state()).unwrap();
        assert_eq!(license_from_choice("auto", &config), LicenseKind::Mit);
        assert_eq!(license_from_choice("gpl-3.0", &config), LicenseKind::Gpl3);
    }

    #[test]
    fn derivation_of_public_production_api() {
        // End-to-end: name "sentinel", api, public, production, license auto.
        let config = build_config(&complete_state()).unwrap();
        assert_eq!(config.name, "sentinel");
        assert_eq!(config.module_path, "github.com/user/sentinel");
        assert_eq!(config.project_type, ProjectType::Api);
        assert_eq!(config.license, LicenseKind::Mit);
        // Secure invariant after derivation.
        assert!(config.features.static_analysis);
        assert!(config.features.sast);
        assert!(config.features.tests);
        // github_actions was off, so dependabot stays off.
        assert!(!config.features.dependabot);
    }

    #[test]
    fn derivation_forces_dependabot_with_actions_on_secure() {
        let mut state = complete_state();
        state.features.github_actions = true;
        let config = build_config(&state).unwrap();
        assert!(config.features.dependabot);
    }
}
