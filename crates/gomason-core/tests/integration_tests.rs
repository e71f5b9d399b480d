//! Integration tests: the full wizard → derivation → planning flow.

use gomason_core::domain::config::{LicenseKind, ProjectType, Visibility};
use gomason_core::domain::scaffold::{CMD_PREFIX, build_directory_tree};
use gomason_core::domain::wizard::{self, Step, StepInput, WizardState};

/// Answer every step the way an interactive session would.
fn answer_all(state: &mut WizardState) {
    let answers: [(Step, StepInput); 10] = [
        (Step::ProjectName, StepInput::Text("sentinel")),
        (Step::ModulePath, StepInput::Text("github.com/user/sentinel")),
        (Step::Description, StepInput::Text("A security sentinel API")),
        (Step::Author, StepInput::Text("Test Author")),
        (Step::ProjectType, StepInput::Choice(1)),  // api
        (Step::Visibility, StepInput::Choice(0)),   // public
        (Step::Criticality, StepInput::Choice(1)),  // production
        (
            Step::Features,
            StepInput::Toggles(&[true, false, false, false, false, false, false]),
        ),
        (Step::License, StepInput::Choice(0)), // auto
        (Step::GitHub, StepInput::Choice(1)),  // no
    ];
    for (step, input) in answers {
        assert_eq!(state.current_step, step);
        state.apply_input(input).unwrap();
        state.advance();
    }
}

#[test]
fn wizard_walk_visits_all_ten_steps_then_done() {
    let mut state = WizardState::new();
    assert_eq!(wizard::progress_percent(&state), 0);
    answer_all(&mut state);
    assert!(state.is_complete());
    assert_eq!(wizard::progress_percent(&state), 100);
}

#[test]
fn sentinel_scenario_derives_and_plans_as_specified() {
    let mut state = WizardState::new();
    answer_all(&mut state);

    let config = wizard::build_config(&state).unwrap();

    // Public non-library with no explicit license suggests MIT.
    assert_eq!(config.license, LicenseKind::Mit);
    assert_eq!(config.project_type, ProjectType::Api);
    assert_eq!(config.visibility, Visibility::Public);

    // Production criticality forces the security tooling on.
    assert!(config.features.static_analysis);
    assert!(config.features.sast);
    assert!(config.features.tests);

    let plan = build_directory_tree(&config);
    for path in [
        "README.md",
        "go.mod",
        ".gitignore",
        "CONTRIBUTING.md",
        "CODE_OF_CONDUCT.md",
        "SECURITY.md",
        "cmd/server/main.go",
        "internal/handler/handler.go",
        "internal/service/service.go",
        "internal/repository/repository.go",
        "internal/middleware/middleware.go",
        "api/openapi.yaml",
    ] {
        assert!(plan.contains(path), "missing {path}");
    }
}

#[test]
fn derived_config_round_trips_through_yaml() {
    let mut state = WizardState::new();
    answer_all(&mut state);
    let config = wizard::build_config(&state).unwrap();

    let yaml = config.to_yaml().unwrap();
    let loaded = gomason_core::domain::config::ProjectConfig::from_yaml(&yaml).unwrap();
    assert_eq!(config, loaded);
}

#[test]
fn library_wizard_run_plans_no_command_entry_point() {
    let mut state = WizardState::new();
    state.apply_input(StepInput::Text("toolkit")).unwrap();
    state.advance();
    state
        .apply_input(StepInput::Text("github.com/user/toolkit"))
        .unwrap();
    state.advance();
    state.apply_input(StepInput::Text("")).unwrap();
    state.advance();
    state.apply_input(StepInput::Text("Test Author")).unwrap();
    state.advance();
    state.apply_input(StepInput::Choice(3)).unwrap(); // library
    state.advance();
    state.apply_input(StepInput::Choice(1)).unwrap(); // internal
    state.advance();
    state.apply_input(StepInput::Choice(0)).unwrap(); // experimental
    state.advance();
    state
        .apply_input(StepInput::Toggles(&[true, false, false, false, false, false, false]))
        .unwrap();
    state.advance();
    state.apply_input(StepInput::Choice(0)).unwrap(); // auto → proprietary (internal)
    state.advance();
    state.apply_input(StepInput::Choice(1)).unwrap(); // no github
    state.advance();

    let config = wizard::build_config(&state).unwrap();
    assert_eq!(config.license, LicenseKind::Proprietary);

    let plan = build_directory_tree(&config);
    assert!(!plan.contains_prefix(CMD_PREFIX));
    assert!(plan.contains("pkg/toolkit/toolkit.go"));
}
