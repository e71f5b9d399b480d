//! Security enforcement pre-pass.
//!
//! Applied to a [`ProjectConfig`] before planning, never inside the planner.
//! Every path that produces a config runs through here: wizard derivation,
//! headless YAML load, and the generation pipeline itself.

use crate::domain::config::ProjectConfig;

/// `true` when the project warrants mandatory security tooling.
pub fn should_enforce(config: &ProjectConfig) -> bool {
    config.is_secure()
}

/// Activate all mandatory security options for the project's criticality.
///
/// Production and security-critical projects always get static analysis,
/// SAST, and tests; Dependabot is mandatory only where there is a CI
/// pipeline for it to feed.
pub fn enforce(config: &mut ProjectConfig) {
    if !should_enforce(config) {
        return;
    }
    config.features.static_analysis = true;
    config.features.sast = true;
    config.features.tests = true;
    if config.features.github_actions {
        config.features.dependabot = true;
    }
}
