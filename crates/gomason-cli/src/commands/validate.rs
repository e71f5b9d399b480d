//! Implementation of `gomason validate`.
//!
//! Loads a persisted configuration through the same code path headless
//! generation uses, so "validate passed" means "init --from will accept it".

use tracing::instrument;

use gomason_core::domain::config::ProjectConfig;

use crate::{
    cli::ValidateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `gomason validate` command.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let raw = std::fs::read_to_string(&args.file).map_err(|e| CliError::ConfigError {
        message: format!("reading {}: {e}", args.file.display()),
        source: Some(Box::new(e)),
    })?;

    let config = ProjectConfig::from_yaml(&raw).map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: None,
    })?;

    output.success(&format!(
        "Valid configuration: {} ({}/{})",
        config.name, config.project_type, config.criticality
    ))?;
    Ok(())
}
