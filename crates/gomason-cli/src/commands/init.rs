//! Implementation of `gomason init`.
//!
//! Responsibility: obtain a `ProjectConfig` (wizard or headless replay),
//! show the summary, run the generation service, and drive the optional
//! GitHub integration. No decision logic lives here.

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, instrument, warn};

use gomason_adapters::{BuiltinRenderer, GhCli, LocalFilesystem};
use gomason_core::{
    application::{
        GenerateService,
        ports::{RepoOptions, RepositoryHost},
    },
    domain::{config::ProjectConfig, scaffold, security},
};

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `gomason init` command.
///
/// Dispatch sequence:
/// 1. Obtain the configuration (wizard, or `--from` headless replay)
/// 2. Show the summary and confirm unless `--yes` / `--quiet`
/// 3. Early-exit if `--dry-run`
/// 4. Generate via `GenerateService`
/// 5. Optionally create the GitHub repository (failure is a warning only)
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    app_config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Configuration
    let config = match &args.from {
        Some(path) => {
            let config = load_headless(path)?;
            output.success(&format!("Loaded configuration from {}", path.display()))?;
            config
        }
        None => run_wizard(&app_config, &output)?,
    };

    output.print("")?;
    output.summary(&config)?;
    output.print("")?;

    let parent = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let project_dir = parent.join(&config.name);

    // 2. Dry run: describe the plan but do not write.
    if args.dry_run {
        return dry_run(&config, &project_dir, &output);
    }

    // 3. Confirm
    if !global.quiet && !args.yes && !confirm()? {
        return Err(CliError::Cancelled);
    }

    // 4. Generate
    let spinner = make_spinner(output.is_quiet(), &config.name);
    let service = GenerateService::new(
        Box::new(BuiltinRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let result = service.generate(&config, &project_dir);
    spinner.finish_and_clear();
    let generated = result.map_err(CliError::Core)?;

    info!(project = %config.name, files = generated.files.len(), "Project generated");

    print_tree(&generated.root, &output)?;
    output.print("")?;
    output.success(&format!(
        "gomason.yml exported to {}",
        generated.root.join("gomason.yml").display()
    ))?;
    output.success(&format!("Project ready at {}", generated.root.display()))?;

    // 5. GitHub integration. Failure downgrades to a warning.
    if config.github.enabled && !args.no_github {
        output.print("")?;
        output.info("Creating GitHub repository...")?;
        let options = RepoOptions::from_config(&config, &generated.root);
        match GhCli::new().create_repository(&options) {
            Ok(()) => output.success("Repository created and pushed to GitHub.")?,
            Err(e) => {
                warn!(error = %e, "GitHub integration failed");
                output.warning(&format!("GitHub integration failed: {e}"))?;
                output.warning("The project was generated locally. You can push manually.")?;
            }
        }
    }

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", config.name))?;
        output.print("  make build")?;
    }

    Ok(())
}

// ── Configuration sources ─────────────────────────────────────────────────────

/// Headless mode: load and validate a persisted configuration.
fn load_headless(path: &Path) -> CliResult<ProjectConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
        message: format!("reading {}: {e}", path.display()),
        source: Some(Box::new(e)),
    })?;
    ProjectConfig::from_yaml(&raw).map_err(|e| CliError::ConfigError {
        message: e.to_string(),
        source: None,
    })
}

/// Interactive mode: drive the wizard and derive the configuration.
#[cfg(feature = "interactive")]
fn run_wizard(app_config: &AppConfig, output: &OutputManager) -> CliResult<ProjectConfig> {
    let state = crate::prompts::run_wizard(app_config, output)?;
    gomason_core::domain::wizard::build_config(&state).map_err(|e| CliError::Core(e.into()))
}

#[cfg(not(feature = "interactive"))]
fn run_wizard(_app_config: &AppConfig, _output: &OutputManager) -> CliResult<ProjectConfig> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Dry run ───────────────────────────────────────────────────────────────────

/// Print every path the plan would create, without touching the filesystem.
fn dry_run(config: &ProjectConfig, project_dir: &Path, output: &OutputManager) -> CliResult<()> {
    let mut enforced = config.clone();
    security::enforce(&mut enforced);
    let plan = scaffold::build_directory_tree(&enforced);

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        config.name,
        project_dir.display()
    ))?;
    for entry in &plan.entries {
        let suffix = if entry.is_dir() { "/" } else { "" };
        output.print(&format!("  {}{}", entry.path, suffix))?;
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn make_spinner(quiet: bool, name: &str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("static template is valid"),
    );
    spinner.set_message(format!("Generating {name}..."));
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

/// Print a simplified directory tree for the generated project.
fn print_tree(root: &Path, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.print("Generated structure:")?;
    output.print("")?;

    for entry in walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let depth = entry.depth();
        if depth == 0 {
            output.print(&format!(
                "  {}/",
                root.file_name().unwrap_or_default().to_string_lossy()
            ))?;
            continue;
        }
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().is_dir() {
            name.push('/');
        }
        let indent = "\u{2502}   ".repeat(depth - 1);
        output.print(&format!("  {indent}\u{251c}\u{2500}\u{2500} {name}"))?;
    }
    Ok(())
}
