//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gomason",
    bin_name = "gomason",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3db} Intelligent Go project and repository generator",
    long_about = "gomason generates idiomatic Go project structures, security \
                  policies, CI pipelines, and GitHub repositories — tailored \
                  to your project's real purpose and risk profile.",
    after_help = "EXAMPLES:\n\
        \x20 gomason init                       # interactive wizard\n\
        \x20 gomason init --from gomason.yml    # headless replay\n\
        \x20 gomason validate gomason.yml\n\
        \x20 gomason completions bash > /usr/share/bash-completion/completions/gomason",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project, interactively or from a saved configuration.
    #[command(
        visible_alias = "i",
        about = "Start the project wizard (or replay a saved config)",
        after_help = "EXAMPLES:\n\
            \x20 gomason init\n\
            \x20 gomason init --from gomason.yml --yes\n\
            \x20 gomason init --from gomason.yml --output ~/src --dry-run"
    )]
    Init(InitArgs),

    /// Validate a gomason.yml configuration file.
    #[command(
        about = "Validate a configuration file",
        after_help = "EXAMPLES:\n\
            \x20 gomason validate gomason.yml"
    )]
    Validate(ValidateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gomason completions bash > ~/.local/share/bash-completion/completions/gomason\n\
            \x20 gomason completions zsh  > ~/.zfunc/_gomason\n\
            \x20 gomason completions fish > ~/.config/fish/completions/gomason.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gomason init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Load the configuration from a gomason.yml instead of running the wizard.
    #[arg(
        long = "from",
        value_name = "FILE",
        help = "Headless mode: replay a saved configuration"
    )]
    pub from: Option<PathBuf>,

    /// Parent directory for the generated project.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory for the project (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and generate immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show the plan without creating anything")]
    pub dry_run: bool,

    /// Skip the GitHub repository creation step even if configured.
    #[arg(long = "no-github", help = "Skip GitHub repository creation")]
    pub no_github: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `gomason validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file to check.
    #[arg(value_name = "FILE", help = "Path to a gomason.yml")]
    pub file: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gomason completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
