//! GitHub repository creation via the `gh` CLI.
//!
//! Shelling out to `gh` keeps authentication out of scope: the user's
//! existing `gh auth login` session (or GITHUB_TOKEN) is reused. The core
//! treats this as a one-shot collaborator whose failure never invalidates
//! the locally generated project.

use std::process::Command;

use tracing::{debug, info, instrument};

use gomason_core::{
    application::{
        AppError,
        ports::{RepoOptions, RepositoryHost},
    },
    domain::config::Visibility,
    error::CoreResult,
};

/// RepositoryHost implementation backed by the GitHub CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct GhCli;

impl GhCli {
    pub fn new() -> Self {
        Self
    }

    /// Check that the user is authenticated with the GitHub CLI.
    fn validate_auth(&self) -> CoreResult<()> {
        let output = Command::new("gh")
            .args(["auth", "status"])
            .output()
            .map_err(|e| AppError::RepositoryCreation {
                reason: format!("gh CLI not available: {e}"),
            })?;
        if !output.status.success() {
            return Err(AppError::RepositoryCreation {
                reason: format!(
                    "not authenticated with GitHub CLI; run: gh auth login\n{}",
                    String::from_utf8_lossy(&output.stderr)
                ),
            }
            .into());
        }
        Ok(())
    }
}

impl RepositoryHost for GhCli {
    #[instrument(skip_all, fields(repo = %options.name))]
    fn create_repository(&self, options: &RepoOptions) -> CoreResult<()> {
        self.validate_auth()?;

        let visibility_flag = match options.visibility {
            Visibility::Public => "--public",
            // gh has no "internal" for user-owned repos; both map to private.
            Visibility::Internal | Visibility::Private => "--private",
        };

        let mut cmd = Command::new("gh");
        cmd.args(["repo", "create", options.name.as_str(), visibility_flag]);
        if !options.description.is_empty() {
            cmd.args(["--description", &options.description]);
        }
        cmd.arg("--source");
        cmd.arg(&options.source_dir);
        if options.push {
            cmd.arg("--push");
        }

        debug!(?options.topics, push = options.push, "Creating repository");
        let output = cmd.output().map_err(|e| AppError::RepositoryCreation {
            reason: format!("failed to run gh: {e}"),
        })?;
        if !output.status.success() {
            return Err(AppError::RepositoryCreation {
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        // Topics are attached after creation; a failure here is not worth
        // failing the whole integration for.
        for topic in &options.topics {
            let result = Command::new("gh")
                .args(["repo", "edit", options.name.as_str(), "--add-topic", topic.as_str()])
                .output();
            if let Ok(out) = result {
                if !out.status.success() {
                    debug!(topic, "failed to add topic");
                }
            }
        }

        info!("Repository created");
        Ok(())
    }
}
