//! Generate Service - main application orchestrator.
//!
//! Coordinates the one-shot generation pipeline:
//! 1. Validate the configuration
//! 2. Apply the security pre-pass
//! 3. Plan the scaffold tree
//! 4. Materialize the plan through the ports
//! 5. Write LICENSE and export gomason.yml
//!
//! There is no rollback: the first write failure aborts the remaining plan
//! and whatever the filesystem already holds is left in place.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        AppError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{
        config::{LicenseKind, ProjectConfig},
        license, scaffold, security,
    },
    error::CoreResult,
};

/// Name of the exported configuration document inside the project.
pub const CONFIG_FILE_NAME: &str = "gomason.yml";

/// Result of a successful generation: the project root and every file that
/// was written, in write order.
#[derive(Debug, Clone)]
pub struct GeneratedProject {
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Main generation service.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Generate a project at `output_dir` from the given configuration.
    #[instrument(
        skip_all,
        fields(project = %config.name, output_dir = %output_dir.as_ref().display())
    )]
    pub fn generate(
        &self,
        config: &ProjectConfig,
        output_dir: impl AsRef<Path>,
    ) -> CoreResult<GeneratedProject> {
        let output_dir = output_dir.as_ref();

        config.validate()?;

        if self.filesystem.exists(output_dir) {
            return Err(AppError::ProjectExists {
                path: output_dir.to_path_buf(),
            }
            .into());
        }

        // Security pre-pass runs on a copy: the caller's configuration is a
        // value, and the planner itself never mutates anything.
        let mut config = config.clone();
        security::enforce(&mut config);

        info!(
            project_type = %config.project_type,
            criticality = %config.criticality,
            "Generation started"
        );

        let plan = scaffold::build_directory_tree(&config);
        debug!(entries = plan.entries.len(), "Scaffold tree planned");

        let mut written = Vec::new();
        self.filesystem.create_dir_all(output_dir)?;

        for entry in &plan.entries {
            let full_path = output_dir.join(entry.path.as_path());

            if entry.is_dir() {
                self.filesystem.create_dir_all(&full_path)?;
                continue;
            }

            // Parents are created idempotently for every file.
            if let Some(parent) = full_path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            match entry.template {
                None => self.filesystem.write_file(&full_path, "")?,
                Some(template) => {
                    let content = self.renderer.render(template, &plan.data)?;
                    self.filesystem.write_file(&full_path, &content)?;
                }
            }
            written.push(full_path);
        }

        // LICENSE bypasses the renderer; proprietary projects get none.
        if config.license != LicenseKind::Proprietary {
            let text = license::generate_license(config.license, &config.author, 0);
            let path = output_dir.join("LICENSE");
            self.filesystem.write_file(&path, &text)?;
            written.push(path);
        }

        // Export the configuration for headless replay.
        let yaml = config.to_yaml()?;
        let config_path = output_dir.join(CONFIG_FILE_NAME);
        self.filesystem.write_file(&config_path, &yaml)?;
        written.push(config_path);

        info!(files = written.len(), "Generation completed");

        Ok(GeneratedProject {
            root: output_dir.to_path_buf(),
            files: written,
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
