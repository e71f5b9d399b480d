//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gomason-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::config::{ProjectConfig, Visibility};
use crate::domain::scaffold::RenderData;
use crate::error::CoreResult;

/// Port for template rendering.
///
/// The planner names templates; an implementation of this trait owns their
/// storage and format. Rendering an unknown name is an error; the planner
/// and renderer must agree on the template set.
///
/// Implemented by:
/// - `gomason_adapters::renderer::BuiltinRenderer` (production)
pub trait TemplateRenderer: Send + Sync {
    /// Expand the named template against the plan's shared data bag.
    fn render(&self, name: &str, data: &RenderData) -> CoreResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gomason_adapters::filesystem::LocalFilesystem` (production)
/// - `gomason_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Directory creation must be idempotent: the planner re-declares shared
/// parent directories and the writer must absorb that.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for remote repository creation.
///
/// Invoked once per run, after local generation succeeded. Implementations
/// must not touch the generated files except to push them.
pub trait RepositoryHost: Send + Sync {
    fn create_repository(&self, options: &RepoOptions) -> CoreResult<()>;
}

/// Derived options for the repository-integration collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoOptions {
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    pub topics: Vec<String>,
    pub push: bool,
    pub source_dir: PathBuf,
}

impl RepoOptions {
    /// Build repository options from a configuration and the local output
    /// directory the repository should be created from.
    pub fn from_config(config: &ProjectConfig, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: config.name.clone(),
            description: config.description.clone(),
            visibility: config.visibility,
            topics: config.github.topics.clone(),
            push: config.github.push_on_init,
            source_dir: source_dir.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{
        Criticality, Features, GitHubConfig, LicenseKind, ProjectType,
    };

    #[test]
    fn repo_options_mirror_config() {
        let config = ProjectConfig {
            name: "svc".into(),
            module_path: "github.com/org/svc".into(),
            description: "internal service".into(),
            author: "Org".into(),
            project_type: ProjectType::Api,
            visibility: Visibility::Internal,
            license: LicenseKind::Proprietary,
            criticality: Criticality::Production,
            features: Features::default(),
            github: GitHubConfig {
                enabled: true,
                topics: vec!["go".into()],
                push_on_init: true,
            },
        };
        let options = RepoOptions::from_config(&config, "./svc");
        assert_eq!(options.name, "svc");
        assert_eq!(options.visibility, Visibility::Internal);
        assert_eq!(options.topics, vec!["go".to_string()]);
        assert!(options.push);
        assert_eq!(options.source_dir, PathBuf::from("./svc"));
    }
}
