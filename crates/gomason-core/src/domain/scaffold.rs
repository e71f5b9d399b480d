//! The scaffold tree planner.
//!
//! [`build_directory_tree`] turns a [`ProjectConfig`] into the full ordered
//! materialization plan: pure planning, no filesystem interaction, total over
//! any valid configuration. Layers append in a fixed order and never remove
//! or reorder earlier entries; duplicate directory declarations (the
//! `.github` parent shows up in several layers) are tolerated because the
//! writer treats directory creation as idempotent.
//!
//! The LICENSE file is intentionally absent from the plan; see
//! [`crate::domain::license`].

use crate::domain::common::RelativePath;
use crate::domain::config::{ProjectConfig, ProjectType};

/// Reference year stamped into rendered file headers.
const TEMPLATE_YEAR: i32 = 2026;

/// Reserved prefix for command entry points. Libraries must never plan
/// anything under it.
pub const CMD_PREFIX: &str = "cmd/";

// ── Plan data ─────────────────────────────────────────────────────────────────

/// Shared data bag handed to the renderer for every templated file.
#[derive(Debug, Clone)]
pub struct RenderData {
    pub config: ProjectConfig,
    pub year: i32,
    /// Lowercase project name with hyphens stripped, a legal Go package name.
    pub lib_name: String,
    pub service_name: String,
}

impl RenderData {
    pub fn new(config: &ProjectConfig) -> Self {
        let lib_name = config.name.to_lowercase().replace('-', "");
        Self {
            config: config.clone(),
            year: TEMPLATE_YEAR,
            lib_name,
            service_name: config.name.clone(),
        }
    }
}

/// Directory or file discriminator for a planned entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// A single file or directory to create, relative to the project root.
///
/// `template` is `None` for directories and for explicitly-empty placeholder
/// files; otherwise it names the renderer template for the content.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub path: RelativePath,
    pub kind: EntryKind,
    pub template: Option<&'static str>,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// The ordered materialization plan plus the data bag its templates share.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub entries: Vec<DirEntry>,
    pub data: RenderData,
}

impl ScaffoldPlan {
    /// Iterate the file entries only.
    pub fn files(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|e| !e.is_dir())
    }

    /// `true` if any file entry sits at or under `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.files()
            .any(|e| e.path.as_path().starts_with(prefix.trim_end_matches('/')))
    }

    /// `true` if an entry with exactly this path is planned.
    pub fn contains(&self, path: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.path.as_path() == std::path::Path::new(path))
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Compute the ordered list of directories and files for a configuration.
///
/// Deterministic, allocation-only, safe to call concurrently on distinct
/// configurations. No unnecessary empty directories.
pub fn build_directory_tree(config: &ProjectConfig) -> ScaffoldPlan {
    let data = RenderData::new(config);
    let mut entries = Vec::new();

    // Files common to all project types.
    push_file(&mut entries, "README.md", "readme");
    push_file(&mut entries, "go.mod", "gomod");
    push_file(&mut entries, ".gitignore", "gitignore");

    // LICENSE is written programmatically via license::generate_license().

    if config.is_public() {
        push_file(&mut entries, "CONTRIBUTING.md", "contributing");
        push_file(&mut entries, "CODE_OF_CONDUCT.md", "coc");
    }

    if config.is_secure() {
        push_file(&mut entries, "SECURITY.md", "security");
    }

    if config.features.linting || config.features.static_analysis {
        push_file(&mut entries, ".golangci.yml", "golangci");
    }

    if config.features.github_actions {
        push_dir(&mut entries, ".github/workflows");
        push_file(&mut entries, ".github/workflows/ci.yml", "workflow");
    }

    if config.github.enabled {
        push_dir(&mut entries, ".github");
        push_file(&mut entries, ".github/PULL_REQUEST_TEMPLATE.md", "pr_template");
    }

    if config.features.dependabot {
        push_dir(&mut entries, ".github");
        push_file(&mut entries, ".github/dependabot.yml", "dependabot");
    }

    // Project-type specific structures.
    match config.project_type {
        ProjectType::Library => plan_library(config, &data, &mut entries),
        ProjectType::Cli => plan_cli(&mut entries),
        ProjectType::Api => plan_api(&mut entries),
        ProjectType::Microservice => plan_microservice(&mut entries),
        ProjectType::Security => plan_security_tool(&data, &mut entries),
        ProjectType::Worker => plan_worker(&mut entries),
    }

    // Container files go last, unconditionally after everything else.
    if config.features.docker {
        push_file(&mut entries, "Dockerfile", "dockerfile");
        push_file(&mut entries, ".dockerignore", "dockerignore");
    }

    ScaffoldPlan { entries, data }
}

fn push_file(entries: &mut Vec<DirEntry>, path: impl Into<std::path::PathBuf>, template: &'static str) {
    entries.push(DirEntry {
        path: RelativePath::new(path),
        kind: EntryKind::File,
        template: Some(template),
    });
}

fn push_dir(entries: &mut Vec<DirEntry>, path: &str) {
    entries.push(DirEntry {
        path: RelativePath::new(path),
        kind: EntryKind::Directory,
        template: None,
    });
}

fn plan_library(config: &ProjectConfig, data: &RenderData, entries: &mut Vec<DirEntry>) {
    let pkg = format!("pkg/{}", data.lib_name);
    push_file(entries, format!("{pkg}/{}.go", data.lib_name), "lib");
    push_file(entries, format!("{pkg}/{}_test.go", data.lib_name), "lib_test");
    if config.features.tests {
        push_file(entries, "Makefile", "makefile");
    }
}

fn plan_cli(entries: &mut Vec<DirEntry>) {
    push_file(entries, "main.go", "main_cli");
    push_file(entries, "cmd/root.go", "cmd_root");
    push_file(entries, "internal/app/app.go", "internal_app");
    push_file(entries, "internal/config/config.go", "internal_config");
    push_file(entries, "Makefile", "makefile");
}

fn plan_api(entries: &mut Vec<DirEntry>) {
    push_file(entries, "cmd/server/main.go", "main_api");
    push_file(entries, "internal/handler/handler.go", "handler");
    push_file(entries, "internal/service/service.go", "service");
    push_file(entries, "internal/repository/repository.go", "repository");
    push_file(entries, "internal/middleware/middleware.go", "middleware");
    push_file(entries, "internal/config/config.go", "internal_config");
    push_file(entries, "api/openapi.yaml", "openapi");
    push_file(entries, "Makefile", "makefile");
}

fn plan_microservice(entries: &mut Vec<DirEntry>) {
    push_file(entries, "cmd/service/main.go", "main_api");
    push_file(entries, "internal/handler/handler.go", "handler");
    push_file(entries, "internal/service/service.go", "service");
    push_file(entries, "internal/repository/repository.go", "repository");
    push_file(entries, "internal/middleware/middleware.go", "middleware");
    push_file(entries, "internal/config/config.go", "internal_config");
    push_file(entries, "internal/worker/worker.go", "worker");
    push_file(entries, "Makefile", "makefile");
}

fn plan_security_tool(data: &RenderData, entries: &mut Vec<DirEntry>) {
    push_file(entries, "main.go", "main_cli");
    push_file(entries, "cmd/root.go", "cmd_root");
    push_file(entries, "internal/scanner/scanner.go", "scanner");
    push_file(entries, "internal/report/report.go", "report");
    push_file(entries, "internal/config/config.go", "internal_config");
    push_file(
        entries,
        format!("pkg/{0}/{0}.go", data.lib_name),
        "lib",
    );
    push_file(entries, "Makefile", "makefile");
}

fn plan_worker(entries: &mut Vec<DirEntry>) {
    push_file(entries, "cmd/worker/main.go", "main_api");
    push_file(entries, "internal/worker/worker.go", "worker");
    push_file(entries, "internal/config/config.go", "internal_config");
    push_file(entries, "Makefile", "makefile");
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::{
        Criticality, Features, GitHubConfig, LicenseKind, Visibility,
    };

    fn config(project_type: ProjectType) -> ProjectConfig {
        ProjectConfig {
            name: "myapp".into(),
            module_path: "github.com/user/myapp".into(),
            description: String::new(),
            author: "Test Author".into(),
            project_type,
            visibility: Visibility::Internal,
            license: LicenseKind::Proprietary,
            criticality: Criticality::Experimental,
            features: Features::default(),
            github: GitHubConfig::default(),
        }
    }

    #[test]
    fn common_files_are_always_first() {
        let plan = build_directory_tree(&config(ProjectType::Cli));
        let first: Vec<_> = plan.entries[..3]
            .iter()
            .map(|e| e.path.to_string())
            .collect();
        assert_eq!(first, ["README.md", "go.mod", ".gitignore"]);
    }

    #[test]
    fn library_has_no_command_entry_point() {
        let plan = build_directory_tree(&config(ProjectType::Library));
        assert!(plan.contains("pkg/myapp/myapp.go"));
        assert!(plan.contains("pkg/myapp/myapp_test.go"));
        assert!(!plan.contains_prefix(CMD_PREFIX));
    }

    #[test]
    fn lib_name_strips_hyphens() {
        let mut cfg = config(ProjectType::Library);
        cfg.name = "my-lib".into();
        let plan = build_directory_tree(&cfg);
        assert_eq!(plan.data.lib_name, "mylib");
        assert!(plan.contains("pkg/mylib/mylib.go"));
    }

    #[test]
    fn cli_structure() {
        let plan = build_directory_tree(&config(ProjectType::Cli));
        for path in [
            "main.go",
            "cmd/root.go",
            "internal/app/app.go",
            "internal/config/config.go",
        ] {
            assert!(plan.contains(path), "missing {path}");
        }
    }

    #[test]
    fn api_structure() {
        let plan = build_directory_tree(&config(ProjectType::Api));
        for path in [
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
    fn security_tool_structure() {
        let plan = build_directory_tree(&config(ProjectType::Security));
        assert!(plan.contains("internal/scanner/scanner.go"));
        assert!(plan.contains("internal/report/report.go"));
        assert!(plan.contains("pkg/myapp/myapp.go"));
    }

    #[test]
    fn worker_structure() {
        let plan = build_directory_tree(&config(ProjectType::Worker));
        assert!(plan.contains("cmd/worker/main.go"));
        assert!(plan.contains("internal/worker/worker.go"));
    }

    #[test]
    fn docker_files_are_last() {
        let mut cfg = config(ProjectType::Cli);
        cfg.features.docker = true;
        let plan = build_directory_tree(&cfg);
        let n = plan.entries.len();
        assert_eq!(plan.entries[n - 2].path.to_string(), "Dockerfile");
        assert_eq!(plan.entries[n - 1].path.to_string(), ".dockerignore");
    }

    #[test]
    fn public_project_gets_community_files() {
        let mut cfg = config(ProjectType::Library);
        cfg.visibility = Visibility::Public;
        let plan = build_directory_tree(&cfg);
        assert!(plan.contains("CONTRIBUTING.md"));
        assert!(plan.contains("CODE_OF_CONDUCT.md"));
    }

    #[test]
    fn secure_project_gets_security_policy() {
        let mut cfg = config(ProjectType::Api);
        cfg.criticality = Criticality::Production;
        let plan = build_directory_tree(&cfg);
        assert!(plan.contains("SECURITY.md"));
    }

    #[test]
    fn linting_or_static_analysis_gets_lint_config() {
        let mut cfg = config(ProjectType::Cli);
        cfg.features.linting = true;
        assert!(build_directory_tree(&cfg).contains(".golangci.yml"));

        let mut cfg = config(ProjectType::Cli);
        cfg.features.static_analysis = true;
        assert!(build_directory_tree(&cfg).contains(".golangci.yml"));
    }

    #[test]
    fn github_actions_gets_workflow() {
        let mut cfg = config(ProjectType::Api);
        cfg.features.github_actions = true;
        let plan = build_directory_tree(&cfg);
        assert!(plan.contains(".github/workflows"));
        assert!(plan.contains(".github/workflows/ci.yml"));
    }

    #[test]
    fn repo_integration_gets_pr_template() {
        let mut cfg = config(ProjectType::Cli);
        cfg.github.enabled = true;
        let plan = build_directory_tree(&cfg);
        assert!(plan.contains(".github"));
        assert!(plan.contains(".github/PULL_REQUEST_TEMPLATE.md"));
    }

    #[test]
    fn dependabot_gets_config_and_tolerated_duplicate_dir() {
        let mut cfg = config(ProjectType::Cli);
        cfg.features.github_actions = true;
        cfg.features.dependabot = true;
        cfg.github.enabled = true;
        let plan = build_directory_tree(&cfg);
        assert!(plan.contains(".github/dependabot.yml"));
        // .github is declared by several layers; duplicates are fine.
        let dir_count = plan
            .entries
            .iter()
            .filter(|e| e.is_dir() && e.path.to_string() == ".github")
            .count();
        assert!(dir_count >= 2);
    }

    #[test]
    fn every_file_entry_names_a_template() {
        let mut cfg = config(ProjectType::Microservice);
        cfg.visibility = Visibility::Public;
        cfg.criticality = Criticality::Production;
        cfg.features = Features {
            docker: true,
            github_actions: true,
            linting: true,
            static_analysis: true,
            dependabot: true,
            tests: true,
            sast: true,
        };
        cfg.github.enabled = true;
        let plan = build_directory_tree(&cfg);
        assert!(plan.files().all(|e| e.template.is_some()));
    }

    #[test]
    fn library_makefile_only_with_tests() {
        let mut cfg = config(ProjectType::Library);
        cfg.features.tests = false;
        assert!(!build_directory_tree(&cfg).contains("Makefile"));
        cfg.features.tests = true;
        assert!(build_directory_tree(&cfg).contains("Makefile"));
    }
}
