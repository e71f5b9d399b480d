//! Builtin template renderer.
//!
//! Implements the core `TemplateRenderer` port with a fixed name→generator
//! table. The planner and this table must agree on the template set; asking
//! for a name outside the table is an error, not a silent empty file.

mod go_sources;
mod meta;
mod policies;

use gomason_core::{
    application::{AppError, ports::TemplateRenderer},
    domain::scaffold::RenderData,
    error::CoreResult,
};
use tracing::instrument;

/// Renderer over the template set that ships with gomason.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRenderer;

impl BuiltinRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for BuiltinRenderer {
    #[instrument(skip(data))]
    fn render(&self, name: &str, data: &RenderData) -> CoreResult<String> {
        let content = match name {
            // Project meta files
            "readme" => meta::readme(data),
            "gomod" => meta::gomod(data),
            "gitignore" => meta::gitignore(data),
            "contributing" => meta::contributing(data),
            "coc" => meta::code_of_conduct(data),
            "makefile" => meta::makefile(data),
            "openapi" => meta::openapi(data),
            "dockerfile" => meta::dockerfile(data),
            "dockerignore" => meta::dockerignore(),

            // Policy and CI files
            "security" => policies::security_md(data),
            "golangci" => policies::golangci_config(data),
            "workflow" => policies::ci_workflow(data),
            "dependabot" => policies::dependabot_config(),
            "pr_template" => policies::pull_request_template(),

            // Go source files
            "main_cli" => go_sources::main_cli(data),
            "cmd_root" => go_sources::cmd_root(data),
            "internal_app" => go_sources::internal_app(data),
            "internal_config" => go_sources::internal_config(data),
            "main_api" => go_sources::main_api(data),
            "handler" => go_sources::handler(data),
            "service" => go_sources::service(data),
            "repository" => go_sources::repository(data),
            "middleware" => go_sources::middleware(data),
            "worker" => go_sources::worker(data),
            "scanner" => go_sources::scanner(data),
            "report" => go_sources::report(data),
            "lib" => go_sources::library(data),
            "lib_test" => go_sources::library_test(data),

            other => {
                return Err(AppError::RenderingFailed {
                    template: other.to_string(),
                    reason: "unknown template name".into(),
                }
                .into());
            }
        };
        Ok(content)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use gomason_core::domain::config::{
        Criticality, Features, GitHubConfig, LicenseKind, ProjectConfig, ProjectType, Visibility,
    };
    use gomason_core::domain::scaffold;

    fn data() -> RenderData {
        let config = ProjectConfig {
            name: "testapp".into(),
            module_path: "github.com/user/testapp".into(),
            description: "A test application".into(),
            author: "Test Author".into(),
            project_type: ProjectType::Api,
            visibility: Visibility::Public,
            license: LicenseKind::Mit,
            criticality: Criticality::Production,
            features: Features {
                docker: true,
                github_actions: true,
                sast: true,
                ..Features::default()
            },
            github: GitHubConfig::default(),
        };
        RenderData::new(&config)
    }

    #[test]
    fn renders_every_template_the_planner_can_name() {
        let renderer = BuiltinRenderer::new();
        let data = data();
        let names = [
            "readme", "gomod", "gitignore", "contributing", "coc", "makefile", "openapi",
            "dockerfile", "dockerignore", "security", "golangci", "workflow", "dependabot",
            "pr_template", "main_cli", "cmd_root", "internal_app", "internal_config", "main_api",
            "handler", "service", "repository", "middleware", "worker", "scanner", "report",
            "lib", "lib_test",
        ];
        for name in names {
            let out = renderer.render(name, &data).unwrap();
            assert!(!out.is_empty(), "{name} rendered empty");
        }
    }

    #[test]
    fn planner_and_renderer_agree_on_the_template_set() {
        // Every template named by any plan must render.
        let renderer = BuiltinRenderer::new();
        let base = data().config;
        for project_type in ProjectType::all() {
            let mut config = base.clone();
            config.project_type = project_type;
            config.github.enabled = true;
            config.features.dependabot = true;
            config.features.linting = true;
            let plan = scaffold::build_directory_tree(&config);
            for entry in plan.files() {
                let template = entry.template.expect("planned files carry templates");
                assert!(
                    renderer.render(template, &plan.data).is_ok(),
                    "template '{template}' failed for {project_type}"
                );
            }
        }
    }

    #[test]
    fn unknown_template_is_an_error() {
        let err = BuiltinRenderer::new().render("no_such", &data()).unwrap_err();
        assert!(err.to_string().contains("no_such"));
    }

    #[test]
    fn readme_interpolates_name_and_description() {
        let out = BuiltinRenderer::new().render("readme", &data()).unwrap();
        assert!(out.contains("testapp"));
        assert!(out.contains("A test application"));
    }

    #[test]
    fn gomod_declares_the_module_path() {
        let out = BuiltinRenderer::new().render("gomod", &data()).unwrap();
        assert!(out.starts_with("module github.com/user/testapp\n"));
    }

    #[test]
    fn golangci_includes_gosec_only_with_sast() {
        let renderer = BuiltinRenderer::new();
        let mut data = data();
        assert!(renderer.render("golangci", &data).unwrap().contains("gosec"));
        data.config.features.sast = false;
        assert!(!renderer.render("golangci", &data).unwrap().contains("gosec"));
    }

    #[test]
    fn workflow_adds_vulncheck_only_with_sast() {
        let renderer = BuiltinRenderer::new();
        let mut data = data();
        assert!(
            renderer
                .render("workflow", &data)
                .unwrap()
                .contains("govulncheck")
        );
        data.config.features.sast = false;
        assert!(
            !renderer
                .render("workflow", &data)
                .unwrap()
                .contains("govulncheck")
        );
    }

    #[test]
    fn security_policy_names_the_maintainer() {
        let out = BuiltinRenderer::new().render("security", &data()).unwrap();
        assert!(out.contains("Test Author"));
    }

    #[test]
    fn library_source_uses_the_stripped_package_name() {
        let out = BuiltinRenderer::new().render("lib", &data()).unwrap();
        assert!(out.starts_with("// Package testapp"));
    }
}
