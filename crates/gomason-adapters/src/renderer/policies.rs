//! Security policy, lint configuration, CI workflow, and repository
//! housekeeping files.

use std::fmt::Write as _;

use gomason_core::domain::scaffold::RenderData;

/// SECURITY.md content. The maintainer contact comes from the configuration.
pub fn security_md(data: &RenderData) -> String {
    format!(
        "# Security Policy\n\n\
         ## Reporting a Vulnerability\n\n\
         **Do not open a public GitHub issue.** Contact the maintainer at\n\
         **{author}** with:\n\n\
         - Description\n\
         - Steps to reproduce\n\
         - Impact assessment\n\n\
         You will receive acknowledgment within 48 hours.\n\n\
         ## Practices\n\n\
         - Dependabot for dependency updates\n\
         - Static analysis: gosec, staticcheck\n\
         - govulncheck on every CI run\n\
         - Race condition detection: go test -race\n",
        author = data.config.author
    )
}

/// `.golangci.yml` content. `gosec` joins the linter set when SAST is on.
pub fn golangci_config(data: &RenderData) -> String {
    let mut out = String::from("run:\n  timeout: 5m\n  go: \"1.22\"\n\n");
    out.push_str("linters:\n  enable:\n");

    let base = [
        "errcheck",
        "gosimple",
        "govet",
        "ineffassign",
        "staticcheck",
        "unused",
        "gofmt",
        "misspell",
        "revive",
    ];
    for linter in base {
        let _ = writeln!(out, "    - {linter}");
    }
    if data.config.features.sast {
        out.push_str("    - gosec\n");
    }
    out
}

/// GitHub Actions CI workflow. Lint and vulnerability jobs appear only when
/// the matching features are on.
pub fn ci_workflow(data: &RenderData) -> String {
    let features = &data.config.features;
    let mut out = format!(
        "name: CI\n\n\
         on:\n\
         \x20 push:\n\
         \x20   branches: [main]\n\
         \x20 pull_request:\n\n\
         jobs:\n\
         \x20 test:\n\
         \x20   runs-on: ubuntu-latest\n\
         \x20   steps:\n\
         \x20     - uses: actions/checkout@v4\n\
         \x20     - uses: actions/setup-go@v5\n\
         \x20       with:\n\
         \x20         go-version: \"1.22\"\n\
         \x20     - name: Test {name}\n\
         \x20       run: go test -race -cover ./...\n",
        name = data.config.name
    );
    if features.linting || features.static_analysis {
        out.push_str(
            "\n\x20 lint:\n\
             \x20   runs-on: ubuntu-latest\n\
             \x20   steps:\n\
             \x20     - uses: actions/checkout@v4\n\
             \x20     - uses: golangci/golangci-lint-action@v6\n",
        );
    }
    if features.sast {
        out.push_str(
            "\n\x20 vulncheck:\n\
             \x20   runs-on: ubuntu-latest\n\
             \x20   steps:\n\
             \x20     - uses: actions/checkout@v4\n\
             \x20     - uses: actions/setup-go@v5\n\
             \x20       with:\n\
             \x20         go-version: \"1.22\"\n\
             \x20     - name: govulncheck\n\
             \x20       run: go run golang.org/x/vuln/cmd/govulncheck@latest ./...\n",
        );
    }
    out
}

/// `dependabot.yml` for Go modules and GitHub Actions, weekly cadence.
pub fn dependabot_config() -> String {
    String::from(
        "version: 2\n\
         updates:\n\
         \x20 - package-ecosystem: \"gomod\"\n\
         \x20   directory: \"/\"\n\
         \x20   schedule:\n\
         \x20     interval: \"weekly\"\n\
         \x20 - package-ecosystem: \"github-actions\"\n\
         \x20   directory: \"/\"\n\
         \x20   schedule:\n\
         \x20     interval: \"weekly\"\n",
    )
}

/// Pull request template for repositories created through the integration.
pub fn pull_request_template() -> String {
    String::from(
        "## Summary\n\n\
         <!-- What does this change do, and why? -->\n\n\
         ## Checklist\n\n\
         - [ ] Tests added or updated\n\
         - [ ] `make lint` passes\n\
         - [ ] Documentation updated where needed\n",
    )
}
