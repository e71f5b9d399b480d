//! Project meta files: readme, manifest, ignore files, community documents,
//! build files.

use gomason_core::domain::scaffold::RenderData;

pub fn readme(data: &RenderData) -> String {
    let config = &data.config;
    let mut out = format!("# {}\n\n", config.name);
    if !config.description.is_empty() {
        out.push_str(&config.description);
        out.push_str("\n\n");
    }
    out.push_str(&format!(
        "## Installation\n\n```sh\ngo get {}\n```\n\n## Development\n\n```sh\nmake build\nmake test\n```\n",
        config.module_path
    ));
    if !config.author.is_empty() {
        out.push_str(&format!("\n## Maintainer\n\n{}\n", config.author));
    }
    out
}

pub fn gomod(data: &RenderData) -> String {
    format!("module {}\n\ngo 1.22\n", data.config.module_path)
}

pub fn gitignore(data: &RenderData) -> String {
    let mut out = String::from(
        "# Binaries\n\
         bin/\n\
         dist/\n\
         *.exe\n\
         *.test\n\n\
         # Coverage\n\
         *.out\n\
         coverage.html\n\n\
         # Editor\n\
         .idea/\n\
         .vscode/\n\
         *.swp\n\n\
         # Environment\n\
         .env\n",
    );
    out.push_str(&format!("\n# Build artifact\n/{}\n", data.service_name));
    out
}

pub fn contributing(data: &RenderData) -> String {
    format!(
        "# Contributing to {name}\n\n\
         Thanks for taking the time to contribute!\n\n\
         ## Workflow\n\n\
         1. Fork the repository and create a feature branch.\n\
         2. Make your change, with tests.\n\
         3. Run `make test` and `make lint` locally.\n\
         4. Open a pull request against `main`.\n\n\
         ## Commit messages\n\n\
         Use short, imperative subjects (\"add retry to fetcher\"), with detail\n\
         in the body where the change is not self-explanatory.\n\n\
         ## Reporting issues\n\n\
         Open a GitHub issue with reproduction steps and the output of\n\
         `go version`.\n",
        name = data.config.name
    )
}

pub fn code_of_conduct(data: &RenderData) -> String {
    format!(
        "# Code of Conduct\n\n\
         This project follows the Contributor Covenant, version 2.1.\n\n\
         We as members, contributors, and leaders pledge to make participation\n\
         in our community a harassment-free experience for everyone.\n\n\
         Instances of abusive, harassing, or otherwise unacceptable behavior\n\
         may be reported to the maintainer: {author}.\n\n\
         Full text: https://www.contributor-covenant.org/version/2/1/code_of_conduct/\n",
        author = data.config.author
    )
}

pub fn makefile(data: &RenderData) -> String {
    let name = &data.service_name;
    let mut out = format!(
        ".PHONY: build test lint clean\n\n\
         build:\n\
         \tgo build -o bin/{name} ./...\n\n\
         test:\n\
         \tgo test -race -cover ./...\n\n"
    );
    if data.config.features.linting || data.config.features.static_analysis {
        out.push_str("lint:\n\tgolangci-lint run ./...\n\n");
    } else {
        out.push_str("lint:\n\tgo vet ./...\n\n");
    }
    out.push_str("clean:\n\trm -rf bin/\n");
    out
}

pub fn openapi(data: &RenderData) -> String {
    let config = &data.config;
    format!(
        "openapi: 3.0.3\n\
         info:\n\
         \x20 title: {name}\n\
         \x20 description: {description}\n\
         \x20 version: 0.1.0\n\
         paths:\n\
         \x20 /healthz:\n\
         \x20   get:\n\
         \x20     summary: Liveness probe\n\
         \x20     responses:\n\
         \x20       \"200\":\n\
         \x20         description: Service is healthy\n",
        name = config.name,
        description = if config.description.is_empty() {
            "TODO"
        } else {
            config.description.as_str()
        },
    )
}

pub fn dockerfile(data: &RenderData) -> String {
    let name = &data.service_name;
    format!(
        "FROM golang:1.22-alpine AS build\n\
         WORKDIR /src\n\
         COPY go.mod ./\n\
         RUN go mod download\n\
         COPY . .\n\
         RUN CGO_ENABLED=0 go build -o /out/{name} ./...\n\n\
         FROM gcr.io/distroless/static-debian12\n\
         COPY --from=build /out/{name} /{name}\n\
         USER nonroot:nonroot\n\
         ENTRYPOINT [\"/{name}\"]\n"
    )
}

pub fn dockerignore() -> String {
    String::from(
        ".git\n\
         bin/\n\
         dist/\n\
         *.out\n\
         .env\n\
         Dockerfile\n\
         .dockerignore\n",
    )
}
