//! Gomason Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gomason
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          gomason-cli (CLI)              │
//! │   (wizard front end, headless mode)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Renderer, Filesystem, RepositoryHost)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    gomason-adapters (Infrastructure)    │
//! │ (BuiltinRenderer, LocalFilesystem, gh)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (WizardState, ProjectConfig, Scaffold)  │
//! │         No I/O, No Rendering            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gomason_core::{
//!     application::GenerateService,
//!     domain::wizard::{self, StepInput, WizardState},
//! };
//!
//! // 1. Drive the wizard (normally done by the interactive front end)
//! let mut state = WizardState::new();
//! state.apply_input(StepInput::Text("my-service"))?;
//! state.advance();
//! // ... remaining steps ...
//!
//! // 2. Derive the configuration and generate
//! let config = wizard::build_config(&state);
//! let service = GenerateService::new(renderer, filesystem);
//! service.generate(&config, std::path::Path::new("./my-service"))?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GeneratedProject,
        ports::{Filesystem, RepoOptions, RepositoryHost, TemplateRenderer},
    };
    pub use crate::domain::{
        Criticality, DirEntry, Features, GitHubConfig, LicenseKind, ProjectConfig, ProjectType,
        RenderData, Visibility,
        wizard::{Step, StepInput, WizardState},
    };
    pub use crate::error::{CoreError, CoreResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
