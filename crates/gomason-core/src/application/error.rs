//! Application layer errors.
//!
//! These represent failures in orchestration and at the ports, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during generation orchestration.
#[derive(Debug, Error, Clone)]
pub enum AppError {
    /// The renderer could not expand a named template (unknown name, or
    /// expansion failure).
    #[error("rendering template '{template}' failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed. Aborts the remaining plan; files already
    /// written stay in place.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Target directory is already occupied.
    #[error("project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Remote repository creation failed. Non-fatal to the overall run;
    /// the CLI downgrades it to a warning.
    #[error("repository creation failed: {reason}")]
    RepositoryCreation { reason: String },
}

impl AppError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { template, .. } => vec![
                format!("Template '{template}' could not be rendered"),
                "This is likely a bug in gomason — please report it".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                format!("Or remove it first: rm -rf {}", path.display()),
            ],
            Self::RepositoryCreation { .. } => vec![
                "The local project was generated; only the remote step failed".into(),
                "Check `gh auth status` and push manually".into(),
            ],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::RepositoryCreation { .. } => ErrorCategory::Internal,
        }
    }
}
