//! Unified error handling for gomason core.
//!
//! Wraps domain and application errors into one type with user-actionable
//! suggestions and display categories for the CLI.

use thiserror::Error;

use crate::application::AppError;
use crate::domain::{DomainError, ErrorCategory};

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// Business-rule violations (bad answers, malformed configuration).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration and port failures.
    #[error("{0}")]
    Application(#[from] AppError),
}

impl CoreError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;
