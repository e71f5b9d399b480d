use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (states are retried by re-prompting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Answer validation (recoverable: re-prompt the same step)
    // ========================================================================
    #[error("invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("invalid module path: {0}")]
    InvalidModulePath(String),

    #[error("invalid description: {0}")]
    InvalidDescription(String),

    #[error("invalid author: {0}")]
    InvalidAuthor(String),

    /// The front end handed us a selection index outside the step's choice list.
    #[error("invalid selection for step '{step}': index {index} out of range")]
    SelectionOutOfRange { step: &'static str, index: usize },

    /// The front end supplied the wrong input kind for the current step
    /// (e.g. a choice index on a text step).
    #[error("step '{step}' does not accept this input kind")]
    InputKindMismatch { step: &'static str },

    // ========================================================================
    // Configuration (fatal to the load operation)
    // ========================================================================
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown feature key: {0}")]
    UnknownFeature(String),

    #[error("unknown {field}: {value}")]
    UnknownEnumValue { field: &'static str, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName(msg) => vec![
                format!("Details: {msg}"),
                "Start with a letter; use letters, digits, hyphens, or underscores".into(),
                "Examples: myapp, my-app, my_app".into(),
            ],
            Self::InvalidModulePath(msg) => vec![
                format!("Details: {msg}"),
                "Use the form <host>/<user>/<project>".into(),
                "Example: github.com/user/myapp".into(),
            ],
            Self::InvalidConfig(msg) => vec![
                format!("Details: {msg}"),
                "Check your gomason.yml against a freshly exported one".into(),
            ],
            Self::UnknownFeature(key) => vec![
                format!("'{key}' is not a known feature flag"),
                "Known flags: docker, github_actions, linting, static_analysis, dependabot, tests, sast".into(),
            ],
            Self::UnknownEnumValue { field, .. } => vec![
                format!("Check the '{field}' value in your configuration"),
            ],
            _ => vec!["Correct the answer and try again".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName(_)
            | Self::InvalidModulePath(_)
            | Self::InvalidDescription(_)
            | Self::InvalidAuthor(_)
            | Self::SelectionOutOfRange { .. }
            | Self::InputKindMismatch { .. } => ErrorCategory::Validation,
            Self::InvalidConfig(_) | Self::UnknownFeature(_) | Self::UnknownEnumValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
