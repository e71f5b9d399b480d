//! Centralized answer validation.
//!
//! Every predicate takes one trimmed string and fails with a descriptive
//! [`DomainError`]; success is silent. Sanitization is separate from
//! validation and runs only after validation has passed.

use crate::domain::error::DomainError;

/// Maximum total length of a project name: one leading letter plus up to 63
/// further letters, digits, hyphens, or underscores.
const MAX_NAME_LEN: usize = 64;

/// Maximum description length, counted in characters.
const MAX_DESCRIPTION_LEN: usize = 256;

/// Check that a name is safe for directory and module use.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidProjectName(
            "project name cannot be empty".into(),
        ));
    }
    let mut chars = name.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !first_ok || !rest_ok || name.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidProjectName(format!(
            "must start with a letter and contain only letters, digits, hyphens, \
             or underscores (max {MAX_NAME_LEN} chars)"
        )));
    }
    Ok(())
}

/// Check that a Go module path is valid.
pub fn validate_module_path(path: &str) -> Result<(), DomainError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(DomainError::InvalidModulePath(
            "module path cannot be empty".into(),
        ));
    }
    if path.contains("..") {
        return Err(DomainError::InvalidModulePath(
            "module path must not contain '..'".into(),
        ));
    }
    let first_ok = path
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric());
    let charset_ok = path
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '~'));
    if !first_ok || !charset_ok {
        return Err(DomainError::InvalidModulePath(
            "module path contains invalid characters".into(),
        ));
    }
    // Must have at least one slash for a proper module path
    // (e.g. github.com/user/project).
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 2 {
        return Err(DomainError::InvalidModulePath(
            "module path should be in the form <host>/<user>/<project> \
             (e.g. github.com/user/myapp)"
                .into(),
        ));
    }
    if segments.iter().any(|s| s.is_empty()) {
        return Err(DomainError::InvalidModulePath(
            "module path contains empty segment".into(),
        ));
    }
    Ok(())
}

/// Check the project description length. Empty is allowed.
pub fn validate_description(desc: &str) -> Result<(), DomainError> {
    if desc.trim().chars().count() > MAX_DESCRIPTION_LEN {
        return Err(DomainError::InvalidDescription(format!(
            "description must be {MAX_DESCRIPTION_LEN} characters or fewer"
        )));
    }
    Ok(())
}

/// Check the author / maintainer field.
pub fn validate_author(author: &str) -> Result<(), DomainError> {
    let author = author.trim();
    if author.is_empty() {
        return Err(DomainError::InvalidAuthor("author cannot be empty".into()));
    }
    if author.chars().any(char::is_control) {
        return Err(DomainError::InvalidAuthor(
            "author contains non-printable characters".into(),
        ));
    }
    Ok(())
}

/// Return a safe version of the project name: trimmed, lowercased, spaces
/// replaced with hyphens. Applied after validation, before storage.
pub fn sanitize_project_name(name: &str) -> String {
    name.trim().replace(' ', "-").to_lowercase()
}

// ── tests ─────────────────────────────────────────────────────────────────────
