//! Project configuration: the canonical output of the wizard.
//!
//! # Design
//!
//! The enums here are pure value types — `Copy`, equality-by-value, no
//! identity. Their serde rename strings are load-bearing: they define the
//! `gomason.yml` wire format and must stay stable for headless replay.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add the wizard choice label in `wizard.rs`
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectType ───────────────────────────────────────────────────────────────

/// The type of Go project to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Cli,
    Api,
    Microservice,
    Library,
    Security,
    Worker,
}

impl ProjectType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Api => "api",
            Self::Microservice => "microservice",
            Self::Library => "library",
            Self::Security => "security",
            Self::Worker => "worker",
        }
    }

    /// All valid project type values, in display order.
    pub const fn all() -> [ProjectType; 6] {
        [
            Self::Cli,
            Self::Api,
            Self::Microservice,
            Self::Library,
            Self::Security,
            Self::Worker,
        ]
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cli" => Ok(Self::Cli),
            "api" => Ok(Self::Api),
            "microservice" => Ok(Self::Microservice),
            "library" | "lib" => Ok(Self::Library),
            "security" => Ok(Self::Security),
            "worker" => Ok(Self::Worker),
            other => Err(DomainError::UnknownEnumValue {
                field: "project type",
                value: other.to_string(),
            }),
        }
    }
}

// ── Visibility ────────────────────────────────────────────────────────────────

/// Who the generated repository is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Internal,
    Private,
}

impl Visibility {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "internal" => Ok(Self::Internal),
            "private" => Ok(Self::Private),
            other => Err(DomainError::UnknownEnumValue {
                field: "visibility",
                value: other.to_string(),
            }),
        }
    }
}

// ── LicenseKind ───────────────────────────────────────────────────────────────

/// The desired license for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseKind {
    #[serde(rename = "mit")]
    Mit,
    #[serde(rename = "gpl-3.0")]
    Gpl3,
    #[serde(rename = "apache-2.0")]
    Apache2,
    #[serde(rename = "proprietary")]
    Proprietary,
}

impl LicenseKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "mit",
            Self::Gpl3 => "gpl-3.0",
            Self::Apache2 => "apache-2.0",
            Self::Proprietary => "proprietary",
        }
    }

    pub const fn all() -> [LicenseKind; 4] {
        [Self::Mit, Self::Gpl3, Self::Apache2, Self::Proprietary]
    }
}

impl fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mit" => Ok(Self::Mit),
            "gpl-3.0" | "gpl3" | "gpl" => Ok(Self::Gpl3),
            "apache-2.0" | "apache2" | "apache" => Ok(Self::Apache2),
            "proprietary" => Ok(Self::Proprietary),
            other => Err(DomainError::UnknownEnumValue {
                field: "license",
                value: other.to_string(),
            }),
        }
    }
}

// ── Criticality ───────────────────────────────────────────────────────────────

/// Operational risk tier of the project, driving mandatory tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criticality {
    #[serde(rename = "experimental")]
    Experimental,
    #[serde(rename = "production")]
    Production,
    #[serde(rename = "security-critical")]
    SecurityCritical,
}

impl Criticality {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Experimental => "experimental",
            Self::Production => "production",
            Self::SecurityCritical => "security-critical",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criticality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "experimental" => Ok(Self::Experimental),
            "production" => Ok(Self::Production),
            "security-critical" | "security_critical" => Ok(Self::SecurityCritical),
            other => Err(DomainError::UnknownEnumValue {
                field: "criticality",
                value: other.to_string(),
            }),
        }
    }
}

// ── Features ──────────────────────────────────────────────────────────────────

/// Optional capabilities to enable in the generated project.
///
/// A fixed-field record rather than a map: the seven keys are the whole
/// universe, and by-key access rejects anything else instead of silently
/// admitting it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub docker: bool,
    pub github_actions: bool,
    pub linting: bool,
    pub static_analysis: bool,
    pub dependabot: bool,
    pub tests: bool,
    pub sast: bool,
}

impl Features {
    /// The seven known feature keys, in wizard toggle order.
    pub const KEYS: [&'static str; 7] = [
        "tests",
        "linting",
        "static_analysis",
        "github_actions",
        "docker",
        "dependabot",
        "sast",
    ];

    /// Set a flag by its wire key. Unknown keys are rejected.
    pub fn set(&mut self, key: &str, value: bool) -> Result<(), DomainError> {
        match key {
            "docker" => self.docker = value,
            "github_actions" => self.github_actions = value,
            "linting" => self.linting = value,
            "static_analysis" => self.static_analysis = value,
            "dependabot" => self.dependabot = value,
            "tests" => self.tests = value,
            "sast" => self.sast = value,
            other => return Err(DomainError::UnknownFeature(other.to_string())),
        }
        Ok(())
    }

    /// Read a flag by its wire key.
    pub fn get(&self, key: &str) -> Result<bool, DomainError> {
        Ok(match key {
            "docker" => self.docker,
            "github_actions" => self.github_actions,
            "linting" => self.linting,
            "static_analysis" => self.static_analysis,
            "dependabot" => self.dependabot,
            "tests" => self.tests,
            "sast" => self.sast,
            other => return Err(DomainError::UnknownFeature(other.to_string())),
        })
    }
}

// ── GitHubConfig ──────────────────────────────────────────────────────────────

/// Repository-creation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubConfig {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
    pub push_on_init: bool,
}

// ── ProjectConfig ─────────────────────────────────────────────────────────────

/// The central configuration object for a gomason project.
///
/// Derived once from a completed [`crate::domain::wizard::WizardState`], or
/// loaded from a persisted `gomason.yml`. The scaffold planner consumes it
/// and never mutates it; the security pre-pass
/// ([`crate::domain::security::enforce`]) runs before planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub module_path: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub visibility: Visibility,
    pub license: LicenseKind,
    pub criticality: Criticality,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub github: GitHubConfig,
}

impl ProjectConfig {
    /// `true` if the project is intended for public consumption.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// `true` if security tooling must be enforced.
    pub fn is_secure(&self) -> bool {
        matches!(
            self.criticality,
            Criticality::Production | Criticality::SecurityCritical
        )
    }

    /// Validate an externally supplied configuration.
    ///
    /// The enum fields are already narrowed by parsing; what remains is the
    /// name grammar and the module-path grammar, which serde cannot check.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidConfig("name must not be empty".into()));
        }
        crate::domain::validation::validate_project_name(&self.name)
            .map_err(|e| DomainError::InvalidConfig(e.to_string()))?;
        crate::domain::validation::validate_module_path(&self.module_path)
            .map_err(|e| DomainError::InvalidConfig(e.to_string()))?;
        Ok(())
    }

    /// Serialize to the flat `gomason.yml` document.
    pub fn to_yaml(&self) -> Result<String, DomainError> {
        serde_yaml::to_string(self)
            .map_err(|e| DomainError::InvalidConfig(format!("serializing configuration: {e}")))
    }

    /// Parse and validate a `gomason.yml` document.
    ///
    /// The secure-configuration invariant is re-imposed here so that a
    /// hand-edited file cannot smuggle a production config past the
    /// mandatory tooling rules.
    pub fn from_yaml(input: &str) -> Result<Self, DomainError> {
        let mut config: ProjectConfig = serde_yaml::from_str(input)
            .map_err(|e| DomainError::InvalidConfig(format!("parsing configuration: {e}")))?;
        config.validate()?;
        crate::domain::security::enforce(&mut config);
        Ok(config)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectConfig {
        ProjectConfig {
            name: "sentinel".into(),
            module_path: "github.com/user/sentinel".into(),
            description: "A security sentinel API".into(),
            author: "Test Author".into(),
            project_type: ProjectType::Api,
            visibility: Visibility::Public,
            license: LicenseKind::Apache2,
            criticality: Criticality::Production,
            // A production config must already satisfy the secure invariant,
            // otherwise load re-imposes it and round-trip equality is moot.
            features: Features {
                docker: true,
                github_actions: true,
                tests: true,
                static_analysis: true,
                sast: true,
                dependabot: true,
                ..Features::default()
            },
            github: GitHubConfig {
                enabled: true,
                topics: vec!["go".into(), "api".into()],
                push_on_init: false,
            },
        }
    }

    #[test]
    fn enum_display_matches_wire_values() {
        assert_eq!(ProjectType::Microservice.to_string(), "microservice");
        assert_eq!(LicenseKind::Gpl3.to_string(), "gpl-3.0");
        assert_eq!(Criticality::SecurityCritical.to_string(), "security-critical");
        assert_eq!(Visibility::Internal.to_string(), "internal");
    }

    #[test]
    fn enum_from_str_accepts_aliases() {
        assert_eq!("lib".parse::<ProjectType>().unwrap(), ProjectType::Library);
        assert_eq!("apache".parse::<LicenseKind>().unwrap(), LicenseKind::Apache2);
        assert!("bogus".parse::<ProjectType>().is_err());
    }

    #[test]
    fn features_set_rejects_unknown_key() {
        let mut f = Features::default();
        assert!(f.set("docker", true).is_ok());
        assert!(f.docker);
        assert!(matches!(
            f.set("kubernetes", true),
            Err(DomainError::UnknownFeature(_))
        ));
    }

    #[test]
    fn features_keys_cover_every_field() {
        let mut f = Features::default();
        for key in Features::KEYS {
            f.set(key, true).unwrap();
        }
        assert_eq!(
            f,
            Features {
                docker: true,
                github_actions: true,
                linting: true,
                static_analysis: true,
                dependabot: true,
                tests: true,
                sast: true,
            }
        );
    }

    #[test]
    fn is_secure_for_production_and_critical() {
        let mut cfg = sample();
        assert!(cfg.is_secure());
        cfg.criticality = Criticality::SecurityCritical;
        assert!(cfg.is_secure());
        cfg.criticality = Criticality::Experimental;
        assert!(!cfg.is_secure());
    }

    #[test]
    fn is_public_tracks_visibility() {
        let mut cfg = sample();
        assert!(cfg.is_public());
        cfg.visibility = Visibility::Private;
        assert!(!cfg.is_public());
    }

    #[test]
    fn yaml_round_trip_is_lossless() {
        let original = sample();
        let yaml = original.to_yaml().unwrap();
        let loaded = ProjectConfig::from_yaml(&yaml).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn yaml_uses_flat_wire_keys() {
        let yaml = sample().to_yaml().unwrap();
        assert!(yaml.contains("name: sentinel"));
        assert!(yaml.contains("module_path: github.com/user/sentinel"));
        assert!(yaml.contains("type: api"));
        assert!(yaml.contains("push_on_init: false"));
        assert!(yaml.contains("github_actions: true"));
    }

    #[test]
    fn from_yaml_rejects_missing_name() {
        let yaml = "\
name: \"\"
module_path: github.com/x/y
type: cli
visibility: public
license: mit
criticality: experimental
";
        assert!(ProjectConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn from_yaml_rejects_unknown_type() {
        let yaml = "\
name: valid
module_path: github.com/x/valid
type: bogus
visibility: public
license: mit
criticality: experimental
";
        assert!(ProjectConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn from_yaml_enforces_secure_invariant() {
        let yaml = "\
name: hardened
module_path: github.com/x/hardened
type: api
visibility: public
license: mit
criticality: production
features:
  docker: false
  github_actions: true
  linting: false
  static_analysis: false
  dependabot: false
  tests: false
  sast: false
github:
  enabled: false
  push_on_init: false
";
        let cfg = ProjectConfig::from_yaml(yaml).unwrap();
        assert!(cfg.features.static_analysis);
        assert!(cfg.features.sast);
        assert!(cfg.features.tests);
        assert!(cfg.features.dependabot); // github_actions is on
    }
}
