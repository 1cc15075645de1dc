use serde::{Deserialize, Serialize};

/// Default Maven-2 style artifact path pattern.
pub const DEFAULT_ARTIFACT_PATTERN: &str =
    "[organisation]/[module]/[revision]/[artifact]-[revision](-[classifier]).[ext]";

/// Publisher-side deployment configuration.
///
/// Mirrors what a host build tool loads from its deployment configuration;
/// the on-disk format is the host's concern, so the fields all carry serde
/// defaults and can come from any serde-compatible source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherConfig {
    /// Default (general purpose) repository key.
    #[serde(default)]
    pub repo_key: String,

    /// Repository key for release artifacts.
    #[serde(default)]
    pub release_repo_key: Option<String>,

    /// Repository key for `-SNAPSHOT` artifacts.
    #[serde(default)]
    pub snapshot_repo_key: Option<String>,

    /// Whether the target repository uses a Maven-2 layout, where dots in
    /// the group id become path separators.
    #[serde(default = "default_m2_compatible")]
    pub m2_compatible: bool,

    /// Artifact path pattern with `[token]` substitution.
    #[serde(default = "default_artifact_pattern")]
    pub artifact_pattern: String,
}

fn default_m2_compatible() -> bool {
    true
}

fn default_artifact_pattern() -> String {
    DEFAULT_ARTIFACT_PATTERN.to_string()
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            repo_key: String::new(),
            release_repo_key: None,
            snapshot_repo_key: None,
            m2_compatible: true,
            artifact_pattern: DEFAULT_ARTIFACT_PATTERN.to_string(),
        }
    }
}

impl PublisherConfig {
    /// Minimal configuration deploying everything to a single repository.
    pub fn with_repo_key(key: impl Into<String>) -> Self {
        Self {
            repo_key: key.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_is_m2() {
        let config = PublisherConfig::default();
        assert!(config.m2_compatible);
        assert_eq!(config.artifact_pattern, DEFAULT_ARTIFACT_PATTERN);
    }

    #[test]
    fn with_repo_key() {
        let config = PublisherConfig::with_repo_key("libs-local");
        assert_eq!(config.repo_key, "libs-local");
        assert!(config.release_repo_key.is_none());
        assert!(config.snapshot_repo_key.is_none());
    }
}
