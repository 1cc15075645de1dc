use std::path::PathBuf;

/// Identifies one artifact to publish.
///
/// Carries the full module coordinates (group, module, version) so that
/// deploy-detail assembly needs no reference back to a host project object.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    /// Artifact name, usually the module name.
    pub name: String,
    /// File extension, e.g. `jar`.
    pub extension: String,
    /// Artifact type, e.g. `jar`, `pom`, `module`. Often equals the extension.
    pub artifact_type: String,
    /// Optional classifier, e.g. `sources` or `javadoc`.
    pub classifier: Option<String>,
    /// Owning group id, e.g. `com.example`.
    pub group: String,
    /// Owning module name.
    pub module: String,
    /// Module version string.
    pub version: String,
    /// Path to the artifact file on disk.
    pub file: PathBuf,
    /// Name of the publication or configuration that produced this artifact.
    pub publication: String,
}

impl ArtifactDescriptor {
    /// The classifier, treating a blank string as absent.
    pub fn effective_classifier(&self) -> Option<&str> {
        self.classifier
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
