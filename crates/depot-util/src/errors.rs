use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all Depot operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepotError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An artifact's backing file does not exist at assembly time.
    #[error("artifact file '{path}' does not exist and needs to be published from publication '{publication}'")]
    #[diagnostic(help("Build the artifact before collecting deploy details"))]
    ArtifactFileMissing { path: PathBuf, publication: String },

    /// I/O failure while hashing an artifact file.
    #[error("failed to calculate checksums for artifact '{path}'")]
    Checksum {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No usable target repository key is configured.
    #[error("no target repository configured for artifact '{artifact}'")]
    #[diagnostic(help(
        "Set a release, snapshot, or default repository key in the publisher configuration"
    ))]
    RepositoryConfigurationMissing { artifact: String },

    /// Malformed or unresolvable artifact path pattern.
    #[error("artifact path pattern error: {message}")]
    Pattern { message: String },

    /// Invalid property spec selector pattern.
    #[error("invalid artifact spec: {message}")]
    Spec { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepotResult<T> = miette::Result<T>;
