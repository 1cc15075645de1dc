//! Artifact checksum manifests (MD5, SHA-1, SHA-256).

use std::path::Path;

use depot_util::errors::DepotError;
use depot_util::hash::{self, FileDigests};

/// The checksum manifest attached to one deployed artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumSet {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
}

impl From<FileDigests> for ChecksumSet {
    fn from(digests: FileDigests) -> Self {
        Self {
            md5: digests.md5,
            sha1: digests.sha1,
            sha256: digests.sha256,
        }
    }
}

/// Compute the checksum manifest for an artifact file.
///
/// The file's existence is checked before any hashing attempt; a missing
/// file reports the path together with the publication the artifact came
/// from. An I/O failure during hashing is fatal for this artifact and is
/// not retried.
pub fn checksums_for(path: &Path, publication: &str) -> miette::Result<ChecksumSet> {
    if !path.is_file() {
        return Err(DepotError::ArtifactFileMissing {
            path: path.to_path_buf(),
            publication: publication.to_string(),
        }
        .into());
    }
    let digests = hash::digest_file(path).map_err(|source| DepotError::Checksum {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(digests.into())
}
