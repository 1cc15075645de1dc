//! Deploy-detail assembly: one immutable deploy record per artifact.

use std::fmt;
use std::path::PathBuf;

use depot_core::artifact::ArtifactDescriptor;
use depot_core::props::PropertyMap;
use depot_core::publisher::PublisherConfig;
use depot_core::spec::PropertySpec;
use depot_util::errors::DepotError;

use crate::checksum::{self, ChecksumSet};
use crate::pattern;
use crate::properties::merge_properties;
use crate::repository::select_target_repository;

/// Package type tag recorded on every deploy detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageType {
    Maven,
    Gradle,
    Ivy,
    Generic,
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Maven => "maven",
            Self::Gradle => "gradle",
            Self::Ivy => "ivy",
            Self::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Everything needed to upload one artifact to one repository.
///
/// Never mutated after assembly.
#[derive(Debug, Clone)]
pub struct DeployDetail {
    /// Key of the repository the artifact deploys to.
    pub target_repository: String,
    /// Remote path within the repository, fully resolved.
    pub artifact_path: String,
    /// Local file backing the artifact.
    pub file: PathBuf,
    /// Checksum manifest of the file contents.
    pub checksums: ChecksumSet,
    /// Merged deploy properties, in insertion order.
    pub properties: PropertyMap,
    /// Package type tag.
    pub package_type: PackageType,
}

/// Assemble the deploy detail for a single artifact.
///
/// Verifies the backing file exists, computes the checksum manifest,
/// resolves the remote path from the publisher's pattern, selects the
/// target repository, and merges properties from the defaults and every
/// matching spec.
pub fn assemble_deploy_detail(
    artifact: &ArtifactDescriptor,
    publisher: &PublisherConfig,
    specs: &[PropertySpec],
    defaults: &PropertyMap,
    package_type: PackageType,
) -> miette::Result<DeployDetail> {
    let checksums = checksum::checksums_for(&artifact.file, &artifact.publication)?;
    let tokens = pattern::artifact_tokens(artifact, publisher);
    let artifact_path = pattern::substitute(&publisher.artifact_pattern, &tokens)?;
    let target_repository = select_target_repository(&artifact_path, publisher)
        .ok_or_else(|| {
            miette::Report::from(DepotError::RepositoryConfigurationMissing {
                artifact: artifact.name.clone(),
            })
        })?
        .to_string();
    let properties = merge_properties(defaults, artifact, specs);
    tracing::debug!(
        "assembled deploy detail for '{}': {}/{}",
        artifact.name,
        target_repository,
        artifact_path
    );
    Ok(DeployDetail {
        target_repository,
        artifact_path,
        file: artifact.file.clone(),
        checksums,
        properties,
        package_type,
    })
}

/// A per-artifact failure tolerated during batch collection.
#[derive(Debug)]
pub struct BatchFailure {
    /// Name of the artifact that failed.
    pub artifact: String,
    /// Publication the artifact came from.
    pub publication: String,
    /// What went wrong.
    pub error: miette::Report,
}

/// Append-only sink for assembled deploy details.
///
/// The collection grows monotonically: entries are never deduplicated or
/// overwritten, so two publications referencing the same physical file by
/// different logical names each get their own entry.
#[derive(Debug)]
pub struct DeployDetailsCollector {
    package_type: PackageType,
    details: Vec<DeployDetail>,
}

impl DeployDetailsCollector {
    /// Create an empty collector tagging every record with `package_type`.
    pub fn new(package_type: PackageType) -> Self {
        Self {
            package_type,
            details: Vec::new(),
        }
    }

    /// Assemble and append one artifact's deploy detail.
    ///
    /// On error nothing is appended; the failure is fatal for this artifact
    /// only.
    pub fn collect(
        &mut self,
        artifact: &ArtifactDescriptor,
        publisher: &PublisherConfig,
        specs: &[PropertySpec],
        defaults: &PropertyMap,
    ) -> miette::Result<()> {
        let detail =
            assemble_deploy_detail(artifact, publisher, specs, defaults, self.package_type)?;
        self.details.push(detail);
        Ok(())
    }

    /// Assemble a whole batch, continuing past per-artifact failures.
    ///
    /// Failures are logged and returned; whether one failed artifact aborts
    /// the publish is the caller's decision.
    pub fn collect_batch(
        &mut self,
        artifacts: &[ArtifactDescriptor],
        publisher: &PublisherConfig,
        specs: &[PropertySpec],
        defaults: &PropertyMap,
    ) -> Vec<BatchFailure> {
        let mut failures = Vec::new();
        for artifact in artifacts {
            if let Err(error) = self.collect(artifact, publisher, specs, defaults) {
                tracing::warn!(
                    "skipping artifact '{}' from publication '{}': {error}",
                    artifact.name,
                    artifact.publication
                );
                failures.push(BatchFailure {
                    artifact: artifact.name.clone(),
                    publication: artifact.publication.clone(),
                    error,
                });
            }
        }
        failures
    }

    /// The collected details, in collection order.
    pub fn details(&self) -> &[DeployDetail] {
        &self.details
    }

    /// Number of collected details.
    pub fn len(&self) -> usize {
        self.details.len()
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// Hand the collected details to the upload collaborator.
    pub fn into_details(self) -> Vec<DeployDetail> {
        self.details
    }
}
