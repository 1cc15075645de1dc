//! Property specs: rules attaching descriptive properties to artifacts
//! matching certain coordinates.
//!
//! A spec selects artifacts by (publication, group, module, version,
//! classifier, type). Each selector field is an optional wildcard pattern
//! (`*`, `?`); an absent field matches anything. Selector patterns are
//! compiled once when the spec is built.

use globset::{Glob, GlobMatcher};

use depot_util::errors::DepotError;

use crate::artifact::ArtifactDescriptor;

/// One selector field: an optional compiled wildcard pattern.
#[derive(Debug, Clone)]
struct Selector(Option<GlobMatcher>);

impl Selector {
    fn any() -> Self {
        Self(None)
    }

    fn compile(pattern: &str) -> miette::Result<Self> {
        let glob = Glob::new(pattern).map_err(|e| DepotError::Spec {
            message: format!("invalid selector pattern '{pattern}': {e}"),
        })?;
        Ok(Self(Some(glob.compile_matcher())))
    }

    fn matches(&self, value: &str) -> bool {
        match &self.0 {
            None => true,
            Some(matcher) => matcher.is_match(value),
        }
    }
}

/// A rule contributing properties to every artifact its selectors match.
///
/// The property payload is an ordered multimap: one key may carry several
/// values, and values keep the order they were added in.
#[derive(Debug, Clone)]
pub struct PropertySpec {
    configuration: Selector,
    group: Selector,
    module: Selector,
    version: Selector,
    classifier: Selector,
    artifact_type: Selector,
    properties: Vec<(String, String)>,
}

impl PropertySpec {
    /// Start building a spec. All selectors default to match-any.
    pub fn builder() -> PropertySpecBuilder {
        PropertySpecBuilder::default()
    }

    /// Whether this spec applies to the given artifact.
    ///
    /// The classifier selector is matched against the empty string when the
    /// artifact has no classifier, so a `*` classifier pattern matches
    /// classified and unclassified artifacts alike.
    pub fn matches(&self, artifact: &ArtifactDescriptor) -> bool {
        self.configuration.matches(&artifact.publication)
            && self.group.matches(&artifact.group)
            && self.module.matches(&artifact.module)
            && self.version.matches(&artifact.version)
            && self
                .classifier
                .matches(artifact.effective_classifier().unwrap_or(""))
            && self.artifact_type.matches(&artifact.artifact_type)
    }

    /// The (key, value) pairs this spec contributes, in insertion order.
    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }
}

/// Builder for [`PropertySpec`]; selector patterns are compiled by `build`.
#[derive(Debug, Default)]
pub struct PropertySpecBuilder {
    configuration: Option<String>,
    group: Option<String>,
    module: Option<String>,
    version: Option<String>,
    classifier: Option<String>,
    artifact_type: Option<String>,
    properties: Vec<(String, String)>,
}

impl PropertySpecBuilder {
    /// Match the publication/configuration name against a pattern.
    pub fn configuration(mut self, pattern: impl Into<String>) -> Self {
        self.configuration = Some(pattern.into());
        self
    }

    /// Match the group id against a pattern.
    pub fn group(mut self, pattern: impl Into<String>) -> Self {
        self.group = Some(pattern.into());
        self
    }

    /// Match the module name against a pattern.
    pub fn module(mut self, pattern: impl Into<String>) -> Self {
        self.module = Some(pattern.into());
        self
    }

    /// Match the version against a pattern.
    pub fn version(mut self, pattern: impl Into<String>) -> Self {
        self.version = Some(pattern.into());
        self
    }

    /// Match the classifier against a pattern. Unclassified artifacts are
    /// matched as the empty string.
    pub fn classifier(mut self, pattern: impl Into<String>) -> Self {
        self.classifier = Some(pattern.into());
        self
    }

    /// Match the artifact type against a pattern.
    pub fn artifact_type(mut self, pattern: impl Into<String>) -> Self {
        self.artifact_type = Some(pattern.into());
        self
    }

    /// Add one property contribution. May be called repeatedly with the
    /// same key to contribute several values.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    /// Compile the selector patterns and produce the spec.
    pub fn build(self) -> miette::Result<PropertySpec> {
        let compile = |pattern: Option<String>| -> miette::Result<Selector> {
            match pattern {
                None => Ok(Selector::any()),
                Some(p) => Selector::compile(&p),
            }
        };
        Ok(PropertySpec {
            configuration: compile(self.configuration)?,
            group: compile(self.group)?,
            module: compile(self.module)?,
            version: compile(self.version)?,
            classifier: compile(self.classifier)?,
            artifact_type: compile(self.artifact_type)?,
            properties: self.properties,
        })
    }
}
