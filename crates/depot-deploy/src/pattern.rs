//! Ivy-style artifact path pattern substitution.
//!
//! Patterns contain `[token]` placeholders and `(...)` optional groups. An
//! optional group is emitted only when every token inside it resolves to a
//! value; otherwise the whole group, literal text included, is dropped.
//! `[artifact]-[revision](-[classifier]).[ext]` therefore yields
//! `mylib-1.0.jar` without a classifier and `mylib-1.0-sources.jar` with
//! one. Substitution is a pure function of the pattern and the token set.

use std::collections::BTreeMap;

use depot_core::artifact::ArtifactDescriptor;
use depot_core::publisher::PublisherConfig;
use depot_util::errors::DepotError;

/// Token values available to pattern substitution.
///
/// Open-ended: callers may set extra tokens beyond the standard set.
#[derive(Debug, Clone, Default)]
pub struct PatternTokens {
    tokens: BTreeMap<String, String>,
}

impl PatternTokens {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a token value. Blank values are ignored and leave the token
    /// unset, so an optional group referencing it is dropped.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            return;
        }
        self.tokens.insert(name.into(), value);
    }

    /// Look up a token value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens.get(name).map(String::as_str)
    }
}

/// Build the token set for one artifact under the given publisher layout.
///
/// The `organisation` token uses `/` instead of `.` as the group separator
/// when the publisher is configured M2-compatible. The `classifier` token is
/// only set for a non-blank classifier.
pub fn artifact_tokens(
    artifact: &ArtifactDescriptor,
    publisher: &PublisherConfig,
) -> PatternTokens {
    let organisation = if publisher.m2_compatible {
        artifact.group.replace('.', "/")
    } else {
        artifact.group.clone()
    };
    let mut tokens = PatternTokens::new();
    tokens.set("organisation", organisation);
    tokens.set("module", &artifact.module);
    tokens.set("revision", &artifact.version);
    tokens.set("artifact", &artifact.name);
    tokens.set("type", &artifact.artifact_type);
    tokens.set("ext", &artifact.extension);
    tokens.set("conf", &artifact.publication);
    if let Some(classifier) = artifact.effective_classifier() {
        tokens.set("classifier", classifier);
    }
    tokens
}

/// Substitute `pattern` with the given token values.
///
/// Fails on an unclosed `[` or `(`, on a token with no value outside an
/// optional group, and on a pattern resolving to an empty path.
pub fn substitute(pattern: &str, tokens: &PatternTokens) -> miette::Result<String> {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(idx) = rest.find(['[', '(']) {
        out.push_str(&rest[..idx]);
        if rest.as_bytes()[idx] == b'[' {
            let end = rest[idx..]
                .find(']')
                .ok_or_else(|| unclosed('[', pattern))?
                + idx;
            let name = &rest[idx + 1..end];
            let value = tokens.get(name).ok_or_else(|| {
                miette::Report::from(DepotError::Pattern {
                    message: format!("no value for token '[{name}]' in pattern '{pattern}'"),
                })
            })?;
            out.push_str(value);
            rest = &rest[end + 1..];
        } else {
            let end = rest[idx..]
                .find(')')
                .ok_or_else(|| unclosed('(', pattern))?
                + idx;
            if let Some(rendered) = render_group(&rest[idx + 1..end], tokens, pattern)? {
                out.push_str(&rendered);
            }
            rest = &rest[end + 1..];
        }
    }
    out.push_str(rest);
    if out.is_empty() {
        return Err(DepotError::Pattern {
            message: format!("pattern '{pattern}' resolved to an empty path"),
        }
        .into());
    }
    Ok(out)
}

/// Render an optional group body, or `None` when a token inside is unset.
fn render_group(
    group: &str,
    tokens: &PatternTokens,
    pattern: &str,
) -> miette::Result<Option<String>> {
    let mut out = String::with_capacity(group.len());
    let mut rest = group;
    while let Some(idx) = rest.find('[') {
        out.push_str(&rest[..idx]);
        let end = rest[idx..]
            .find(']')
            .ok_or_else(|| unclosed('[', pattern))?
            + idx;
        match tokens.get(&rest[idx + 1..end]) {
            Some(value) => out.push_str(value),
            None => return Ok(None),
        }
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    Ok(Some(out))
}

fn unclosed(delimiter: char, pattern: &str) -> miette::Report {
    DepotError::Pattern {
        message: format!("unclosed '{delimiter}' in pattern '{pattern}'"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::publisher::DEFAULT_ARTIFACT_PATTERN;
    use std::path::PathBuf;

    fn artifact(classifier: Option<&str>) -> ArtifactDescriptor {
        ArtifactDescriptor {
            name: "mylib".to_string(),
            extension: "jar".to_string(),
            artifact_type: "jar".to_string(),
            classifier: classifier.map(str::to_string),
            group: "com.example".to_string(),
            module: "mylib".to_string(),
            version: "1.0".to_string(),
            file: PathBuf::from("build/libs/mylib-1.0.jar"),
            publication: "archives".to_string(),
        }
    }

    #[test]
    fn m2_layout_without_classifier() {
        let publisher = PublisherConfig::with_repo_key("libs");
        let tokens = artifact_tokens(&artifact(None), &publisher);
        let path = substitute(DEFAULT_ARTIFACT_PATTERN, &tokens).unwrap();
        assert_eq!(path, "com/example/mylib/1.0/mylib-1.0.jar");
    }

    #[test]
    fn m2_layout_with_classifier() {
        let publisher = PublisherConfig::with_repo_key("libs");
        let tokens = artifact_tokens(&artifact(Some("sources")), &publisher);
        let path = substitute(DEFAULT_ARTIFACT_PATTERN, &tokens).unwrap();
        assert_eq!(path, "com/example/mylib/1.0/mylib-1.0-sources.jar");
    }

    #[test]
    fn non_m2_keeps_group_dots() {
        let mut publisher = PublisherConfig::with_repo_key("libs");
        publisher.m2_compatible = false;
        let tokens = artifact_tokens(&artifact(None), &publisher);
        let path = substitute(DEFAULT_ARTIFACT_PATTERN, &tokens).unwrap();
        assert_eq!(path, "com.example/mylib/1.0/mylib-1.0.jar");
    }

    #[test]
    fn substitution_is_deterministic() {
        let publisher = PublisherConfig::with_repo_key("libs");
        let tokens = artifact_tokens(&artifact(Some("javadoc")), &publisher);
        let a = substitute(DEFAULT_ARTIFACT_PATTERN, &tokens).unwrap();
        let b = substitute(DEFAULT_ARTIFACT_PATTERN, &tokens).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn conf_and_type_tokens() {
        let publisher = PublisherConfig::with_repo_key("libs");
        let tokens = artifact_tokens(&artifact(None), &publisher);
        let path = substitute("[conf]/[module]-[revision].[type]", &tokens).unwrap();
        assert_eq!(path, "archives/mylib-1.0.jar");
    }

    #[test]
    fn extra_tokens_substitute() {
        let mut tokens = PatternTokens::new();
        tokens.set("module", "mylib");
        tokens.set("branch", "main");
        let path = substitute("[branch]/[module]", &tokens).unwrap();
        assert_eq!(path, "main/mylib");
    }

    #[test]
    fn unknown_token_fails() {
        let mut tokens = PatternTokens::new();
        tokens.set("module", "mylib");
        assert!(substitute("[module]-[flavor]", &tokens).is_err());
    }

    #[test]
    fn unclosed_bracket_fails() {
        let tokens = PatternTokens::new();
        assert!(substitute("[module", &tokens).is_err());
        assert!(substitute("(x[module]", &tokens).is_err());
    }

    #[test]
    fn blank_token_value_stays_unset() {
        let mut tokens = PatternTokens::new();
        tokens.set("module", "mylib");
        tokens.set("classifier", "  ");
        let path = substitute("[module](-[classifier])", &tokens).unwrap();
        assert_eq!(path, "mylib");
    }
}
