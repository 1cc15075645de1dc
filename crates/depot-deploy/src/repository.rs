//! Target repository selection.

use depot_core::publisher::PublisherConfig;

/// Version marker that routes an artifact to the snapshot repository.
pub const SNAPSHOT_MARKER: &str = "-SNAPSHOT";

/// Pick the target repository key for a resolved artifact path.
///
/// Snapshot routing takes precedence: when a snapshot key is configured and
/// the path contains `-SNAPSHOT`, the snapshot repository is selected even
/// if a release key is also present. A blank release key falls through to
/// the default key. Returns `None` when no usable key is configured; the
/// caller surfaces that as a configuration error.
pub fn select_target_repository<'a>(
    artifact_path: &str,
    publisher: &'a PublisherConfig,
) -> Option<&'a str> {
    if let Some(snapshots) = publisher.snapshot_repo_key.as_deref() {
        if !snapshots.is_empty() && artifact_path.contains(SNAPSHOT_MARKER) {
            return Some(snapshots);
        }
    }
    if let Some(releases) = publisher.release_repo_key.as_deref() {
        if !releases.is_empty() {
            return Some(releases);
        }
    }
    if publisher.repo_key.is_empty() {
        None
    } else {
        Some(&publisher.repo_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publisher() -> PublisherConfig {
        PublisherConfig {
            repo_key: "gen-repo".to_string(),
            release_repo_key: Some("rel-repo".to_string()),
            snapshot_repo_key: Some("snap-repo".to_string()),
            ..PublisherConfig::default()
        }
    }

    #[test]
    fn snapshot_path_selects_snapshot_repo() {
        let publisher = publisher();
        let repo = select_target_repository("com/example/mylib/1.0-SNAPSHOT/mylib.jar", &publisher);
        assert_eq!(repo, Some("snap-repo"));
    }

    #[test]
    fn release_path_selects_release_repo() {
        let publisher = publisher();
        let repo = select_target_repository("com/example/mylib/1.0/mylib.jar", &publisher);
        assert_eq!(repo, Some("rel-repo"));
    }

    #[test]
    fn snapshot_path_without_snapshot_repo_falls_to_release() {
        let mut publisher = publisher();
        publisher.snapshot_repo_key = None;
        let repo = select_target_repository("com/example/mylib/1.0-SNAPSHOT/mylib.jar", &publisher);
        assert_eq!(repo, Some("rel-repo"));
    }

    #[test]
    fn blank_release_key_falls_to_default() {
        let mut publisher = publisher();
        publisher.release_repo_key = Some(String::new());
        let repo = select_target_repository("com/example/mylib/1.0/mylib.jar", &publisher);
        assert_eq!(repo, Some("gen-repo"));
    }

    #[test]
    fn missing_release_key_falls_to_default() {
        let mut publisher = publisher();
        publisher.release_repo_key = None;
        let repo = select_target_repository("com/example/mylib/1.0/mylib.jar", &publisher);
        assert_eq!(repo, Some("gen-repo"));
    }

    #[test]
    fn no_keys_at_all_selects_nothing() {
        let publisher = PublisherConfig::default();
        let repo = select_target_repository("com/example/mylib/1.0/mylib.jar", &publisher);
        assert_eq!(repo, None);
    }
}
