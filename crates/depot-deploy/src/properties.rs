//! Deterministic per-artifact property merging.

use depot_core::artifact::ArtifactDescriptor;
use depot_core::props::PropertyMap;
use depot_core::spec::PropertySpec;

/// Merge default properties with every matching property spec's payload.
///
/// Starts from a copy of `defaults`; each spec whose selectors match the
/// artifact contributes its (key, value) pairs in evaluation order. A
/// repeated key accumulates all its values into one comma-joined value
/// rather than being overwritten, and key order is the defaults' insertion
/// order followed by first-seen order across the specs.
pub fn merge_properties(
    defaults: &PropertyMap,
    artifact: &ArtifactDescriptor,
    specs: &[PropertySpec],
) -> PropertyMap {
    let mut merged = defaults.clone();
    for spec in specs.iter().filter(|spec| spec.matches(artifact)) {
        for (key, value) in spec.properties() {
            merged.accumulate(key, value);
        }
    }
    merged
}
