//! Deploy-detail resolution for publishing build artifacts to a binary
//! repository.
//!
//! For each artifact in a publish batch this crate decides the target
//! repository key, computes the remote artifact path from a layout pattern,
//! calculates a checksum manifest, and merges per-artifact properties from
//! the configured property specs, producing one immutable
//! [`details::DeployDetail`] per artifact. Network upload and host
//! build-tool wiring are the caller's concern.

pub mod checksum;
pub mod details;
pub mod pattern;
pub mod properties;
pub mod repository;
