//! Core data types for the Depot deploy-details library.
//!
//! This crate defines the types that describe a publish batch: artifact
//! descriptors, publisher configuration, property specs with wildcard
//! selectors, and the insertion-ordered property map.
//!
//! This crate is intentionally free of I/O.

pub mod artifact;
pub mod props;
pub mod publisher;
pub mod spec;
