//! Shared utilities for the Depot deploy-details library.
//!
//! This crate provides the cross-cutting concerns used by the other Depot
//! crates: the unified error type and streaming file hashing.

pub mod errors;
pub mod hash;
