//! Shape-only canonicalization primitives for JSON documents.
//!
//! Two documents that share the same key structure but differ only in scalar
//! leaf values canonicalize to structurally-equal trees, yield identical
//! sorted key-path sets, and therefore identical fingerprint digests. The
//! transform is deliberately lossy; every value that participates in
//! fingerprinting flows through this crate.
//!
#![deny(missing_docs)]

/// Canonicalization of parsed JSON values.
pub mod canonicalizer;
/// Canonicalization settings.
pub mod config;
/// Digest primitives.
pub mod digest;
/// Leaf key-path extraction.
pub mod key_paths;
/// Validation helpers used by canonical types.
pub mod validation;

pub use canonicalizer::{CanonicalTextError, Canonicalizer};
pub use config::{CanonicalConfig, DEFAULT_PLACEHOLDER};
pub use digest::{sha256_hex, Digest};
pub use key_paths::{sorted_key_paths, KeyPathError};
pub use validation::ValidationError;
