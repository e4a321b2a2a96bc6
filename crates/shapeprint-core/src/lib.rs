//! Shape fingerprint entry points for JSON documents and SQL statements.
//!
//! Every public entry point is total: blank input short-circuits to the
//! `NONE` sentinel before any processing, and any parse, canonicalize,
//! extract, serialize, or parameterize failure collapses to the `ERROR`
//! sentinel. The fallible `try_*` pipelines underneath propagate proper
//! error types; the sentinel mapping happens exactly once, here.
//!
#![deny(missing_docs)]

/// Error types collapsed to sentinels at the public boundary.
pub mod errors;
/// JSON fingerprint entry points.
pub mod fingerprint;
/// SQL fingerprint entry points.
pub mod sql;

pub use errors::FingerprintError;
pub use fingerprint::{
    fingerprint, fingerprint_id, json_keys, try_fingerprint, try_fingerprint_id, try_json_keys,
};
pub use sql::{sql_fingerprint, sql_fingerprint_id, try_sql_fingerprint};

/// Sentinel returned for blank input.
pub const NONE: &str = "NONE";
/// Sentinel returned when processing fails.
pub const ERROR: &str = "ERROR";

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
