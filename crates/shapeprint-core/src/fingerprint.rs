use serde_json::Value;
use shapeprint_canonical::{sorted_key_paths, Canonicalizer, Digest};

use crate::errors::FingerprintError;
use crate::{is_blank, ERROR, NONE};

/// Computes the fingerprint identifier for a JSON document.
///
/// Returns `NONE` for blank input and `ERROR` for any processing failure;
/// otherwise the 64-character lowercase-hex SHA-256 digest of the sorted,
/// comma-joined key paths.
pub fn fingerprint_id(json: &str) -> String {
    if is_blank(json) {
        return NONE.to_string();
    }
    match try_fingerprint_id(json, &Canonicalizer::default()) {
        Ok(digest) => digest.to_string(),
        Err(_) => ERROR.to_string(),
    }
}

/// Extracts the sorted, comma-joined key paths of a JSON document.
///
/// Returns `NONE` for blank input and `ERROR` for any processing failure.
pub fn json_keys(json: &str) -> String {
    if is_blank(json) {
        return NONE.to_string();
    }
    match try_json_keys(json, &Canonicalizer::default()) {
        Ok(keys) => keys,
        Err(_) => ERROR.to_string(),
    }
}

/// Renders the canonical (value-blind) form of a JSON document.
///
/// Returns `NONE` for blank input and `ERROR` for any processing failure.
/// The rendering is not guaranteed byte-stable across implementations when
/// deduplicated arrays keep more than one element; hash `fingerprint_id`
/// output for a stable identity instead.
pub fn fingerprint(json: &str) -> String {
    if is_blank(json) {
        return NONE.to_string();
    }
    match try_fingerprint(json, &Canonicalizer::default()) {
        Ok(text) => text,
        Err(_) => ERROR.to_string(),
    }
}

/// Fallible identifier pipeline: parse, canonicalize, extract, hash.
pub fn try_fingerprint_id(
    json: &str,
    canonicalizer: &Canonicalizer,
) -> Result<Digest, FingerprintError> {
    let keys = try_json_keys(json, canonicalizer)?;
    Ok(Digest::of_str(&keys))
}

/// Fallible key-path pipeline: parse, canonicalize, extract, sort, join.
pub fn try_json_keys(
    json: &str,
    canonicalizer: &Canonicalizer,
) -> Result<String, FingerprintError> {
    let value: Value = serde_json::from_str(json)?;
    let canonical = canonicalizer.canonicalize(value);
    let paths = sorted_key_paths(&canonical)?;
    Ok(paths.join(","))
}

/// Fallible canonical-text pipeline: parse, canonicalize, serialize.
pub fn try_fingerprint(
    json: &str,
    canonicalizer: &Canonicalizer,
) -> Result<String, FingerprintError> {
    let value: Value = serde_json::from_str(json)?;
    let canonical = canonicalizer.canonicalize(value);
    Ok(canonicalizer.canonical_text(&canonical)?)
}
