use shapeprint_canonical::Digest;
use shapeprint_sql::SqlParameterizer;

use crate::errors::FingerprintError;
use crate::{is_blank, ERROR, NONE};

/// Renders the parameterized form of a SQL statement.
///
/// Returns `NONE` for blank input and `ERROR` when the dialect parser
/// rejects the input.
pub fn sql_fingerprint(sql: &str) -> String {
    if is_blank(sql) {
        return NONE.to_string();
    }
    match try_sql_fingerprint(sql, &SqlParameterizer::default()) {
        Ok(text) => text,
        Err(_) => ERROR.to_string(),
    }
}

/// Computes the fingerprint identifier for a SQL statement.
///
/// Returns `NONE` for blank input and `ERROR` for any processing failure;
/// otherwise the 64-character lowercase-hex SHA-256 digest of the
/// parameterized text.
pub fn sql_fingerprint_id(sql: &str) -> String {
    if is_blank(sql) {
        return NONE.to_string();
    }
    match try_sql_fingerprint(sql, &SqlParameterizer::default()) {
        Ok(text) => Digest::of_str(&text).to_string(),
        Err(_) => ERROR.to_string(),
    }
}

/// Fallible parameterization pipeline shared by the sentinel entry points.
pub fn try_sql_fingerprint(
    sql: &str,
    parameterizer: &SqlParameterizer,
) -> Result<String, FingerprintError> {
    Ok(parameterizer.parameterize(sql)?)
}
