use thiserror::Error;

/// Failures collapsed to the `ERROR` sentinel at the public entry points.
#[derive(Error, Debug)]
pub enum FingerprintError {
    /// JSON text could not be parsed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A canonical tree could not be serialized to text.
    #[error("canonical text error: {0}")]
    CanonicalText(#[from] shapeprint_canonical::CanonicalTextError),
    /// Key paths could not be extracted.
    #[error("key path error: {0}")]
    KeyPaths(#[from] shapeprint_canonical::KeyPathError),
    /// SQL text could not be parameterized.
    #[error("SQL parameterize error: {0}")]
    Parameterize(#[from] shapeprint_sql::ParameterizeError),
}
