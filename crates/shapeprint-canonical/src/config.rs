use serde::{Deserialize, Serialize};

/// Leaf replacement written over every scalar during canonicalization.
pub const DEFAULT_PLACEHOLDER: &str = "?";

/// Process-wide canonicalization settings.
///
/// Built once at startup and threaded explicitly into the canonicalizer;
/// there is no hidden global configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalConfig {
    /// Replacement value for scalar leaves.
    pub placeholder: String,
}

impl Default for CanonicalConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}
