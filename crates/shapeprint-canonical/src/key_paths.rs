use serde_json::Value;

/// Error returned when key paths cannot be extracted.
#[derive(thiserror::Error, Debug)]
pub enum KeyPathError {
    /// The document root is a bare scalar; there is no key to record.
    #[error("document root is a scalar and has no key paths")]
    ScalarRoot,
}

/// Pending (prefix, node) pair for the iterative walk.
struct Entry<'a> {
    prefix: String,
    node: &'a Value,
}

/// Collects the path to every leaf position of a canonical tree, sorted
/// lexicographically.
///
/// Paths concatenate object keys and array indices with `.` separators.
/// An empty object contributes its own path; an empty array contributes
/// none. That asymmetry is part of the fingerprint contract and must not
/// change. A root that is itself an empty object yields no paths.
///
/// Because the result is fully sorted, the unspecified element order of
/// post-dedup arrays never shows through: every surviving index appears,
/// ordered by its string path.
pub fn sorted_key_paths(root: &Value) -> Result<Vec<String>, KeyPathError> {
    let mut paths = Vec::new();
    let mut stack = vec![Entry {
        prefix: String::new(),
        node: root,
    }];

    while let Some(Entry { prefix, node }) = stack.pop() {
        match node {
            Value::Object(map) => {
                if map.is_empty() {
                    if !prefix.is_empty() {
                        paths.push(strip_separator(&prefix));
                    }
                } else {
                    for (key, child) in map {
                        stack.push(Entry {
                            prefix: format!("{}{}.", prefix, key),
                            node: child,
                        });
                    }
                }
            }
            Value::Array(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    stack.push(Entry {
                        prefix: format!("{}{}.", prefix, index),
                        node: element,
                    });
                }
            }
            _ => {
                if prefix.is_empty() {
                    return Err(KeyPathError::ScalarRoot);
                }
                paths.push(strip_separator(&prefix));
            }
        }
    }

    paths.sort();
    Ok(paths)
}

fn strip_separator(prefix: &str) -> String {
    prefix[..prefix.len() - 1].to_string()
}
