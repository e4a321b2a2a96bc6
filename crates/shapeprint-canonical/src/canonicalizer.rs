use canonical_json::to_string;
use serde_json::{Map, Value};

use crate::config::CanonicalConfig;

/// Error returned when a canonical tree cannot be serialized to text.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalTextError {
    /// The canonical serializer rejected the tree.
    #[error("canonical serialization failed: {0}")]
    Serialize(String),
}

/// Rewrites parsed JSON values into shape-only canonical form.
///
/// Every scalar leaf collapses to the configured placeholder and every array
/// keeps exactly one element per distinct shape. The rewrite is deliberately
/// lossy: only the key structure of the input survives.
pub struct Canonicalizer {
    config: CanonicalConfig,
}

/// Pending unit of work for the iterative rewrite.
enum Task {
    /// Canonicalize a subtree and leave its result on the value stack.
    Visit(Value),
    /// Reassemble an object from the topmost results, one per key.
    BuildObject(Vec<String>),
    /// Reassemble an array from the topmost `len` results, deduplicating.
    BuildArray(usize),
}

impl Canonicalizer {
    /// Creates a canonicalizer with the provided configuration.
    pub fn new(config: CanonicalConfig) -> Self {
        Self { config }
    }

    /// Rewrites `value` into canonical form.
    ///
    /// Total over any well-formed tree. Arrays are deduplicated bottom-up:
    /// children are canonicalized first, then the parent array keeps the
    /// first occurrence of each distinct shape. Surviving element order is
    /// not part of the contract; only the sorted key-path and hashed outputs
    /// are guaranteed stable.
    ///
    /// An array holding nothing but scalars collapses to a single element,
    /// since every scalar becomes the same placeholder.
    pub fn canonicalize(&self, value: Value) -> Value {
        // Explicit work stack; input nesting depth must not be able to
        // exhaust the call stack.
        let mut work = vec![Task::Visit(value)];
        let mut done: Vec<Value> = Vec::new();

        while let Some(task) = work.pop() {
            match task {
                Task::Visit(Value::Object(map)) => {
                    let (keys, children): (Vec<String>, Vec<Value>) = map.into_iter().unzip();
                    work.push(Task::BuildObject(keys));
                    // Children complete in reverse push order, so the first
                    // field's result ends up on top of `done`.
                    for child in children {
                        work.push(Task::Visit(child));
                    }
                }
                Task::Visit(Value::Array(elements)) => {
                    work.push(Task::BuildArray(elements.len()));
                    for element in elements {
                        work.push(Task::Visit(element));
                    }
                }
                Task::Visit(_) => {
                    done.push(Value::String(self.config.placeholder.clone()));
                }
                Task::BuildObject(keys) => {
                    let mut map = Map::new();
                    for key in keys {
                        let child = done.pop().expect("one result per object field");
                        map.insert(key, child);
                    }
                    done.push(Value::Object(map));
                }
                Task::BuildArray(len) => {
                    let mut unique: Vec<Value> = Vec::with_capacity(len);
                    for _ in 0..len {
                        let element = done.pop().expect("one result per array element");
                        if !unique.contains(&element) {
                            unique.push(element);
                        }
                    }
                    done.push(Value::Array(unique));
                }
            }
        }

        done.pop().expect("balanced traversal leaves one result")
    }

    /// Serializes a canonical tree to its textual fingerprint form.
    ///
    /// Object keys render in a deterministic order; the relative order of a
    /// multi-element post-dedup array is not guaranteed stable across
    /// implementations. Callers needing a stable rendering should hash the
    /// sorted key paths instead.
    pub fn canonical_text(&self, value: &Value) -> Result<String, CanonicalTextError> {
        to_string(value).map_err(|err| CanonicalTextError::Serialize(format!("{:?}", err)))
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(CanonicalConfig::default())
    }
}
