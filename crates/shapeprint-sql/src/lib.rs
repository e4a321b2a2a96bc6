//! SQL literal parameterization over the `sqlparser` AST.
//!
//! Rewrites SQL text so that every literal value becomes the `?`
//! placeholder, giving statements that differ only in literals an identical
//! parameterized form. The dialect and merge policy are fixed collaborator
//! configuration; everything downstream (hashing, sentinel mapping) lives in
//! the core crate.
//!
#![deny(missing_docs)]

/// Literal rewriting and policy types.
pub mod parameterize;

pub use parameterize::{ParameterizeError, ParameterizePolicy, SqlParameterizer};
