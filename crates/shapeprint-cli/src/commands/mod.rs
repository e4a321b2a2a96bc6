//! Command implementations.

pub mod canonical;
pub mod id;
pub mod keys;
pub mod sql;
pub mod sql_id;
