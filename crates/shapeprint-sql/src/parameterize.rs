use std::ops::ControlFlow;

use sqlparser::ast::{visit_expressions_mut, Expr, Value};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::{Parser, ParserError};

/// Error returned when SQL text cannot be parameterized.
#[derive(thiserror::Error, Debug)]
pub enum ParameterizeError {
    /// The dialect parser rejected the input.
    #[error("SQL parse error: {0}")]
    Parse(#[from] ParserError),
    /// The input parsed to zero statements.
    #[error("input contains no SQL statement")]
    NoStatement,
}

/// Literal-replacement policy applied while rewriting.
///
/// Sharded table references and AND/OR predicate branches are never merged;
/// `IN` lists collapse to a single placeholder when enabled (the default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterizePolicy {
    /// Collapse `IN (...)` lists to a single placeholder.
    pub merge_in_lists: bool,
}

impl Default for ParameterizePolicy {
    fn default() -> Self {
        Self {
            merge_in_lists: true,
        }
    }
}

/// Rewrites SQL statements so every literal value becomes `?`.
pub struct SqlParameterizer {
    policy: ParameterizePolicy,
}

impl SqlParameterizer {
    /// Creates a parameterizer with the provided policy.
    pub fn new(policy: ParameterizePolicy) -> Self {
        Self { policy }
    }

    /// Parameterizes `sql` under the MySQL dialect.
    ///
    /// Each statement is parsed to an AST, every literal value expression is
    /// replaced by the `?` placeholder, and the statements are re-rendered
    /// and joined with `; `.
    pub fn parameterize(&self, sql: &str) -> Result<String, ParameterizeError> {
        let mut statements = Parser::parse_sql(&MySqlDialect {}, sql)?;
        if statements.is_empty() {
            return Err(ParameterizeError::NoStatement);
        }

        let merge_in_lists = self.policy.merge_in_lists;
        let _ = visit_expressions_mut(&mut statements, |expr: &mut Expr| {
            match expr {
                Expr::Value(value) => {
                    *value = Value::Placeholder("?".to_string());
                }
                Expr::InList { list, .. } if merge_in_lists && !list.is_empty() => {
                    list.clear();
                    list.push(Expr::Value(Value::Placeholder("?".to_string())));
                }
                _ => {}
            }
            ControlFlow::<()>::Continue(())
        });

        Ok(statements
            .iter()
            .map(|statement| statement.to_string())
            .collect::<Vec<_>>()
            .join("; "))
    }
}

impl Default for SqlParameterizer {
    fn default() -> Self {
        Self::new(ParameterizePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_become_placeholders() {
        let parameterizer = SqlParameterizer::default();
        let out = parameterizer
            .parameterize("SELECT * FROM users WHERE id = 42 AND name = 'bob'")
            .unwrap();
        assert_eq!(out, "SELECT * FROM users WHERE id = ? AND name = ?");
    }

    #[test]
    fn literal_values_do_not_affect_output() {
        let parameterizer = SqlParameterizer::default();
        let a = parameterizer
            .parameterize("SELECT * FROM t WHERE x = 1")
            .unwrap();
        let b = parameterizer
            .parameterize("SELECT * FROM t WHERE x = 999")
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn in_lists_merge_by_default() {
        let parameterizer = SqlParameterizer::default();
        let out = parameterizer
            .parameterize("SELECT * FROM t WHERE id IN (1, 2, 3)")
            .unwrap();
        assert_eq!(out, "SELECT * FROM t WHERE id IN (?)");
    }

    #[test]
    fn in_list_merging_can_be_disabled() {
        let parameterizer = SqlParameterizer::new(ParameterizePolicy {
            merge_in_lists: false,
        });
        let out = parameterizer
            .parameterize("SELECT * FROM t WHERE id IN (1, 2, 3)")
            .unwrap();
        assert_eq!(out, "SELECT * FROM t WHERE id IN (?, ?, ?)");
    }

    #[test]
    fn predicate_branches_are_not_merged() {
        let parameterizer = SqlParameterizer::default();
        let out = parameterizer
            .parameterize("SELECT * FROM t WHERE a = 1 OR a = 2")
            .unwrap();
        assert_eq!(out, "SELECT * FROM t WHERE a = ? OR a = ?");
    }

    #[test]
    fn multiple_statements_are_joined() {
        let parameterizer = SqlParameterizer::default();
        let out = parameterizer
            .parameterize("SELECT 1; SELECT 2")
            .unwrap();
        assert_eq!(out, "SELECT ?; SELECT ?");
    }

    #[test]
    fn insert_values_are_parameterized() {
        let parameterizer = SqlParameterizer::default();
        let out = parameterizer
            .parameterize("INSERT INTO t (a, b) VALUES (1, 'x')")
            .unwrap();
        assert_eq!(out, "INSERT INTO t (a, b) VALUES (?, ?)");
    }

    #[test]
    fn malformed_sql_is_rejected() {
        let parameterizer = SqlParameterizer::default();
        assert!(matches!(
            parameterizer.parameterize("SELEKT everything"),
            Err(ParameterizeError::Parse(_))
        ));
    }

    #[test]
    fn empty_input_has_no_statement() {
        let parameterizer = SqlParameterizer::default();
        assert!(matches!(
            parameterizer.parameterize(""),
            Err(ParameterizeError::NoStatement)
        ));
    }
}
