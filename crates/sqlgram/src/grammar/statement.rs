//! Data change statements.

use super::boolean::BooleanValueExpression;
use super::value::{Correlation, ValueExpression};

/// `INSERT INTO t (c1, ...) VALUES (v1, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<ValueExpression>,
}

/// `UPDATE t [AS a] SET c1 = v1, ... [WHERE ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatementSearched {
    pub table: String,
    pub correlation: Option<Correlation>,
    pub columns: Vec<String>,
    pub values: Vec<ValueExpression>,
    pub where_clause: Option<BooleanValueExpression>,
}

/// `DELETE FROM t [AS a] [WHERE ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatementSearched {
    pub table: String,
    pub correlation: Option<Correlation>,
    pub where_clause: Option<BooleanValueExpression>,
}
