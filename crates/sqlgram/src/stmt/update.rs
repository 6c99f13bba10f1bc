use crate::coerce::{self, Operand, must};
use crate::error::{BuildError, BuildResult};
use crate::grammar::{Correlation, UpdateStatementSearched};
use crate::meta::Table;

use super::insert::resolve_values;

/// `UPDATE table SET ... [WHERE ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    statement: UpdateStatementSearched,
}

/// Start an UPDATE assigning `values`, with columns in name order.
///
/// Fails like [`insert`](super::insert).
pub fn update<'a, I, K, V>(
    table: impl Into<Option<&'a Table>>,
    values: I,
) -> BuildResult<UpdateStatement>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Operand>,
{
    let table = table.into().ok_or(BuildError::TableRequired)?;
    let (columns, values) = resolve_values("update", table, values)?;
    Ok(UpdateStatement {
        statement: UpdateStatementSearched {
            table: table.name().to_string(),
            correlation: table.alias_name().map(Correlation::new),
            columns,
            values,
            where_clause: None,
        },
    })
}

impl UpdateStatement {
    /// Add a search condition, ANDed with any existing one.
    pub fn where_(mut self, condition: impl Into<Operand>) -> Self {
        let condition = must(
            "where",
            "condition",
            coerce::boolean_value_expression(condition.into()),
        );
        self.statement.where_clause = Some(match self.statement.where_clause.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    pub fn statement(&self) -> &UpdateStatementSearched {
        &self.statement
    }
}
