use crate::coerce::{self, Operand, must};
use crate::error::{BuildError, BuildResult};
use crate::grammar::{Correlation, DeleteStatementSearched};
use crate::meta::Table;

/// `DELETE FROM table [WHERE ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteStatement {
    statement: DeleteStatementSearched,
}

pub fn delete<'a>(table: impl Into<Option<&'a Table>>) -> BuildResult<DeleteStatement> {
    let table = table.into().ok_or(BuildError::TableRequired)?;
    Ok(DeleteStatement {
        statement: DeleteStatementSearched {
            table: table.name().to_string(),
            correlation: table.alias_name().map(Correlation::new),
            where_clause: None,
        },
    })
}

impl DeleteStatement {
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

    pub fn statement(&self) -> &DeleteStatementSearched {
        &self.statement
    }
}
