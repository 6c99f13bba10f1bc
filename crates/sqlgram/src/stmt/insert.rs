use std::collections::BTreeMap;

use crate::coerce::{self, Operand, must};
use crate::error::{BuildError, BuildResult};
use crate::grammar::ValueExpression;
use crate::meta::Table;

pub use crate::grammar::InsertStatement;

/// Resolve a values map against `table`, sorted by column name.
///
/// Keys are looked up case-insensitively; when several keys name the same
/// column the last one wins.
pub(crate) fn resolve_values<I, K, V>(
    function: &'static str,
    table: &Table,
    values: I,
) -> BuildResult<(Vec<String>, Vec<ValueExpression>)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Operand>,
{
    let mut resolved: BTreeMap<String, Operand> = BTreeMap::new();
    for (key, value) in values {
        let key = key.into();
        let column = table
            .c(&key)
            .ok_or_else(|| BuildError::unknown_column(table.name(), &key))?;
        resolved.insert(column.name().to_string(), value.into());
    }
    if resolved.is_empty() {
        return Err(BuildError::NoValues);
    }

    let mut columns = Vec::with_capacity(resolved.len());
    let mut exprs = Vec::with_capacity(resolved.len());
    for (column, value) in resolved {
        columns.push(column);
        exprs.push(must(function, "values", coerce::value_expression(value)));
    }
    Ok((columns, exprs))
}

/// `INSERT INTO table (...) VALUES (...)` with columns in name order.
///
/// Fails with [`BuildError::TableRequired`] when `table` is `None`,
/// [`BuildError::NoValues`] for an empty map and
/// [`BuildError::UnknownColumn`] for a key that is not a column of `table`.
pub fn insert<'a, I, K, V>(
    table: impl Into<Option<&'a Table>>,
    values: I,
) -> BuildResult<InsertStatement>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Operand>,
{
    let table = table.into().ok_or(BuildError::TableRequired)?;
    let (columns, values) = resolve_values("insert", table, values)?;
    Ok(InsertStatement {
        table: table.name().to_string(),
        columns,
        values,
    })
}
