//! Rendering of queries and data change statements.

use super::writer::{Render, Writer};
use crate::grammar::*;
use crate::value::Value;

impl Render for QuerySpecification {
    fn render(&self, w: &mut Writer<'_>) {
        w.push("SELECT ");
        if let Some(quantifier) = self.quantifier {
            w.push(quantifier.as_str());
            w.push(" ");
        }
        w.projection(true, |w| w.list(&self.select_list, ", "));
        w.projection(false, |w| self.table_expression.render(w));
    }
}

impl Render for DerivedColumn {
    fn render(&self, w: &mut Writer<'_>) {
        self.value.render(w);
        if let Some(alias) = &self.alias {
            w.push(" AS ");
            w.push(&alias.name);
        }
    }
}

impl Render for TableExpression {
    fn render(&self, w: &mut Writer<'_>) {
        if !self.from.is_empty() {
            w.clause("FROM ");
            w.list(&self.from, ", ");
        }
        if let Some(condition) = &self.where_clause {
            w.clause("WHERE ");
            condition.render(w);
        }
        if let Some(group_by) = &self.group_by {
            w.clause("GROUP BY ");
            w.list(&group_by.sets, ", ");
        }
        if let Some(condition) = &self.having {
            w.clause("HAVING ");
            condition.render(w);
        }
    }
}

impl Render for OrdinaryGroupingSet {
    fn render(&self, w: &mut Writer<'_>) {
        self.0.render(w);
    }
}

impl Render for CursorSpecification {
    fn render(&self, w: &mut Writer<'_>) {
        self.query.body.render(w);
        w.projection(false, |w| {
            if let Some(order_by) = &self.order_by {
                w.clause("ORDER BY ");
                w.list(&order_by.sort, ", ");
            }
            if let Some(limit) = &self.limit {
                w.clause("LIMIT ");
                w.bind(Value::UInt(limit.count));
                if let Some(offset) = limit.offset {
                    w.push(" OFFSET ");
                    w.bind(Value::UInt(offset));
                }
            }
        });
    }
}

impl Render for SortSpecification {
    fn render(&self, w: &mut Writer<'_>) {
        self.key.render(w);
        match self.ordering {
            Some(OrderingSpecification::Asc) => w.push(" ASC"),
            Some(OrderingSpecification::Desc) => w.push(" DESC"),
            None => {}
        }
        match self.nulls {
            Some(NullOrdering::First) => w.push(" NULLS FIRST"),
            Some(NullOrdering::Last) => w.push(" NULLS LAST"),
            None => {}
        }
    }
}

impl Render for Subquery {
    fn render(&self, w: &mut Writer<'_>) {
        w.push("(");
        w.projection(false, |w| self.0.render(w));
        w.push(")");
    }
}

impl Render for TableReference {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            TableReference::Primary(p) => p.render(w),
            TableReference::Joined(j) => j.render(w),
        }
    }
}

impl Render for TablePrimary {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            TablePrimary::Table { name, correlation } => render_table(name, correlation, w),
            TablePrimary::Derived {
                subquery,
                correlation,
            } => {
                subquery.render(w);
                w.push(" AS ");
                w.push(&correlation.name);
            }
        }
    }
}

impl Render for JoinedTable {
    fn render(&self, w: &mut Writer<'_>) {
        match self {
            JoinedTable::Qualified {
                left,
                right,
                join_type,
                on,
            } => {
                left.render(w);
                w.push(" ");
                w.push(join_type.keyword());
                w.push(" ");
                right.render(w);
                w.push(" ON ");
                on.render(w);
            }
            JoinedTable::Cross { left, right } => {
                left.render(w);
                w.push(" CROSS JOIN ");
                right.render(w);
            }
            JoinedTable::Natural {
                left,
                right,
                join_type,
            } => {
                left.render(w);
                w.push(" NATURAL ");
                w.push(join_type.keyword());
                w.push(" ");
                right.render(w);
            }
        }
    }
}

fn render_table(table: &str, correlation: &Option<Correlation>, w: &mut Writer<'_>) {
    w.push(table);
    if let Some(correlation) = correlation {
        w.push(" AS ");
        w.push(&correlation.name);
    }
}

impl Render for InsertStatement {
    fn render(&self, w: &mut Writer<'_>) {
        w.push("INSERT INTO ");
        w.push(&self.table);
        w.push(" (");
        w.push(&self.columns.join(", "));
        w.push(")");
        w.clause("VALUES (");
        w.list(&self.values, ", ");
        w.push(")");
    }
}

impl Render for UpdateStatementSearched {
    fn render(&self, w: &mut Writer<'_>) {
        w.push("UPDATE ");
        render_table(&self.table, &self.correlation, w);
        w.clause("SET ");
        for (i, (column, value)) in self.columns.iter().zip(&self.values).enumerate() {
            if i > 0 {
                w.push(", ");
            }
            w.push(column);
            w.push(" = ");
            value.render(w);
        }
        if let Some(condition) = &self.where_clause {
            w.clause("WHERE ");
            condition.render(w);
        }
    }
}

impl Render for DeleteStatementSearched {
    fn render(&self, w: &mut Writer<'_>) {
        w.push("DELETE FROM ");
        render_table(&self.table, &self.correlation, w);
        if let Some(condition) = &self.where_clause {
            w.clause("WHERE ");
            condition.render(w);
        }
    }
}
