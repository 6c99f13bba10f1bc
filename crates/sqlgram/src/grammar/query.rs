//! Query specifications, table references and cursor clauses.

use super::boolean::BooleanValueExpression;
use super::function::SetQuantifier;
use super::value::{
    ColumnReference, Correlation, NonParenthesizedValueExpressionPrimary, RowValueExpression,
    ValueExpression,
};

/// `SELECT [quantifier] <select list> <table expression>`
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpecification {
    pub quantifier: Option<SetQuantifier>,
    pub select_list: Vec<DerivedColumn>,
    pub table_expression: TableExpression,
}

impl QuerySpecification {
    /// Names under which the select list is visible to an enclosing query.
    ///
    /// Aliased items use their alias, bare column references their last
    /// identifier segment. Anonymous computed items are not addressable.
    pub fn output_names(&self) -> Vec<String> {
        self.select_list
            .iter()
            .filter_map(DerivedColumn::output_name)
            .map(str::to_string)
            .collect()
    }
}

/// A single select list item: `value [AS alias]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedColumn {
    pub value: ValueExpression,
    pub alias: Option<Correlation>,
}

impl DerivedColumn {
    pub fn new(value: ValueExpression) -> Self {
        Self { value, alias: None }
    }

    pub fn output_name(&self) -> Option<&str> {
        if let Some(alias) = &self.alias {
            return Some(&alias.name);
        }
        match &self.value {
            ValueExpression::Row(RowValueExpression::Primary(
                NonParenthesizedValueExpressionPrimary::ColumnReference(c),
            )) => match &c.correlation {
                Some(correlation) => Some(&correlation.name),
                None => c.chain.last(),
            },
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableExpression {
    pub from: Vec<TableReference>,
    pub where_clause: Option<BooleanValueExpression>,
    pub group_by: Option<GroupByClause>,
    pub having: Option<BooleanValueExpression>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupByClause {
    pub sets: Vec<OrdinaryGroupingSet>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrdinaryGroupingSet(pub ColumnReference);

#[derive(Debug, Clone, PartialEq)]
pub struct QueryExpression {
    pub body: QuerySpecification,
}

/// A query expression with optional ORDER BY and LIMIT.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorSpecification {
    pub query: QueryExpression,
    pub order_by: Option<OrderByClause>,
    pub limit: Option<LimitClause>,
}

impl From<QuerySpecification> for CursorSpecification {
    fn from(body: QuerySpecification) -> Self {
        CursorSpecification {
            query: QueryExpression { body },
            order_by: None,
            limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderByClause {
    pub sort: Vec<SortSpecification>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingSpecification {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullOrdering {
    First,
    Last,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortSpecification {
    pub key: ValueExpression,
    pub ordering: Option<OrderingSpecification>,
    pub nulls: Option<NullOrdering>,
}

impl SortSpecification {
    pub fn new(key: ValueExpression) -> Self {
        Self {
            key,
            ordering: None,
            nulls: None,
        }
    }

    pub fn asc(mut self) -> Self {
        self.ordering = Some(OrderingSpecification::Asc);
        self
    }

    pub fn desc(mut self) -> Self {
        self.ordering = Some(OrderingSpecification::Desc);
        self
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullOrdering::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullOrdering::Last);
        self
    }
}

/// `LIMIT count [OFFSET offset]`; both bound as parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitClause {
    pub count: u64,
    pub offset: Option<u64>,
}

/// A parenthesized query used as a value, IN list or derived table.
#[derive(Debug, Clone, PartialEq)]
pub struct Subquery(pub Box<CursorSpecification>);

impl From<CursorSpecification> for Subquery {
    fn from(c: CursorSpecification) -> Self {
        Subquery(Box::new(c))
    }
}

impl From<QuerySpecification> for Subquery {
    fn from(q: QuerySpecification) -> Self {
        CursorSpecification::from(q).into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableReference {
    Primary(TablePrimary),
    Joined(Box<JoinedTable>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TablePrimary {
    /// `name [AS correlation]`
    Table {
        name: String,
        correlation: Option<Correlation>,
    },
    /// `(subquery) AS correlation`
    Derived {
        subquery: Subquery,
        correlation: Correlation,
    },
}

impl TablePrimary {
    /// The name other clauses use to address this relation.
    pub fn exposed_name(&self) -> &str {
        match self {
            TablePrimary::Table {
                correlation: Some(c),
                ..
            } => &c.name,
            TablePrimary::Table { name, .. } => name,
            TablePrimary::Derived { correlation, .. } => &correlation.name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterJoinType {
    Left,
    Right,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// Plain `JOIN` with no qualifier
    Unspecified,
    Inner,
    Outer(OuterJoinType),
}

impl JoinType {
    pub fn keyword(self) -> &'static str {
        match self {
            JoinType::Unspecified => "JOIN",
            JoinType::Inner => "INNER JOIN",
            JoinType::Outer(OuterJoinType::Left) => "LEFT OUTER JOIN",
            JoinType::Outer(OuterJoinType::Right) => "RIGHT OUTER JOIN",
            JoinType::Outer(OuterJoinType::Full) => "FULL OUTER JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinedTable {
    Qualified {
        left: TableReference,
        right: TableReference,
        join_type: JoinType,
        on: BooleanValueExpression,
    },
    Cross {
        left: TableReference,
        right: TableReference,
    },
    Natural {
        left: TableReference,
        right: TableReference,
        join_type: JoinType,
    },
}

impl TableReference {
    /// Whether `name` is exposed anywhere in this reference, including
    /// either side of a join.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            TableReference::Primary(p) => p.exposed_name() == name,
            TableReference::Joined(j) => {
                let (left, right) = j.sides();
                left.contains(name) || right.contains(name)
            }
        }
    }

    /// True for a standalone (non-joined) entry named `name`.
    pub fn is_primary_named(&self, name: &str) -> bool {
        matches!(self, TableReference::Primary(p) if p.exposed_name() == name)
    }
}

impl JoinedTable {
    pub fn sides(&self) -> (&TableReference, &TableReference) {
        match self {
            JoinedTable::Qualified { left, right, .. }
            | JoinedTable::Cross { left, right }
            | JoinedTable::Natural { left, right, .. } => (left, right),
        }
    }
}

impl From<TablePrimary> for TableReference {
    fn from(p: TablePrimary) -> Self {
        TableReference::Primary(p)
    }
}

impl From<JoinedTable> for TableReference {
    fn from(j: JoinedTable) -> Self {
        TableReference::Joined(Box::new(j))
    }
}
