//! SELECT builder.

use std::collections::BTreeMap;

use crate::coerce::{self, Operand, must};
use crate::error::{CoercionError, Misuse, fatal};
use crate::grammar::*;
use crate::meta::{Column, DerivedTable, RelationRef};

/// The statement a [`Selection`] has built so far.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectRoot {
    Query(QuerySpecification),
    /// Promoted by ORDER BY or LIMIT.
    Cursor(CursorSpecification),
}

impl SelectRoot {
    pub fn query_specification(&self) -> &QuerySpecification {
        match self {
            SelectRoot::Query(q) => q,
            SelectRoot::Cursor(c) => &c.query.body,
        }
    }

    fn query_specification_mut(&mut self) -> &mut QuerySpecification {
        match self {
            SelectRoot::Query(q) => q,
            SelectRoot::Cursor(c) => &mut c.query.body,
        }
    }

    pub fn to_cursor(&self) -> CursorSpecification {
        match self {
            SelectRoot::Query(q) => q.clone().into(),
            SelectRoot::Cursor(c) => c.clone(),
        }
    }
}

fn empty_query() -> QuerySpecification {
    QuerySpecification {
        quantifier: None,
        select_list: Vec::new(),
        table_expression: TableExpression::default(),
    }
}

/// Fluent SELECT builder.
///
/// FROM is maintained automatically: every relation a projected column,
/// WHERE/HAVING condition or ORDER BY key refers to is added once, keyed by
/// its exposed name. Joins replace the FROM entry their ON condition anchors
/// to.
///
/// # Example
///
/// ```ignore
/// use sqlgram::prelude::*;
///
/// let sql = select([&users])
///     .where_(equal(users.c("name").unwrap(), "foo"))
///     .to_sql_args();
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    root: Option<SelectRoot>,
    columns: BTreeMap<String, Column>,
    derived_seq: usize,
}

/// Start a SELECT projecting `items`.
///
/// Tables expand to all their columns in name order. Derived tables and
/// nested selections become FROM subqueries; unnamed ones are called
/// `derived0`, `derived1`, ... Columns, aggregates and string functions are
/// projected with their alias. Anything else is coerced to a value
/// expression.
pub fn select<I>(items: I) -> Selection
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    let mut selection = Selection::default();
    for item in items {
        selection.push_item(item.into());
    }
    selection
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one more item to the select list.
    pub fn column(mut self, item: impl Into<Operand>) -> Self {
        self.push_item(item.into());
        self
    }

    pub fn root(&self) -> Option<&SelectRoot> {
        self.root.as_ref()
    }

    pub fn query(&self) -> Option<&QuerySpecification> {
        self.root.as_ref().map(SelectRoot::query_specification)
    }

    pub fn cursor(&self) -> Option<CursorSpecification> {
        self.root.as_ref().map(SelectRoot::to_cursor)
    }

    pub fn subquery(&self) -> Option<Subquery> {
        self.cursor().map(Subquery::from)
    }

    /// Projected column by name (or projection alias).
    pub fn c(&self, name: &str) -> Option<&Column> {
        crate::meta::lookup(&self.columns, name)
    }

    pub fn columns_sorted(&self) -> Vec<&Column> {
        self.columns.values().collect()
    }

    /// Add a search condition, ANDed with any existing one.
    pub fn where_(mut self, condition: impl Into<Operand>) -> Self {
        let condition = must(
            "where",
            "condition",
            coerce::boolean_value_expression(condition.into()),
        );
        let referred = condition.referred();
        let table_expression = &mut self.query_mut().table_expression;
        table_expression.where_clause = Some(match table_expression.where_clause.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self.add_from(&referred);
        self
    }

    pub fn group_by<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let columns: Vec<ColumnReference> = columns
            .into_iter()
            .map(|c| must("group_by", "columns", coerce::column_reference(c.into())))
            .collect();
        let referred = columns.referred();
        let group_by = self
            .query_mut()
            .table_expression
            .group_by
            .get_or_insert_with(GroupByClause::default);
        group_by
            .sets
            .extend(columns.into_iter().map(OrdinaryGroupingSet));
        self.add_from(&referred);
        self
    }

    /// Add a HAVING condition, ANDed with any existing one.
    pub fn having(mut self, condition: impl Into<Operand>) -> Self {
        let condition = must(
            "having",
            "condition",
            coerce::boolean_value_expression(condition.into()),
        );
        let referred = condition.referred();
        let table_expression = &mut self.query_mut().table_expression;
        table_expression.having = Some(match table_expression.having.take() {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self.add_from(&referred);
        self
    }

    pub fn order_by<I>(mut self, specs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        let specs: Vec<SortSpecification> = specs
            .into_iter()
            .map(|s| must("order_by", "specs", coerce::sort_specification(s.into())))
            .collect();
        let referred = specs.referred();
        self.cursor_mut()
            .order_by
            .get_or_insert_with(OrderByClause::default)
            .sort
            .extend(specs);
        self.add_from(&referred);
        self
    }

    pub fn limit(mut self, count: u64) -> Self {
        self.cursor_mut().limit = Some(LimitClause {
            count,
            offset: None,
        });
        self
    }

    pub fn limit_with_offset(mut self, count: u64, offset: u64) -> Self {
        self.cursor_mut().limit = Some(LimitClause {
            count,
            offset: Some(offset),
        });
        self
    }

    /// Replace the select list with `COUNT(*)`.
    pub fn count(mut self) -> Self {
        self.query_mut().select_list = vec![DerivedColumn::new(
            NonParenthesizedValueExpressionPrimary::SetFunction(AggregateFunction::CountStar)
                .into(),
        )];
        self.columns.clear();
        self
    }

    /// `SELECT DISTINCT`
    pub fn distinct(mut self) -> Self {
        self.query_mut().quantifier = Some(SetQuantifier::Distinct);
        self
    }

    /// Name this selection for use as a derived table.
    pub fn alias(&self, name: impl Into<String>) -> DerivedTable {
        match &self.root {
            Some(root) => DerivedTable::new(name, root.to_cursor()),
            None => fatal(Misuse::NoSelect),
        }
    }

    /// `JOIN target ON on`
    pub fn join(self, target: impl Into<Operand>, on: impl Into<Operand>) -> Self {
        self.qualified_join("join", JoinType::Unspecified, target.into(), on.into())
    }

    pub fn inner_join(self, target: impl Into<Operand>, on: impl Into<Operand>) -> Self {
        self.qualified_join("inner_join", JoinType::Inner, target.into(), on.into())
    }

    pub fn outer_join(
        self,
        target: impl Into<Operand>,
        on: impl Into<Operand>,
        kind: OuterJoinType,
    ) -> Self {
        self.qualified_join("outer_join", JoinType::Outer(kind), target.into(), on.into())
    }

    pub fn left_join(self, target: impl Into<Operand>, on: impl Into<Operand>) -> Self {
        self.outer_join(target, on, OuterJoinType::Left)
    }

    pub fn right_join(self, target: impl Into<Operand>, on: impl Into<Operand>) -> Self {
        self.outer_join(target, on, OuterJoinType::Right)
    }

    pub fn full_join(self, target: impl Into<Operand>, on: impl Into<Operand>) -> Self {
        self.outer_join(target, on, OuterJoinType::Full)
    }

    /// `CROSS JOIN target` against the last FROM entry.
    pub fn cross_join(self, target: impl Into<Operand>) -> Self {
        self.unconditional_join("cross_join", target.into(), |left, right| {
            JoinedTable::Cross { left, right }
        })
    }

    /// `NATURAL JOIN target` against the last FROM entry.
    pub fn natural_join(self, target: impl Into<Operand>) -> Self {
        self.unconditional_join("natural_join", target.into(), |left, right| {
            JoinedTable::Natural {
                left,
                right,
                join_type: JoinType::Unspecified,
            }
        })
    }

    fn qualified_join(
        mut self,
        function: &'static str,
        join_type: JoinType,
        target: Operand,
        on: Operand,
    ) -> Self {
        if self.root.is_none() {
            fatal(Misuse::NoSelect);
        }
        let target = self.join_target(function, target);
        let on = must(function, "on", coerce::boolean_value_expression(on));
        let target_name = target.name().to_string();
        let referents: Vec<RelationRef> = on
            .referred()
            .into_iter()
            .filter(|r| r.name() != target_name)
            .collect();

        let from = &mut self.query_mut().table_expression.from;
        from.retain(|t| !t.is_primary_named(&target_name));
        let missing: Vec<TableReference> = referents
            .iter()
            .filter(|r| !from.iter().any(|t| t.contains(r.name())))
            .map(RelationRef::table_reference)
            .collect();
        let Some(anchor) = from
            .iter()
            .position(|t| referents.iter().any(|r| t.contains(r.name())))
        else {
            fatal(Misuse::UnknownJoinTarget {
                target: target_name,
                referents: referents.iter().map(|r| r.name().to_string()).collect(),
            });
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlgram.select",
            join = join_type.keyword(),
            relation = %target_name,
            anchor,
            merged = missing.len(),
            "anchored join"
        );

        // ON may only name relations declared to its left: every FROM entry
        // it mentions and every relation missing from FROM is cross joined
        // onto the anchor.
        let first = from.remove(anchor);
        let (mentioned, mut rest): (Vec<_>, Vec<_>) = std::mem::take(from)
            .into_iter()
            .partition(|t| referents.iter().any(|r| t.contains(r.name())));
        let left = mentioned
            .into_iter()
            .chain(missing)
            .fold(first, |left, right| JoinedTable::Cross { left, right }.into());
        rest.insert(
            anchor,
            JoinedTable::Qualified {
                left,
                right: target.table_reference(),
                join_type,
                on,
            }
            .into(),
        );
        *from = rest;
        self
    }

    fn unconditional_join(
        mut self,
        function: &'static str,
        target: Operand,
        join: impl FnOnce(TableReference, TableReference) -> JoinedTable,
    ) -> Self {
        if self.root.is_none() {
            fatal(Misuse::NoSelect);
        }
        let target = self.join_target(function, target);
        let from = &mut self.query_mut().table_expression.from;
        from.retain(|t| !t.is_primary_named(target.name()));
        match from.pop() {
            Some(left) => from.push(join(left, target.table_reference()).into()),
            None => from.push(target.table_reference()),
        }
        self
    }

    fn join_target(&mut self, function: &'static str, target: Operand) -> RelationRef {
        match target {
            Operand::Table(t) => t.relation(),
            Operand::DerivedTable(d) => d.relation(),
            Operand::Selection(s) => self.derive(&s).relation(),
            other => fatal(Misuse::Coercion {
                function,
                argument: "target",
                source: CoercionError::new("TableReference", other.kind()),
            }),
        }
    }

    fn push_item(&mut self, item: Operand) {
        match item {
            Operand::Table(t) => self.project_all(&t.relation(), t.columns_sorted()),
            Operand::DerivedTable(d) => self.project_all(&d.relation(), d.columns_sorted()),
            Operand::Selection(s) => {
                let derived = self.derive(&s);
                self.project_all(&derived.relation(), derived.columns_sorted());
            }
            Operand::Query(q) => {
                let derived = DerivedTable::new(self.next_derived_name(), (*q).into());
                self.project_all(&derived.relation(), derived.columns_sorted());
            }
            Operand::Column(c) => self.project_column(&c),
            Operand::Aggregate(a) => {
                let (function, alias) = a.into_parts();
                self.project_value(
                    NonParenthesizedValueExpressionPrimary::SetFunction(function).into(),
                    alias,
                );
            }
            Operand::StringFunction(f) => {
                let (function, alias) = f.into_parts();
                self.project_value(
                    CommonValueExpression::from(CharacterValueExpression::from(function)).into(),
                    alias,
                );
            }
            other => {
                let value = must("select", "items", coerce::value_expression(other));
                self.project_value(value, None);
            }
        }
    }

    fn project_all(&mut self, relation: &RelationRef, columns: Vec<&Column>) {
        self.query_or_init();
        self.add_from(std::slice::from_ref(relation));
        for column in columns {
            self.project_column(column);
        }
    }

    fn project_column(&mut self, column: &Column) {
        self.query_or_init().select_list.push(DerivedColumn::new(
            NonParenthesizedValueExpressionPrimary::ColumnReference(column.projection()).into(),
        ));
        self.add_from(std::slice::from_ref(column.owner()));
        let key = column.alias_name().unwrap_or(column.name()).to_string();
        self.columns.insert(key, column.clone());
    }

    fn project_value(&mut self, value: ValueExpression, alias: Option<String>) {
        let referred = value.referred();
        self.query_or_init().select_list.push(DerivedColumn {
            value,
            alias: alias.map(Correlation::new),
        });
        self.add_from(&referred);
    }

    fn derive(&mut self, nested: &Selection) -> DerivedTable {
        match nested.cursor() {
            Some(cursor) => DerivedTable::new(self.next_derived_name(), cursor),
            None => fatal(Misuse::NoSelect),
        }
    }

    /// Next `derivedN` not already exposed in FROM.
    fn next_derived_name(&mut self) -> String {
        loop {
            let name = format!("derived{}", self.derived_seq);
            self.derived_seq += 1;
            let taken = self
                .query()
                .is_some_and(|q| q.table_expression.from.iter().any(|t| t.contains(&name)));
            if !taken {
                return name;
            }
        }
    }

    fn query_or_init(&mut self) -> &mut QuerySpecification {
        self.root
            .get_or_insert_with(|| SelectRoot::Query(empty_query()))
            .query_specification_mut()
    }

    fn query_mut(&mut self) -> &mut QuerySpecification {
        match &mut self.root {
            Some(root) => root.query_specification_mut(),
            None => fatal(Misuse::NoSelect),
        }
    }

    fn cursor_mut(&mut self) -> &mut CursorSpecification {
        let root = match self.root.take() {
            Some(SelectRoot::Query(q)) => SelectRoot::Cursor(q.into()),
            Some(cursor) => cursor,
            None => fatal(Misuse::NoSelect),
        };
        match self.root.insert(root) {
            SelectRoot::Cursor(c) => c,
            SelectRoot::Query(_) => unreachable!("root was promoted to a cursor"),
        }
    }

    fn add_from(&mut self, relations: &[RelationRef]) {
        let from = &mut self.query_or_init().table_expression.from;
        for relation in relations {
            if !from.iter().any(|t| t.contains(relation.name())) {
                from.push(relation.table_reference());
            }
        }
    }
}
