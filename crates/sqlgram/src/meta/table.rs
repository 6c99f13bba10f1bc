use std::collections::BTreeMap;
use std::sync::Arc;

use super::column::Column;
use super::derived::DerivedSource;
use super::lookup;
use crate::error::BuildResult;
use crate::grammar::{Correlation, Subquery, TablePrimary, TableReference};
use crate::stmt::{self, DeleteStatement, InsertStatement, Selection, UpdateStatement};

/// Handle to the relation a column belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationRef {
    Table {
        name: String,
        alias: Option<String>,
    },
    Derived(Arc<DerivedSource>),
}

impl RelationRef {
    /// Name exposed to other clauses: the alias if any.
    pub fn name(&self) -> &str {
        match self {
            RelationRef::Table {
                alias: Some(alias), ..
            } => alias,
            RelationRef::Table { name, .. } => name,
            RelationRef::Derived(source) => &source.name,
        }
    }

    /// FROM entry for this relation.
    pub fn table_reference(&self) -> TableReference {
        match self {
            RelationRef::Table { name, alias } => TablePrimary::Table {
                name: name.clone(),
                correlation: alias.as_ref().map(Correlation::new),
            },
            RelationRef::Derived(source) => TablePrimary::Derived {
                subquery: Subquery::from(source.query.clone()),
                correlation: Correlation::new(&source.name),
            },
        }
        .into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    alias: Option<String>,
    columns: BTreeMap<String, Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            columns: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Alias if set, otherwise the table name.
    pub fn effective_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn add_column(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        let column = Column::new(name.clone(), self.relation());
        self.columns.insert(name, column);
        self
    }

    /// Look up a column, falling back to a case-insensitive match.
    pub fn c(&self, name: &str) -> Option<&Column> {
        lookup(&self.columns, name)
    }

    pub fn columns_sorted(&self) -> Vec<&Column> {
        self.columns.values().collect()
    }

    /// Copy of this table under `alias`; its columns qualify with the alias.
    pub fn alias(&self, alias: impl Into<String>) -> Table {
        let mut aliased = Table {
            name: self.name.clone(),
            alias: Some(alias.into()),
            columns: BTreeMap::new(),
        };
        let owner = aliased.relation();
        aliased.columns = self
            .columns
            .keys()
            .map(|name| (name.clone(), Column::new(name.clone(), owner.clone())))
            .collect();
        aliased
    }

    pub fn relation(&self) -> RelationRef {
        RelationRef::Table {
            name: self.name.clone(),
            alias: self.alias.clone(),
        }
    }

    /// `SELECT` every column of this table.
    pub fn select(&self) -> Selection {
        stmt::select([self])
    }

    pub fn insert<I, K, V>(&self, values: I) -> BuildResult<InsertStatement>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<crate::coerce::Operand>,
    {
        stmt::insert(self, values)
    }

    pub fn update<I, K, V>(&self, values: I) -> BuildResult<UpdateStatement>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<crate::coerce::Operand>,
    {
        stmt::update(self, values)
    }

    pub fn delete(&self) -> BuildResult<DeleteStatement> {
        stmt::delete(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Table {
        let mut t = Table::new("users");
        t.add_column("id").add_column("name");
        t
    }

    #[test]
    fn alias_requalifies_columns() {
        let u = users().alias("u");
        assert_eq!(u.effective_name(), "u");
        assert_eq!(u.name(), "users");
        let id = u.c("id").unwrap();
        assert_eq!(id.owner().name(), "u");
        assert_eq!(id.identifier_chain().segments(), ["u", "id"]);
    }

    #[test]
    fn columns_sorted_by_name() {
        let mut t = Table::new("t");
        t.add_column("b").add_column("a").add_column("c");
        let names: Vec<_> = t.columns_sorted().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn aliased_table_reference_has_correlation() {
        let reference = users().alias("u").relation().table_reference();
        assert_eq!(
            reference,
            TableReference::Primary(TablePrimary::Table {
                name: "users".into(),
                correlation: Some(Correlation::new("u")),
            })
        );
    }
}
