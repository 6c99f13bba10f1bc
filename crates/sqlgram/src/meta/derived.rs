use std::collections::BTreeMap;
use std::sync::Arc;

use super::column::Column;
use super::lookup;
use super::table::RelationRef;
use crate::grammar::CursorSpecification;

/// The named subquery behind a [`DerivedTable`], shared by its columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedSource {
    pub name: String,
    pub query: CursorSpecification,
}

/// A finished SELECT usable as a FROM entry: `(SELECT ...) AS name`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTable {
    source: Arc<DerivedSource>,
    columns: BTreeMap<String, Column>,
}

impl DerivedTable {
    /// Wrap `query` under `name`, exposing its addressable select list items
    /// as columns.
    ///
    /// Columns are keyed by output name, so items that share one (`users.id`
    /// and `articles.id`) expose a single column. Alias one of them to keep
    /// both addressable.
    pub fn new(name: impl Into<String>, query: CursorSpecification) -> Self {
        let names = query.query.body.output_names();
        let source = Arc::new(DerivedSource {
            name: name.into(),
            query,
        });
        let owner = RelationRef::Derived(Arc::clone(&source));
        let columns = names
            .into_iter()
            .map(|n| (n.clone(), Column::new(n, owner.clone())))
            .collect();
        Self { source, columns }
    }

    pub fn name(&self) -> &str {
        &self.source.name
    }

    pub fn query(&self) -> &CursorSpecification {
        &self.source.query
    }

    pub fn c(&self, name: &str) -> Option<&Column> {
        lookup(&self.columns, name)
    }

    pub fn columns_sorted(&self) -> Vec<&Column> {
        self.columns.values().collect()
    }

    pub fn relation(&self) -> RelationRef {
        RelationRef::Derived(Arc::clone(&self.source))
    }
}
