//! Schema metadata: tables, columns and derived tables.
//!
//! Columns carry a handle to the relation that owns them so that any
//! expression mentioning a column knows which FROM entry it needs.

mod column;
mod derived;
mod table;

pub use column::Column;
pub use derived::{DerivedSource, DerivedTable};
pub use table::{RelationRef, Table};

use std::collections::BTreeMap;

/// A collection of tables keyed by name.
#[derive(Debug, Clone, Default)]
pub struct Meta {
    tables: BTreeMap<String, Table>,
}

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a table and return it for column registration.
    pub fn add_table(&mut self, name: impl Into<String>) -> &mut Table {
        let name = name.into();
        self.tables
            .entry(name.clone())
            .or_insert_with(|| Table::new(name))
    }

    /// Look up a table, falling back to a case-insensitive match.
    pub fn t(&self, name: &str) -> Option<&Table> {
        lookup(&self.tables, name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }
}

/// Exact match first, then Unicode case folding.
pub(crate) fn lookup<'a, V>(map: &'a BTreeMap<String, V>, name: &str) -> Option<&'a V> {
    map.get(name).or_else(|| {
        let folded = name.to_lowercase();
        map.iter()
            .find(|(key, _)| key.to_lowercase() == folded)
            .map(|(_, v)| v)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_table_is_idempotent() {
        let mut meta = Meta::new();
        meta.add_table("users").add_column("id");
        meta.add_table("users").add_column("name");
        let users = meta.t("users").unwrap();
        assert_eq!(users.columns_sorted().len(), 2);
        assert_eq!(meta.tables().count(), 1);
    }

    #[test]
    fn lookup_folds_case() {
        let mut meta = Meta::new();
        meta.add_table("Users").add_column("Name");
        let users = meta.t("USERS").unwrap();
        assert_eq!(users.name(), "Users");
        assert_eq!(users.c("name").unwrap().name(), "Name");
        assert!(meta.t("posts").is_none());
    }

    #[test]
    fn exact_match_wins_over_folded() {
        let mut meta = Meta::new();
        meta.add_table("a");
        meta.add_table("A");
        assert_eq!(meta.t("A").unwrap().name(), "A");
        assert_eq!(meta.t("a").unwrap().name(), "a");
    }
}
