use super::table::RelationRef;
use crate::grammar::{
    ColumnReference, Correlation, IdentifierChain, NonParenthesizedValueExpressionPrimary,
    SortSpecification,
};

/// A named column owned by a table or derived table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    alias: Option<String>,
    owner: RelationRef,
}

impl Column {
    pub(crate) fn new(name: String, owner: RelationRef) -> Self {
        Self {
            name,
            alias: None,
            owner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn owner(&self) -> &RelationRef {
        &self.owner
    }

    /// Copy of this column projected under `alias`.
    pub fn alias(&self, alias: impl Into<String>) -> Column {
        Column {
            alias: Some(alias.into()),
            ..self.clone()
        }
    }

    /// `[owner, column]`, qualified by the owner's alias when it has one.
    pub fn identifier_chain(&self) -> IdentifierChain {
        IdentifierChain(vec![self.owner.name().to_string(), self.name.clone()])
    }

    /// Reference for predicate and expression positions; never aliased.
    pub fn reference(&self) -> ColumnReference {
        ColumnReference {
            chain: self.identifier_chain(),
            correlation: None,
            source: Some(self.owner.clone()),
        }
    }

    /// Reference for a select list item, carrying the projection alias.
    pub fn projection(&self) -> ColumnReference {
        ColumnReference {
            correlation: self.alias.as_ref().map(Correlation::new),
            ..self.reference()
        }
    }

    pub fn asc(&self) -> SortSpecification {
        self.sort().asc()
    }

    pub fn desc(&self) -> SortSpecification {
        self.sort().desc()
    }

    fn sort(&self) -> SortSpecification {
        SortSpecification::new(
            NonParenthesizedValueExpressionPrimary::ColumnReference(self.reference()).into(),
        )
    }
}
