//! Rendering engine.
//!
//! A single walk over a statement produces SQL text and the positional
//! parameter list. Every literal becomes a parameter: `?` for MySQL, T-SQL,
//! SQLite and Unknown, `$N` (1-based) for PostgreSQL.
//!
//! # Example
//!
//! ```ignore
//! use sqlgram::prelude::*;
//!
//! let (sql, params) = Builder::new()
//!     .with_dialect(Dialect::PostgreSql)
//!     .string_args(&select([&users]).where_(equal(users.c("id").unwrap(), 1)));
//! assert_eq!(sql, "SELECT users.id, users.name FROM users WHERE users.id = $1");
//! ```

mod expr;
mod options;
mod query;
mod writer;

pub use options::{Dialect, Options};

use writer::{Render, Writer};

use crate::error::{Misuse, fatal};
use crate::grammar::{
    CursorSpecification, DeleteStatementSearched, InsertStatement, QuerySpecification,
    UpdateStatementSearched,
};
use crate::stmt::{DeleteStatement, SelectRoot, Selection, UpdateStatement};
use crate::value::Value;

/// A borrowed top-level statement ready to render.
#[derive(Debug, Clone, Copy)]
pub enum StatementRef<'a> {
    Query(&'a QuerySpecification),
    Cursor(&'a CursorSpecification),
    Insert(&'a InsertStatement),
    Update(&'a UpdateStatementSearched),
    Delete(&'a DeleteStatementSearched),
}

/// Anything [`Builder::string_args`] can render.
pub trait AsStatement {
    fn as_statement(&self) -> StatementRef<'_>;

    /// Render with default options (MySQL markers, single-space clauses).
    fn to_sql_args(&self) -> (String, Vec<Value>) {
        Builder::new().string_args(self)
    }
}

impl AsStatement for QuerySpecification {
    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Query(self)
    }
}

impl AsStatement for CursorSpecification {
    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Cursor(self)
    }
}

impl AsStatement for SelectRoot {
    fn as_statement(&self) -> StatementRef<'_> {
        match self {
            SelectRoot::Query(q) => StatementRef::Query(q),
            SelectRoot::Cursor(c) => StatementRef::Cursor(c),
        }
    }
}

impl AsStatement for Selection {
    fn as_statement(&self) -> StatementRef<'_> {
        match self.root() {
            Some(root) => root.as_statement(),
            None => fatal(Misuse::EmptyStatement(
                "selection has no query specification",
            )),
        }
    }
}

impl AsStatement for InsertStatement {
    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Insert(self)
    }
}

impl AsStatement for UpdateStatementSearched {
    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Update(self)
    }
}

impl AsStatement for UpdateStatement {
    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Update(self.statement())
    }
}

impl AsStatement for DeleteStatementSearched {
    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Delete(self)
    }
}

impl AsStatement for DeleteStatement {
    fn as_statement(&self) -> StatementRef<'_> {
        StatementRef::Delete(self.statement())
    }
}

impl<T: AsStatement + ?Sized> AsStatement for &T {
    fn as_statement(&self) -> StatementRef<'_> {
        (**self).as_statement()
    }
}

impl<T: AsStatement + ?Sized> AsStatement for Box<T> {
    fn as_statement(&self) -> StatementRef<'_> {
        (**self).as_statement()
    }
}

/// Renders statements to SQL text plus parameters.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    options: Options,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.options.dialect = dialect;
        self
    }

    pub fn with_separate_clause_with(mut self, separator: impl Into<String>) -> Self {
        self.options.separate_clause_with = separator.into();
        self
    }

    pub fn with_prefix_with(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix_with = prefix.into();
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Render `statement` into SQL text and its parameters in marker order.
    pub fn string_args<S: AsStatement + ?Sized>(&self, statement: &S) -> (String, Vec<Value>) {
        let mut w = Writer::new(&self.options);
        match statement.as_statement() {
            StatementRef::Query(q) => q.render(&mut w),
            StatementRef::Cursor(c) => c.render(&mut w),
            StatementRef::Insert(i) => i.render(&mut w),
            StatementRef::Update(u) => u.render(&mut w),
            StatementRef::Delete(d) => d.render(&mut w),
        }
        let (sql, params) = w.finish();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sqlgram.sql",
            dialect = %self.options.dialect,
            param_count = params.len(),
            sql = %sql,
            "rendered statement"
        );

        (sql, params)
    }
}
