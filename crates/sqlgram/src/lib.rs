//! # sqlgram
//!
//! A composable SQL query builder modelled on the SQL-92 grammar.
//!
//! ## Features
//!
//! - **Grammar first**: statements are trees of SQL-92 productions, so an
//!   expression can only appear where the grammar allows it
//! - **Loose inputs**: constructors accept tables, columns, literals,
//!   aggregates and nested selections, and promote them to the node each
//!   position needs
//! - **Automatic FROM**: any relation a SELECT mentions is added to FROM once
//! - **Parameters only**: literals never reach the SQL text; they are bound
//!   as `?` or `$N` depending on the dialect
//!
//! ## Example
//!
//! ```ignore
//! use sqlgram::prelude::*;
//!
//! let mut meta = Meta::new();
//! meta.add_table("users").add_column("id").add_column("name");
//! let users = meta.t("users").unwrap();
//!
//! let (sql, params) = select([users])
//!     .where_(equal(users.c("name").unwrap(), "foo"))
//!     .to_sql_args();
//!
//! assert_eq!(sql, "SELECT users.id, users.name FROM users WHERE users.name = ?");
//! assert_eq!(params, vec![Value::from("foo")]);
//! ```

#[macro_use]
mod macros;

pub mod coerce;
pub mod error;
pub mod expr;
pub mod grammar;
pub mod ident;
pub mod meta;
pub mod prelude;
pub mod render;
pub mod stmt;
pub mod value;

pub use error::{BuildError, BuildResult, CoercionError, Misuse};
pub use ident::Ident;
pub use meta::{Column, DerivedTable, Meta, Table};
pub use render::{AsStatement, Builder, Dialect, Options, StatementRef};
pub use stmt::{
    DeleteStatement, InsertStatement, Selection, UpdateStatement, delete, insert, select, update,
};
pub use value::Value;

#[cfg(feature = "postgres")]
pub use value::params_ref;
