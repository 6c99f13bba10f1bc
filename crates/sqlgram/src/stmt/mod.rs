//! Statement builders.
//!
//! - [`select`] - SELECT with automatic FROM, joins, grouping and cursor clauses
//! - [`insert`] - INSERT INTO ... VALUES
//! - [`update`] - UPDATE ... SET ... WHERE
//! - [`delete`] - DELETE FROM ... WHERE

mod delete;
mod insert;
mod select;
mod update;

pub use delete::{DeleteStatement, delete};
pub use insert::{InsertStatement, insert};
pub use select::{SelectRoot, Selection, select};
pub use update::{UpdateStatement, update};
