//! SQL-92 grammar nodes.
//!
//! Every statement the builders produce is a tree of these types. Each
//! production is its own Rust type so that a node can only appear where the
//! grammar allows it; the coercion engine in [`crate::coerce`] is what lets
//! callers hand loosely typed operands to the builders.

mod boolean;
mod function;
mod query;
mod referred;
mod statement;
mod value;

pub use boolean::*;
pub use function::*;
pub use query::*;
pub use referred::Referred;
pub use statement::*;
pub use value::*;
