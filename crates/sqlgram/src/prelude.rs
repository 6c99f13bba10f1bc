//! Convenient imports for typical `sqlgram` usage.
//!
//! ```ignore
//! use sqlgram::prelude::*;
//! ```

pub use crate::{AsStatement, Builder, BuildError, BuildResult, Dialect, Options, Value};
pub use crate::{Column, DerivedTable, Meta, Table};
pub use crate::{DeleteStatement, InsertStatement, Selection, UpdateStatement};
pub use crate::{delete, insert, select, update};

pub use crate::expr::*;
pub use crate::grammar::{
    CharLengthUnits, FoldCase, OuterJoinType, SetFunctionType, TrimSpecification,
};
pub use crate::{count, values};
