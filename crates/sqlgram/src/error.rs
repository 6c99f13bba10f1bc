//! Error types for sqlgram
//!
//! Two families live here:
//!
//! - [`BuildError`] covers data-dependent failures (missing table, empty or
//!   unknown values) and is returned from the INSERT/UPDATE/DELETE roots.
//! - [`Misuse`] covers programming mistakes (operands that cannot be coerced,
//!   joins without an anchor, wrong arity). These are raised as panics through
//!   [`fatal`] so they surface while the statement is being built.

use thiserror::Error;

/// Result type alias for statement construction
pub type BuildResult<T> = Result<T, BuildError>;

/// Recoverable statement construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The statement root was given no table
    #[error("table required")]
    TableRequired,

    /// INSERT/UPDATE was given an empty values map
    #[error("no values")]
    NoValues,

    /// A values key does not name a column of the target table
    #[error("unknown column '{column}' in table '{table}'")]
    UnknownColumn { table: String, column: String },
}

impl BuildError {
    /// Create an unknown column error
    pub fn unknown_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Check if this is an unknown column error
    pub fn is_unknown_column(&self) -> bool {
        matches!(self, Self::UnknownColumn { .. })
    }
}

/// An operand could not be promoted to the grammar node a position requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot coerce {operand} into {target}")]
pub struct CoercionError {
    /// Grammar node that was requested
    pub target: &'static str,
    /// Concrete kind of the rejected operand
    pub operand: &'static str,
}

impl CoercionError {
    pub(crate) fn new(target: &'static str, operand: &'static str) -> Self {
        Self { target, operand }
    }
}

/// Programmer errors. The builders raise these through [`fatal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Misuse {
    /// A selection method needs a query specification that does not exist yet
    #[error("no select: selection has no query specification")]
    NoSelect,

    /// ON condition does not refer to anything already in FROM
    #[error("invalid join: none of {referents:?} is in FROM, cannot join {target}")]
    UnknownJoinTarget {
        target: String,
        referents: Vec<String>,
    },

    /// An operand was rejected by the coercion engine
    #[error("{function}: argument `{argument}`: {source}")]
    Coercion {
        function: &'static str,
        argument: &'static str,
        source: CoercionError,
    },

    /// Wrong number of arguments for a variadic constructor
    #[error("{function}: expected at most {expected} argument(s), got {got}")]
    TooManyArguments {
        function: &'static str,
        expected: usize,
        got: usize,
    },

    /// An identifier handed to a function form is not a valid SQL name
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Rendering was asked for a statement that has no content
    #[error("malformed statement: {0}")]
    EmptyStatement(&'static str),
}

/// Abort with a [`Misuse`] diagnostic.
#[track_caller]
pub(crate) fn fatal(misuse: Misuse) -> ! {
    panic!("sqlgram: {misuse}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_message_names_argument_and_operand() {
        let misuse = Misuse::Coercion {
            function: "equal",
            argument: "left",
            source: CoercionError::new("RowValuePredicand", "Table"),
        };
        assert_eq!(
            misuse.to_string(),
            "equal: argument `left`: cannot coerce Table into RowValuePredicand"
        );
    }

    #[test]
    fn unknown_column_display() {
        let err = BuildError::unknown_column("users", "nope");
        assert!(err.is_unknown_column());
        assert_eq!(err.to_string(), "unknown column 'nope' in table 'users'");
    }
}
