use std::fmt;

use serde::{Deserialize, Serialize};

/// Target SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dialect {
    #[default]
    #[serde(rename = "mysql")]
    MySql,
    #[serde(rename = "postgresql")]
    PostgreSql,
    #[serde(rename = "tsql")]
    TSql,
    #[serde(rename = "sqlite")]
    Sqlite,
    /// Plain SQL-92 surface syntax.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::MySql => "mysql",
            Dialect::PostgreSql => "postgresql",
            Dialect::TSql => "tsql",
            Dialect::Sqlite => "sqlite",
            Dialect::Unknown => "unknown",
        }
    }

    /// Whether parameters are numbered (`$1`, `$2`, ...) rather than `?`.
    pub fn numbered_params(self) -> bool {
        matches!(self, Dialect::PostgreSql)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering options.
///
/// Deserializable so applications can keep them in their own config:
///
/// ```toml
/// dialect = "postgresql"
/// separate_clause_with = "\n"
/// prefix_with = "/* api */ "
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub dialect: Dialect,
    /// Placed between top-level clauses.
    pub separate_clause_with: String,
    /// Prepended to the rendered statement.
    pub prefix_with: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            dialect: Dialect::MySql,
            separate_clause_with: " ".to_string(),
            prefix_with: String::new(),
        }
    }
}
