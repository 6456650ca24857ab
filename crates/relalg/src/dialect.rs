//! SQL dialects and their rendering policies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::collector::Collector;
use crate::error::{CompileError, CompileResult, ConfigError};
use crate::ident::{IdentKind, is_valid_identifier};
use crate::manager::Relation;

/// Marker appended to the output at the point where rendering failed.
pub const ERROR_MARKER: &str = "-- ERROR --";

/// A named SQL rendering policy.
///
/// | Dialect    | Identifier quote | Placeholder | LIKE      |
/// |------------|------------------|-------------|-----------|
/// | `Generic`  | `"`              | `?`         | `LIKE`    |
/// | `MySql`    | `` ` ``          | `?`         | `LIKE`    |
/// | `Postgres` | `"`              | `$n`        | `ILIKE`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[serde(alias = "ansi")]
    Generic,
    #[serde(alias = "my_sql")]
    MySql,
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
        }
    }

    /// Character wrapped around quoted identifiers.
    pub fn quote_char(self) -> u8 {
        match self {
            Dialect::MySql => b'`',
            Dialect::Generic | Dialect::Postgres => b'"',
        }
    }

    /// Whether placeholders are numbered (`$1`) rather than fixed (`?`).
    pub fn numbered_placeholders(self) -> bool {
        matches!(self, Dialect::Postgres)
    }

    /// Keyword used for a Like (or negated Unlike) node.
    pub fn like_keyword(self, negated: bool) -> &'static str {
        match (self, negated) {
            (Dialect::Postgres, false) => " ILIKE ",
            (Dialect::Postgres, true) => " NOT ILIKE ",
            (_, false) => " LIKE ",
            (_, true) => " NOT LIKE ",
        }
    }

    /// Trailer for an INSERT that supplies no values.
    pub fn empty_insert(self) -> &'static str {
        match self {
            Dialect::MySql => " () VALUES ()",
            Dialect::Generic | Dialect::Postgres => " DEFAULT VALUES",
        }
    }

    /// Validate `name` and write it quoted.
    ///
    /// On failure the error marker is written instead and an
    /// [`CompileError::InvalidIdentifier`] is returned.
    pub fn quote_identifier(
        self,
        kind: IdentKind,
        name: &str,
        out: &mut impl Collector,
    ) -> CompileResult<()> {
        if !is_valid_identifier(name) {
            out.append_str(ERROR_MARKER);
            return Err(CompileError::invalid_identifier(kind, name));
        }
        let q = self.quote_char();
        out.append_byte(q);
        out.append_str(name);
        out.append_byte(q);
        Ok(())
    }

    /// Start building against `table` in this dialect.
    pub fn table(self, table: impl Into<String>) -> Relation {
        Relation::new(table).with_dialect(self)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "generic" | "ansi" => Ok(Dialect::Generic),
            "mysql" | "my_sql" => Ok(Dialect::MySql),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            _ => Err(ConfigError::UnknownDialect(s.to_string())),
        }
    }
}
