//! Error types for relalg

use thiserror::Error;

use crate::ident::IdentKind;
use crate::value::Value;

/// Result type alias used by the compiler's visit functions
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors raised while rendering a node tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A table or column name failed identifier validation
    #[error("invalid {kind} name: '{name}'")]
    InvalidIdentifier { kind: IdentKind, name: String },

    /// The right operand of an IN node was not a list
    #[error("malformed IN list: right operand must be a list, got {found}")]
    MalformedInList { found: &'static str },

    /// A literal contained the `?...` expansion token more than once
    #[error("literal contains more than one '?...' expansion token: {sql}")]
    DuplicateExpansionToken { sql: String },
}

impl CompileError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(kind: IdentKind, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            name: name.into(),
        }
    }

    /// Check if this is an invalid identifier error
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier { .. })
    }

    /// Check if this is a malformed IN list error
    pub fn is_malformed_in_list(&self) -> bool {
        matches!(self, Self::MalformedInList { .. })
    }

    /// Check if this is a duplicate expansion token error
    pub fn is_duplicate_expansion(&self) -> bool {
        matches!(self, Self::DuplicateExpansionToken { .. })
    }
}

/// A failed compile: the error plus whatever text had been written.
///
/// The partial SQL carries an inline marker showing where rendering stopped.
/// It must never be executed.
#[derive(Debug, Clone, Error)]
#[error("{error}")]
pub struct CompileFailure {
    #[source]
    pub error: CompileError,
    pub sql: String,
    pub args: Vec<Value>,
}

impl CompileFailure {
    /// The underlying compile error.
    pub fn error(&self) -> &CompileError {
        &self.error
    }

    /// The partial SQL text written before the failure.
    pub fn partial_sql(&self) -> &str {
        &self.sql
    }
}

/// Errors raised while reading compile configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A dialect key that does not name a known dialect
    #[error("unknown dialect: '{0}' (expected one of: generic, mysql, postgres)")]
    UnknownDialect(String),

    /// Malformed TOML configuration
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
