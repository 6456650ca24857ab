use crate::value::Value;

/// Marker expanded into one placeholder per argument, e.g. `id IN(?...)`.
pub const EXPANSION_TOKEN: &str = "?...";

/// A raw SQL fragment with trailing bind arguments.
///
/// The text is emitted verbatim apart from placeholder handling: each `?` is
/// a placeholder, and a single [`EXPANSION_TOKEN`] expands to as many
/// placeholders as there are arguments not claimed by a plain `?`.
#[derive(Debug, Clone, Default)]
pub struct Literal {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Literal {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<V: Into<Value>>(
        sql: impl Into<String>,
        args: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            sql: sql.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one bind argument.
    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Number of expansion tokens in the text.
    pub fn expansion_count(&self) -> usize {
        self.sql.matches(EXPANSION_TOKEN).count()
    }
}

impl From<&str> for Literal {
    fn from(sql: &str) -> Self {
        Literal::new(sql)
    }
}

impl From<String> for Literal {
    fn from(sql: String) -> Self {
        Literal::new(sql)
    }
}
