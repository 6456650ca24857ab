use serde::Deserialize;

use crate::dialect::Dialect;
use crate::error::ConfigError;

/// Options threaded through a single compile call.
///
/// Defaults to the generic dialect with debug logging off.
///
/// ```ignore
/// let config = CompileConfig::from_toml_str(r#"
///     dialect = "postgres"
///     debug = true
/// "#)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    /// Rendering policy for quoting, placeholders and operator rewrites.
    pub dialect: Dialect,
    /// Emit `tracing` debug events for every compile.
    pub debug: bool,
}

impl CompileConfig {
    /// Create a configuration for `dialect` with debug logging off.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            debug: false,
        }
    }

    /// Set the dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Turn debug logging on or off.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = CompileConfig::default();
        assert_eq!(config.dialect, Dialect::Generic);
        assert!(!config.debug);
    }

    #[test]
    fn config_builder() {
        let config = CompileConfig::new(Dialect::MySql).with_debug(true);
        assert_eq!(config.dialect, Dialect::MySql);
        assert!(config.debug);
        assert_eq!(config.with_dialect(Dialect::Postgres).dialect, Dialect::Postgres);
    }

    #[test]
    fn config_from_toml() {
        let config = CompileConfig::from_toml_str("dialect = \"postgresql\"\ndebug = true\n").unwrap();
        assert_eq!(config, CompileConfig::new(Dialect::Postgres).with_debug(true));

        let empty = CompileConfig::from_toml_str("").unwrap();
        assert_eq!(empty, CompileConfig::default());
    }

    #[test]
    fn config_rejects_unknown_dialect() {
        let err = CompileConfig::from_toml_str("dialect = \"oracle\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
