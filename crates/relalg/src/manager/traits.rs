//! Trait shared by the statement managers.

use crate::compiler::{Compiled, compile};
use crate::config::CompileConfig;
use crate::dialect::Dialect;
use crate::error::CompileFailure;
use crate::nodes::Node;

/// Base trait for all statement managers.
///
/// Provides compilation on top of the statement tree each manager owns.
pub trait Manager {
    /// The statement tree with compile-time defaults filled in.
    fn to_node(&self) -> Node;

    /// The dialect this manager compiles for.
    fn dialect(&self) -> Dialect;

    /// Compile with an explicit configuration. The configuration's dialect
    /// wins over the manager's.
    fn compile_with(&self, config: &CompileConfig) -> Result<Compiled, CompileFailure> {
        compile(&self.to_node(), config)
    }

    /// Compile for the manager's dialect.
    fn compile(&self) -> Result<Compiled, CompileFailure> {
        self.compile_with(&CompileConfig::new(self.dialect()))
    }

    /// Debug helper to get the SQL string, partial if compilation failed.
    fn to_sql(&self) -> String {
        match self.compile() {
            Ok(out) => out.sql,
            Err(failure) => failure.sql,
        }
    }
}
