//! Convenient imports for typical `relalg` usage.
//!
//! ```ignore
//! use relalg::prelude::*;
//! ```

pub use crate::{
    CompileConfig, CompileError, CompileFailure, Compiled, Dialect, Value, compile,
};

pub use crate::{Deletion, Insertion, Manager, Modification, Relation, Scope, Selection};

pub use crate::{Expression, Function, IntoColumn, IntoExpr, Literal, Node, Table};

pub use crate::{DeleteStatement, InsertStatement, SelectStatement, UpdateStatement};
