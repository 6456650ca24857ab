//! # relalg
//!
//! A relational-algebra SQL builder for Rust.
//!
//! ## Features
//!
//! - **Node model**: statements are plain trees of [`Node`] values, built with
//!   fluent helpers and never validated until compiled
//! - **Dialect-aware compiler**: one tree renders for generic SQL, MySQL or
//!   Postgres (`$n` placeholders, `ILIKE`)
//! - **Bind arguments**: every scalar becomes a placeholder; the `i`-th
//!   placeholder always matches `args[i]`
//! - **Managers**: [`Selection`], [`Insertion`], [`Modification`] and
//!   [`Deletion`] build statements fluently and convert into one another
//! - **Scopes**: named, reusable filters registered on a [`Relation`]
//!
//! ## Example
//!
//! ```ignore
//! use relalg::prelude::*;
//!
//! let users = Dialect::Postgres.table("users");
//!
//! let out = users
//!     .select(["id", "name"])
//!     .filter(users.col("age").gte(18))
//!     .order(users.col("name").asc())
//!     .limit(10)
//!     .compile()?;
//!
//! assert_eq!(
//!     out.sql,
//!     r#"SELECT "users"."id","users"."name" FROM "users" WHERE ("users"."age">=$1) ORDER BY "users"."name" ASC LIMIT $2"#
//! );
//!
//! // Hand the arguments straight to tokio-postgres.
//! client.query(&out.sql, &out.params_ref()).await?;
//! ```

pub mod collector;
pub mod compiler;
pub mod config;
pub mod dialect;
pub mod error;
pub mod ident;
pub mod manager;
pub mod nodes;
pub mod prelude;
pub mod value;

pub use collector::{Collector, FixedCollector, NumberedCollector};
pub use compiler::{Compiled, Compiler, compile};
pub use config::CompileConfig;
pub use dialect::Dialect;
pub use error::{CompileError, CompileFailure, CompileResult, ConfigError};
pub use ident::{IdentKind, is_valid_function_name, is_valid_identifier};
pub use manager::{Deletion, Insertion, Manager, Modification, Relation, Scope, Selection};
pub use nodes::{
    DeleteStatement, Expression, Function, InsertStatement, IntoColumn, IntoExpr, Literal, Node,
    SelectStatement, SetOperator, Table, UpdateStatement,
};
pub use value::Value;
