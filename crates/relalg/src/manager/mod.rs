//! Fluent statement builders.
//!
//! Each manager owns one statement tree and a
//! [`Dialect`](crate::dialect::Dialect); mutators consume
//! and return the manager so calls chain. Compiling borrows the manager, so a
//! manager can be compiled, changed and compiled again.
//!
//! ```ignore
//! use relalg::prelude::*;
//!
//! let users = Relation::new("users")
//!     .with_dialect(Dialect::Postgres)
//!     .scope(Scope::sql("active", "deleted_at IS NULL", Vec::<Value>::new()));
//!
//! let out = users
//!     .filter_sql("id = ?", [2])
//!     .order(users.col("name").asc())
//!     .limit(10)
//!     .compile()?;
//! // SELECT "users".* FROM "users" WHERE (deleted_at IS NULL) AND (id = $1)
//! //   ORDER BY "users"."name" ASC LIMIT $2
//! ```
//!
//! Filters added by scopes always precede filters added with `filter`, in
//! the order the scopes were applied. `as_*` conversions copy filters and
//! limits into a manager of another statement kind; the two managers are
//! independent afterwards.

mod delete;
mod insert;
mod relation;
mod scope;
mod select;
mod traits;
mod update;


pub use delete::Deletion;
pub use insert::Insertion;
pub use relation::Relation;
pub use scope::Scope;
pub use select::Selection;
pub use traits::Manager;
pub use update::Modification;

use crate::nodes::{Node, Table};

/// Wrap `expr` in a Grouping unless it already is one.
pub(crate) fn grouped(expr: Node) -> Node {
    match expr {
        Node::Grouping(_) => expr,
        other => Node::grouping(other),
    }
}

/// Scope bookkeeping shared by the Select, Update and Delete managers.
///
/// Scope predicates occupy the first `scoped` entries of `wheres`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Filters {
    scoped: usize,
}

impl Filters {
    pub(crate) fn apply_scopes(&mut self, table: &Table, wheres: &mut Vec<Node>, scopes: &[Scope]) {
        for scope in scopes {
            wheres.insert(self.scoped, grouped(scope.predicate(table)));
            self.scoped += 1;
        }
    }
}
