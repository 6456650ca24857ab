use std::fmt;
use std::sync::Arc;

use crate::nodes::{Literal, Node, Table};
use crate::value::Value;

type Predicate = dyn Fn(&Table) -> Node + Send + Sync;

/// A named, reusable filter bound to whatever table it is applied to.
///
/// Scopes are cheap to clone and are usually registered once on a
/// [`Relation`](super::Relation):
///
/// ```ignore
/// let not_deleted = Scope::new("not_deleted", |t| t.col("deleted_at").is_null());
/// let owned = Scope::sql("owned", "owner_id = ?", [42]);
/// ```
#[derive(Clone)]
pub struct Scope {
    name: String,
    predicate: Arc<Predicate>,
}

impl Scope {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Table) -> Node + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// A scope whose predicate is a fixed SQL literal.
    pub fn sql<V: Into<Value>>(
        name: impl Into<String>,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = V>,
    ) -> Self {
        let literal = Literal::with_args(sql, args);
        Self::new(name, move |_| Node::Literal(literal.clone()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build this scope's predicate against `table`.
    pub fn predicate(&self, table: &Table) -> Node {
        (self.predicate)(table)
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope").field("name", &self.name).finish_non_exhaustive()
    }
}
