//! UPDATE statement manager.

use super::{Deletion, Filters, Insertion, Manager, Scope, Selection, grouped};
use crate::dialect::Dialect;
use crate::nodes::{IntoColumn, IntoExpr, Node, Table, UpdateStatement};
use crate::value::Value;

/// UPDATE builder.
///
/// Columns and values are paired in two steps:
///
/// ```ignore
/// Modification::new("users")
///     .set(["name", "email"])
///     .to(["alice", "alice@example.com"])
///     .filter_sql("id = ?", [1]);
/// // UPDATE "users" SET "name"=?,"email"=? WHERE (id = ?)
/// ```
#[derive(Clone, Debug)]
pub struct Modification {
    tree: UpdateStatement,
    dialect: Dialect,
    filters: Filters,
}

impl Modification {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            tree: UpdateStatement::new(table),
            dialect: Dialect::default(),
            filters: Filters::default(),
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn table(&self) -> &Table {
        &self.tree.table
    }

    pub fn statement(&self) -> &UpdateStatement {
        &self.tree
    }

    // ==================== SET ====================

    /// Queue columns to be assigned by the next [`to`](Self::to).
    pub fn set<I>(mut self, cols: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoColumn,
    {
        self.tree
            .assignments
            .extend(cols.into_iter().map(IntoColumn::into_column));
        self
    }

    /// Assign values, in order, to the queued columns.
    pub fn to<V: Into<Node>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        let mut values = values.into_iter();
        for slot in self.tree.assignments.iter_mut() {
            if matches!(slot, Node::Assignment(_)) {
                continue;
            }
            let Some(value) = values.next() else { break };
            let col = std::mem::replace(slot, Node::Star);
            *slot = Node::assignment(col, value);
        }
        let extra = values.count();
        if extra > 0 {
            tracing::warn!(
                target: "relalg.builder",
                table = %self.tree.table.name,
                extra,
                "to() received more values than queued columns; extra values ignored"
            );
        }
        self
    }

    /// Add one `column=value` assignment.
    pub fn assign(mut self, col: impl IntoColumn, value: impl Into<Node>) -> Self {
        self.tree
            .assignments
            .push(Node::assignment(col.into_column(), value));
        self
    }

    // ==================== WHERE / LIMIT ====================

    pub fn filter(mut self, expr: impl IntoExpr) -> Self {
        self.tree.wheres.push(grouped(expr.into_expr()));
        self
    }

    pub fn filter_sql<V: Into<Value>>(
        self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = V>,
    ) -> Self {
        self.filter(Node::literal(sql, args))
    }

    pub fn scopes(mut self, scopes: &[Scope]) -> Self {
        self.filters
            .apply_scopes(&self.tree.table, &mut self.tree.wheres, scopes);
        self
    }

    pub fn limit(mut self, n: impl Into<Node>) -> Self {
        self.tree.limit = Some(Box::new(n.into()));
        self
    }

    // ==================== Conversions ====================

    pub fn as_selection(&self) -> Selection {
        Selection::from_parts(
            self.tree.table.clone(),
            self.tree.wheres.clone(),
            self.tree.limit.clone(),
            self.dialect,
            self.filters.clone(),
        )
    }

    pub fn as_deletion(&self) -> Deletion {
        Deletion::from_parts(
            self.tree.table.clone(),
            self.tree.wheres.clone(),
            self.tree.limit.clone(),
            self.dialect,
            self.filters.clone(),
        )
    }

    pub fn as_insertion(&self) -> Insertion {
        Insertion::new(self.tree.table.clone()).with_dialect(self.dialect)
    }

    pub(crate) fn from_parts(
        table: Table,
        wheres: Vec<Node>,
        limit: Option<Box<Node>>,
        dialect: Dialect,
        filters: Filters,
    ) -> Self {
        let mut tree = UpdateStatement::new(table);
        tree.wheres = wheres;
        tree.limit = limit;
        Self {
            tree,
            dialect,
            filters,
        }
    }
}

impl Manager for Modification {
    fn to_node(&self) -> Node {
        self.tree.clone().into()
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}
