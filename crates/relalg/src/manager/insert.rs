//! INSERT statement manager.

use super::{Deletion, Manager, Modification, Selection};
use crate::dialect::Dialect;
use crate::nodes::{InsertStatement, IntoColumn, Node, Table};

/// INSERT builder (single row).
///
/// ```ignore
/// Insertion::new("users")
///     .set("username", "alice")
///     .set("email", "alice@example.com")
///     .returning("id");
/// // INSERT INTO "users" ("username","email") VALUES (?,?) RETURNING "id"
/// ```
#[derive(Clone, Debug)]
pub struct Insertion {
    tree: InsertStatement,
    dialect: Dialect,
}

impl Insertion {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            tree: InsertStatement::new(table),
            dialect: Dialect::default(),
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn table(&self) -> &Table {
        &self.tree.table
    }

    pub fn statement(&self) -> &InsertStatement {
        &self.tree
    }

    /// Append target columns. Qualified columns are written unqualified.
    pub fn columns<I>(mut self, cols: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoColumn,
    {
        self.tree
            .columns
            .extend(cols.into_iter().map(IntoColumn::into_column));
        self
    }

    /// Append values, positionally matching [`columns`](Self::columns).
    pub fn values<V: Into<Node>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.tree.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn value(mut self, value: impl Into<Node>) -> Self {
        self.tree.values.push(value.into());
        self
    }

    /// Append a column and its value together.
    pub fn set(mut self, col: impl IntoColumn, value: impl Into<Node>) -> Self {
        self.tree.columns.push(col.into_column());
        self.tree.values.push(value.into());
        self
    }

    pub fn returning(mut self, expr: impl IntoColumn) -> Self {
        self.tree.returning = Some(Box::new(expr.into_column()));
        self
    }

    // ==================== Conversions ====================
    // An INSERT carries no filters, so only the table and dialect move over.

    pub fn as_selection(&self) -> Selection {
        Selection::new(self.tree.table.clone()).with_dialect(self.dialect)
    }

    pub fn as_modification(&self) -> Modification {
        Modification::new(self.tree.table.clone()).with_dialect(self.dialect)
    }

    pub fn as_deletion(&self) -> Deletion {
        Deletion::new(self.tree.table.clone()).with_dialect(self.dialect)
    }
}

impl Manager for Insertion {
    fn to_node(&self) -> Node {
        self.tree.clone().into()
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}
