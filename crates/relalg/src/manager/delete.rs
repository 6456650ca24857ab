//! DELETE statement manager.

use super::{Filters, Insertion, Manager, Modification, Scope, Selection, grouped};
use crate::dialect::Dialect;
use crate::nodes::{DeleteStatement, IntoExpr, Node, Table};
use crate::value::Value;

/// DELETE builder.
#[derive(Clone, Debug)]
pub struct Deletion {
    tree: DeleteStatement,
    dialect: Dialect,
    filters: Filters,
}

impl Deletion {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            tree: DeleteStatement::new(table),
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

    pub fn statement(&self) -> &DeleteStatement {
        &self.tree
    }

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

    pub fn as_selection(&self) -> Selection {
        Selection::from_parts(
            self.tree.table.clone(),
            self.tree.wheres.clone(),
            self.tree.limit.clone(),
            self.dialect,
            self.filters.clone(),
        )
    }

    pub fn as_modification(&self) -> Modification {
        Modification::from_parts(
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
        let mut tree = DeleteStatement::new(table);
        tree.wheres = wheres;
        tree.limit = limit;
        Self {
            tree,
            dialect,
            filters,
        }
    }
}

impl Manager for Deletion {
    fn to_node(&self) -> Node {
        self.tree.clone().into()
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}
