//! SELECT statement manager.

use super::{Deletion, Filters, Insertion, Manager, Modification, Scope, grouped};
use crate::dialect::Dialect;
use crate::nodes::{
    Function, IntoColumn, IntoExpr, Join, Node, SelectStatement, SetOperator, Table,
};
use crate::value::Value;

/// SELECT builder.
#[derive(Clone, Debug)]
pub struct Selection {
    tree: SelectStatement,
    dialect: Dialect,
    filters: Filters,
}

impl Selection {
    /// Create a SELECT over `table`.
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            tree: SelectStatement::new(table),
            dialect: Dialect::default(),
            filters: Filters::default(),
        }
    }

    /// Set the dialect used by [`Manager::compile`].
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn table(&self) -> &Table {
        self.tree.table()
    }

    /// The statement as built so far, without compile-time defaults.
    pub fn statement(&self) -> &SelectStatement {
        &self.tree
    }

    // ==================== Projection ====================

    /// Append one projected column. A bare string is an unqualified column.
    pub fn project(mut self, col: impl IntoColumn) -> Self {
        self.tree.cols.push(col.into_column());
        self
    }

    /// Append several projected columns.
    pub fn project_all<I>(mut self, cols: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoColumn,
    {
        self.tree
            .cols
            .extend(cols.into_iter().map(IntoColumn::into_column));
        self
    }

    // ==================== WHERE ====================

    /// Add a predicate; predicates are AND-joined, each in parentheses.
    pub fn filter(mut self, expr: impl IntoExpr) -> Self {
        self.tree.wheres.push(grouped(expr.into_expr()));
        self
    }

    /// Add a raw SQL predicate with bind arguments.
    pub fn filter_sql<V: Into<Value>>(
        self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = V>,
    ) -> Self {
        self.filter(Node::literal(sql, args))
    }

    /// Apply scopes against this statement's table. Their predicates come
    /// before every predicate added with [`filter`](Self::filter).
    pub fn scopes(mut self, scopes: &[Scope]) -> Self {
        self.filters
            .apply_scopes(&self.tree.source.left, &mut self.tree.wheres, scopes);
        self
    }

    // ==================== JOIN ====================

    /// Add `INNER JOIN table`; follow with [`on`](Self::on).
    pub fn inner_join(mut self, table: impl Into<Table>) -> Self {
        self.tree
            .source
            .right
            .push(Node::InnerJoin(Join::new(table, None)));
        self
    }

    /// Add `LEFT OUTER JOIN table`; follow with [`on`](Self::on).
    pub fn outer_join(mut self, table: impl Into<Table>) -> Self {
        self.tree
            .source
            .right
            .push(Node::OuterJoin(Join::new(table, None)));
        self
    }

    /// Set the ON clause of the most recent join.
    pub fn on(mut self, expr: impl IntoExpr) -> Self {
        match self.tree.source.last_join_mut() {
            Some(join) => join.on = Some(Box::new(Node::on(expr.into_expr()))),
            None => tracing::warn!(
                target: "relalg.builder",
                table = %self.tree.table().name,
                "on() called without a preceding join; ignored"
            ),
        }
        self
    }

    // ==================== ORDER / GROUP / HAVING ====================

    pub fn order(mut self, expr: impl IntoExpr) -> Self {
        self.tree.orders.push(expr.into_expr());
        self
    }

    pub fn group(mut self, expr: impl IntoExpr) -> Self {
        self.tree.groups.push(expr.into_expr());
        self
    }

    /// Set HAVING; a second call AND-joins with the first, each side in
    /// parentheses.
    pub fn having(mut self, expr: impl IntoExpr) -> Self {
        let expr = expr.into_expr();
        self.tree.having = Some(Box::new(match self.tree.having.take() {
            Some(prev) => Node::conjunction(grouped(*prev), grouped(expr)),
            None => expr,
        }));
        self
    }

    // ==================== LIMIT / OFFSET ====================

    pub fn limit(mut self, n: impl Into<Node>) -> Self {
        self.tree.limit = Some(Box::new(n.into()));
        self
    }

    pub fn offset(mut self, n: impl Into<Node>) -> Self {
        self.tree.offset = Some(Box::new(n.into()));
        self
    }

    // ==================== Set operations ====================

    /// `(self UNION other)`. Further set operations nest to the right.
    pub fn union(self, other: Selection) -> Self {
        self.combine(SetOperator::Union, other)
    }

    pub fn intersect(self, other: Selection) -> Self {
        self.combine(SetOperator::Intersect, other)
    }

    pub fn except(self, other: Selection) -> Self {
        self.combine(SetOperator::Except, other)
    }

    fn combine(mut self, operator: SetOperator, other: Selection) -> Self {
        self.tree.combine(operator, other.tree);
        self
    }

    // ==================== Derived statements ====================

    /// A new selection projecting `COUNT(col)` with the same source, filters,
    /// grouping and HAVING. Ordering, limit, offset and set operations are
    /// dropped. `self` is unchanged.
    pub fn count(&self, col: impl IntoColumn) -> Selection {
        self.counting(Function::count(col.into_column()))
    }

    /// Like [`count`](Self::count) with `COUNT(*)`.
    pub fn count_all(&self) -> Selection {
        self.counting(Function::count_all())
    }

    fn counting(&self, f: Function) -> Selection {
        let mut tree = self.tree.clone();
        tree.cols = vec![Node::Function(f)];
        tree.orders.clear();
        tree.limit = None;
        tree.offset = None;
        tree.combinator = None;
        Selection {
            tree,
            dialect: self.dialect,
            filters: self.filters.clone(),
        }
    }

    /// A DELETE over the same table with copies of the filters and limit.
    pub fn as_deletion(&self) -> Deletion {
        Deletion::from_parts(
            self.tree.table().clone(),
            self.tree.wheres.clone(),
            self.tree.limit.clone(),
            self.dialect,
            self.filters.clone(),
        )
    }

    /// An UPDATE over the same table with copies of the filters and limit.
    pub fn as_modification(&self) -> Modification {
        Modification::from_parts(
            self.tree.table().clone(),
            self.tree.wheres.clone(),
            self.tree.limit.clone(),
            self.dialect,
            self.filters.clone(),
        )
    }

    /// An INSERT into the same table.
    pub fn as_insertion(&self) -> Insertion {
        Insertion::new(self.tree.table().clone()).with_dialect(self.dialect)
    }

    pub(crate) fn from_parts(
        table: Table,
        wheres: Vec<Node>,
        limit: Option<Box<Node>>,
        dialect: Dialect,
        filters: Filters,
    ) -> Self {
        let mut tree = SelectStatement::new(table);
        tree.wheres = wheres;
        tree.limit = limit;
        Self {
            tree,
            dialect,
            filters,
        }
    }
}

/// Fill an empty projection with the table's qualified star, along the
/// whole set-operation chain.
fn resolve_projection(tree: &mut SelectStatement) {
    if tree.cols.is_empty() {
        let star = tree.table().star();
        tree.cols.push(star);
    }
    if let Some(c) = tree.combinator.as_mut() {
        resolve_projection(&mut c.right);
    }
}

impl Manager for Selection {
    fn to_node(&self) -> Node {
        let mut tree = self.tree.clone();
        resolve_projection(&mut tree);
        Node::Select(Box::new(tree))
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl From<Selection> for Node {
    fn from(s: Selection) -> Self {
        s.to_node()
    }
}
