use super::{Deletion, Insertion, Modification, Scope, Selection};
use crate::dialect::Dialect;
use crate::nodes::{IntoColumn, IntoExpr, Node, Table};
use crate::value::Value;

/// A handle on one table: its dialect, its registered scopes, and entry
/// points for building statements against it.
///
/// Every SELECT, UPDATE and DELETE started from a relation has the
/// relation's scopes applied first.
///
/// ```ignore
/// let posts = Relation::new("posts")
///     .scope(Scope::new("published", |t| t.col("published").eq(true)));
///
/// posts.select(["id", "title"]).filter(posts.col("author_id").eq(7));
/// // SELECT "posts"."id","posts"."title" FROM "posts"
/// //   WHERE ("posts"."published"=?) AND ("posts"."author_id"=?)
/// ```
#[derive(Clone, Debug)]
pub struct Relation {
    table: Table,
    dialect: Dialect,
    scopes: Vec<Scope>,
}

impl Relation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: Table::new(name),
            dialect: Dialect::default(),
            scopes: Vec::new(),
        }
    }

    /// Alias the underlying table.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.table = self.table.alias(alias);
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Register a scope. Scopes apply in registration order.
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scopes.push(scope);
        self
    }

    /// The underlying table node.
    pub fn relation(&self) -> &Table {
        &self.table
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// A qualified column, `"table"."name"`.
    pub fn col(&self, name: impl Into<String>) -> Node {
        self.table.col(name)
    }

    /// `"table".*`
    pub fn star(&self) -> Node {
        self.table.star()
    }

    // ==================== SELECT ====================

    /// An empty SELECT with scopes applied.
    pub fn selection(&self) -> Selection {
        Selection::new(self.table.clone())
            .with_dialect(self.dialect)
            .scopes(&self.scopes)
    }

    /// SELECT the named columns, qualified by this table.
    pub fn select<I>(&self, cols: I) -> Selection
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.selection()
            .project_all(cols.into_iter().map(|c| self.col(c.as_ref())))
    }

    pub fn filter(&self, expr: impl IntoExpr) -> Selection {
        self.selection().filter(expr)
    }

    pub fn filter_sql<V: Into<Value>>(
        &self,
        sql: impl Into<String>,
        args: impl IntoIterator<Item = V>,
    ) -> Selection {
        self.selection().filter_sql(sql, args)
    }

    pub fn inner_join(&self, table: impl Into<Table>) -> Selection {
        self.selection().inner_join(table)
    }

    pub fn outer_join(&self, table: impl Into<Table>) -> Selection {
        self.selection().outer_join(table)
    }

    pub fn order(&self, expr: impl IntoExpr) -> Selection {
        self.selection().order(expr)
    }

    pub fn group(&self, expr: impl IntoExpr) -> Selection {
        self.selection().group(expr)
    }

    pub fn having(&self, expr: impl IntoExpr) -> Selection {
        self.selection().having(expr)
    }

    /// `SELECT COUNT(col) FROM table` with scopes applied.
    pub fn count(&self, col: impl IntoColumn) -> Selection {
        self.selection().count(col)
    }

    /// `SELECT COUNT(*) FROM table` with scopes applied.
    pub fn count_all(&self) -> Selection {
        self.selection().count_all()
    }

    // ==================== INSERT / UPDATE / DELETE ====================

    /// An empty INSERT. Scopes do not apply to inserts.
    pub fn insertion(&self) -> Insertion {
        Insertion::new(self.table.clone()).with_dialect(self.dialect)
    }

    pub fn insert<V: Into<Node>>(&self, values: impl IntoIterator<Item = V>) -> Insertion {
        self.insertion().values(values)
    }

    /// An empty UPDATE with scopes applied.
    pub fn modification(&self) -> Modification {
        Modification::new(self.table.clone())
            .with_dialect(self.dialect)
            .scopes(&self.scopes)
    }

    pub fn set<I>(&self, cols: I) -> Modification
    where
        I: IntoIterator,
        I::Item: IntoColumn,
    {
        self.modification().set(cols)
    }

    /// An empty DELETE with scopes applied.
    pub fn deletion(&self) -> Deletion {
        Deletion::new(self.table.clone())
            .with_dialect(self.dialect)
            .scopes(&self.scopes)
    }

    pub fn delete(&self, expr: impl IntoExpr) -> Deletion {
        self.deletion().filter(expr)
    }
}

impl From<&Relation> for Table {
    fn from(r: &Relation) -> Self {
        r.table.clone()
    }
}
