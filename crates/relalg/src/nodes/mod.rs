//! The relational-algebra node model.
//!
//! A statement is a tree of [`Node`] values. Nodes are plain data: they do not
//! render themselves and perform no validation when constructed. Table and
//! column names are checked only when the tree is compiled.
//!
//! # Example
//! ```ignore
//! use relalg::prelude::*;
//!
//! let users = Table::new("users");
//! let pred = users.col("age").gte(18).and(users.col("name").like("a%"));
//! let stmt = SelectStatement::new(users.clone()).filter(pred);
//! ```

mod expr;
mod function;
mod literal;
mod statement;
mod table;

#[cfg(test)]
mod tests;

pub use expr::{Expression, IntoColumn, IntoExpr};
pub use function::Function;
pub use literal::{EXPANSION_TOKEN, Literal};
pub use statement::{
    Combinator, DeleteStatement, InsertStatement, Join, JoinSource, SelectStatement, SetOperator,
    UpdateStatement,
};
pub use table::Table;

use crate::value::Value;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// The two children of a binary node.
#[derive(Debug, Clone)]
pub struct Binary {
    pub left: Box<Node>,
    pub right: Box<Node>,
}

impl Binary {
    pub fn new(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }
}

/// Every node kind the compiler knows how to render.
#[derive(Debug, Clone)]
pub enum Node {
    // ==================== Leaves ====================
    /// A scalar bound as a placeholder argument.
    Value(Value),
    /// Raw SQL with trailing bind arguments.
    Literal(Literal),
    /// An unqualified column name.
    Column(String),
    /// A column (or `*`) qualified by its table.
    Attribute { name: Box<Node>, table: Table },
    Table(Table),
    Star,
    /// A placeholder with no argument attached. Deprecated: prefer `Value`.
    Binding,
    /// An ordered sequence, e.g. the right side of IN.
    List(Vec<Node>),
    Function(Function),

    // ==================== Unary ====================
    Grouping(Box<Node>),
    Not(Box<Node>),
    On(Box<Node>),
    Limit(Box<Node>),
    Offset(Box<Node>),
    Having(Box<Node>),
    Ascending(Box<Node>),
    Descending(Box<Node>),

    // ==================== Binary ====================
    Equal(Binary),
    NotEqual(Binary),
    GreaterThan(Binary),
    GreaterThanOrEqual(Binary),
    LessThan(Binary),
    LessThanOrEqual(Binary),
    Like(Binary),
    Unlike(Binary),
    In(Binary),
    And(Binary),
    Or(Binary),
    Assignment(Binary),
    As(Binary),
    Union(Binary),
    Intersect(Binary),
    Except(Binary),

    // ==================== Joins ====================
    InnerJoin(Join),
    OuterJoin(Join),
    JoinSource(JoinSource),

    // ==================== Statements ====================
    Select(Box<SelectStatement>),
    Insert(Box<InsertStatement>),
    Update(Box<UpdateStatement>),
    Delete(Box<DeleteStatement>),
}

impl Node {
    /// Name of the node kind, for logs and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Value(_) => "Value",
            Node::Literal(_) => "Literal",
            Node::Column(_) => "Column",
            Node::Attribute { .. } => "Attribute",
            Node::Table(_) => "Table",
            Node::Star => "Star",
            Node::Binding => "Binding",
            Node::List(_) => "List",
            Node::Function(_) => "Function",
            Node::Grouping(_) => "Grouping",
            Node::Not(_) => "Not",
            Node::On(_) => "On",
            Node::Limit(_) => "Limit",
            Node::Offset(_) => "Offset",
            Node::Having(_) => "Having",
            Node::Ascending(_) => "Ascending",
            Node::Descending(_) => "Descending",
            Node::Equal(_) => "Equal",
            Node::NotEqual(_) => "NotEqual",
            Node::GreaterThan(_) => "GreaterThan",
            Node::GreaterThanOrEqual(_) => "GreaterThanOrEqual",
            Node::LessThan(_) => "LessThan",
            Node::LessThanOrEqual(_) => "LessThanOrEqual",
            Node::Like(_) => "Like",
            Node::Unlike(_) => "Unlike",
            Node::In(_) => "In",
            Node::And(_) => "And",
            Node::Or(_) => "Or",
            Node::Assignment(_) => "Assignment",
            Node::As(_) => "As",
            Node::Union(_) => "Union",
            Node::Intersect(_) => "Intersect",
            Node::Except(_) => "Except",
            Node::InnerJoin(_) => "InnerJoin",
            Node::OuterJoin(_) => "OuterJoin",
            Node::JoinSource(_) => "JoinSource",
            Node::Select(_) => "Select",
            Node::Insert(_) => "Insert",
            Node::Update(_) => "Update",
            Node::Delete(_) => "Delete",
        }
    }

    /// Whether this is a bound `NULL`.
    pub fn is_null_value(&self) -> bool {
        matches!(self, Node::Value(Value::Null))
    }

    // ==================== Leaves ====================

    /// A bound scalar.
    pub fn value(value: impl Into<Value>) -> Self {
        Node::Value(value.into())
    }

    /// A bound `NULL`.
    pub fn null() -> Self {
        Node::Value(Value::Null)
    }

    /// Raw SQL with no arguments.
    pub fn sql(sql: impl Into<String>) -> Self {
        Node::Literal(Literal::new(sql))
    }

    /// Raw SQL with bind arguments.
    ///
    /// ```ignore
    /// Node::literal("id IN(?...)", [1, 2, 3])
    /// ```
    pub fn literal<V: Into<Value>>(
        sql: impl Into<String>,
        args: impl IntoIterator<Item = V>,
    ) -> Self {
        Node::Literal(Literal::with_args(sql, args))
    }

    pub fn column(name: impl Into<String>) -> Self {
        Node::Column(name.into())
    }

    pub fn attribute(table: &Table, name: impl Into<String>) -> Self {
        table.col(name)
    }

    pub fn star() -> Self {
        Node::Star
    }

    pub fn binding() -> Self {
        Node::Binding
    }

    pub fn list<T: Into<Node>>(items: impl IntoIterator<Item = T>) -> Self {
        Node::List(items.into_iter().map(Into::into).collect())
    }

    // ==================== Unary ====================

    pub fn grouping(expr: impl Into<Node>) -> Self {
        Node::Grouping(Box::new(expr.into()))
    }

    pub fn not(expr: impl Into<Node>) -> Self {
        Node::Not(Box::new(expr.into()))
    }

    pub fn on(expr: impl Into<Node>) -> Self {
        Node::On(Box::new(expr.into()))
    }

    pub fn limit(expr: impl Into<Node>) -> Self {
        Node::Limit(Box::new(expr.into()))
    }

    pub fn offset(expr: impl Into<Node>) -> Self {
        Node::Offset(Box::new(expr.into()))
    }

    pub fn having(expr: impl Into<Node>) -> Self {
        Node::Having(Box::new(expr.into()))
    }

    pub fn ascending(expr: impl Into<Node>) -> Self {
        Node::Ascending(Box::new(expr.into()))
    }

    pub fn descending(expr: impl Into<Node>) -> Self {
        Node::Descending(Box::new(expr.into()))
    }

    // ==================== Binary ====================

    pub fn equal(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::Equal(Binary::new(left, right))
    }

    pub fn not_equal(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::NotEqual(Binary::new(left, right))
    }

    pub fn greater_than(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::GreaterThan(Binary::new(left, right))
    }

    pub fn greater_than_or_equal(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::GreaterThanOrEqual(Binary::new(left, right))
    }

    pub fn less_than(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::LessThan(Binary::new(left, right))
    }

    pub fn less_than_or_equal(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::LessThanOrEqual(Binary::new(left, right))
    }

    pub fn like(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::Like(Binary::new(left, right))
    }

    pub fn unlike(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::Unlike(Binary::new(left, right))
    }

    /// `left IN(items...)`.
    pub fn in_list<T: Into<Node>>(
        left: impl Into<Node>,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        Node::In(Binary::new(left, Node::list(items)))
    }

    /// `left AND right`, without parentheses.
    pub fn conjunction(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::And(Binary::new(left, right))
    }

    /// `left OR right`, without parentheses.
    pub fn disjunction(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::Or(Binary::new(left, right))
    }

    pub fn assignment(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::Assignment(Binary::new(left, right))
    }

    /// `expr AS "alias"`.
    pub fn aliased(expr: impl Into<Node>, alias: impl Into<String>) -> Self {
        Node::As(Binary::new(expr, Node::Column(alias.into())))
    }

    pub fn union(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::Union(Binary::new(left, right))
    }

    pub fn intersect(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::Intersect(Binary::new(left, right))
    }

    pub fn except(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Node::Except(Binary::new(left, right))
    }

    // ==================== Joins ====================

    pub fn inner_join(table: impl Into<Table>, on: Option<Node>) -> Self {
        Node::InnerJoin(Join::new(table, on))
    }

    pub fn outer_join(table: impl Into<Table>, on: Option<Node>) -> Self {
        Node::OuterJoin(Join::new(table, on))
    }
}

// ==================== Conversions ====================

impl From<Value> for Node {
    fn from(v: Value) -> Self {
        Node::Value(v)
    }
}

impl From<Literal> for Node {
    fn from(l: Literal) -> Self {
        Node::Literal(l)
    }
}

impl From<Table> for Node {
    fn from(t: Table) -> Self {
        Node::Table(t)
    }
}

impl From<Function> for Node {
    fn from(f: Function) -> Self {
        Node::Function(f)
    }
}

impl From<JoinSource> for Node {
    fn from(j: JoinSource) -> Self {
        Node::JoinSource(j)
    }
}

impl From<SelectStatement> for Node {
    fn from(s: SelectStatement) -> Self {
        Node::Select(Box::new(s))
    }
}

impl From<InsertStatement> for Node {
    fn from(s: InsertStatement) -> Self {
        Node::Insert(Box::new(s))
    }
}

impl From<UpdateStatement> for Node {
    fn from(s: UpdateStatement) -> Self {
        Node::Update(Box::new(s))
    }
}

impl From<DeleteStatement> for Node {
    fn from(s: DeleteStatement) -> Self {
        Node::Delete(Box::new(s))
    }
}

impl<T: Into<Value>> From<Option<T>> for Node {
    fn from(v: Option<T>) -> Self {
        Node::Value(v.into())
    }
}

macro_rules! impl_node_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(v: $ty) -> Self {
                    Node::Value(Value::from(v))
                }
            }
        )*
    };
}

impl_node_from_scalar!(
    bool,
    i8,
    i16,
    u8,
    i32,
    u16,
    i64,
    u32,
    f32,
    f64,
    &str,
    &String,
    String,
    Vec<u8>,
    &[u8],
    Uuid,
    DateTime<Utc>,
    NaiveDate,
    serde_json::Value,
);
