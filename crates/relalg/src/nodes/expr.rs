use super::{Function, Literal, Node};

/// Fluent operators shared by every expression-like node.
///
/// Each method consumes `self` and returns a new node; nothing is validated.
///
/// ```ignore
/// let users = Table::new("users");
/// users.col("id").eq(1).or(users.col("email").is_null())
/// // ("users"."id"=? OR "users"."email" IS NULL)
/// ```
pub trait Expression: Into<Node> + Sized {
    fn eq(self, other: impl Into<Node>) -> Node {
        Node::equal(self, other)
    }

    fn neq(self, other: impl Into<Node>) -> Node {
        Node::not_equal(self, other)
    }

    fn gt(self, other: impl Into<Node>) -> Node {
        Node::greater_than(self, other)
    }

    fn gte(self, other: impl Into<Node>) -> Node {
        Node::greater_than_or_equal(self, other)
    }

    fn lt(self, other: impl Into<Node>) -> Node {
        Node::less_than(self, other)
    }

    fn lte(self, other: impl Into<Node>) -> Node {
        Node::less_than_or_equal(self, other)
    }

    fn like(self, pattern: impl Into<Node>) -> Node {
        Node::like(self, pattern)
    }

    fn unlike(self, pattern: impl Into<Node>) -> Node {
        Node::unlike(self, pattern)
    }

    fn is_in<T: Into<Node>>(self, items: impl IntoIterator<Item = T>) -> Node {
        Node::in_list(self, items)
    }

    fn is_null(self) -> Node {
        Node::equal(self, Node::null())
    }

    fn is_not_null(self) -> Node {
        Node::not_equal(self, Node::null())
    }

    /// `(self AND other)`
    fn and(self, other: impl Into<Node>) -> Node {
        Node::grouping(Node::conjunction(self, other))
    }

    /// `(self OR other)`
    fn or(self, other: impl Into<Node>) -> Node {
        Node::grouping(Node::disjunction(self, other))
    }

    fn not(self) -> Node {
        Node::not(self)
    }

    fn asc(self) -> Node {
        Node::ascending(self)
    }

    fn desc(self) -> Node {
        Node::descending(self)
    }

    fn alias(self, alias: impl Into<String>) -> Node {
        Node::aliased(self, alias)
    }
}

impl Expression for Node {}
impl Expression for Function {}
impl Expression for Literal {}

/// Conversion used by `filter`, `order`, `group`, `having` and `on`.
///
/// A bare string becomes a [`Literal`]; nodes pass through unchanged.
pub trait IntoExpr {
    fn into_expr(self) -> Node;
}

impl IntoExpr for Node {
    fn into_expr(self) -> Node {
        self
    }
}

impl IntoExpr for Literal {
    fn into_expr(self) -> Node {
        Node::Literal(self)
    }
}

impl IntoExpr for Function {
    fn into_expr(self) -> Node {
        Node::Function(self)
    }
}

impl IntoExpr for &str {
    fn into_expr(self) -> Node {
        Node::sql(self)
    }
}

impl IntoExpr for String {
    fn into_expr(self) -> Node {
        Node::sql(self)
    }
}

/// Conversion used by projections and column lists.
///
/// A bare string becomes an unqualified [`Node::Column`].
pub trait IntoColumn {
    fn into_column(self) -> Node;
}

impl IntoColumn for Node {
    fn into_column(self) -> Node {
        self
    }
}

impl IntoColumn for Function {
    fn into_column(self) -> Node {
        Node::Function(self)
    }
}

impl IntoColumn for &str {
    fn into_column(self) -> Node {
        Node::column(self)
    }
}

impl IntoColumn for String {
    fn into_column(self) -> Node {
        Node::column(self)
    }
}
