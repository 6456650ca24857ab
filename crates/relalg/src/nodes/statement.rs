use super::{Node, Table};

/// A joined table with an optional `ON` clause.
#[derive(Debug, Clone)]
pub struct Join {
    pub table: Table,
    /// Usually a [`Node::On`]; rendered after the table.
    pub on: Option<Box<Node>>,
}

impl Join {
    pub fn new(table: impl Into<Table>, on: Option<Node>) -> Self {
        Self {
            table: table.into(),
            on: on.map(Box::new),
        }
    }
}

/// The FROM clause: a table followed by its joins in append order.
#[derive(Debug, Clone)]
pub struct JoinSource {
    pub left: Table,
    pub right: Vec<Node>,
}

impl JoinSource {
    pub fn new(left: impl Into<Table>) -> Self {
        Self {
            left: left.into(),
            right: Vec::new(),
        }
    }

    /// The most recently appended join, if any.
    pub fn last_join_mut(&mut self) -> Option<&mut Join> {
        match self.right.last_mut() {
            Some(Node::InnerJoin(join) | Node::OuterJoin(join)) => Some(join),
            _ => None,
        }
    }
}

/// Set operation joining two SELECT statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOperator {
    Union,
    Intersect,
    Except,
}

impl SetOperator {
    pub fn keyword(self) -> &'static str {
        match self {
            SetOperator::Union => "UNION",
            SetOperator::Intersect => "INTERSECT",
            SetOperator::Except => "EXCEPT",
        }
    }
}

/// The right-hand side of a set operation whose left side is the owning
/// statement.
#[derive(Debug, Clone)]
pub struct Combinator {
    pub operator: SetOperator,
    pub right: Box<SelectStatement>,
}

/// `SELECT ... FROM ...`
#[derive(Debug, Clone)]
pub struct SelectStatement {
    /// The statement's table and its joins.
    pub source: JoinSource,
    pub cols: Vec<Node>,
    pub wheres: Vec<Node>,
    pub groups: Vec<Node>,
    pub having: Option<Box<Node>>,
    pub orders: Vec<Node>,
    pub combinator: Option<Combinator>,
    pub limit: Option<Box<Node>>,
    pub offset: Option<Box<Node>>,
}

impl SelectStatement {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            source: JoinSource::new(table),
            cols: Vec::new(),
            wheres: Vec::new(),
            groups: Vec::new(),
            having: None,
            orders: Vec::new(),
            combinator: None,
            limit: None,
            offset: None,
        }
    }

    pub fn table(&self) -> &Table {
        &self.source.left
    }

    /// Append a projected column.
    pub fn column(mut self, col: impl Into<Node>) -> Self {
        self.cols.push(col.into());
        self
    }

    /// Append a WHERE predicate as given.
    pub fn filter(mut self, expr: impl Into<Node>) -> Self {
        self.wheres.push(expr.into());
        self
    }

    /// Attach `right` as the deepest right-hand side of this statement's
    /// set-operation chain.
    pub fn combine(&mut self, operator: SetOperator, right: SelectStatement) {
        let mut slot = &mut self.combinator;
        while let Some(c) = slot {
            slot = &mut c.right.combinator;
        }
        *slot = Some(Combinator {
            operator,
            right: Box::new(right),
        });
    }
}

/// `INSERT INTO ... VALUES (...)`
#[derive(Debug, Clone)]
pub struct InsertStatement {
    pub table: Table,
    pub columns: Vec<Node>,
    pub values: Vec<Node>,
    pub returning: Option<Box<Node>>,
}

impl InsertStatement {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
            returning: None,
        }
    }
}

/// `UPDATE ... SET ...`
#[derive(Debug, Clone)]
pub struct UpdateStatement {
    pub table: Table,
    /// [`Node::Assignment`] entries, or bare columns still awaiting a value.
    pub assignments: Vec<Node>,
    pub wheres: Vec<Node>,
    pub limit: Option<Box<Node>>,
}

impl UpdateStatement {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            table: table.into(),
            assignments: Vec::new(),
            wheres: Vec::new(),
            limit: None,
        }
    }
}

/// `DELETE FROM ...`
#[derive(Debug, Clone)]
pub struct DeleteStatement {
    pub table: Table,
    pub wheres: Vec<Node>,
    pub limit: Option<Box<Node>>,
}

impl DeleteStatement {
    pub fn new(table: impl Into<Table>) -> Self {
        Self {
            table: table.into(),
            wheres: Vec::new(),
            limit: None,
        }
    }
}
