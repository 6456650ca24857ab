use super::Node;

/// A table reference, optionally aliased.
///
/// Columns taken from an aliased table are qualified by the alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    pub name: String,
    pub alias: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Set the alias used in FROM/JOIN clauses and column qualifiers.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The name columns are qualified with: the alias if set, else the name.
    pub fn reference_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// A column of this table, e.g. `"users"."id"`.
    pub fn col(&self, name: impl Into<String>) -> Node {
        Node::Attribute {
            name: Box::new(Node::Column(name.into())),
            table: self.clone(),
        }
    }

    /// All columns of this table, `"users".*`.
    pub fn star(&self) -> Node {
        Node::Attribute {
            name: Box::new(Node::Star),
            table: self.clone(),
        }
    }
}

impl From<&str> for Table {
    fn from(name: &str) -> Self {
        Table::new(name)
    }
}

impl From<String> for Table {
    fn from(name: String) -> Self {
        Table::new(name)
    }
}

impl From<&Table> for Table {
    fn from(t: &Table) -> Self {
        t.clone()
    }
}
