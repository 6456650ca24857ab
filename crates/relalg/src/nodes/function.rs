use super::Node;

/// A named SQL function call such as `COUNT(*)` or `COALESCE(a, ?)`.
///
/// `args == None` renders as `*`.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub args: Option<Vec<Node>>,
    pub alias: Option<String>,
    pub distinct: bool,
}

impl Function {
    pub fn new<T: Into<Node>>(name: impl Into<String>, args: impl IntoIterator<Item = T>) -> Self {
        Self {
            name: name.into(),
            args: Some(args.into_iter().map(Into::into).collect()),
            alias: None,
            distinct: false,
        }
    }

    /// A call whose argument list is `*`.
    pub fn glob(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: None,
            alias: None,
            distinct: false,
        }
    }

    /// Prefix the arguments with `DISTINCT`.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Render as `NAME(...) AS "alias"`.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    // ==================== Aggregates ====================

    pub fn count(expr: impl Into<Node>) -> Self {
        Self::new("COUNT", [expr.into()])
    }

    /// `COUNT(*)`
    pub fn count_all() -> Self {
        Self::glob("COUNT")
    }

    pub fn sum(expr: impl Into<Node>) -> Self {
        Self::new("SUM", [expr.into()])
    }

    pub fn avg(expr: impl Into<Node>) -> Self {
        Self::new("AVG", [expr.into()])
    }

    pub fn min(expr: impl Into<Node>) -> Self {
        Self::new("MIN", [expr.into()])
    }

    pub fn max(expr: impl Into<Node>) -> Self {
        Self::new("MAX", [expr.into()])
    }

    // ==================== Scalar ====================

    pub fn coalesce<T: Into<Node>>(args: impl IntoIterator<Item = T>) -> Self {
        Self::new("COALESCE", args)
    }

    pub fn lower(expr: impl Into<Node>) -> Self {
        Self::new("LOWER", [expr.into()])
    }

    pub fn upper(expr: impl Into<Node>) -> Self {
        Self::new("UPPER", [expr.into()])
    }

    /// `SUBSTRING(expr,start,length)`
    pub fn substring(expr: impl Into<Node>, start: impl Into<Node>, length: impl Into<Node>) -> Self {
        Self::new("SUBSTRING", [expr.into(), start.into(), length.into()])
    }
}
