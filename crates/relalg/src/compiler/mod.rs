//! Dialect-aware compilation of node trees into SQL plus bind arguments.
//!
//! [`compile`] picks a collector for the configured dialect and walks the tree
//! left to right, so the `i`-th placeholder in the output always corresponds
//! to `args[i]`. The first error stops the walk. The text written so far is
//! returned inside [`CompileFailure`] with an inline marker at the failure
//! point; it must not be executed.
//!
//! # Example
//! ```ignore
//! use relalg::prelude::*;
//!
//! let users = Table::new("users");
//! let stmt = SelectStatement::new(users.clone()).filter(users.col("id").eq(7));
//! let out = compile(&stmt.into(), &CompileConfig::new(Dialect::Postgres))?;
//! assert_eq!(out.sql, r#"SELECT * FROM "users" WHERE "users"."id"=$1"#);
//! ```


use crate::collector::{Collector, FixedCollector, NumberedCollector, PLACEHOLDER};
use crate::config::CompileConfig;
use crate::dialect::{Dialect, ERROR_MARKER};
use crate::error::{CompileError, CompileFailure, CompileResult};
use crate::ident::{IdentKind, is_valid_function_name};
use crate::nodes::{
    Binary, DeleteStatement, EXPANSION_TOKEN, Function, InsertStatement, Join, JoinSource,
    Literal, Node, SelectStatement, SetOperator, Table, UpdateStatement,
};
use crate::value::Value;

/// Inline comment written after the first expansion when a literal holds a
/// second `?...` token.
pub const DUPLICATE_EXPANSION_MARKER: &str = " -- ERROR: duplicate expansion token -- ";

/// Compiled SQL and its bind arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Compiled {
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }

    /// Arguments as references compatible with tokio-postgres.
    #[cfg(feature = "postgres")]
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.args
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }
}

/// Compile `node` under `config`.
pub fn compile(node: &Node, config: &CompileConfig) -> Result<Compiled, CompileFailure> {
    let result = if config.dialect.numbered_placeholders() {
        Compiler::new(NumberedCollector::new(), config).run(node)
    } else {
        Compiler::new(FixedCollector::new(), config).run(node)
    };

    if config.debug {
        match &result {
            Ok(out) => tracing::debug!(
                target: "relalg.sql",
                dialect = %config.dialect,
                sql = %out.sql,
                args = ?out.args.iter().map(crate::value::Value::type_name).collect::<Vec<_>>(),
                "compiled"
            ),
            Err(failure) => tracing::debug!(
                target: "relalg.sql",
                dialect = %config.dialect,
                sql = %failure.sql,
                error = %failure.error,
                "compile failed"
            ),
        }
    }
    result
}

/// Walks a node tree, writing into a collector.
///
/// One compiler serves one compile call.
pub struct Compiler<C: Collector> {
    out: C,
    dialect: Dialect,
    debug: bool,
    depth: usize,
}

impl<C: Collector> Compiler<C> {
    pub fn new(out: C, config: &CompileConfig) -> Self {
        Self {
            out,
            dialect: config.dialect,
            debug: config.debug,
            depth: 0,
        }
    }

    /// Visit `node` and consume the compiler.
    pub fn run(mut self, node: &Node) -> Result<Compiled, CompileFailure> {
        let result = self.visit(node);
        let (sql, args) = self.out.into_parts();
        match result {
            Ok(()) => Ok(Compiled { sql, args }),
            Err(error) => Err(CompileFailure { error, sql, args }),
        }
    }

    pub fn visit(&mut self, node: &Node) -> CompileResult<()> {
        if self.debug {
            tracing::trace!(
                target: "relalg.sql",
                node = node.kind_name(),
                depth = self.depth,
                "visit"
            );
        }
        self.depth += 1;
        let result = self.dispatch(node);
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, node: &Node) -> CompileResult<()> {
        match node {
            // ==================== Leaves ====================
            Node::Value(v) => {
                self.bind(v.clone());
                Ok(())
            }
            Node::Literal(lit) => self.visit_literal(lit),
            Node::Column(name) => self.quote(IdentKind::Column, name),
            Node::Attribute { name, table } => self.visit_attribute(name, table),
            Node::Table(table) => self.visit_table_reference(table),
            Node::Star => {
                self.out.append_byte(b'*');
                Ok(())
            }
            Node::Binding => {
                self.out.append_byte(PLACEHOLDER as u8);
                Ok(())
            }
            Node::List(items) => self.visit_list(items),
            Node::Function(f) => self.visit_function(f),

            // ==================== Unary ====================
            Node::Grouping(expr) => self.wrap("(", expr, ")"),
            Node::Not(expr) => self.wrap("NOT (", expr, ")"),
            Node::On(expr) => self.wrap("ON ", expr, ""),
            Node::Limit(expr) => self.wrap("LIMIT ", expr, ""),
            Node::Offset(expr) => self.wrap("OFFSET ", expr, ""),
            Node::Having(expr) => self.wrap("HAVING ", expr, ""),
            Node::Ascending(expr) => self.wrap("", expr, " ASC"),
            Node::Descending(expr) => self.wrap("", expr, " DESC"),

            // ==================== Binary ====================
            Node::Equal(b) if b.right.is_null_value() => self.wrap("", &b.left, " IS NULL"),
            Node::NotEqual(b) if b.right.is_null_value() => {
                self.wrap("", &b.left, " IS NOT NULL")
            }
            Node::Equal(b) => self.infix(b, "="),
            Node::NotEqual(b) => self.infix(b, "!="),
            Node::GreaterThan(b) => self.infix(b, ">"),
            Node::GreaterThanOrEqual(b) => self.infix(b, ">="),
            Node::LessThan(b) => self.infix(b, "<"),
            Node::LessThanOrEqual(b) => self.infix(b, "<="),
            Node::Like(b) => self.infix(b, self.dialect.like_keyword(false)),
            Node::Unlike(b) => self.infix(b, self.dialect.like_keyword(true)),
            Node::In(b) => self.visit_in(b),
            Node::And(b) => self.infix(b, " AND "),
            Node::Or(b) => self.infix(b, " OR "),
            Node::Assignment(b) => self.infix(b, "="),
            Node::As(b) => self.infix(b, " AS "),
            Node::Union(b) => self.visit_set_operation(SetOperator::Union, b),
            Node::Intersect(b) => self.visit_set_operation(SetOperator::Intersect, b),
            Node::Except(b) => self.visit_set_operation(SetOperator::Except, b),

            // ==================== Joins ====================
            Node::InnerJoin(join) => self.visit_join("INNER JOIN ", join),
            Node::OuterJoin(join) => self.visit_join("LEFT OUTER JOIN ", join),
            Node::JoinSource(source) => self.visit_join_source(source),

            // ==================== Statements ====================
            // Only the outermost SELECT goes without parentheses. A SELECT
            // with a set operation already brings its own pair.
            Node::Select(stmt) if self.depth > 1 && stmt.combinator.is_none() => {
                self.out.append_byte(b'(');
                self.visit_select(stmt)?;
                self.out.append_byte(b')');
                Ok(())
            }
            Node::Select(stmt) => self.visit_select(stmt),
            Node::Insert(stmt) => self.visit_insert(stmt),
            Node::Update(stmt) => self.visit_update(stmt),
            Node::Delete(stmt) => self.visit_delete(stmt),
        }
    }

    // ==================== Helpers ====================

    fn bind(&mut self, value: Value) {
        self.out.append_byte(PLACEHOLDER as u8);
        self.out.append_arg(value);
    }

    fn quote(&mut self, kind: IdentKind, name: &str) -> CompileResult<()> {
        self.dialect.quote_identifier(kind, name, &mut self.out)
    }

    fn wrap(&mut self, prefix: &str, expr: &Node, suffix: &str) -> CompileResult<()> {
        self.out.append_str(prefix);
        self.visit(expr)?;
        self.out.append_str(suffix);
        Ok(())
    }

    fn infix(&mut self, b: &Binary, op: &str) -> CompileResult<()> {
        self.visit(&b.left)?;
        self.out.append_str(op);
        self.visit(&b.right)
    }

    fn visit_joined(&mut self, nodes: &[Node], sep: &str) -> CompileResult<()> {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.out.append_str(sep);
            }
            self.visit(node)?;
        }
        Ok(())
    }

    fn visit_list(&mut self, items: &[Node]) -> CompileResult<()> {
        self.visit_joined(items, ",")
    }

    // ==================== Leaves ====================

    fn visit_literal(&mut self, lit: &Literal) -> CompileResult<()> {
        let Some(pos) = lit.sql.find(EXPANSION_TOKEN) else {
            self.out.append_str(&lit.sql);
            self.push_args(&lit.args);
            return Ok(());
        };

        let markers = lit.expansion_count();
        let plain = lit.sql.matches(PLACEHOLDER).count() - markers;
        let expanded = lit.args.len().saturating_sub(plain);

        self.out.append_str(&lit.sql[..pos]);
        for i in 0..expanded {
            if i > 0 {
                self.out.append_byte(b',');
            }
            self.out.append_byte(PLACEHOLDER as u8);
        }

        let rest = &lit.sql[pos + EXPANSION_TOKEN.len()..];
        if markers > 1 {
            self.out.append_str(DUPLICATE_EXPANSION_MARKER);
            self.out.append_str(rest);
            self.push_args(&lit.args);
            return Err(CompileError::DuplicateExpansionToken {
                sql: lit.sql.clone(),
            });
        }

        self.out.append_str(rest);
        self.push_args(&lit.args);
        Ok(())
    }

    fn push_args(&mut self, args: &[Value]) {
        for arg in args {
            self.out.append_arg(arg.clone());
        }
    }

    fn visit_attribute(&mut self, name: &Node, table: &Table) -> CompileResult<()> {
        self.visit_table_reference(table)?;
        self.out.append_byte(b'.');
        match name {
            Node::Column(col) => self.quote(IdentKind::Column, col),
            other => self.visit(other),
        }
    }

    /// `"alias"` when aliased, else `"name"`.
    fn visit_table_reference(&mut self, table: &Table) -> CompileResult<()> {
        self.quote(IdentKind::Table, table.reference_name())
    }

    /// `"name"` or `"name" AS "alias"`, for FROM/JOIN/statement targets.
    fn visit_table_source(&mut self, table: &Table) -> CompileResult<()> {
        self.quote(IdentKind::Table, &table.name)?;
        if let Some(alias) = &table.alias {
            self.out.append_str(" AS ");
            self.quote(IdentKind::Table, alias)?;
        }
        Ok(())
    }

    fn visit_function(&mut self, f: &Function) -> CompileResult<()> {
        if !is_valid_function_name(&f.name) {
            self.out.append_str(ERROR_MARKER);
            return Err(CompileError::invalid_identifier(IdentKind::Function, &f.name));
        }
        self.out.append_str(&f.name);
        self.out.append_byte(b'(');
        if f.distinct {
            self.out.append_str("DISTINCT ");
        }
        match &f.args {
            Some(args) => self.visit_list(args)?,
            None => self.out.append_byte(b'*'),
        }
        self.out.append_byte(b')');
        if let Some(alias) = &f.alias {
            self.out.append_str(" AS ");
            self.quote(IdentKind::Column, alias)?;
        }
        Ok(())
    }

    // ==================== Binary ====================

    fn visit_in(&mut self, b: &Binary) -> CompileResult<()> {
        self.visit(&b.left)?;
        self.out.append_str(" IN(");
        let Node::List(items) = b.right.as_ref() else {
            self.out.append_str(ERROR_MARKER);
            return Err(CompileError::MalformedInList {
                found: b.right.kind_name(),
            });
        };
        self.visit_list(items)?;
        self.out.append_byte(b')');
        Ok(())
    }

    /// `(left OP right)`; statement operands render without their own
    /// parentheses.
    fn visit_set_operation(&mut self, op: SetOperator, b: &Binary) -> CompileResult<()> {
        self.out.append_byte(b'(');
        self.visit_operand(&b.left)?;
        self.out.append_byte(b' ');
        self.out.append_str(op.keyword());
        self.out.append_byte(b' ');
        self.visit_operand(&b.right)?;
        self.out.append_byte(b')');
        Ok(())
    }

    fn visit_operand(&mut self, node: &Node) -> CompileResult<()> {
        match node {
            Node::Select(stmt) => self.visit_select(stmt),
            other => self.visit(other),
        }
    }

    // ==================== Joins ====================

    fn visit_join(&mut self, keyword: &str, join: &Join) -> CompileResult<()> {
        self.out.append_str(keyword);
        self.visit_table_source(&join.table)?;
        if let Some(on) = &join.on {
            self.out.append_byte(b' ');
            self.visit(on)?;
        }
        Ok(())
    }

    fn visit_join_source(&mut self, source: &JoinSource) -> CompileResult<()> {
        self.visit_table_source(&source.left)?;
        for join in &source.right {
            self.out.append_byte(b' ');
            self.visit(join)?;
        }
        Ok(())
    }

    // ==================== Statements ====================

    /// A SELECT with its set-operation chain. The statement itself is never
    /// modified, so compiling twice gives the same output.
    fn visit_select(&mut self, stmt: &SelectStatement) -> CompileResult<()> {
        let Some(combinator) = &stmt.combinator else {
            return self.visit_select_body(stmt);
        };
        self.out.append_byte(b'(');
        self.visit_select_body(stmt)?;
        self.out.append_byte(b' ');
        self.out.append_str(combinator.operator.keyword());
        self.out.append_byte(b' ');
        self.visit_select(&combinator.right)?;
        self.out.append_byte(b')');
        Ok(())
    }

    fn visit_select_body(&mut self, stmt: &SelectStatement) -> CompileResult<()> {
        self.out.append_str("SELECT ");
        if stmt.cols.is_empty() {
            self.out.append_byte(b'*');
        } else {
            self.visit_joined(&stmt.cols, ",")?;
        }

        self.out.append_str(" FROM ");
        self.visit_join_source(&stmt.source)?;

        self.visit_wheres(&stmt.wheres)?;
        if !stmt.groups.is_empty() {
            self.out.append_str(" GROUP BY ");
            self.visit_joined(&stmt.groups, ",")?;
        }
        if let Some(having) = &stmt.having {
            self.wrap(" HAVING ", having, "")?;
        }
        if !stmt.orders.is_empty() {
            self.out.append_str(" ORDER BY ");
            self.visit_joined(&stmt.orders, ",")?;
        }
        self.visit_limit(stmt.limit.as_deref())?;
        if let Some(offset) = &stmt.offset {
            self.wrap(" OFFSET ", offset, "")?;
        }
        Ok(())
    }

    fn visit_wheres(&mut self, wheres: &[Node]) -> CompileResult<()> {
        if wheres.is_empty() {
            return Ok(());
        }
        self.out.append_str(" WHERE ");
        self.visit_joined(wheres, " AND ")
    }

    fn visit_limit(&mut self, limit: Option<&Node>) -> CompileResult<()> {
        match limit {
            Some(limit) => self.wrap(" LIMIT ", limit, ""),
            None => Ok(()),
        }
    }

    /// Column targets of INSERT and UPDATE are written unqualified.
    fn visit_target_column(&mut self, node: &Node) -> CompileResult<()> {
        match node {
            Node::Attribute { name, .. } => self.visit(name),
            other => self.visit(other),
        }
    }

    fn visit_insert(&mut self, stmt: &InsertStatement) -> CompileResult<()> {
        self.out.append_str("INSERT INTO ");
        self.visit_table_source(&stmt.table)?;

        if !stmt.columns.is_empty() {
            self.out.append_str(" (");
            for (i, col) in stmt.columns.iter().enumerate() {
                if i > 0 {
                    self.out.append_byte(b',');
                }
                self.visit_target_column(col)?;
            }
            self.out.append_byte(b')');
        }

        if stmt.values.is_empty() {
            self.out.append_str(self.dialect.empty_insert());
        } else {
            self.out.append_str(" VALUES (");
            self.visit_list(&stmt.values)?;
            self.out.append_byte(b')');
        }

        if let Some(returning) = &stmt.returning {
            self.wrap(" RETURNING ", returning, "")?;
        }
        Ok(())
    }

    fn visit_update(&mut self, stmt: &UpdateStatement) -> CompileResult<()> {
        self.out.append_str("UPDATE ");
        self.visit_table_source(&stmt.table)?;
        self.out.append_str(" SET ");
        for (i, assignment) in stmt.assignments.iter().enumerate() {
            if i > 0 {
                self.out.append_byte(b',');
            }
            match assignment {
                Node::Assignment(b) => {
                    self.visit_target_column(&b.left)?;
                    self.out.append_byte(b'=');
                    self.visit(&b.right)?;
                }
                other => self.visit_target_column(other)?,
            }
        }
        self.visit_wheres(&stmt.wheres)?;
        self.visit_limit(stmt.limit.as_deref())
    }

    fn visit_delete(&mut self, stmt: &DeleteStatement) -> CompileResult<()> {
        self.out.append_str("DELETE FROM ");
        self.visit_table_source(&stmt.table)?;
        self.visit_wheres(&stmt.wheres)?;
        self.visit_limit(stmt.limit.as_deref())
    }
}
