//! Append-only sinks for SQL text and bind arguments.
//!
//! The compiler writes `?` wherever a placeholder belongs. A [`FixedCollector`]
//! keeps it as is; a [`NumberedCollector`] rewrites every `?` it receives into
//! `$1`, `$2`, ... in arrival order, including `?` inside raw literal text.

use crate::value::Value;
use std::fmt::Write as _;

/// The placeholder token written by the compiler.
pub const PLACEHOLDER: char = '?';

/// Accumulates SQL text and bind arguments during a compile.
pub trait Collector {
    /// Append a text fragment.
    fn append_str(&mut self, s: &str);

    /// Append a single ASCII byte.
    fn append_byte(&mut self, b: u8);

    /// Append a bind argument.
    fn append_arg(&mut self, value: Value);

    /// The SQL text written so far.
    fn text(&self) -> &str;

    /// The bind arguments appended so far.
    fn args(&self) -> &[Value];

    /// Consume the collector, returning its text and arguments.
    fn into_parts(self) -> (String, Vec<Value>);
}

/// Collector for dialects that use a fixed `?` placeholder.
#[derive(Debug, Clone, Default)]
pub struct FixedCollector {
    sql: String,
    args: Vec<Value>,
}

impl FixedCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Collector for FixedCollector {
    fn append_str(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    fn append_byte(&mut self, b: u8) {
        debug_assert!(b.is_ascii());
        self.sql.push(b as char);
    }

    fn append_arg(&mut self, value: Value) {
        self.args.push(value);
    }

    fn text(&self) -> &str {
        &self.sql
    }

    fn args(&self) -> &[Value] {
        &self.args
    }

    fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

/// Collector that numbers placeholders PostgreSQL style (`$1`, `$2`, ...).
///
/// The counter belongs to the collector, so each compile gets a fresh
/// sequence.
#[derive(Debug, Clone)]
pub struct NumberedCollector {
    sql: String,
    args: Vec<Value>,
    next: usize,
}

impl Default for NumberedCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberedCollector {
    pub fn new() -> Self {
        Self {
            sql: String::with_capacity(512),
            args: Vec::new(),
            next: 1,
        }
    }

    /// Number of placeholders rewritten so far.
    pub fn placeholder_count(&self) -> usize {
        self.next - 1
    }

    fn push_placeholder(&mut self) {
        self.sql.push('$');
        // Writing to a String cannot fail.
        let _ = write!(self.sql, "{}", self.next);
        self.next += 1;
    }
}

fn digits(mut n: usize) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

impl Collector for NumberedCollector {
    fn append_str(&mut self, s: &str) {
        let count = s.matches(PLACEHOLDER).count();
        if count == 0 {
            self.sql.push_str(s);
            return;
        }

        self.sql
            .reserve(s.len() + count * digits(self.next + count - 1));
        let mut rest = s;
        while let Some(pos) = rest.find(PLACEHOLDER) {
            self.sql.push_str(&rest[..pos]);
            self.push_placeholder();
            rest = &rest[pos + 1..];
        }
        self.sql.push_str(rest);
    }

    fn append_byte(&mut self, b: u8) {
        debug_assert!(b.is_ascii());
        if b as char == PLACEHOLDER {
            self.push_placeholder();
        } else {
            self.sql.push(b as char);
        }
    }

    fn append_arg(&mut self, value: Value) {
        self.args.push(value);
    }

    fn text(&self) -> &str {
        &self.sql
    }

    fn args(&self) -> &[Value] {
        &self.args
    }

    fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}
