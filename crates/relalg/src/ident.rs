//! SQL identifier validation.
//!
//! Identifiers cannot be bound as parameters, so every table and column name is
//! checked before it is quoted into the output. A valid name starts with an
//! ASCII letter followed by letters, digits, `_` or `$`:
//!
//! ```text
//! ^[A-Za-z][A-Za-z0-9_$]*$
//! ```
//!
//! The pattern excludes every quote character, so a name that passes can be
//! wrapped in the dialect's quote without escaping.
//!
//! Function names are written unquoted and follow a stricter pattern,
//! `^[A-Za-z_][A-Za-z0-9_]*$`, which keeps `?` out of the output.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// What an identifier names, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentKind {
    Table,
    Column,
    Function,
}

impl IdentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IdentKind::Table => "table",
            IdentKind::Column => "column",
            IdentKind::Function => "function",
        }
    }
}

impl fmt::Display for IdentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Explicit ASCII ranges: `(?i)` would also fold characters such as U+017F
// and U+212A onto ASCII letters.
fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z][A-Za-z0-9_$]*$").expect("invalid built-in identifier regex")
    })
}

fn function_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("invalid built-in function name regex")
    })
}

/// Check whether `name` may be quoted into SQL as an identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    identifier_regex().is_match(name)
}

/// Check whether `name` may be written unquoted as a function name.
pub fn is_valid_function_name(name: &str) -> bool {
    function_name_regex().is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_accepts_simple_names() {
        assert!(is_valid_identifier("users"));
        assert!(is_valid_identifier("Users"));
        assert!(is_valid_identifier("user_id"));
        assert!(is_valid_identifier("a1$b"));
    }

    #[test]
    fn ident_rejects_bad_start() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("_id"));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier(".bad"));
        // Non-ASCII letters that case-fold to `s` and `k`.
        assert!(!is_valid_identifier("\u{17F}elect"));
        assert!(!is_valid_identifier("\u{212A}elvin"));
    }

    #[test]
    fn ident_rejects_quotes_and_spaces() {
        assert!(!is_valid_identifier("a\"b"));
        assert!(!is_valid_identifier("a`b"));
        assert!(!is_valid_identifier("a b"));
        assert!(!is_valid_identifier("users;drop"));
        assert!(!is_valid_identifier("public.users"));
    }

    #[test]
    fn ident_kind_display() {
        assert_eq!(IdentKind::Table.to_string(), "table");
        assert_eq!(IdentKind::Column.to_string(), "column");
        assert_eq!(IdentKind::Function.to_string(), "function");
    }

    #[test]
    fn function_names() {
        assert!(is_valid_function_name("COUNT"));
        assert!(is_valid_function_name("json_build_object"));
        assert!(is_valid_function_name("_private"));
        assert!(!is_valid_function_name(""));
        assert!(!is_valid_function_name("COUNT?"));
        assert!(!is_valid_function_name("lower(x); --"));
        assert!(!is_valid_function_name("a$b"));
    }
}
