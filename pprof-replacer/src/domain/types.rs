//! Core value types

use std::fmt;

/// A single string-table rename: every entry equal to `from` becomes `to`.
///
/// No validation is applied. An empty `to` or `from == to` are both accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

impl fmt::Display for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_display() {
        let r = Replacement::new("main.foo", "main.renamed");
        assert_eq!(r.to_string(), "main.foo -> main.renamed");
    }

    #[test]
    fn test_replacement_accepts_empty_and_identity() {
        let empty = Replacement::new("main.foo", "");
        assert_eq!(empty.to, "");

        let same = Replacement::new("x", "x");
        assert_eq!(same.from, same.to);
    }
}
