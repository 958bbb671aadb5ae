//! Indexable terms extracted from stored queries.
//!
//! A [`QueryTerm`] is the leaf unit of extraction: a `(field, text, type)`
//! triple written into the query index as part of a stored query's
//! representation. Two terms are equal iff all three parts match exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The sentinel token indexed when no selective term can be derived from a
/// query. A document-side index entry carrying this token matches every
/// incoming document, so recall is preserved at the cost of precision.
///
/// Query side and document side must agree on this literal exactly.
pub const ANY_TOKEN: &str = "__ANYTOKEN__";

/// Classification of an extracted term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermType {
    /// An exact term taken verbatim from the query.
    Exact,
    /// A term derived from a wildcard-like query, matching by prefix or
    /// pattern rather than exactly.
    Wildcard,
    /// A term injected by an extension tree builder, tagged so that the
    /// owning component can recognize it at document-index time.
    Custom(String),
    /// The match-everything sentinel; see [`ANY_TOKEN`].
    Any,
}

/// An indexable term extracted from a stored query.
///
/// Immutable once constructed; value semantics for equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryTerm {
    field: String,
    text: String,
    term_type: TermType,
}

impl QueryTerm {
    /// Create a new query term.
    pub fn new<F, T>(field: F, text: T, term_type: TermType) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        QueryTerm {
            field: field.into(),
            text: text.into(),
            term_type,
        }
    }

    /// Create the match-everything sentinel term for a field.
    pub fn any<F: Into<String>>(field: F) -> Self {
        QueryTerm::new(field, ANY_TOKEN, TermType::Any)
    }

    /// Get the field this term is indexed under.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the term text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the term type.
    pub fn term_type(&self) -> &TermType {
        &self.term_type
    }

    /// Check whether this is the match-everything sentinel.
    pub fn is_any(&self) -> bool {
        matches!(self.term_type, TermType::Any)
    }
}

impl fmt::Display for QueryTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_equality() {
        let a = QueryTerm::new("f", "foo", TermType::Exact);
        let b = QueryTerm::new("f", "foo", TermType::Exact);
        let c = QueryTerm::new("f", "foo", TermType::Wildcard);
        let d = QueryTerm::new("g", "foo", TermType::Exact);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_any_term() {
        let term = QueryTerm::any("f");
        assert!(term.is_any());
        assert_eq!(term.text(), ANY_TOKEN);
        assert_eq!(term.field(), "f");
    }

    #[test]
    fn test_display() {
        let term = QueryTerm::new("title", "rust", TermType::Exact);
        assert_eq!(term.to_string(), "title:rust");
    }
}
