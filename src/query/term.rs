//! Term query for exact term matching.

/// A query matching documents that contain a specific term.
///
/// The term is not analyzed; it should already be in normalized form (e.g.
/// lowercased) as produced by the engine's query parser or analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermQuery {
    /// The field to search in.
    field: String,
    /// The term to search for.
    term: String,
}

impl TermQuery {
    /// Create a new term query.
    pub fn new<F, T>(field: F, term: T) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        TermQuery {
            field: field.into(),
            term: term.into(),
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        format!("{}:{}", self.field, self.term)
    }
}
