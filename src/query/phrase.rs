//! Phrase query for exact phrase matching.

/// A query matching documents where the given terms appear in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseQuery {
    /// The field to search in.
    field: String,
    /// The terms that make up the phrase, in order.
    terms: Vec<String>,
}

impl PhraseQuery {
    /// Create a new phrase query.
    pub fn new<F: Into<String>>(field: F, terms: Vec<String>) -> Self {
        PhraseQuery {
            field: field.into(),
            terms,
        }
    }

    /// Create a phrase query by splitting a phrase string on whitespace.
    pub fn from_phrase<F: Into<String>>(field: F, phrase: &str) -> Self {
        let terms = phrase.split_whitespace().map(|s| s.to_string()).collect();
        PhraseQuery::new(field, terms)
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the phrase terms, in order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        format!("{}:\"{}\"", self.field, self.terms.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_phrase() {
        let query = PhraseQuery::from_phrase("body", "quick brown fox");
        assert_eq!(query.terms(), ["quick", "brown", "fox"]);
        assert_eq!(query.description(), "body:\"quick brown fox\"");
    }
}
