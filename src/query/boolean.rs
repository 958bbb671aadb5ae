//! Boolean query for combining sub-queries.

use crate::query::query::SearchQuery;

/// Occurrence requirements for boolean clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    /// The clause must match (equivalent to AND).
    Must,
    /// The clause should match (equivalent to OR).
    Should,
    /// The clause must not match (equivalent to NOT).
    MustNot,
}

/// A clause in a boolean query.
#[derive(Debug, Clone)]
pub struct BooleanClause {
    /// The sub-query for this clause.
    pub query: SearchQuery,
    /// The occurrence requirement.
    pub occur: Occur,
}

impl BooleanClause {
    /// Create a new boolean clause.
    pub fn new(query: SearchQuery, occur: Occur) -> Self {
        BooleanClause { query, occur }
    }

    /// Create a MUST clause.
    pub fn must(query: SearchQuery) -> Self {
        BooleanClause::new(query, Occur::Must)
    }

    /// Create a SHOULD clause.
    pub fn should(query: SearchQuery) -> Self {
        BooleanClause::new(query, Occur::Should)
    }

    /// Create a MUST_NOT clause.
    pub fn must_not(query: SearchQuery) -> Self {
        BooleanClause::new(query, Occur::MustNot)
    }
}

/// A query combining multiple sub-queries with boolean logic.
#[derive(Debug, Clone, Default)]
pub struct BooleanQuery {
    /// The clauses in this boolean query.
    clauses: Vec<BooleanClause>,
    /// Minimum number of SHOULD clauses that must match.
    minimum_should_match: usize,
}

impl BooleanQuery {
    /// Create a new empty boolean query.
    pub fn new() -> Self {
        BooleanQuery::default()
    }

    /// Add a clause to this boolean query.
    pub fn add_clause(&mut self, clause: BooleanClause) {
        self.clauses.push(clause);
    }

    /// Add a MUST clause.
    pub fn add_must<Q: Into<SearchQuery>>(&mut self, query: Q) {
        self.add_clause(BooleanClause::must(query.into()));
    }

    /// Add a SHOULD clause.
    pub fn add_should<Q: Into<SearchQuery>>(&mut self, query: Q) {
        self.add_clause(BooleanClause::should(query.into()));
    }

    /// Add a MUST_NOT clause.
    pub fn add_must_not<Q: Into<SearchQuery>>(&mut self, query: Q) {
        self.add_clause(BooleanClause::must_not(query.into()));
    }

    /// Set the minimum number of SHOULD clauses that must match.
    pub fn with_minimum_should_match(mut self, minimum: usize) -> Self {
        self.minimum_should_match = minimum;
        self
    }

    /// Get the clauses.
    pub fn clauses(&self) -> &[BooleanClause] {
        &self.clauses
    }

    /// Get the minimum-should-match value.
    pub fn minimum_should_match(&self) -> usize {
        self.minimum_should_match
    }

    /// Check if this query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Get clauses with the given occurrence requirement.
    pub fn clauses_by_occur(&self, occur: Occur) -> Vec<&BooleanClause> {
        self.clauses.iter().filter(|c| c.occur == occur).collect()
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        let parts: Vec<String> = self
            .clauses
            .iter()
            .map(|clause| {
                let prefix = match clause.occur {
                    Occur::Must => "+",
                    Occur::Should => "",
                    Occur::MustNot => "-",
                };
                format!("{}{}", prefix, clause.query.description())
            })
            .collect();
        format!("({})", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::term::TermQuery;

    #[test]
    fn test_clauses_by_occur() {
        let mut query = BooleanQuery::new();
        query.add_must(TermQuery::new("f", "a"));
        query.add_should(TermQuery::new("f", "b"));
        query.add_must_not(TermQuery::new("f", "c"));

        assert_eq!(query.clauses_by_occur(Occur::Must).len(), 1);
        assert_eq!(query.clauses_by_occur(Occur::Should).len(), 1);
        assert_eq!(query.clauses_by_occur(Occur::MustNot).len(), 1);
        assert!(!query.is_empty());
    }

    #[test]
    fn test_description() {
        let mut query = BooleanQuery::new();
        query.add_must(TermQuery::new("f", "a"));
        query.add_must_not(TermQuery::new("f", "b"));

        assert_eq!(query.description(), "(+f:a -f:b)");
    }
}
