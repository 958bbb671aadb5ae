//! Candidate term lists and selection among alternatives.

use crate::error::{PresearchError, Result};
use crate::term_extractor::term::QueryTerm;
use crate::term_extractor::weights::TermWeightor;

/// An ordered term sequence representing (part of) a query, together with its
/// selectivity score.
///
/// The weight is computed once at construction and is a pure function of the
/// term sequence and the weighting rules in force.
#[derive(Debug, Clone)]
pub struct QueryTermList {
    terms: Vec<QueryTerm>,
    weight: f32,
}

impl QueryTermList {
    /// Create a term list, computing its weight with the given weightor.
    pub fn new(weightor: &dyn TermWeightor, terms: Vec<QueryTerm>) -> Self {
        let weight = weightor.weigh(&terms);
        QueryTermList { terms, weight }
    }

    /// Get the terms in this list.
    pub fn terms(&self) -> &[QueryTerm] {
        &self.terms
    }

    /// Consume the list, returning its terms.
    pub fn into_terms(self) -> Vec<QueryTerm> {
        self.terms
    }

    /// Get the selectivity score of this list.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Get the number of terms in this list.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether this list is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check whether every term in this list is the match-everything
    /// sentinel.
    pub fn is_all_any(&self) -> bool {
        self.terms.iter().all(QueryTerm::is_any)
    }

    /// Select the highest-weight candidate from a non-empty set.
    ///
    /// Ties are broken by input order, first seen wins, so selection is
    /// deterministic given a stable candidate order. An empty candidate set
    /// is a programmer error: every leaf yields at least the sentinel
    /// candidate, so callers can always supply one.
    pub fn select_best(candidates: Vec<QueryTermList>) -> Result<QueryTermList> {
        let mut best: Option<QueryTermList> = None;
        for candidate in candidates {
            let better = match &best {
                Some(current) => candidate.weight > current.weight,
                None => true,
            };
            if better {
                best = Some(candidate);
            }
        }
        best.ok_or_else(|| {
            PresearchError::invalid_operation("cannot select a term list from an empty candidate set")
        })
    }
}
