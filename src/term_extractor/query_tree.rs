//! The recursive tree mirroring a query's boolean structure.

use crate::term_extractor::term::QueryTerm;

/// A node in the analyzed form of a stored query.
///
/// Trees are immutable once built; term collection never mutates them, so one
/// tree can be re-collected under any number of phases.
#[derive(Debug, Clone)]
pub enum QueryTree {
    /// A single extractable term.
    Term(QueryTerm),
    /// A positional phrase; its terms are weighed and collected as a unit.
    Phrase(Vec<QueryTerm>),
    /// All children must match for the query to match.
    Conjunction(Vec<QueryTree>),
    /// At least `minimum_should_match` children must match.
    Disjunction {
        /// The alternative branches.
        children: Vec<QueryTree>,
        /// Minimum number of branches that must match (at least 1).
        minimum_should_match: usize,
    },
    /// No concrete term can be safely derived; collection yields the
    /// match-everything sentinel for `field`.
    Any {
        /// The field the sentinel is indexed under; empty when the
        /// unextractable structure has no single field.
        field: String,
    },
    /// A structure the analyzer cannot reason about. Collecting terms from a
    /// tree containing this node is a hard error: an unknown sub-structure
    /// invalidates the entire analysis.
    Unsupported {
        /// Human-readable description of the offending structure.
        reason: String,
    },
}

impl QueryTree {
    /// Create a term leaf.
    pub fn term(term: QueryTerm) -> Self {
        QueryTree::Term(term)
    }

    /// Create a phrase leaf.
    pub fn phrase(terms: Vec<QueryTerm>) -> Self {
        QueryTree::Phrase(terms)
    }

    /// Create a conjunction over `children`.
    ///
    /// A single child collapses to the child itself; an empty conjunction has
    /// no extractable structure and degrades to [`QueryTree::Any`].
    pub fn conjunction(mut children: Vec<QueryTree>) -> Self {
        match children.len() {
            0 => QueryTree::any_node(""),
            1 => children.pop().expect("length checked"),
            _ => QueryTree::Conjunction(children),
        }
    }

    /// Create a disjunction over `children` with the given
    /// minimum-should-match (clamped to at least 1).
    ///
    /// A single child collapses to the child itself; an empty disjunction
    /// degrades to [`QueryTree::Any`].
    pub fn disjunction(mut children: Vec<QueryTree>, minimum_should_match: usize) -> Self {
        match children.len() {
            0 => QueryTree::any_node(""),
            1 => children.pop().expect("length checked"),
            _ => QueryTree::Disjunction {
                children,
                minimum_should_match: minimum_should_match.max(1),
            },
        }
    }

    /// Create a match-everything leaf for a field.
    pub fn any_node<F: Into<String>>(field: F) -> Self {
        QueryTree::Any {
            field: field.into(),
        }
    }

    /// Create an unsupported-structure marker.
    pub fn unsupported<S: Into<String>>(reason: S) -> Self {
        QueryTree::Unsupported {
            reason: reason.into(),
        }
    }
}
