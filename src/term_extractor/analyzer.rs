//! Analyzer orchestration: dispatch, tree building, and term collection.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{PresearchError, Result};
use crate::query::SearchQuery;
use crate::term_extractor::query_tree::QueryTree;
use crate::term_extractor::term::{ANY_TOKEN, QueryTerm};
use crate::term_extractor::tree_builder::{QueryTreeBuilder, default_builders};
use crate::term_extractor::tree_weightor::{MAX_TREE_DEPTH, Phase, TreeWeightor};

/// Analyzes stored queries into the small term set that represents them in
/// the query index.
///
/// Holds an ordered registry of tree builders (first match wins) and a
/// [`TreeWeightor`] deciding which branches contribute terms. Both are
/// configured once at construction and never mutated, so one analyzer can be
/// shared freely across threads and analyses.
#[derive(Debug)]
pub struct QueryAnalyzer {
    builders: Vec<Arc<dyn QueryTreeBuilder>>,
    weightor: TreeWeightor,
}

impl QueryAnalyzer {
    /// Create an analyzer using exactly the given builders, in order.
    ///
    /// The default builder set is *not* appended; use
    /// [`with_default_builders`](QueryAnalyzer::with_default_builders) or
    /// [`crate::presearcher::build_query_analyzer`] for the usual setup.
    pub fn new(weightor: TreeWeightor, builders: Vec<Arc<dyn QueryTreeBuilder>>) -> Self {
        QueryAnalyzer { builders, weightor }
    }

    /// Create an analyzer over the default builder set.
    pub fn with_default_builders(weightor: TreeWeightor) -> Self {
        QueryAnalyzer::new(weightor, default_builders())
    }

    /// Get the branch-selection policy in force.
    pub fn weightor(&self) -> &TreeWeightor {
        &self.weightor
    }

    /// Build the query tree for a source query.
    pub fn build_tree(&self, query: &SearchQuery) -> Result<QueryTree> {
        self.build_subtree(query, 0)
    }

    /// Build a tree node at a given nesting depth.
    ///
    /// Builders of composite query kinds call this for their children with
    /// `depth + 1`, so every nested sub-query goes through the same dispatch
    /// and the same depth accounting.
    pub fn build_subtree(&self, query: &SearchQuery, depth: usize) -> Result<QueryTree> {
        if depth > MAX_TREE_DEPTH {
            return Err(PresearchError::resource_exhausted(format!(
                "query nested deeper than {MAX_TREE_DEPTH} levels"
            )));
        }
        for builder in &self.builders {
            if builder.can_build(query) {
                return builder.build_tree(self, query, depth);
            }
        }
        Err(PresearchError::unsupported_query(query.kind_name()))
    }

    /// Build the tree for a query and collect its phase-0 terms.
    pub fn collect_terms(&self, query: &SearchQuery) -> Result<Vec<QueryTerm>> {
        let tree = self.build_tree(query)?;
        self.collect_tree_terms(&tree, Phase::ZERO)
    }

    /// Collect terms from an already-built tree at a given phase.
    pub fn collect_tree_terms(&self, tree: &QueryTree, phase: Phase) -> Result<Vec<QueryTerm>> {
        self.weightor.collect_terms(tree, phase)
    }

    /// Get the phase after `phase`, if the tree supports one.
    pub fn advance_phase(&self, tree: &QueryTree, phase: Phase) -> Option<Phase> {
        self.weightor.advance_phase(tree, phase)
    }

    /// Collect the best usable term set for a query.
    ///
    /// Starts at phase 0 and advances while the collected terms consist
    /// solely of the match-everything sentinel. When phases run out the
    /// degraded term set is returned as-is: an index entry that matches most
    /// documents is still correct, it is only expensive, and recall is never
    /// traded away for precision.
    pub fn best_terms(&self, query: &SearchQuery) -> Result<Vec<QueryTerm>> {
        let tree = self.build_tree(query)?;
        let mut phase = Phase::ZERO;
        let mut terms = self.collect_tree_terms(&tree, phase)?;
        while terms.iter().all(QueryTerm::is_any) {
            match self.advance_phase(&tree, phase) {
                Some(next) => {
                    debug!(
                        phase = next.index(),
                        query = %query.description(),
                        "term selection degraded, advancing phase"
                    );
                    phase = next;
                    terms = self.collect_tree_terms(&tree, phase)?;
                }
                None => {
                    warn!(
                        query = %query.description(),
                        "phases exhausted, indexing the match-everything sentinel"
                    );
                    break;
                }
            }
        }
        Ok(terms)
    }

    /// The fixed sentinel literal meaning "no selective term available".
    ///
    /// Document-side indexing must use exactly this value when emitting the
    /// always-candidate token.
    pub fn any_token(&self) -> &'static str {
        ANY_TOKEN
    }
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        QueryAnalyzer::with_default_builders(TreeWeightor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    use crate::query::{BooleanQuery, CustomQuery, TermQuery, WildcardQuery};

    #[test]
    fn test_unregistered_kind_is_an_error() {
        #[derive(Debug)]
        struct OpaqueQuery;

        impl CustomQuery for OpaqueQuery {
            fn as_any(&self) -> &dyn Any {
                self
            }

            fn description(&self) -> String {
                "opaque".to_string()
            }
        }

        let analyzer = QueryAnalyzer::default();
        let query = SearchQuery::Custom(Arc::new(OpaqueQuery));
        match analyzer.collect_terms(&query) {
            Err(PresearchError::UnsupportedQuery(kind)) => {
                assert!(kind.contains("opaque"));
            }
            other => panic!("expected an unsupported-query error, got {other:?}"),
        }
    }

    #[test]
    fn test_collect_terms_is_deterministic() {
        let mut boolean = BooleanQuery::new();
        boolean.add_must(TermQuery::new("f", "alpha"));
        boolean.add_must(TermQuery::new("g", "beta"));
        let query = SearchQuery::from(boolean);

        let analyzer = QueryAnalyzer::default();
        let first = analyzer.collect_terms(&query).unwrap();
        let second = analyzer.collect_terms(&query).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_degraded_query_round_trips_to_any() {
        let mut boolean = BooleanQuery::new();
        boolean.add_should(WildcardQuery::new("f", "*a").unwrap());
        boolean.add_should(WildcardQuery::new("g", "*b").unwrap());
        let query = SearchQuery::from(boolean);

        let analyzer = QueryAnalyzer::default();
        let terms = analyzer.best_terms(&query).unwrap();
        assert!(!terms.is_empty());
        assert!(terms.iter().all(QueryTerm::is_any));
    }

    #[test]
    fn test_any_token_literal() {
        let analyzer = QueryAnalyzer::default();
        assert_eq!(analyzer.any_token(), "__ANYTOKEN__");
    }
}
