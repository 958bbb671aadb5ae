//! Tree builders: one per source-query kind, dispatched in registration
//! order.

use std::fmt::Debug;
use std::sync::Arc;

use crate::error::{PresearchError, Result};
use crate::query::{Occur, SearchQuery};
use crate::term_extractor::analyzer::QueryAnalyzer;
use crate::term_extractor::query_tree::QueryTree;
use crate::term_extractor::term::{QueryTerm, TermType};

/// Builds a [`QueryTree`] node from a source query it recognizes.
///
/// Builders for composite kinds build their children back through the
/// analyzer, so nested sub-queries of any registered kind are handled by the
/// same dispatch. The `depth` argument is the current nesting level; pass
/// `depth + 1` when recursing.
pub trait QueryTreeBuilder: Debug + Send + Sync {
    /// Check whether this builder accepts the query.
    fn can_build(&self, query: &SearchQuery) -> bool;

    /// Build a tree node for a query this builder accepts.
    fn build_tree(
        &self,
        analyzer: &QueryAnalyzer,
        query: &SearchQuery,
        depth: usize,
    ) -> Result<QueryTree>;
}

/// The default builder set, covering the closed query variants. Appended
/// after any extension builders, so extensions can override the handling of
/// a kind by registering first.
pub fn default_builders() -> Vec<Arc<dyn QueryTreeBuilder>> {
    vec![
        Arc::new(TermTreeBuilder),
        Arc::new(PhraseTreeBuilder),
        Arc::new(BooleanTreeBuilder),
        Arc::new(WildcardTreeBuilder),
    ]
}

/// Builds a term leaf from a term query.
#[derive(Debug, Default)]
pub struct TermTreeBuilder;

impl QueryTreeBuilder for TermTreeBuilder {
    fn can_build(&self, query: &SearchQuery) -> bool {
        matches!(query, SearchQuery::Term(_))
    }

    fn build_tree(
        &self,
        _analyzer: &QueryAnalyzer,
        query: &SearchQuery,
        _depth: usize,
    ) -> Result<QueryTree> {
        let SearchQuery::Term(term_query) = query else {
            return Err(PresearchError::invalid_operation(
                "TermTreeBuilder invoked on a non-term query",
            ));
        };
        Ok(QueryTree::term(QueryTerm::new(
            term_query.field(),
            term_query.term(),
            TermType::Exact,
        )))
    }
}

/// Builds a phrase leaf from a phrase query.
#[derive(Debug, Default)]
pub struct PhraseTreeBuilder;

impl QueryTreeBuilder for PhraseTreeBuilder {
    fn can_build(&self, query: &SearchQuery) -> bool {
        matches!(query, SearchQuery::Phrase(_))
    }

    fn build_tree(
        &self,
        _analyzer: &QueryAnalyzer,
        query: &SearchQuery,
        _depth: usize,
    ) -> Result<QueryTree> {
        let SearchQuery::Phrase(phrase_query) = query else {
            return Err(PresearchError::invalid_operation(
                "PhraseTreeBuilder invoked on a non-phrase query",
            ));
        };
        if phrase_query.terms().is_empty() {
            return Err(PresearchError::query("phrase query has no terms"));
        }
        let terms = phrase_query
            .terms()
            .iter()
            .map(|t| QueryTerm::new(phrase_query.field(), t.clone(), TermType::Exact))
            .collect();
        Ok(QueryTree::phrase(terms))
    }
}

/// Builds a conjunction/disjunction structure from a boolean query.
///
/// MUST clauses form a conjunction. SHOULD clauses form a disjunction, which
/// is required on its own when there are no MUST clauses, and joins the
/// conjunction when `minimum_should_match >= 1`. MUST_NOT clauses never
/// contribute terms: the absence of a term cannot be indexed. A query with
/// nothing extractable degrades to the match-everything leaf.
#[derive(Debug, Default)]
pub struct BooleanTreeBuilder;

impl QueryTreeBuilder for BooleanTreeBuilder {
    fn can_build(&self, query: &SearchQuery) -> bool {
        matches!(query, SearchQuery::Boolean(_))
    }

    fn build_tree(
        &self,
        analyzer: &QueryAnalyzer,
        query: &SearchQuery,
        depth: usize,
    ) -> Result<QueryTree> {
        let SearchQuery::Boolean(boolean_query) = query else {
            return Err(PresearchError::invalid_operation(
                "BooleanTreeBuilder invoked on a non-boolean query",
            ));
        };

        let build_all = |clauses: Vec<&crate::query::BooleanClause>| -> Result<Vec<QueryTree>> {
            clauses
                .into_iter()
                .map(|clause| analyzer.build_subtree(&clause.query, depth + 1))
                .collect()
        };

        let musts = boolean_query.clauses_by_occur(Occur::Must);
        let shoulds = boolean_query.clauses_by_occur(Occur::Should);
        let minimum_should_match = boolean_query.minimum_should_match();

        if !musts.is_empty() {
            let mut children = build_all(musts)?;
            if !shoulds.is_empty() && minimum_should_match >= 1 {
                children.push(QueryTree::disjunction(
                    build_all(shoulds)?,
                    minimum_should_match,
                ));
            }
            Ok(QueryTree::conjunction(children))
        } else if !shoulds.is_empty() {
            Ok(QueryTree::disjunction(
                build_all(shoulds)?,
                minimum_should_match.max(1),
            ))
        } else {
            // Only MUST_NOT clauses, or no clauses at all.
            Ok(QueryTree::any_node(""))
        }
    }
}

/// Degrades a wildcard query to the match-everything leaf for its field.
///
/// No concrete term can be relied upon for an arbitrary pattern; extension
/// components may register a smarter builder ahead of this one for the
/// pattern shapes they can index.
#[derive(Debug, Default)]
pub struct WildcardTreeBuilder;

impl QueryTreeBuilder for WildcardTreeBuilder {
    fn can_build(&self, query: &SearchQuery) -> bool {
        matches!(query, SearchQuery::Wildcard(_))
    }

    fn build_tree(
        &self,
        _analyzer: &QueryAnalyzer,
        query: &SearchQuery,
        _depth: usize,
    ) -> Result<QueryTree> {
        let SearchQuery::Wildcard(wildcard_query) = query else {
            return Err(PresearchError::invalid_operation(
                "WildcardTreeBuilder invoked on a non-wildcard query",
            ));
        };
        Ok(QueryTree::any_node(wildcard_query.field()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{BooleanQuery, PhraseQuery, TermQuery, WildcardQuery};

    fn analyzer() -> QueryAnalyzer {
        QueryAnalyzer::default()
    }

    #[test]
    fn test_term_builder() {
        let query = SearchQuery::from(TermQuery::new("f", "foo"));
        let tree = analyzer().build_tree(&query).unwrap();
        match tree {
            QueryTree::Term(term) => {
                assert_eq!(term.field(), "f");
                assert_eq!(term.text(), "foo");
                assert_eq!(*term.term_type(), TermType::Exact);
            }
            other => panic!("expected a term leaf, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_phrase_is_rejected() {
        let query = SearchQuery::from(PhraseQuery::new("f", Vec::new()));
        assert!(analyzer().build_tree(&query).is_err());
    }

    #[test]
    fn test_boolean_musts_form_a_conjunction() {
        let mut boolean = BooleanQuery::new();
        boolean.add_must(TermQuery::new("f", "a"));
        boolean.add_must(TermQuery::new("f", "b"));

        let tree = analyzer().build_tree(&boolean.into()).unwrap();
        assert!(matches!(tree, QueryTree::Conjunction(ref c) if c.len() == 2));
    }

    #[test]
    fn test_boolean_shoulds_form_a_disjunction() {
        let mut boolean = BooleanQuery::new();
        boolean.add_should(TermQuery::new("f", "a"));
        boolean.add_should(TermQuery::new("f", "b"));

        let tree = analyzer().build_tree(&boolean.into()).unwrap();
        assert!(matches!(
            tree,
            QueryTree::Disjunction {
                minimum_should_match: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_optional_shoulds_are_ignored_next_to_musts() {
        let mut boolean = BooleanQuery::new();
        boolean.add_must(TermQuery::new("f", "required"));
        boolean.add_should(TermQuery::new("f", "optional"));

        let tree = analyzer().build_tree(&boolean.into()).unwrap();
        // Single MUST child collapses to the leaf; the optional SHOULD must
        // not appear anywhere in the tree.
        assert!(matches!(tree, QueryTree::Term(_)));
    }

    #[test]
    fn test_required_shoulds_join_the_conjunction() {
        let mut boolean = BooleanQuery::new();
        boolean.add_must(TermQuery::new("f", "required"));
        boolean.add_should(TermQuery::new("f", "a"));
        boolean.add_should(TermQuery::new("f", "b"));
        let boolean = boolean.with_minimum_should_match(1);

        let tree = analyzer().build_tree(&boolean.into()).unwrap();
        match tree {
            QueryTree::Conjunction(children) => {
                assert_eq!(children.len(), 2);
                assert!(matches!(children[1], QueryTree::Disjunction { .. }));
            }
            other => panic!("expected a conjunction, got {other:?}"),
        }
    }

    #[test]
    fn test_pure_negative_boolean_degrades_to_any() {
        let mut boolean = BooleanQuery::new();
        boolean.add_must_not(TermQuery::new("f", "excluded"));

        let tree = analyzer().build_tree(&boolean.into()).unwrap();
        assert!(matches!(tree, QueryTree::Any { .. }));
    }

    #[test]
    fn test_wildcard_degrades_to_any() {
        let query = SearchQuery::from(WildcardQuery::new("f", "fo*").unwrap());
        let tree = analyzer().build_tree(&query).unwrap();
        assert!(matches!(tree, QueryTree::Any { ref field } if field == "f"));
    }
}
