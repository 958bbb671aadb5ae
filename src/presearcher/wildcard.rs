//! Prefix handling for wildcard queries.
//!
//! The default tree builder can only degrade a wildcard query to the
//! match-everything sentinel. For the common `foo*` shape that is wasteful:
//! the pattern's literal prefix is a perfectly selective index term, provided
//! the document side indexes token prefixes too. This component registers a
//! builder that extracts such prefixes, expands document tokens with their
//! prefixes to match, and tags collected prefix terms so they can be
//! recognized at document-index time.

use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{PrefixExpansionFilter, TokenFilter};
use crate::error::{PresearchError, Result};
use crate::presearcher::PresearcherComponent;
use crate::query::SearchQuery;
use crate::term_extractor::analyzer::QueryAnalyzer;
use crate::term_extractor::query_tree::QueryTree;
use crate::term_extractor::term::{QueryTerm, TermType};
use crate::term_extractor::tree_builder::QueryTreeBuilder;

/// Tag carried by [`TermType::Custom`] on extracted prefix terms.
pub const WILDCARD_PREFIX_TAG: &str = "prefix";

/// Extra token indexed for stored queries that contributed a prefix term.
pub const WILDCARD_EXTRA_TOKEN: &str = "__WILDCARD__";

/// Component turning `foo*`-style wildcard queries into indexable prefix
/// terms.
#[derive(Debug, Clone)]
pub struct WildcardPrefixComponent {
    min_prefix: usize,
    max_prefix: usize,
}

impl WildcardPrefixComponent {
    /// Create a component handling prefixes of `min_prefix..=max_prefix`
    /// graphemes. Patterns with shorter usable prefixes fall through to the
    /// default wildcard handling; longer prefixes are truncated to
    /// `max_prefix`.
    pub fn new(min_prefix: usize, max_prefix: usize) -> Self {
        let min_prefix = min_prefix.max(1);
        WildcardPrefixComponent {
            min_prefix,
            max_prefix: max_prefix.max(min_prefix),
        }
    }
}

impl Default for WildcardPrefixComponent {
    fn default() -> Self {
        WildcardPrefixComponent::new(2, 8)
    }
}

impl PresearcherComponent for WildcardPrefixComponent {
    fn query_tree_builders(&self) -> Vec<Arc<dyn QueryTreeBuilder>> {
        vec![Arc::new(PrefixWildcardTreeBuilder {
            min_prefix: self.min_prefix,
            max_prefix: self.max_prefix,
        })]
    }

    fn filter_document_tokens(&self, tokens: TokenStream) -> Result<TokenStream> {
        PrefixExpansionFilter::new(self.min_prefix, self.max_prefix).filter(tokens)
    }

    fn extra_token(&self, term_type: &TermType) -> Option<String> {
        match term_type {
            TermType::Custom(tag) if tag == WILDCARD_PREFIX_TAG => {
                Some(WILDCARD_EXTRA_TOKEN.to_string())
            }
            _ => None,
        }
    }
}

/// Builds a tagged prefix term from a wildcard query with a usable literal
/// prefix. Registered ahead of the default wildcard builder, which handles
/// everything this one declines.
#[derive(Debug)]
struct PrefixWildcardTreeBuilder {
    min_prefix: usize,
    max_prefix: usize,
}

impl PrefixWildcardTreeBuilder {
    fn usable_prefix(&self, query: &SearchQuery) -> Option<String> {
        let SearchQuery::Wildcard(wildcard_query) = query else {
            return None;
        };
        let prefix = wildcard_query.prefix();
        let graphemes: Vec<&str> = prefix.graphemes(true).collect();
        if graphemes.len() < self.min_prefix {
            return None;
        }
        Some(graphemes[..graphemes.len().min(self.max_prefix)].concat())
    }
}

impl QueryTreeBuilder for PrefixWildcardTreeBuilder {
    fn can_build(&self, query: &SearchQuery) -> bool {
        self.usable_prefix(query).is_some()
    }

    fn build_tree(
        &self,
        _analyzer: &QueryAnalyzer,
        query: &SearchQuery,
        _depth: usize,
    ) -> Result<QueryTree> {
        let SearchQuery::Wildcard(wildcard_query) = query else {
            return Err(PresearchError::invalid_operation(
                "PrefixWildcardTreeBuilder invoked on a non-wildcard query",
            ));
        };
        let prefix = self.usable_prefix(query).ok_or_else(|| {
            PresearchError::invalid_operation(
                "PrefixWildcardTreeBuilder invoked on a pattern without a usable prefix",
            )
        })?;
        Ok(QueryTree::term(QueryTerm::new(
            wildcard_query.field(),
            prefix,
            TermType::Custom(WILDCARD_PREFIX_TAG.to_string()),
        )))
    }
}
