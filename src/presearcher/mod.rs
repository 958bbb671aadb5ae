//! Presearcher components: named bundles of analyzer extensions.
//!
//! A component contributes extension tree builders (tried ahead of the
//! default set), an optional filter over document token streams, and an
//! optional extra token to index alongside a stored query when terms of a
//! given type are collected. [`build_query_analyzer`] merges any number of
//! components into a ready-to-use [`QueryAnalyzer`].

pub mod wildcard;

pub use self::wildcard::{WILDCARD_EXTRA_TOKEN, WILDCARD_PREFIX_TAG, WildcardPrefixComponent};

use std::fmt::Debug;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::error::Result;
use crate::term_extractor::analyzer::QueryAnalyzer;
use crate::term_extractor::term::TermType;
use crate::term_extractor::tree_builder::{QueryTreeBuilder, default_builders};
use crate::term_extractor::tree_weightor::TreeWeightor;

/// A bundle of presearcher behaviours.
pub trait PresearcherComponent: Debug + Send + Sync {
    /// Extension tree builders contributed by this component, tried before
    /// the default set.
    fn query_tree_builders(&self) -> Vec<Arc<dyn QueryTreeBuilder>> {
        Vec::new()
    }

    /// Filter the token stream extracted from an incoming document before it
    /// is compared against the stored-query term index. Identity by default.
    fn filter_document_tokens(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(tokens)
    }

    /// An extra literal token to index for a stored query whenever a term of
    /// the given type is collected from it. None by default.
    fn extra_token(&self, term_type: &TermType) -> Option<String> {
        let _ = term_type;
        None
    }
}

/// Build a [`QueryAnalyzer`] from a weighting policy and a list of
/// components.
///
/// Builders are merged in listed order and the default set is appended last,
/// so earlier components override later ones, and every component overrides
/// the defaults, for any query kind they both accept.
pub fn build_query_analyzer(
    weightor: TreeWeightor,
    components: &[Arc<dyn PresearcherComponent>],
) -> QueryAnalyzer {
    let mut builders = Vec::new();
    for component in components {
        builders.extend(component.query_tree_builders());
    }
    builders.extend(default_builders());
    QueryAnalyzer::new(weightor, builders)
}

/// Build a [`QueryAnalyzer`] from components with the default weighting
/// policy.
pub fn build_default_query_analyzer(
    components: &[Arc<dyn PresearcherComponent>],
) -> QueryAnalyzer {
    build_query_analyzer(TreeWeightor::default(), components)
}
