//! # Presearch
//!
//! Term extraction and weighting for indexing stored search queries.
//!
//! A percolating search system keeps millions of stored queries and tests
//! every incoming document against them. Running each query for real is
//! hopeless; instead, each stored query is analyzed once into a small,
//! highly selective set of ordinary index terms, and an incoming document's
//! tokens are matched against that index to produce the short candidate list
//! of queries worth executing.
//!
//! ## Features
//!
//! - Recursive analysis of boolean, phrase, term and wildcard queries
//! - Weight-driven selection of the most selective branch of a conjunction
//! - Phase advancement when the best selection is too degraded to index
//! - A match-everything sentinel so recall is never sacrificed
//! - Pluggable components for vendor query kinds and document token filters
//!
//! ## Example
//!
//! ```
//! use presearch::prelude::*;
//!
//! let analyzer = QueryAnalyzer::default();
//!
//! let mut query = BooleanQuery::new();
//! query.add_must(TermQuery::new("body", "rust"));
//! query.add_must(TermQuery::new("body", "percolator"));
//!
//! // A document must contain both terms, so indexing the rarer-looking one
//! // is enough to represent the whole query.
//! let terms = analyzer.best_terms(&query.into()).unwrap();
//! assert_eq!(terms.len(), 1);
//! assert_eq!(terms[0].text(), "percolator");
//! ```

pub mod analysis;
pub mod error;
pub mod presearcher;
pub mod query;
pub mod term_extractor;

/// Commonly used types, re-exported for convenience.
pub mod prelude {
    pub use crate::error::{PresearchError, Result};
    pub use crate::presearcher::{PresearcherComponent, build_query_analyzer};
    pub use crate::query::{
        BooleanClause, BooleanQuery, CustomQuery, Occur, PhraseQuery, SearchQuery, TermQuery,
        WildcardQuery,
    };
    pub use crate::term_extractor::{
        ANY_TOKEN, Phase, QueryAnalyzer, QueryTerm, QueryTermList, QueryTree, QueryTreeBuilder,
        TermType, TreeWeightor,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
