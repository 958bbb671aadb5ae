//! Term extraction: converting stored queries into indexable terms.
//!
//! The extraction pipeline runs in three steps. A [`QueryAnalyzer`]
//! dispatches the source query to the first registered [`QueryTreeBuilder`]
//! that accepts it, producing an immutable [`QueryTree`] that mirrors the
//! query's boolean structure. A [`TreeWeightor`] then walks the tree and
//! selects, per compound node, the candidate [`QueryTermList`] judged most
//! selective by the configured weighting rules. When even the best selection
//! is the match-everything sentinel, the caller can advance the collection
//! [`Phase`] to widen the selection and try again.

pub mod analyzer;
pub mod query_tree;
pub mod term;
pub mod term_list;
pub mod tree_builder;
pub mod tree_weightor;
pub mod weights;

pub use self::analyzer::QueryAnalyzer;
pub use self::query_tree::QueryTree;
pub use self::term::{ANY_TOKEN, QueryTerm, TermType};
pub use self::term_list::QueryTermList;
pub use self::tree_builder::{
    BooleanTreeBuilder, PhraseTreeBuilder, QueryTreeBuilder, TermTreeBuilder, WildcardTreeBuilder,
    default_builders,
};
pub use self::tree_weightor::{MAX_TREE_DEPTH, Phase, TreeWeightor};
