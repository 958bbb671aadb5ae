//! The source-query model consumed by the analyzer.
//!
//! Queries arrive already parsed, as an object graph produced by the search
//! engine's query layer. The closed [`SearchQuery`] variants cover the
//! structural kinds the default tree builders understand; vendor-specific
//! kinds travel through [`SearchQuery::Custom`] and require a registered
//! extension builder.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use crate::query::boolean::BooleanQuery;
use crate::query::phrase::PhraseQuery;
use crate::query::term::TermQuery;
use crate::query::wildcard::WildcardQuery;

/// A query kind outside the closed variant set.
///
/// Extension tree builders recognize their own kinds by downcasting through
/// [`CustomQuery::as_any`].
pub trait CustomQuery: Any + Debug + Send + Sync {
    /// Get this query as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get a human-readable description of this query.
    fn description(&self) -> String;
}

/// An already-parsed source query.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// A single-term query.
    Term(TermQuery),
    /// A positional phrase query.
    Phrase(PhraseQuery),
    /// A boolean combination of sub-queries.
    Boolean(BooleanQuery),
    /// A wildcard pattern query.
    Wildcard(WildcardQuery),
    /// A vendor or extension query kind.
    Custom(Arc<dyn CustomQuery>),
}

impl SearchQuery {
    /// Name of this query's structural kind, for error reporting.
    pub fn kind_name(&self) -> String {
        match self {
            SearchQuery::Term(_) => "term".to_string(),
            SearchQuery::Phrase(_) => "phrase".to_string(),
            SearchQuery::Boolean(_) => "boolean".to_string(),
            SearchQuery::Wildcard(_) => "wildcard".to_string(),
            SearchQuery::Custom(query) => format!("custom({})", query.description()),
        }
    }

    /// Get a human-readable description of this query.
    pub fn description(&self) -> String {
        match self {
            SearchQuery::Term(query) => query.description(),
            SearchQuery::Phrase(query) => query.description(),
            SearchQuery::Boolean(query) => query.description(),
            SearchQuery::Wildcard(query) => query.description(),
            SearchQuery::Custom(query) => query.description(),
        }
    }
}

impl From<TermQuery> for SearchQuery {
    fn from(query: TermQuery) -> Self {
        SearchQuery::Term(query)
    }
}

impl From<PhraseQuery> for SearchQuery {
    fn from(query: PhraseQuery) -> Self {
        SearchQuery::Phrase(query)
    }
}

impl From<BooleanQuery> for SearchQuery {
    fn from(query: BooleanQuery) -> Self {
        SearchQuery::Boolean(query)
    }
}

impl From<WildcardQuery> for SearchQuery {
    fn from(query: WildcardQuery) -> Self {
        SearchQuery::Wildcard(query)
    }
}
