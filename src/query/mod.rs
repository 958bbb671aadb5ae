//! Source-query model: the already-parsed query graph the analyzer consumes.

pub mod boolean;
pub mod phrase;
#[allow(clippy::module_inception)]
pub mod query;
pub mod term;
pub mod wildcard;

pub use self::boolean::{BooleanClause, BooleanQuery, Occur};
pub use self::phrase::PhraseQuery;
pub use self::query::{CustomQuery, SearchQuery};
pub use self::term::TermQuery;
pub use self::wildcard::WildcardQuery;
