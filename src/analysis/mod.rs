//! Document-side token contract.
//!
//! The presearcher compares an incoming document's tokens against the
//! stored-query term index. Tokenization is the engine's responsibility;
//! this module defines the [`Token`] and [`TokenFilter`] interfaces through
//! which presearcher components can reshape that stream.

pub mod token;
pub mod token_filter;

pub use self::token::{Token, TokenStream};
pub use self::token_filter::{PrefixExpansionFilter, TokenFilter};
