//! Filters applied to a document's token stream before presearch matching.

use std::fmt::Debug;

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters receive a stream of tokens and produce a new stream, allowing
/// them to modify, remove, or add tokens.
pub trait TokenFilter: Debug + Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}

/// Expands each token with its leading prefixes, so stored prefix terms
/// (from wildcard queries such as `foo*`) can match ordinary document
/// tokens.
///
/// A token `foobar` with bounds `2..=4` additionally emits `fo`, `foo` and
/// `foob` at the same position. Prefix lengths are measured in grapheme
/// clusters, matching how stored prefix terms are truncated.
#[derive(Debug, Clone)]
pub struct PrefixExpansionFilter {
    min_prefix: usize,
    max_prefix: usize,
}

impl PrefixExpansionFilter {
    /// Create a filter emitting prefixes of `min_prefix..=max_prefix`
    /// graphemes.
    pub fn new(min_prefix: usize, max_prefix: usize) -> Self {
        let min_prefix = min_prefix.max(1);
        PrefixExpansionFilter {
            min_prefix,
            max_prefix: max_prefix.max(min_prefix),
        }
    }
}

impl TokenFilter for PrefixExpansionFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_prefix = self.min_prefix;
        let max_prefix = self.max_prefix;
        let expanded = tokens.flat_map(move |token| {
            let graphemes: Vec<&str> = token.text.graphemes(true).collect();
            let longest = graphemes.len().saturating_sub(1).min(max_prefix);
            let mut out = Vec::with_capacity(1 + longest.saturating_sub(min_prefix) + 1);
            for length in min_prefix..=longest {
                let prefix: String = graphemes[..length].concat();
                out.push(Token::with_offsets(
                    prefix,
                    token.position,
                    token.start_offset,
                    token.end_offset,
                ));
            }
            out.push(token);
            out
        });
        Ok(Box::new(expanded))
    }

    fn name(&self) -> &'static str {
        "prefix_expansion"
    }
}
