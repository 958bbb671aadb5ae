//! Token types shared with the document-side indexing path.
//!
//! Tokenization itself is the search engine's job; this crate only defines
//! the token contract so presearcher components can filter a document's
//! token stream before it is compared against the stored-query term index.

use serde::{Deserialize, Serialize};

/// A single unit of analyzed document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,

    /// The position of the token in the original token stream (0-based).
    pub position: usize,

    /// The byte offset where this token starts in the original text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text.
    pub end_offset: usize,

    /// Whether this token has been marked as removed by a filter.
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
        }
    }

    /// Create a new token with explicit byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
        }
    }

    /// Mark this token as stopped (removed).
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check whether this token has been stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// A stream of tokens flowing through the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
