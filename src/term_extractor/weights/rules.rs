//! Built-in weight rules.

use ahash::{AHashMap, AHashSet};
use unicode_segmentation::UnicodeSegmentation;

use crate::term_extractor::term::{QueryTerm, TermType};
use crate::term_extractor::weights::WeightRule;

/// Pivoted length normalization over the number of terms in a list.
///
/// Lists shorter than the pivot score above 1.0, longer lists score below it,
/// so fewer terms are always preferred over more terms built from the same
/// per-term scores. Indexing every branch of a conjunction would only grow
/// the index without improving selectivity; this rule is what pushes the
/// selection toward a single branch.
#[derive(Debug, Clone)]
pub struct LengthNorm {
    pivot: f32,
    slope: f32,
}

impl LengthNorm {
    /// Create a length norm with the given pivot list length and slope.
    ///
    /// `slope` must be in `(0.0, 1.0)`; steeper slopes penalize long lists
    /// harder. Validating the range is the caller's responsibility at
    /// configuration time.
    pub fn new(pivot: u32, slope: f32) -> Self {
        LengthNorm {
            pivot: pivot.max(1) as f32,
            slope,
        }
    }
}

impl WeightRule for LengthNorm {
    fn weigh(&self, terms: &[QueryTerm]) -> f32 {
        let length = terms.len() as f32;
        1.0 / ((1.0 - self.slope) + self.slope * (length / self.pivot))
    }
}

/// Per-term score for the length of the term text, averaged over the list.
///
/// Longer tokens are rarer and therefore more selective: `"foobar"` is a
/// better index entry than `"foo"`. Lengths are measured in grapheme
/// clusters and capped so pathological tokens don't dominate. The average
/// keeps this rule neutral with respect to list length, which is
/// [`LengthNorm`]'s concern.
#[derive(Debug, Clone)]
pub struct TokenLengthNorm {
    max_length: usize,
}

impl TokenLengthNorm {
    /// Create a token length norm capping measured lengths at `max_length`.
    pub fn new(max_length: usize) -> Self {
        TokenLengthNorm {
            max_length: max_length.max(1),
        }
    }
}

impl Default for TokenLengthNorm {
    fn default() -> Self {
        TokenLengthNorm::new(32)
    }
}

impl WeightRule for TokenLengthNorm {
    fn weigh(&self, terms: &[QueryTerm]) -> f32 {
        if terms.is_empty() {
            return 1.0;
        }
        let sum: f32 = terms
            .iter()
            .map(|t| {
                let length = t.text().graphemes(true).count().min(self.max_length);
                (length as f32).sqrt()
            })
            .sum();
        sum / terms.len() as f32
    }
}

/// Per-term multiplier keyed on the term type, compounding over the list.
///
/// Exact terms are fully trusted, wildcard-derived terms are discounted, and
/// the match-everything sentinel is scored low enough that any real term
/// beats it.
#[derive(Debug, Clone)]
pub struct TermTypeNorm {
    exact: f32,
    custom: f32,
    wildcard: f32,
    any: f32,
}

impl TermTypeNorm {
    /// Create a type norm with explicit multipliers per term type.
    pub fn new(exact: f32, custom: f32, wildcard: f32, any: f32) -> Self {
        TermTypeNorm {
            exact,
            custom,
            wildcard,
            any,
        }
    }

    fn factor(&self, term_type: &TermType) -> f32 {
        match term_type {
            TermType::Exact => self.exact,
            TermType::Custom(_) => self.custom,
            TermType::Wildcard => self.wildcard,
            TermType::Any => self.any,
        }
    }
}

impl Default for TermTypeNorm {
    fn default() -> Self {
        TermTypeNorm::new(1.0, 1.0, 0.75, 0.1)
    }
}

impl WeightRule for TermTypeNorm {
    fn weigh(&self, terms: &[QueryTerm]) -> f32 {
        terms
            .iter()
            .map(|t| self.factor(t.term_type()))
            .product()
    }
}

/// Multiplies the score by `penalty` for every term whose field is in the
/// undesirable set, compounding when several such terms appear in one list.
#[derive(Debug, Clone)]
pub struct FieldWeightRule {
    fields: AHashSet<String>,
    penalty: f32,
}

impl FieldWeightRule {
    /// Create a field rule penalizing the given fields.
    pub fn new<I, S>(fields: I, penalty: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldWeightRule {
            fields: fields.into_iter().map(Into::into).collect(),
            penalty,
        }
    }
}

impl WeightRule for FieldWeightRule {
    fn weigh(&self, terms: &[QueryTerm]) -> f32 {
        terms
            .iter()
            .filter(|t| self.fields.contains(t.field()))
            .map(|_| self.penalty)
            .product()
    }
}

/// Per-term-text multiplier lookup, defaulting to 1.0 for unlisted text.
///
/// Used to deprioritize high-frequency, low-value tokens such as sentence
/// boundary markers, so they are only selected when nothing better exists.
#[derive(Debug, Clone)]
pub struct TermWeightRule {
    weights: AHashMap<String, f32>,
}

impl TermWeightRule {
    /// Create a term-text rule from explicit `(text, multiplier)` entries.
    pub fn new<I, S>(weights: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        TermWeightRule {
            weights: weights.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl WeightRule for TermWeightRule {
    fn weigh(&self, terms: &[QueryTerm]) -> f32 {
        terms
            .iter()
            .map(|t| self.weights.get(t.text()).copied().unwrap_or(1.0))
            .product()
    }
}
