//! Term weighting policies for term-list selection.
//!
//! A weight is a selectivity score over an ordered term list: higher means
//! the list is a cheaper, more selective representation of its query and
//! should be preferred at selection time. Penalty rules multiply the score
//! down. Composition is multiplicative, so the final score is independent of
//! rule order.

pub mod compound;
pub mod rules;

pub use self::compound::{CompoundRuleWeightor, CompoundRuleWeightorBuilder};
pub use self::rules::{FieldWeightRule, LengthNorm, TermTypeNorm, TermWeightRule, TokenLengthNorm};

use std::fmt::Debug;

use crate::term_extractor::term::QueryTerm;

/// A single stateless scoring rule over an ordered term list.
///
/// Rules must be pure and total: the same term list always produces the same
/// contribution, and no input is an error.
pub trait WeightRule: Debug + Send + Sync {
    /// Compute this rule's contribution for a term list.
    fn weigh(&self, terms: &[QueryTerm]) -> f32;
}

/// A complete scoring function over a candidate term list.
///
/// Implementations compose one or more [`WeightRule`]s; see
/// [`CompoundRuleWeightor`].
pub trait TermWeightor: Debug + Send + Sync {
    /// Compute the selectivity score for a term list.
    fn weigh(&self, terms: &[QueryTerm]) -> f32;
}
