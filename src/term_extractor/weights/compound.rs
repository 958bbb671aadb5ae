//! Multiplicative composition of weight rules.

use std::sync::Arc;

use crate::term_extractor::term::QueryTerm;
use crate::term_extractor::weights::rules::{LengthNorm, TermTypeNorm, TokenLengthNorm};
use crate::term_extractor::weights::{TermWeightor, WeightRule};

/// Composes an ordered list of [`WeightRule`]s into one scoring function by
/// multiplying their contributions.
///
/// Multiplication keeps the score independent of rule order, and adding a
/// penalty rule can only lower a list's score relative to others.
#[derive(Debug, Clone)]
pub struct CompoundRuleWeightor {
    rules: Vec<Arc<dyn WeightRule>>,
}

impl CompoundRuleWeightor {
    /// Start building a weightor seeded with the default rules.
    pub fn builder() -> CompoundRuleWeightorBuilder {
        CompoundRuleWeightorBuilder {
            rules: default_rules(),
        }
    }

    /// Create a weightor from an explicit, non-empty rule list, replacing the
    /// defaults entirely.
    pub fn from_rules(rules: Vec<Arc<dyn WeightRule>>) -> crate::error::Result<Self> {
        if rules.is_empty() {
            return Err(crate::error::PresearchError::invalid_operation(
                "a weightor requires at least one weight rule",
            ));
        }
        Ok(CompoundRuleWeightor { rules })
    }

    /// Get the rules in force.
    pub fn rules(&self) -> &[Arc<dyn WeightRule>] {
        &self.rules
    }
}

impl Default for CompoundRuleWeightor {
    fn default() -> Self {
        CompoundRuleWeightor::builder().build()
    }
}

impl TermWeightor for CompoundRuleWeightor {
    fn weigh(&self, terms: &[QueryTerm]) -> f32 {
        self.rules.iter().map(|rule| rule.weigh(terms)).product()
    }
}

/// Builder for [`CompoundRuleWeightor`].
///
/// Starts from the default rules; added rules refine the scoring, they do not
/// replace it.
#[derive(Debug)]
pub struct CompoundRuleWeightorBuilder {
    rules: Vec<Arc<dyn WeightRule>>,
}

impl CompoundRuleWeightorBuilder {
    /// Add a rule to the composition.
    pub fn with_rule<R: WeightRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Build the weightor.
    pub fn build(self) -> CompoundRuleWeightor {
        CompoundRuleWeightor { rules: self.rules }
    }
}

fn default_rules() -> Vec<Arc<dyn WeightRule>> {
    vec![
        Arc::new(LengthNorm::new(3, 0.3)),
        Arc::new(TokenLengthNorm::default()),
        Arc::new(TermTypeNorm::default()),
    ]
}
