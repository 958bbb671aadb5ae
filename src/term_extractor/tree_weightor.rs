//! Branch selection and phase-indexed term collection over query trees.

use std::sync::Arc;

use crate::error::{PresearchError, Result};
use crate::term_extractor::query_tree::QueryTree;
use crate::term_extractor::term::QueryTerm;
use crate::term_extractor::term_list::QueryTermList;
use crate::term_extractor::weights::{CompoundRuleWeightor, TermWeightor};

/// Maximum nesting depth accepted when building or traversing a query tree.
/// Deeper input is rejected rather than risking call-stack growth on
/// adversarial queries.
pub const MAX_TREE_DEPTH: usize = 128;

/// A decomposition phase of a query tree.
///
/// Phase 0 is the most selective decomposition: a conjunction contributes the
/// single best child's terms. Each later phase widens the selection, trading
/// index size for selectivity. Collection at any phase is a pure function of
/// `(tree, phase)`, so phases can be retried and replayed freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Phase(usize);

impl Phase {
    /// The initial, most selective phase.
    pub const ZERO: Phase = Phase(0);

    /// Get the zero-based phase index.
    pub fn index(self) -> usize {
        self.0
    }

    /// Get the phase after this one.
    pub fn next(self) -> Phase {
        Phase(self.0 + 1)
    }
}

/// Policy deciding which branches of a query tree contribute terms.
///
/// Wraps a [`TermWeightor`] and applies it to the candidate term lists each
/// tree node produces:
///
/// - a conjunction requires all children, so its terms may soundly come from
///   any single sufficiently selective child; the best-weighted child wins,
/// - a disjunction only requires some children, so no child may be omitted;
///   all children's lists are unioned,
/// - leaves with nothing extractable yield the match-everything sentinel, so
///   selection never faces an empty candidate set.
#[derive(Debug, Clone)]
pub struct TreeWeightor {
    weightor: Arc<dyn TermWeightor>,
}

impl TreeWeightor {
    /// Create a tree weightor over the given term weighting policy.
    pub fn new(weightor: Arc<dyn TermWeightor>) -> Self {
        TreeWeightor { weightor }
    }

    /// Get the underlying term weighting policy.
    pub fn weightor(&self) -> &Arc<dyn TermWeightor> {
        &self.weightor
    }

    /// Collect the indexable terms for `tree` at `phase`.
    pub fn collect_terms(&self, tree: &QueryTree, phase: Phase) -> Result<Vec<QueryTerm>> {
        self.term_list(tree, phase).map(QueryTermList::into_terms)
    }

    /// Compute the weighted term list for `tree` at `phase`.
    pub fn term_list(&self, tree: &QueryTree, phase: Phase) -> Result<QueryTermList> {
        self.weigh_node(tree, phase, 0)
    }

    /// Number of distinct decomposition phases `tree` supports (at least 1).
    ///
    /// A conjunction of `n` children supports `n` phases, one per widening
    /// step; everything else adds none of its own. Computed with an explicit
    /// worklist so arbitrarily deep trees cannot overflow the stack.
    pub fn phase_count(&self, tree: &QueryTree) -> usize {
        let mut count = 1;
        let mut stack = vec![tree];
        while let Some(node) = stack.pop() {
            match node {
                QueryTree::Conjunction(children) => {
                    count = count.max(children.len());
                    stack.extend(children.iter());
                }
                QueryTree::Disjunction { children, .. } => stack.extend(children.iter()),
                _ => {}
            }
        }
        count
    }

    /// Get the phase after `phase`, if the tree supports one.
    pub fn advance_phase(&self, tree: &QueryTree, phase: Phase) -> Option<Phase> {
        let next = phase.next();
        (next.index() < self.phase_count(tree)).then_some(next)
    }

    fn weigh_node(&self, tree: &QueryTree, phase: Phase, depth: usize) -> Result<QueryTermList> {
        if depth > MAX_TREE_DEPTH {
            return Err(PresearchError::resource_exhausted(format!(
                "query tree nested deeper than {MAX_TREE_DEPTH} levels"
            )));
        }
        match tree {
            QueryTree::Term(term) => Ok(self.list(vec![term.clone()])),
            QueryTree::Phrase(terms) => {
                if terms.is_empty() {
                    return Err(PresearchError::query("phrase node has no terms"));
                }
                Ok(self.list(terms.clone()))
            }
            QueryTree::Any { field } => Ok(self.list(vec![QueryTerm::any(field.clone())])),
            QueryTree::Unsupported { reason } => Err(PresearchError::unsupported_query(reason.clone())),
            QueryTree::Disjunction { children, .. } => {
                let mut terms = Vec::new();
                for child in children {
                    let child_list = self.weigh_child(child, phase, depth)?;
                    terms.extend(child_list.into_terms());
                }
                Ok(self.list(terms))
            }
            QueryTree::Conjunction(children) => {
                let mut candidates = Vec::with_capacity(children.len());
                for child in children {
                    candidates.push(self.weigh_child(child, phase, depth)?);
                }
                let take = (phase.index() + 1).min(candidates.len());
                if take <= 1 {
                    return QueryTermList::select_best(candidates);
                }
                // Stable sort keeps first-seen order among equal weights, so
                // widening stays deterministic.
                candidates.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
                let mut terms = Vec::new();
                for candidate in candidates.into_iter().take(take) {
                    terms.extend(candidate.into_terms());
                }
                Ok(self.list(terms))
            }
        }
    }

    fn weigh_child(&self, child: &QueryTree, phase: Phase, depth: usize) -> Result<QueryTermList> {
        let ceiling = self.phase_count(child) - 1;
        let child_phase = Phase(phase.index().min(ceiling));
        self.weigh_node(child, child_phase, depth + 1)
    }

    fn list(&self, terms: Vec<QueryTerm>) -> QueryTermList {
        QueryTermList::new(self.weightor.as_ref(), terms)
    }
}

impl Default for TreeWeightor {
    fn default() -> Self {
        TreeWeightor::new(Arc::new(CompoundRuleWeightor::default()))
    }
}
