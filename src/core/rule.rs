//! Caller-supplied completion and switch predicates.
//!
//! Rules are configured once on a prototype and shared by reference into
//! every instance cloned from it. They must be pure: the engine may evaluate
//! them any number of times per query.

use std::fmt;
use std::sync::Arc;

use super::Score;

/// Predicate over `(index, play_count, score)`.
///
/// - `index`: the node's position among its parent's children
/// - `play_count`: child units so far (a switch passes its first child's count)
/// - `score`: the node's current score (a switch passes its first child's score)
#[derive(Clone)]
pub struct FrameRule(Arc<dyn Fn(usize, usize, Score) -> bool + Send + Sync>);

impl FrameRule {
    pub fn new(rule: impl Fn(usize, usize, Score) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(rule))
    }

    #[inline]
    #[must_use]
    pub fn evaluate(&self, index: usize, play_count: usize, score: Score) -> bool {
        (self.0)(index, play_count, score)
    }

    /// Check whether two handles share the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &FrameRule) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for FrameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FrameRule(..)")
    }
}

/// Switch predicates have the same shape as frame rules but are evaluated
/// against the first child of a switch.
pub type SwitchRule = FrameRule;

/// Predicate over `(events, child_score)` ending a bonus phase.
///
/// `events` counts every event the bonus node has taken: the child's play
/// count plus the bonus events received after the child completed.
#[derive(Clone)]
pub struct BonusRule(Arc<dyn Fn(usize, Score) -> bool + Send + Sync>);

impl BonusRule {
    pub fn new(rule: impl Fn(usize, Score) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(rule))
    }

    #[inline]
    #[must_use]
    pub fn evaluate(&self, events: usize, child_score: Score) -> bool {
        (self.0)(events, child_score)
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &BonusRule) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for BonusRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BonusRule(..)")
    }
}
