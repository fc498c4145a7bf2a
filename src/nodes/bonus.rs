//! Decorator that keeps scoring after its child completes.
//!
//! Completion is reported on the child's schedule, so a parent frame moves on
//! as usual. The bonus node keeps accepting plays afterwards and adds each
//! one to a bonus tally until its rule says the bonus phase is over.
//!
//! Bonus points always accrue to `Side::First`: the games that need bonuses
//! score a single side.

use std::sync::Arc;

use tracing::trace;

use crate::core::{BonusRule, Score, Side};

use super::ScoringNode;

/// Bonus continuation around a single child.
#[derive(Clone, Debug)]
pub struct Bonus {
    label: Arc<str>,
    index: usize,
    rule: Option<BonusRule>,
    child: Box<ScoringNode>,
    bonus: u32,
    bonus_events: usize,
}

impl Bonus {
    /// Without a rule the bonus phase never ends.
    pub fn new(label: impl Into<Arc<str>>, child: impl Into<ScoringNode>) -> Self {
        Self {
            label: label.into(),
            index: 0,
            rule: None,
            child: Box::new(child.into()),
            bonus: 0,
            bonus_events: 0,
        }
    }

    /// Set the rule ending the bonus phase, called with
    /// `(total_events, child_score)`.
    #[must_use]
    pub fn finish_when(self, rule: impl Fn(usize, Score) -> bool + Send + Sync + 'static) -> Self {
        self.with_rule(BonusRule::new(rule))
    }

    #[must_use]
    pub fn with_rule(mut self, rule: BonusRule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// True once the child is complete and the rule ends the bonus phase.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.child.is_complete()
            && self.rule.as_ref().is_some_and(|rule| {
                rule.evaluate(self.child.play_count() + self.bonus_events, self.child.score())
            })
    }

    pub fn record_play(&mut self, side: Side, amount: u32) {
        if self.is_finished() {
            return;
        }

        if self.child.is_complete() {
            self.bonus = self.bonus.saturating_add(amount);
            self.bonus_events += 1;
            trace!(
                event = "bonus",
                node = %self.label,
                index = self.index,
                amount,
                bonus = self.bonus,
            );
        }

        self.child.record_play(side, amount);
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.child.is_complete()
    }

    /// Child score with the bonus added to `Side::First`.
    #[must_use]
    pub fn score(&self) -> Score {
        self.child.score() + Score::single(Side::First, self.bonus)
    }

    /// Accumulated bonus alone.
    #[must_use]
    pub fn bonus(&self) -> u32 {
        self.bonus
    }

    /// Plays received after the child completed.
    #[must_use]
    pub fn bonus_events(&self) -> usize {
        self.bonus_events
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.child.play_count()
    }

    /// The child's sub-units; the decorator is transparent to readers.
    #[must_use]
    pub fn sub_units(&self) -> &[ScoringNode] {
        self.child.sub_units()
    }

    #[must_use]
    pub fn child(&self) -> &ScoringNode {
        &self.child
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn instantiate(&self, index: usize) -> Self {
        Self {
            label: Arc::clone(&self.label),
            index,
            rule: self.rule.clone(),
            child: Box::new(self.child.instantiate(index)),
            bonus: 0,
            bonus_events: 0,
        }
    }
}
