//! Decorator that permanently hands play over to a second child.
//!
//! Plays go to the first child until the switch rule, evaluated against the
//! first child, holds. From then on every play goes to the second child. The
//! switch state is recomputed on each query, but the first child never sees
//! another play once the rule holds, so its state and the switch are frozen.

use std::sync::Arc;

use tracing::trace;

use crate::core::{Score, Side, SwitchRule};

use super::ScoringNode;

/// One-way branch switch over two children.
#[derive(Clone, Debug)]
pub struct Switch {
    label: Arc<str>,
    index: usize,
    rule: Option<SwitchRule>,
    first: Box<ScoringNode>,
    second: Box<ScoringNode>,
}

impl Switch {
    /// Without a rule the switch never fires.
    pub fn new(
        label: impl Into<Arc<str>>,
        first: impl Into<ScoringNode>,
        second: impl Into<ScoringNode>,
    ) -> Self {
        Self {
            label: label.into(),
            index: 0,
            rule: None,
            first: Box::new(first.into()),
            second: Box::new(second.into()),
        }
    }

    /// Set the switch rule, called with
    /// `(index, first_child_play_count, first_child_score)`.
    #[must_use]
    pub fn switch_when(
        self,
        rule: impl Fn(usize, usize, Score) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.with_rule(SwitchRule::new(rule))
    }

    #[must_use]
    pub fn with_rule(mut self, rule: SwitchRule) -> Self {
        self.rule = Some(rule);
        self
    }

    #[must_use]
    pub fn is_switched(&self) -> bool {
        self.rule
            .as_ref()
            .is_some_and(|rule| rule.evaluate(self.index, self.first.play_count(), self.first.score()))
    }

    /// The child currently receiving plays.
    #[must_use]
    pub fn active(&self) -> &ScoringNode {
        if self.is_switched() {
            self.second.as_ref()
        } else {
            self.first.as_ref()
        }
    }

    pub fn record_play(&mut self, side: Side, amount: u32) {
        if self.is_switched() {
            if self.second.play_count() == 0 {
                trace!(
                    event = "switch",
                    node = %self.label,
                    index = self.index,
                    score = %self.first.score(),
                );
            }
            self.second.record_play(side, amount);
        } else {
            self.first.record_play(side, amount);
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.active().is_complete()
    }

    /// First child's score, plus the second child's once switched.
    #[must_use]
    pub fn score(&self) -> Score {
        if self.is_switched() {
            self.first.score() + self.second.score()
        } else {
            self.first.score()
        }
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.active().play_count()
    }

    /// Singleton view of the active child.
    #[must_use]
    pub fn sub_units(&self) -> &[ScoringNode] {
        std::slice::from_ref(self.active())
    }

    #[must_use]
    pub fn first(&self) -> &ScoringNode {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &ScoringNode {
        &self.second
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
            first: Box::new(self.first.instantiate(index)),
            second: Box::new(self.second.instantiate(index)),
        }
    }
}
