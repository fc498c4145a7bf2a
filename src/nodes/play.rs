//! Leaf node recording a single scoring event.

use std::sync::Arc;

use crate::core::{Score, Side};

/// Terminal node: accepts exactly one play, then ignores everything.
#[derive(Clone, Debug)]
pub struct LeafPlay {
    label: Arc<str>,
    index: usize,
    score: Score,
    complete: bool,
}

impl LeafPlay {
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self {
            label: label.into(),
            index: 0,
            score: Score::ZERO,
            complete: false,
        }
    }

    pub fn record_play(&mut self, side: Side, amount: u32) {
        if self.complete {
            return;
        }
        self.score[side] = self.score[side].saturating_add(amount);
        self.complete = true;
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    #[inline]
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// 0 before the play, 1 after.
    #[must_use]
    pub fn play_count(&self) -> usize {
        usize::from(self.complete)
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
            score: Score::ZERO,
            complete: false,
        }
    }
}
