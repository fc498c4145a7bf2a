//! Decorator converting a finished sub-score into a single point.

use std::sync::Arc;

use crate::core::{Score, Side};

use super::ScoringNode;

/// Win-point conversion around a single child.
///
/// Reports `0-0` until the child completes, then one point to whichever side
/// finished strictly ahead. An exact tie awards nothing.
#[derive(Clone, Debug)]
pub struct WinPoint {
    label: Arc<str>,
    index: usize,
    child: Box<ScoringNode>,
}

impl WinPoint {
    pub fn new(label: impl Into<Arc<str>>, child: impl Into<ScoringNode>) -> Self {
        Self {
            label: label.into(),
            index: 0,
            child: Box::new(child.into()),
        }
    }

    pub fn record_play(&mut self, side: Side, amount: u32) {
        if self.child.is_complete() {
            return;
        }
        self.child.record_play(side, amount);
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.child.is_complete()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        if !self.is_complete() {
            return Score::ZERO;
        }
        self.child
            .score()
            .leader()
            .map_or(Score::ZERO, |winner| Score::single(winner, 1))
    }

    /// The side credited with the point, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.score().leader()
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.child.play_count()
    }

    #[must_use]
    pub fn sub_units(&self) -> &[ScoringNode] {
        std::slice::from_ref(self.child.as_ref())
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
            child: Box::new(self.child.instantiate(index)),
        }
    }
}
