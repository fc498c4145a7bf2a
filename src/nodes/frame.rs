//! Composite node that grows its children on demand.
//!
//! A `Frame` holds one prototype child and an ordered list of instances
//! cloned from it. Nothing about the number of children is known up front:
//! a new instance is cloned whenever a play arrives and the list is empty or
//! its last entry is complete. The frame itself completes when its last
//! child is complete and its rule agrees.
//!
//! ## Forwarding
//!
//! Every play is forwarded to *every* child, not just the newest. Plain
//! children ignore plays once complete, but a [`Bonus`](super::Bonus) child
//! keeps consuming plays after its own completion, which is how bonus points
//! reach earlier frames.
//!
//! ## Example
//!
//! ```
//! use frame_scoring::core::{Score, Side};
//! use frame_scoring::nodes::{Frame, LeafPlay, ScoringNode};
//!
//! // First to 4 points, win by 2
//! let mut game: ScoringNode = Frame::new("game", LeafPlay::new("point"))
//!     .complete_when(|_, _, score| score.max() >= 4 && score.difference() >= 2)
//!     .into();
//!
//! for side in [Side::First, Side::First, Side::Second, Side::First, Side::First] {
//!     game.record_play(side, 1);
//! }
//!
//! assert!(game.is_complete());
//! assert_eq!(game.score(), Score::new(4, 1));
//! assert_eq!(game.play_count(), 5);
//! ```

use std::sync::Arc;

use tracing::trace;

use crate::core::{FrameRule, Score, Side};

use super::ScoringNode;

/// Lazily grown composite node.
#[derive(Clone, Debug)]
pub struct Frame {
    label: Arc<str>,
    index: usize,
    rule: Option<FrameRule>,
    /// Template for the next child. Never scored.
    prototype: Box<ScoringNode>,
    children: Vec<ScoringNode>,
}

impl Frame {
    /// Create a frame whose children are cloned from `prototype`.
    ///
    /// Without a rule the frame completes as soon as its first child does.
    pub fn new(label: impl Into<Arc<str>>, prototype: impl Into<ScoringNode>) -> Self {
        Self {
            label: label.into(),
            index: 0,
            rule: None,
            prototype: Box::new(prototype.into()),
            children: Vec::new(),
        }
    }

    /// Set the completion rule, called with `(index, child_count, score)`.
    #[must_use]
    pub fn complete_when(
        self,
        rule: impl Fn(usize, usize, Score) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.with_rule(FrameRule::new(rule))
    }

    /// Set an already shared completion rule.
    #[must_use]
    pub fn with_rule(mut self, rule: FrameRule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn record_play(&mut self, side: Side, amount: u32) {
        if self.is_complete() {
            trace!(event = "ignored", node = %self.label, index = self.index);
            return;
        }

        if self.children.last().map_or(true, ScoringNode::is_complete) {
            let child = self.prototype.instantiate(self.children.len());
            trace!(
                event = "grow",
                node = %self.label,
                index = self.index,
                child = child.index(),
            );
            self.children.push(child);
        }

        for child in &mut self.children {
            child.record_play(side, amount);
        }
    }

    /// An empty frame is never complete, whatever its rule says.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self.children.last() {
            None => false,
            Some(last) => {
                last.is_complete()
                    && self
                        .rule
                        .as_ref()
                        .map_or(true, |rule| rule.evaluate(self.index, self.play_count(), self.score()))
            }
        }
    }

    /// Element-wise sum of all children.
    #[must_use]
    pub fn score(&self) -> Score {
        self.children.iter().map(ScoringNode::score).sum()
    }

    /// Number of children created so far.
    #[inline]
    #[must_use]
    pub fn play_count(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn sub_units(&self) -> &[ScoringNode] {
        &self.children
    }

    /// The template children are cloned from.
    #[must_use]
    pub fn prototype(&self) -> &ScoringNode {
        &self.prototype
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
    pub fn rule(&self) -> Option<&FrameRule> {
        self.rule.as_ref()
    }

    /// Fresh, childless copy sharing this frame's rule.
    #[must_use]
    pub fn instantiate(&self, index: usize) -> Self {
        Self {
            label: Arc::clone(&self.label),
            index,
            rule: self.rule.clone(),
            prototype: Box::new(self.prototype.instantiate(0)),
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::LeafPlay;

    fn frame_of_plays() -> Frame {
        Frame::new("frame", LeafPlay::new("single_play"))
    }

    #[test]
    fn test_play_count() {
        let mut frame = frame_of_plays().complete_when(|_, plays, _| plays == 3);
        assert_eq!(frame.play_count(), 0);

        frame.record_play(Side::First, 3);
        assert_eq!(frame.play_count(), 1);
        frame.record_play(Side::First, 2);
        assert_eq!(frame.play_count(), 2);
        frame.record_play(Side::Second, 6);
        assert_eq!(frame.play_count(), 3);

        // Complete: no growth
        frame.record_play(Side::Second, 6);
        assert_eq!(frame.play_count(), 3);
    }

    #[test]
    fn test_score_sums_children() {
        let mut frame = frame_of_plays().complete_when(|_, plays, _| plays == 3);
        assert_eq!(frame.score(), Score::ZERO);

        frame.record_play(Side::First, 3);
        assert_eq!(frame.score(), Score::new(3, 0));
        frame.record_play(Side::First, 2);
        assert_eq!(frame.score(), Score::new(5, 0));
        frame.record_play(Side::Second, 6);
        assert_eq!(frame.score(), Score::new(5, 6));
        frame.record_play(Side::Second, 6);
        assert_eq!(frame.score(), Score::new(5, 6));
    }

    #[test]
    fn test_complete_on_play_count() {
        let mut frame = frame_of_plays().complete_when(|_, plays, _| plays == 2);
        assert!(!frame.is_complete());
        frame.record_play(Side::First, 8);
        assert!(!frame.is_complete());
        frame.record_play(Side::First, 1);
        assert!(frame.is_complete());
    }

    #[test]
    fn test_complete_on_score() {
        let mut frame = frame_of_plays().complete_when(|_, _, score| score[Side::First] == 10);
        frame.record_play(Side::First, 9);
        assert!(!frame.is_complete());
        frame.record_play(Side::First, 1);
        assert!(frame.is_complete());
    }

    #[test]
    fn test_complete_on_index() {
        let mut frame = frame_of_plays().complete_when(|index, _, _| index == 1);
        frame.record_play(Side::First, 1);
        assert!(!frame.is_complete());

        let mut second = frame.instantiate(1);
        assert_eq!(second.index(), 1);
        // Rule holds but there is no complete child yet
        assert!(!second.is_complete());
        second.record_play(Side::First, 1);
        assert!(second.is_complete());
    }

    #[test]
    fn test_empty_frame_never_complete() {
        let frame = frame_of_plays().complete_when(|_, _, _| true);
        assert!(!frame.is_complete());
        assert_eq!(frame.play_count(), 0);
        assert!(frame.sub_units().is_empty());
    }

    #[test]
    fn test_score_saturates_instead_of_wrapping() {
        let mut frame = frame_of_plays().complete_when(|_, plays, _| plays == 2);
        frame.record_play(Side::First, u32::MAX);
        assert_eq!(frame.score(), Score::new(u32::MAX, 0));

        frame.record_play(Side::First, 1);
        assert!(frame.is_complete());
        assert_eq!(frame.score(), Score::new(u32::MAX, 0));
    }

    #[test]
    fn test_no_rule_completes_with_first_child() {
        let mut frame = frame_of_plays();
        frame.record_play(Side::First, 4);
        assert!(frame.is_complete());

        frame.record_play(Side::First, 4);
        assert_eq!(frame.play_count(), 1);
        assert_eq!(frame.score(), Score::new(4, 0));
    }

    #[test]
    fn test_sub_units_grow() {
        let mut frame = frame_of_plays().complete_when(|_, plays, _| plays == 2);
        frame.record_play(Side::First, 3);
        assert_eq!(frame.sub_units().len(), 1);
        frame.record_play(Side::First, 4);

        let units = frame.sub_units();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].index(), 0);
        assert_eq!(units[1].index(), 1);
        assert_eq!(units[1].score(), Score::new(4, 0));
    }

    #[test]
    fn test_instantiate_shares_rule_not_state() {
        let mut frame = frame_of_plays().complete_when(|_, plays, _| plays == 2);
        frame.record_play(Side::First, 5);

        let mut copy = frame.instantiate(4);
        assert!(copy.rule().unwrap().ptr_eq(frame.rule().unwrap()));
        assert_eq!(copy.play_count(), 0);
        assert!(copy.prototype().sub_units().is_empty());

        copy.record_play(Side::Second, 1);
        copy.record_play(Side::Second, 1);
        assert!(copy.is_complete());
        assert_eq!(frame.score(), Score::new(5, 0));
        assert!(!frame.is_complete());
    }
}
