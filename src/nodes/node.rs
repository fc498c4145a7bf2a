//! The scoring node capability shared by every node kind.
//!
//! The set of node kinds is closed, so `ScoringNode` is an enum and every
//! operation dispatches with a `match`. Trees are built from the per-kind
//! structs with their fluent constructors and converted with `.into()`.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{Score, Side};

use super::snapshot::NodeSnapshot;
use super::{Bonus, Frame, LeafPlay, Switch, WinPoint};

/// Discriminant of a [`ScoringNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Play,
    Frame,
    Bonus,
    Switch,
    WinPoint,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::Play => "Play",
            NodeKind::Frame => "Frame",
            NodeKind::Bonus => "Bonus",
            NodeKind::Switch => "Switch",
            NodeKind::WinPoint => "WinPoint",
        };
        f.write_str(name)
    }
}

/// A node in a scoring tree.
///
/// ## Contract
///
/// - `record_play` is the only mutator. Plays reaching a complete node are
///   ignored, except by a [`Bonus`] still in its bonus phase.
/// - `is_complete`, `score`, `play_count` and `sub_units` are pure queries;
///   scores are recomputed from children on every call.
/// - `instantiate` returns a fresh copy with empty state and the given index.
///   Rules are shared with the original; nothing mutable is.
///
/// ## Example
///
/// ```
/// use frame_scoring::core::{Score, Side};
/// use frame_scoring::nodes::{Frame, LeafPlay, ScoringNode, WinPoint};
///
/// let prototype: ScoringNode = WinPoint::new(
///     "winner",
///     Frame::new("game", LeafPlay::new("point"))
///         .complete_when(|_, _, score| score.max() >= 4 && score.difference() >= 2),
/// )
/// .into();
///
/// let mut game = prototype.instantiate(0);
/// for _ in 0..4 {
///     game.record_play(Side::Second, 1);
/// }
///
/// assert_eq!(game.score(), Score::new(0, 1));
/// assert_eq!(prototype.score(), Score::ZERO);
/// ```
#[derive(Clone, Debug)]
pub enum ScoringNode {
    Play(LeafPlay),
    Frame(Frame),
    Bonus(Bonus),
    Switch(Switch),
    WinPoint(WinPoint),
}

impl ScoringNode {
    /// Deliver one play event to this node and the subtree it forwards to.
    pub fn record_play(&mut self, side: Side, amount: u32) {
        match self {
            ScoringNode::Play(node) => node.record_play(side, amount),
            ScoringNode::Frame(node) => node.record_play(side, amount),
            ScoringNode::Bonus(node) => node.record_play(side, amount),
            ScoringNode::Switch(node) => node.record_play(side, amount),
            ScoringNode::WinPoint(node) => node.record_play(side, amount),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            ScoringNode::Play(node) => node.is_complete(),
            ScoringNode::Frame(node) => node.is_complete(),
            ScoringNode::Bonus(node) => node.is_complete(),
            ScoringNode::Switch(node) => node.is_complete(),
            ScoringNode::WinPoint(node) => node.is_complete(),
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        match self {
            ScoringNode::Play(node) => node.score(),
            ScoringNode::Frame(node) => node.score(),
            ScoringNode::Bonus(node) => node.score(),
            ScoringNode::Switch(node) => node.score(),
            ScoringNode::WinPoint(node) => node.score(),
        }
    }

    /// Kind-specific count: plays for a leaf, children for a frame,
    /// delegated for decorators.
    #[must_use]
    pub fn play_count(&self) -> usize {
        match self {
            ScoringNode::Play(node) => node.play_count(),
            ScoringNode::Frame(node) => node.play_count(),
            ScoringNode::Bonus(node) => node.play_count(),
            ScoringNode::Switch(node) => node.play_count(),
            ScoringNode::WinPoint(node) => node.play_count(),
        }
    }

    /// Read-only view of the sub-units a presentation layer walks.
    ///
    /// Empty for a leaf. A bonus is transparent and exposes its child's
    /// sub-units; a switch exposes only its active child.
    #[must_use]
    pub fn sub_units(&self) -> &[ScoringNode] {
        match self {
            ScoringNode::Play(_) => &[],
            ScoringNode::Frame(node) => node.sub_units(),
            ScoringNode::Bonus(node) => node.sub_units(),
            ScoringNode::Switch(node) => node.sub_units(),
            ScoringNode::WinPoint(node) => node.sub_units(),
        }
    }

    /// Fresh instance at `index`, sharing rules but no state.
    #[must_use]
    pub fn instantiate(&self, index: usize) -> ScoringNode {
        match self {
            ScoringNode::Play(node) => node.instantiate(index).into(),
            ScoringNode::Frame(node) => node.instantiate(index).into(),
            ScoringNode::Bonus(node) => node.instantiate(index).into(),
            ScoringNode::Switch(node) => node.instantiate(index).into(),
            ScoringNode::WinPoint(node) => node.instantiate(index).into(),
        }
    }

    /// Position among the parent's children.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            ScoringNode::Play(node) => node.index(),
            ScoringNode::Frame(node) => node.index(),
            ScoringNode::Bonus(node) => node.index(),
            ScoringNode::Switch(node) => node.index(),
            ScoringNode::WinPoint(node) => node.index(),
        }
    }

    /// Debug label given at configuration time.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            ScoringNode::Play(node) => node.label(),
            ScoringNode::Frame(node) => node.label(),
            ScoringNode::Bonus(node) => node.label(),
            ScoringNode::Switch(node) => node.label(),
            ScoringNode::WinPoint(node) => node.label(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            ScoringNode::Play(_) => NodeKind::Play,
            ScoringNode::Frame(_) => NodeKind::Frame,
            ScoringNode::Bonus(_) => NodeKind::Bonus,
            ScoringNode::Switch(_) => NodeKind::Switch,
            ScoringNode::WinPoint(_) => NodeKind::WinPoint,
        }
    }

    /// Structural children, including a switch's inactive branch.
    ///
    /// Unlike [`sub_units`](Self::sub_units) this does not see through
    /// decorators; it is what the debug tree walks.
    #[must_use]
    pub fn children(&self) -> SmallVec<[&ScoringNode; 4]> {
        match self {
            ScoringNode::Play(_) => SmallVec::new(),
            ScoringNode::Frame(node) => node.sub_units().iter().collect(),
            ScoringNode::Bonus(node) => smallvec![node.child()],
            ScoringNode::Switch(node) => smallvec![node.first(), node.second()],
            ScoringNode::WinPoint(node) => smallvec![node.child()],
        }
    }

    /// Capture the current state of the whole subtree.
    #[must_use]
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot::capture(self)
    }
}

impl From<LeafPlay> for ScoringNode {
    fn from(node: LeafPlay) -> Self {
        ScoringNode::Play(node)
    }
}

impl From<Frame> for ScoringNode {
    fn from(node: Frame) -> Self {
        ScoringNode::Frame(node)
    }
}

impl From<Bonus> for ScoringNode {
    fn from(node: Bonus) -> Self {
        ScoringNode::Bonus(node)
    }
}

impl From<Switch> for ScoringNode {
    fn from(node: Switch) -> Self {
        ScoringNode::Switch(node)
    }
}

impl From<WinPoint> for ScoringNode {
    fn from(node: WinPoint) -> Self {
        ScoringNode::WinPoint(node)
    }
}

impl std::fmt::Display for ScoringNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.snapshot(), f)
    }
}
