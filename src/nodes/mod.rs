//! The scoring-tree engine.
//!
//! Five node kinds compose into a tree that grows as play proceeds:
//!
//! - [`LeafPlay`]: records exactly one scoring event
//! - [`Frame`]: clones children from a prototype on demand; completes by rule
//! - [`Bonus`]: keeps scoring after its child completes, until its rule ends it
//! - [`Switch`]: hands play from one child to another once, by rule
//! - [`WinPoint`]: turns a finished child's score into a single point
//!
//! A tree is assembled once as a prototype and played through
//! [`ScoringNode::record_play`]. The engine knows nothing about particular
//! games; see [`crate::games`] for worked configurations.

mod bonus;
mod frame;
pub mod node;
mod play;
pub mod snapshot;
mod switch;
mod win_point;

pub use bonus::Bonus;
pub use frame::Frame;
pub use node::{NodeKind, ScoringNode};
pub use play::LeafPlay;
pub use snapshot::NodeSnapshot;
pub use switch::Switch;
pub use win_point::WinPoint;
