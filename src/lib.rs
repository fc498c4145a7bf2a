//! # frame-scoring
//!
//! A generic, incremental scoring engine for turn-based games whose rules
//! are nested "frames": a bowling game of frames of balls, a tennis match of
//! sets of games of points.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine only knows how to score a play, detect
//!    when a sub-unit is done, and aggregate or transform scores. Games
//!    supply rules as predicates over `(index, count, score)`.
//!
//! 2. **Discovered Structure**: Nobody says up front how many frames, sets or
//!    games there will be. Frames clone new children from a prototype when
//!    play demands one.
//!
//! 3. **Pure Queries**: Scores are recomputed from the tree on every query;
//!    recording a play is the only mutation.
//!
//! ## Modules
//!
//! - `core`: Sides, score vectors, rule predicates
//! - `nodes`: The five node kinds and the `ScoringNode` enum
//! - `games`: Bowling and tennis assembled from the engine
//! - `error`: Error type for input conversion and config validation

pub mod core;
pub mod error;
pub mod games;
pub mod nodes;

// Re-export commonly used types
pub use crate::core::{BonusRule, FrameRule, Score, Side, SwitchRule};

pub use crate::error::{Result, ScoringError};

pub use crate::nodes::{
    Bonus, Frame, LeafPlay, NodeKind, NodeSnapshot, ScoringNode, Switch, WinPoint,
};

pub use crate::games::{Bowling, BowlingConfig, Tennis, TennisConfig};
