//! Ten-pin bowling as a scoring tree.
//!
//! - A game consists of frames; a frame consists of balls
//! - Strikes and spares earn the pins of the following balls as a bonus
//! - The last frame allows a third ball after a mark
//!
//! Pins per rack and frames per game are configurable.

mod config;
mod game;

pub use config::BowlingConfig;
pub use game::{scoring_tree, Bowling, FrameThrows};
