//! Tennis as a scoring tree.
//!
//! - A match consists of sets, won by the first side to `sets_to_win`
//! - A set consists of games, won by two; at six-all a tiebreak decides it,
//!   except in the deciding set, which is played out
//! - A game consists of points, won by two

mod config;
mod game;

pub use config::TennisConfig;
pub use game::{game_call, scoring_tree, Tennis};
