//! Core scoring types: sides, score vectors and rule predicates.
//!
//! These are game-agnostic. Games express their rules as predicates over
//! these types rather than modifying the engine.

pub mod side;
pub mod score;
pub mod rule;

pub use side::Side;
pub use score::Score;
pub use rule::{BonusRule, FrameRule, SwitchRule};
