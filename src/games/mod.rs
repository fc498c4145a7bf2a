//! Worked game configurations.
//!
//! Each game is nothing but data fed to the engine: a prototype tree of
//! [`nodes`](crate::nodes) wired with rule closures, plus read-only queries
//! that walk the tree for display. The engine does not depend on this module.

pub mod bowling;
pub mod tennis;

pub use bowling::{Bowling, BowlingConfig};
pub use tennis::{Tennis, TennisConfig};
