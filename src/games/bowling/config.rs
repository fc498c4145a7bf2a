//! Bowling configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// Ten-pin style rules.
///
/// The last frame allows up to three balls after a mark; every other frame
/// ends on two balls or a strike.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingConfig {
    /// Frames per game (default: 10).
    pub frames: usize,

    /// Pins per rack (default: 10). Knocking all of them down is a mark.
    pub pins: u32,
}

impl Default for BowlingConfig {
    fn default() -> Self {
        Self {
            frames: 10,
            pins: 10,
        }
    }
}

impl BowlingConfig {
    #[must_use]
    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    #[must_use]
    pub fn with_pins(mut self, pins: u32) -> Self {
        self.pins = pins;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(ScoringError::invalid_config("bowling needs at least 1 frame"));
        }
        if self.pins == 0 {
            return Err(ScoringError::invalid_config("bowling needs at least 1 pin"));
        }
        Ok(())
    }
}
