//! Bowling scorer built on the generic engine.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::Side;
use crate::error::Result;
use crate::nodes::{Bonus, Frame, LeafPlay, ScoringNode};

use super::BowlingConfig;

/// Pin counts of one frame, in throw order.
pub type FrameThrows = SmallVec<[u32; 3]>;

/// Assemble the bowling prototype: game → bonus → frame → ball.
#[must_use]
pub fn scoring_tree(config: &BowlingConfig) -> ScoringNode {
    let frames = config.frames;
    let pins = config.pins;
    let last_frame = frames.saturating_sub(1);

    let frame = Frame::new("frame", LeafPlay::new("ball")).complete_when(move |index, balls, score| {
        let knocked = score[Side::First];
        if index < last_frame {
            balls == 2 || knocked >= pins
        } else {
            (balls == 2 && knocked < pins) || balls == 3
        }
    });

    let bonus = Bonus::new("bonus", frame)
        .finish_when(move |events, score| score[Side::First] < pins || events == 3);

    Frame::new("game", bonus)
        .complete_when(move |_, played, _| played == frames)
        .into()
}

/// A single player's bowling game.
///
/// ## Example
///
/// ```
/// use frame_scoring::games::Bowling;
///
/// let mut game = Bowling::default();
/// for pins in [10, 3, 6] {
///     game.play(pins);
/// }
///
/// assert_eq!(game.accumulated_frame_scores(), vec![19, 28]);
/// assert_eq!(game.total_score(), 28);
/// ```
#[derive(Clone, Debug)]
pub struct Bowling {
    config: BowlingConfig,
    tree: ScoringNode,
}

impl Default for Bowling {
    fn default() -> Self {
        let config = BowlingConfig::default();
        Self {
            tree: scoring_tree(&config),
            config,
        }
    }
}

impl Bowling {
    pub fn new(config: BowlingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tree: scoring_tree(&config),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &BowlingConfig {
        &self.config
    }

    /// The underlying scoring tree.
    #[must_use]
    pub fn tree(&self) -> &ScoringNode {
        &self.tree
    }

    /// Record one ball knocking down `pins`.
    pub fn play(&mut self, pins: u32) {
        let was_complete = self.tree.is_complete();
        self.tree.record_play(Side::First, pins);
        if !was_complete && self.tree.is_complete() {
            debug!(event = "game_complete", total = self.total_score());
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tree.is_complete()
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.tree.score()[Side::First]
    }

    /// Frames started so far.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.tree.sub_units().len()
    }

    /// Pins per ball, grouped by frame.
    #[must_use]
    pub fn frame_throws(&self) -> Vec<FrameThrows> {
        self.tree
            .sub_units()
            .iter()
            .map(|frame| {
                frame
                    .sub_units()
                    .iter()
                    .map(|ball| ball.score()[Side::First])
                    .collect()
            })
            .collect()
    }

    /// Running total at the end of each frame, bonuses included.
    #[must_use]
    pub fn accumulated_frame_scores(&self) -> Vec<u32> {
        self.tree
            .sub_units()
            .iter()
            .scan(0, |total, frame| {
                *total += frame.score()[Side::First];
                Some(*total)
            })
            .collect()
    }

    /// Scorecard marks per frame: `X` strike, `/` spare, `-` miss.
    ///
    /// Before the last frame a strike is written in the second box, leaving
    /// the first one blank.
    #[must_use]
    pub fn notation(&self) -> Vec<Vec<String>> {
        let last_frame = self.config.frames.saturating_sub(1);
        let pins = self.config.pins;

        self.frame_throws()
            .iter()
            .enumerate()
            .map(|(index, throws)| {
                if index < last_frame && throws.first() == Some(&pins) {
                    return vec![String::new(), "X".to_string()];
                }

                // Pins left on the current rack, and whether it is untouched
                let mut standing = pins;
                let mut fresh = true;
                throws
                    .iter()
                    .map(|&knocked| {
                        let mark = if knocked == 0 {
                            "-".to_string()
                        } else if fresh && knocked >= pins {
                            "X".to_string()
                        } else if !fresh && knocked >= standing {
                            "/".to_string()
                        } else {
                            knocked.to_string()
                        };
                        if knocked >= standing {
                            standing = pins;
                            fresh = true;
                        } else {
                            standing -= knocked;
                            fresh = false;
                        }
                        mark
                    })
                    .collect()
            })
            .collect()
    }
}
