//! Tennis configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

/// Match, set, game and tiebreak rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TennisConfig {
    /// Sets needed to win the match (default: 3, best of five).
    pub sets_to_win: u32,

    /// Games needed to win a set, by two (default: 6).
    pub games_per_set: u32,

    /// Points needed to win a game, by two (default: 4).
    pub points_per_game: u32,

    /// Points that end a tiebreak (default: 7).
    pub tiebreak_points: u32,

    /// Play a tiebreak in the deciding set too (default: false, the
    /// deciding set is played out by two games).
    pub final_set_tiebreak: bool,
}

impl Default for TennisConfig {
    fn default() -> Self {
        Self {
            sets_to_win: 3,
            games_per_set: 6,
            points_per_game: 4,
            tiebreak_points: 7,
            final_set_tiebreak: false,
        }
    }
}

impl TennisConfig {
    /// Best-of-three match.
    #[must_use]
    pub fn best_of_three() -> Self {
        Self::default().with_sets_to_win(2)
    }

    /// Most sets a match can last.
    #[must_use]
    pub fn max_sets(&self) -> u32 {
        (2 * self.sets_to_win).saturating_sub(1)
    }

    #[must_use]
    pub fn with_sets_to_win(mut self, sets: u32) -> Self {
        self.sets_to_win = sets;
        self
    }

    #[must_use]
    pub fn with_games_per_set(mut self, games: u32) -> Self {
        self.games_per_set = games;
        self
    }

    #[must_use]
    pub fn with_points_per_game(mut self, points: u32) -> Self {
        self.points_per_game = points;
        self
    }

    #[must_use]
    pub fn with_tiebreak_points(mut self, points: u32) -> Self {
        self.tiebreak_points = points;
        self
    }

    #[must_use]
    pub fn with_final_set_tiebreak(mut self, enabled: bool) -> Self {
        self.final_set_tiebreak = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let checks = [
            (self.sets_to_win, "sets_to_win"),
            (self.games_per_set, "games_per_set"),
            (self.points_per_game, "points_per_game"),
            (self.tiebreak_points, "tiebreak_points"),
        ];
        for (value, name) in checks {
            if value == 0 {
                return Err(ScoringError::invalid_config(format!("{name} must be at least 1")));
            }
        }
        Ok(())
    }
}
