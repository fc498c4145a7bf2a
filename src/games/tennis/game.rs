//! Tennis scorer built on the generic engine.

use tracing::debug;

use crate::core::{Score, Side};
use crate::error::Result;
use crate::nodes::{Frame, LeafPlay, NodeKind, ScoringNode, Switch, WinPoint};

use super::TennisConfig;

/// Assemble the tennis prototype.
///
/// ```text
/// match ─ winner_of_set ─ switch ┬ set ─ winner_of_game ─ game ─ point
///                                └ winner_of_tiebreak ─ tiebreak ─ point
/// ```
#[must_use]
pub fn scoring_tree(config: &TennisConfig) -> ScoringNode {
    let TennisConfig {
        sets_to_win,
        games_per_set,
        points_per_game,
        tiebreak_points,
        final_set_tiebreak,
    } = *config;
    let deciding_set = config.max_sets().saturating_sub(1) as usize;

    let game = Frame::new("game", LeafPlay::new("point")).complete_when(move |_, _, score| {
        score.max() >= points_per_game && score.difference() >= 2
    });

    let set = Frame::new("set", WinPoint::new("winner_of_game", game)).complete_when(move |_, _, score| {
        score.max() >= games_per_set && score.difference() >= 2
    });

    let tiebreak = WinPoint::new(
        "winner_of_tiebreak",
        Frame::new("tiebreak", LeafPlay::new("point"))
            .complete_when(move |_, _, score| score.max() == tiebreak_points),
    );

    let switch = Switch::new("switch", set, tiebreak).switch_when(move |set_index, _, games| {
        (set_index < deciding_set || final_set_tiebreak) && games == Score::new(games_per_set, games_per_set)
    });

    Frame::new("match", WinPoint::new("winner_of_set", switch))
        .complete_when(move |_, _, sets| sets.max() == sets_to_win)
        .into()
}

/// Spoken score of a game in progress, one entry per side.
///
/// Follows the usual calls: `love`, `15`, `30`, `40`, then `deuce` and `adv`
/// once both sides reach the last call, and `game` for the winner. The
/// `deuce` call is written on the first side's entry.
///
/// ```
/// use frame_scoring::core::Score;
/// use frame_scoring::games::tennis::game_call;
///
/// assert_eq!(game_call(Score::new(2, 0), 4), ["30", "love"]);
/// assert_eq!(game_call(Score::new(4, 4), 4), ["deuce", ""]);
/// assert_eq!(game_call(Score::new(4, 5), 4), ["", "adv"]);
/// assert_eq!(game_call(Score::new(2, 4), 4), ["", "game"]);
/// ```
#[must_use]
pub fn game_call(score: Score, points_per_game: u32) -> [String; 2] {
    const CALLS: [&str; 4] = ["love", "15", "30", "40"];

    let mut call = [String::new(), String::new()];
    for side in Side::ALL {
        if score[side] >= points_per_game && score[side] >= score[side.other()] + 2 {
            call[side.index()] = "game".to_string();
            return call;
        }
    }

    let deuce_at = points_per_game.saturating_sub(1);
    if score[Side::First] >= deuce_at && score[Side::Second] >= deuce_at {
        match score.leader() {
            Some(side) => call[side.index()] = "adv".to_string(),
            None => call[Side::First.index()] = "deuce".to_string(),
        }
        return call;
    }

    for side in Side::ALL {
        let points = score[side] as usize;
        call[side.index()] = CALLS
            .get(points)
            .map_or_else(|| points.to_string(), |name| (*name).to_string());
    }
    call
}

/// A tennis match between two sides.
///
/// ## Example
///
/// ```
/// use frame_scoring::core::{Score, Side};
/// use frame_scoring::games::Tennis;
///
/// let mut tennis = Tennis::default();
/// for _ in 0..4 {
///     tennis.play(Side::First);
/// }
/// tennis.play(Side::Second);
///
/// assert_eq!(tennis.set_scores(), vec![Score::new(1, 0)]);
/// assert_eq!(tennis.last_game_score(), ["love", "15"]);
/// ```
#[derive(Clone, Debug)]
pub struct Tennis {
    config: TennisConfig,
    tree: ScoringNode,
}

impl Default for Tennis {
    fn default() -> Self {
        let config = TennisConfig::default();
        Self {
            tree: scoring_tree(&config),
            config,
        }
    }
}

impl Tennis {
    pub fn new(config: TennisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tree: scoring_tree(&config),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &TennisConfig {
        &self.config
    }

    #[must_use]
    pub fn tree(&self) -> &ScoringNode {
        &self.tree
    }

    /// Record a point won by `winner`.
    pub fn play(&mut self, winner: Side) {
        let was_complete = self.tree.is_complete();
        self.tree.record_play(winner, 1);
        if !was_complete && self.tree.is_complete() {
            debug!(event = "match_complete", sets = %self.match_score());
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tree.is_complete()
    }

    /// Sets won by each side.
    #[must_use]
    pub fn match_score(&self) -> Score {
        self.tree.score()
    }

    /// Sets started so far.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.tree.sub_units().len()
    }

    /// Games per side in each set; a won tiebreak counts as a game.
    #[must_use]
    pub fn set_scores(&self) -> Vec<Score> {
        self.tree
            .sub_units()
            .iter()
            .filter_map(|winner_of_set| winner_of_set.sub_units().first())
            .map(ScoringNode::score)
            .collect()
    }

    /// Score of the game in progress (or just finished).
    ///
    /// Regular games use [`game_call`]; tiebreaks report raw points. Both
    /// entries are empty before the first point.
    #[must_use]
    pub fn last_game_score(&self) -> [String; 2] {
        let blank = || [String::new(), String::new()];

        // winner_of_set → switch → set or winner_of_tiebreak
        let Some(active) = self
            .tree
            .sub_units()
            .last()
            .and_then(|winner_of_set| winner_of_set.sub_units().first())
            .and_then(|switch| switch.sub_units().first())
        else {
            return blank();
        };

        match active.kind() {
            NodeKind::Frame => active
                .sub_units()
                .last()
                .and_then(|winner_of_game| winner_of_game.sub_units().first())
                .map_or_else(blank, |game| game_call(game.score(), self.config.points_per_game)),
            _ => active
                .sub_units()
                .first()
                .map_or_else(blank, |tiebreak| tiebreak.score().as_array().map(|points| points.to_string())),
        }
    }
}
