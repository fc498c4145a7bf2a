//! Two-sided score tally.
//!
//! `Score` is the value every node reports. Parents never cache it: a
//! composite's score is recomputed from its children on each query.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Index, IndexMut};

use super::Side;

/// Accumulated points, one slot per side.
///
/// ## Example
///
/// ```
/// use frame_scoring::core::{Score, Side};
///
/// let mut score = Score::ZERO;
/// score[Side::First] += 15;
/// score += Score::new(0, 30);
///
/// assert_eq!(score, Score::new(15, 30));
/// assert_eq!(score.leader(), Some(Side::Second));
/// assert_eq!(score.to_string(), "15-30");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score([u32; 2]);

impl Score {
    /// Nothing scored on either side.
    pub const ZERO: Score = Score([0, 0]);

    #[must_use]
    pub const fn new(first: u32, second: u32) -> Self {
        Self([first, second])
    }

    /// A score with `amount` credited to `side` only.
    #[must_use]
    pub fn single(side: Side, amount: u32) -> Self {
        let mut score = Self::ZERO;
        score[side] = amount;
        score
    }

    /// The larger of the two slots.
    #[must_use]
    pub fn max(self) -> u32 {
        self.0[0].max(self.0[1])
    }

    /// Absolute gap between the two slots.
    #[must_use]
    pub fn difference(self) -> u32 {
        self.0[0].abs_diff(self.0[1])
    }

    /// The side strictly ahead, or `None` on an exact tie.
    #[must_use]
    pub fn leader(self) -> Option<Side> {
        match self.0[0].cmp(&self.0[1]) {
            std::cmp::Ordering::Greater => Some(Side::First),
            std::cmp::Ordering::Less => Some(Side::Second),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Both slots in side order.
    #[must_use]
    pub const fn as_array(self) -> [u32; 2] {
        self.0
    }
}

impl Index<Side> for Score {
    type Output = u32;

    fn index(&self, side: Side) -> &Self::Output {
        &self.0[side.index()]
    }
}

impl IndexMut<Side> for Score {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.0[side.index()]
    }
}

impl Add for Score {
    type Output = Score;

    /// Slot-wise sum, saturating at `u32::MAX`.
    fn add(self, rhs: Score) -> Score {
        Score([
            self.0[0].saturating_add(rhs.0[0]),
            self.0[1].saturating_add(rhs.0[1]),
        ])
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Self {
        iter.fold(Score::ZERO, Add::add)
    }
}

impl From<[u32; 2]> for Score {
    fn from(slots: [u32; 2]) -> Self {
        Self(slots)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0[0], self.0[1])
    }
}
