//! Side identification.
//!
//! Every scored game has exactly two competing sides. Single-player games
//! (bowling) only ever score `Side::First`.

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// One of the two competing parties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Both sides in slot order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// Get the slot index (0 or 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    /// Get the opposing side.
    ///
    /// ```
    /// use frame_scoring::core::Side;
    ///
    /// assert_eq!(Side::First.other(), Side::Second);
    /// assert_eq!(Side::Second.other(), Side::First);
    /// ```
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = ScoringError;

    fn try_from(side: u8) -> Result<Self, Self::Error> {
        match side {
            0 => Ok(Side::First),
            1 => Ok(Side::Second),
            _ => Err(ScoringError::InvalidSide { side }),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Side {}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::First.index(), 0);
        assert_eq!(Side::Second.index(), 1);
        assert_eq!(format!("{}", Side::Second), "Side 1");
        assert_eq!(Side::ALL, [Side::First, Side::Second]);
    }

    #[test]
    fn test_side_try_from() {
        assert_eq!(Side::try_from(0u8).unwrap(), Side::First);
        assert_eq!(Side::try_from(1u8).unwrap(), Side::Second);

        let err = Side::try_from(2u8).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidSide { side: 2 }));
    }

    #[test]
    fn test_side_serialization() {
        let json = serde_json::to_string(&Side::Second).unwrap();
        let deserialized: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Side::Second);
    }
}
