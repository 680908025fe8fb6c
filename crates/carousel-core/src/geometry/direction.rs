//! Movement direction between two slide indices.

use serde::{Deserialize, Serialize};

/// Direction of travel from one slide index to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Backward,
    Still,
    Forward,
}

impl Direction {
    /// Signed unit value: -1, 0 or 1
    #[inline]
    pub fn signum(self) -> i32 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }

    #[inline]
    pub fn is_backward(self) -> bool {
        self == Direction::Backward
    }

    /// The opposite direction; `Still` stays `Still`
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Backward => Direction::Forward,
            Direction::Still => Direction::Still,
            Direction::Forward => Direction::Backward,
        }
    }
}

/// Infer which way the carousel moves going from `start` to `end`.
///
/// While a wrap transition is in progress the shortest visual path runs
/// against index order, so the naive direction is reversed.
///
/// # Examples
/// ```
/// use carousel_core::geometry::{resolve_direction, Direction};
///
/// assert_eq!(resolve_direction(1, 3, false), Direction::Forward);
/// assert_eq!(resolve_direction(1, 3, true), Direction::Backward);
/// assert_eq!(resolve_direction(2, 2, true), Direction::Still);
/// ```
pub fn resolve_direction(start: usize, end: usize, is_wrapping: bool) -> Direction {
    if start == end {
        return Direction::Still;
    }

    let naive = if start < end {
        Direction::Forward
    } else {
        Direction::Backward
    };

    if is_wrapping {
        naive.reversed()
    } else {
        naive
    }
}
