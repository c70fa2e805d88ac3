//! Shared direction enum used by both calls and cars.

use std::fmt;

/// Direction of travel. `None` means stationary / undetermined (e.g. a hall
/// call with no destination yet, or an idle car).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    #[default]
    None,
}

impl Direction {
    /// Direction implied by moving from `from` to `to`. `None` if equal.
    pub fn of(from: crate::Floor, to: crate::Floor) -> Direction {
        match to.0.cmp(&from.0) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::None,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down) | (Direction::Down, Direction::Up)
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::None => "none",
        };
        write!(f, "{s}")
    }
}
