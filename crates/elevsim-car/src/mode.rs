//! The car's run mode (§3, §4.2).

use std::fmt;

/// Run mode of a car, driven once per tick by [`crate::car::Car::step`].
///
/// Invariants (§3): `MovingUp`/`MovingDown` imply a non-empty stop list and
/// a defined target; `Loading` implies doors are open and the current floor
/// is in the stop list; `Idle` implies an empty stop list and no target.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarMode {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
    Loading,
    Maintenance,
}

impl CarMode {
    pub fn is_moving(self) -> bool {
        matches!(self, CarMode::MovingUp | CarMode::MovingDown)
    }
}

impl fmt::Display for CarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CarMode::Idle => "idle",
            CarMode::MovingUp => "moving-up",
            CarMode::MovingDown => "moving-down",
            CarMode::Loading => "loading",
            CarMode::Maintenance => "maintenance",
        };
        write!(f, "{s}")
    }
}
