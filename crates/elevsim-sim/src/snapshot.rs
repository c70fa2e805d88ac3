//! The point-in-time view returned by [`crate::Engine::snapshot`] (§4.7).

use elevsim_call::StarvationTier;
use elevsim_car::CarMode;
use elevsim_core::{CallId, CarId, Config, Direction, Floor};

/// One car's externally visible state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarSnapshot {
    pub id: CarId,
    pub current_floor: Floor,
    pub target_floor: Option<Floor>,
    pub mode: CarModeSnapshot,
    pub direction: Direction,
    pub passenger_count: u32,
    pub capacity: u32,
    pub door_open: bool,
    pub stops: Vec<Floor>,
}

/// A `serde`-friendly mirror of [`elevsim_car::CarMode`] — kept separate so
/// `elevsim-car` itself does not need to carry the `serde` feature just to
/// be observed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarModeSnapshot {
    Idle,
    MovingUp,
    MovingDown,
    Loading,
    Maintenance,
}

impl From<CarMode> for CarModeSnapshot {
    fn from(mode: CarMode) -> Self {
        match mode {
            CarMode::Idle => CarModeSnapshot::Idle,
            CarMode::MovingUp => CarModeSnapshot::MovingUp,
            CarMode::MovingDown => CarModeSnapshot::MovingDown,
            CarMode::Loading => CarModeSnapshot::Loading,
            CarMode::Maintenance => CarModeSnapshot::Maintenance,
        }
    }
}

/// One active call's externally visible state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallSnapshot {
    pub id: CallId,
    pub origin: Floor,
    pub destination: Option<Floor>,
    pub direction: Direction,
    pub wait_ms: u64,
    pub tier: StarvationTierSnapshot,
    pub assigned_car: Option<CarId>,
    pub passenger_count: u32,
}

/// A `serde`-friendly mirror of [`elevsim_call::StarvationTier`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StarvationTierSnapshot {
    None,
    Early,
    Moderate,
    Severe,
    Critical,
}

impl From<StarvationTier> for StarvationTierSnapshot {
    fn from(tier: StarvationTier) -> Self {
        match tier {
            StarvationTier::None => StarvationTierSnapshot::None,
            StarvationTier::Early => StarvationTierSnapshot::Early,
            StarvationTier::Moderate => StarvationTierSnapshot::Moderate,
            StarvationTier::Severe => StarvationTierSnapshot::Severe,
            StarvationTier::Critical => StarvationTierSnapshot::Critical,
        }
    }
}

/// Hall-call button state for one floor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HallCallSnapshot {
    pub floor: Floor,
    pub up_pressed: bool,
    pub down_pressed: bool,
}

/// A point-in-time view of the whole engine (§4.7's `snapshot()`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub cars: Vec<CarSnapshot>,
    pub hall_calls: Vec<HallCallSnapshot>,
    pub active_calls: Vec<CallSnapshot>,
    pub running: bool,
    pub current_unix_secs: i64,
    pub config: Config,
}
