//! Top-level simulation configuration.
//!
//! Out-of-range values are clamped (§3 of the specification); structurally
//! nonsensical values (e.g. `num_floors: 0`) are rejected by the command
//! layer before they ever reach [`Config::clamped`] — clamping narrows an
//! extreme value, it does not repair a meaningless one.

/// Simulation configuration, after clamping.
///
/// Typically constructed via [`Config::clamped`] from a (possibly
/// out-of-range) raw request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub num_cars: u32,
    pub num_floors: u32,
    pub car_capacity: u32,
    /// Multiplier applied to the number of logical ticks run per wall-clock
    /// interval. Higher speed means more ticks per interval, not a shorter
    /// interval (§4.7).
    pub simulation_speed: f64,
    /// Calls per minute produced by the traffic generator at intensity 1.0.
    pub request_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_cars: 3,
            num_floors: 10,
            car_capacity: 8,
            simulation_speed: 1.0,
            request_rate: 2.0,
        }
    }
}

/// A patch applied to an existing [`Config`]. All fields optional — only
/// set fields are changed (§4.7, §6 `updateConfig`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigPatch {
    pub num_cars: Option<u32>,
    pub num_floors: Option<u32>,
    pub car_capacity: Option<u32>,
    pub simulation_speed: Option<f64>,
    pub request_rate: Option<f64>,
}

impl Config {
    const CARS_RANGE: std::ops::RangeInclusive<u32> = 1..=10;
    const FLOORS_RANGE: std::ops::RangeInclusive<u32> = 2..=50;
    const CAPACITY_RANGE: std::ops::RangeInclusive<u32> = 1..=30;
    const SPEED_RANGE: std::ops::RangeInclusive<f64> = 0.1..=10.0;
    const RATE_RANGE: std::ops::RangeInclusive<f64> = 0.1..=20.0;

    /// Clamp every field of `self` into its valid range. The entry point for
    /// an initial, possibly out-of-range config — `apply_clamped` only
    /// touches the fields a patch actually sets.
    pub fn clamped(&self) -> Config {
        Config {
            num_cars: self.num_cars.clamp(*Self::CARS_RANGE.start(), *Self::CARS_RANGE.end()),
            num_floors: self.num_floors.clamp(*Self::FLOORS_RANGE.start(), *Self::FLOORS_RANGE.end()),
            car_capacity: self.car_capacity.clamp(*Self::CAPACITY_RANGE.start(), *Self::CAPACITY_RANGE.end()),
            simulation_speed: self.simulation_speed.clamp(*Self::SPEED_RANGE.start(), *Self::SPEED_RANGE.end()),
            request_rate: self.request_rate.clamp(*Self::RATE_RANGE.start(), *Self::RATE_RANGE.end()),
        }
    }

    /// Apply `patch` on top of `self`, clamping every touched field into its
    /// valid range.
    pub fn apply_clamped(&self, patch: &ConfigPatch) -> Config {
        Config {
            num_cars: patch
                .num_cars
                .map(|v| v.clamp(*Self::CARS_RANGE.start(), *Self::CARS_RANGE.end()))
                .unwrap_or(self.num_cars),
            num_floors: patch
                .num_floors
                .map(|v| v.clamp(*Self::FLOORS_RANGE.start(), *Self::FLOORS_RANGE.end()))
                .unwrap_or(self.num_floors),
            car_capacity: patch
                .car_capacity
                .map(|v| v.clamp(*Self::CAPACITY_RANGE.start(), *Self::CAPACITY_RANGE.end()))
                .unwrap_or(self.car_capacity),
            simulation_speed: patch
                .simulation_speed
                .map(|v| v.clamp(*Self::SPEED_RANGE.start(), *Self::SPEED_RANGE.end()))
                .unwrap_or(self.simulation_speed),
            request_rate: patch
                .request_rate
                .map(|v| v.clamp(*Self::RATE_RANGE.start(), *Self::RATE_RANGE.end()))
                .unwrap_or(self.request_rate),
        }
    }

    /// `true` if `patch` only touches fields mutable while the engine is
    /// running (speed, rate — §6 `updateConfig`). Size-changing fields
    /// require a stop.
    pub fn patch_is_runtime_safe(patch: &ConfigPatch) -> bool {
        patch.num_cars.is_none() && patch.num_floors.is_none() && patch.car_capacity.is_none()
    }
}
