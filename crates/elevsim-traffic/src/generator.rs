//! The traffic generator (§4.5): synthetic call arrivals biased by the
//! current demand profile.

use elevsim_core::{Direction, Floor, SimRng};

use crate::profile::{ProfileTag, TrafficProfile};

/// One synthetically generated call, not yet assigned an id — the caller
/// (the engine) owns the id counter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GeneratedCall {
    pub origin: Floor,
    pub destination: Floor,
    pub direction: Direction,
    pub passenger_count: u32,
}

/// Stateless traffic generator — all state lives in the injected [`SimRng`].
#[derive(Default)]
pub struct TrafficGenerator;

impl TrafficGenerator {
    pub fn new() -> Self {
        TrafficGenerator
    }

    /// Draw at most one call for this tick.
    ///
    /// `rate_per_tick` is the expected arrival count this tick — the product
    /// of the configured request rate, the profile's intensity, and the
    /// simulation speed multiplier, already converted to a per-tick basis by
    /// the caller. The per-tick arrival probability is the standard
    /// discrete-time thinning of a Poisson process: `p = 1 - exp(-rate)`
    /// (§4.5's "Poisson-like discrete distribution of inter-arrival times").
    pub fn generate(&self, rng: &mut SimRng, profile: &TrafficProfile, rate_per_tick: f64, num_floors: i32) -> Option<GeneratedCall> {
        let p = 1.0 - (-rate_per_tick.max(0.0)).exp();
        if !rng.gen_bool(p) {
            return None;
        }

        let (origin, destination) = match profile.tag {
            ProfileTag::MorningRush if rng.gen_bool(0.7) => (Floor(1), Self::uniform_above(rng, 5, num_floors)),
            ProfileTag::EveningRush if rng.gen_bool(0.7) => (Self::uniform_above(rng, 5, num_floors), Floor(1)),
            ProfileTag::Lunch => Self::lunch_pair(rng, profile, num_floors),
            _ => Self::distinct_uniform_pair(rng, num_floors),
        };

        let direction = Direction::of(origin, destination);
        let passenger_count = rng.gen_range(1..=4);

        Some(GeneratedCall { origin, destination, direction, passenger_count })
    }

    /// A floor strictly greater than `floor` and at most `num_floors`,
    /// falling back to `num_floors` itself when the range is empty.
    fn uniform_above(rng: &mut SimRng, floor: i32, num_floors: i32) -> Floor {
        if floor >= num_floors {
            return Floor(num_floors);
        }
        Floor(rng.gen_range((floor + 1)..=num_floors))
    }

    fn distinct_uniform_pair(rng: &mut SimRng, num_floors: i32) -> (Floor, Floor) {
        let origin = Floor(rng.gen_range(1..=num_floors));
        loop {
            let destination = Floor(rng.gen_range(1..=num_floors));
            if destination != origin {
                return (origin, destination);
            }
        }
    }

    fn hotspot_or_uniform(rng: &mut SimRng, profile: &TrafficProfile, num_floors: i32) -> Floor {
        if !profile.hotspots.is_empty() && rng.gen_bool(0.5) {
            *rng.choose(&profile.hotspots).expect("checked non-empty above")
        } else {
            Floor(rng.gen_range(1..=num_floors))
        }
    }

    fn lunch_pair(rng: &mut SimRng, profile: &TrafficProfile, num_floors: i32) -> (Floor, Floor) {
        loop {
            let origin = Self::hotspot_or_uniform(rng, profile, num_floors);
            let destination = Self::hotspot_or_uniform(rng, profile, num_floors);
            if destination != origin {
                return (origin, destination);
            }
        }
    }
}
