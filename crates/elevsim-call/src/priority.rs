//! Effective priority formula (§4.1).
//!
//! Larger scores mean "serve sooner." The formula is pure given a call's
//! wait time, tier, base priority, and origin/destination floors plus the
//! current local hour — it never mutates the call; [`crate::Call`] calls it
//! on demand after a wait-time refresh.

use elevsim_core::{Clock, Floor};

use crate::tier::StarvationTier;

/// Default base priority for an ordinary call.
pub const BASE_PRIORITY_NORMAL: f64 = 2.0;
/// Default base priority for an emergency-typed call.
pub const BASE_PRIORITY_EMERGENCY: f64 = 5.0;
/// The priority floor latched in on first entry to severe/critical (§4.1).
pub const EMERGENCY_FLOOR: f64 = 8.0;

/// Compute the effective priority for a call given its current state.
///
/// `wait_secs` must already reflect the latest refresh — callers are
/// expected to call [`crate::Call::refresh_wait`] first (§4.1's closing
/// sentence: "callers must first refresh wait time").
#[allow(clippy::too_many_arguments)]
pub fn effective_priority(
    base_priority: f64,
    tier: StarvationTier,
    wait_secs: f64,
    origin: Floor,
    destination: Option<Floor>,
    clock: &dyn Clock,
) -> f64 {
    let mut score = base_priority;

    if wait_secs >= 30.0 {
        let escalation = match tier {
            StarvationTier::Early => 1.8_f64.powf((wait_secs - 30.0) / 10.0),
            StarvationTier::Moderate => 2.0_f64.powf((wait_secs - 45.0) / 10.0),
            StarvationTier::Severe => 3.0_f64.powf((wait_secs - 60.0) / 10.0),
            StarvationTier::Critical => 5.0_f64.powf((wait_secs - 90.0) / 15.0),
            StarvationTier::None => 1.0,
        };
        score *= escalation;

        score += match tier {
            StarvationTier::Early => 75.0,
            StarvationTier::Moderate => 150.0,
            StarvationTier::Severe => 300.0,
            StarvationTier::Critical => 500.0,
            StarvationTier::None => 0.0,
        };
    }

    score *= peak_hour_multiplier(origin, destination, clock);

    score
}

/// The ×2.0 / ×1.5 peak-hour multipliers from §4.1.
fn peak_hour_multiplier(origin: Floor, destination: Option<Floor>, clock: &dyn Clock) -> f64 {
    let hour = clock.local_hour();
    let Some(destination) = destination else {
        return 1.0;
    };

    if (8..=10).contains(&hour) && origin.0 == 1 && destination.0 > 5 {
        2.0
    } else if (17..=19).contains(&hour) && origin.0 > 5 && destination.0 == 1 {
        1.5
    } else {
        1.0
    }
}
