//! The traffic analyzer: a pure function of local hour to demand profile
//! (§4.4).

use elevsim_core::{Direction, Floor};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileTag {
    Normal,
    MorningRush,
    Lunch,
    EveningRush,
}

/// A demand profile: a tag, a primary direction bias, a hotspot floor set,
/// and an intensity in `[0, 1]`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficProfile {
    pub tag: ProfileTag,
    pub primary_direction: Direction,
    pub hotspots: Vec<Floor>,
    pub intensity: f64,
}

/// Classify `hour` (local wall-clock, `0..24`) into a profile for a building
/// with `num_floors` floors. Deterministic; no state (§4.4).
pub fn classify(hour: u8, num_floors: i32) -> TrafficProfile {
    match hour {
        8..=10 => TrafficProfile {
            tag: ProfileTag::MorningRush,
            primary_direction: Direction::Up,
            hotspots: vec![Floor(1)],
            intensity: 0.8,
        },
        12..=14 => TrafficProfile {
            tag: ProfileTag::Lunch,
            primary_direction: Direction::None,
            hotspots: vec![Floor(1), Floor((num_floors / 2).max(1))],
            intensity: 0.5,
        },
        17..=19 => TrafficProfile {
            tag: ProfileTag::EveningRush,
            primary_direction: Direction::Down,
            hotspots: vec![Floor(num_floors)],
            intensity: 0.8,
        },
        _ => TrafficProfile { tag: ProfileTag::Normal, primary_direction: Direction::None, hotspots: vec![], intensity: 0.3 },
    }
}
