//! A boarded passenger, carried by a [`crate::car::Car`].

use elevsim_core::{CallId, Floor};

/// A passenger currently riding in a car. Tracks the originating call so the
/// engine can compute `callServed{waitMs, travelMs}` on disembark without the
/// car holding a reference back to the call itself (§9's no-back-pointers
/// design note).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub call_id: CallId,
    pub origin: Floor,
    pub destination: Floor,
    pub board_unix_secs: i64,
    /// Head count for this call's group — a `Passenger` entry represents one
    /// boarded call, which may carry more than one rider (§3's passenger
    /// count ≥ 1).
    pub passenger_count: u32,
}

/// A call eligible to board this car on the current tick, as determined by
/// the engine (assigned to this car, origin at the current floor, direction
/// compatible). Destination-less hall calls are resolved to a concrete
/// floor by the engine before boarding (§4.2).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardingCandidate {
    pub call_id: CallId,
    pub passenger_count: u32,
    pub destination: Floor,
}
