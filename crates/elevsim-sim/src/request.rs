//! Validated input to [`crate::Engine::add_call`] — the data-level shape of
//! the `addCall` command (§6).

use elevsim_core::{Direction, Floor};

/// A request to create a call, as received from the generator or the
/// `addCall` command (§6).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddCallRequest {
    pub origin_floor: i32,
    pub destination_floor: Option<i32>,
    pub direction: Option<Direction>,
    pub passenger_count: Option<u32>,
    /// `true` for an emergency-typed call, which starts at the raised base
    /// priority (§4.1).
    pub is_emergency: bool,
}

impl AddCallRequest {
    pub fn new(origin_floor: i32, destination_floor: Option<i32>) -> Self {
        Self { origin_floor, destination_floor, direction: None, passenger_count: None, is_emergency: false }
    }

    pub fn origin(&self) -> Floor {
        Floor(self.origin_floor)
    }

    pub fn destination(&self) -> Option<Floor> {
        self.destination_floor.map(Floor)
    }
}
