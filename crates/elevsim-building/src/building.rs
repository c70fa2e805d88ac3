//! The `Building`: a fixed floor count and per-floor hall-call state (§3).

use elevsim_core::Floor;

use crate::error::{BuildingError, BuildingResult};

/// Hall-call state for a single floor: the two direction buttons and the
/// timestamp each was last pressed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HallCall {
    pub up_pressed: bool,
    pub up_pressed_unix_secs: Option<i64>,
    pub down_pressed: bool,
    pub down_pressed_unix_secs: Option<i64>,
}

impl HallCall {
    pub fn is_idle(&self) -> bool {
        !self.up_pressed && !self.down_pressed
    }
}

/// The building: floor count and per-floor hall-call buttons.
///
/// Invariants (§3): floor count is at least 2; the top floor never carries
/// an up call; the ground floor never carries a down call. Both are
/// enforced at the call site — [`Building::press_up`]/[`Building::press_down`]
/// reject the impossible presses rather than silently ignoring them.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    num_floors: i32,
    floors: Vec<HallCall>,
}

impl Building {
    pub fn new(num_floors: i32) -> BuildingResult<Building> {
        if num_floors < 2 {
            return Err(BuildingError::TooFewFloors(num_floors));
        }
        Ok(Building { num_floors, floors: vec![HallCall::default(); num_floors as usize] })
    }

    pub fn num_floors(&self) -> i32 {
        self.num_floors
    }

    pub fn ground(&self) -> Floor {
        Floor::GROUND
    }

    pub fn top(&self) -> Floor {
        Floor(self.num_floors)
    }

    pub fn contains(&self, floor: Floor) -> bool {
        (1..=self.num_floors).contains(&floor.0)
    }

    fn index_of(&self, floor: Floor) -> BuildingResult<usize> {
        if !self.contains(floor) {
            return Err(BuildingError::FloorOutOfRange(floor.0, self.num_floors));
        }
        Ok((floor.0 - 1) as usize)
    }

    pub fn hall_call(&self, floor: Floor) -> BuildingResult<HallCall> {
        Ok(self.floors[self.index_of(floor)?])
    }

    /// All floors, paired with their hall-call state, in ascending order.
    pub fn hall_calls(&self) -> impl Iterator<Item = (Floor, HallCall)> + '_ {
        self.floors.iter().enumerate().map(|(i, hc)| (Floor(i as i32 + 1), *hc))
    }

    /// Press the up button at `floor`. Idempotent: a second press before the
    /// first is cleared does not reset the timestamp.
    pub fn press_up(&mut self, floor: Floor, now_unix_secs: i64) -> BuildingResult<()> {
        if floor == self.top() {
            return Err(BuildingError::NoUpCallOnTopFloor(floor));
        }
        let idx = self.index_of(floor)?;
        let hc = &mut self.floors[idx];
        if !hc.up_pressed {
            hc.up_pressed = true;
            hc.up_pressed_unix_secs = Some(now_unix_secs);
        }
        Ok(())
    }

    /// Press the down button at `floor`. Idempotent, mirroring [`Building::press_up`].
    pub fn press_down(&mut self, floor: Floor, now_unix_secs: i64) -> BuildingResult<()> {
        if floor == self.ground() {
            return Err(BuildingError::NoDownCallOnGround(floor));
        }
        let idx = self.index_of(floor)?;
        let hc = &mut self.floors[idx];
        if !hc.down_pressed {
            hc.down_pressed = true;
            hc.down_pressed_unix_secs = Some(now_unix_secs);
        }
        Ok(())
    }

    pub fn clear_up(&mut self, floor: Floor) -> BuildingResult<()> {
        let idx = self.index_of(floor)?;
        self.floors[idx].up_pressed = false;
        self.floors[idx].up_pressed_unix_secs = None;
        Ok(())
    }

    pub fn clear_down(&mut self, floor: Floor) -> BuildingResult<()> {
        let idx = self.index_of(floor)?;
        self.floors[idx].down_pressed = false;
        self.floors[idx].down_pressed_unix_secs = None;
        Ok(())
    }

    /// Resize to `num_floors`, dropping all hall-call state. Only valid to
    /// call while the engine is stopped (enforced by `elevsim-sim`, not here).
    pub fn resize(&mut self, num_floors: i32) -> BuildingResult<()> {
        if num_floors < 2 {
            return Err(BuildingError::TooFewFloors(num_floors));
        }
        self.num_floors = num_floors;
        self.floors = vec![HallCall::default(); num_floors as usize];
        Ok(())
    }
}
