use thiserror::Error;

use elevsim_core::Floor;

#[derive(Debug, Error)]
pub enum BuildingError {
    #[error("a building needs at least 2 floors, got {0}")]
    TooFewFloors(i32),

    #[error("floor {0} is outside the building's range [1, {1}]")]
    FloorOutOfRange(i32, i32),

    #[error("floor {0} is the top floor, it has no up hall call")]
    NoUpCallOnTopFloor(Floor),

    #[error("floor {0} is the ground floor, it has no down hall call")]
    NoDownCallOnGround(Floor),
}

pub type BuildingResult<T> = Result<T, BuildingError>;
