use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarError {
    #[error("car capacity must be at least 1, got {0}")]
    InvalidCapacity(u32),

    #[error("car {0} is in maintenance and cannot accept stops or passengers")]
    InMaintenance(elevsim_core::CarId),
}

pub type CarResult<T> = Result<T, CarError>;
