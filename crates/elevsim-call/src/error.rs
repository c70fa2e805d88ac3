use thiserror::Error;

#[derive(Debug, Error)]
pub enum CallError {
    #[error("call origin and destination floors must differ, got {0}")]
    OriginEqualsDestination(i32),

    #[error("passenger count must be at least 1, got {0}")]
    ZeroPassengers(u32),
}

pub type CallResult<T> = Result<T, CallError>;
