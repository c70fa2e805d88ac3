//! Error type for `elevsim-adapter`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Engine(#[from] elevsim_sim::EngineError),
}

pub type AdapterResult<T> = Result<T, AdapterError>;
