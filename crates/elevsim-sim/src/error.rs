//! The four error kinds of §7, collapsed into one top-level enum.
//!
//! Items 1–3 (`Validation`, `Conflict`, the infeasible-assignment transient)
//! are surfaced to the caller and the engine continues untouched. Item 4
//! (`Fatal`) is never expected in correct operation; once it occurs the
//! engine sets an internal halted flag and every subsequent [`crate::Engine::run_tick`]
//! call returns this variant immediately without touching state again.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed command or out-of-range/impossible call (§7 item 1).
    #[error("validation error: {0}")]
    Validation(String),

    /// Size-changing config while running, or `start` while already running
    /// (§7 item 2).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A car's passenger count exceeded capacity, or a stop list held the
    /// current floor without the car entering `Loading` (§7 item 4). Fatal:
    /// the engine halts and this is the only value returned thereafter.
    #[error("fatal invariant violation: {0}")]
    Fatal(String),

    #[error(transparent)]
    Call(#[from] elevsim_call::CallError),

    #[error(transparent)]
    Car(#[from] elevsim_car::CarError),

    #[error(transparent)]
    Building(#[from] elevsim_building::BuildingError),
}

pub type EngineResult<T> = Result<T, EngineError>;
