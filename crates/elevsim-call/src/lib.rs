//! The `Call` entity: a single passenger trip request, its starvation tier,
//! and the effective-priority formula that ranks it for assignment.
//!
//! | module | responsibility |
//! |---|---|
//! | [`call`] | the `Call` struct and its lifecycle operations |
//! | [`tier`] | `StarvationTier` and transition history |
//! | [`priority`] | the pure effective-priority formula |
//! | [`error`] | construction-time validation errors |

pub mod call;
pub mod error;
pub mod priority;
pub mod tier;

#[cfg(test)]
mod tests;

pub use call::Call;
pub use error::{CallError, CallResult};
pub use priority::{BASE_PRIORITY_EMERGENCY, BASE_PRIORITY_NORMAL, EMERGENCY_FLOOR};
pub use tier::{StarvationTier, TierTransition};
