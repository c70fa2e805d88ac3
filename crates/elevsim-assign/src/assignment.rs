//! The result of one assigner run (§4.3).

use elevsim_core::{CallId, CarId};

/// One binding decision produced by an [`crate::Assigner`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub call_id: CallId,
    pub car_id: CarId,
    /// Set when this assignment preempted another call's place on `car_id`
    /// to satisfy a starvation override — that call is returned to the
    /// unassigned pool (§4.3).
    pub preempted: Option<CallId>,
}
