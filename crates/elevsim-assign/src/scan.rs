//! The SCAN assigner (§9): services calls in current-direction order,
//! performs no starvation escalation, and is interchangeable at the
//! assigner boundary with [`crate::HybridAssigner`].

use elevsim_building::Building;
use elevsim_call::Call;
use elevsim_car::{Car, CarMode};
use elevsim_core::{CarId, Clock};
use elevsim_traffic::TrafficProfile;

use crate::assigner::Assigner;
use crate::assignment::Assignment;

/// Services unassigned calls strictly in current-direction sweep order: the
/// car whose sweep already passes over (or is idle at) a call's origin
/// takes it, nearest first; no priority, tier, or starvation weighting is
/// consulted (§9's open constraint on the SCAN variant).
#[derive(Default)]
pub struct ScanAssigner;

impl ScanAssigner {
    pub fn new() -> Self {
        ScanAssigner
    }
}

impl Assigner for ScanAssigner {
    fn assign(&self, calls: &[Call], cars: &[Car], _building: &Building, _profile: &TrafficProfile, _clock: &dyn Clock) -> Vec<Assignment> {
        let mut out = Vec::new();

        let mut unassigned: Vec<&Call> = calls.iter().filter(|c| c.active && !c.served && c.assigned_car.is_none()).collect();
        unassigned.sort_by_key(|c| c.origin.0);

        for call in unassigned {
            let candidate: Option<CarId> = cars
                .iter()
                .filter(|k| k.mode != CarMode::Maintenance && k.has_capacity_for(call.origin, call.passenger_count))
                .min_by_key(|k| (k.current_floor.distance(call.origin), k.id.0))
                .map(|k| k.id);

            if let Some(car_id) = candidate {
                out.push(Assignment { call_id: call.id, car_id, preempted: None });
            }
        }

        out
    }
}
