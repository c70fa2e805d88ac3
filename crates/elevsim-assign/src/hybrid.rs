//! The hybrid cost-function assigner (§4.3).

use elevsim_building::Building;
use elevsim_call::{Call, StarvationTier};
use elevsim_car::{Car, CarMode};
use elevsim_core::{CarId, Clock, Direction, Floor};
use elevsim_traffic::{ProfileTag, TrafficProfile};

use crate::assigner::Assigner;
use crate::assignment::Assignment;

/// Default cost-function weights (§4.3).
pub const WEIGHT_DISTANCE: f64 = 1.0;
pub const WEIGHT_DIRECTION: f64 = 4.0;
pub const WEIGHT_LOAD: f64 = 3.0;
pub const WEIGHT_PRIORITY: f64 = 0.5;

const PENALTY_COMPATIBLE: f64 = 0.0;
const PENALTY_SHORT_DETOUR: f64 = 15.0;
const PENALTY_FULL_REVERSAL: f64 = 50.0;

/// The hybrid cost-function assignment policy: greedy argmin assignment per
/// call, starvation override with preemption, and the morning-rush lobby
/// bias (§4.3).
#[derive(Default)]
pub struct HybridAssigner;

impl HybridAssigner {
    pub fn new() -> Self {
        HybridAssigner
    }

    fn direction_penalty(car: &Car, call: &Call) -> f64 {
        if car.mode == CarMode::Idle {
            return PENALTY_COMPATIBLE;
        }
        let car_dir = car.direction;
        let call_dir = call.direction;

        let ahead = match car_dir {
            Direction::Up => call.origin.0 >= car.current_floor.0,
            Direction::Down => call.origin.0 <= car.current_floor.0,
            Direction::None => true,
        };

        if car_dir == call_dir && ahead {
            PENALTY_COMPATIBLE
        } else if car_dir == call_dir && !ahead {
            PENALTY_SHORT_DETOUR
        } else {
            PENALTY_FULL_REVERSAL
        }
    }

    fn cost(car: &Car, call: &Call, profile: &TrafficProfile, clock: &dyn Clock) -> f64 {
        let distance = car.current_floor.distance(call.origin) as f64;
        let direction_penalty = Self::direction_penalty(car, call);
        let load = car.stops().len() as f64 + car.passenger_count() as f64 / car.capacity as f64;
        let priority = call.effective_priority(clock);

        let mut cost = WEIGHT_DISTANCE * distance + WEIGHT_DIRECTION * direction_penalty + WEIGHT_LOAD * load
            - WEIGHT_PRIORITY * priority;

        if profile.tag == ProfileTag::MorningRush && call.origin.0 == 1 && call.direction == Direction::Up {
            cost -= WEIGHT_PRIORITY * 40.0;
        }

        cost
    }

    fn feasible_cars<'a>(cars: &'a [Car], call: &Call) -> Vec<&'a Car> {
        cars.iter().filter(|k| k.mode != CarMode::Maintenance && k.has_capacity_for(call.origin, call.passenger_count)).collect()
    }

    fn cheapest_car(cars: &[&Car], call: &Call, profile: &TrafficProfile, clock: &dyn Clock) -> Option<CarId> {
        cars.iter()
            .map(|car| (car.id, Self::cost(car, call, profile, clock)))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap().then_with(|| a.0.cmp(&b.0)))
            .map(|(id, _)| id)
    }

    fn closest_non_maintenance_car(cars: &[Car], origin: Floor) -> Option<CarId> {
        cars.iter()
            .filter(|k| k.mode != CarMode::Maintenance)
            .map(|k| (k.id, k.current_floor.distance(origin)))
            .min_by_key(|(id, d)| (*d, id.0))
            .map(|(id, _)| id)
    }

    fn lowest_priority_call_on<'a>(calls: &'a [Call], car_id: CarId, clock: &dyn Clock) -> Option<&'a Call> {
        calls
            .iter()
            .filter(|c| c.active && !c.served && c.assigned_car == Some(car_id))
            .min_by(|a, b| a.effective_priority(clock).partial_cmp(&b.effective_priority(clock)).unwrap())
    }
}

impl Assigner for HybridAssigner {
    fn assign(&self, calls: &[Call], cars: &[Car], _building: &Building, profile: &TrafficProfile, clock: &dyn Clock) -> Vec<Assignment> {
        let mut out = Vec::new();

        // Critical calls may jump to a strictly closer car even if already
        // assigned (§4.3).
        for call in calls.iter().filter(|c| c.active && !c.served && c.tier == StarvationTier::Critical) {
            if let Some(current) = call.assigned_car {
                let Some(current_car) = cars.iter().find(|k| k.id == current) else { continue };
                let current_distance = current_car.current_floor.distance(call.origin);
                if let Some(closer) = cars
                    .iter()
                    .filter(|k| k.id != current && k.mode != CarMode::Maintenance)
                    .filter(|k| k.current_floor.distance(call.origin) < current_distance)
                    .min_by_key(|k| (k.current_floor.distance(call.origin), k.id.0))
                {
                    out.push(Assignment { call_id: call.id, car_id: closer.id, preempted: None });
                }
            }
        }

        let mut unassigned: Vec<&Call> = calls.iter().filter(|c| c.active && !c.served && c.assigned_car.is_none()).collect();
        unassigned.sort_by(|a, b| {
            b.tier.cmp(&a.tier).then(b.effective_priority(clock).partial_cmp(&a.effective_priority(clock)).unwrap())
        });

        for call in unassigned {
            let feasible = Self::feasible_cars(cars, call);
            if let Some(car_id) = Self::cheapest_car(&feasible, call, profile, clock) {
                out.push(Assignment { call_id: call.id, car_id, preempted: None });
                continue;
            }

            if call.tier.must_assign() {
                if let Some(car_id) = Self::closest_non_maintenance_car(cars, call.origin) {
                    let preempted = Self::lowest_priority_call_on(calls, car_id, clock).map(|c| c.id);
                    out.push(Assignment { call_id: call.id, car_id, preempted });
                }
            }
        }

        out
    }
}
