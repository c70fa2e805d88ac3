//! The `Car` state machine (§3, §4.2).

use elevsim_core::{CallId, CarId, Direction, Floor};

use crate::error::{CarError, CarResult};
use crate::events::CarEvent;
use crate::mode::CarMode;
use crate::passenger::{BoardingCandidate, Passenger};

/// Inputs the engine supplies for one [`Car::step`] call. Boarding
/// candidates must already be filtered to calls assigned to this car with
/// origin at the car's current floor, and ordered per §4.2's "direction
/// order" rule — the car trusts the order it is given.
#[derive(Clone, Debug, Default)]
pub struct CarStepInput {
    pub boarding_candidates: Vec<BoardingCandidate>,
}

/// Output of one [`Car::step`] call.
#[derive(Clone, Debug, Default)]
pub struct CarStepOutput {
    pub events: Vec<CarEvent>,
    /// Calls that could not board this tick (capacity exceeded). The engine
    /// clears their assignment so they return to the unassigned pool.
    pub unboarded: Vec<CallId>,
}

/// A single elevator car.
///
/// Invariants (§3): `|passengers| ≤ capacity` once doors have closed at
/// least once since the last boarding; `mode ∈ {MovingUp, MovingDown}`
/// implies a non-empty stop list and a defined target; `mode == Loading`
/// implies doors are open and the current floor is in the stop list;
/// `mode == Idle` implies an empty stop list and no target.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    pub id: CarId,
    pub current_floor: Floor,
    pub target_floor: Option<Floor>,
    pub mode: CarMode,
    pub direction: Direction,
    stops: Vec<Floor>,
    target_is_parking: bool,
    pub passengers: Vec<Passenger>,
    pub capacity: u32,
    pub door_open: bool,
    pub total_distance: u64,
    pub total_trips: u64,
}

impl Car {
    pub fn new(id: CarId, capacity: u32, start_floor: Floor) -> CarResult<Car> {
        if capacity == 0 {
            return Err(CarError::InvalidCapacity(capacity));
        }
        Ok(Car {
            id,
            current_floor: start_floor,
            target_floor: None,
            mode: CarMode::Idle,
            direction: Direction::None,
            stops: Vec::new(),
            target_is_parking: false,
            passengers: Vec::new(),
            capacity,
            door_open: false,
            total_distance: 0,
            total_trips: 0,
        })
    }

    pub fn stops(&self) -> &[Floor] {
        &self.stops
    }

    /// Stop list in direction-of-travel order (§4.2): ascending while
    /// heading up, descending while heading down.
    pub fn stops_in_travel_order(&self) -> Vec<Floor> {
        let mut s = self.stops.clone();
        if self.direction == Direction::Down {
            s.sort_by(|a, b| b.0.cmp(&a.0));
        } else {
            s.sort_by_key(|f| f.0);
        }
        s
    }

    /// Append `floor` to the stop list, deduplicated.
    pub fn add_stop(&mut self, floor: Floor) {
        if !self.stops.contains(&floor) {
            self.stops.push(floor);
            self.stops.sort_by_key(|f| f.0);
        }
        // a real stop supersedes any pending parking stop (§4.6).
        self.target_is_parking = false;
    }

    /// Drop `floor` from the stop list if present, without touching mode or
    /// target. Used when the assigner preempts a call's place on this car
    /// (§4.3's starvation override) — the preempted call's stop is re-queued
    /// as unassigned rather than silently visited.
    pub fn remove_stop(&mut self, floor: Floor) {
        self.stops.retain(|f| *f != floor);
    }

    /// Current head count aboard (sum of each boarded call's passenger
    /// count, not the number of `Passenger` entries).
    pub fn passenger_count(&self) -> u32 {
        self.passengers.iter().map(|p| p.passenger_count).sum()
    }

    /// A car already at capacity, with nothing due to disembark before
    /// `origin`, cannot feasibly take on a new call there (§4.3's capacity
    /// refusal).
    pub fn has_capacity_for(&self, origin: Floor, incoming: u32) -> bool {
        let disembarking_before: u32 = self
            .passengers
            .iter()
            .filter(|p| self.would_disembark_before(p.destination, origin))
            .map(|p| p.passenger_count)
            .sum();
        self.passenger_count().saturating_sub(disembarking_before) + incoming <= self.capacity
    }

    fn would_disembark_before(&self, passenger_dest: Floor, origin: Floor) -> bool {
        match self.direction {
            Direction::Up => passenger_dest.0 <= origin.0,
            Direction::Down => passenger_dest.0 >= origin.0,
            Direction::None => true,
        }
    }

    /// Request a parking reposition (§4.6). Ignored unless idle with an
    /// empty stop list.
    pub fn request_parking(&mut self, floor: Floor) {
        if self.mode != CarMode::Idle || !self.stops.is_empty() || self.current_floor == floor {
            return;
        }
        self.target_floor = Some(floor);
        self.target_is_parking = true;
        self.direction = Direction::of(self.current_floor, floor);
        self.mode = if self.direction == Direction::Up { CarMode::MovingUp } else { CarMode::MovingDown };
    }

    /// Utilisation score used by the assigner: weighted blend of load,
    /// activity, and queue depth (§4.2).
    pub fn utilisation(&self) -> f64 {
        let load = self.passenger_count() as f64 / self.capacity as f64;
        let activity = if self.mode != CarMode::Idle { 1.0 } else { 0.0 };
        let queue = (self.stops.len() as f64 / 5.0).min(1.0);
        0.4 * load + 0.4 * activity + 0.2 * queue
    }

    /// Move this car into maintenance. Clears the stop list and target; the
    /// engine is responsible for returning this car's assigned calls to the
    /// unassigned pool (§4.2). Rejects a car that is already in maintenance
    /// rather than silently re-clearing it.
    pub fn enter_maintenance(&mut self) -> CarResult<()> {
        if self.mode == CarMode::Maintenance {
            return Err(CarError::InMaintenance(self.id));
        }
        self.mode = CarMode::Maintenance;
        self.stops.clear();
        self.target_floor = None;
        self.target_is_parking = false;
        self.direction = Direction::None;
        self.door_open = false;
        Ok(())
    }

    pub fn exit_maintenance(&mut self) {
        if self.mode == CarMode::Maintenance {
            self.mode = CarMode::Idle;
        }
    }

    /// Force this car to loading at its current floor with doors open
    /// (`emergencyStop`, §6).
    pub fn force_loading_in_place(&mut self) {
        self.mode = CarMode::Loading;
        self.door_open = true;
        self.target_floor = None;
    }

    fn nearest_stop(&self) -> Option<Floor> {
        self.stops.iter().copied().min_by_key(|f| (f.distance(self.current_floor), f.0))
    }

    fn next_stop_in_direction(&self, direction: Direction) -> Option<Floor> {
        match direction {
            Direction::Up => self.stops.iter().copied().filter(|f| f.0 >= self.current_floor.0).min_by_key(|f| f.0),
            Direction::Down => self.stops.iter().copied().filter(|f| f.0 <= self.current_floor.0).max_by_key(|f| f.0),
            Direction::None => None,
        }
    }

    /// Advance this car by exactly one FSM step (§4.2). `now_unix_secs` is
    /// used to stamp boarding/disembark events.
    pub fn step(&mut self, input: &CarStepInput, now_unix_secs: i64) -> CarStepOutput {
        match self.mode {
            CarMode::Idle => self.step_idle(),
            CarMode::MovingUp | CarMode::MovingDown => self.step_moving(),
            CarMode::Loading => return self.step_loading(input, now_unix_secs),
            CarMode::Maintenance => {}
        }
        CarStepOutput::default()
    }

    fn step_idle(&mut self) {
        if let Some(next) = self.nearest_stop() {
            if next == self.current_floor {
                self.mode = CarMode::Loading;
                self.door_open = false;
                self.target_floor = None;
                return;
            }
            self.direction = Direction::of(self.current_floor, next);
            self.target_floor = Some(next);
            self.target_is_parking = false;
            self.mode = if self.direction == Direction::Up { CarMode::MovingUp } else { CarMode::MovingDown };
        }
        // else remain idle; parking requests are driven externally via
        // `request_parking`, which sets mode directly.
    }

    fn step_moving(&mut self) {
        let Some(target) = self.target_floor else {
            self.mode = CarMode::Idle;
            self.direction = Direction::None;
            return;
        };

        self.current_floor =
            if self.mode == CarMode::MovingUp { self.current_floor.up() } else { self.current_floor.down() };
        self.total_distance += 1;

        if self.current_floor != target {
            return;
        }

        if self.target_is_parking {
            self.mode = CarMode::Idle;
            self.target_floor = None;
            self.target_is_parking = false;
            self.direction = Direction::None;
        } else if self.stops.contains(&target) {
            self.mode = CarMode::Loading;
            self.door_open = false;
        } else {
            self.mode = CarMode::Idle;
            self.target_floor = None;
            self.direction = Direction::None;
        }
    }

    fn step_loading(&mut self, input: &CarStepInput, now_unix_secs: i64) -> CarStepOutput {
        let mut out = CarStepOutput::default();

        if !self.door_open {
            self.door_open = true;
            out.events.push(CarEvent::DoorsOpened { floor: self.current_floor });

            let here = self.current_floor;
            let (leaving, staying): (Vec<Passenger>, Vec<Passenger>) =
                self.passengers.drain(..).partition(|p| p.destination == here);
            self.passengers = staying;
            for p in leaving {
                self.total_trips += 1;
                out.events.push(CarEvent::Disembarked {
                    call_id: p.call_id,
                    board_unix_secs: p.board_unix_secs,
                    now_unix_secs,
                });
            }

            for candidate in &input.boarding_candidates {
                if self.passenger_count() + candidate.passenger_count <= self.capacity {
                    self.passengers.push(Passenger {
                        call_id: candidate.call_id,
                        origin: here,
                        destination: candidate.destination,
                        board_unix_secs: now_unix_secs,
                        passenger_count: candidate.passenger_count,
                    });
                    self.add_stop(candidate.destination);
                    out.events.push(CarEvent::Boarded { call_id: candidate.call_id, destination: candidate.destination });
                } else {
                    out.unboarded.push(candidate.call_id);
                }
            }

            self.stops.retain(|f| *f != here);
        } else {
            self.door_open = false;
            out.events.push(CarEvent::DoorsClosed { floor: self.current_floor });

            if self.stops.is_empty() {
                self.mode = CarMode::Idle;
                self.target_floor = None;
                self.direction = Direction::None;
            } else if let Some(next) = self.next_stop_in_direction(self.direction) {
                self.target_floor = Some(next);
                self.mode = if self.direction == Direction::Up { CarMode::MovingUp } else { CarMode::MovingDown };
            } else {
                let next = self.nearest_stop().expect("stops non-empty");
                self.direction = Direction::of(self.current_floor, next);
                self.target_floor = Some(next);
                self.mode = if self.direction == Direction::Up { CarMode::MovingUp } else { CarMode::MovingDown };
            }
        }

        out
    }
}
