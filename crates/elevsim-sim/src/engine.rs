//! The `Engine`: the tick loop itself (§4.7).

use std::collections::VecDeque;

use elevsim_assign::Assigner;
use elevsim_building::Building;
use elevsim_call::Call;
use elevsim_car::{CarEvent, CarFleet, CarMode, CarStepInput};
use elevsim_core::{CallId, CarId, Clock, Config, ConfigPatch, Direction, Floor, SimRng};
use elevsim_traffic::{classify, TrafficGenerator};

use crate::error::{EngineError, EngineResult};
use crate::observer::EngineObserver;
use crate::request::AddCallRequest;
use crate::snapshot::{CallSnapshot, CarSnapshot, HallCallSnapshot, Snapshot};

/// Default tick duration at `simulation_speed == 1.0` (§4.7): one tick per
/// 100ms of wall-clock time. The engine itself only cares about this for
/// converting `request_rate` (calls/minute) into a per-tick arrival
/// probability; wall-clock cadence is the adapter's concern, not this
/// crate's (§5).
pub const TICK_DURATION_SECS: f64 = 0.1;

/// Served-call history cap (§3's "archived in a bounded history").
const HISTORY_CAP: usize = 1000;

/// Counts produced by one [`Engine::run_tick`] call — useful for tests and
/// for the adapter's own bookkeeping. Not part of the wire protocol; the
/// wire protocol is the `EngineObserver` callbacks themselves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub generated_calls: usize,
    pub assignments: usize,
    pub served_calls: usize,
}

/// The dispatch and motion engine (§4.7).
///
/// Owns the building, the car fleet, and every call (active and served
/// history). Nothing outside this struct holds a reference between a call
/// and a car — both are addressed by integer id (§9's no-cyclic-references
/// design note). Generic over the assigner implementation, fixed at
/// construction (§4.3's pluggable-algorithm redesign).
pub struct Engine<A: Assigner> {
    config: Config,
    assigner: A,
    clock: Box<dyn Clock>,
    rng: SimRng,
    generator: TrafficGenerator,
    building: Building,
    cars: CarFleet,
    /// Active (unserved) calls. Removed and moved into `history` the tick
    /// they are served.
    calls: Vec<Call>,
    /// Served calls, FIFO-evicted at `HISTORY_CAP` (§3).
    history: VecDeque<Call>,
    next_call_id: u64,
    running: bool,
    /// Set once and never cleared except by `reset()`; once set, every
    /// `run_tick` call returns `Err(EngineError::Fatal(..))` immediately
    /// (§7 item 4).
    halted: bool,
}

impl<A: Assigner> Engine<A> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn cars(&self) -> &CarFleet {
        &self.cars
    }

    pub fn active_calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn history(&self) -> impl Iterator<Item = &Call> {
        self.history.iter()
    }

    // ── Command surface (§6) ───────────────────────────────────────────────

    /// `start{config?}`. Rejects a structurally invalid patch (§3's
    /// expansion) before clamping, and rejects starting an already-running
    /// engine (§7 item 2, Conflict).
    pub fn start(&mut self, patch: Option<ConfigPatch>) -> EngineResult<()> {
        if self.running {
            return Err(EngineError::Conflict("engine is already running".into()));
        }
        if let Some(patch) = &patch {
            Self::validate_patch_structure(patch)?;
            let new_config = self.config.apply_clamped(patch);
            if Self::sizes_changed(&self.config, &new_config) {
                self.building = Building::new(new_config.num_floors as i32)?;
                self.cars = CarFleet::new(new_config.num_cars, new_config.car_capacity, Floor::GROUND)?;
                self.calls.clear();
            }
            self.config = new_config;
        }
        self.seed_parking();
        self.running = true;
        Ok(())
    }

    /// `stop{}`. Halts the tick loop; all state is retained.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// `reset{}`. Drops all calls, re-creates cars at floor 1, clears
    /// history. Config and `halted` do not otherwise gate this — a reset
    /// always succeeds and always clears a prior fatal halt.
    pub fn reset(&mut self) {
        self.calls.clear();
        self.history.clear();
        self.next_call_id = 0;
        self.cars.reset(Floor::GROUND);
        let _ = self.building.resize(self.config.num_floors as i32);
        self.halted = false;
    }

    /// `addCall{..}`. Validates the payload is in-range, not
    /// origin==destination, and that an explicit `direction` is actually
    /// possible from `origin` (§7 item 1), then enqueues it.
    pub fn add_call(&mut self, req: AddCallRequest) -> EngineResult<CallId> {
        let n = self.building.num_floors();
        if !(1..=n).contains(&req.origin_floor) {
            return Err(EngineError::Validation(format!("origin floor {} outside [1,{n}]", req.origin_floor)));
        }
        if let Some(d) = req.destination_floor {
            if !(1..=n).contains(&d) {
                return Err(EngineError::Validation(format!("destination floor {d} outside [1,{n}]")));
            }
        }
        Self::validate_direction_at_floor(req.origin(), req.direction, &self.building)?;
        let now = self.clock.now_unix_secs();
        self.spawn_call(req.origin(), req.destination(), req.direction, req.passenger_count.unwrap_or(1), req.is_emergency, now)
    }

    /// An explicit `Up` hall call at the top floor, or `Down` at the
    /// ground floor, is never satisfiable — there is no button for it. Reject
    /// it here, before it ever reaches [`Building::press_up`]/`press_down`,
    /// rather than letting the call be created and the button press silently
    /// fail underneath it.
    fn validate_direction_at_floor(origin: Floor, direction: Option<Direction>, building: &Building) -> EngineResult<()> {
        match direction {
            Some(Direction::Up) if origin == building.top() => {
                Err(EngineError::Validation(format!("no up call from the top floor ({origin})")))
            }
            Some(Direction::Down) if origin == building.ground() => {
                Err(EngineError::Validation(format!("no down call from the ground floor ({origin})")))
            }
            _ => Ok(()),
        }
    }

    /// `updateConfig{..}`. While running, only `speed`/`requestRate` may
    /// change (§6); a size-changing patch while running is a Conflict.
    pub fn update_config(&mut self, patch: ConfigPatch) -> EngineResult<()> {
        Self::validate_patch_structure(&patch)?;
        if self.running && !Config::patch_is_runtime_safe(&patch) {
            return Err(EngineError::Conflict("size-changing config requires the engine to be stopped".into()));
        }
        let new_config = self.config.apply_clamped(&patch);
        if Self::sizes_changed(&self.config, &new_config) {
            self.building = Building::new(new_config.num_floors as i32)?;
            self.cars = CarFleet::new(new_config.num_cars, new_config.car_capacity, Floor::GROUND)?;
            self.calls.clear();
        }
        self.config = new_config;
        Ok(())
    }

    /// `emergencyStop{}`: stop, plus force every non-maintenance car to
    /// `Loading` at its current floor with doors open (§6).
    pub fn emergency_stop(&mut self) {
        self.running = false;
        for car in self.cars.iter_mut() {
            if car.mode != CarMode::Maintenance {
                car.force_loading_in_place();
            }
        }
    }

    /// Put a car into or out of maintenance. Entering maintenance
    /// immediately returns its assigned calls to the unassigned pool
    /// (§4.2, §8 scenario 5) — this is not part of §6's literal command
    /// list but is required by §8's maintenance-reassignment scenario.
    pub fn set_car_maintenance(&mut self, car_id: CarId, enter: bool) -> EngineResult<()> {
        let car = self.cars.get_mut(car_id).ok_or_else(|| EngineError::Validation(format!("no such car: {car_id}")))?;
        if enter {
            car.enter_maintenance()?;
            for call in self.calls.iter_mut().filter(|c| c.assigned_car == Some(car_id)) {
                call.clear_assignment();
            }
        } else {
            car.exit_maintenance();
        }
        Ok(())
    }

    /// `snapshot()`: a point-in-time view of cars, active calls, hall
    /// buttons, running flag, and current time (§4.7).
    pub fn snapshot(&self) -> Snapshot {
        let cars = self
            .cars
            .iter()
            .map(|car| CarSnapshot {
                id: car.id,
                current_floor: car.current_floor,
                target_floor: car.target_floor,
                mode: car.mode.into(),
                direction: car.direction,
                passenger_count: car.passenger_count(),
                capacity: car.capacity,
                door_open: car.door_open,
                stops: car.stops().to_vec(),
            })
            .collect();

        let hall_calls = self
            .building
            .hall_calls()
            .map(|(floor, hc)| HallCallSnapshot { floor, up_pressed: hc.up_pressed, down_pressed: hc.down_pressed })
            .collect();

        let active_calls = self
            .calls
            .iter()
            .map(|c| CallSnapshot {
                id: c.id,
                origin: c.origin,
                destination: c.destination,
                direction: c.direction,
                wait_ms: c.wait_ms,
                tier: c.tier.into(),
                assigned_car: c.assigned_car,
                passenger_count: c.passenger_count,
            })
            .collect();

        Snapshot {
            cars,
            hall_calls,
            active_calls,
            running: self.running,
            current_unix_secs: self.clock.now_unix_secs(),
            config: self.config.clone(),
        }
    }

    // ── Tick loop (§4.7) ────────────────────────────────────────────────────

    /// Advance the engine by exactly one tick, in the order specified by
    /// §4.7: (1) refresh wait times, (2) the generator may add a call, (3)
    /// the assigner binds unassigned calls, (4) each car steps its FSM in
    /// ascending id order, (5) build and publish the snapshot.
    ///
    /// Returns immediately with `Err(EngineError::Fatal(..))`, without
    /// touching state, if the engine has already halted. A stopped (but not
    /// halted) engine no-ops and returns an empty report — `stop()` retains
    /// state but the tick loop itself does not advance.
    pub fn run_tick<O: EngineObserver>(&mut self, observer: &mut O) -> EngineResult<TickReport> {
        if self.halted {
            return Err(EngineError::Fatal("engine halted by a prior invariant violation".into()));
        }
        if !self.running {
            return Ok(TickReport::default());
        }

        let now = self.clock.now_unix_secs();
        let hour = self.clock.local_hour();
        let profile = classify(hour, self.building.num_floors());

        // (1) refresh wait times / starvation tiers.
        for call in self.calls.iter_mut() {
            let before = call.tier;
            call.refresh_wait(now);
            if call.tier != before {
                observer.on_starvation_escalation(call.id, before, call.tier, call.wait_ms);
            }
            if call.assigned_car.is_none() && call.wait_ms >= 90_000 {
                observer.on_starvation_alarm(call.id, call.wait_ms);
            }
        }

        // (2) traffic generation — at most one call this tick (§4.5).
        let mut report = TickReport::default();
        let rate_per_tick = (self.config.request_rate / 60.0) * TICK_DURATION_SECS * profile.intensity * self.config.simulation_speed;
        if let Some(g) = self.generator.generate(&mut self.rng, &profile, rate_per_tick, self.building.num_floors()) {
            if self.spawn_call(g.origin, Some(g.destination), Some(g.direction), g.passenger_count, false, now).is_ok() {
                report.generated_calls += 1;
            }
        }

        // (3) assigner binds unassigned calls.
        let assignments = self.assigner.assign(&self.calls, self.cars.as_slice(), &self.building, &profile, self.clock.as_ref());
        report.assignments = assignments.len();
        for assignment in &assignments {
            if let Some(preempted_id) = assignment.preempted {
                let preempted = self.calls.iter_mut().find(|c| c.id == preempted_id).map(|c| {
                    c.clear_assignment();
                    (c.origin, c.destination)
                });
                if let Some((origin, destination)) = preempted {
                    if let Some(car) = self.cars.get_mut(assignment.car_id) {
                        car.remove_stop(origin);
                        if let Some(d) = destination {
                            car.remove_stop(d);
                        }
                    }
                }
            }

            if let Some(call) = self.calls.iter_mut().find(|c| c.id == assignment.call_id) {
                call.mark_assigned(assignment.car_id);
                let origin = call.origin;
                let destination = call.destination;
                if let Some(car) = self.cars.get_mut(assignment.car_id) {
                    car.add_stop(origin);
                    if let Some(d) = destination {
                        car.add_stop(d);
                    }
                }
            }
            observer.on_assignment(assignment.call_id, assignment.car_id);
        }

        // (4) each car steps its FSM, ascending id order (`CarFleet::iter_mut`
        // walks the dense `Vec` in index == id order).
        for car in self.cars.iter_mut() {
            if car.mode == CarMode::Maintenance {
                continue;
            }

            let boarding_candidates = Self::boarding_candidates(car, &self.calls, &self.building, self.clock.as_ref());
            let output = car.step(&CarStepInput { boarding_candidates }, now);

            for event in &output.events {
                match *event {
                    CarEvent::Boarded { call_id, destination } => {
                        if let Some(call) = self.calls.iter_mut().find(|c| c.id == call_id) {
                            let origin = call.origin;
                            let direction = call.direction;
                            call.mark_boarded(now, destination);
                            let cleared = match direction {
                                Direction::Up => self.building.clear_up(origin),
                                Direction::Down => self.building.clear_down(origin),
                                Direction::None => Ok(()),
                            };
                            // `add_call` rejects a direction impossible from
                            // its floor, so this can only fail if a call's
                            // origin/direction pairing was corrupted after
                            // creation — an internal invariant violation,
                            // not a validation error.
                            if let Err(e) = cleared {
                                let msg = format!("call {call_id} boarded with an inconsistent hall button: {e}");
                                self.halted = true;
                                log::error!("{msg}");
                                observer.on_fatal(&msg);
                                return Err(EngineError::Fatal(msg));
                            }
                        }
                    }
                    CarEvent::Disembarked { call_id, .. } => {
                        if let Some(pos) = self.calls.iter().position(|c| c.id == call_id) {
                            let mut call = self.calls.remove(pos);
                            call.mark_served(now);
                            let wait_ms = call.final_wait_ms.unwrap_or(call.wait_ms);
                            let travel_ms = call.final_travel_ms.unwrap_or(0);
                            observer.on_call_served(call.id, car.id, wait_ms, travel_ms);
                            report.served_calls += 1;
                            self.history.push_back(call);
                            if self.history.len() > HISTORY_CAP {
                                self.history.pop_front();
                            }
                        }
                    }
                    CarEvent::DoorsOpened { .. } | CarEvent::DoorsClosed { .. } => {}
                }
            }

            for call_id in &output.unboarded {
                if let Some(call) = self.calls.iter_mut().find(|c| c.id == *call_id) {
                    call.clear_assignment();
                }
            }

            // Fatal invariant checks (§7 item 4, §8's universal invariants).
            if car.passenger_count() > car.capacity {
                let msg = format!("car {} carries {} passengers, exceeding capacity {}", car.id, car.passenger_count(), car.capacity);
                self.halted = true;
                log::error!("{msg}");
                observer.on_fatal(&msg);
                return Err(EngineError::Fatal(msg));
            }
            if car.mode == CarMode::Idle && !car.stops().is_empty() {
                let msg = format!("car {} is idle with a non-empty stop list", car.id);
                self.halted = true;
                log::error!("{msg}");
                observer.on_fatal(&msg);
                return Err(EngineError::Fatal(msg));
            }
        }

        // idle cars with no stops get a parking reposition (§4.6).
        if let Some(parking_floor) = elevsim_traffic::parking_floor(profile.tag, self.building.num_floors()) {
            for car in self.cars.iter_mut() {
                if car.mode == CarMode::Idle {
                    car.request_parking(parking_floor);
                }
            }
        }

        // (5) publish the end-of-tick snapshot.
        let snapshot = self.snapshot();
        observer.on_snapshot(&snapshot);

        Ok(report)
    }

    // ── Internal helpers ────────────────────────────────────────────────────

    fn spawn_call(
        &mut self,
        origin: Floor,
        destination: Option<Floor>,
        direction: Option<Direction>,
        passenger_count: u32,
        is_emergency: bool,
        now: i64,
    ) -> EngineResult<CallId> {
        let id = CallId(self.next_call_id);
        let call = Call::new(id, origin, destination, direction, passenger_count, is_emergency, now).map_err(EngineError::from)?;
        self.next_call_id += 1;

        match call.direction {
            Direction::Up => self.building.press_up(origin, now)?,
            Direction::Down => self.building.press_down(origin, now)?,
            Direction::None => {}
        }

        self.calls.push(call);
        Ok(id)
    }

    fn seed_parking(&mut self) {
        let hour = self.clock.local_hour();
        let profile = classify(hour, self.building.num_floors());
        if let Some(parking_floor) = elevsim_traffic::parking_floor(profile.tag, self.building.num_floors()) {
            for car in self.cars.iter_mut() {
                if car.mode == CarMode::Idle {
                    car.request_parking(parking_floor);
                }
            }
        }
    }

    /// Calls eligible to board `car` this tick: assigned to it, waiting at
    /// its current floor, not already aboard. Destination-less hall calls
    /// are resolved to a concrete floor here (§4.2) — direction-consistent
    /// with the call's own direction, since no further floor-selection
    /// input exists in this engine's scope. Sorted by effective priority,
    /// descending, so a capacity-limited boarding favors the
    /// highest-priority waiting calls (§4.2's "direction order" boarding
    /// rule).
    fn boarding_candidates(car: &elevsim_car::Car, calls: &[Call], building: &Building, clock: &dyn Clock) -> Vec<elevsim_car::BoardingCandidate> {
        let mut candidates: Vec<(&Call, Floor)> = calls
            .iter()
            .filter(|c| c.active && !c.served)
            .filter(|c| c.assigned_car == Some(car.id))
            .filter(|c| c.origin == car.current_floor)
            .filter(|c| !car.passengers.iter().any(|p| p.call_id == c.id))
            .map(|c| {
                let destination = c.destination.unwrap_or_else(|| Self::default_boarding_destination(c, building));
                (c, destination)
            })
            .collect();

        candidates.sort_by(|(a, _), (b, _)| b.effective_priority(clock).partial_cmp(&a.effective_priority(clock)).unwrap());

        candidates
            .into_iter()
            .map(|(c, destination)| elevsim_car::BoardingCandidate { call_id: c.id, passenger_count: c.passenger_count, destination })
            .collect()
    }

    fn default_boarding_destination(call: &Call, building: &Building) -> Floor {
        match call.direction {
            Direction::Up => building.top(),
            Direction::Down => building.ground(),
            Direction::None => call.origin,
        }
    }

    fn validate_patch_structure(patch: &ConfigPatch) -> EngineResult<()> {
        if patch.num_cars == Some(0) {
            return Err(EngineError::Validation("numCars must be at least 1".into()));
        }
        if patch.num_floors == Some(0) {
            return Err(EngineError::Validation("numFloors must be at least 2".into()));
        }
        if patch.car_capacity == Some(0) {
            return Err(EngineError::Validation("carCapacity must be at least 1".into()));
        }
        Ok(())
    }

    fn sizes_changed(old: &Config, new: &Config) -> bool {
        old.num_cars != new.num_cars || old.num_floors != new.num_floors || old.car_capacity != new.car_capacity
    }
}
