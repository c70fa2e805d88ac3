//! Integration tests for the tick loop (§8's scenarios), each driven by a
//! [`FixedClock`] and a bare `run_tick` loop — no wall-clock sleeping.

use std::sync::Arc;

use elevsim_assign::HybridAssigner;
use elevsim_call::StarvationTier;
use elevsim_car::CarMode;
use elevsim_core::{CarId, Config, FixedClock, Floor};

use crate::{AddCallRequest, CarModeSnapshot, EngineBuilder, NoopObserver};

fn small_config() -> Config {
    Config { num_cars: 1, num_floors: 10, car_capacity: 8, simulation_speed: 1.0, request_rate: 0.0 }
}

#[test]
fn scenario_1_single_call_round_trip() {
    let config = Config { num_cars: 1, num_floors: 5, car_capacity: 8, ..small_config() };
    let mut engine = EngineBuilder::new(config, HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("engine builds");
    engine.start(None).expect("starts");
    engine.add_call(AddCallRequest::new(3, Some(5))).expect("call accepted");

    let mut observer = NoopObserver;
    let mut served = false;
    for _ in 0..30 {
        let report = engine.run_tick(&mut observer).expect("tick succeeds");
        if report.served_calls > 0 {
            served = true;
            break;
        }
    }

    assert!(served, "the call should be served within 30 ticks");
    let car = engine.cars().get(CarId(0)).expect("car 0 exists");
    assert_eq!(car.current_floor, Floor(5));
    assert_eq!(car.mode, CarMode::Idle);
    assert!(car.stops().is_empty());
    assert_eq!(engine.active_calls().len(), 0);
    assert_eq!(engine.history().count(), 1);
}

#[test]
fn scenario_2_starvation_escalates_and_forces_assignment() {
    let config = Config { num_cars: 1, num_floors: 10, car_capacity: 1, ..small_config() };
    let clock = Arc::new(FixedClock::at_hour(2));
    let mut engine = EngineBuilder::new(config, HybridAssigner::new())
        .clock(Box::new(clock.clone()))
        .build()
        .expect("engine builds");
    engine.start(None).expect("starts");

    // Call A boards immediately (origin 1, car already there) and occupies
    // the car's only seat all the way to floor 10.
    engine.add_call(AddCallRequest::new(1, Some(10))).expect("call A accepted");
    let mut observer = NoopObserver;
    for _ in 0..2 {
        engine.run_tick(&mut observer).expect("tick succeeds");
    }
    assert_eq!(engine.cars().get(CarId(0)).unwrap().passenger_count(), 1, "call A should already be aboard");

    // Call B is submitted only now, so the capacity check sees a genuinely
    // full car and leaves it unassigned.
    let call_b = engine.add_call(AddCallRequest::new(5, Some(7))).expect("call B accepted");
    for _ in 0..3 {
        engine.run_tick(&mut observer).expect("tick succeeds");
    }

    clock.advance_secs(65);
    engine.run_tick(&mut observer).expect("tick succeeds");

    let b = engine.active_calls().iter().find(|c| c.id == call_b).expect("call B is still waiting");
    assert!(b.tier >= StarvationTier::Severe, "65s of waiting should reach severe tier at least");
    assert!(b.assigned_car.is_some(), "a severe-tier call must be force-assigned even with no spare capacity");
}

#[test]
fn scenario_3_morning_rush_lobby_calls_win_the_boarding_race() {
    let config = Config { num_cars: 1, num_floors: 15, car_capacity: 2, ..small_config() };
    let mut engine = EngineBuilder::new(config, HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(9)))
        .build()
        .expect("engine builds");
    engine.start(None).expect("starts");

    // Four lobby-origin, upper-floor calls (peak-hour ×2.0, §4.1) compete for
    // two boarding slots against four same-floor, non-boosted calls.
    for _ in 0..4 {
        engine.add_call(AddCallRequest::new(1, Some(12))).expect("lobby call accepted");
    }
    for _ in 0..4 {
        engine.add_call(AddCallRequest::new(1, Some(3))).expect("other call accepted");
    }

    let mut observer = NoopObserver;
    engine.run_tick(&mut observer).expect("assignment tick"); // car is already at floor 1: idle -> loading.
    engine.run_tick(&mut observer).expect("boarding tick"); // doors open, candidates sorted by priority.

    let car = engine.cars().get(CarId(0)).expect("car 0 exists");
    let boarded_lobby = car.passengers.iter().filter(|p| p.destination == Floor(12)).count();
    assert_eq!(boarded_lobby, 2, "both capacity slots should go to the peak-hour-boosted lobby calls");
}

#[test]
fn scenario_4_capacity_is_never_exceeded_and_every_call_is_served() {
    let config = Config { num_cars: 1, num_floors: 10, car_capacity: 2, ..small_config() };
    let mut engine = EngineBuilder::new(config, HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("engine builds");
    engine.start(None).expect("starts");

    for dest in [2, 3, 4, 5, 6] {
        engine.add_call(AddCallRequest::new(1, Some(dest))).expect("call accepted");
    }

    let mut observer = NoopObserver;
    let mut max_aboard = 0u32;
    for _ in 0..300 {
        engine.run_tick(&mut observer).expect("tick succeeds");
        let aboard = engine.cars().get(CarId(0)).expect("car 0 exists").passenger_count();
        max_aboard = max_aboard.max(aboard);
        if engine.history().count() == 5 {
            break;
        }
    }

    assert!(max_aboard <= 2, "the car never carries more than its capacity");
    assert_eq!(engine.history().count(), 5, "all five calls are eventually served");
}

#[test]
fn scenario_5_maintenance_forces_reassignment_to_another_car() {
    let config = Config { num_cars: 2, num_floors: 10, car_capacity: 8, ..small_config() };
    let mut engine = EngineBuilder::new(config, HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("engine builds");
    engine.start(None).expect("starts");

    let call_id = engine.add_call(AddCallRequest::new(5, Some(9))).expect("call accepted");
    let mut observer = NoopObserver;
    engine.run_tick(&mut observer).expect("assignment tick");

    let assigned_car =
        engine.active_calls().iter().find(|c| c.id == call_id).and_then(|c| c.assigned_car).expect("call is assigned");
    let other_car = if assigned_car == CarId(0) { CarId(1) } else { CarId(0) };

    engine.set_car_maintenance(assigned_car, true).expect("car enters maintenance");
    assert!(
        engine.active_calls().iter().find(|c| c.id == call_id).unwrap().assigned_car.is_none(),
        "the call returns to the unassigned pool the instant its car enters maintenance"
    );
    assert_eq!(engine.cars().get(assigned_car).unwrap().mode, CarMode::Maintenance);

    engine.run_tick(&mut observer).expect("reassignment tick");
    let reassigned = engine.active_calls().iter().find(|c| c.id == call_id).and_then(|c| c.assigned_car);
    assert_eq!(reassigned, Some(other_car), "the call is picked up by the only car not in maintenance");
}

#[test]
fn scenario_6_reset_clears_history_but_keeps_the_running_config() {
    let config = Config { num_cars: 1, num_floors: 5, car_capacity: 8, ..small_config() };
    let mut engine = EngineBuilder::new(config.clone(), HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("engine builds");
    engine.start(None).expect("starts");
    engine.add_call(AddCallRequest::new(3, Some(5))).expect("call accepted");

    let mut observer = NoopObserver;
    for _ in 0..30 {
        engine.run_tick(&mut observer).expect("tick succeeds");
        if engine.history().count() > 0 {
            break;
        }
    }
    assert!(engine.history().count() > 0, "the call should have been served by now");

    engine.reset();
    assert_eq!(engine.active_calls().len(), 0);
    assert_eq!(engine.history().count(), 0);
    let car = engine.cars().get(CarId(0)).expect("car 0 exists");
    assert_eq!(car.current_floor, Floor::GROUND);
    assert_eq!(car.mode, CarMode::Idle);
    assert_eq!(engine.config().num_floors, config.num_floors, "reset does not touch configuration");

    engine.stop();
    engine.start(None).expect("a bare start{} after stop reuses the last configuration");
    assert_eq!(engine.config().num_floors, config.num_floors);
}

#[test]
fn double_start_is_a_conflict_not_a_silent_restart() {
    let mut engine = EngineBuilder::new(small_config(), HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("engine builds");
    engine.start(None).expect("first start succeeds");
    assert!(engine.start(None).is_err(), "starting an already-running engine is a Conflict");
}

#[test]
fn snapshot_round_trip_after_reset_and_restart_is_empty() {
    let config = Config { num_cars: 2, num_floors: 6, car_capacity: 4, ..small_config() };
    let mut engine = EngineBuilder::new(config, HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("engine builds");
    engine.start(None).expect("starts");
    engine.add_call(AddCallRequest::new(2, Some(5))).expect("call accepted");

    let mut observer = NoopObserver;
    engine.run_tick(&mut observer).expect("tick succeeds");

    engine.stop();
    engine.reset();
    engine.start(None).expect("restarts");

    let snap = engine.snapshot();
    assert_eq!(snap.active_calls.len(), 0);
    assert!(snap.cars.iter().all(|c| c.current_floor == Floor::GROUND && c.mode == CarModeSnapshot::Idle));
}

#[test]
fn invalid_floor_is_rejected_before_it_becomes_a_call() {
    let mut engine = EngineBuilder::new(small_config(), HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("engine builds");
    engine.start(None).expect("starts");

    assert!(engine.add_call(AddCallRequest::new(99, Some(2))).is_err());
    assert!(engine.active_calls().is_empty());
}

#[test]
fn builder_clamps_an_out_of_range_initial_config_instead_of_passing_it_through() {
    let config = Config { num_cars: 0, num_floors: 1, car_capacity: 0, simulation_speed: -1.0, request_rate: 1_000.0 };
    let engine = EngineBuilder::new(config, HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("an out-of-range initial config is clamped, not rejected");

    assert_eq!(engine.config().num_cars, 1);
    assert_eq!(engine.config().num_floors, 2);
    assert_eq!(engine.config().car_capacity, 1);
    assert_eq!(engine.cars().as_slice().len(), 1);
}

#[test]
fn add_call_rejects_a_direction_impossible_from_its_floor() {
    let config = Config { num_floors: 5, ..small_config() };
    let mut engine = EngineBuilder::new(config, HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("engine builds");
    engine.start(None).expect("starts");

    let mut up_from_top = AddCallRequest::new(5, None);
    up_from_top.direction = Some(elevsim_core::Direction::Up);
    assert!(engine.add_call(up_from_top).is_err());

    let mut down_from_ground = AddCallRequest::new(1, None);
    down_from_ground.direction = Some(elevsim_core::Direction::Down);
    assert!(engine.add_call(down_from_ground).is_err());

    assert!(engine.active_calls().is_empty());
}
