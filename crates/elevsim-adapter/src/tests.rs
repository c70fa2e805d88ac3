//! Integration tests for the channel-backed adapter.

use elevsim_assign::HybridAssigner;
use elevsim_core::{Config, FixedClock};
use elevsim_sim::{AddCallRequest, EngineBuilder};

use crate::{Adapter, AdapterHandles, Command, Event};

fn build_adapter() -> (Adapter<HybridAssigner>, AdapterHandles) {
    let config = Config { num_cars: 1, num_floors: 5, car_capacity: 8, simulation_speed: 1.0, request_rate: 0.0 };
    let engine = EngineBuilder::new(config, HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("engine builds");
    Adapter::new(engine, 16, 64)
}

#[test]
fn start_command_is_acked_successfully() {
    let (mut adapter, handles) = build_adapter();
    handles.commands.send(Command::Start { config: None }).unwrap();
    adapter.tick().expect("tick succeeds");

    let mut saw_success_ack = false;
    while let Ok(event) = handles.events.try_recv() {
        if let Event::Ack(ack) = event {
            assert!(ack.success);
            saw_success_ack = true;
        }
    }
    assert!(saw_success_ack);
}

#[test]
fn add_call_command_is_acked_with_the_new_call_id() {
    let (mut adapter, handles) = build_adapter();
    handles.commands.send(Command::Start { config: None }).unwrap();
    adapter.tick().expect("tick succeeds");
    while handles.events.try_recv().is_ok() {} // drain the start ack + snapshot

    handles.commands.send(Command::AddCall { request: AddCallRequest::new(2, Some(4)) }).unwrap();
    adapter.tick().expect("tick succeeds");

    let mut saw_ack_with_id = false;
    while let Ok(event) = handles.events.try_recv() {
        if let Event::Ack(ack) = event {
            assert!(ack.success);
            assert_eq!(ack.id, Some(0));
            saw_ack_with_id = true;
        }
    }
    assert!(saw_ack_with_id, "addCall should be acked with the new call's id");
}

#[test]
fn invalid_add_call_is_acked_with_an_error_and_no_id() {
    let (mut adapter, handles) = build_adapter();
    handles.commands.send(Command::Start { config: None }).unwrap();
    adapter.tick().expect("tick succeeds");
    while handles.events.try_recv().is_ok() {}

    handles.commands.send(Command::AddCall { request: AddCallRequest::new(99, Some(2)) }).unwrap();
    adapter.tick().expect("tick succeeds");

    let mut saw_failed_ack = false;
    while let Ok(event) = handles.events.try_recv() {
        if let Event::Ack(ack) = event {
            assert!(!ack.success);
            assert!(ack.error.is_some());
            assert_eq!(ack.id, None);
            saw_failed_ack = true;
        }
    }
    assert!(saw_failed_ack);
}

#[test]
fn event_channel_drops_oldest_under_backpressure_instead_of_blocking() {
    let config = Config { num_cars: 1, num_floors: 5, car_capacity: 8, simulation_speed: 1.0, request_rate: 0.0 };
    let engine = EngineBuilder::new(config, HybridAssigner::new())
        .clock(Box::new(FixedClock::at_hour(2)))
        .build()
        .expect("engine builds");
    let (mut adapter, handles) = Adapter::new(engine, 16, 2); // tiny event channel

    handles.commands.send(Command::Start { config: None }).unwrap();
    for _ in 0..10 {
        adapter.tick().expect("a full event channel must never make a tick fail");
    }

    let mut count = 0;
    while handles.events.try_recv().is_ok() {
        count += 1;
    }
    assert!(count <= 2, "the channel never grows past its configured capacity");
}
