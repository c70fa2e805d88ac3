//! elevsim-cli — smallest demo for the elevsim dispatch/motion engine.
//!
//! Runs a 4-car, 15-floor building under the hybrid assigner for a fixed
//! number of wall-clock seconds, printing every event published on the
//! adapter's event channel. Traffic is entirely synthetic — the engine's
//! own generator (§4.5) produces calls at `request_rate` calls/minute.

use std::time::{Duration, Instant};

use anyhow::Result;

use elevsim_adapter::{Adapter, Command, Event};
use elevsim_assign::HybridAssigner;
use elevsim_core::Config;
use elevsim_sim::engine::TICK_DURATION_SECS;
use elevsim_sim::EngineBuilder;

const NUM_CARS: u32 = 4;
const NUM_FLOORS: u32 = 15;
const CAR_CAPACITY: u32 = 10;
const REQUEST_RATE: f64 = 6.0; // calls/minute
const RUN_SECONDS: u64 = 15;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== elevsim-cli — dispatch/motion engine demo ===");
    println!("Cars: {NUM_CARS}  |  Floors: {NUM_FLOORS}  |  Capacity: {CAR_CAPACITY}  |  Rate: {REQUEST_RATE}/min");
    println!();

    // 1. Build the engine: hybrid assigner, system clock, seeded RNG.
    let config = Config {
        num_cars: NUM_CARS,
        num_floors: NUM_FLOORS,
        car_capacity: CAR_CAPACITY,
        simulation_speed: 1.0,
        request_rate: REQUEST_RATE,
    };
    let engine = EngineBuilder::new(config, HybridAssigner::new()).seed(42).build()?;

    // 2. Wrap it in the channel-backed adapter. `tick()` is driven directly
    // here rather than through `run_forever` so the demo can stop cleanly
    // on its own terms instead of relying on a fatal halt (§5).
    let (mut adapter, handles) = Adapter::new(engine, 64, 256);
    handles.commands.send(Command::Start { config: None })?;

    // 3. Run the tick loop at wall-clock cadence, printing every event as
    // it's published and tallying a short summary.
    let mut served = 0u64;
    let mut assignments = 0u64;
    let mut alarms = 0u64;
    let deadline = Instant::now() + Duration::from_secs(RUN_SECONDS);

    'running: while Instant::now() < deadline {
        adapter.tick()?;
        while let Ok(event) = handles.events.try_recv() {
            match event {
                Event::CallServed { call_id, car_id, wait_ms, travel_ms } => {
                    served += 1;
                    println!("served   call={call_id} car={car_id} wait={wait_ms}ms travel={travel_ms}ms");
                }
                Event::Assignment { call_id, car_id } => {
                    assignments += 1;
                    println!("assign   call={call_id} -> car={car_id}");
                }
                Event::StarvationEscalation { call_id, from, to, wait_ms } => {
                    println!("escalate call={call_id} {from:?} -> {to:?} ({wait_ms}ms waiting)");
                }
                Event::StarvationAlarm { call_id, wait_ms } => {
                    alarms += 1;
                    println!("ALARM    call={call_id} still waiting after {wait_ms}ms");
                }
                Event::Fatal(fatal) => {
                    eprintln!("FATAL    {}", fatal.description);
                    break 'running;
                }
                Event::Ack(_) | Event::SimulationUpdate(_) => {}
            }
        }
        std::thread::sleep(Duration::from_secs_f64(TICK_DURATION_SECS));
    }

    // 4. Shut the engine down.
    handles.commands.send(Command::Stop)?;
    adapter.tick()?;

    println!();
    println!("Ran for {RUN_SECONDS}s: {served} served, {assignments} assignments, {alarms} starvation alarms");

    Ok(())
}
