//! `Adapter` — owns both channel pairs and the drain/publish loop (§5).

use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use elevsim_assign::Assigner;
use elevsim_core::CarId;
use elevsim_sim::engine::TICK_DURATION_SECS;
use elevsim_sim::{Engine, TickReport};

use crate::channel::DropOldestSender;
use crate::command::Command;
use crate::error::AdapterResult;
use crate::event::{Ack, Event};
use crate::observer::ChannelObserver;

/// Channel handles given to whatever drives the adapter from outside: the
/// demo CLI, a test, or a future real transport.
pub struct AdapterHandles {
    pub commands: Sender<Command>,
    pub events: Receiver<Event>,
}

/// Bridges a bare [`Engine`] to the channel-based external interface of §5
/// and §6. `elevsim-sim` itself never references a channel type — this is
/// the only crate that does.
pub struct Adapter<A: Assigner> {
    engine: Engine<A>,
    cmd_rx: Receiver<Command>,
    event_tx: DropOldestSender<Event>,
    /// Ticks carried over between `run_forever` iterations so a
    /// `simulation_speed` that isn't a whole number still averages out
    /// correctly — e.g. 2.5 runs 2 or 3 engine ticks per wall-clock
    /// interval, alternating.
    tick_accumulator: f64,
}

impl<A: Assigner> Adapter<A> {
    /// Wrap an already-built engine with a command channel of
    /// `command_capacity` and an event channel of `event_capacity`.
    pub fn new(engine: Engine<A>, command_capacity: usize, event_capacity: usize) -> (Self, AdapterHandles) {
        let (cmd_tx, cmd_rx) = bounded(command_capacity);
        let (event_tx, event_rx) = bounded(event_capacity);
        let adapter = Adapter {
            engine,
            cmd_rx,
            event_tx: DropOldestSender::new(event_tx, event_rx.clone()),
            tick_accumulator: 0.0,
        };
        (adapter, AdapterHandles { commands: cmd_tx, events: event_rx })
    }

    /// Drain every command currently buffered and apply it to the engine,
    /// publishing one [`Event::Ack`] per command (§5's "drained at the top
    /// of each tick", §6's acknowledgement shape).
    fn drain_commands(&mut self) {
        while let Ok(cmd) = self.cmd_rx.try_recv() {
            let ack = self.apply(cmd);
            self.event_tx.send(Event::Ack(ack));
        }
    }

    fn apply(&mut self, cmd: Command) -> Ack {
        match cmd {
            Command::Start { config } => Self::ack(self.engine.start(config).map(|_| None)),
            Command::Stop => {
                self.engine.stop();
                Ack { success: true, error: None, id: None }
            }
            Command::Reset => {
                self.engine.reset();
                Ack { success: true, error: None, id: None }
            }
            Command::AddCall { request } => Self::ack(self.engine.add_call(request).map(|id| Some(id.0))),
            Command::UpdateConfig { patch } => Self::ack(self.engine.update_config(patch).map(|_| None)),
            Command::EmergencyStop => {
                self.engine.emergency_stop();
                Ack { success: true, error: None, id: None }
            }
            Command::Maintenance { car_id, enter } => Self::ack(self.set_maintenance(car_id, enter)),
        }
    }

    fn set_maintenance(&mut self, car_id: CarId, enter: bool) -> elevsim_sim::EngineResult<Option<u64>> {
        self.engine.set_car_maintenance(car_id, enter).map(|_| None)
    }

    fn ack(result: elevsim_sim::EngineResult<Option<u64>>) -> Ack {
        match result {
            Ok(id) => Ack { success: true, error: None, id },
            Err(e) => Ack { success: false, error: Some(e.to_string()), id: None },
        }
    }

    /// Advance the engine by exactly one tick, draining commands first and
    /// publishing every event through the channel (§4.7, §5, §6). Exposed
    /// directly for callers that want their own cadence — tests drive this
    /// without any sleep.
    pub fn tick(&mut self) -> AdapterResult<TickReport> {
        self.drain_commands();
        let mut observer = ChannelObserver { events: &self.event_tx };
        Ok(self.engine.run_tick(&mut observer)?)
    }

    /// Drive the adapter forever at wall-clock cadence — one interval per
    /// [`TICK_DURATION_SECS`] of real time — scaling ticks-per-interval by
    /// `simulation_speed` via the fractional accumulator. Returns once the
    /// engine halts on a fatal invariant violation.
    pub fn run_forever(&mut self) {
        loop {
            self.tick_accumulator += self.engine.config().simulation_speed;
            while self.tick_accumulator >= 1.0 {
                self.tick_accumulator -= 1.0;
                if self.tick().is_err() {
                    log::error!("adapter stopping: engine halted on a fatal invariant violation");
                    return;
                }
            }
            std::thread::sleep(Duration::from_secs_f64(TICK_DURATION_SECS));
        }
    }
}
