//! Fluent builder for constructing an [`Engine`] (mirrors the teacher
//! framework's `SimBuilder`).

use std::collections::VecDeque;

use elevsim_assign::Assigner;
use elevsim_building::Building;
use elevsim_car::CarFleet;
use elevsim_core::{Clock, Config, Floor, SimRng, SystemClock};
use elevsim_traffic::TrafficGenerator;

use crate::engine::Engine;
use crate::error::EngineResult;

/// Builder for [`Engine<A>`].
///
/// # Required inputs
///
/// - an initial [`Config`] (clamped at construction — §3)
/// - an `A: Assigner` implementation, fixed for the life of the engine (§4.3,
///   §9's "interchangeable at the assigner boundary" redesign)
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                              |
/// |-------------|----------------------------------------|
/// | `.clock(c)` | [`SystemClock`]                         |
/// | `.seed(s)`  | `0`                                     |
pub struct EngineBuilder<A: Assigner> {
    config: Config,
    assigner: A,
    clock: Option<Box<dyn Clock>>,
    seed: u64,
}

impl<A: Assigner> EngineBuilder<A> {
    /// Create a builder with the required config and assigner.
    pub fn new(config: Config, assigner: A) -> Self {
        Self { config, assigner, clock: None, seed: 0 }
    }

    /// Inject a clock — tests use a [`elevsim_core::FixedClock`]; production
    /// leaves this unset and gets [`SystemClock`] (§9's clock design note).
    pub fn clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Seed the traffic generator's RNG for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Allocate the building and car fleet and return a ready-to-run,
    /// stopped [`Engine`].
    pub fn build(self) -> EngineResult<Engine<A>> {
        let config = self.config.clamped();
        let building = Building::new(config.num_floors as i32)?;
        let cars = CarFleet::new(config.num_cars, config.car_capacity, Floor::GROUND)?;

        Ok(Engine {
            config,
            assigner: self.assigner,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            rng: SimRng::new(self.seed),
            generator: TrafficGenerator::new(),
            building,
            cars,
            calls: Vec::new(),
            history: VecDeque::new(),
            next_call_id: 0,
            running: false,
            halted: false,
        })
    }
}
