//! The engine's event sink (§6, §9's "ad-hoc console logging" redesign).
//!
//! `Engine::run_tick` never owns a channel — it only calls an
//! [`EngineObserver`] once per event, mirroring the teacher framework's
//! separation between `Sim` (owns state, calls `SimObserver`) and the output
//! crate that turns those calls into wire traffic or files. `elevsim-adapter`
//! is the only consumer specified here; it forwards each call onto a
//! bounded channel.

use elevsim_call::StarvationTier;
use elevsim_core::{CallId, CarId};

use crate::snapshot::Snapshot;

/// Callbacks invoked by [`crate::Engine::run_tick`] at key points in one
/// tick. All methods have default no-op bodies so an implementor only
/// overrides what it needs.
pub trait EngineObserver {
    /// A call was bound to a car this tick (§6's `assignment` event).
    fn on_assignment(&mut self, _call_id: CallId, _car_id: CarId) {}

    /// A call's passengers reached their destination (§6's `callServed`).
    fn on_call_served(&mut self, _call_id: CallId, _car_id: CarId, _wait_ms: u64, _travel_ms: u64) {}

    /// A call crossed into a strictly higher starvation tier (§6's
    /// `starvationEscalation`).
    fn on_starvation_escalation(&mut self, _call_id: CallId, _from: StarvationTier, _to: StarvationTier, _wait_ms: u64) {}

    /// A call's wait exceeded 90s and the assigner still could not place it
    /// (§5's alarm event — never dropped, never fatal).
    fn on_starvation_alarm(&mut self, _call_id: CallId, _wait_ms: u64) {}

    /// The end-of-tick point-in-time view (§6's `simulationUpdate`).
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// An internal invariant was violated; the engine has halted (§7 item 4).
    fn on_fatal(&mut self, _description: &str) {}
}

/// An [`EngineObserver`] that does nothing. Use when driving `run_tick`
/// directly in tests that only care about engine state.
#[derive(Default)]
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
