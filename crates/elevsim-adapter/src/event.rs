//! The `Event` wire type — the outbound half of the adapter's channel pair
//! (§6), plus the per-command `Ack`.

use elevsim_core::{CallId, CarId};
use elevsim_sim::{Snapshot, StarvationTierSnapshot};

/// An internal invariant was violated and the engine has halted (§7 item 4,
/// §6's "fatal event").
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FatalEvent {
    pub description: String,
}

/// The per-command acknowledgement shape of §6: `{success, error?, id?}`.
/// `id` carries the new call's id on a successful `addCall`; `None` for
/// every other command.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Ack {
    pub success: bool,
    pub error: Option<String>,
    pub id: Option<u64>,
}

/// Everything the adapter publishes on the snapshot/event channel (§6).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Event {
    SimulationUpdate(Snapshot),
    CallServed { call_id: CallId, car_id: CarId, wait_ms: u64, travel_ms: u64 },
    StarvationEscalation { call_id: CallId, from: StarvationTierSnapshot, to: StarvationTierSnapshot, wait_ms: u64 },
    StarvationAlarm { call_id: CallId, wait_ms: u64 },
    Assignment { call_id: CallId, car_id: CarId },
    Fatal(FatalEvent),
    Ack(Ack),
}
