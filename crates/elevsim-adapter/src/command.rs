//! The `Command` wire type — the inbound half of the adapter's channel pair
//! (§6).

use elevsim_core::{CarId, ConfigPatch};
use elevsim_sim::AddCallRequest;

/// Every operation the external interface can request of the engine. Mirrors
/// §6's command surface (`start`, `stop`, `reset`, `addCall`,
/// `updateConfig`, `emergencyStop`) plus `Maintenance`, which is not in that
/// literal list but is required to drive the maintenance-reassignment
/// scenario (§8 scenario 5) from outside the engine.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Command {
    Start { config: Option<ConfigPatch> },
    Stop,
    Reset,
    AddCall { request: AddCallRequest },
    UpdateConfig { patch: ConfigPatch },
    EmergencyStop,
    Maintenance { car_id: CarId, enter: bool },
}
