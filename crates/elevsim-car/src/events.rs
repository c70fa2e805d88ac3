//! Events a car's FSM step can produce, translated by `elevsim-sim` into the
//! wire event list (§6).

use elevsim_core::{CallId, Floor};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarEvent {
    DoorsOpened { floor: Floor },
    DoorsClosed { floor: Floor },
    /// A call's passengers boarded this car.
    Boarded { call_id: CallId, destination: Floor },
    /// A call's passengers reached their destination. `board_unix_secs` lets
    /// the caller compute `travelMs`; `callServed`'s `waitMs` is computed
    /// from the call itself, which alone knows its creation time.
    Disembarked { call_id: CallId, board_unix_secs: i64, now_unix_secs: i64 },
}
