//! The `Car` state machine: motion, boarding/disembarking, stop-list
//! management, and the fixed-size car fleet.
//!
//! | module | responsibility |
//! |---|---|
//! | [`car`] | the `Car` struct and its per-tick FSM step |
//! | [`mode`] | `CarMode` |
//! | [`passenger`] | `Passenger` and `BoardingCandidate` |
//! | [`events`] | `CarEvent`, the output of a step |
//! | [`fleet`] | `CarFleet`, the dense `Vec<Car>` store |
//! | [`error`] | construction-time validation errors |

pub mod car;
pub mod error;
pub mod events;
pub mod fleet;
pub mod mode;
pub mod passenger;


pub use car::{Car, CarStepInput, CarStepOutput};
pub use error::{CarError, CarResult};
pub use events::CarEvent;
pub use fleet::CarFleet;
pub use mode::CarMode;
pub use passenger::{BoardingCandidate, Passenger};
