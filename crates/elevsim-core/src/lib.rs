//! `elevsim-core` — foundational types for the elevator dispatch workspace.
//!
//! This crate is a dependency of every other `elevsim-*` crate. It
//! intentionally has no `elevsim-*` dependencies and minimal external ones
//! (`rand` and `thiserror`, plus an optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                  |
//! |------------|--------------------------------------------|
//! | [`ids`]       | `CarId`, `CallId`, `Floor`                |
//! | [`direction`] | `Direction`                               |
//! | [`clock`]     | `Clock`, `SystemClock`, `FixedClock`      |
//! | [`config`]    | `Config`, `ConfigPatch`                   |
//! | [`rng`]       | `SimRng`                                  |
//! | [`error`]     | `CoreError`, `CoreResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod clock;
pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;


pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, ConfigPatch};
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use ids::{CallId, CarId, Floor};
pub use rng::SimRng;
