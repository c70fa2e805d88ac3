//! Demand-side traffic modelling: the pure hour-to-profile analyzer, the
//! stochastic call generator, and the idle-car parking policy.
//!
//! | module | responsibility |
//! |---|---|
//! | [`profile`] | `TrafficProfile`/`ProfileTag` and the hour classifier |
//! | [`generator`] | `TrafficGenerator`, synthetic call arrivals |
//! | [`parking`] | the idle-car repositioning policy |

pub mod generator;
pub mod parking;
pub mod profile;

#[cfg(test)]
mod tests;

pub use generator::{GeneratedCall, TrafficGenerator};
pub use parking::parking_floor;
pub use profile::{classify, ProfileTag, TrafficProfile};
