//! `elevsim-adapter` — the channel-backed external interface (§5, §6).
//!
//! `elevsim-sim::Engine` only ever calls an [`elevsim_sim::EngineObserver`];
//! this crate is what turns those calls into wire traffic. It owns both
//! channel pairs: a bounded, blocking-send command channel (FIFO, drained
//! at the top of every tick) and a bounded, drop-oldest snapshot/event
//! channel (never blocks the tick loop on a slow consumer).
//!
//! | module | responsibility |
//! |---|---|
//! | [`adapter`] | `Adapter`, the drain/publish loop |
//! | [`command`] | the `Command` wire enum |
//! | [`event`] | the `Event` wire enum, `Ack`, `FatalEvent` |
//! | [`channel`] | the drop-oldest sender wrapper |
//! | [`observer`] | `ChannelObserver`, the `EngineObserver` → `Event` bridge |
//! | [`error`] | `AdapterError` |

pub mod adapter;
pub mod channel;
pub mod command;
pub mod error;
pub mod event;
mod observer;

#[cfg(test)]
mod tests;

pub use adapter::{Adapter, AdapterHandles};
pub use command::Command;
pub use error::{AdapterError, AdapterResult};
pub use event::{Ack, Event, FatalEvent};
