//! Drop-oldest overflow semantics for the snapshot/event channel (§5).

use crossbeam_channel::{Receiver, Sender, TrySendError};

/// A non-blocking sender that evicts the oldest buffered item on overflow
/// instead of blocking the tick loop.
///
/// On `TrySendError::Full`, one `Receiver::try_recv` is issued against a
/// held receiver handle to free a slot, then the send is retried exactly
/// once (§5). A second failure — the evicted slot was itself immediately
/// refilled by a concurrent sender, or the channel is disconnected — drops
/// the item silently; this channel is best-effort by design and must never
/// be a reason for `Engine::run_tick` to stall.
pub struct DropOldestSender<T> {
    tx: Sender<T>,
    evict_rx: Receiver<T>,
}

impl<T> DropOldestSender<T> {
    pub fn new(tx: Sender<T>, evict_rx: Receiver<T>) -> Self {
        Self { tx, evict_rx }
    }

    pub fn send(&self, item: T) {
        match self.tx.try_send(item) {
            Ok(()) => {}
            Err(TrySendError::Full(item)) => {
                let _ = self.evict_rx.try_recv();
                let _ = self.tx.try_send(item);
            }
            Err(TrySendError::Disconnected(_)) => {}
        }
    }
}
