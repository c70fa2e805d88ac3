//! Wall-clock abstraction.
//!
//! Every hour-of-day policy in this workspace (the traffic analyzer, the
//! peak-hour priority multipliers, the parking policy) queries a `Clock`
//! trait rather than `SystemTime::now()` directly. Production wires
//! [`SystemClock`]; tests wire [`FixedClock`] so a scenario like "it's
//! 09:00, morning rush" is a plain constructor call, not a sleep.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock time for hour-of-day policies.
///
/// Implementations must be cheap to call — every priority recomputation
/// queries it.
pub trait Clock: Send + Sync {
    /// Current Unix timestamp, in seconds.
    fn now_unix_secs(&self) -> i64;

    /// Local hour of day, `0..24`.
    ///
    /// The default implementation treats `now_unix_secs` as already being
    /// in the target local timezone (callers seed the clock with whatever
    /// offset they need); there is no timezone database dependency here.
    fn local_hour(&self) -> u8 {
        let secs_of_day = self.now_unix_secs().rem_euclid(86_400);
        (secs_of_day / 3_600) as u8
    }
}

/// Wraps [`SystemTime`] — the production clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_secs(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

/// A clock fixed to an explicit Unix timestamp, settable with interior
/// mutability so tests can advance it without tearing down the engine.
///
/// Not `Sync`-optimized for high contention — it is a test double, not a
/// production primitive.
pub struct FixedClock {
    secs: std::sync::atomic::AtomicI64,
}

impl FixedClock {
    /// Construct a clock pinned at `unix_secs`.
    pub fn at(unix_secs: i64) -> Self {
        Self { secs: std::sync::atomic::AtomicI64::new(unix_secs) }
    }

    /// Construct a clock pinned at the given local `hour` (0..24), at
    /// minute/second zero, on an arbitrary reference day.
    ///
    /// Convenience for scenario tests that only care about the hour bucket
    /// (§4.4's traffic analyzer and §4.1's peak-hour multipliers are
    /// hour-granularity policies).
    pub fn at_hour(hour: u8) -> Self {
        Self::at(hour as i64 * 3_600)
    }

    /// Advance the clock by `secs` seconds.
    pub fn advance_secs(&self, secs: i64) {
        self.secs.fetch_add(secs, std::sync::atomic::Ordering::Relaxed);
    }

    /// Pin the clock to a new absolute timestamp.
    pub fn set(&self, unix_secs: i64) {
        self.secs.store(unix_secs, std::sync::atomic::Ordering::Relaxed);
    }
}

impl Clock for FixedClock {
    fn now_unix_secs(&self) -> i64 {
        self.secs.load(std::sync::atomic::Ordering::Relaxed)
    }
}

/// Lets a caller keep an `Arc<FixedClock>` handle to advance the clock from
/// the outside (e.g. a test) while also handing the engine a `Box<dyn
/// Clock>` built from the same `Arc`.
impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn now_unix_secs(&self) -> i64 {
        (**self).now_unix_secs()
    }

    fn local_hour(&self) -> u8 {
        (**self).local_hour()
    }
}
