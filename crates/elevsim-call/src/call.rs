//! The `Call` entity (§3, §4.1).

use elevsim_core::{CallId, CarId, Clock, Direction, Floor};

use crate::error::{CallError, CallResult};
use crate::priority::{self, BASE_PRIORITY_EMERGENCY, BASE_PRIORITY_NORMAL, EMERGENCY_FLOOR};
use crate::tier::{StarvationTier, TierTransition};

/// One passenger trip request — a hall call (origin only) or a cabin call
/// (origin + destination known up front).
///
/// See the module-level invariants in `spec.md` §3:
/// - once `served` is `true`, `active` is `false` and `served_at` is set.
/// - `tier` is a monotone function of wait time and never regresses before
///   service.
/// - a critical call's effective priority is at least [`EMERGENCY_FLOOR`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    pub id: CallId,
    pub origin: Floor,
    pub destination: Option<Floor>,
    pub direction: Direction,
    pub created_unix_secs: i64,
    /// Live, growing wait time. Updated by [`Call::refresh_wait`].
    pub wait_ms: u64,
    pub base_priority: f64,
    pub assigned_car: Option<CarId>,
    pub active: bool,
    pub served: bool,
    pub served_unix_secs: Option<i64>,
    pub passenger_count: u32,
    pub tier: StarvationTier,
    pub tier_transition_count: u32,
    pub emergency_latched: bool,
    history: Vec<TierTransition>,

    /// Set once, at first boarding — internal bookkeeping for the frozen
    /// `final_wait_ms`/`final_travel_ms` pair written at service (§9's
    /// finalWaitTime open question).
    first_boarded_unix_secs: Option<i64>,
    /// Frozen wait time (created → first boarding), written exactly once at
    /// service. This, not the live `wait_ms`, is the value used in
    /// historical aggregates and the `callServed` event.
    pub final_wait_ms: Option<u64>,
    /// Frozen travel time (first boarding → service), written exactly once
    /// at service.
    pub final_travel_ms: Option<u64>,
}

impl Call {
    /// Create a new call. `destination` may be `None` for a hall call that
    /// has not yet had a destination chosen (it is supplied on boarding).
    ///
    /// `direction` is taken as given if supplied (e.g. a hall button press
    /// carries its own direction independent of any destination); otherwise
    /// it is inferred from `origin`/`destination`.
    pub fn new(
        id: CallId,
        origin: Floor,
        destination: Option<Floor>,
        direction: Option<Direction>,
        passenger_count: u32,
        is_emergency: bool,
        created_unix_secs: i64,
    ) -> CallResult<Call> {
        if passenger_count == 0 {
            return Err(CallError::ZeroPassengers(passenger_count));
        }
        if let Some(dest) = destination {
            if dest == origin {
                return Err(CallError::OriginEqualsDestination(origin.0));
            }
        }

        let direction = direction
            .or_else(|| destination.map(|d| Direction::of(origin, d)))
            .unwrap_or(Direction::None);

        let base_priority = if is_emergency { BASE_PRIORITY_EMERGENCY } else { BASE_PRIORITY_NORMAL };

        Ok(Call {
            id,
            origin,
            destination,
            direction,
            created_unix_secs,
            wait_ms: 0,
            base_priority,
            assigned_car: None,
            active: true,
            served: false,
            served_unix_secs: None,
            passenger_count,
            tier: StarvationTier::None,
            tier_transition_count: 0,
            emergency_latched: false,
            history: Vec::new(),
            first_boarded_unix_secs: None,
            final_wait_ms: None,
            final_travel_ms: None,
        })
    }

    /// Full transition history, oldest first.
    pub fn history(&self) -> &[TierTransition] {
        &self.history
    }

    /// Recompute `wait_ms` and `tier` for the current time. Idempotent:
    /// calling this twice with the same `now_unix_secs` produces the same
    /// tier and wait (§8's round-trip property).
    ///
    /// On a tier transition, appends to [`Call::history`] and — on first
    /// entry to severe/critical while not yet latched — raises
    /// `base_priority` to at least [`EMERGENCY_FLOOR`] and sets
    /// `emergency_latched`.
    pub fn refresh_wait(&mut self, now_unix_secs: i64) {
        if self.served {
            return;
        }
        let wait_secs = (now_unix_secs - self.created_unix_secs).max(0) as f64;
        self.wait_ms = (wait_secs * 1000.0) as u64;

        let new_tier = StarvationTier::for_wait_secs(wait_secs);
        if new_tier != self.tier {
            debug_assert!(new_tier > self.tier, "starvation tier must not regress before service");
            self.history.push(TierTransition { from: self.tier, to: new_tier, wait_ms: self.wait_ms });
            self.tier_transition_count += 1;
            self.tier = new_tier;

            if new_tier.raises_priority_floor() && !self.emergency_latched {
                self.base_priority = self.base_priority.max(EMERGENCY_FLOOR);
                self.emergency_latched = true;
            }
        }
    }

    /// Effective priority per §4.1's formula. Callers must call
    /// [`Call::refresh_wait`] first; this never mutates the call.
    pub fn effective_priority(&self, clock: &dyn Clock) -> f64 {
        let wait_secs = self.wait_ms as f64 / 1000.0;
        let score = priority::effective_priority(
            self.base_priority,
            self.tier,
            wait_secs,
            self.origin,
            self.destination,
            clock,
        );
        if self.tier == StarvationTier::Critical {
            score.max(EMERGENCY_FLOOR)
        } else {
            score
        }
    }

    /// Bind this call to `car`.
    pub fn mark_assigned(&mut self, car: CarId) {
        self.assigned_car = Some(car);
    }

    /// Return this call to the unassigned pool (e.g. its car entered
    /// maintenance).
    pub fn clear_assignment(&mut self) {
        self.assigned_car = None;
    }

    /// Record first boarding. A destination-less hall call supplies its
    /// destination here, as boarding is when it becomes known (§4.2).
    pub fn mark_boarded(&mut self, now_unix_secs: i64, destination: Floor) {
        if self.first_boarded_unix_secs.is_none() {
            self.first_boarded_unix_secs = Some(now_unix_secs);
        }
        if self.destination.is_none() {
            self.destination = Some(destination);
            self.direction = Direction::of(self.origin, destination);
        }
    }

    /// Mark this call served. Freezes `final_wait_ms`/`final_travel_ms`
    /// exactly once, from the first-boarding timestamp, never from the live
    /// `wait_ms` (§9's finalWaitTime open question).
    pub fn mark_served(&mut self, now_unix_secs: i64) {
        self.served = true;
        self.active = false;
        self.served_unix_secs = Some(now_unix_secs);

        let boarded_at = self.first_boarded_unix_secs.unwrap_or(now_unix_secs);
        self.final_wait_ms = Some(((boarded_at - self.created_unix_secs).max(0) * 1000) as u64);
        self.final_travel_ms = Some(((now_unix_secs - boarded_at).max(0) * 1000) as u64);
    }
}
