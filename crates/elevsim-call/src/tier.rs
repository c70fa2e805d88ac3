//! Starvation tiers and transition bookkeeping.

use std::fmt;

/// Discretised age bucket of an unserved call, driving priority escalation.
///
/// Ordered: `None < Early < Moderate < Severe < Critical`. Per §3's
/// invariant, a call's tier is a monotone function of wait time and never
/// decreases prior to service — [`StarvationTier::for_wait_secs`] enforces
/// the thresholds; callers are responsible for never feeding it a tier that
/// would regress (see [`crate::Call::refresh_wait`]).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StarvationTier {
    #[default]
    None,
    Early,
    Moderate,
    Severe,
    Critical,
}

impl StarvationTier {
    /// Map a wait time in seconds to its tier, per the thresholds in §4.1:
    /// none <30, early [30,45), moderate [45,60), severe [60,90), critical ≥90.
    pub fn for_wait_secs(wait_secs: f64) -> StarvationTier {
        if wait_secs >= 90.0 {
            StarvationTier::Critical
        } else if wait_secs >= 60.0 {
            StarvationTier::Severe
        } else if wait_secs >= 45.0 {
            StarvationTier::Moderate
        } else if wait_secs >= 30.0 {
            StarvationTier::Early
        } else {
            StarvationTier::None
        }
    }

    /// `true` for the two tiers the assigner must place on this tick no
    /// matter what (§4.3's starvation override).
    pub fn must_assign(self) -> bool {
        matches!(self, StarvationTier::Severe | StarvationTier::Critical)
    }

    /// `true` the first time a call enters `Severe` or `Critical` — the
    /// trigger for latching the priority floor (§4.1).
    pub fn raises_priority_floor(self) -> bool {
        matches!(self, StarvationTier::Severe | StarvationTier::Critical)
    }
}

impl fmt::Display for StarvationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StarvationTier::None => "none",
            StarvationTier::Early => "early",
            StarvationTier::Moderate => "moderate",
            StarvationTier::Severe => "severe",
            StarvationTier::Critical => "critical",
        };
        write!(f, "{s}")
    }
}

/// One entry in a call's starvation history: a tier transition plus when it
/// happened.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierTransition {
    pub from: StarvationTier,
    pub to: StarvationTier,
    /// Wait time, in milliseconds, at the moment of transition.
    pub wait_ms: u64,
}
