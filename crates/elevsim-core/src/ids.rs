//! Strongly typed identifier and floor-position wrappers.
//!
//! IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony. `Floor` is kept separate from the
//! id types: it is a *position*, not an index, and needs ordinary integer
//! arithmetic (nearest-floor distance, direction-of-travel comparisons).

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of a car in the fleet. At most 10 per the configuration range.
    pub struct CarId(u32);
}

typed_id! {
    /// Unique id of a call, monotonically assigned by whoever creates it
    /// (the traffic generator or the `addCall` command handler).
    pub struct CallId(u64);
}

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A floor position within a building. Ground floor is `1`; top floor is `N`.
///
/// Unlike [`CarId`]/[`CallId`] this is a position, not a storage index —
/// arithmetic (`distance`, comparisons, offsetting by one) is a core part of
/// its contract.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub i32);

impl Floor {
    pub const GROUND: Floor = Floor(1);

    /// Absolute distance, in floors, to `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// One floor up.
    #[inline]
    pub fn up(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// One floor down.
    #[inline]
    pub fn down(self) -> Floor {
        Floor(self.0 - 1)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {}", self.0)
    }
}
