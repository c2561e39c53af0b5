//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both ID types wrap a `u32` and are `Copy + Ord + Hash` so they can be used
//! as map keys and sorted collection elements without ceremony. The inner
//! integer is `pub` to allow direct indexing into dense `Vec`s via `id.0 as
//! usize`, but callers should prefer [`PointId::index`]/[`SegmentId::index`]
//! for clarity.
//!
//! Unlike a typical internal ID wrapper, `Display` here renders the bare
//! integer rather than `TypeName(n)` — the wire format of §6 prints plain
//! node and way numbers (`Node 3: ...`, `error: node 3 does not exist`), so
//! the identifier's `Display` impl has to match that directly instead of a
//! debug-oriented format.

use std::fmt;

/// Generate a typed ID wrapper around `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identifier for a point, dense and unique within one [`GeoPoint`]-indexed map.
    ///
    /// [`GeoPoint`]: crate::geo::GeoPoint
    pub struct PointId;
}

typed_id! {
    /// Identifier for a road segment, dense and unique within one map.
    pub struct SegmentId;
}
