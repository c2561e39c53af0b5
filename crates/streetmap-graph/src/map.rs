//! Street-map data model and builder.
//!
//! # Data layout
//!
//! `Map` owns two flat, identifier-indexed arrays: `points` and `segments`.
//! A [`Point`] holds the `SegmentId`s it belongs to; a [`Segment`] holds its
//! ordered `PointId` polyline. Both directions are plain identifier
//! indirection into the map's own arrays rather than the raw back-pointers
//! the original C implementation used — this is the one cyclic-ownership
//! problem identifier indirection exists to solve (§9 of the engine spec).
//!
//! # Construction
//!
//! Identifiers are caller-assigned and dense from 0, so [`MapBuilder`] is
//! constructed with the exact point and segment counts up front and each
//! `add_point`/`add_segment` call places its entry at the caller-given
//! identifier rather than appending. `build()` validates every invariant
//! exactly once: every slot filled, every segment at least two points long,
//! every speed strictly positive, every cross-referenced id in range, and
//! every segment→point reference matched by the corresponding point→segment
//! back-reference.

use std::fmt;

use thiserror::Error;

use streetmap_core::{GeoPoint, PointId, SegmentId};

// ── Directionality ────────────────────────────────────────────────────────────

/// Whether a segment may be traversed in both directions or only in the
/// order its point sequence was given.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Directionality {
    OneWay,
    TwoWay,
}

impl Directionality {
    #[inline]
    pub fn is_one_way(self) -> bool {
        matches!(self, Directionality::OneWay)
    }
}

// ── Point / Segment ───────────────────────────────────────────────────────────

/// A fixed location in geographic space, plus the segments it belongs to.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub id: PointId,
    pub pos: GeoPoint,
    pub segment_ids: Vec<SegmentId>,
}

impl Point {
    #[inline]
    pub fn lat(&self) -> f64 {
        self.pos.lat
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.pos.lon
    }
}

/// A named road segment: a speed limit, a directionality flag, and an
/// ordered polyline of at least two points.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub id: SegmentId,
    pub name: String,
    pub max_speed_kmh: f64,
    pub directionality: Directionality,
    pub point_ids: Vec<PointId>,
}

impl Segment {
    /// Index of `point` within this segment's polyline, if present.
    ///
    /// Linear scan — segment polylines are short (tens of points at most),
    /// so this is never the bottleneck relative to the graph-wide search.
    pub fn position_of(&self, point: PointId) -> Option<usize> {
        self.point_ids.iter().position(|&p| p == point)
    }

    #[inline]
    pub fn is_one_way(&self) -> bool {
        self.directionality.is_one_way()
    }
}

// ── Map ───────────────────────────────────────────────────────────────────────

/// An immutable bundle of all points and segments in a street map.
///
/// Lookup by identifier is O(1): identifiers are dense and used directly as
/// `Vec` indices. Construct via [`MapBuilder`]; there is no public way to
/// mutate a `Map` after it is built.
pub struct Map {
    points: Vec<Point>,
    segments: Vec<Segment>,
}

impl Map {
    #[inline]
    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id.index())
    }

    #[inline]
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.index())
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}

// ── MapBuilder ────────────────────────────────────────────────────────────────

/// Build a [`Map`] by filling caller-assigned identifier slots, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use streetmap_core::{GeoPoint, PointId, SegmentId};
/// use streetmap_graph::{Directionality, MapBuilder};
///
/// let mut b = MapBuilder::new(2, 1);
/// b.add_segment(SegmentId(0), "Main", 60.0, Directionality::TwoWay, vec![PointId(0), PointId(1)]).unwrap();
/// b.add_point(PointId(0), GeoPoint::new(43.0, -79.0), vec![SegmentId(0)]).unwrap();
/// b.add_point(PointId(1), GeoPoint::new(43.1, -79.1), vec![SegmentId(0)]).unwrap();
/// let map = b.build().unwrap();
/// assert_eq!(map.point_count(), 2);
/// assert_eq!(map.segment_count(), 1);
/// ```
pub struct MapBuilder {
    points: Vec<Option<Point>>,
    segments: Vec<Option<Segment>>,
}

/// Failure building a [`Map`] from caller-supplied points and segments.
///
/// These are all caller bugs in the data being loaded (a malformed input
/// file, a hand-built test fixture with a typo) — not user-input errors at
/// query time, which is why they are reported as a `Result` from `build()`
/// rather than the §7 printed error lines that query operations use.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BuildError {
    #[error("point {0} was never added")]
    PointMissing(PointId),

    #[error("segment {0} was never added")]
    SegmentMissing(SegmentId),

    #[error("point id {0} is out of range for a map built with {1} points")]
    PointIdOutOfRange(PointId, usize),

    #[error("segment id {0} is out of range for a map built with {1} segments")]
    SegmentIdOutOfRange(SegmentId, usize),

    #[error("segment {0} has only {1} point(s); a segment needs at least 2")]
    SegmentTooShort(SegmentId, usize),

    #[error("segment {0} has non-positive max speed {1}")]
    NonPositiveSpeed(SegmentId, f64),

    #[error("segment {segment} lists point {point}, which does not exist")]
    SegmentReferencesMissingPoint { segment: SegmentId, point: PointId },

    #[error("point {point} lists segment {segment}, which does not exist")]
    PointReferencesMissingSegment { point: PointId, segment: SegmentId },

    #[error("segment {segment} lists point {point}, but that point's segment-set omits {segment}")]
    BackReferenceMismatch { segment: SegmentId, point: PointId },
}

impl MapBuilder {
    /// Start a builder sized for exactly `point_count` points and
    /// `segment_count` segments, with identifiers `0..point_count` and
    /// `0..segment_count` respectively.
    pub fn new(point_count: usize, segment_count: usize) -> Self {
        Self { points: vec![None; point_count], segments: vec![None; segment_count] }
    }

    /// Register the segment at its given identifier.
    pub fn add_segment(
        &mut self,
        id: SegmentId,
        name: impl Into<String>,
        max_speed_kmh: f64,
        directionality: Directionality,
        point_ids: Vec<PointId>,
    ) -> Result<(), BuildError> {
        let slot = self
            .segments
            .get_mut(id.index())
            .ok_or(BuildError::SegmentIdOutOfRange(id, self.segments.len()))?;
        *slot = Some(Segment { id, name: name.into(), max_speed_kmh, directionality, point_ids });
        Ok(())
    }

    /// Register the point at its given identifier.
    pub fn add_point(
        &mut self,
        id: PointId,
        pos: GeoPoint,
        segment_ids: Vec<SegmentId>,
    ) -> Result<(), BuildError> {
        let slot = self
            .points
            .get_mut(id.index())
            .ok_or(BuildError::PointIdOutOfRange(id, self.points.len()))?;
        *slot = Some(Point { id, pos, segment_ids });
        Ok(())
    }

    /// Consume the builder and produce a [`Map`], checking every invariant
    /// of §3 exactly once.
    pub fn build(self) -> Result<Map, BuildError> {
        let point_count = self.points.len();
        let segment_count = self.segments.len();

        let mut points = Vec::with_capacity(point_count);
        for (i, slot) in self.points.into_iter().enumerate() {
            points.push(slot.ok_or_else(|| BuildError::PointMissing(PointId(i as u32)))?);
        }

        let mut segments = Vec::with_capacity(segment_count);
        for (i, slot) in self.segments.into_iter().enumerate() {
            segments.push(slot.ok_or_else(|| BuildError::SegmentMissing(SegmentId(i as u32)))?);
        }

        for segment in &segments {
            if segment.point_ids.len() < 2 {
                return Err(BuildError::SegmentTooShort(segment.id, segment.point_ids.len()));
            }
            if !(segment.max_speed_kmh > 0.0) {
                return Err(BuildError::NonPositiveSpeed(segment.id, segment.max_speed_kmh));
            }
            for &pid in &segment.point_ids {
                let Some(point) = points.get(pid.index()) else {
                    return Err(BuildError::SegmentReferencesMissingPoint { segment: segment.id, point: pid });
                };
                if !point.segment_ids.contains(&segment.id) {
                    return Err(BuildError::BackReferenceMismatch { segment: segment.id, point: pid });
                }
            }
        }

        for point in &points {
            for &sid in &point.segment_ids {
                if segments.get(sid.index()).is_none() {
                    return Err(BuildError::PointReferencesMissingSegment { point: point.id, segment: sid });
                }
            }
        }

        log::debug!("built map: {} points, {} segments", points.len(), segments.len());
        Ok(Map { points, segments })
    }
}

impl fmt::Debug for MapBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapBuilder")
            .field("points", &self.points.len())
            .field("segments", &self.segments.len())
            .finish()
    }
}
