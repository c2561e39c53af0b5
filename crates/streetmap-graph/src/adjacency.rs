//! The `step` relation — the single shared definition of "can one move
//! directly from point *u* to point *v*, along which segment, in which
//! direction" that both [`crate::validator::PathValidator`] and
//! [`crate::router::ShortestTimeRouter`] are built on.
//!
//! Diverging implementations of this relation between the validator and the
//! router are the most likely source of bugs in this engine — a router that
//! computes adjacency one way and a validator that checks it another way
//! will eventually disagree on a path the router itself produced. Every
//! other function in this module is built on top of [`out_steps`], so there
//! is exactly one place the "can I step from *u* in this direction" logic is
//! written.

use streetmap_core::{PointId, SegmentId};

use crate::map::Map;

/// Which way along a segment's stored point order a step was taken.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    /// From a lower index to the next higher index.
    Forward,
    /// From a higher index to the next lower index (only possible on a
    /// two-way segment).
    Backward,
}

/// Every legal forward step out of `from`, across all of its incident
/// segments.
///
/// For each segment containing `from`, this yields its neighbor at index+1
/// (always legal, since the segment's point order always permits travel
/// from a lower index to the next higher one) and, if the segment is
/// two-way, its neighbor at index-1 as well. This one function encodes the
/// entire `step` relation; `connects`/`any_connection` below are thin
/// filters over it, and the router's Dijkstra relaxation calls it directly.
pub fn out_steps<'a>(map: &'a Map, from: PointId) -> impl Iterator<Item = (PointId, SegmentId, Direction)> + 'a {
    let incident = map.point(from).map(|p| p.segment_ids.as_slice()).unwrap_or(&[]);

    incident.iter().flat_map(move |&sid| {
        let seg = map.segment(sid).expect("point's segment-set references an existing segment");
        let idx = seg.position_of(from);

        let mut steps: Vec<(PointId, SegmentId, Direction)> = Vec::with_capacity(2);
        if let Some(i) = idx {
            if i + 1 < seg.point_ids.len() {
                steps.push((seg.point_ids[i + 1], sid, Direction::Forward));
            }
            if i > 0 && !seg.is_one_way() {
                steps.push((seg.point_ids[i - 1], sid, Direction::Backward));
            }
        }
        steps
    })
}

/// Every segment (with the direction used) for which `step(u, v, s)` holds.
///
/// This is validator pass 5 and the router's per-edge legality check: `u`
/// and `v` must occupy consecutive positions in `s`, and if `s` is one-way
/// the positions must appear in the order `u` then `v`.
pub fn connects<'a>(map: &'a Map, u: PointId, v: PointId) -> impl Iterator<Item = (SegmentId, Direction)> + 'a {
    out_steps(map, u).filter_map(move |(w, sid, dir)| (w == v).then_some((sid, dir)))
}

/// `true` iff `connects(u, v)` is non-empty.
pub fn any_connection(map: &Map, u: PointId, v: PointId) -> bool {
    connects(map, u, v).next().is_some()
}

/// Segments that list `u` and `v` at adjacent positions, in *either* order,
/// ignoring directionality entirely.
///
/// This is validator pass 4: "direct adjacency" without the one-way check
/// that pass 5 adds on top.
pub fn consecutive_ignoring_direction<'a>(
    map: &'a Map,
    u: PointId,
    v: PointId,
) -> impl Iterator<Item = SegmentId> + 'a {
    shared_segments(map, u, v).filter(move |&sid| {
        let seg = map.segment(sid).expect("shared_segments only yields existing segments");
        match (seg.position_of(u), seg.position_of(v)) {
            (Some(i), Some(j)) => i.abs_diff(j) == 1,
            _ => false,
        }
    })
}

/// Segments that contain both `u` and `v`, with no position requirement at
/// all.
///
/// This is validator pass 3: "some road connects them" before pass 4 checks
/// whether that road actually places them next to each other.
pub fn shared_segments<'a>(map: &'a Map, u: PointId, v: PointId) -> impl Iterator<Item = SegmentId> + 'a {
    let u_segments = map.point(u).map(|p| p.segment_ids.as_slice()).unwrap_or(&[]);
    let v_segments: Vec<SegmentId> = map.point(v).map(|p| p.segment_ids.clone()).unwrap_or_default();

    u_segments.iter().copied().filter(move |sid| v_segments.contains(sid))
}
