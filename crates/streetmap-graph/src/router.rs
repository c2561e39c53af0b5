//! Shortest-time routing.
//!
//! Routing is deliberately behind a trait: [`ShortestTimeRouter`] is the only
//! implementation shipped, but nothing in [`crate::query::MapQuery`] depends
//! on Dijkstra specifically, so an alternate routing strategy (a bidirectional
//! search, a contraction-hierarchy lookup) can be dropped in later without
//! touching call sites.

use thiserror::Error;

use streetmap_core::PointId;

use crate::adjacency;
use crate::map::Map;
use crate::pqueue::PriorityQueue;

/// Why a route could not be computed.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RouteError {
    #[error("error: node {0} does not exist.")]
    NodeDoesNotExist(PointId),
}

/// A path together with the minimized cost (in minutes) that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub points: Vec<PointId>,
    pub minutes: f64,
}

/// A pluggable path-finding strategy over a [`Map`].
pub trait Router {
    /// Find the minimum-cost path from `start` to `end`, or `None` if no
    /// path exists. `start == end` yields `Some` with a single-point path
    /// and zero cost.
    fn route(&self, map: &Map, start: PointId, end: PointId) -> Result<Option<Route>, RouteError>;
}

/// Dijkstra's algorithm over travel time, using [`adjacency::out_steps`] as
/// its sole source of edges so the paths it returns are always legal
/// according to the same rules [`crate::validator::PathValidator`] checks.
#[derive(Default)]
pub struct ShortestTimeRouter;

impl Router for ShortestTimeRouter {
    fn route(&self, map: &Map, start: PointId, end: PointId) -> Result<Option<Route>, RouteError> {
        if map.point(start).is_none() {
            return Err(RouteError::NodeDoesNotExist(start));
        }
        if map.point(end).is_none() {
            return Err(RouteError::NodeDoesNotExist(end));
        }

        if start == end {
            return Ok(Some(Route { points: vec![start], minutes: 0.0 }));
        }

        let n = map.point_count();
        let mut cost = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<PointId>> = vec![None; n];
        let mut settled = vec![false; n];

        let mut queue = PriorityQueue::with_capacity(n);
        cost[start.index()] = 0.0;
        queue.push(start, 0.0);

        while let Some((u, u_cost)) = queue.pop_min() {
            if settled[u.index()] {
                continue;
            }
            settled[u.index()] = true;
            log::trace!("settled {u} at cost {u_cost:.4} min");

            if u == end {
                break;
            }

            for (v, segment_id, _direction) in adjacency::out_steps(map, u) {
                if settled[v.index()] {
                    continue;
                }
                let segment = map.segment(segment_id).expect("out_steps yields an existing segment");
                let u_point = map.point(u).expect("out_steps yields an existing point");
                let v_point = map.point(v).expect("out_steps yields an existing point");
                let step_minutes = u_point.pos.distance_km(v_point.pos) / segment.max_speed_kmh * 60.0;

                let candidate = u_cost + step_minutes;
                if candidate < cost[v.index()] {
                    cost[v.index()] = candidate;
                    prev[v.index()] = Some(u);
                    if queue.contains(v) {
                        queue.decrease(v, candidate);
                    } else {
                        queue.push(v, candidate);
                    }
                }
            }
        }

        if !settled[end.index()] {
            return Ok(None);
        }

        let mut points = vec![end];
        let mut cur = end;
        while let Some(p) = prev[cur.index()] {
            points.push(p);
            cur = p;
        }
        points.reverse();

        let minutes = cost[end.index()];
        log::info!("route {start} -> {end}: {} node(s), {minutes:.4} min", points.len());
        Ok(Some(Route { points, minutes }))
    }
}
