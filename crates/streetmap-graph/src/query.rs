//! `MapQuery` — the façade a caller actually talks to: find by name, find an
//! intersection by two street names, describe a point or segment, validate a
//! path's travel time, and compute a shortest route.

use streetmap_core::{PointId, SegmentId};

use crate::map::Map;
use crate::router::{Route, RouteError, Router, ShortestTimeRouter};
use crate::validator::{PathValidator, ValidationError};

/// Read-only query operations over a built [`Map`].
///
/// Holds a reference to the map and a [`Router`] implementation to dispatch
/// routing to; the default constructor uses [`ShortestTimeRouter`], but
/// [`MapQuery::with_router`] accepts any other strategy.
pub struct MapQuery<'a, R: Router = ShortestTimeRouter> {
    map: &'a Map,
    router: R,
}

impl<'a> MapQuery<'a, ShortestTimeRouter> {
    pub fn new(map: &'a Map) -> Self {
        Self { map, router: ShortestTimeRouter }
    }
}

impl<'a, R: Router> MapQuery<'a, R> {
    pub fn with_router(map: &'a Map, router: R) -> Self {
        Self { map, router }
    }

    /// Describe a point, or a `does not exist` line if it is not a valid id.
    ///
    /// Unlike the validation/routing errors, this never fails: an invalid
    /// id simply produces a descriptive line with no trailing period,
    /// matching how the engine prints rather than validates (§7).
    pub fn print_point(&self, id: PointId) -> String {
        match self.map.point(id) {
            Some(p) => format!("Node {id}: {}", p.pos),
            None => format!("error: node {id} does not exist"),
        }
    }

    /// Describe a segment, or a `does not exist` line if it is not a valid
    /// id.
    pub fn print_segment(&self, id: SegmentId) -> String {
        match self.map.segment(id) {
            Some(seg) => format!("Way {id}: {}", seg.name),
            None => format!("error: way {id} does not exist"),
        }
    }

    /// Every segment id whose name contains `needle` as a substring.
    ///
    /// Matching is plain, case-sensitive substring containment — no
    /// tokenizing or case folding.
    pub fn find_segments_by_name(&self, needle: &str) -> Vec<SegmentId> {
        self.map.segments().filter(|s| s.name.contains(needle)).map(|s| s.id).collect()
    }

    /// Every point incident to a segment whose name contains `first` and,
    /// when `second` is given, also incident to a *distinct* segment whose
    /// name contains `second`.
    ///
    /// With `second: None` this is the single-name form: every point
    /// touching any matching segment. With `second: Some(_)`, a single
    /// segment whose name happens to contain both substrings does not
    /// satisfy the query — the two witnessing segments must be different
    /// objects. Results are ordered by point id with no duplicates.
    pub fn find_points_by_two_names(&self, first: &str, second: Option<&str>) -> Vec<PointId> {
        let firsts = self.find_segments_by_name(first);

        let Some(second) = second else {
            return self
                .map
                .points()
                .filter(|p| p.segment_ids.iter().any(|sid| firsts.contains(sid)))
                .map(|p| p.id)
                .collect();
        };

        let seconds = self.find_segments_by_name(second);

        self.map
            .points()
            .filter(|p| {
                p.segment_ids
                    .iter()
                    .any(|&a| firsts.contains(&a) && p.segment_ids.iter().any(|&b| b != a && seconds.contains(&b)))
            })
            .map(|p| p.id)
            .collect()
    }

    /// Validate `path` and sum its travel time in minutes.
    pub fn travel_time(&self, path: &[PointId]) -> Result<f64, ValidationError> {
        PathValidator::new(self.map).travel_time(path)
    }

    /// Find the minimum-travel-time route between `start` and `end`.
    pub fn shortest_path(&self, start: PointId, end: PointId) -> Result<Option<Route>, RouteError> {
        self.router.route(self.map, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::helpers::sample_map;

    #[test]
    fn print_point_formats_existing_point() {
        let map = sample_map();
        let q = MapQuery::new(&map);
        assert!(q.print_point(PointId(0)).starts_with("Node 0: "));
    }

    #[test]
    fn print_point_reports_missing_without_period() {
        let map = sample_map();
        let q = MapQuery::new(&map);
        assert_eq!(q.print_point(PointId(99)), "error: node 99 does not exist");
    }

    #[test]
    fn print_segment_formats_existing_segment() {
        let map = sample_map();
        let q = MapQuery::new(&map);
        assert_eq!(q.print_segment(SegmentId(0)), "Way 0: Main");
    }

    #[test]
    fn print_segment_reports_missing_without_period() {
        let map = sample_map();
        let q = MapQuery::new(&map);
        assert_eq!(q.print_segment(SegmentId(99)), "error: way 99 does not exist");
    }

    #[test]
    fn find_segments_by_name_matches_by_substring() {
        let map = sample_map();
        let q = MapQuery::new(&map);
        // Both "Main" and "Main St" contain the substring "Main".
        assert_eq!(q.find_segments_by_name("Main"), vec![SegmentId(0), SegmentId(1)]);
        assert_eq!(q.find_segments_by_name("Oak"), vec![SegmentId(2)]);
        assert_eq!(q.find_segments_by_name("Nonexistent"), Vec::<SegmentId>::new());
    }

    #[test]
    fn find_points_by_two_names_finds_shared_endpoint() {
        let map = sample_map();
        let q = MapQuery::new(&map);
        // "Main" (0,1,2) and "Oak" (1,4) share point 1.
        assert_eq!(q.find_points_by_two_names("Main", Some("Oak")), vec![PointId(1)]);
    }

    #[test]
    fn find_points_by_two_names_rejects_self_intersection() {
        let map = sample_map();
        let q = MapQuery::new(&map);
        assert_eq!(q.find_points_by_two_names("Main", Some("Main")), Vec::<PointId>::new());
    }

    #[test]
    fn find_points_by_two_names_with_no_second_name_returns_every_touching_point() {
        let map = sample_map();
        let q = MapQuery::new(&map);
        // Points 0, 1, 2 touch "Main"; point 2 also touches "Main St", both matched by "Main".
        assert_eq!(q.find_points_by_two_names("Main", None), vec![PointId(0), PointId(1), PointId(2), PointId(3)]);
    }

    #[test]
    fn find_points_by_two_names_collects_every_qualifying_point() {
        use crate::map::{Directionality, MapBuilder};
        use streetmap_core::GeoPoint;

        // Main=[0,1,2,3], plus two distinct "Oak" segments touching 1 and 2
        // respectively: both points qualify, not just the first found.
        let mut b = MapBuilder::new(5, 3);
        b.add_segment(SegmentId(0), "Main", 50.0, Directionality::TwoWay, vec![
            PointId(0),
            PointId(1),
            PointId(2),
            PointId(3),
        ])
        .unwrap();
        b.add_segment(SegmentId(1), "Oak North", 40.0, Directionality::TwoWay, vec![PointId(1), PointId(4)])
            .unwrap();
        b.add_segment(SegmentId(2), "Oak South", 40.0, Directionality::TwoWay, vec![PointId(2), PointId(4)])
            .unwrap();

        b.add_point(PointId(0), GeoPoint::new(43.000, -79.000), vec![SegmentId(0)]).unwrap();
        b.add_point(PointId(1), GeoPoint::new(43.001, -79.001), vec![SegmentId(0), SegmentId(1)]).unwrap();
        b.add_point(PointId(2), GeoPoint::new(43.002, -79.002), vec![SegmentId(0), SegmentId(2)]).unwrap();
        b.add_point(PointId(3), GeoPoint::new(43.003, -79.003), vec![SegmentId(0)]).unwrap();
        b.add_point(PointId(4), GeoPoint::new(43.004, -79.004), vec![SegmentId(1), SegmentId(2)]).unwrap();

        let map = b.build().unwrap();
        let q = MapQuery::new(&map);
        assert_eq!(q.find_points_by_two_names("Main", Some("Oak")), vec![PointId(1), PointId(2)]);
    }

    #[test]
    fn shortest_path_delegates_to_router() {
        let map = sample_map();
        let q = MapQuery::new(&map);
        let route = q.shortest_path(PointId(0), PointId(4)).unwrap().unwrap();
        assert_eq!(route.points.first(), Some(&PointId(0)));
    }
}
