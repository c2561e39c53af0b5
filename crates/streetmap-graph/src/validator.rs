//! Path validation and travel-time computation.
//!
//! A candidate path is a sequence of point identifiers. Validating it means
//! running five checks, each one short-circuiting on the other: existence of
//! every point, no point repeated, consecutive points sharing some segment,
//! consecutive points sharing a segment *at adjacent positions*, and finally
//! that a one-way segment is traversed in its allowed direction. The checks
//! are ordered from cheapest/most-general to most-specific so that the first
//! one to fail is reported, matching the five-pass structure of the engine's
//! original validator.

use thiserror::Error;

use streetmap_core::PointId;

use crate::adjacency;
use crate::map::Map;

/// Why a candidate path failed validation.
///
/// Every message is period-terminated: these are surfaced directly as the
/// `error: ...` lines a path-validating query prints, as opposed to the
/// unterminated messages `MapQuery::print_point`/`print_segment` produce when
/// merely describing an entity (§7 of the engine spec).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    #[error("error: node {0} does not exist.")]
    NodeDoesNotExist(PointId),

    #[error("error: node {0} appeared more than once.")]
    NodeRepeated(PointId),

    #[error("error: there are no roads between node {0} and node {1}.")]
    NoSharedSegment(PointId, PointId),

    #[error("error: cannot go directly from node {0} to node {1}.")]
    NotAdjacent(PointId, PointId),

    #[error("error: cannot go in reverse from node {0} to node {1}.")]
    WrongDirection(PointId, PointId),
}

/// Validates candidate paths against a [`Map`] and computes their travel
/// time.
pub struct PathValidator<'a> {
    map: &'a Map,
}

impl<'a> PathValidator<'a> {
    pub fn new(map: &'a Map) -> Self {
        Self { map }
    }

    /// Run all five passes over `path`, in order, stopping at the first
    /// failure.
    pub fn validate(&self, path: &[PointId]) -> Result<(), ValidationError> {
        // Pass 1: every node exists.
        for &p in path {
            if self.map.point(p).is_none() {
                return Err(ValidationError::NodeDoesNotExist(p));
            }
        }

        // Pass 2: no node repeats.
        for i in 0..path.len() {
            for j in (i + 1)..path.len() {
                if path[i] == path[j] {
                    return Err(ValidationError::NodeRepeated(path[i]));
                }
            }
        }

        // Pass 3: consecutive nodes share some segment.
        for w in path.windows(2) {
            let (u, v) = (w[0], w[1]);
            if adjacency::shared_segments(self.map, u, v).next().is_none() {
                return Err(ValidationError::NoSharedSegment(u, v));
            }
        }

        // Pass 4: consecutive nodes are adjacent on that segment, direction ignored.
        for w in path.windows(2) {
            let (u, v) = (w[0], w[1]);
            if adjacency::consecutive_ignoring_direction(self.map, u, v).next().is_none() {
                return Err(ValidationError::NotAdjacent(u, v));
            }
        }

        // Pass 5: the step is legal in the direction actually taken.
        for w in path.windows(2) {
            let (u, v) = (w[0], w[1]);
            if !adjacency::any_connection(self.map, u, v) {
                return Err(ValidationError::WrongDirection(u, v));
            }
        }

        Ok(())
    }

    /// Validate `path`, then sum travel time in minutes across its segments.
    ///
    /// A one- or zero-element path has zero travel time, though its single
    /// node's existence check (pass 1) still runs. Each step's time is
    /// `distance_km(u, v) / segment.max_speed_kmh * 60`; when more than one
    /// segment witnesses the step (parallel roads sharing both endpoints),
    /// the first one found while scanning `u`'s segment list is used, so the
    /// result is deterministic rather than optimized — unlike the router,
    /// which picks the fastest witness.
    pub fn travel_time(&self, path: &[PointId]) -> Result<f64, ValidationError> {
        self.validate(path)?;

        let mut minutes = 0.0;
        for w in path.windows(2) {
            let (u, v) = (w[0], w[1]);
            let u_point = self.map.point(u).expect("validated above");
            let v_point = self.map.point(v).expect("validated above");
            let distance = u_point.pos.distance_km(v_point.pos);

            let (sid, _direction) =
                adjacency::connects(self.map, u, v).next().expect("validated above: step exists");
            let segment = self.map.segment(sid).expect("connects yields an existing segment");

            minutes += distance / segment.max_speed_kmh * 60.0;
        }

        log::trace!("travel_time for {}-node path: {minutes:.4} min", path.len());
        Ok(minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::helpers::sample_map;

    #[test]
    fn valid_path_passes_all_five_passes() {
        let map = sample_map();
        let v = PathValidator::new(&map);
        assert!(v.validate(&[PointId(0), PointId(1), PointId(2)]).is_ok());
    }

    #[test]
    fn missing_node_fails_pass_one() {
        let map = sample_map();
        let v = PathValidator::new(&map);
        assert_eq!(v.validate(&[PointId(0), PointId(99)]), Err(ValidationError::NodeDoesNotExist(PointId(99))));
    }

    #[test]
    fn repeated_node_fails_pass_two() {
        let map = sample_map();
        let v = PathValidator::new(&map);
        assert_eq!(
            v.validate(&[PointId(0), PointId(1), PointId(0)]),
            Err(ValidationError::NodeRepeated(PointId(0)))
        );
    }

    #[test]
    fn unconnected_nodes_fail_pass_three() {
        let map = sample_map();
        let v = PathValidator::new(&map);
        // 3 and 4 share no segment at all in the sample map.
        assert_eq!(
            v.validate(&[PointId(3), PointId(4)]),
            Err(ValidationError::NoSharedSegment(PointId(3), PointId(4)))
        );
    }

    #[test]
    fn wrong_direction_on_one_way_fails_pass_five() {
        let map = sample_map();
        let v = PathValidator::new(&map);
        // segment 1 ("Main St") is one-way from point 2 to point 3.
        assert_eq!(
            v.validate(&[PointId(3), PointId(2)]),
            Err(ValidationError::WrongDirection(PointId(3), PointId(2)))
        );
    }

    #[test]
    fn travel_time_of_single_node_is_zero() {
        let map = sample_map();
        let v = PathValidator::new(&map);
        assert_eq!(v.travel_time(&[PointId(0)]).unwrap(), 0.0);
    }

    #[test]
    fn travel_time_is_positive_for_a_real_path() {
        let map = sample_map();
        let v = PathValidator::new(&map);
        let t = v.travel_time(&[PointId(0), PointId(1), PointId(2)]).unwrap();
        assert!(t > 0.0);
    }

    #[test]
    fn co_members_that_are_not_adjacent_fail_pass_four() {
        let map = sample_map();
        let v = PathValidator::new(&map);
        // 0 and 2 both belong to segment 0 ("Main") but are not at adjacent
        // positions in it (1 sits between them).
        assert_eq!(
            v.validate(&[PointId(0), PointId(2)]),
            Err(ValidationError::NotAdjacent(PointId(0), PointId(2)))
        );
    }

    #[test]
    fn reverse_of_one_way_path_fails_at_last_leg() {
        let map = sample_map();
        let v = PathValidator::new(&map);
        assert_eq!(
            v.validate(&[PointId(3), PointId(2), PointId(1), PointId(0)]),
            Err(ValidationError::WrongDirection(PointId(3), PointId(2)))
        );
    }

    #[test]
    fn full_path_travel_time_matches_summed_legs() {
        let map = sample_map();
        let v = PathValidator::new(&map);
        let path = [PointId(0), PointId(1), PointId(2), PointId(3)];
        let got = v.travel_time(&path).unwrap();

        let p0 = map.point(PointId(0)).unwrap().pos;
        let p1 = map.point(PointId(1)).unwrap().pos;
        let p2 = map.point(PointId(2)).unwrap().pos;
        let p3 = map.point(PointId(3)).unwrap().pos;
        let expected = p0.distance_km(p1) / 50.0 * 60.0
            + p1.distance_km(p2) / 50.0 * 60.0
            + p2.distance_km(p3) / 60.0 * 60.0;

        assert!((got - expected).abs() < 1e-9);
    }
}
