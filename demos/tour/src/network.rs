//! Shared downtown-grid network definition.
//!
//! A 5-point synthetic network: two two-way roads sharing an intersection
//! and one one-way road leading off it, small enough to read at a glance
//! while still exercising every query kind `tour` demonstrates.

use streetmap_core::{GeoPoint, PointId, SegmentId};
use streetmap_graph::{Directionality, Map, MapBuilder};

/// Build the 5-point, 3-segment demo network.
///
/// Returns `(map, [riverside, city_hall, courthouse, archive, parkside])`.
pub fn build_network() -> anyhow::Result<(Map, [PointId; 5])> {
    let riverside  = PointId(0);
    let city_hall  = PointId(1);
    let courthouse = PointId(2);
    let archive    = PointId(3);
    let parkside   = PointId(4);

    let main       = SegmentId(0);
    let main_st    = SegmentId(1);
    let oak        = SegmentId(2);

    let mut b = MapBuilder::new(5, 3);

    b.add_segment(main, "Main", 50.0, Directionality::TwoWay, vec![riverside, city_hall, courthouse])?;
    b.add_segment(main_st, "Main St", 60.0, Directionality::OneWay, vec![courthouse, archive])?;
    b.add_segment(oak, "Oak", 40.0, Directionality::TwoWay, vec![city_hall, parkside])?;

    b.add_point(riverside, GeoPoint::new(43.6426, -79.3871), vec![main])?;
    b.add_point(city_hall, GeoPoint::new(43.6534, -79.3839), vec![main, oak])?;
    b.add_point(courthouse, GeoPoint::new(43.6510, -79.3817), vec![main, main_st])?;
    b.add_point(archive, GeoPoint::new(43.6550, -79.3800), vec![main_st])?;
    b.add_point(parkside, GeoPoint::new(43.6600, -79.3900), vec![oak])?;

    let map = b.build()?;
    Ok((map, [riverside, city_hall, courthouse, archive, parkside]))
}
