use crate::geo::GeoPoint;
use crate::ids::{PointId, SegmentId};

#[test]
fn distance_identity_is_zero() {
    let p = GeoPoint::new(43.6532, -79.3832);
    assert_eq!(p.distance_km(p), 0.0);
}

#[test]
fn distance_is_symmetric() {
    let a = GeoPoint::new(43.6532, -79.3832);
    let b = GeoPoint::new(43.6629, -79.3957);
    assert_eq!(a.distance_km(b), b.distance_km(a));
}

#[test]
fn distance_known_value() {
    // Toronto (CN Tower) to Casa Loma, roughly 5.0 km apart.
    let cn_tower = GeoPoint::new(43.6426, -79.3871);
    let casa_loma = GeoPoint::new(43.6780, -79.4094);
    let km = cn_tower.distance_km(casa_loma);
    assert!((3.5..5.0).contains(&km), "unexpected distance: {km}");
}

#[test]
fn point_id_display_is_bare_integer() {
    let id = PointId(7);
    assert_eq!(id.to_string(), "7");
}

#[test]
fn segment_id_index_round_trips() {
    let id = SegmentId(12);
    assert_eq!(id.index(), 12);
    assert_eq!(SegmentId::try_from(12usize).unwrap(), id);
}
