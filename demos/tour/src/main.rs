//! tour — a walkthrough of every query kind the streetmap engine supports,
//! run against a small synthetic downtown grid.

mod network;

use anyhow::Result;

use streetmap_core::{PointId, SegmentId};
use streetmap_graph::MapQuery;

use network::build_network;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== tour — streetmap engine walkthrough ===");

    // 1. Build the network.
    let (map, [riverside, city_hall, courthouse, archive, parkside]) = build_network()?;
    println!("Map: {} nodes, {} ways", map.point_count(), map.segment_count());
    println!();

    let q = MapQuery::new(&map);

    // 2. Describe a few points and ways.
    println!("-- print --");
    for id in [riverside, city_hall, PointId(99)] {
        println!("{}", q.print_point(id));
    }
    println!("{}", q.print_segment(SegmentId(0)));
    println!("{}", q.print_segment(SegmentId(99)));
    println!();

    // 3. Find a way by name, and an intersection by two names.
    println!("-- find --");
    println!("\"Main\" ways: {:?}", q.find_segments_by_name("Main"));
    match q.find_points_by_two_names("Main", Some("Oak")).as_slice() {
        [] => println!("Main & Oak do not meet"),
        points => println!("Main & Oak meet at {points:?}"),
    }
    println!("points touching \"Main\": {:?}", q.find_points_by_two_names("Main", None));
    println!();

    // 4. Validate a path and report its travel time.
    println!("-- travel time --");
    let path = [riverside, city_hall, courthouse];
    match q.travel_time(&path) {
        Ok(minutes) => println!("path {path:?}: {minutes:.4} min"),
        Err(e) => println!("{e}"),
    }
    match q.travel_time(&[courthouse, city_hall]) {
        Ok(minutes) => println!("path [courthouse, city_hall]: {minutes:.4} min"),
        Err(e) => println!("{e}"),
    }
    println!();

    // 5. Shortest route across the whole grid, including a one-way leg.
    println!("-- shortest path --");
    match q.shortest_path(riverside, archive)? {
        Some(route) => println!("riverside -> archive: {:?}, {:.4} min", route.points, route.minutes),
        None => println!("riverside -> archive: no route"),
    }
    match q.shortest_path(archive, courthouse)? {
        Some(route) => println!("archive -> courthouse: {:?}, {:.4} min", route.points, route.minutes),
        None => println!("archive -> courthouse: no route (one-way leg blocks the reverse trip)"),
    }
    match q.shortest_path(riverside, parkside)? {
        Some(route) => println!("riverside -> parkside: {:?}, {:.4} min", route.points, route.minutes),
        None => println!("riverside -> parkside: no route"),
    }

    Ok(())
}
