use crate::common::{assert_same_polygon, geom, line, polygon};
use cleave2d::math::{Point, Real};
use cleave2d::query::{self, check_parts, split_parts, SplitTolerances};
use cleave2d::shape::Geometry;
use cleave2d::utils::RingPointLocation;

#[test]
fn rectangle_split_by_vertical_line() {
    let target = geom("POLYGON((20 20,40 20,40 40,20 40,20 20))");
    let splitter = line("LINESTRING(30 0,30 60)");
    let parts = query::split(&target, &splitter).unwrap();

    assert_eq!(parts.len(), 2);
    assert_same_polygon(&parts[0], "POLYGON((30 20,20 20,20 40,30 40,30 20))");
    assert_same_polygon(&parts[1], "POLYGON((30 40,40 40,40 20,30 20,30 40))");
    assert!(check_parts(&target, &parts, &SplitTolerances::default()).is_ok());
}

#[test]
fn parts_keep_the_source_winding() {
    let ccw = geom("POLYGON((20 20,40 20,40 40,20 40,20 20))");
    let cw = geom("POLYGON((20 20,20 40,40 40,40 20,20 20))");
    let splitter = line("LINESTRING(30 0,30 60)");

    for part in query::split(&ccw, &splitter).unwrap().iter() {
        assert!(polygon(part).exterior().is_ccw());
    }
    for part in query::split(&cw, &splitter).unwrap().iter() {
        assert!(!polygon(part).exterior().is_ccw());
    }
}

#[test]
fn hole_bisected_by_the_splitter() {
    let target = geom("POLYGON((10 10,40 10,40 40,10 40,10 10),(15 15,15 30,30 30,30 15,15 15))");
    let splitter = line("LINESTRING(20 0,20 22,20 60)");
    let parts = split_parts(&target, &splitter, &SplitTolerances::default()).unwrap();

    assert_eq!(parts.len(), 2);
    assert_same_polygon(
        &parts[0].geometry,
        "POLYGON((20 10,10 10,10 40,20 40,20 30,15 30,15 15,20 15,20 10))",
    );
    assert_same_polygon(
        &parts[1].geometry,
        "POLYGON((20 40,40 40,40 10,20 10,20 15,30 15,30 30,20 30,20 40))",
    );

    for part in &parts {
        assert!(polygon(&part.geometry).interiors().is_empty());
        assert_eq!(part.merged_holes, [0]);
        assert!(part.retained_holes.is_empty());
    }
}

#[test]
fn hole_next_to_the_splitter_is_kept() {
    let target = geom("POLYGON((0 0,10 0,10 10,0 10,0 0),(6 6,8 6,8 8,6 8,6 6),(1 1,2 1,2 2,1 2,1 1))");
    let splitter = line("LINESTRING(5 -1,5 11)");
    let parts = split_parts(&target, &splitter, &SplitTolerances::default()).unwrap();

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].retained_holes, [1]);
    assert_eq!(parts[1].retained_holes, [0]);
    assert_same_polygon(
        &parts[1].geometry,
        "POLYGON((5 0,10 0,10 10,5 10,5 0),(6 6,8 6,8 8,6 8,6 6))",
    );
    assert_relative_eq!(parts[0].geometry.area(), 49.0);
    assert_relative_eq!(parts[1].geometry.area(), 46.0);
}

#[test]
fn hole_grazed_at_a_vertex_is_kept() {
    let target = geom("POLYGON((0 0,10 0,10 10,0 10,0 0),(5 3,7 5,5 7,3 5,5 3))");
    let splitter = line("LINESTRING(-1 3,11 3)");
    let parts = split_parts(&target, &splitter, &SplitTolerances::default()).unwrap();

    assert_eq!(parts.len(), 2);
    assert!(parts[0].retained_holes.is_empty());
    assert_eq!(parts[1].retained_holes, [0]);
    assert!(parts.iter().all(|p| p.merged_holes.is_empty()));
    assert_same_polygon(&parts[0].geometry, "POLYGON((0 0,10 0,10 3,5 3,0 3,0 0))");
    assert_same_polygon(
        &parts[1].geometry,
        "POLYGON((0 3,5 3,10 3,10 10,0 10,0 3),(5 3,7 5,5 7,3 5,5 3))",
    );
    assert_relative_eq!(parts[0].geometry.area(), 30.0);
    assert_relative_eq!(parts[1].geometry.area(), 62.0);

    let geometries: Vec<Geometry> = parts.into_iter().map(|p| p.geometry).collect();
    check_parts(&target, &geometries, &SplitTolerances::default()).unwrap();
}

#[test]
fn chord_between_two_boundary_points() {
    let target = geom("POLYGON((0 0,4 0,4 4,0 4,0 0))");
    let parts = query::split(&target, &line("LINESTRING(2 0,2 4)")).unwrap();

    assert_eq!(parts.len(), 2);
    assert_same_polygon(&parts[0], "POLYGON((0 0,2 0,2 4,0 4,0 0))");
    assert_same_polygon(&parts[1], "POLYGON((2 0,4 0,4 4,2 4,2 0))");

    // Ending on a vertex divides just as well.
    let parts = query::split(&target, &line("LINESTRING(2 0,4 4)")).unwrap();
    assert_eq!(parts.len(), 2);
    assert_relative_eq!(parts[0].area(), 12.0);
    assert_relative_eq!(parts[1].area(), 4.0);
}

#[test]
fn splitter_loops_carve_a_part_only_when_connected() {
    let target = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");

    let floating = line("LINESTRING(5 6,5 8,7 8,7 6,5 6)");
    let parts = query::split(&target, &floating).unwrap();
    assert_eq!(parts.into_inner(), [target.clone()]);

    // The tail crossing the boundary is dropped, but the loop it leads to is cut out.
    let with_tail = line("LINESTRING(5 -1,5 8,7 8,7 6,3 6)");
    let parts = query::split(&target, &with_tail).unwrap();
    assert_eq!(parts.len(), 2);
    assert_same_polygon(
        &parts[0],
        "POLYGON((0 0,10 0,10 10,0 10,0 0),(5 6,7 6,7 8,5 8,5 6))",
    );
    assert_same_polygon(&parts[1], "POLYGON((5 6,7 6,7 8,5 8,5 6))");
    check_parts(&target, &parts, &SplitTolerances::default()).unwrap();
}

#[test]
fn concave_polygon_crossed_four_times() {
    let target = geom("POLYGON((0 0,30 0,30 30,20 30,20 10,10 10,10 30,0 30,0 0))");
    let splitter = line("LINESTRING(-5 20,35 20)");
    let parts = query::split(&target, &splitter).unwrap();

    // The two prongs pair their crossings: four crossings give three parts.
    assert_eq!(parts.len(), 3);
    let areas: Vec<Real> = parts.iter().map(|p| p.area()).collect();
    assert_relative_eq!(areas[0], 500.0);
    assert_relative_eq!(areas[1], 100.0);
    assert_relative_eq!(areas[2], 100.0);
    assert_eq!(
        polygon(&parts[1]).locate_point(&Point::new(25.0, 25.0), 1.0e-9),
        RingPointLocation::Inside
    );
    assert!(check_parts(&target, &parts, &SplitTolerances::default()).is_ok());
}

#[test]
fn splitting_a_part_again_is_identity() {
    let target = geom("POLYGON((20 20,40 20,40 40,20 40,20 20))");
    let splitter = line("LINESTRING(30 0,30 60)");

    for part in query::split(&target, &splitter).unwrap().iter() {
        let again = query::split(part, &splitter).unwrap();
        assert_eq!(again.len(), 1);
        assert_eq!(&again[0], part);
    }
}

#[test]
fn touching_or_partial_splitters_are_identity() {
    let target = geom("POLYGON((0 0,4 0,4 4,0 4,0 0))");
    let splitters = [
        // Touches a corner.
        "LINESTRING(-1 1,1 -1)",
        // Grazes a whole edge from the outside.
        "LINESTRING(6 -1,4 0,4 4,6 5)",
        // Enters the polygon and stops inside.
        "LINESTRING(2 -1,2 2)",
        // Starts on an edge and stops inside.
        "LINESTRING(2 0,2 2)",
        // Runs along an edge between two corners.
        "LINESTRING(0 0,4 0)",
        // Stays outside.
        "LINESTRING(10 10,20 20)",
    ];

    for wkt in splitters {
        let parts = query::split(&target, &line(wkt)).unwrap();
        assert_eq!(parts.into_inner(), [target.clone()], "splitter {}", wkt);
    }
}

#[test]
fn splitter_through_opposite_corners() {
    let target = geom("POLYGON((0 0,4 0,4 4,0 4,0 0))");
    let parts = query::split(&target, &line("LINESTRING(-1 -1,5 5)")).unwrap();
    assert_eq!(parts.len(), 2);
    assert_same_polygon(&parts[0], "POLYGON((0 0,4 0,4 4,0 0))");
    assert_same_polygon(&parts[1], "POLYGON((0 0,4 4,0 4,0 0))");
}

#[test]
fn zigzag_splitter_cuts_many_parts() {
    let target = geom("POLYGON((0 0,10 0,10 10,0 10,0 0))");
    let splitter = line("LINESTRING(2 -1,2 11,4 11,4 -1,6 -1,6 11)");
    let parts = query::split(&target, &splitter).unwrap();

    assert_eq!(parts.len(), 4);
    let areas: Vec<Real> = parts.iter().map(|p| p.area()).collect();
    assert_relative_eq!(areas.iter().sum::<Real>(), 100.0, epsilon = 1.0e-9);
    assert!(areas.iter().all(|a| *a > 0.0));
}

#[test]
fn multi_polygon_parts_are_ordered_by_component() {
    let target = geom("MULTIPOLYGON(((0 0,4 0,4 4,0 4,0 0)),((0 10,4 10,4 14,0 14,0 10)),((10 0,14 0,14 4,10 4,10 0)))");
    let splitter = line("LINESTRING(2 -1,2 20)");
    let parts = split_parts(&target, &splitter, &SplitTolerances::default()).unwrap();

    assert_eq!(
        parts.iter().map(|p| p.component).collect::<Vec<_>>(),
        [0, 0, 1, 1, 2]
    );
    assert_eq!(
        parts[4].geometry,
        Geometry::Polygon(target_component(&target, 2))
    );
    assert!(parts[..4]
        .iter()
        .all(|p| relative_eq!(p.geometry.area(), 8.0)));
}

fn target_component(target: &Geometry, i: usize) -> cleave2d::shape::Polygon {
    match target {
        Geometry::MultiPolygon(mp) => mp[i].clone(),
        _ => unreachable!(),
    }
}

#[test]
fn fixed_precision_snaps_intersections() {
    let target = geom("POLYGON((0 0,300 0,0 300,0 0))");
    let splitter = line("LINESTRING(10.1 -10,130.3 400)");
    let tolerances = SplitTolerances::fixed(1000.0);
    let parts = query::split_with_tolerances(&target, &splitter, &tolerances).unwrap();

    assert_eq!(parts.len(), 2);
    for part in parts.iter() {
        for pt in polygon(part).exterior().points() {
            for c in pt.iter() {
                assert_relative_eq!((c * 1000.0).round(), c * 1000.0, epsilon = 1.0e-6);
            }
        }
    }
    assert!(check_parts(&target, &parts, &tolerances).is_ok());
}
