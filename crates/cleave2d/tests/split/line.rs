use crate::common::{assert_points_eq, geom, line};
use cleave2d::math::{Point, Real};
use cleave2d::query::{self, split_parts, SplitByLine, SplitTolerances};
use cleave2d::shape::{Geometry, LineString};

fn pieces(parts: &[Geometry]) -> Vec<&LineString> {
    parts
        .iter()
        .map(|p| p.as_line_string().unwrap())
        .collect()
}

#[test]
fn line_crossed_n_times_yields_n_plus_one_pieces() {
    let target = geom("LINESTRING(0 0,2 2,4 0,6 2,8 0)");
    let splitter = line("LINESTRING(-1 1,9 1)");
    let parts = query::split(&target, &splitter).unwrap();
    let pieces = pieces(&parts);

    assert_eq!(pieces.len(), 5);
    assert_points_eq(pieces[0].points(), &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    assert_points_eq(
        pieces[4].points(),
        &[Point::new(7.0, 1.0), Point::new(8.0, 0.0)],
    );

    // Consecutive pieces share their cut point.
    for w in pieces.windows(2) {
        assert_eq!(w[0].points().last(), w[1].points().first());
    }

    let total: Real = pieces.iter().map(|p| p.length()).sum();
    assert_relative_eq!(total, target.length(), epsilon = 1.0e-9);
}

#[test]
fn piece_order_follows_the_line_not_the_splitter() {
    let target = line("LINESTRING(10 0,0 0)");
    let splitter = line("LINESTRING(2 -1,2 1,8 1,8 -1)");
    let pieces = target
        .split_by_line(&splitter, &SplitTolerances::default())
        .unwrap();

    assert_eq!(pieces.len(), 3);
    assert_points_eq(
        pieces[0].points(),
        &[Point::new(10.0, 0.0), Point::new(8.0, 0.0)],
    );
    assert_points_eq(
        pieces[2].points(),
        &[Point::new(2.0, 0.0), Point::new(0.0, 0.0)],
    );
}

#[test]
fn endpoints_and_touches_do_not_cut() {
    let target = geom("LINESTRING(0 0,5 5,10 0)");
    let splitters = [
        // Through the first vertex.
        "LINESTRING(-1 1,1 -1)",
        // Tangent at the apex.
        "LINESTRING(0 5,10 5)",
        // Ends on the line.
        "LINESTRING(2 10,3 3)",
    ];

    for wkt in splitters {
        let parts = query::split(&target, &line(wkt)).unwrap();
        assert_eq!(parts.into_inner(), [target.clone()], "splitter {}", wkt);
    }
}

#[test]
fn overlap_crossing_cuts_at_its_start() {
    let target = line("LINESTRING(0 0,10 0)");
    let splitter = line("LINESTRING(2 -1,3 0,6 0,7 1)");
    let pieces = target
        .split_by_line(&splitter, &SplitTolerances::default())
        .unwrap();

    assert_eq!(pieces.len(), 2);
    assert_points_eq(pieces[0].points(), &[Point::new(0.0, 0.0), Point::new(3.0, 0.0)]);
    assert_points_eq(pieces[1].points(), &[Point::new(3.0, 0.0), Point::new(10.0, 0.0)]);

    // Running along the line and coming back to the same side is not a crossing.
    let splitter = line("LINESTRING(2 -1,3 0,6 0,7 -1)");
    let pieces = target
        .split_by_line(&splitter, &SplitTolerances::default())
        .unwrap();
    assert_eq!(pieces, [target]);
}

#[test]
fn closed_splitter_crossing_twice() {
    let target = line("LINESTRING(0 0,10 0)");
    let splitter = line("LINESTRING(3 -2,7 -2,7 2,3 2,3 -2)");
    let pieces = target
        .split_by_line(&splitter, &SplitTolerances::default())
        .unwrap();

    assert_eq!(pieces.len(), 3);
    assert_points_eq(pieces[1].points(), &[Point::new(3.0, 0.0), Point::new(7.0, 0.0)]);
}

#[test]
fn multi_line_pieces_are_tagged_with_their_component() {
    let target = geom("MULTILINESTRING((0 0,10 0),(0 5,1 5),(0 10,10 10))");
    let splitter = line("LINESTRING(5 -1,5 11)");
    let parts = split_parts(&target, &splitter, &SplitTolerances::default()).unwrap();

    assert_eq!(
        parts.iter().map(|p| p.component).collect::<Vec<_>>(),
        [0, 0, 1, 2, 2]
    );
    assert_eq!(parts[2].geometry, geom("LINESTRING(0 5,1 5)"));
}
