use crate::common::{assert_points_eq, geom, line};
use cleave2d::math::{Point, Real};
use cleave2d::query::{trim, SplitError};
use cleave2d::shape::{Geometry, LineString};
use oorandom::Rand64;

fn as_line(geometry: &Geometry) -> &LineString {
    geometry.as_line_string().unwrap()
}

#[test]
fn trim_and_reversed_splitter_swap_halves() {
    let target = geom("LINESTRING(15.5 10,10 10)");
    let splitter = line("LINESTRING(12.5 0,12.5 20)");

    let (left, right) = trim(&target, &splitter).unwrap();
    assert_points_eq(
        as_line(&left).points(),
        &[Point::new(15.5, 10.0), Point::new(12.5, 10.0)],
    );
    assert_points_eq(
        as_line(&right).points(),
        &[Point::new(12.5, 10.0), Point::new(10.0, 10.0)],
    );

    let (rev_left, rev_right) = trim(&target, &splitter.reversed()).unwrap();
    assert_points_eq(as_line(&rev_left).points(), as_line(&right).points());
    assert_points_eq(as_line(&rev_right).points(), as_line(&left).points());
}

#[test]
fn touching_splitter_leaves_one_half_empty() {
    let target = geom("LINESTRING(1 1,2 1)");
    let splitter = line("LINESTRING(1 0,1 10)");
    let (left, right) = trim(&target, &splitter).unwrap();

    assert_eq!(left, target);
    assert_eq!(right, geom("LINESTRING EMPTY"));
}

#[test]
fn splitter_ending_on_the_line_leaves_it_whole() {
    let target = geom("LINESTRING(1 0,1 10)");
    let splitter = line("LINESTRING(1 1,2 1)");
    let (left, right) = trim(&target, &splitter).unwrap();

    assert_eq!(left, geom("LINESTRING EMPTY"));
    assert_eq!(right, target);

    // The same touch through a vertex of the line.
    let target = geom("LINESTRING(1 0,1 1,1 10)");
    let (left, right) = trim(&target, &splitter).unwrap();
    assert_eq!(left, geom("LINESTRING EMPTY"));
    assert_eq!(right, target);
}

#[test]
fn splitter_vertex_on_the_line() {
    let target = geom("LINESTRING(0 0,10 0)");
    let splitter = line("LINESTRING(5 -5,5 0,10 5)");
    let (left, right) = trim(&target, &splitter).unwrap();

    assert_points_eq(
        as_line(&left).points(),
        &[Point::new(5.0, 0.0), Point::new(10.0, 0.0)],
    );
    assert_points_eq(
        as_line(&right).points(),
        &[Point::new(0.0, 0.0), Point::new(5.0, 0.0)],
    );
}

#[test]
fn multi_line_halves_keep_their_type() {
    let target = geom("MULTILINESTRING((0 0,10 0),(8 3,9 4),(1 3,2 4))");
    let splitter = line("LINESTRING(5 -1,5 1)");
    let (left, right) = trim(&target, &splitter).unwrap();

    assert_eq!(
        left,
        geom("MULTILINESTRING((5 0,10 0),(8 3,9 4))")
    );
    assert_eq!(
        right,
        geom("MULTILINESTRING((0 0,5 0),(1 3,2 4))")
    );
}

#[test]
fn ambiguous_cuts_are_rejected() {
    let target = geom("LINESTRING(0 0,10 0,10 10)");
    let cases = [
        ("LINESTRING(5 -1,5 1,11 5)", 2),
        ("LINESTRING(20 20,30 30)", 0),
        ("LINESTRING(2 0,4 0)", 2),
    ];

    for (wkt, found) in cases {
        assert_eq!(
            trim(&target, &line(wkt)),
            Err(SplitError::AmbiguousCut { found }),
            "splitter {}",
            wkt
        );
    }
}

#[test]
fn random_trims_are_complementary_and_antisymmetric() {
    let mut rng = Rand64::new(42);
    let mut coord = |range: Real| (rng.rand_float() - 0.5) * range;

    for _ in 0..200 {
        // A horizontal target, with a cutting line crossing it once.
        let y = coord(100.0);
        let x0 = coord(100.0) - 100.0;
        let x1 = coord(100.0) + 100.0;
        let cut = coord(60.0);
        let target = Geometry::LineString(LineString::new(vec![
            Point::new(x0, y),
            Point::new(x1, y),
        ]));
        let splitter = LineString::new(vec![
            Point::new(cut + coord(10.0), y - 20.0),
            Point::new(cut + coord(10.0), y + 20.0),
        ]);

        let (left, right) = trim(&target, &splitter).unwrap();
        let (left, right) = (as_line(&left), as_line(&right));
        assert_relative_eq!(
            left.length() + right.length(),
            target.length(),
            epsilon = 1.0e-9
        );

        // Both halves share only the cut point.
        let shared: Vec<_> = left
            .points()
            .iter()
            .filter(|p| right.points().contains(*p))
            .collect();
        assert_eq!(shared.len(), 1);
        assert_eq!(right.points().last(), Some(shared[0]));
        assert_eq!(left.points().first(), Some(shared[0]));

        let (rev_left, rev_right) = trim(&target, &splitter.reversed()).unwrap();
        assert_eq!(as_line(&rev_left).len(), right.len());
        assert_eq!(as_line(&rev_right).len(), left.len());
        assert_relative_eq!(as_line(&rev_left).length(), right.length(), epsilon = 1.0e-9);
    }
}
