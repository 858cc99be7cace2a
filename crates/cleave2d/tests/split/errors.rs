use crate::common::{geom, line};
use cleave2d::math::{Point, Real};
use cleave2d::query::{
    self, check_parts, splitter_line, trim, GeometryRole, SplitError, SplitTolerances,
};
use cleave2d::shape::{Geometry, GeometryType, LineString};

#[test]
fn unsupported_targets() {
    let splitter = line("LINESTRING(0 0,1 1)");

    for (wkt, found) in [
        ("POINT(1 2)", GeometryType::Point),
        ("MULTIPOINT(1 2,3 4)", GeometryType::MultiPoint),
        (
            "GEOMETRYCOLLECTION(POINT(1 2))",
            GeometryType::GeometryCollection,
        ),
    ] {
        assert_eq!(
            query::split(&geom(wkt), &splitter),
            Err(SplitError::InvalidGeometryType {
                role: GeometryRole::Target,
                found
            })
        );
    }

    assert_eq!(
        trim(&geom("POLYGON((0 0,1 0,1 1,0 0))"), &splitter),
        Err(SplitError::InvalidGeometryType {
            role: GeometryRole::Target,
            found: GeometryType::Polygon
        })
    );
}

#[test]
fn unsupported_splitters() {
    let splitter = geom("MULTILINESTRING((0 0,1 1),(2 2,3 3))");
    let err = splitter_line(&splitter).unwrap_err();
    assert_eq!(
        err,
        SplitError::InvalidGeometryType {
            role: GeometryRole::Splitter,
            found: GeometryType::MultiLineString
        }
    );
    assert_eq!(
        err.to_string(),
        "unsupported geometry type for the splitter: MULTILINESTRING"
    );

    let target = geom("LINESTRING(0 0,10 0)");
    assert_eq!(
        query::split(&target, &line("LINESTRING(1 1,1 1)")),
        Err(SplitError::DegenerateSplitter)
    );
    let nan = LineString::new(vec![Point::new(0.0, Real::NAN), Point::new(1.0, 1.0)]);
    assert_eq!(
        query::split(&target, &nan),
        Err(SplitError::NonFiniteCoordinate)
    );
}

#[test]
fn malformed_targets() {
    let splitter = line("LINESTRING(0 -1,0 1)");
    assert!(matches!(
        query::split(&geom("POLYGON((0 0,1 0,0 0))"), &splitter),
        Err(SplitError::MalformedTarget { .. })
    ));
    let single_point = Geometry::LineString(LineString::new(vec![Point::new(0.0, 0.0)]));
    assert!(matches!(
        query::split(&single_point, &splitter),
        Err(SplitError::MalformedTarget { .. })
    ));
}

#[test]
fn empty_targets_are_returned_unchanged() {
    let splitter = line("LINESTRING(0 -1,0 1)");

    for wkt in [
        "POLYGON EMPTY",
        "MULTIPOLYGON EMPTY",
        "LINESTRING EMPTY",
        "MULTILINESTRING EMPTY",
        // Emptiness is checked before the geometry type.
        "POINT EMPTY",
    ] {
        let target = geom(wkt);
        let parts = query::split(&target, &splitter).unwrap();
        assert_eq!(parts.into_inner(), [target.clone()]);
    }

    let target = geom("LINESTRING EMPTY");
    assert_eq!(
        trim(&target, &splitter),
        Ok((target.clone(), target.clone()))
    );
}

#[test]
fn union_law_violations_are_reported() {
    let target = geom("POLYGON((0 0,100 0,100 100,0 100,0 0))");
    let parts = [
        geom("POLYGON((0 0,50 0,50 100,0 100,0 0))"),
        geom("POLYGON((50 0,100 0,100 99,50 99,50 0))"),
    ];

    match check_parts(&target, &parts, &SplitTolerances::default()) {
        Err(SplitError::ToleranceViolation {
            difference,
            tolerance,
        }) => {
            assert_relative_eq!(difference, 50.0);
            assert_relative_eq!(tolerance, 1.0);
        }
        res => panic!("unexpected result: {:?}", res),
    }

    let loose = SplitTolerances {
        area_ratio: 0.01,
        ..SplitTolerances::default()
    };
    assert!(check_parts(&target, &parts, &loose).is_ok());
}
