use crate::common::{geom, line};
use cleave2d::io::{parse_wkt, ToWkt, WktError};
use cleave2d::query;

#[test]
fn split_parts_as_wkt() {
    let target = geom("POLYGON((20 20,40 20,40 40,20 40,20 20))");
    let parts = query::split(&target, &line("LINESTRING(30 0,30 60)")).unwrap();
    let parts: Vec<String> = parts.iter().map(|p| p.to_wkt()).collect();

    assert_eq!(
        parts,
        [
            "POLYGON ((20 20, 30 20, 30 40, 20 40, 20 20))",
            "POLYGON ((30 20, 40 20, 40 40, 30 40, 30 20))",
        ]
    );
}

#[test]
fn fixtures_round_trip() {
    for wkt in [
        "POLYGON ((10 10, 40 10, 40 40, 10 40, 10 10), (15 15, 15 30, 30 30, 30 15, 15 15))",
        "MULTILINESTRING ((0 0, 10 0), EMPTY, (0 10, 10 10))",
        "LINESTRING (15.5 10, 10 10)",
        "GEOMETRYCOLLECTION (POINT (1 2), LINESTRING EMPTY)",
        "MULTIPOLYGON EMPTY",
    ] {
        assert_eq!(parse_wkt(wkt).unwrap().to_wkt(), wkt);
    }
}

#[test]
fn malformed_text() {
    assert!(matches!(
        parse_wkt("POLYGON ((0 0, 1 0, 1 1, 0 0)"),
        Err(WktError::Syntax { .. })
    ));
    assert!(matches!(
        parse_wkt("LINESTRING (0 0, 1 1))"),
        Err(WktError::TrailingInput { offset: 21 })
    ));
    assert!(parse_wkt("").is_err());
}
