use crate::math::{Point, Real};
use crate::shape::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPolygon, Polygon, Ring,
};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0, multispace1},
    combinator::{cut, map},
    multi::separated_list1,
    number::complete::double,
    sequence::{delimited, preceded},
    IResult, Parser,
};

type ParseError<'a> = nom::error::Error<&'a str>;

/// Errors raised while reading Well-Known Text.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum WktError {
    /// The text is not a valid geometry.
    #[error("invalid WKT syntax at byte {offset}")]
    Syntax {
        /// The position of the first unexpected character.
        offset: usize,
    },
    /// A valid geometry is followed by other characters.
    #[error("unexpected input after the geometry at byte {offset}")]
    TrailingInput {
        /// The position of the first character after the geometry.
        offset: usize,
    },
}

fn ws(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}

fn coord(input: &str) -> IResult<&str, Point<Real>> {
    let (input, x) = double(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = double(input)?;
    Ok((input, Point::new(x, y)))
}

/// A parenthesized, comma-separated, non-empty list of `item`.
fn list<'a, O, F>(item: F) -> impl Parser<&'a str, Output = Vec<O>, Error = ParseError<'a>>
where
    F: Parser<&'a str, Output = O, Error = ParseError<'a>>,
{
    delimited(
        (char('('), ws),
        separated_list1((ws, char(','), ws), item),
        (ws, char(')')),
    )
}

/// A geometry keyword followed either by `EMPTY` or by `body`.
///
/// Once the keyword matched, a malformed body is a hard failure pointing at the offending input.
fn tagged<'a, O, F>(
    keyword: &'static str,
    body: F,
) -> impl Parser<&'a str, Output = Option<O>, Error = ParseError<'a>>
where
    F: Parser<&'a str, Output = O, Error = ParseError<'a>>,
{
    preceded(
        (tag_no_case(keyword), ws),
        cut(alt((map(tag_no_case("EMPTY"), |_| None), map(body, Some)))),
    )
}

/// `item`, or `EMPTY` standing for its default value.
fn or_empty<'a, O, F>(item: F) -> impl Parser<&'a str, Output = O, Error = ParseError<'a>>
where
    O: Default,
    F: Parser<&'a str, Output = O, Error = ParseError<'a>>,
{
    alt((map(tag_no_case("EMPTY"), |_| O::default()), item))
}

fn point_body(input: &str) -> IResult<&str, Point<Real>> {
    delimited((char('('), ws), coord, (ws, char(')'))).parse(input)
}

fn line_string_body(input: &str) -> IResult<&str, LineString> {
    map(list(coord), LineString::new).parse(input)
}

fn polygon_body(input: &str) -> IResult<&str, Polygon> {
    map(list(list(coord)), |rings: Vec<Vec<Point<Real>>>| {
        let mut rings = rings.into_iter().map(Ring::new);
        let exterior = rings.next().unwrap_or_default();
        Polygon::new(exterior, rings.collect())
    })
    .parse(input)
}

fn geometry(input: &str) -> IResult<&str, Geometry> {
    alt((
        map(tagged("POINT", point_body), |pt| match pt {
            Some(pt) => Geometry::Point(pt),
            None => Geometry::MultiPoint(Vec::new()),
        }),
        map(tagged("LINESTRING", line_string_body), |l| {
            Geometry::LineString(l.unwrap_or_default())
        }),
        map(tagged("POLYGON", polygon_body), |p| {
            Geometry::Polygon(p.unwrap_or_else(Polygon::empty))
        }),
        map(tagged("MULTIPOINT", list(alt((point_body, coord)))), |pts| {
            Geometry::MultiPoint(pts.unwrap_or_default())
        }),
        map(
            tagged("MULTILINESTRING", list(or_empty(line_string_body))),
            |ls| Geometry::MultiLineString(MultiLineString::new(ls.unwrap_or_default())),
        ),
        map(tagged("MULTIPOLYGON", list(or_empty(polygon_body))), |ps| {
            Geometry::MultiPolygon(MultiPolygon::new(ps.unwrap_or_default()))
        }),
        map(tagged("GEOMETRYCOLLECTION", list(geometry)), |gs| {
            Geometry::GeometryCollection(GeometryCollection::new(gs.unwrap_or_default()))
        }),
    ))
    .parse(input)
}

/// Parses a geometry from its Well-Known Text representation.
///
/// Keywords are case-insensitive and every geometry type may be `EMPTY`. Since a point cannot
/// be empty, `POINT EMPTY` is read as an empty multi-point. Only two-dimensional coordinates
/// are supported.
///
/// # Example
///
/// ```
/// use cleave2d::io::parse_wkt;
/// use cleave2d::shape::GeometryType;
///
/// let line = parse_wkt("LINESTRING (30 0, 30 60)").unwrap();
/// assert_eq!(line.geometry_type(), GeometryType::LineString);
/// assert_eq!(line.length(), 60.0);
/// ```
pub fn parse_wkt(input: &str) -> Result<Geometry, WktError> {
    let offset = |rest: &str| input.len() - rest.len();

    match delimited(ws, geometry, ws).parse(input) {
        Ok(("", geom)) => Ok(geom),
        Ok((rest, _)) => Err(WktError::TrailingInput {
            offset: offset(rest),
        }),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => Err(WktError::Syntax {
            offset: offset(err.input),
        }),
        Err(nom::Err::Incomplete(_)) => Err(WktError::Syntax {
            offset: input.len(),
        }),
    }
}

/// Trait implemented by geometries that can be written as Well-Known Text.
pub trait ToWkt {
    /// The Well-Known Text representation of `self`.
    fn to_wkt(&self) -> String;
}

fn write_coords(out: &mut String, pts: &[Point<Real>]) {
    out.push('(');
    for (i, pt) in pts.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{} {}", pt.x, pt.y);
    }
    out.push(')');
}

fn write_list<T>(out: &mut String, items: &[T], mut write_item: impl FnMut(&mut String, &T)) {
    out.push('(');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_item(out, item);
    }
    out.push(')');
}

fn write_line_string_body(out: &mut String, line: &LineString) {
    if line.is_empty() {
        out.push_str("EMPTY");
    } else {
        write_coords(out, line.points());
    }
}

fn write_polygon_body(out: &mut String, poly: &Polygon) {
    if poly.is_empty() {
        out.push_str("EMPTY");
    } else {
        let rings: Vec<&Ring> = poly.rings().collect();
        write_list(out, &rings, |out, ring| write_coords(out, ring.points()));
    }
}

fn write_geometry(out: &mut String, geom: &Geometry) {
    out.push_str(geom.geometry_type().name());
    out.push(' ');

    if geom.is_empty() {
        out.push_str("EMPTY");
        return;
    }

    match geom {
        Geometry::Point(pt) => write_coords(out, core::slice::from_ref(pt)),
        Geometry::MultiPoint(pts) => write_coords(out, pts),
        Geometry::LineString(line) => write_line_string_body(out, line),
        Geometry::MultiLineString(ml) => write_list(out, &ml.0, write_line_string_body),
        Geometry::Polygon(poly) => write_polygon_body(out, poly),
        Geometry::MultiPolygon(mp) => write_list(out, &mp.0, write_polygon_body),
        Geometry::GeometryCollection(gc) => write_list(out, &gc.0, write_geometry),
    }
}

impl ToWkt for Geometry {
    fn to_wkt(&self) -> String {
        let mut out = String::new();
        write_geometry(&mut out, self);
        out
    }
}

impl ToWkt for LineString {
    fn to_wkt(&self) -> String {
        let mut out = String::from("LINESTRING ");
        write_line_string_body(&mut out, self);
        out
    }
}

impl ToWkt for Polygon {
    fn to_wkt(&self) -> String {
        let mut out = String::from("POLYGON ");
        write_polygon_body(&mut out, self);
        out
    }
}
