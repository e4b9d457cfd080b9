use std::fs;
use std::path::Path;

use tracing::debug;
use wkt::types::{Coord, LineString, Polygon};
use wkt::{Geometry, Wkt};

use crate::{KdError, Point, Result};

/**
 * Parse the points of a WKT string.
 *
 * POINT and MULTIPOINT contribute their points; lines, polygons and
 * collections contribute their vertices. Empty points are skipped.
 */
pub fn parse_wkt(text: &str) -> Result<Vec<Point>> {
    let wkt = Wkt::<f64>::from_str(text).map_err(|e| KdError::Wkt(e.to_string()))?;
    let mut points = Vec::new();
    for geometry in &wkt.items {
        collect_points(geometry, &mut points);
    }
    Ok(points)
}

/// Read a file of WKT geometries separated by blank lines.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let mut points = Vec::new();
    for block in contents.split("\n\n").filter(|b| !b.trim().is_empty()) {
        points.extend(parse_wkt(block.trim())?);
    }
    debug!(path = %path.display(), count = points.len(), "read WKT points");
    Ok(points)
}

fn collect_points(geometry: &Geometry<f64>, out: &mut Vec<Point>) {
    match geometry {
        Geometry::Point(p) => out.extend(p.0.as_ref().map(to_point)),
        Geometry::MultiPoint(mp) => {
            out.extend(mp.0.iter().filter_map(|p| p.0.as_ref()).map(to_point))
        }
        Geometry::LineString(ls) => collect_line(ls, out),
        Geometry::MultiLineString(mls) => mls.0.iter().for_each(|ls| collect_line(ls, out)),
        Geometry::Polygon(poly) => collect_polygon(poly, out),
        Geometry::MultiPolygon(mp) => mp.0.iter().for_each(|poly| collect_polygon(poly, out)),
        Geometry::GeometryCollection(gc) => gc.0.iter().for_each(|g| collect_points(g, out)),
    }
}

fn collect_line(line: &LineString<f64>, out: &mut Vec<Point>) {
    out.extend(line.0.iter().map(to_point));
}

fn collect_polygon(poly: &Polygon<f64>, out: &mut Vec<Point>) {
    poly.0.iter().for_each(|ring| collect_line(ring, out));
}

fn to_point(c: &Coord<f64>) -> Point {
    Point::new(c.x, c.y)
}
