use std::slice;

use geojson::{Feature, GeoJson, Geometry, Position};

const NO_FEATURES: &'static [Feature] = &[];
const NO_GEOMETRIES: &'static [Geometry] = &[];

/// Lazily iterates over every coordinate position in a GeoJSON value, in
/// document order: feature order as given, then geometry order within a
/// `GeometryCollection` as given, then outer-to-inner array order within a
/// geometry's coordinates.
///
/// The iterator holds only slice cursors into the input -- it never builds a
/// flattened array of positions, so partial consumption does no more work
/// than the positions it actually yields, and a caller can short-circuit
/// with the usual `Iterator` adapters (`take_while`, `try_for_each`,
/// `try_fold`).
///
/// # Examples
///
/// ```
/// use geometa::geojson::{GeoJson, Geometry, Position};
///
/// let layer = GeoJson::from(Geometry::LineString(vec![
///     Position::new(0.0, 0.0),
///     Position::new(1.0, 1.0),
/// ]));
///
/// let xs: Vec<f64> = layer.positions().map(|p| p.x()).collect();
/// assert_eq!(vec![0.0, 1.0], xs);
/// ```
#[derive(Debug)]
pub struct Coordinates<'a> {
    features: slice::Iter<'a, Feature>,
    geometries: slice::Iter<'a, Geometry>,
    current: GeometryCoords<'a>,
}

/// Cursor into one coordinate-bearing geometry's positions.
#[derive(Debug)]
enum GeometryCoords<'a> {
    Done,
    Point(&'a Position),
    Line(slice::Iter<'a, Position>),
    Rings {
        line: slice::Iter<'a, Position>,
        rest: slice::Iter<'a, Vec<Position>>,
    },
    Polygons {
        line: slice::Iter<'a, Position>,
        rings: slice::Iter<'a, Vec<Position>>,
        rest: slice::Iter<'a, Vec<Vec<Position>>>,
    },
}

const NO_POSITIONS: &'static [Position] = &[];
const NO_LINES: &'static [Vec<Position>] = &[];

impl<'a> GeometryCoords<'a> {
    fn new(geometry: &'a Geometry) -> GeometryCoords<'a> {
        match *geometry {
            Geometry::Point(ref position) => GeometryCoords::Point(position),
            Geometry::MultiPoint(ref line) | Geometry::LineString(ref line) => {
                GeometryCoords::Line(line.iter())
            }
            Geometry::MultiLineString(ref rings) | Geometry::Polygon(ref rings) => {
                GeometryCoords::Rings {
                    line: NO_POSITIONS.iter(),
                    rest: rings.iter(),
                }
            }
            Geometry::MultiPolygon(ref polygons) => GeometryCoords::Polygons {
                line: NO_POSITIONS.iter(),
                rings: NO_LINES.iter(),
                rest: polygons.iter(),
            },
            // Single-level collection semantics: a collection nested inside
            // another contributes no positions. The JSON reader rejects such
            // input; this arm only fires on hand-built values.
            Geometry::GeometryCollection(_) => GeometryCoords::Done,
        }
    }

    fn next(&mut self) -> Option<&'a Position> {
        loop {
            match *self {
                GeometryCoords::Done => return None,
                GeometryCoords::Point(position) => {
                    *self = GeometryCoords::Done;
                    return Some(position);
                }
                GeometryCoords::Line(ref mut line) => return line.next(),
                GeometryCoords::Rings { ref mut line, ref mut rest } => {
                    if let Some(position) = line.next() {
                        return Some(position);
                    }
                    match rest.next() {
                        Some(next_line) => *line = next_line.iter(),
                        None => return None,
                    }
                }
                GeometryCoords::Polygons { ref mut line, ref mut rings, ref mut rest } => {
                    if let Some(position) = line.next() {
                        return Some(position);
                    }
                    if let Some(next_line) = rings.next() {
                        *line = next_line.iter();
                        continue;
                    }
                    match rest.next() {
                        Some(next_rings) => *rings = next_rings.iter(),
                        None => return None,
                    }
                }
            }
        }
    }
}

impl<'a> Coordinates<'a> {
    pub fn new(layer: &'a GeoJson) -> Coordinates<'a> {
        let mut ret = Coordinates {
            features: NO_FEATURES.iter(),
            geometries: NO_GEOMETRIES.iter(),
            current: GeometryCoords::Done,
        };
        match *layer {
            GeoJson::FeatureCollection(ref collection) => {
                ret.features = collection.features.iter();
            }
            GeoJson::Feature(ref feature) => ret.enter_feature(feature),
            GeoJson::Geometry(ref geometry) => ret.enter_geometry(geometry),
        }
        ret
    }

    /// Walks a bare geometry without wrapping it in a `GeoJson` first.
    pub fn of_geometry(geometry: &'a Geometry) -> Coordinates<'a> {
        let mut ret = Coordinates {
            features: NO_FEATURES.iter(),
            geometries: NO_GEOMETRIES.iter(),
            current: GeometryCoords::Done,
        };
        ret.enter_geometry(geometry);
        ret
    }

    fn enter_feature(&mut self, feature: &'a Feature) {
        // A null geometry yields no positions.
        if let Some(ref geometry) = feature.geometry {
            self.enter_geometry(geometry);
        }
    }

    fn enter_geometry(&mut self, geometry: &'a Geometry) {
        match *geometry {
            Geometry::GeometryCollection(ref members) => {
                self.geometries = members.iter();
            }
            ref geometry => self.current = GeometryCoords::new(geometry),
        }
    }
}

impl<'a> Iterator for Coordinates<'a> {
    type Item = &'a Position;

    fn next(&mut self) -> Option<&'a Position> {
        loop {
            if let Some(position) = self.current.next() {
                return Some(position);
            }
            if let Some(geometry) = self.geometries.next() {
                self.current = GeometryCoords::new(geometry);
                continue;
            }
            match self.features.next() {
                Some(feature) => self.enter_feature(feature),
                None => return None,
            }
        }
    }
}

/// Calls `visit` once per coordinate position in `layer`, in document order.
///
/// To stop a walk early, iterate `layer.positions()` instead and use
/// `try_for_each`: whatever error the visitor returns propagates out
/// unmodified.
pub fn coord_each<F>(layer: &GeoJson, mut visit: F)
where
    F: FnMut(&Position),
{
    for position in Coordinates::new(layer) {
        visit(position);
    }
}

/// Folds `combine` over every coordinate position in `layer`, starting from
/// `initial`. Combination order is exactly `coord_each`'s document order, so
/// non-commutative combining functions are safe.
pub fn coord_reduce<A, F>(layer: &GeoJson, mut combine: F, initial: A) -> A
where
    F: FnMut(A, &Position) -> A,
{
    let mut memo = initial;
    for position in Coordinates::new(layer) {
        memo = combine(memo, position);
    }
    memo
}
