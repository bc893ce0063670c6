use std::fmt;
use serde_json::{Map, Value};

/// A single coordinate position: x, y and an optional z.
///
/// Position is Copy so transform callbacks can take and return it by value.
/// GeoJSON allows longer tuples, but everything past the third element is
/// application-specific; we don't model it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(pub f64, pub f64, pub Option<f64>);

impl Position {
    pub fn new(x: f64, y: f64) -> Position {
        Position(x, y, None)
    }

    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn z(&self) -> Option<f64> {
        self.2
    }

    /// The JSON array form: `[x, y]` or `[x, y, z]`.
    pub fn to_value(&self) -> Value {
        match self.2 {
            Some(z) => Value::from(vec![self.0, self.1, z]),
            None => Value::from(vec![self.0, self.1]),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.2 {
            Some(z) => write!(f, "({},{},{})", self.0, self.1, z),
            None => write!(f, "({},{})", self.0, self.1),
        }
    }
}

/// A feature's property bag. Opaque: traversal passes it through untouched.
pub type Properties = Map<String, Value>;

/// A GeoJSON geometry. One variant per tag, each carrying the nesting depth
/// its tag implies, so a depth mismatch cannot be represented at all.
///
/// `GeometryCollection` is single-level: a member that is itself a
/// `GeometryCollection` is outside the supported grammar. The JSON reader
/// rejects such input; if one is constructed by hand anyway, it contributes
/// no positions to a walk and is left untouched by `map_coords`.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// The GeoJSON `type` tag for this geometry.
    pub fn type_name(&self) -> &'static str {
        match *self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    pub fn to_value(&self) -> Value {
        fn line_value(line: &Vec<Position>) -> Value {
            Value::Array(line.iter().map(|p| p.to_value()).collect())
        }
        fn rings_value(rings: &Vec<Vec<Position>>) -> Value {
            Value::Array(rings.iter().map(line_value).collect())
        }

        let mut object = Map::new();
        object.insert(String::from("type"), Value::String(String::from(self.type_name())));
        match *self {
            Geometry::Point(ref position) => {
                object.insert(String::from("coordinates"), position.to_value());
            }
            Geometry::MultiPoint(ref line) | Geometry::LineString(ref line) => {
                object.insert(String::from("coordinates"), line_value(line));
            }
            Geometry::MultiLineString(ref rings) | Geometry::Polygon(ref rings) => {
                object.insert(String::from("coordinates"), rings_value(rings));
            }
            Geometry::MultiPolygon(ref polygons) => {
                let value = Value::Array(polygons.iter().map(rings_value).collect());
                object.insert(String::from("coordinates"), value);
            }
            Geometry::GeometryCollection(ref members) => {
                let value = Value::Array(members.iter().map(|g| g.to_value()).collect());
                object.insert(String::from("geometries"), value);
            }
        }
        Value::Object(object)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.to_value().fmt(f)
    }
}

/// A geometry (or none) plus an opaque property bag.
///
/// GeoJSON features also allow `id` and foreign members; we keep only the
/// two members traversal cares about.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub geometry: Option<Geometry>,
    pub properties: Option<Properties>,
}

impl Feature {
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert(String::from("type"), Value::String(String::from("Feature")));
        object.insert(String::from("geometry"), match self.geometry {
            Some(ref geometry) => geometry.to_value(),
            None => Value::Null,
        });
        object.insert(String::from("properties"), match self.properties {
            Some(ref properties) => Value::Object(properties.clone()),
            None => Value::Null,
        });
        Value::Object(object)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.to_value().fmt(f)
    }
}

/// An ordered sequence of features.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert(String::from("type"), Value::String(String::from("FeatureCollection")));
        object.insert(
            String::from("features"),
            Value::Array(self.features.iter().map(|feature| feature.to_value()).collect()),
        );
        Value::Object(object)
    }
}

impl fmt::Display for FeatureCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.to_value().fmt(f)
    }
}

/// Any value a traversal can start from: a bare geometry, a feature, or a
/// feature collection.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl GeoJson {
    pub fn to_value(&self) -> Value {
        match *self {
            GeoJson::Geometry(ref geometry) => geometry.to_value(),
            GeoJson::Feature(ref feature) => feature.to_value(),
            GeoJson::FeatureCollection(ref collection) => collection.to_value(),
        }
    }

    /// Lazily iterates over every coordinate position, in document order.
    /// See `Coordinates`.
    pub fn positions(&self) -> ::Coordinates {
        ::Coordinates::new(self)
    }
}

impl fmt::Display for GeoJson {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.to_value().fmt(f)
    }
}

impl From<Geometry> for GeoJson {
    fn from(geometry: Geometry) -> GeoJson {
        GeoJson::Geometry(geometry)
    }
}

impl From<Feature> for GeoJson {
    fn from(feature: Feature) -> GeoJson {
        GeoJson::Feature(feature)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(collection: FeatureCollection) -> GeoJson {
        GeoJson::FeatureCollection(collection)
    }
}
