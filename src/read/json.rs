use std::error;
use std::fmt;
use serde_json;
use serde_json::{Map, Value};

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Position};

#[derive(Debug)]
pub enum GeoJsonError {
    /// The document isn't JSON at all.
    JsonError(serde_json::Error),
    /// A `type` tag outside the recognized set. Holds the offending tag;
    /// empty when the `type` member is missing or not a string.
    UnknownGeometryType(String),
    /// The tag is recognized but the structure around it is not GeoJSON.
    ParseError(String),
}

impl fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GeoJsonError::JsonError(ref err) => err.fmt(f),
            GeoJsonError::UnknownGeometryType(ref tag) => {
                if tag.is_empty() {
                    write!(f, "unknown geometry type: no \"type\" member")
                } else {
                    write!(f, "unknown geometry type: {:?}", tag)
                }
            }
            GeoJsonError::ParseError(ref description) => {
                write!(f, "parse error: {}", description)
            }
        }
    }
}

impl error::Error for GeoJsonError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            GeoJsonError::JsonError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GeoJsonError {
    fn from(err: serde_json::Error) -> GeoJsonError {
        GeoJsonError::JsonError(err)
    }
}

/// Builds the typed model from an already-parsed JSON value.
///
/// The root may be a `FeatureCollection`, a `Feature`, or any of the seven
/// geometries; anything else is `UnknownGeometryType`.
pub fn from_value(value: &Value) -> Result<GeoJson, GeoJsonError> {
    let object = expect_object(value)?;
    match type_tag(object) {
        "FeatureCollection" => Ok(GeoJson::FeatureCollection(parse_feature_collection(object)?)),
        "Feature" => Ok(GeoJson::Feature(parse_feature(object)?)),
        _ => Ok(GeoJson::Geometry(parse_geometry(object, true)?)),
    }
}

/// The `type` member, or "" when missing or not a string. Callers that hit
/// "" report `UnknownGeometryType` -- the same failure an unrecognized tag
/// gets, since we can't tell a typo from an omission.
fn type_tag(object: &Map<String, Value>) -> &str {
    match object.get("type") {
        Some(&Value::String(ref tag)) => tag,
        _ => "",
    }
}

fn parse_feature_collection(object: &Map<String, Value>) -> Result<FeatureCollection, GeoJsonError> {
    let features = match object.get("features") {
        Some(value) => expect_array(value, "\"features\" member must be an array")?,
        None => return Err(GeoJsonError::ParseError(
            String::from("FeatureCollection has no \"features\" member"),
        )),
    };

    let mut ret = Vec::with_capacity(features.len());
    for value in features {
        let object = expect_object(value)?;
        if type_tag(object) != "Feature" {
            return Err(GeoJsonError::ParseError(
                String::from("FeatureCollection members must have type \"Feature\""),
            ));
        }
        ret.push(parse_feature(object)?);
    }
    Ok(FeatureCollection { features: ret })
}

fn parse_feature(object: &Map<String, Value>) -> Result<Feature, GeoJsonError> {
    let geometry = match object.get("geometry") {
        None | Some(&Value::Null) => None,
        Some(value) => Some(parse_geometry(expect_object(value)?, true)?),
    };
    let properties = match object.get("properties") {
        None | Some(&Value::Null) => None,
        Some(&Value::Object(ref properties)) => Some(properties.clone()),
        Some(_) => return Err(GeoJsonError::ParseError(
            String::from("\"properties\" member must be an object or null"),
        )),
    };
    Ok(Feature {
        geometry: geometry,
        properties: properties,
    })
}

/// `allow_collection` is false when parsing a `GeometryCollection`'s
/// members: collections are single-level, so a nested collection tag is
/// treated exactly like an unrecognized one.
fn parse_geometry(object: &Map<String, Value>, allow_collection: bool) -> Result<Geometry, GeoJsonError> {
    match type_tag(object) {
        "Point" => Ok(Geometry::Point(parse_position(coordinates(object)?)?)),
        "MultiPoint" => Ok(Geometry::MultiPoint(parse_line(coordinates(object)?)?)),
        "LineString" => Ok(Geometry::LineString(parse_line(coordinates(object)?)?)),
        "MultiLineString" => Ok(Geometry::MultiLineString(parse_rings(coordinates(object)?)?)),
        "Polygon" => Ok(Geometry::Polygon(parse_rings(coordinates(object)?)?)),
        "MultiPolygon" => {
            let polygons = expect_array(coordinates(object)?, "MultiPolygon coordinates must be an array")?;
            let mut ret = Vec::with_capacity(polygons.len());
            for value in polygons {
                ret.push(parse_rings(value)?);
            }
            Ok(Geometry::MultiPolygon(ret))
        }
        "GeometryCollection" if allow_collection => {
            let members = match object.get("geometries") {
                Some(value) => expect_array(value, "\"geometries\" member must be an array")?,
                None => return Err(GeoJsonError::ParseError(
                    String::from("GeometryCollection has no \"geometries\" member"),
                )),
            };
            let mut ret = Vec::with_capacity(members.len());
            for value in members {
                ret.push(parse_geometry(expect_object(value)?, false)?);
            }
            Ok(Geometry::GeometryCollection(ret))
        }
        tag => Err(GeoJsonError::UnknownGeometryType(String::from(tag))),
    }
}

fn coordinates(object: &Map<String, Value>) -> Result<&Value, GeoJsonError> {
    match object.get("coordinates") {
        Some(value) => Ok(value),
        None => Err(GeoJsonError::ParseError(
            String::from("geometry has no \"coordinates\" member"),
        )),
    }
}

fn parse_rings(value: &Value) -> Result<Vec<Vec<Position>>, GeoJsonError> {
    let rings = expect_array(value, "expected an array of coordinate arrays")?;
    let mut ret = Vec::with_capacity(rings.len());
    for value in rings {
        ret.push(parse_line(value)?);
    }
    Ok(ret)
}

fn parse_line(value: &Value) -> Result<Vec<Position>, GeoJsonError> {
    let positions = expect_array(value, "expected an array of positions")?;
    let mut ret = Vec::with_capacity(positions.len());
    for value in positions {
        ret.push(parse_position(value)?);
    }
    Ok(ret)
}

fn parse_position(value: &Value) -> Result<Position, GeoJsonError> {
    let numbers = expect_array(value, "position must be an array")?;
    if numbers.len() < 2 || numbers.len() > 3 {
        return Err(GeoJsonError::ParseError(
            format!("position must have 2 or 3 coordinates, not {}", numbers.len()),
        ));
    }
    let x = expect_f64(&numbers[0])?;
    let y = expect_f64(&numbers[1])?;
    let z = match numbers.get(2) {
        Some(value) => Some(expect_f64(value)?),
        None => None,
    };
    Ok(Position(x, y, z))
}

fn expect_object(value: &Value) -> Result<&Map<String, Value>, GeoJsonError> {
    match *value {
        Value::Object(ref object) => Ok(object),
        _ => Err(GeoJsonError::ParseError(String::from("expected a JSON object"))),
    }
}

fn expect_array<'a>(value: &'a Value, description: &str) -> Result<&'a Vec<Value>, GeoJsonError> {
    match *value {
        Value::Array(ref values) => Ok(values),
        _ => Err(GeoJsonError::ParseError(String::from(description))),
    }
}

fn expect_f64(value: &Value) -> Result<f64, GeoJsonError> {
    match value.as_f64() {
        Some(number) => Ok(number),
        None => Err(GeoJsonError::ParseError(String::from("coordinate must be a number"))),
    }
}
