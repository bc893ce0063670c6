//! Reads GeoJSON text into the typed model.
//!
//! This is the one place raw `type` tags are dispatched, so it is the one
//! place an unrecognized tag can surface: anything outside the seven
//! geometry tags (plus `Feature` and `FeatureCollection` at the root) fails
//! with `GeoJsonError::UnknownGeometryType`. Structural problems -- a
//! position that isn't an array of 2-3 numbers, a missing `coordinates`
//! member -- fail with `GeoJsonError::ParseError` rather than walking wrong.
//!
//! # Examples
//!
//! Parse from a string:
//!
//! ```
//! use geometa::read;
//!
//! let layer = read::from_str(r#"{"type":"Point","coordinates":[0,0]}"#).unwrap();
//! assert_eq!(1, layer.positions().count());
//! ```
//!
//! Parse from an `io::Read` implementor (works best with `io::BufReader`):
//!
//! ```
//! use std::io;
//! use geometa::read;
//!
//! let text = r#"{"type":"FeatureCollection","features":[]}"#;
//! let layer = read::from_reader(io::BufReader::new(text.as_bytes())).unwrap();
//! assert_eq!(0, layer.positions().count());
//! ```

use std::io;
use serde_json;

use geojson::GeoJson;

pub mod json;

pub use self::json::{GeoJsonError, from_value};

/// Parses a GeoJSON document from text.
pub fn from_str(text: &str) -> Result<GeoJson, GeoJsonError> {
    let value = serde_json::from_str(text)?;
    json::from_value(&value)
}

/// Parses a GeoJSON document from a reader.
pub fn from_reader<R: io::Read>(reader: R) -> Result<GeoJson, GeoJsonError> {
    let value = serde_json::from_reader(reader)?;
    json::from_value(&value)
}
