use geojson::{GeoJson, Geometry, Position};

/// Returns a copy of `layer` with every coordinate position replaced by
/// `transform(position, index)`. The input is never mutated and shares no
/// storage with the output; topology (tags, nesting, feature and collection
/// shape, property bags) is preserved exactly.
///
/// `index` is the position's index within its innermost containing array --
/// always 0 for a `Point`. Positions are visited in the same document order
/// as `coord_each`.
pub fn map_coords<F>(layer: &GeoJson, mut transform: F) -> GeoJson
where
    F: FnMut(Position, usize) -> Position,
{
    let mut ret = layer.clone();
    match ret {
        GeoJson::FeatureCollection(ref mut collection) => {
            for feature in &mut collection.features {
                if let Some(ref mut geometry) = feature.geometry {
                    map_geometry(geometry, &mut transform);
                }
            }
        }
        GeoJson::Feature(ref mut feature) => {
            if let Some(ref mut geometry) = feature.geometry {
                map_geometry(geometry, &mut transform);
            }
        }
        GeoJson::Geometry(ref mut geometry) => map_geometry(geometry, &mut transform),
    }
    ret
}

fn map_geometry<F>(geometry: &mut Geometry, transform: &mut F)
where
    F: FnMut(Position, usize) -> Position,
{
    match *geometry {
        Geometry::GeometryCollection(ref mut members) => {
            for member in members {
                map_basic_geometry(member, transform);
            }
        }
        ref mut geometry => map_basic_geometry(geometry, transform),
    }
}

fn map_basic_geometry<F>(geometry: &mut Geometry, transform: &mut F)
where
    F: FnMut(Position, usize) -> Position,
{
    match *geometry {
        Geometry::Point(ref mut position) => *position = transform(*position, 0),
        Geometry::MultiPoint(ref mut line) | Geometry::LineString(ref mut line) => {
            map_line(line, transform);
        }
        Geometry::MultiLineString(ref mut rings) | Geometry::Polygon(ref mut rings) => {
            for line in rings {
                map_line(line, transform);
            }
        }
        Geometry::MultiPolygon(ref mut polygons) => {
            for rings in polygons {
                for line in rings {
                    map_line(line, transform);
                }
            }
        }
        // Single-level collection semantics, same as the walker: a nested
        // collection is left untouched.
        Geometry::GeometryCollection(_) => {}
    }
}

fn map_line<F>(line: &mut Vec<Position>, transform: &mut F)
where
    F: FnMut(Position, usize) -> Position,
{
    for (index, position) in line.iter_mut().enumerate() {
        *position = transform(*position, index);
    }
}

#[cfg(test)]
mod test {
    use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Position};
    use super::map_coords;

    fn p(x: f64, y: f64) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn point() {
        let layer = GeoJson::Geometry(Geometry::Point(p(10.0, 0.0)));
        let swapped = map_coords(&layer, |position, _| Position(position.1, position.0, position.2));
        assert_eq!(GeoJson::Geometry(Geometry::Point(p(0.0, 10.0))), swapped);
    }

    #[test]
    fn point_index_is_zero() {
        let layer = GeoJson::Geometry(Geometry::Point(p(1.0, 2.0)));
        let mut indexes = Vec::new();
        map_coords(&layer, |position, index| {
            indexes.push(index);
            position
        });
        assert_eq!(vec![0], indexes);
    }

    #[test]
    fn feature_point_keeps_properties() {
        let mut properties = ::geojson::Properties::new();
        properties.insert(String::from("a"), json!(1));
        let layer = GeoJson::Feature(Feature {
            geometry: Some(Geometry::Point(p(0.0, 0.0))),
            properties: Some(properties.clone()),
        });

        let moved = map_coords(&layer, |position, _| {
            Position(position.0 + 10.0, position.1 + 20.0, position.2)
        });

        assert_eq!(
            GeoJson::Feature(Feature {
                geometry: Some(Geometry::Point(p(10.0, 20.0))),
                properties: Some(properties),
            }),
            moved
        );
    }

    #[test]
    fn line_string() {
        let layer = GeoJson::Geometry(Geometry::LineString(vec![p(0.0, 0.0), p(1.0, 1.0)]));
        let scaled = map_coords(&layer, |position, _| {
            Position(position.0 * 10.0, position.1 * 10.0, position.2)
        });
        assert_eq!(
            GeoJson::Geometry(Geometry::LineString(vec![p(0.0, 0.0), p(10.0, 10.0)])),
            scaled
        );
    }

    #[test]
    fn line_indexes_restart_per_ring() {
        let layer = GeoJson::Geometry(Geometry::MultiLineString(vec![
            vec![p(0.0, 0.0), p(1.0, 0.0)],
            vec![p(2.0, 2.0), p(3.0, 2.0), p(4.0, 2.0)],
        ]));
        let mut indexes = Vec::new();
        map_coords(&layer, |position, index| {
            indexes.push(index);
            position
        });
        assert_eq!(vec![0, 1, 0, 1, 2], indexes);
    }

    #[test]
    fn multi_polygon_topology_preserved() {
        let layer = GeoJson::Geometry(Geometry::MultiPolygon(vec![vec![vec![
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(0.0, 0.0),
        ]]]));
        let shifted = map_coords(&layer, |position, _| {
            Position(position.0 + 1.0, position.1, position.2)
        });
        assert_eq!(
            GeoJson::Geometry(Geometry::MultiPolygon(vec![vec![vec![
                p(1.0, 0.0),
                p(2.0, 1.0),
                p(1.0, 1.0),
                p(1.0, 0.0),
            ]]])),
            shifted
        );
    }

    #[test]
    fn geometry_collection_members_mapped() {
        let layer = GeoJson::Geometry(Geometry::GeometryCollection(vec![
            Geometry::Point(p(0.0, 0.0)),
            Geometry::LineString(vec![p(0.0, 0.0), p(1.0, 1.0)]),
        ]));
        let shifted = map_coords(&layer, |position, _| {
            Position(position.0, position.1 + 1.0, position.2)
        });
        assert_eq!(
            GeoJson::Geometry(Geometry::GeometryCollection(vec![
                Geometry::Point(p(0.0, 1.0)),
                Geometry::LineString(vec![p(0.0, 1.0), p(1.0, 2.0)]),
            ])),
            shifted
        );
    }

    #[test]
    fn input_never_mutated() {
        let layer = GeoJson::FeatureCollection(FeatureCollection {
            features: vec![Feature {
                geometry: Some(Geometry::LineString(vec![p(0.0, 0.0), p(1.0, 1.0)])),
                properties: None,
            }],
        });
        let snapshot = layer.clone();

        let _ = map_coords(&layer, |_, _| p(99.0, 99.0));

        assert_eq!(snapshot, layer);
    }

    #[test]
    fn null_geometry_passes_through() {
        let layer = GeoJson::Feature(Feature { geometry: None, properties: None });
        assert_eq!(layer, map_coords(&layer, |position, _| position));
    }
}
