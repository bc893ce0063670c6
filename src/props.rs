use geojson::{GeoJson, Properties};

/// Calls `visit` once per feature with that feature's property bag (which
/// may be absent), in feature order.
///
/// A bare geometry root visits zero times: unlike the coordinate walker,
/// which descends into a bare geometry, there is no property bag to
/// synthesize here. That asymmetry is deliberate -- callers who want a bag
/// for every root must wrap the geometry in a `Feature` themselves.
pub fn prop_each<'a, F>(layer: &'a GeoJson, mut visit: F)
where
    F: FnMut(Option<&'a Properties>),
{
    match *layer {
        GeoJson::FeatureCollection(ref collection) => {
            for feature in &collection.features {
                visit(feature.properties.as_ref());
            }
        }
        GeoJson::Feature(ref feature) => visit(feature.properties.as_ref()),
        GeoJson::Geometry(_) => {}
    }
}

/// Folds `combine` over every property bag `prop_each` would visit, in the
/// same order, starting from `initial`.
pub fn prop_reduce<'a, A, F>(layer: &'a GeoJson, mut combine: F, initial: A) -> A
where
    F: FnMut(A, Option<&'a Properties>) -> A,
{
    // prop_each drives the order; we only thread the accumulator. The Option
    // dance moves the accumulator through an FnMut capture.
    let mut memo = Some(initial);
    prop_each(layer, |properties| {
        let acc = memo.take().unwrap();
        memo = Some(combine(acc, properties));
    });
    memo.unwrap()
}

#[cfg(test)]
mod test {
    use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Position, Properties};
    use super::{prop_each, prop_reduce};

    fn properties(key: &str, value: i64) -> Properties {
        let mut ret = Properties::new();
        ret.insert(String::from(key), json!(value));
        ret
    }

    fn feature(properties_bag: Option<Properties>) -> Feature {
        Feature {
            geometry: Some(Geometry::Point(Position::new(0.0, 0.0))),
            properties: properties_bag,
        }
    }

    #[test]
    fn feature_visits_once() {
        let layer = GeoJson::Feature(Feature {
            geometry: None,
            properties: Some(properties("a", 1)),
        });
        let mut visited = Vec::new();
        prop_each(&layer, |bag| visited.push(bag.cloned()));
        assert_eq!(vec![Some(properties("a", 1))], visited);
    }

    #[test]
    fn collection_visits_each_feature_in_order() {
        let layer = GeoJson::FeatureCollection(FeatureCollection {
            features: vec![
                feature(Some(properties("a", 1))),
                feature(None),
                feature(Some(properties("b", 2))),
            ],
        });
        let mut visited = Vec::new();
        prop_each(&layer, |bag| visited.push(bag.cloned()));
        assert_eq!(
            vec![Some(properties("a", 1)), None, Some(properties("b", 2))],
            visited
        );
    }

    #[test]
    fn bare_geometry_visits_nothing() {
        let layer = GeoJson::Geometry(Geometry::Point(Position::new(0.0, 0.0)));
        let mut count = 0;
        prop_each(&layer, |_| count += 1);
        assert_eq!(0, count);
    }

    #[test]
    fn reduce_counts_bags() {
        let layer = GeoJson::FeatureCollection(FeatureCollection {
            features: vec![feature(Some(properties("a", 1))), feature(None)],
        });
        let present = prop_reduce(
            &layer,
            |memo, bag| if bag.is_some() { memo + 1 } else { memo },
            0,
        );
        assert_eq!(1, present);
    }

    #[test]
    fn reduce_follows_visit_order() {
        let layer = GeoJson::FeatureCollection(FeatureCollection {
            features: vec![
                feature(Some(properties("a", 1))),
                feature(Some(properties("b", 2))),
            ],
        });
        let keys = prop_reduce(
            &layer,
            |memo: String, bag| match bag.and_then(|bag| bag.keys().next()) {
                Some(key) => memo + key,
                None => memo,
            },
            String::new(),
        );
        assert_eq!("ab", keys);
    }
}
