//! Outer-ring point-count filtering.
//!
//! Only ring 0 of each polygon is measured. Holes travel with the outer
//! ring they belong to and are never checked on their own.

use geojson::{Geometry, PolygonType};
use meteorite_map_geometry_models::{
    FilterSummary, RawFeatureCollection, SimplifiedCollection, SimplifiedFeature,
};
use serde_json::{Value, json};

use crate::{GeometryError, MULTI_POLYGON, POLYGON};

/// What happened to a single feature's geometry.
enum Outcome {
    Polygon(Value),
    MultiPolygon(Value),
    Collapsed(Value),
    TooFewPoints,
    Unsupported,
}

/// Filters a feature collection, keeping only polygons whose outer ring
/// has at least `min_points` positions.
///
/// See [`filter_min_points_with_summary`] for the per-feature rules.
///
/// # Errors
///
/// Returns [`GeometryError`] if a feature has no geometry or a malformed
/// `Polygon`/`MultiPolygon`.
pub fn filter_min_points(
    collection: RawFeatureCollection,
    min_points: usize,
) -> Result<SimplifiedCollection, GeometryError> {
    filter_min_points_with_summary(collection, min_points).map(|(simplified, _)| simplified)
}

/// Filters a feature collection and reports what was kept and dropped.
///
/// * `Polygon`: kept exactly as read if its outer ring is long enough,
///   otherwise the feature is dropped.
/// * `MultiPolygon`: short polygons are removed. A single survivor is
///   re-tagged as a `Polygon`; no survivors drops the feature.
/// * Any other `type` string, `GeoJSON` or not, is dropped without looking
///   at its coordinates.
///
/// Every kept feature is rebuilt without `properties` or `id`.
///
/// # Errors
///
/// * [`GeometryError::MissingGeometry`] if a feature's geometry is `null`
///   or absent.
/// * [`GeometryError::InvalidGeometry`] if a `Polygon` or `MultiPolygon`
///   does not hold nested position arrays.
pub fn filter_min_points_with_summary(
    collection: RawFeatureCollection,
    min_points: usize,
) -> Result<(SimplifiedCollection, FilterSummary), GeometryError> {
    let mut summary = FilterSummary {
        read: collection.features.len(),
        ..FilterSummary::default()
    };
    let mut features = Vec::with_capacity(collection.features.len());

    for (index, feature) in collection.features.into_iter().enumerate() {
        let geometry = feature
            .geometry
            .ok_or(GeometryError::MissingGeometry { index })?;

        let kept = match simplify(index, geometry, min_points)? {
            Outcome::Polygon(geometry) => {
                summary.kept_polygons += 1;
                geometry
            }
            Outcome::MultiPolygon(geometry) => {
                summary.kept_multi_polygons += 1;
                geometry
            }
            Outcome::Collapsed(geometry) => {
                summary.collapsed += 1;
                geometry
            }
            Outcome::TooFewPoints => {
                summary.dropped_too_few_points += 1;
                continue;
            }
            Outcome::Unsupported => {
                log::debug!("Feature {index}: unsupported geometry type, dropping");
                summary.dropped_unsupported += 1;
                continue;
            }
        };

        features.push(SimplifiedFeature::new(kept));
    }

    log::info!(
        "Kept {} of {} features (min_points={min_points}): {} polygons, {} multipolygons, \
         {} collapsed to polygon; dropped {} with too few points, {} unsupported",
        summary.kept(),
        summary.read,
        summary.kept_polygons,
        summary.kept_multi_polygons,
        summary.collapsed,
        summary.dropped_too_few_points,
        summary.dropped_unsupported,
    );

    Ok((SimplifiedCollection { features }, summary))
}

fn simplify(index: usize, raw: Value, min_points: usize) -> Result<Outcome, GeometryError> {
    match raw.get("type").and_then(Value::as_str) {
        Some(POLYGON | MULTI_POLYGON) => {}
        _ => return Ok(Outcome::Unsupported),
    }

    let parsed =
        Geometry::from_json_value(raw.clone()).map_err(|source| GeometryError::InvalidGeometry {
            index,
            source: Box::new(source),
        })?;

    Ok(match parsed.value {
        geojson::Value::Polygon(rings) => {
            if has_min_points(&rings, min_points) {
                Outcome::Polygon(raw)
            } else {
                Outcome::TooFewPoints
            }
        }
        geojson::Value::MultiPolygon(polygons) => filter_polygons(raw, &polygons, min_points),
        _ => Outcome::Unsupported,
    })
}

/// Keeps the raw polygons of a `MultiPolygon` whose parsed counterpart
/// qualifies, so kept coordinates are written back as read.
fn filter_polygons(mut raw: Value, polygons: &[PolygonType], min_points: usize) -> Outcome {
    // Shape already validated by `geojson`: one array per polygon.
    let raw_polygons = match raw.get_mut("coordinates").map(Value::take) {
        Some(Value::Array(raw_polygons)) => raw_polygons,
        _ => Vec::new(),
    };

    let mut kept: Vec<Value> = raw_polygons
        .into_iter()
        .zip(polygons)
        .filter(|(_, polygon)| has_min_points(polygon, min_points))
        .map(|(raw_polygon, _)| raw_polygon)
        .collect();

    match kept.len() {
        0 => Outcome::TooFewPoints,
        1 => kept.pop().map_or(Outcome::TooFewPoints, |polygon| {
            Outcome::Collapsed(json!({ "type": POLYGON, "coordinates": polygon }))
        }),
        _ => Outcome::MultiPolygon(json!({ "type": MULTI_POLYGON, "coordinates": kept })),
    }
}

/// A polygon without any ring never qualifies.
fn has_min_points(polygon: &PolygonType, min_points: usize) -> bool {
    polygon
        .first()
        .is_some_and(|outer| outer.len() >= min_points)
}
