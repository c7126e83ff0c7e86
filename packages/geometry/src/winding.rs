//! Winding-order correction.
//!
//! Rewrites rings to the RFC 7946 right-hand rule: outer rings
//! counter-clockwise, holes clockwise. Rings whose winding is undefined
//! (open, degenerate, or with positions lacking a numeric x/y pair) are
//! left as they are.

use geo::LineString;
use geo::algorithm::winding_order::{Winding, WindingOrder};
use meteorite_map_geometry_models::SimplifiedCollection;
use serde_json::Value;

use crate::{MULTI_POLYGON, POLYGON};

/// Rewinds every ring in the collection. Returns the number of rings that
/// were reversed.
pub fn rewind(collection: &mut SimplifiedCollection) -> usize {
    let reversed = collection
        .features
        .iter_mut()
        .map(|feature| rewind_geometry(&mut feature.geometry))
        .sum();

    log::info!("Reversed {reversed} rings to follow the right-hand rule");

    reversed
}

/// Rewinds the rings of a single `Polygon` or `MultiPolygon`. Other
/// geometry types are untouched.
pub fn rewind_geometry(geometry: &mut Value) -> usize {
    let multi = match geometry.get("type").and_then(Value::as_str) {
        Some(POLYGON) => false,
        Some(MULTI_POLYGON) => true,
        _ => return 0,
    };

    let Some(coordinates) = geometry.get_mut("coordinates").and_then(Value::as_array_mut) else {
        return 0;
    };

    if multi {
        coordinates
            .iter_mut()
            .filter_map(Value::as_array_mut)
            .map(|rings| rewind_polygon(rings))
            .sum()
    } else {
        rewind_polygon(coordinates)
    }
}

fn rewind_polygon(rings: &mut [Value]) -> usize {
    let mut reversed = 0;

    for (index, ring) in rings.iter_mut().enumerate() {
        let Some(positions) = ring.as_array_mut() else {
            continue;
        };

        let wanted = if index == 0 {
            WindingOrder::CounterClockwise
        } else {
            WindingOrder::Clockwise
        };

        if winding_order(positions).is_some_and(|order| order != wanted) {
            // Whole positions are reversed so any altitude values stay put.
            positions.reverse();
            reversed += 1;
        }
    }

    reversed
}

fn winding_order(ring: &[Value]) -> Option<WindingOrder> {
    let coords = ring
        .iter()
        .map(|position| {
            let position = position.as_array()?;
            Some((position.first()?.as_f64()?, position.get(1)?.as_f64()?))
        })
        .collect::<Option<Vec<(f64, f64)>>>()?;

    LineString::from(coords).winding_order()
}
