#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Polygon cleanup for `GeoJSON` boundary files.
//!
//! [`filter_min_points`] drops polygons whose outer ring has too few
//! positions (small islands, slivers, digitizing noise) and re-emits each
//! surviving feature with nothing but its geometry. [`rewind`] optionally
//! enforces the RFC 7946 right-hand rule on the result so that renderers
//! which care about winding order draw holes correctly.

pub mod filter;
pub mod winding;

pub use filter::{filter_min_points, filter_min_points_with_summary};
pub use winding::rewind;

use thiserror::Error;

pub(crate) const POLYGON: &str = "Polygon";
pub(crate) const MULTI_POLYGON: &str = "MultiPolygon";

/// Errors that abort a geometry filter run.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A feature has a `null` or absent geometry.
    #[error("Feature at index {index} has no geometry")]
    MissingGeometry {
        /// Position of the feature in the input collection.
        index: usize,
    },

    /// A `Polygon` or `MultiPolygon` whose coordinates are not nested
    /// position arrays.
    #[error("Feature at index {index} has a malformed polygon geometry: {source}")]
    InvalidGeometry {
        /// Position of the feature in the input collection.
        index: usize,
        /// Parse failure reported by `geojson`.
        source: Box<geojson::Error>,
    },
}
