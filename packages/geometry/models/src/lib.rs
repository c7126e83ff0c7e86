#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! `GeoJSON` feature collection types for the geometry filter.
//!
//! Geometries are carried as raw [`serde_json::Value`]s on both sides so
//! that a kept polygon is written back exactly as it was read, and so that
//! geometry types outside the `GeoJSON` set can be recognized and dropped
//! instead of failing the parse. Output features carry no `properties`
//! or `id` members.

use serde::{Deserialize, Serialize};

/// An input feature collection. Only `features[*].geometry` is read;
/// every other member is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFeatureCollection {
    /// Input features, in document order.
    pub features: Vec<RawFeature>,
}

/// An input feature reduced to its geometry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFeature {
    /// `None` when the geometry is `null` or absent.
    #[serde(default)]
    pub geometry: Option<serde_json::Value>,
}

/// A feature reduced to its geometry.
///
/// Serializes as `{"type": "Feature", "geometry": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct SimplifiedFeature {
    /// The kept (and possibly collapsed) `Polygon` or `MultiPolygon`.
    pub geometry: serde_json::Value,
}

impl SimplifiedFeature {
    #[must_use]
    pub const fn new(geometry: serde_json::Value) -> Self {
        Self { geometry }
    }
}

/// A feature collection holding only simplified features.
///
/// Serializes as `{"type": "FeatureCollection", "features": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct SimplifiedCollection {
    /// Surviving features, in input order.
    pub features: Vec<SimplifiedFeature>,
}

/// Counts describing what a filter pass did with each input feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Features in the input collection.
    pub read: usize,
    /// `Polygon` features kept unchanged.
    pub kept_polygons: usize,
    /// `MultiPolygon` features kept with two or more polygons.
    pub kept_multi_polygons: usize,
    /// `MultiPolygon` features collapsed to a single `Polygon`.
    pub collapsed: usize,
    /// Features dropped because no outer ring reached the threshold.
    pub dropped_too_few_points: usize,
    /// Features dropped because their geometry is neither `Polygon` nor
    /// `MultiPolygon`.
    pub dropped_unsupported: usize,
}

impl FilterSummary {
    /// Number of features written to the output collection.
    #[must_use]
    pub const fn kept(&self) -> usize {
        self.kept_polygons + self.kept_multi_polygons + self.collapsed
    }

    /// Number of features left out of the output collection.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped_too_few_points + self.dropped_unsupported
    }
}
