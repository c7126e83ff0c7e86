#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Meteorite record types.
//!
//! Records are flat JSON objects whose field order is kept as read, so they
//! are modeled as a [`serde_json::Map`] rather than a struct. Only the
//! fields named here are inspected; everything else passes through.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A flat meteorite record, in input field order.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Latitude field (string in raw records, number once cleansed).
pub const LATITUDE: &str = "latitude";
/// Longitude field (string in raw records, number once cleansed).
pub const LONGITUDE: &str = "longitude";
/// Raw weight field, e.g. `"32.988 g"`.
pub const WEIGHT: &str = "weight";
/// Cleansed weight in grams, rounded to three decimals.
pub const WEIGHT_GRAM: &str = "weight_gram";
/// Raw collection date, e.g. `"1969-01-01"`.
pub const COLLECTION_DATE: &str = "collection_date";
/// Cleansed four-digit collection year.
pub const COLLECTION_YEAR: &str = "collection_year";

/// Literal marking a measurement the source does not have.
pub const NOT_AVAILABLE: &str = "N/A";

/// Mass units accepted in the raw `weight` field.
///
/// Parsing is case-insensitive (`"KG"`, `"Kg"` and `"kg"` are all
/// [`WeightUnit::Kilogram`]).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum WeightUnit {
    #[serde(rename = "mg")]
    #[strum(serialize = "mg")]
    Milligram,
    #[serde(rename = "g")]
    #[strum(serialize = "g")]
    Gram,
    #[serde(rename = "kg")]
    #[strum(serialize = "kg")]
    Kilogram,
}

impl WeightUnit {
    /// Converts a value in this unit to grams.
    #[must_use]
    pub fn to_grams(self, value: f64) -> f64 {
        match self {
            Self::Milligram => value / 1000.0,
            Self::Gram => value,
            Self::Kilogram => value * 1000.0,
        }
    }
}

/// Outcome counts for a normalization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// Records in the input array.
    pub read: usize,
    /// Records written to the output array.
    pub kept: usize,
    /// Records rejected by any check.
    pub skipped: usize,
}

/// Number of cleansed records collected in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    /// Four-digit collection year.
    pub year: i32,
    /// Records with this `collection_year`.
    pub count: u64,
}
