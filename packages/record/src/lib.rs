#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Meteorite record cleansing.
//!
//! Raw catalogue records carry coordinates as strings, masses as
//! free-form strings with a unit (`"32.988 g"`, `"0.5 kg"`) and collection
//! dates as strings. [`normalize_records`] turns them into numeric
//! coordinates, a `weight_gram` value and a `collection_year`, dropping
//! every record that fails a check. A record is either fully converted or
//! left out; there are no partial records.

pub mod aggregate;
pub mod normalize;
pub mod parsing;

pub use aggregate::aggregate_years;
pub use normalize::{normalize_record, normalize_records, normalize_records_with_summary};

use thiserror::Error;

/// Reasons a single record is rejected.
///
/// These never abort a run; the offending record is skipped and logged at
/// `debug` level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CleanseError {
    /// The array element is not a JSON object.
    #[error("Record is not a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("Missing field `{field}`")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A required measurement is the `"N/A"` sentinel.
    #[error("Field `{field}` is N/A")]
    NotAvailable {
        /// Name of the unavailable field.
        field: &'static str,
    },

    /// A field holds a JSON type that cannot be converted (e.g. `null`
    /// or an array).
    #[error("Field `{field}` has an unexpected JSON type")]
    UnexpectedType {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A numeric field does not hold a finite number.
    #[error("Field `{field}` is not a finite number: {value:?}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// Raw value as read.
        value: String,
    },

    /// The weight does not start with a number followed by a unit.
    #[error("Invalid weight format: {value:?}")]
    InvalidWeightFormat {
        /// Raw weight string.
        value: String,
    },

    /// The weight unit is not one of `g`, `kg` or `mg`.
    #[error("Unknown weight unit: {unit:?}")]
    UnknownUnit {
        /// Unit token, lowercased.
        unit: String,
    },

    /// The collection date does not start with a four-digit year.
    #[error("Invalid collection date format: {value:?}")]
    InvalidDateFormat {
        /// Raw date string.
        value: String,
    },
}
