//! Field-level parsing for raw meteorite records.
//!
//! Weight, collection date and coordinate conversions used by the record
//! normalizer. Each returns a [`CleanseError`] describing why a value was
//! refused.

use std::str::FromStr as _;
use std::sync::LazyLock;

use meteorite_map_record_models::WeightUnit;
use regex::Regex;
use serde_json::{Number, Value};

use crate::CleanseError;

/// Leading number, optional whitespace, then a unit made of letters.
/// Anything after the unit is ignored.
static WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9.]+)\s*([A-Za-z]+)").expect("valid regex"));

/// Four digits at the very start of the string.
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})").expect("valid regex"));

/// Converts a weight string such as `"32.988 g"` or `"0.5 kg"` to grams.
///
/// The result is not rounded; see [`round_to_milligram`].
///
/// # Errors
///
/// * [`CleanseError::InvalidWeightFormat`] if the string does not start with
///   a number followed by a unit.
/// * [`CleanseError::UnknownUnit`] if the unit is not `g`, `kg` or `mg`.
pub fn convert_weight_to_grams(weight: &str) -> Result<f64, CleanseError> {
    let invalid = || CleanseError::InvalidWeightFormat {
        value: weight.to_string(),
    };

    let caps = WEIGHT_RE.captures(weight).ok_or_else(invalid)?;
    let value = caps[1].parse::<f64>().map_err(|_| invalid())?;

    let unit_token = &caps[2];
    let unit = WeightUnit::from_str(unit_token).map_err(|_| CleanseError::UnknownUnit {
        unit: unit_token.to_lowercase(),
    })?;

    Ok(unit.to_grams(value))
}

/// Rounds a gram value to three decimals (milligram precision).
///
/// Rounding happens in decimal formatting, which is correctly rounded from
/// the exact binary value (no multiply-and-round error).
#[must_use]
pub fn round_to_milligram(grams: f64) -> f64 {
    format!("{grams:.3}").parse().unwrap_or(grams)
}

/// Extracts the leading four-digit year from a collection date.
///
/// No calendar validation is done: `"9999-99-99"` yields `9999`.
///
/// # Errors
///
/// Returns [`CleanseError::InvalidDateFormat`] if the string does not
/// start with four ASCII digits.
pub fn parse_collection_year(date: &str) -> Result<i32, CleanseError> {
    let invalid = || CleanseError::InvalidDateFormat {
        value: date.to_string(),
    };

    let caps = YEAR_RE.captures(date).ok_or_else(invalid)?;
    caps[1].parse::<i32>().map_err(|_| invalid())
}

/// Parses a latitude or longitude value into a finite JSON number.
///
/// Strings are trimmed before parsing; values that are already JSON
/// numbers are taken as they are.
///
/// # Errors
///
/// * [`CleanseError::InvalidNumber`] if the value does not parse or is not
///   finite (`"nan"`, `"inf"`).
/// * [`CleanseError::UnexpectedType`] for anything but a string or number.
pub fn parse_coordinate(field: &'static str, value: &Value) -> Result<Number, CleanseError> {
    let parsed = match value {
        Value::String(raw) => {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| CleanseError::InvalidNumber {
                    field,
                    value: raw.clone(),
                })?
        }
        Value::Number(number) => number.as_f64().ok_or_else(|| CleanseError::InvalidNumber {
            field,
            value: number.to_string(),
        })?,
        _ => return Err(CleanseError::UnexpectedType { field }),
    };

    Number::from_f64(parsed).ok_or_else(|| CleanseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
