//! Record-by-record normalization.
//!
//! Each record is converted on its own and either fully accepted or
//! dropped. Field order is kept: `latitude`/`longitude` are replaced in
//! place, while `weight_gram` and `collection_year` are appended after the
//! existing fields.

use meteorite_map_record_models::{
    COLLECTION_DATE, COLLECTION_YEAR, LATITUDE, LONGITUDE, NOT_AVAILABLE, NormalizeSummary,
    Record, WEIGHT, WEIGHT_GRAM,
};
use serde_json::{Number, Value};

use crate::CleanseError;
use crate::parsing::{
    convert_weight_to_grams, parse_collection_year, parse_coordinate, round_to_milligram,
};

/// Normalizes every record, silently dropping the ones that fail.
///
/// Input order is preserved among the kept records.
#[must_use]
pub fn normalize_records(records: Vec<Value>) -> Vec<Record> {
    normalize_records_with_summary(records).0
}

/// Normalizes every record and reports how many were kept and skipped.
///
/// Each skipped record is logged at `debug` level with its index and the
/// reason it was refused.
#[must_use]
pub fn normalize_records_with_summary(records: Vec<Value>) -> (Vec<Record>, NormalizeSummary) {
    let mut summary = NormalizeSummary {
        read: records.len(),
        ..NormalizeSummary::default()
    };
    let mut cleansed = Vec::with_capacity(records.len());

    for (index, value) in records.into_iter().enumerate() {
        match normalize_record(value) {
            Ok(record) => cleansed.push(record),
            Err(e) => {
                log::debug!("Skipping record {index}: {e}");
                summary.skipped += 1;
            }
        }
    }

    summary.kept = cleansed.len();
    log::info!(
        "Kept {} of {} records ({} skipped)",
        summary.kept,
        summary.read,
        summary.skipped
    );

    (cleansed, summary)
}

/// Normalizes a single record.
///
/// 1. `latitude`, `longitude` and `weight` must be present and not `"N/A"`.
/// 2. `latitude` and `longitude` become numbers.
/// 3. `weight` is replaced by `weight_gram`, rounded to three decimals.
/// 4. `collection_date`, if present, is replaced by `collection_year`.
///
/// All conversions happen before the record is modified, so a failure
/// never leaves a half-converted record behind.
///
/// # Errors
///
/// Returns the first [`CleanseError`] that applies to the record.
pub fn normalize_record(value: Value) -> Result<Record, CleanseError> {
    let Value::Object(mut record) = value else {
        return Err(CleanseError::NotAnObject);
    };

    for field in [LATITUDE, LONGITUDE, WEIGHT] {
        if required(&record, field)?.as_str() == Some(NOT_AVAILABLE) {
            return Err(CleanseError::NotAvailable { field });
        }
    }

    let latitude = parse_coordinate(LATITUDE, required(&record, LATITUDE)?)?;
    let longitude = parse_coordinate(LONGITUDE, required(&record, LONGITUDE)?)?;

    let weight = required(&record, WEIGHT)?
        .as_str()
        .ok_or(CleanseError::UnexpectedType { field: WEIGHT })?;
    let grams = round_to_milligram(convert_weight_to_grams(weight)?);
    let weight_gram = Number::from_f64(grams).ok_or_else(|| CleanseError::InvalidNumber {
        field: WEIGHT,
        value: weight.to_string(),
    })?;

    let collection_year = match record.get(COLLECTION_DATE) {
        None => None,
        Some(Value::String(date)) => Some(parse_collection_year(date)?),
        Some(_) => {
            return Err(CleanseError::UnexpectedType {
                field: COLLECTION_DATE,
            });
        }
    };

    record.insert(LATITUDE.to_string(), Value::Number(latitude));
    record.insert(LONGITUDE.to_string(), Value::Number(longitude));

    record.insert(WEIGHT_GRAM.to_string(), Value::Number(weight_gram));
    record.shift_remove(WEIGHT);

    if let Some(year) = collection_year {
        record.insert(COLLECTION_YEAR.to_string(), Value::from(year));
        record.shift_remove(COLLECTION_DATE);
    }

    Ok(record)
}

fn required<'a>(record: &'a Record, field: &'static str) -> Result<&'a Value, CleanseError> {
    record
        .get(field)
        .ok_or(CleanseError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn keys(record: &Record) -> Vec<&str> {
        record.keys().map(String::as_str).collect()
    }

    #[test]
    fn normalizes_full_record() {
        let record = normalize_record(json!({
            "latitude": "10.5",
            "longitude": "-20.3",
            "weight": "2.5 kg",
            "collection_date": "1995-06-01",
        }))
        .unwrap();

        assert_eq!(
            Value::Object(record),
            json!({
                "latitude": 10.5,
                "longitude": -20.3,
                "weight_gram": 2500.0,
                "collection_year": 1995,
            })
        );
    }

    #[test]
    fn keeps_field_order_and_appends_new_fields() {
        let record = normalize_record(json!({
            "name": "Allan Hills 84001",
            "latitude": "-76.91",
            "collection_date": "1984-12-27",
            "weight": "1930.9 g",
            "longitude": "156.41",
            "class": "Martian (OPX)",
        }))
        .unwrap();

        assert_eq!(
            keys(&record),
            vec![
                "name",
                "latitude",
                "longitude",
                "class",
                "weight_gram",
                "collection_year",
            ]
        );
        assert_eq!(record["name"], "Allan Hills 84001");
        assert_eq!(record["weight_gram"], 1930.9);
    }

    #[test]
    fn record_without_collection_date_has_no_year() {
        let record = normalize_record(json!({
            "latitude": "1",
            "longitude": "2",
            "weight": "500 mg",
        }))
        .unwrap();

        assert_eq!(keys(&record), vec!["latitude", "longitude", "weight_gram"]);
        assert_eq!(record["weight_gram"], 0.5);
    }

    #[test]
    fn rounds_weight_to_three_decimals() {
        let record = normalize_record(json!({
            "latitude": "1",
            "longitude": "2",
            "weight": "1.23456 g",
        }))
        .unwrap();

        assert_eq!(record["weight_gram"], 1.235);
    }

    #[test]
    fn rejects_not_available_fields() {
        for field in ["latitude", "longitude", "weight"] {
            let mut raw = json!({ "latitude": "1", "longitude": "2", "weight": "1 g" });
            raw[field] = json!("N/A");

            assert_eq!(
                normalize_record(raw).unwrap_err(),
                CleanseError::NotAvailable { field }
            );
        }
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            normalize_record(json!({ "latitude": "1", "longitude": "2" })).unwrap_err(),
            CleanseError::MissingField { field: "weight" }
        );
    }

    #[test]
    fn rejects_non_object_records() {
        assert_eq!(
            normalize_record(json!("latitude")).unwrap_err(),
            CleanseError::NotAnObject
        );
    }

    #[test]
    fn rejects_short_year() {
        let err = normalize_record(json!({
            "latitude": "1",
            "longitude": "2",
            "weight": "1 g",
            "collection_date": "69",
        }))
        .unwrap_err();

        assert!(matches!(err, CleanseError::InvalidDateFormat { .. }));
    }

    #[test]
    fn rejects_non_string_collection_date() {
        let err = normalize_record(json!({
            "latitude": "1",
            "longitude": "2",
            "weight": "1 g",
            "collection_date": null,
        }))
        .unwrap_err();

        assert_eq!(
            err,
            CleanseError::UnexpectedType {
                field: "collection_date"
            }
        );
    }

    #[test]
    fn rejects_bad_weight() {
        let unknown = normalize_record(json!({ "latitude": "1", "longitude": "2", "weight": "3 lb" }));
        let numeric = normalize_record(json!({ "latitude": "1", "longitude": "2", "weight": 3.0 }));

        assert!(matches!(unknown, Err(CleanseError::UnknownUnit { .. })));
        assert_eq!(
            numeric.unwrap_err(),
            CleanseError::UnexpectedType { field: "weight" }
        );
    }

    #[test]
    fn drops_failures_and_keeps_input_order() {
        let records = vec![
            json!({ "id": 1, "latitude": "10", "longitude": "20", "weight": "1 g" }),
            json!({ "id": 2, "latitude": "N/A", "longitude": "1", "weight": "1 g" }),
            json!({ "id": 3, "latitude": "x", "longitude": "1", "weight": "1 g" }),
            json!({ "id": 4, "latitude": "1", "longitude": "1", "weight": "1 stone" }),
            json!({ "id": 5, "latitude": "1", "longitude": "1", "weight": "1 g", "collection_date": "n.d." }),
            json!(42),
            json!({ "id": 7, "latitude": "-5", "longitude": "5", "weight": "2 kg", "collection_date": "2001" }),
        ];

        let (cleansed, summary) = normalize_records_with_summary(records);

        let ids: Vec<&Value> = cleansed.iter().map(|r| &r["id"]).collect();
        assert_eq!(ids, vec![&json!(1), &json!(7)]);
        assert_eq!(
            summary,
            NormalizeSummary {
                read: 7,
                kept: 2,
                skipped: 5,
            }
        );
    }

    #[test]
    fn drops_record_with_not_available_latitude() {
        let cleansed = normalize_records(vec![json!({
            "latitude": "N/A",
            "longitude": "1",
            "weight": "1 g",
        })]);

        assert!(cleansed.is_empty());
    }

    #[test]
    fn every_kept_record_has_numeric_measurements() {
        let cleansed = normalize_records(vec![
            json!({ "latitude": "1.5", "longitude": "2.5", "weight": "3 g" }),
            json!({ "latitude": "inf", "longitude": "2.5", "weight": "3 g" }),
            json!({ "latitude": 4, "longitude": "-0", "weight": "0.001 kg", "collection_date": "1990-01-01" }),
        ]);

        assert_eq!(cleansed.len(), 2);
        for record in &cleansed {
            assert!(record[LATITUDE].is_f64());
            assert!(record[LONGITUDE].is_f64());
            assert!(record[WEIGHT_GRAM].is_f64());
            assert!(!record.contains_key(WEIGHT));
            assert!(!record.contains_key(COLLECTION_DATE));
        }
    }
}
