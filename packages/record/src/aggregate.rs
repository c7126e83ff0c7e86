//! Collection-year histogram over cleansed records.

use std::collections::BTreeMap;

use meteorite_map_record_models::{COLLECTION_YEAR, Record, YearCount};
use serde_json::Value;

/// Counts cleansed records per `collection_year`, most recent year first.
///
/// Records without an integer `collection_year` are not counted.
#[must_use]
pub fn aggregate_years(records: &[Record]) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, u64> = BTreeMap::new();
    let mut undated = 0usize;

    for record in records {
        let Some(year) = record
            .get(COLLECTION_YEAR)
            .and_then(Value::as_i64)
            .and_then(|year| i32::try_from(year).ok())
        else {
            undated += 1;
            continue;
        };

        *counts.entry(year).or_default() += 1;
    }

    log::info!(
        "Counted {} records across {} collection years ({undated} without a year)",
        records.len() - undated,
        counts.len()
    );

    counts
        .into_iter()
        .rev()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn counts_years_most_recent_first() {
        let records = vec![
            record(json!({ "collection_year": 1988 })),
            record(json!({ "collection_year": 2003 })),
            record(json!({ "collection_year": 1988 })),
            record(json!({ "collection_year": 1969 })),
            record(json!({ "collection_year": 2003 })),
            record(json!({ "collection_year": 1988 })),
        ];

        assert_eq!(
            aggregate_years(&records),
            vec![
                YearCount {
                    year: 2003,
                    count: 2
                },
                YearCount {
                    year: 1988,
                    count: 3
                },
                YearCount {
                    year: 1969,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn skips_records_without_integer_year() {
        let records = vec![
            record(json!({ "weight_gram": 1.0 })),
            record(json!({ "collection_year": "1990" })),
            record(json!({ "collection_year": 1990.5 })),
            record(json!({ "collection_year": 1990 })),
        ];

        assert_eq!(
            aggregate_years(&records),
            vec![YearCount {
                year: 1990,
                count: 1
            }]
        );
    }

    #[test]
    fn empty_input_yields_empty_histogram() {
        assert!(aggregate_years(&[]).is_empty());
    }

    #[test]
    fn serializes_as_year_and_count() {
        let json = serde_json::to_value(YearCount {
            year: 1995,
            count: 4,
        })
        .unwrap();
        assert_eq!(json, json!({ "year": 1995, "count": 4 }));
    }
}
