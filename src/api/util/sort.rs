use std::cmp::Ordering;

use serde_json::Value;

use crate::api::dto::envelope::Record;
use crate::errors::SortError;

const ASCENDING: [&str; 2] = ["asc", "ascending"];
const DESCENDING: [&str; 2] = ["desc", "descending"];

/// Sort records by the value at `key`.
///
/// The direction is normalized case-insensitively and validated first;
/// empty input then returns empty without any key validation. The key is
/// checked against the first record only, since records within one result
/// set are structurally homogeneous.
///
/// The input is never mutated; a freshly ordered copy is returned.
pub fn sort_records(records: &[Record], key: &str, direction: &str) -> Result<Vec<Record>, SortError> {
    let direction = direction.to_lowercase();
    let ascending = if ASCENDING.contains(&direction.as_str()) {
        true
    } else if DESCENDING.contains(&direction.as_str()) {
        false
    } else {
        return Err(SortError::InvalidDirection(direction));
    };

    if records.is_empty() {
        return Ok(Vec::new());
    }

    if !records[0].contains_key(key) {
        return Err(SortError::MissingSortKey(key.to_string()));
    }

    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        compare_values(
            a.get(key).unwrap_or(&Value::Null),
            b.get(key).unwrap_or(&Value::Null),
        )
    });

    // Descending is the exact reverse of the ascending order, so tied runs
    // reverse too (a flipped comparator under a stable sort would not).
    if !ascending {
        sorted.reverse();
    }

    Ok(sorted)
}

/// Total order over JSON values: null < bool < number < string < array < object.
/// Numbers compare as f64, strings lexicographically, arrays elementwise then
/// by length; objects compare as equal among themselves.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => {
            for (xv, yv) in x.iter().zip(y.iter()) {
                let ord = compare_values(xv, yv);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn sorts_ascending_by_numeric_key() {
        let input = records(json!([
            {"id": 3, "name": "b"},
            {"id": 1, "name": "a"},
            {"id": 2, "name": "c"},
        ]));

        let sorted = sort_records(&input, "id", "asc").unwrap();
        let ids: Vec<u64> = sorted.iter().map(|r| r["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn descending_is_exact_reverse_of_ascending() {
        let input = records(json!([
            {"id": 2, "tag": "first"},
            {"id": 1, "tag": "x"},
            {"id": 2, "tag": "second"},
            {"id": 3, "tag": "y"},
        ]));

        let asc = sort_records(&input, "id", "asc").unwrap();
        let mut desc = sort_records(&input, "id", "descending").unwrap();
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn direction_is_case_insensitive() {
        let input = records(json!([{"id": 2}, {"id": 1}]));

        for direction in ["ASC", "Ascending", "DESC", "Descending"] {
            assert!(sort_records(&input, "id", direction).is_ok(), "{direction}");
        }
    }

    #[test]
    fn sorts_by_string_key() {
        let input = records(json!([
            {"name": "cherry"},
            {"name": "apple"},
            {"name": "banana"},
        ]));

        let sorted = sort_records(&input, "name", "asc").unwrap();
        let names: Vec<&str> = sorted.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn invalid_direction_fails_and_names_the_value() {
        let input = records(json!([{"id": 1}]));

        let err = sort_records(&input, "id", "bogus").unwrap_err();
        match err {
            SortError::InvalidDirection(direction) => assert_eq!(direction, "bogus"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_key_fails_on_non_empty_input() {
        let input = records(json!([{"id": 1}, {"id": 2}]));

        let err = sort_records(&input, "missingField", "asc").unwrap_err();
        match err {
            SortError::MissingSortKey(key) => assert_eq!(key, "missingField"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_returns_empty_without_key_validation() {
        let sorted = sort_records(&[], "definitely-not-a-field", "asc").unwrap();
        assert!(sorted.is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let input = records(json!([{"id": 2}, {"id": 1}]));
        let snapshot = input.clone();

        let _ = sort_records(&input, "id", "asc").unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn mixed_types_sort_by_kind_rank() {
        let input = records(json!([
            {"v": "text"},
            {"v": null},
            {"v": 10},
            {"v": true},
        ]));

        let sorted = sort_records(&input, "v", "asc").unwrap();
        let values: Vec<&Value> = sorted.iter().map(|r| &r["v"]).collect();
        assert_eq!(
            values,
            vec![&json!(null), &json!(true), &json!(10), &json!("text")]
        );
    }

    #[test]
    fn numbers_compare_across_integer_and_float() {
        let input = records(json!([
            {"price": 10},
            {"price": 2.5},
            {"price": 7},
        ]));

        let sorted = sort_records(&input, "price", "asc").unwrap();
        let prices: Vec<f64> = sorted.iter().map(|r| r["price"].as_f64().unwrap()).collect();
        assert_eq!(prices, vec![2.5, 7.0, 10.0]);
    }
}
