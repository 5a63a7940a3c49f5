//! Round-trip serialization test support
//!
//! Helpers for fixture-driven tests: decode a JSON fixture into a typed
//! value, re-encode it, and check the result is semantically equivalent to
//! the original. Equivalence ignores object key order and compares numbers
//! by value, so `1` and `1.0` do not count as a difference.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt::Debug;

/// Whether two JSON values are semantically equivalent.
pub fn json_semantically_equal(a: &Value, b: &Value) -> bool {
    first_difference(a, b).is_none()
}

/// The path of the first semantic difference between two JSON values.
///
/// Returns `None` when the values are equivalent. Paths are reported in a
/// JSONPath-like form, e.g. `$.entry[0].resource.status`.
pub fn first_difference(a: &Value, b: &Value) -> Option<String> {
    first_difference_at(a, b, "$")
}

fn first_difference_at(a: &Value, b: &Value, path: &str) -> Option<String> {
    match (a, b) {
        (Value::Object(left), Value::Object(right)) => {
            for (key, value) in left {
                match right.get(key) {
                    None => return Some(format!("{path}.{key}: missing on the right")),
                    Some(other) => {
                        let child = format!("{path}.{key}");
                        if let Some(difference) = first_difference_at(value, other, &child) {
                            return Some(difference);
                        }
                    }
                }
            }
            right
                .keys()
                .find(|key| !left.contains_key(key.as_str()))
                .map(|key| format!("{path}.{key}: missing on the left"))
        }
        (Value::Array(left), Value::Array(right)) => {
            if left.len() != right.len() {
                return Some(format!(
                    "{path}: array length {} != {}",
                    left.len(),
                    right.len()
                ));
            }
            left.iter()
                .zip(right)
                .enumerate()
                .find_map(|(index, (l, r))| {
                    first_difference_at(l, r, &format!("{path}[{index}]"))
                })
        }
        (Value::Number(left), Value::Number(right)) => {
            if numbers_equal(left, right) {
                None
            } else {
                Some(format!("{path}: {left} != {right}"))
            }
        }
        _ => {
            if a == b {
                None
            } else {
                Some(format!("{path}: values differ"))
            }
        }
    }
}

// Integer-valued decimals decode into f64 fields and re-encode as floats,
// so 185 and 185.0 must compare equal.
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a == b {
        return true;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Decode `original` into `T`, re-encode, and assert the re-encoded JSON is
/// semantically equivalent to the original. The re-encoded JSON is then
/// decoded again and compared to the first decode, so the mapping is also
/// checked for idempotence.
///
/// `label` names the fixture in panic messages.
pub fn assert_round_trip<T>(label: &str, original: &[u8])
where
    T: DeserializeOwned + Serialize + PartialEq + Debug,
{
    let original_value: Value = serde_json::from_slice(original)
        .unwrap_or_else(|err| panic!("{label}: fixture is not valid JSON: {err}"));

    let decoded: T = serde_json::from_slice(original)
        .unwrap_or_else(|err| panic!("{label}: failed to decode fixture: {err}"));

    let reencoded = serde_json::to_value(&decoded)
        .unwrap_or_else(|err| panic!("{label}: failed to re-encode: {err}"));

    if let Some(difference) = first_difference(&original_value, &reencoded) {
        panic!("{label}: re-encoded JSON differs from the original at {difference}");
    }

    let redecoded: T = serde_json::from_value(reencoded)
        .unwrap_or_else(|err| panic!("{label}: failed to decode re-encoded JSON: {err}"));

    assert_eq!(
        decoded, redecoded,
        "{label}: decoding the re-encoded JSON produced a different value"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[test]
    fn test_key_order_is_ignored() {
        let a: Value = serde_json::from_str(r#"{"a": 1, "b": 2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b": 2, "a": 1}"#).unwrap();
        assert!(json_semantically_equal(&a, &b));
    }

    #[test]
    fn test_numbers_compared_by_value() {
        let a: Value = serde_json::from_str(r#"{"value": 185}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"value": 185.0}"#).unwrap();
        assert!(json_semantically_equal(&a, &b));
    }

    #[test]
    fn test_difference_reports_path() {
        let a = json!({"entry": [{"resource": {"status": "final"}}]});
        let b = json!({"entry": [{"resource": {"status": "amended"}}]});
        assert_eq!(
            first_difference(&a, &b).as_deref(),
            Some("$.entry[0].resource.status: values differ")
        );
    }

    #[test]
    fn test_missing_key_is_a_difference() {
        let a = json!({"a": 1, "b": 2});
        let b = json!({"a": 1});
        assert_eq!(
            first_difference(&a, &b).as_deref(),
            Some("$.b: missing on the right")
        );
        assert_eq!(
            first_difference(&b, &a).as_deref(),
            Some("$.b: missing on the left")
        );
    }

    #[test]
    fn test_array_length_mismatch() {
        let a = json!([1, 2, 3]);
        let b = json!([1, 2]);
        assert!(first_difference(&a, &b).unwrap().contains("array length"));
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        score: Option<f64>,
    }

    #[test]
    fn test_assert_round_trip_passes() {
        assert_round_trip::<Sample>("sample", br#"{"name": "x", "score": 2}"#);
        assert_round_trip::<Sample>("sample-no-score", br#"{"name": "x"}"#);
    }

    #[test]
    #[should_panic(expected = "missing on the right")]
    fn test_assert_round_trip_catches_dropped_fields() {
        // Sample has no catch-all, so an unknown key is silently dropped on
        // decode and the re-encoded JSON no longer carries it.
        assert_round_trip::<Sample>("sample-extra", br#"{"name": "x", "extra": true}"#);
    }
}
