//! Response envelope decoding
//!
//! Every app API response is wrapped as `{"status": "...", "results": ...}`.
//! Three result shapes are in use:
//! - standard: `results` deserializes straight into the target type
//! - map of values: `results.<field>` is an object whose keys carry no meaning
//! - tuple rows: `results` is a list of `[id, name]` pairs

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::api;
use crate::error::{MixpanelError, Result};

/// Response envelope shared by the app API
#[derive(Deserialize, Debug)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    pub results: T,
}

fn parse_envelope<T: DeserializeOwned>(body: &[u8], context: &str) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_slice(body)
        .map_err(|e| MixpanelError::decode(format!("{} response", context), e))?;

    if let Some(status) = envelope.status.as_deref() {
        if status != api::STATUS_OK {
            debug!("Response for {} reported status '{}'", context, status);
        }
    }

    Ok(envelope.results)
}

/// Decode the standard `{status, results: T}` shape
pub fn decode_results<T: DeserializeOwned>(body: &[u8], context: &str) -> Result<T> {
    parse_envelope(body, context)
}

/// Decode `results.<field>` as a map and keep only its values.
///
/// Values come back in map iteration order, which carries no meaning.
pub fn decode_map_values<T: DeserializeOwned>(body: &[u8], field: &str) -> Result<Vec<T>> {
    let results: Value = parse_envelope(body, field)?;

    let map = match results.get(field) {
        Some(Value::Object(map)) => map,
        Some(other) => return Err(MixpanelError::decode(format!("results.{}", field), other)),
        None => {
            return Err(MixpanelError::decode(
                format!("results.{}", field),
                "missing field",
            ))
        }
    };

    map.iter()
        .map(|(key, value)| {
            T::deserialize(value).map_err(|e| {
                MixpanelError::decode(format!("results.{}.{}", field, key), format!("{}: {}", e, value))
            })
        })
        .collect()
}

/// Decode `results` as a list of `[integer, string]` rows.
///
/// Fails on the first row whose id is not an integer-valued number or whose
/// name is not a string. Nothing is defaulted.
pub fn decode_tuple_rows(body: &[u8], context: &str) -> Result<Vec<(i64, String)>> {
    let rows: Vec<Value> = parse_envelope(body, context)?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| decode_row(index, row))
        .collect()
}

fn decode_row(index: usize, row: &Value) -> Result<(i64, String)> {
    let items = match row.as_array() {
        Some(items) if items.len() == 2 => items,
        _ => return Err(MixpanelError::decode(format!("results[{}]", index), row)),
    };

    let id = integer_value(&items[0])
        .ok_or_else(|| MixpanelError::decode(format!("results[{}][0]", index), &items[0]))?;
    let name = items[1]
        .as_str()
        .ok_or_else(|| MixpanelError::decode(format!("results[{}][1]", index), &items[1]))?;

    Ok((id, name.to_string()))
}

/// Integer-valued JSON number, accepting `5.0` but rejecting `5.5` and `"5"`
fn integer_value(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Item {
        id: i64,
        name: String,
    }

    fn bytes(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_decode_results_standard_shape() {
        let body = bytes(serde_json::json!({
            "status": "ok",
            "results": {"id": 7, "name": "seven"}
        }));
        let item: Item = decode_results(&body, "item").unwrap();
        assert_eq!(
            item,
            Item {
                id: 7,
                name: "seven".to_string()
            }
        );
    }

    #[test]
    fn test_decode_results_without_status() {
        let body = bytes(serde_json::json!({"results": {"id": 1, "name": "a"}}));
        assert!(decode_results::<Item>(&body, "item").is_ok());
    }

    #[test]
    fn test_decode_results_wrong_shape() {
        let body = bytes(serde_json::json!({"status": "ok", "results": [1, 2]}));
        let err = decode_results::<Item>(&body, "item").unwrap_err();
        match err {
            MixpanelError::Decode { field, .. } => assert_eq!(field, "item response"),
            _ => panic!("Expected MixpanelError::Decode"),
        }
    }

    #[test]
    fn test_decode_results_not_json() {
        let err = decode_results::<Item>(b"<html>", "item").unwrap_err();
        assert!(matches!(err, MixpanelError::Decode { .. }));
    }

    #[test]
    fn test_decode_map_values_discards_keys() {
        let body = bytes(serde_json::json!({
            "status": "ok",
            "results": {
                "organizations": {
                    "11": {"id": 11, "name": "first"},
                    "22": {"id": 22, "name": "second"}
                }
            }
        }));
        let mut items: Vec<Item> = decode_map_values(&body, "organizations").unwrap();
        items.sort_by_key(|i| i.id);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "first");
        assert_eq!(items[1].name, "second");
    }

    #[test]
    fn test_decode_map_values_empty_map() {
        let body = bytes(serde_json::json!({"results": {"organizations": {}}}));
        let items: Vec<Item> = decode_map_values(&body, "organizations").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_decode_map_values_missing_field() {
        let body = bytes(serde_json::json!({"results": {}}));
        let err = decode_map_values::<Item>(&body, "organizations").unwrap_err();
        match err {
            MixpanelError::Decode { field, .. } => assert_eq!(field, "results.organizations"),
            _ => panic!("Expected MixpanelError::Decode"),
        }
    }

    #[test]
    fn test_decode_map_values_bad_entry_names_key() {
        let body = bytes(serde_json::json!({
            "results": {"organizations": {"9": {"id": "nine", "name": "x"}}}
        }));
        let err = decode_map_values::<Item>(&body, "organizations").unwrap_err();
        match err {
            MixpanelError::Decode { field, value } => {
                assert_eq!(field, "results.organizations.9");
                assert!(value.contains("nine"));
            }
            _ => panic!("Expected MixpanelError::Decode"),
        }
    }

    #[test]
    fn test_decode_tuple_rows() {
        let body = bytes(serde_json::json!({
            "status": "ok",
            "results": [[1, "America/New_York"], [5, "UTC"], [9.0, "Europe/Paris"]]
        }));
        let rows = decode_tuple_rows(&body, "timezones").unwrap();
        assert_eq!(
            rows,
            vec![
                (1, "America/New_York".to_string()),
                (5, "UTC".to_string()),
                (9, "Europe/Paris".to_string()),
            ]
        );
    }

    #[test]
    fn test_decode_tuple_rows_string_id_is_rejected() {
        let body = bytes(serde_json::json!({"results": [[1, "UTC"], ["x", "Europe/Paris"]]}));
        let err = decode_tuple_rows(&body, "timezones").unwrap_err();
        match err {
            MixpanelError::Decode { field, value } => {
                assert_eq!(field, "results[1][0]");
                assert_eq!(value, "\"x\"");
            }
            _ => panic!("Expected MixpanelError::Decode"),
        }
    }

    #[test]
    fn test_decode_tuple_rows_fractional_id_is_rejected() {
        let body = bytes(serde_json::json!({"results": [[1.5, "UTC"]]}));
        let err = decode_tuple_rows(&body, "timezones").unwrap_err();
        assert!(matches!(err, MixpanelError::Decode { field, .. } if field == "results[0][0]"));
    }

    #[test]
    fn test_decode_tuple_rows_non_string_name_is_rejected() {
        let body = bytes(serde_json::json!({"results": [[1, 42]]}));
        let err = decode_tuple_rows(&body, "timezones").unwrap_err();
        match err {
            MixpanelError::Decode { field, value } => {
                assert_eq!(field, "results[0][1]");
                assert_eq!(value, "42");
            }
            _ => panic!("Expected MixpanelError::Decode"),
        }
    }

    #[test]
    fn test_decode_tuple_rows_wrong_arity() {
        let body = bytes(serde_json::json!({"results": [[1]]}));
        let err = decode_tuple_rows(&body, "timezones").unwrap_err();
        assert!(matches!(err, MixpanelError::Decode { field, .. } if field == "results[0]"));
    }

    #[test]
    fn test_decode_tuple_rows_null_id_is_not_zero() {
        let body = bytes(serde_json::json!({"results": [[null, "UTC"]]}));
        assert!(decode_tuple_rows(&body, "timezones").is_err());
    }
}
