//! Граница с внешним API: приведение регистра ключей и терпимые десериализаторы.
//!
//! Внешний API смешивает `BoyutId` и `boyutId` в одном ответе. Все данные
//! входят через [`decode_list`], который сначала переводит ключи в camelCase,
//! поэтому DTO объявляют только camelCase-имена.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// `BoyutAdi` -> `boyutAdi`
pub fn camel_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Spelling variants of the same field: `(variant, canonical)`.
///
/// The API spells the short name `Allias` for some entities and `Alias` for
/// others, and sometimes sends both.
const FIELD_ALIASES: &[(&str, &str)] = &[
    ("boyutAlias", "boyutAllias"),
    ("kriterAllias", "kriterAlias"),
    ("gostergeAlias", "gostergeAllias"),
];

/// camelCase key with spelling variants folded to one name
pub fn canonical_key(key: &str) -> String {
    let key = camel_key(key);
    match FIELD_ALIASES.iter().find(|(variant, _)| *variant == key) {
        Some((_, canonical)) => canonical.to_string(),
        None => key,
    }
}

/// Rewrites every object key (recursively) to its canonical camelCase name.
///
/// When two keys collapse to the same name the first non-null value in key
/// order wins; PascalCase keys sort before their camelCase twins.
pub fn canonicalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                let key = canonical_key(&key);
                let val = canonicalize_keys(val);
                let replace = match out.get(&key) {
                    None => true,
                    Some(existing) => existing.is_null() && !val.is_null(),
                };
                if replace {
                    out.insert(key, val);
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize_keys).collect()),
        other => other,
    }
}

/// Decodes a response body into typed rows.
///
/// A body that is not an array yields an empty list; elements that fail to
/// decode are skipped.
pub fn decode_list<T: DeserializeOwned>(body: Value) -> Vec<T> {
    match canonicalize_keys(body) {
        Value::Array(items) => decode_items(items),
        Value::Null => Vec::new(),
        other => {
            log::warn!("expected a JSON array, got {}", kind_of(&other));
            Vec::new()
        }
    }
}

/// Decodes array elements, logging and skipping the ones that fail.
fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(row) => Some(row),
            Err(e) => {
                log::warn!("skipping malformed row: {}", e);
                None
            }
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Value coercions
// ============================================================================

pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// `null`, `""` and non-finite values are absent, like `Number(v)` guarded by
/// `isFinite`.
pub fn value_to_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) if s.trim().is_empty() => return None,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    n.is_finite().then_some(n)
}

pub fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| value_to_f64(value).map(|f| f as i64)),
        _ => value_to_f64(value).map(|f| f as i64),
    }
}

pub fn value_to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Field deserializers for `#[serde(default, deserialize_with = "...")]`.
pub mod lenient {
    use super::*;
    use serde::{Deserialize, Deserializer};

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(value_to_string(&Value::deserialize(d)?))
    }

    /// Empty strings count as absent.
    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let s = value_to_string(&Value::deserialize(d)?);
        Ok((!s.trim().is_empty()).then_some(s))
    }

    pub fn int<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        Ok(value_to_i64(&Value::deserialize(d)?).unwrap_or(0))
    }

    pub fn opt_int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        Ok(value_to_i64(&Value::deserialize(d)?))
    }

    /// Counts: negative and missing values become zero.
    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        Ok(value_to_i64(&Value::deserialize(d)?)
            .map(|n| n.clamp(0, u32::MAX as i64) as u32)
            .unwrap_or(0))
    }

    pub fn opt_count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        Ok(value_to_i64(&Value::deserialize(d)?).map(|n| n.clamp(0, u32::MAX as i64) as u32))
    }

    pub fn float<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(value_to_f64(&Value::deserialize(d)?).unwrap_or(0.0))
    }

    pub fn opt_float<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(value_to_f64(&Value::deserialize(d)?))
    }

    pub fn boolean<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        Ok(value_to_bool(&Value::deserialize(d)?).unwrap_or(false))
    }

    pub fn opt_boolean<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        Ok(value_to_bool(&Value::deserialize(d)?))
    }

    /// Non-arrays are empty; elements that fail to decode are skipped.
    pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => decode_items(items),
            _ => Vec::new(),
        })
    }

    /// Like [`list`], but keeps `None` for an absent/null field so callers can
    /// tell "not sent" from "sent empty".
    pub fn opt_list<'de, D, T>(d: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => Some(decode_items(items)),
            _ => None,
        })
    }

    /// Array of scalars, or a comma separated string.
    pub fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        let items: Vec<String> = match Value::deserialize(d)? {
            Value::Array(items) => items.iter().map(value_to_string).collect(),
            Value::String(s) => s.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        };
        Ok(items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}
