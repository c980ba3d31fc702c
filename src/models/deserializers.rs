use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for optional integer bounds
///
/// Accepts integers, fractional numbers (truncated toward zero), numeric strings,
/// and `null` / `""` for "unbounded". Anything else is treated as unbounded too,
/// since the record may have been written by an older settings form.
pub fn deserialize_optional_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64),
        },
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| {
                        trimmed.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)
                    })
            }
        }
        _ => None,
    })
}

/// Custom deserializer for the status list
///
/// `null` reads as an empty list and non-string items are stringified so the
/// status normalizer can drop them.
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect()),
        Value::Null => Ok(Vec::new()),
        _ => Err(Error::custom("expected a list of strings")),
    }
}
