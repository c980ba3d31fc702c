use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::models::{CatalogRecord, TitleId};

/// Loose row shape: titles may be `null` in hand-edited or older dumps.
#[derive(Debug, Deserialize)]
struct RawRecord {
    id: TitleId,
    #[serde(default)]
    romaji: Option<String>,
    #[serde(default)]
    english: Option<String>,
}

impl From<RawRecord> for CatalogRecord {
    fn from(raw: RawRecord) -> Self {
        Self {
            id: raw.id,
            romaji: raw.romaji.unwrap_or_default(),
            english: raw.english.unwrap_or_default(),
        }
    }
}

/// Parse catalog JSON and return its rows
///
/// Accepts either an array of `{id, romaji, english}` objects or an object
/// keyed by id with `{romaji, english}` values. Malformed rows are logged and
/// skipped. Returns an error if more than 50% of rows fail to parse.
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogRecord>> {
    let value: Value = serde_json::from_str(json).context("Catalog is not valid JSON")?;

    let rows: Vec<Value> = match value {
        Value::Array(items) => items,
        Value::Object(map) => map
            .into_iter()
            .map(|(key, mut row)| {
                if let Value::Object(fields) = &mut row
                    && !fields.contains_key("id")
                    && let Ok(id) = key.parse::<TitleId>()
                {
                    fields.insert("id".to_string(), Value::from(id));
                }
                row
            })
            .collect(),
        _ => bail!("Catalog must be a JSON array or object"),
    };

    let total = rows.len();
    let mut records = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for (position, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<RawRecord>(row) {
            Ok(raw) => records.push(CatalogRecord::from(raw)),
            Err(e) => {
                warn!("Skipping catalog row {}: {}", position + 1, e);
                skipped += 1;
            }
        }
    }

    if total > 0 {
        let failure_rate = skipped as f64 / total as f64;
        if failure_rate > 0.5 {
            bail!(
                "Too many malformed catalog rows: {} of {} failed ({:.1}%)",
                skipped,
                total,
                failure_rate * 100.0
            );
        }
    }

    debug!("Parsed catalog: {} rows ({} skipped)", records.len(), skipped);
    Ok(records)
}

/// Read and parse a catalog file
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog(&json).with_context(|| format!("Failed to load catalog: {}", path.display()))
}

/// Write the catalog atomically as a pretty JSON array
pub fn save_catalog(path: &Path, records: &[CatalogRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).context("Failed to create catalog directory")?;
    }

    let temp = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(records).context("Failed to serialize catalog")?;
    fs::write(&temp, json).context("Failed to write catalog temp file")?;
    fs::rename(&temp, path).context("Failed to rename catalog temp file")?;
    Ok(())
}
