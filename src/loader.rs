//! Snapshot loader for table exports on local disk.
//!
//! Each table is stored as `<table>.json` or gzip-compressed `<table>.json.gz`
//! holding either a bare JSON array or a `{ "data": [...] }` wrapper. Rows are
//! decoded one at a time so a bad row is reported with its table and position.

use crate::config;
use crate::error::{GlobetrotterError, Result};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads table exports from a data directory.
pub struct SnapshotLoader {
    /// Directory holding the table files.
    pub data_dir: PathBuf,
}

impl SnapshotLoader {
    /// Create a loader for `data_dir`.
    ///
    /// If `data_dir` is `None`, uses the platform-appropriate default data directory.
    /// The directory is not required to exist until a table is loaded.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.unwrap_or_else(config::default_data_dir),
        }
    }

    /// Resolve the on-disk file for a table, preferring plain JSON over `.gz`.
    ///
    /// Returns `Ok(None)` when neither file exists.
    pub fn locate(&self, table: &str) -> Result<Option<PathBuf>> {
        let files = config::table_files();
        let filename = files.get(table).ok_or_else(|| {
            GlobetrotterError::NotFound(format!("Unknown table: {}", table))
        })?;

        let plain = self.data_dir.join(filename);
        if plain.exists() {
            return Ok(Some(plain));
        }
        let gz = self.data_dir.join(format!("{}.gz", filename));
        if gz.exists() {
            return Ok(Some(gz));
        }
        Ok(None)
    }

    /// Load and parse a table file (handles `.gz` transparently).
    pub fn load_json(&self, table: &str) -> Result<Value> {
        let path = self.locate(table)?.ok_or_else(|| {
            GlobetrotterError::NotFound(format!(
                "Table '{}' has no export in {}",
                table,
                self.data_dir.display()
            ))
        })?;
        read_json(&path)
    }

    /// Decode every row of `table` into `T`.
    ///
    /// A missing file is an error when `required`, otherwise an empty table.
    pub fn load_rows<T: DeserializeOwned>(&self, table: &str, required: bool) -> Result<Vec<T>> {
        if !required && self.locate(table)?.is_none() {
            debug!(table, "no export found, using empty table");
            return Ok(Vec::new());
        }
        let value = self.load_json(table)?;
        let rows = decode_rows(table, value)?;
        debug!(table, rows = rows.len(), "loaded table");
        Ok(rows)
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let mut buf_reader = BufReader::new(decoder);
        let mut contents = String::new();
        buf_reader.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Decode a table payload into typed rows.
///
/// Accepts a bare array or an object with a `data` array. Anything else, and
/// any row that does not fit `T`, is a [`GlobetrotterError::MalformedRecord`].
pub fn decode_rows<T: DeserializeOwned>(table: &str, value: Value) -> Result<Vec<T>> {
    let rows = match value {
        Value::Array(arr) => arr,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(arr)) => arr,
            _ => {
                return Err(GlobetrotterError::MalformedRecord {
                    table: table.to_string(),
                    index: 0,
                    reason: "expected an array or an object with a `data` array".to_string(),
                })
            }
        },
        other => {
            return Err(GlobetrotterError::MalformedRecord {
                table: table.to_string(),
                index: 0,
                reason: format!("expected an array, found {}", json_kind(&other)),
            })
        }
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::from_value(row).map_err(|e| GlobetrotterError::MalformedRecord {
                table: table.to_string(),
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
