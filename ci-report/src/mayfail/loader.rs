//! Report loading — reads mayfail JSON files, skipping anything unusable.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::types::FailureRecord;
use crate::error::LoadError;

/// Load the failure records of a single report file.
///
/// Elements of the top-level array that are not JSON objects are dropped
/// individually; the rest of the file is still used.
pub fn load_report(path: impl AsRef<Path>) -> Result<Vec<FailureRecord>, LoadError> {
    let path = path.as_ref();

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LoadError::Missing(path.to_path_buf()))
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if metadata.len() == 0 {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let raw = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_slice(&raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::NotAnArray {
                path: path.to_path_buf(),
                found: json_kind(&other),
            })
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<FailureRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => debug!(
                path = %path.display(),
                index,
                error = %e,
                "Skipping malformed failure record"
            ),
        }
    }

    Ok(records)
}

/// Load and concatenate the records of every report, in argument order.
///
/// Unusable files contribute nothing; the reason is logged at debug level.
pub fn load_failures<P: AsRef<Path>>(paths: &[P]) -> Vec<FailureRecord> {
    let mut failures = Vec::new();
    for path in paths {
        match load_report(path) {
            Ok(records) => {
                debug!(
                    path = %path.as_ref().display(),
                    count = records.len(),
                    "Loaded mayfail report"
                );
                failures.extend(records);
            }
            Err(e) => debug!(path = %e.path().display(), "Skipping report: {e}"),
        }
    }
    failures
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
