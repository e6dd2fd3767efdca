use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a Cutter–Sanborn table from a JSON file
///
/// The returned value is handed to `CutterIndex::build` as is; checking that
/// it is an array of rows is the index's job.
pub fn load_table(path: &Path) -> AppResult<Value> {
    let timer = TimedOperation::new("Load Cutter table");

    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => AppError::DatasetNotFound(path.display().to_string()),
        _ => AppError::Io(format!("{}: {}", path.display(), err)),
    })?;

    let table = parse_table(&contents)?;

    if let Some(rows) = table.as_array() {
        LogContext::dataset_loaded(&path.display().to_string(), rows.len());
    }
    timer.finish();

    Ok(table)
}

/// Parses a table from JSON text
pub fn parse_table(contents: &str) -> AppResult<Value> {
    // Some exported tables start with a byte order mark.
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    Ok(serde_json::from_str(contents)?)
}
