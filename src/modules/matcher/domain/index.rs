use super::comparator::{KeyComparator, OrdinalComparator};
use super::entities::{IndexedEntry, MatchKind, MatchResult, TableRow};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use serde::Deserialize;
use serde_json::Value;
use std::cmp::Ordering;

/// Number of entries shown on each side of a match
pub const DEFAULT_NEIGHBOR_RADIUS: usize = 3;

/// Sorted, read-only index over a Cutter–Sanborn table
///
/// Entries are ordered ascending by canonical key under `C`. The index is
/// built once and never mutated, so it can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct CutterIndex<C: KeyComparator = OrdinalComparator> {
    entries: Vec<IndexedEntry>,
    comparator: C,
}

impl CutterIndex<OrdinalComparator> {
    /// Build an index from a JSON dataset using ordinal key order
    ///
    /// # Errors
    /// Returns [`AppError::DatasetFormat`] if `rows` is not a JSON array.
    pub fn build<F>(rows: &Value, normalize: F) -> AppResult<Self>
    where
        F: Fn(&str) -> String,
    {
        Self::build_with(rows, normalize, OrdinalComparator)
    }

    /// Build an index from already typed rows using ordinal key order
    pub fn from_rows<I, F>(rows: I, normalize: F) -> Self
    where
        I: IntoIterator<Item = TableRow>,
        F: Fn(&str) -> String,
    {
        Self::from_rows_with(rows, normalize, OrdinalComparator)
    }
}

impl<C: KeyComparator> CutterIndex<C> {
    /// Build an index from a JSON dataset
    ///
    /// Elements that are not objects with string `headerText` (or `key`) and
    /// `code` fields are skipped, as are rows whose heading normalizes to an
    /// empty key.
    ///
    /// # Errors
    /// Returns [`AppError::DatasetFormat`] if `rows` is not a JSON array.
    /// This means the table itself is unusable and should abort startup.
    pub fn build_with<F>(rows: &Value, normalize: F, comparator: C) -> AppResult<Self>
    where
        F: Fn(&str) -> String,
    {
        let items = rows.as_array().ok_or_else(|| {
            AppError::DatasetFormat(format!(
                "expected an array of {{headerText, code}} rows, got {}",
                json_kind(rows)
            ))
        })?;

        let mut malformed = 0usize;
        let parsed: Vec<TableRow> = items
            .iter()
            .filter_map(|item| {
                let row = if item.is_object() {
                    TableRow::deserialize(item).ok()
                } else {
                    None
                };
                if row.is_none() {
                    malformed += 1;
                }
                row
            })
            .collect();

        if malformed > 0 {
            log::debug!("Skipped {} malformed table rows", malformed);
        }

        Ok(Self::from_rows_with(parsed, normalize, comparator))
    }

    /// Build an index from typed rows with an explicit comparator
    pub fn from_rows_with<I, F>(rows: I, normalize: F, comparator: C) -> Self
    where
        I: IntoIterator<Item = TableRow>,
        F: Fn(&str) -> String,
    {
        let timer = TimedOperation::new("Build Cutter index");

        let mut empty_keys = 0usize;
        let mut entries: Vec<IndexedEntry> = rows
            .into_iter()
            .filter_map(|row| {
                let norm_key = normalize(&row.header_text);
                if norm_key.is_empty() {
                    empty_keys += 1;
                    return None;
                }
                Some(IndexedEntry {
                    raw_key: row.header_text,
                    code: row.code,
                    norm_key,
                })
            })
            .collect();

        // Stable, so rows sharing a key keep their table order.
        entries.sort_by(|a, b| comparator.compare(&a.norm_key, &b.norm_key));

        if empty_keys > 0 {
            log::debug!("Skipped {} rows with an empty normalized key", empty_keys);
        }
        timer.finish_with_info(&format!(
            "{} entries, {} comparator",
            entries.len(),
            comparator.name()
        ));

        Self {
            entries,
            comparator,
        }
    }

    /// Position of the last entry whose key is not greater than `query`
    ///
    /// Returns `None` for an empty query, an empty index, or when every key
    /// sorts after the query.
    pub fn locate_position(&self, query: &str) -> Option<usize> {
        if query.is_empty() || self.entries.is_empty() {
            return None;
        }

        let after = self.entries.partition_point(|entry| {
            self.comparator.compare(&entry.norm_key, query) != Ordering::Greater
        });
        after.checked_sub(1)
    }

    /// Exact match if one exists, otherwise the immediately preceding entry
    pub fn find_best(&self, query: &str) -> Option<MatchResult<'_>> {
        let position = self.locate_position(query)?;
        let entry = &self.entries[position];
        let kind = if entry.norm_key == query {
            MatchKind::Exact
        } else {
            MatchKind::Preceding
        };

        Some(MatchResult {
            entry,
            position,
            kind,
        })
    }

    /// Entries within `radius` of `position`, the position itself included
    ///
    /// The window is clipped to the index bounds. Only meant for display;
    /// matching never looks at it.
    pub fn get_neighbors(&self, position: Option<usize>, radius: usize) -> &[IndexedEntry] {
        let Some(position) = position else {
            return &[];
        };
        if self.entries.is_empty() {
            return &[];
        }

        let start = position.saturating_sub(radius);
        let end = position
            .saturating_add(radius)
            .min(self.entries.len() - 1);
        if start > end {
            return &[];
        }

        &self.entries[start..=end]
    }

    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }
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
