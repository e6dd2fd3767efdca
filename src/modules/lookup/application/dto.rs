use crate::modules::lookup::domain::LookupMode;
use crate::modules::matcher::{IndexedEntry, MatchKind, MatchResult};
use serde::Serialize;

/// Everything a front end needs to render one lookup
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOutcome<'a> {
    /// Trimmed user input, without any mode prefix
    pub input: String,
    pub mode: LookupMode,
    pub normalized_key: String,
    pub best: Option<MatchResult<'a>>,
    pub neighbors: &'a [IndexedEntry],
    pub total_entries: usize,
}

impl LookupOutcome<'_> {
    pub fn code(&self) -> Option<&str> {
        self.best.map(|m| m.entry.code.as_str())
    }

    /// One-line description of how the code was chosen
    pub fn explanation(&self) -> String {
        match self.best {
            Some(m) if m.kind == MatchKind::Exact => "Exact match".to_string(),
            Some(m) => format!(
                "Immediately preceding entry (largest key <= query). Position: {} of {}",
                m.position + 1,
                self.total_entries
            ),
            None => "No entry <= normalized key. Check spelling/normalization.".to_string(),
        }
    }
}
