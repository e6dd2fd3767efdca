use serde::{Deserialize, Serialize};

/// One row of the Cutter–Sanborn table: a standardized heading and its code
///
/// Older table files name the heading column `key`. When a row carries
/// both, `headerText` wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTableRow")]
pub struct TableRow {
    pub header_text: String,
    pub code: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTableRow {
    header_text: Option<String>,
    key: Option<String>,
    code: String,
}

impl TryFrom<RawTableRow> for TableRow {
    type Error = String;

    fn try_from(raw: RawTableRow) -> Result<Self, Self::Error> {
        let header_text = raw
            .header_text
            .or(raw.key)
            .ok_or_else(|| "missing field `headerText`".to_string())?;

        Ok(Self {
            header_text,
            code: raw.code,
        })
    }
}

impl TableRow {
    pub fn new(header_text: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            header_text: header_text.into(),
            code: code.into(),
        }
    }
}

/// A table row paired with its canonical key, as stored in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedEntry {
    pub raw_key: String,
    pub code: String,
    pub norm_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// The entry's key equals the query
    Exact,
    /// Nearest entry whose key sorts before the query
    Preceding,
}

/// Best entry found for a query, borrowed from the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchResult<'a> {
    pub entry: &'a IndexedEntry,
    pub position: usize,
    pub kind: MatchKind,
}

impl MatchResult<'_> {
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}
