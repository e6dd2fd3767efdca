//! Test data builders shared by the integration tests

use cutter_lib::modules::matcher::{CutterIndex, TableRow};
use cutter_lib::modules::normalizer::from_author;
use std::path::PathBuf;

/// Number of usable rows in `fixtures/cutter_sample.json`
pub const SAMPLE_ENTRY_COUNT: usize = 21;

pub fn sample_table_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("cutter_sample.json")
}

pub fn rows(pairs: &[(&str, &str)]) -> Vec<TableRow> {
    pairs
        .iter()
        .map(|(header, code)| TableRow::new(*header, *code))
        .collect()
}

/// Index over a handful of Brazilian authors, normalized as author headings
pub fn author_index() -> CutterIndex {
    CutterIndex::from_rows(
        rows(&[
            ("Ramos, Graciliano", "R175"),
            ("Amado, Jorge", "A481"),
            ("Lispector, Clarice", "L769"),
            ("Assis, Machado de", "A848"),
            ("Rosa, João Guimarães", "R788"),
        ]),
        from_author,
    )
}
