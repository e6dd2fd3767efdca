/// Sorted-index matcher answering exact-or-preceding Cutter lookups.
///
/// # Usage
///
/// ```rust
/// use cutter_lib::modules::matcher::{CutterIndex, MatchKind, TableRow};
/// use cutter_lib::modules::normalizer::from_author;
///
/// let index = CutterIndex::from_rows(
///     vec![TableRow::new("Amado", "A481"), TableRow::new("Cervantes", "C419")],
///     from_author,
/// );
///
/// let best = index.find_best(&from_author("Castro")).unwrap();
/// assert_eq!(best.entry.code, "A481");
/// assert_eq!(best.kind, MatchKind::Preceding);
/// ```
pub mod domain;

// Re-export main types
pub use domain::*;
