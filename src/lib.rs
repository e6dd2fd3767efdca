//! Cutter–Sanborn shelf code lookup.
//!
//! Author and title headings are reduced to short canonical keys by the
//! [`normalizer`](modules::normalizer) and looked up in a sorted
//! [`CutterIndex`], which returns the exact entry or the one immediately
//! preceding the query.

pub mod modules;
pub mod shared;

// The operations and constants front ends are built on
pub use modules::lookup::{LookupMode, LookupOutcome, LookupService};
pub use modules::matcher::{CutterIndex, IndexedEntry, MatchKind, MatchResult, TableRow};
pub use modules::normalizer::{from_author, from_title, LEADING_ARTICLES, MAX_LEN};
pub use shared::{AppError, AppResult, CutterConfig};
