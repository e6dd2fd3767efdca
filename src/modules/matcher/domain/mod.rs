pub mod comparator;
pub mod entities;
pub mod index;

pub use comparator::{KeyComparator, OrdinalComparator};
pub use entities::{IndexedEntry, MatchKind, MatchResult, TableRow};
pub use index::{CutterIndex, DEFAULT_NEIGHBOR_RADIUS};
