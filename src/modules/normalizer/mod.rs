/// Normalizer module turning raw author and title headings into canonical
/// Cutter keys.
///
/// # Usage
///
/// ```rust
/// use cutter_lib::modules::normalizer::{from_author, from_title};
///
/// assert_eq!(from_author("Cervantes, Miguel de"), "cervantes");
/// assert_eq!(from_title("The Great Gatsby"), "greatgatsby");
/// ```
pub mod domain;

// Re-export main types
pub use domain::*;
