use std::cmp::Ordering;

/// Ordering used to sort and search canonical keys
///
/// The same comparator must drive both index construction and lookup, or the
/// binary search reads a differently ordered sequence than the one built.
/// Implementations must be a total order.
pub trait KeyComparator: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;

    /// Get the name of this comparator for logging/debugging
    fn name(&self) -> &'static str;
}

/// Unicode code point order
///
/// Deterministic on every platform and locale. For UTF-8 strings this is the
/// same as byte order, so it is plain `str` comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalComparator;

impl KeyComparator for OrdinalComparator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }

    fn name(&self) -> &'static str {
        "Ordinal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_orders_lowercase_ascii_alphabetically() {
        let comparator = OrdinalComparator;
        assert_eq!(comparator.compare("abbot", "abel"), Ordering::Less);
        assert_eq!(comparator.compare("cervantes", "cervantes"), Ordering::Equal);
        assert_eq!(comparator.compare("zola", "amado"), Ordering::Greater);
    }

    #[test]
    fn test_ordinal_prefix_sorts_first() {
        let comparator = OrdinalComparator;
        assert_eq!(comparator.compare("mac", "macdonald"), Ordering::Less);
    }

    #[test]
    fn test_ordinal_places_non_ascii_after_ascii() {
        let comparator = OrdinalComparator;
        assert_eq!(comparator.compare("große", "grosz"), Ordering::Greater);
        assert_eq!(comparator.compare("ørsted", "zola"), Ordering::Greater);
    }

    #[test]
    fn test_empty_string_sorts_first() {
        assert_eq!(OrdinalComparator.compare("", "a"), Ordering::Less);
    }
}
