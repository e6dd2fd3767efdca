/// Maximum length, in characters, of a canonical key
pub const MAX_LEN: usize = 13;

/// Leading articles dropped from titles before canonicalization
pub const LEADING_ARTICLES: &[&str] = &[
    // PT-BR
    "o", "a", "os", "as", "um", "uma", "uns", "umas",
    // EN
    "the", "a", "an",
    // ES
    "el", "la", "los", "las", "un", "una", "unos", "unas",
    // FR/IT
    "le", "la", "les", "l", "il", "lo", "i", "gli", "un", "una",
];

/// Configuration for the key normalizer
///
/// Holds the values the pipeline treats as constants. They are fixed once the
/// normalizer is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Canonical keys are truncated to this many characters
    pub max_len: usize,

    /// Title tokens recognized as leading articles (lowercase, letters only)
    pub leading_articles: Vec<String>,
}

impl NormalizerConfig {
    pub fn new() -> Self {
        Self {
            max_len: MAX_LEN,
            leading_articles: LEADING_ARTICLES.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_len == 0 || self.max_len > MAX_LEN {
            return Err(format!(
                "max_len must be between 1 and {}, got {}",
                MAX_LEN, self.max_len
            ));
        }

        if let Some(bad) = self
            .leading_articles
            .iter()
            .find(|a| a.is_empty() || a.chars().any(|c| !c.is_alphabetic() || c.is_uppercase()))
        {
            return Err(format!(
                "leading articles must be non-empty lowercase words, got '{}'",
                bad
            ));
        }

        Ok(())
    }

    pub fn is_leading_article(&self, word: &str) -> bool {
        self.leading_articles.iter().any(|a| a == word)
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self::new()
    }
}
