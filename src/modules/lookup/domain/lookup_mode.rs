use crate::modules::normalizer::NormalizerConfig;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Prefix forcing title mode in single-field input
pub const TITLE_PREFIX: &str = "t:";

/// Which pipeline a query goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    Author,
    Title,
}

impl LookupMode {
    /// Guesses the mode of single-field input
    ///
    /// A `t:` prefix forces title mode and is removed from the returned text.
    /// Otherwise a comma means `Surname, Given` and a leading article means a
    /// title. Anything else is treated as an author.
    pub fn detect<'a>(raw: &'a str, config: &NormalizerConfig) -> (Self, &'a str) {
        let trimmed = raw.trim();

        if let Some(prefix) = trimmed.get(..TITLE_PREFIX.len()) {
            if prefix.eq_ignore_ascii_case(TITLE_PREFIX) {
                return (LookupMode::Title, trimmed[TITLE_PREFIX.len()..].trim_start());
            }
        }

        if trimmed.contains(',') {
            return (LookupMode::Author, trimmed);
        }

        let first_word: String = trimmed
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();
        let has_more_words = trimmed.split_whitespace().nth(1).is_some();

        if has_more_words && config.is_leading_article(&first_word) {
            (LookupMode::Title, trimmed)
        } else {
            (LookupMode::Author, trimmed)
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupMode::Author => write!(f, "author"),
            LookupMode::Title => write!(f, "title"),
        }
    }
}

impl FromStr for LookupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "author" | "autor" | "a" => Ok(LookupMode::Author),
            "title" | "titulo" | "título" | "t" => Ok(LookupMode::Title),
            other => Err(format!("Unknown lookup mode: {}", other)),
        }
    }
}
