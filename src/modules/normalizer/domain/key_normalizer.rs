use super::config::NormalizerConfig;
use super::transforms::{
    CollapseWhitespaceTransform, DigitsToWordsTransform, JoinTokensTransform, KeyTransformation,
    LeadingHonorificTransform, LowercaseTransform, StripDiacriticsTransform,
    StripPunctuationTransform, TruncateTransform,
};
use std::sync::LazyLock;

const LEADING_QUOTES: &[char] = &['\'', '"', '“', '”', '‘', '’'];

static DEFAULT_NORMALIZER: LazyLock<KeyNormalizer> = LazyLock::new(KeyNormalizer::default);

/// Turns author and title headings into canonical Cutter keys
///
/// Runs a pipeline of transformations built with the builder methods. The
/// canonical pipeline is what both the table and user queries go through,
/// so the two sides always compare like with like.
pub struct KeyNormalizer {
    config: NormalizerConfig,
    transformations: Vec<Box<dyn KeyTransformation>>,
}

impl KeyNormalizer {
    /// Create a normalizer with an empty pipeline
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            transformations: Vec::new(),
        }
    }

    /// Create a normalizer running the full canonical-key pipeline
    pub fn canonical(config: NormalizerConfig) -> Self {
        let max_len = config.max_len;
        Self::new(config)
            .with(StripDiacriticsTransform)
            .with(DigitsToWordsTransform)
            .with(LeadingHonorificTransform)
            .with(StripPunctuationTransform)
            .with(CollapseWhitespaceTransform)
            .with(LowercaseTransform)
            .with(JoinTokensTransform)
            .with(TruncateTransform::new(max_len))
    }

    /// Append a transformation to the pipeline
    pub fn with<T: KeyTransformation + 'static>(mut self, transformation: T) -> Self {
        self.transformations.push(Box::new(transformation));
        self
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Run the pipeline over an already extracted base string
    pub fn canonicalize(&self, base: &str) -> String {
        let mut result = base.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    pub fn from_author(&self, input: &str) -> String {
        self.canonicalize(surname_of(input))
    }

    pub fn from_title(&self, input: &str) -> String {
        self.canonicalize(self.strip_leading_article(input))
    }

    /// Drops leading quotes and a leading article from a title
    ///
    /// The first word is compared lowercased and stripped of non-letters, so
    /// `"L'` and `The` both qualify. A title that is a single word is
    /// returned as is, even when that word is an article.
    pub fn strip_leading_article<'a>(&self, title: &'a str) -> &'a str {
        let trimmed = title.trim().trim_start_matches(LEADING_QUOTES);

        let Some((first, rest)) = trimmed.split_once(char::is_whitespace) else {
            return trimmed;
        };
        if first.is_empty() {
            return trimmed;
        }

        let word: String = first
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();

        if self.config.is_leading_article(&word) {
            rest.trim_start()
        } else {
            trimmed
        }
    }

    /// Get the number of transformations in the pipeline
    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for KeyNormalizer {
    fn default() -> Self {
        Self::canonical(NormalizerConfig::default())
    }
}

/// Extracts the surname from `"Surname, Given"` or free-form author text.
pub fn surname_of(author: &str) -> &str {
    if let Some((surname, _)) = author.split_once(',') {
        return surname.trim();
    }

    let trimmed = author.trim();
    trimmed.split_whitespace().next().unwrap_or(trimmed)
}

/// [`KeyNormalizer::strip_leading_article`] with the default article list.
pub fn strip_leading_article(title: &str) -> &str {
    DEFAULT_NORMALIZER.strip_leading_article(title)
}

/// Canonical key for a base string, using the default configuration.
pub fn canonicalize(base: &str) -> String {
    DEFAULT_NORMALIZER.canonicalize(base)
}

/// Canonical key for an author heading, using the default configuration.
pub fn from_author(input: &str) -> String {
    DEFAULT_NORMALIZER.from_author(input)
}

/// Canonical key for a title, using the default configuration.
pub fn from_title(input: &str) -> String {
    DEFAULT_NORMALIZER.from_title(input)
}
