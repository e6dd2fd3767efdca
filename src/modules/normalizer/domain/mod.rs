pub mod config;
pub mod key_normalizer;
pub mod transforms;

pub use config::{NormalizerConfig, LEADING_ARTICLES, MAX_LEN};
pub use key_normalizer::{
    canonicalize, from_author, from_title, strip_leading_article, surname_of, KeyNormalizer,
};
pub use transforms::{
    collapse_whitespace, digits_to_words, normalize_leading_honorific, strip_diacritics,
    strip_punctuation_and_symbols, KeyTransformation,
};
