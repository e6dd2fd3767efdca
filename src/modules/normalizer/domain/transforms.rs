use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

// `\b` is ASCII-only here so that `St` followed by a non-ASCII letter still
// counts as the abbreviation.
static SAINT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)^\bste?\.?\b").expect("valid saint prefix pattern"));

static MAC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)^m(c|')").expect("valid mac prefix pattern"));

static PUNCTUATION_OR_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{S}]").expect("valid punctuation pattern"));

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}$").expect("valid decimal digit pattern"));

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Transformation applied to a heading on its way to a canonical key
///
/// Each transformation is composable and testable in isolation.
pub trait KeyTransformation: Send + Sync {
    fn transform(&self, text: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Decomposes to base letters plus combining marks, then drops the marks.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Replaces each decimal digit, in any script, with its English word.
///
/// Adjacent digits produce adjacent words with no separator, so `"84"`
/// becomes `"eightfour"`. Whitespace runs are collapsed to one space but the
/// ends are left untrimmed.
pub fn digits_to_words(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    for c in text.chars() {
        match decimal_digit_value(c) {
            Some(digit) => expanded.push_str(DIGIT_WORDS[digit]),
            None => expanded.push(c),
        }
    }
    squeeze_whitespace(&expanded)
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || (!c.is_ascii() && DECIMAL_DIGIT.is_match(c.encode_utf8(&mut [0; 4])))
}

/// Value of a `\p{Nd}` character.
///
/// Decimal digits are encoded in contiguous runs of ten, `0` through `9`,
/// and some runs sit back to back, so the value is the distance to the start
/// of the whole block modulo ten.
fn decimal_digit_value(c: char) -> Option<usize> {
    if let Some(digit) = c.to_digit(10) {
        return Some(digit as usize);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut offset = 0usize;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}

/// Whitespace as the table files treat it: Unicode `White_Space` plus the
/// byte order mark, which editors leave behind as a zero-width no-break space.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Expands `St`/`St.` to `saint`, `Ste`/`Ste.` to `sainte` and a leading
/// `Mc`/`M'` to `mac`. Only the start of the string is inspected.
pub fn normalize_leading_honorific(text: &str) -> String {
    let text = match SAINT_PREFIX.find(text) {
        Some(m) => {
            let expansion = if m.as_str().to_ascii_lowercase().starts_with("ste") {
                "sainte"
            } else {
                "saint"
            };
            format!("{}{}", expansion, &text[m.end()..])
        }
        None => text.to_string(),
    };

    MAC_PREFIX.replace(&text, "mac").into_owned()
}

/// Replaces every Unicode punctuation or symbol character with a space.
pub fn strip_punctuation_and_symbols(text: &str) -> String {
    PUNCTUATION_OR_SYMBOL.replace_all(text, " ").into_owned()
}

/// Collapses whitespace runs to a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}

fn squeeze_whitespace(text: &str) -> String {
    let mut squeezed = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if is_separator(c) {
            if !in_run {
                squeezed.push(' ');
            }
            in_run = true;
        } else {
            squeezed.push(c);
            in_run = false;
        }
    }
    squeezed
}

#[derive(Debug, Clone)]
pub struct StripDiacriticsTransform;

impl KeyTransformation for StripDiacriticsTransform {
    fn transform(&self, text: &str) -> String {
        strip_diacritics(text)
    }

    fn name(&self) -> &'static str {
        "StripDiacritics"
    }
}

#[derive(Debug, Clone)]
pub struct DigitsToWordsTransform;

impl KeyTransformation for DigitsToWordsTransform {
    fn transform(&self, text: &str) -> String {
        digits_to_words(text)
    }

    fn name(&self) -> &'static str {
        "DigitsToWords"
    }
}

#[derive(Debug, Clone)]
pub struct LeadingHonorificTransform;

impl KeyTransformation for LeadingHonorificTransform {
    fn transform(&self, text: &str) -> String {
        normalize_leading_honorific(text)
    }

    fn name(&self) -> &'static str {
        "LeadingHonorific"
    }
}

#[derive(Debug, Clone)]
pub struct StripPunctuationTransform;

impl KeyTransformation for StripPunctuationTransform {
    fn transform(&self, text: &str) -> String {
        strip_punctuation_and_symbols(text)
    }

    fn name(&self) -> &'static str {
        "StripPunctuation"
    }
}

#[derive(Debug, Clone)]
pub struct CollapseWhitespaceTransform;

impl KeyTransformation for CollapseWhitespaceTransform {
    fn transform(&self, text: &str) -> String {
        collapse_whitespace(text)
    }

    fn name(&self) -> &'static str {
        "CollapseWhitespace"
    }
}

#[derive(Debug, Clone)]
pub struct LowercaseTransform;

impl KeyTransformation for LowercaseTransform {
    fn transform(&self, text: &str) -> String {
        text.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "Lowercase"
    }
}

/// Removes all remaining whitespace, joining the words into one token
#[derive(Debug, Clone)]
pub struct JoinTokensTransform;

impl KeyTransformation for JoinTokensTransform {
    fn transform(&self, text: &str) -> String {
        text.chars().filter(|c| !is_separator(*c)).collect()
    }

    fn name(&self) -> &'static str {
        "JoinTokens"
    }
}

/// Keeps at most `max_len` characters
#[derive(Debug, Clone)]
pub struct TruncateTransform {
    max_len: usize,
}

impl TruncateTransform {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl KeyTransformation for TruncateTransform {
    fn transform(&self, text: &str) -> String {
        text.chars().take(self.max_len).collect()
    }

    fn name(&self) -> &'static str {
        "Truncate"
    }
}
