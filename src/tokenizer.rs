//! Word segmentation.
//!
//! Turns validated text into lowercase ASCII word tokens. Boundaries come from
//! separator characters and from uppercase letters inside camelCase or
//! PascalCase words. A fragment without any lowercase letter (`SCREEN`) is
//! one word.

use regex::Regex;
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use crate::validator::{ValidatedString, ValidationPolicy};

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("separator pattern is valid"));

static SEPARATORS_WITH_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_.-]+").expect("separator pattern is valid"));

/// Split a separator-free fragment before every uppercase letter that follows
/// a letter or digit. All-caps fragments are returned whole.
fn split_case_transitions(fragment: &str) -> Vec<&str> {
    if !fragment.bytes().any(|b| b.is_ascii_lowercase()) {
        return vec![fragment];
    }

    let mut words = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (i, c) in fragment.char_indices() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_alphanumeric()) {
            words.push(&fragment[start..i]);
            start = i;
        }
        prev = Some(c);
    }
    words.push(&fragment[start..]);
    words
}

/// A single word: non-empty, ASCII lowercase letters and digits only
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordToken(String);

impl WordToken {
    /// Build a token from a raw fragment, stripping disallowed characters.
    ///
    /// Returns `None` when nothing usable is left, or when `require_letter` is
    /// set and only digits are left.
    #[must_use]
    pub fn from_fragment(fragment: &str, require_letter: bool) -> Option<Self> {
        let cleaned: String = fragment
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();

        if cleaned.is_empty() {
            return None;
        }
        if require_letter && !cleaned.bytes().any(|b| b.is_ascii_lowercase()) {
            return None;
        }
        Some(Self(cleaned))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The token with its first character upper-cased
    #[must_use]
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl Deref for WordToken {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered words in left-to-right order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence(Vec<WordToken>);

impl TokenSequence {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordToken> {
        self.0.iter()
    }

    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        self.0
            .iter()
            .map(WordToken::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Plain strings, for callers that don't care about the token type
    #[must_use]
    pub fn into_strings(self) -> Vec<String> {
        self.0.into_iter().map(|token| token.0).collect()
    }
}

impl FromIterator<WordToken> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = WordToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a WordToken;
    type IntoIter = std::slice::Iter<'a, WordToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    policy: ValidationPolicy,
    split_on_dots: bool,
}

impl Tokenizer {
    #[must_use]
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            split_on_dots: false,
        }
    }

    /// Treat `.` as a word separator in addition to whitespace, `-` and `_`
    #[must_use]
    pub fn split_on_dots(mut self, enabled: bool) -> Self {
        self.split_on_dots = enabled;
        self
    }

    fn separators(&self) -> &'static Regex {
        if self.split_on_dots {
            &*SEPARATORS_WITH_DOTS
        } else {
            &*SEPARATORS
        }
    }

    #[must_use]
    pub fn tokenize(&self, text: &ValidatedString) -> TokenSequence {
        self.tokenize_str(text.as_str())
    }

    pub(crate) fn tokenize_str(&self, text: &str) -> TokenSequence {
        let require_letter = self.policy.is_strict();

        self.separators()
            .split(text)
            .flat_map(split_case_transitions)
            .filter_map(|word| WordToken::from_fragment(&word.to_lowercase(), require_letter))
            .collect()
    }
}
