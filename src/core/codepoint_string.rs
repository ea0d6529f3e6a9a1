use crate::encoders::errors::Error;
use regex::{NoExpand, Regex};
use std::fmt;

/// Immutable string indexed by Unicode codepoint instead of by byte.
///
/// Alphabets such as Cyrillic take two bytes per character in UTF-8, so
/// digit lookups have to go through codepoint positions. The codepoints are
/// decoded once at construction and kept next to the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodepointString {
    raw: String,
    chars: Vec<char>,
}

impl CodepointString {
    /// Creates a new string from raw UTF-8 text.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let chars = raw.chars().collect();
        Self { raw, chars }
    }

    /// Length in codepoints.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Length in bytes of the UTF-8 encoding.
    pub fn byte_len(&self) -> usize {
        self.raw.len()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the codepoint at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= self.len()`.
    pub fn char_at(&self, index: usize) -> Result<char, Error> {
        self.chars.get(index).copied().ok_or(Error::OutOfRange {
            index,
            length: self.len(),
        })
    }

    /// Whether `needle` occurs in the string. An empty needle never matches.
    pub fn contains(&self, needle: &str) -> bool {
        !needle.is_empty() && self.raw.contains(needle)
    }

    /// Codepoint index of the first occurrence of `character`.
    pub fn index_of(&self, character: char) -> Option<usize> {
        self.chars.iter().position(|&c| c == character)
    }

    /// Codepoint index of the first occurrence of `needle`.
    pub fn find(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.raw
            .find(needle)
            .map(|byte_index| self.raw[..byte_index].chars().count())
    }

    /// Replaces every match of `pattern` with the literal `replacement`.
    pub fn replace(&self, pattern: &Regex, replacement: &str) -> CodepointString {
        Self::new(pattern.replace_all(&self.raw, NoExpand(replacement)))
    }

    /// Removes every run of characters matching the character-class body
    /// `class` (the part between `[` and `]`).
    pub fn remove_class(&self, class: &str) -> Result<CodepointString, Error> {
        let pattern =
            Regex::new(&format!("[{}]+", class)).map_err(|e| Error::Pattern(e.to_string()))?;
        Ok(self.replace(&pattern, ""))
    }

    /// Removes every character that also occurs in `set`.
    ///
    /// Characters of `set` are escaped before being placed in the class, so
    /// regex metacharacters such as `]`, `-` or `^` are matched literally.
    pub fn remove_any_of(&self, set: &CodepointString) -> Result<CodepointString, Error> {
        if set.is_empty() {
            return Ok(self.clone());
        }
        let class: String = set
            .chars
            .iter()
            .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();
        self.remove_class(&class)
    }

    /// Splits the string into single-character strings.
    pub fn as_char_array(&self) -> Vec<String> {
        self.chars.iter().map(|c| c.to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl fmt::Display for CodepointString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for CodepointString {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for CodepointString {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for CodepointString {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
