//! Character statistics and alphabet membership checks.

use crate::core::codepoint_string::CodepointString;
use crate::encoders::errors::Error;
use std::collections::{HashMap, HashSet};

/// Builds a frequency table of the codepoints in `string`.
pub fn count_characters(string: &CodepointString) -> HashMap<char, usize> {
    let mut table = HashMap::with_capacity(string.len());
    for c in string.iter() {
        *table.entry(c).or_insert(0) += 1;
    }
    table
}

/// Number of distinct codepoints in `string`.
pub fn unique_count(string: &CodepointString) -> usize {
    count_characters(string).len()
}

/// Returns the characters of `subject` that are not in `alphabet`, each once,
/// in order of first occurrence.
///
/// The alphabet is removed from the subject as a character class; whatever
/// survives is the complement.
pub fn invalid_characters(
    alphabet: &CodepointString,
    subject: &CodepointString,
) -> Result<String, Error> {
    let remaining = subject.remove_any_of(alphabet)?;

    let mut seen = HashSet::new();
    Ok(remaining.iter().filter(|c| seen.insert(*c)).collect())
}

/// Checks that `subject` consists only of characters from `alphabet`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] listing the offending characters.
pub fn consists_of(alphabet: &CodepointString, subject: &CodepointString) -> Result<(), Error> {
    let invalid = invalid_characters(alphabet, subject)?;
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(Error::invalid_input(invalid))
    }
}
