use crate::core::codepoint_string::CodepointString;
use crate::core::validation::unique_count;
use crate::encoders::errors::Error;
use std::collections::HashMap;
use std::fmt;

/// Number of characters every alphabet must hold.
pub const BASE: usize = 62;

/// Maps digit sequences to text and back.
pub trait Translator: fmt::Debug + Send + Sync {
    /// Renders each digit as its alphabet character.
    fn translate(&self, digits: &[u64]) -> String;

    /// Looks up the digit of every character in `text`.
    fn untranslate(&self, text: &str) -> Result<Vec<u64>, Error>;

    fn alphabet(&self) -> &CodepointString;
}

/// Translator over a 62-character alphabet of arbitrary Unicode characters.
#[derive(Debug, Clone)]
pub struct AlphabetTranslator {
    alphabet: CodepointString,
    char_to_index: HashMap<char, u64>,
}

impl AlphabetTranslator {
    /// Creates a translator for `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlphabet`] unless the alphabet has exactly 62
    /// characters, all of them distinct.
    pub fn new(alphabet: impl Into<CodepointString>) -> Result<Self, Error> {
        let alphabet = alphabet.into();
        let length = alphabet.len();
        let unique = unique_count(&alphabet);

        if length != BASE || unique != BASE {
            return Err(Error::InvalidAlphabet { length, unique });
        }

        let char_to_index = alphabet
            .iter()
            .enumerate()
            .map(|(i, c)| (c, i as u64))
            .collect();

        Ok(Self {
            alphabet,
            char_to_index,
        })
    }

    /// Digit value of a single character.
    pub fn digit_of(&self, c: char) -> Result<u64, Error> {
        self.char_to_index
            .get(&c)
            .copied()
            .ok_or(Error::CharacterNotFound(c))
    }
}

impl Translator for AlphabetTranslator {
    /// # Panics
    ///
    /// Panics if a digit is 62 or larger. Digits only come out of the radix
    /// converter, so this is a caller bug.
    fn translate(&self, digits: &[u64]) -> String {
        let mut result = String::with_capacity(digits.len() * 2);
        for &digit in digits {
            match usize::try_from(digit).map(|index| self.alphabet.char_at(index)) {
                Ok(Ok(c)) => result.push(c),
                _ => panic!("digit {} is outside the {}-character alphabet", digit, BASE),
            }
        }
        result
    }

    fn untranslate(&self, text: &str) -> Result<Vec<u64>, Error> {
        text.chars().map(|c| self.digit_of(c)).collect()
    }

    fn alphabet(&self) -> &CodepointString {
        &self.alphabet
    }
}
