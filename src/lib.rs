//! Reversible Base62 encoding of byte strings and integers over pluggable
//! 62-character alphabets, including multi-byte ones such as Cyrillic.
//!
//! ```
//! use base62_cyr::{ALPHABET_CYR, Base62Codec};
//!
//! let codec = Base62Codec::new(ALPHABET_CYR).unwrap();
//! assert_eq!(codec.encode_integer(Some(123)), "бЯ");
//! assert_eq!(codec.decode_integer("бЯ").unwrap(), Some(123));
//! ```

mod core;
mod encoders;

pub mod prelude;

pub use crate::core::alphabets::{
    ALPHABET_CYR, ALPHABET_CYR_REVERSED, ALPHABET_DEFAULT, ALPHABET_DEFAULT_REVERSED, BUILTIN,
};
pub use crate::core::codepoint_string::CodepointString;
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, DEFAULT_ALPHABET_NAME, Settings};
pub use crate::core::validation::{consists_of, count_characters, invalid_characters, unique_count};
pub use crate::encoders::codec::Base62Codec;
pub use crate::encoders::radix::{BigIntConverter, ConverterKind, LongDivision, RadixConverter};
pub use crate::encoders::translator::{AlphabetTranslator, BASE, Translator};
pub use crate::encoders::{AlphabetNotFoundError, Error, find_closest_alphabet};

/// Encodes `data` with the default alphanumeric alphabet.
pub fn encode(data: &[u8]) -> String {
    Base62Codec::default().encode(data)
}

/// Decodes `encoded` with the default alphanumeric alphabet.
pub fn decode(encoded: &str) -> Result<Vec<u8>, Error> {
    Base62Codec::default().decode(encoded)
}

#[cfg(test)]
mod tests;
