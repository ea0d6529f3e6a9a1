//! Convenient re-exports for common usage.
//!
//! ```
//! use base62_cyr::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let codec = registry.codec("cyrillic").unwrap();
//! assert_eq!(codec.decode(&codec.encode(b"\x00hi")).unwrap(), b"\x00hi");
//! ```

pub use crate::{
    // Alphabets
    ALPHABET_CYR,
    ALPHABET_CYR_REVERSED,
    ALPHABET_DEFAULT,
    ALPHABET_DEFAULT_REVERSED,
    AlphabetRegistry,
    AlphabetTranslator,

    // Codec
    Base62Codec,
    CodepointString,
    ConverterKind,
    Error,
    RadixConverter,
    Translator,
    decode,
    encode,
};
