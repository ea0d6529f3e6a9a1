use crate::core::alphabets::ALPHABET_DEFAULT;
use crate::core::codepoint_string::CodepointString;
use crate::core::validation::consists_of;
use crate::encoders::errors::Error;
use crate::encoders::radix::{ConverterKind, RadixConverter};
use crate::encoders::translator::{AlphabetTranslator, BASE, Translator};

const BYTE_BASE: u64 = 256;
const DECIMAL_BASE: u64 = 10;
const TARGET_BASE: u64 = BASE as u64;

/// Base62 encoder for byte strings and unsigned integers.
///
/// A codec is immutable once built and can be shared between threads.
///
/// # Example
///
/// ```
/// use base62_cyr::{ALPHABET_CYR, Base62Codec};
///
/// let codec = Base62Codec::new(ALPHABET_CYR).unwrap();
/// let encoded = codec.encode(b"Hello");
/// assert_eq!(encoded, "еюшгшгЩ");
/// assert_eq!(codec.decode(&encoded).unwrap(), b"Hello");
/// ```
#[derive(Debug)]
pub struct Base62Codec<T: Translator = AlphabetTranslator> {
    translator: T,
    converter: Box<dyn RadixConverter>,
}

impl Base62Codec<AlphabetTranslator> {
    /// Creates a codec for `alphabet` using the default converter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAlphabet`] unless `alphabet` holds exactly 62
    /// distinct characters.
    pub fn new(alphabet: &str) -> Result<Self, Error> {
        Self::with_converter(alphabet, ConverterKind::default())
    }

    /// Creates a codec for `alphabet` using the given converter strategy.
    pub fn with_converter(alphabet: &str, converter: ConverterKind) -> Result<Self, Error> {
        let translator = AlphabetTranslator::new(alphabet)?;
        tracing::debug!(
            alphabet = %alphabet,
            converter = %converter,
            "building base62 codec"
        );
        Ok(Self::from_parts(translator, converter.build()))
    }
}

impl Default for Base62Codec<AlphabetTranslator> {
    fn default() -> Self {
        let translator = match AlphabetTranslator::new(ALPHABET_DEFAULT) {
            Ok(translator) => translator,
            Err(e) => unreachable!("built-in alphabet rejected: {:?}", e),
        };
        Self::from_parts(translator, ConverterKind::default().build())
    }
}

impl<T: Translator> Base62Codec<T> {
    /// Assembles a codec from an existing translator and converter.
    pub fn from_parts(translator: T, converter: Box<dyn RadixConverter>) -> Self {
        Self {
            translator,
            converter,
        }
    }

    /// The alphabet used for encoding.
    pub fn alphabet(&self) -> &CodepointString {
        self.translator.alphabet()
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Encodes `message` into a base62 string.
    ///
    /// Leading zero bytes are kept, one zero character per byte.
    pub fn encode(&self, message: &[u8]) -> String {
        if message.is_empty() {
            return String::new();
        }

        let digits: Vec<u64> = message.iter().map(|&b| u64::from(b)).collect();
        let converted = self.converter.convert(&digits, TARGET_BASE, BYTE_BASE);

        self.translator.translate(&converted)
    }

    /// Encodes the UTF-8 bytes of `message`.
    pub fn encode_str(&self, message: &str) -> String {
        self.encode(message.as_bytes())
    }

    /// Decodes a string produced by [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] listing every character that is not
    /// part of the alphabet.
    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, Error> {
        if encoded.is_empty() {
            return Ok(Vec::new());
        }

        let digits = self.validated_digits(encoded)?;
        let converted = self.converter.convert(&digits, BYTE_BASE, TARGET_BASE);

        // base 256 digits always fit a byte
        Ok(converted.into_iter().map(|digit| digit as u8).collect())
    }

    /// Decodes into a `String`, failing if the bytes are not UTF-8.
    pub fn decode_to_string(&self, encoded: &str) -> Result<String, Error> {
        String::from_utf8(self.decode(encoded)?).map_err(|_| Error::InvalidUtf8)
    }

    /// Encodes an integer. `None` encodes to an empty string.
    ///
    /// The value goes through the converter as a single base-256 digit, so
    /// the result is the plain base62 representation of the number.
    pub fn encode_integer(&self, value: Option<u64>) -> String {
        match value {
            None => String::new(),
            Some(value) => {
                let converted = self.converter.convert(&[value], TARGET_BASE, BYTE_BASE);
                self.translator.translate(&converted)
            }
        }
    }

    /// Decodes a string produced by [`encode_integer`](Self::encode_integer).
    /// An empty string decodes to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for characters outside the alphabet and
    /// [`Error::IntegerOverflow`] when the value exceeds `u64::MAX`.
    pub fn decode_integer(&self, encoded: &str) -> Result<Option<u64>, Error> {
        if encoded.is_empty() {
            return Ok(None);
        }

        let digits = self.validated_digits(encoded)?;
        let decimal = self.converter.convert(&digits, DECIMAL_BASE, TARGET_BASE);

        decimal
            .iter()
            .try_fold(0u64, |acc, &digit| {
                acc.checked_mul(DECIMAL_BASE)?.checked_add(digit)
            })
            .map(Some)
            .ok_or(Error::IntegerOverflow {
                digits: decimal.len(),
            })
    }

    fn validated_digits(&self, encoded: &str) -> Result<Vec<u64>, Error> {
        consists_of(self.alphabet(), &CodepointString::new(encoded))?;
        self.translator.untranslate(encoded)
    }
}
