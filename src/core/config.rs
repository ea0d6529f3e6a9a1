use crate::encoders::codec::Base62Codec;
use crate::encoders::errors::{AlphabetNotFoundError, find_closest_alphabet};
use crate::encoders::radix::ConverterKind;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Name of the alphabet used when neither the caller nor the settings pick one.
pub const DEFAULT_ALPHABET_NAME: &str = "base62";

/// Configuration for a single alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 62 characters of the alphabet, in digit order
    pub chars: String,
    /// Converter strategy for this alphabet, overriding the global setting
    #[serde(default)]
    pub converter: Option<ConverterKind>,
    /// Free-form description shown by `--list`
    #[serde(default)]
    pub description: Option<String>,
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Alphabet used when none is requested explicitly
    #[serde(default)]
    pub default_alphabet: Option<String>,
    /// Converter strategy used when an alphabet does not name one
    #[serde(default)]
    pub converter: Option<ConverterKind>,
}

/// Named alphabets loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the alphabets bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets
    /// 2. `~/.config/base62-cyr/alphabets.toml`
    /// 3. `./alphabets.toml`
    ///
    /// Later files override earlier ones for matching names. Files that fail
    /// to parse are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file(&config_dir.join("base62-cyr").join("alphabets.toml"));
        }
        config.merge_file(Path::new("alphabets.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                tracing::debug!(path = %path.display(), "merging alphabet overrides");
                self.merge(other);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load alphabet overrides");
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` replace those with the same name; settings
    /// present in `other` replace ours.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);

        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
        if other.settings.converter.is_some() {
            self.settings.converter = other.settings.converter;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Alphabet names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn default_alphabet_name(&self) -> &str {
        self.settings
            .default_alphabet
            .as_deref()
            .unwrap_or(DEFAULT_ALPHABET_NAME)
    }

    /// Converter strategy for the named alphabet.
    pub fn converter_for(&self, name: &str) -> ConverterKind {
        self.get_alphabet(name)
            .and_then(|alphabet| alphabet.converter)
            .or(self.settings.converter)
            .unwrap_or_default()
    }

    /// Builds a codec for the named alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetNotFoundError`] for unknown names (with a suggestion
    /// when a close match exists) and the codec's construction error for
    /// alphabets that are not 62 distinct characters.
    pub fn codec(&self, name: &str) -> Result<Base62Codec, Box<dyn std::error::Error>> {
        self.codec_with_converter(name, self.converter_for(name))
    }

    /// Builds a codec for the named alphabet with an explicit converter.
    pub fn codec_with_converter(
        &self,
        name: &str,
        converter: ConverterKind,
    ) -> Result<Base62Codec, Box<dyn std::error::Error>> {
        let alphabet = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;

        Ok(Base62Codec::with_converter(&alphabet.chars, converter)?)
    }
}
