use base62_cyr::{AlphabetRegistry, Base62Codec, ConverterKind};

/// Helper function to create a codec from config, honouring a converter
/// override from the command line
pub fn create_codec(
    config: &AlphabetRegistry,
    name: &str,
    converter: Option<ConverterKind>,
) -> Result<Base62Codec, Box<dyn std::error::Error>> {
    match converter {
        Some(kind) => config.codec_with_converter(name, kind),
        None => config.codec(name),
    }
}
