use crate::{AlphabetRegistry, Base62Codec, ConverterKind, Error, decode, encode};
use rand::Rng;

fn get_codec(name: &str) -> Base62Codec {
    let config = AlphabetRegistry::load_default().unwrap();
    config.codec(name).unwrap()
}

fn random_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::rng().fill(&mut data[..]);
    data
}

#[test]
fn test_encode_decode_empty() {
    let codec = get_codec("cyrillic");
    assert_eq!(codec.encode(b""), "");
    assert!(codec.decode("").unwrap().is_empty());
}

#[test]
fn test_encode_decode_zero() {
    let codec = get_codec("cyrillic");
    let encoded = codec.encode(&[0u8]);
    assert_eq!(encoded, "а");
    assert_eq!(codec.decode(&encoded).unwrap(), vec![0u8]);
}

#[test]
fn test_encode_decode_hello_world() {
    let codec = get_codec("cyrillic");
    let data = b"Hello, World!";
    let encoded = codec.encode(data);
    assert_eq!(encoded, "бЫтЙХЯЩЗЁЧВячПяНяЙ");
    assert_eq!(codec.decode(&encoded).unwrap(), data);
}

#[test]
fn test_encode_decode_binary() {
    let codec = get_codec("cyrillic_reversed");
    let data = &[0u8, 1, 2, 3, 255, 254, 253];
    let encoded = codec.encode(data);
    assert_eq!(codec.decode(&encoded).unwrap(), data);
}

#[test]
fn test_encode_decode_random_payloads() {
    for name in ["base62", "base62_reversed", "cyrillic", "cyrillic_reversed"] {
        let codec = get_codec(name);
        for _ in 0..4 {
            let data = random_bytes(512);
            let encoded = codec.encode(&data);
            assert_eq!(codec.decode(&encoded).unwrap(), data, "{}", name);
        }
    }
}

#[test]
fn test_converters_agree() {
    let data = random_bytes(64);
    let config = AlphabetRegistry::load_default().unwrap();
    let alphabet = &config.get_alphabet("cyrillic").unwrap().chars;

    let outputs: Vec<String> = ConverterKind::ALL
        .iter()
        .map(|&kind| Base62Codec::with_converter(alphabet, kind).unwrap().encode(&data))
        .collect();

    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn test_random_integers() {
    let codec = get_codec("cyrillic");
    let mut rng = rand::rng();
    for _ in 0..100 {
        let value: u64 = rng.random();
        let encoded = codec.encode_integer(Some(value));
        assert_eq!(codec.decode_integer(&encoded).unwrap(), Some(value));
    }
}

#[test]
fn test_decode_random_garbage_is_rejected() {
    let codec = get_codec("cyrillic");
    let garbage = String::from_utf8_lossy(&random_bytes(128)).into_owned();
    // U+FFFD from lossy conversion, or any ASCII byte, is outside the alphabet
    let err = codec.decode(&garbage).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn test_encodings_differ_between_alphabets() {
    let data = b"alphabet parity";
    let plain = get_codec("cyrillic").encode(data);
    let reversed = get_codec("cyrillic_reversed").encode(data);
    assert_ne!(plain, reversed);
    assert_eq!(plain.chars().count(), reversed.chars().count());
}

#[test]
fn test_default_alphabet_helpers() {
    let encoded = encode(b"Hello");
    assert_eq!(encoded, "5TP3P3v");
    assert_eq!(decode(&encoded).unwrap(), b"Hello");
    assert!(decode("5TP3P3v!").is_err());
}

#[test]
fn test_shared_between_threads() {
    let codec = std::sync::Arc::new(get_codec("cyrillic"));
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let codec = std::sync::Arc::clone(&codec);
            std::thread::spawn(move || {
                let data = vec![i; 32];
                codec.decode(&codec.encode(&data)).unwrap() == data
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
