//! Built-in 62-character alphabets.

/// Digits, uppercase, lowercase.
pub const ALPHABET_DEFAULT: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Digits, lowercase, uppercase.
pub const ALPHABET_DEFAULT_REVERSED: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Russian Cyrillic without the hard and soft signs, lowercase first.
pub const ALPHABET_CYR: &str = "абвгдеёжзийклмнопрстуфхцчшщыэюяАБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЫЭЮЯ";

/// Russian Cyrillic without the hard and soft signs, uppercase first.
pub const ALPHABET_CYR_REVERSED: &str =
    "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЫЭЮЯабвгдеёжзийклмнопрстуфхцчшщыэюя";

/// Name and characters of every built-in alphabet.
pub const BUILTIN: [(&str, &str); 4] = [
    ("base62", ALPHABET_DEFAULT),
    ("base62_reversed", ALPHABET_DEFAULT_REVERSED),
    ("cyrillic", ALPHABET_CYR),
    ("cyrillic_reversed", ALPHABET_CYR_REVERSED),
];
