use std::fmt;

/// Errors produced while building a codec or decoding its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The alphabet does not consist of exactly 62 distinct characters
    InvalidAlphabet { length: usize, unique: usize },
    /// The input contains characters outside the alphabet
    InvalidInput {
        /// Offending characters, each once, in order of first occurrence
        invalid: String,
    },
    /// A character lookup missed the alphabet
    CharacterNotFound(char),
    /// A codepoint index past the end of a string
    OutOfRange { index: usize, length: usize },
    /// Decoded integer does not fit into a `u64`
    IntegerOverflow { digits: usize },
    /// Decoded bytes are not valid UTF-8
    InvalidUtf8,
    /// A character-class pattern failed to compile
    Pattern(String),
}

impl Error {
    pub(crate) fn invalid_input(invalid: impl Into<String>) -> Self {
        Error::InvalidInput {
            invalid: invalid.into(),
        }
    }

    /// Whether the error comes from caller-supplied data rather than misuse
    /// of the API.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput { .. } | Error::IntegerOverflow { .. } | Error::InvalidUtf8
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        write_header(f, use_color)?;

        match self {
            Error::InvalidAlphabet { length, unique } => {
                writeln!(
                    f,
                    "the alphabet should contain exactly 62 unique characters",
                )?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  the provided alphabet contains {} characters, out of which {} are unique",
                    length, unique
                )?;
                writeln!(f)?;
                write_hint(f, use_color, "remove repeated characters or pad the alphabet to 62")
            }
            Error::InvalidInput { invalid } => {
                write!(
                    f,
                    "invalid message, it contains the following invalid characters: \"{}\"",
                    invalid
                )
            }
            Error::CharacterNotFound(c) => write!(f, "character \"{}\" is not in the alphabet", c),
            Error::OutOfRange { index, length } => write!(
                f,
                "index {} is out of range for a string of length {}",
                index, length
            ),
            Error::IntegerOverflow { digits } => {
                writeln!(f, "decoded integer has {} decimal digits", digits)?;
                writeln!(f)?;
                write_hint(f, use_color, "values above 18446744073709551615 cannot be decoded")
            }
            Error::InvalidUtf8 => write!(f, "decoded bytes are not valid UTF-8"),
            Error::Pattern(message) => write!(f, "invalid character class: {}", message),
        }
    }
}

impl std::error::Error for Error {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m ")
    } else {
        write!(f, "error: ")
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named alphabet is missing from the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        write_header(f, use_color)?;
        writeln!(f, "alphabet '{}' not found", self.name)?;
        writeln!(f)?;

        match &self.suggestion {
            Some(suggestion) => {
                write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
                write!(f, "\n      run `base62-cyr --list` to see all alphabets")
            }
            None => write_hint(f, use_color, "run `base62-cyr --list` to see all alphabets"),
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }
    if s2.is_empty() {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("cyrillic", "cyrillic"), 0);
        assert_eq!(levenshtein_distance("cyrilic", "cyrillic"), 1);
        assert_eq!(levenshtein_distance("", "base62"), 6);
        assert_eq!(levenshtein_distance("кот", "кит"), 1);
    }

    #[test]
    fn test_find_closest_alphabet() {
        let names = vec![
            "base62".to_string(),
            "base62_reversed".to_string(),
            "cyrillic".to_string(),
        ];

        assert_eq!(
            find_closest_alphabet("cyrilic", &names),
            Some("cyrillic".to_string())
        );
        assert_eq!(
            find_closest_alphabet("base26", &names),
            Some("base62".to_string())
        );
        assert_eq!(find_closest_alphabet("greek_uppercase", &names), None);
        assert_eq!(find_closest_alphabet("cyrillic", &[]), None);
    }

    #[test]
    fn test_invalid_alphabet_reports_both_counts() {
        let err = Error::InvalidAlphabet {
            length: 63,
            unique: 61,
        };
        let display = err.to_string();

        assert!(display.contains("exactly 62 unique characters"));
        assert!(display.contains("contains 63 characters, out of which 61 are unique"));
    }

    #[test]
    fn test_invalid_input_lists_characters() {
        let err = Error::invalid_input("#!");
        assert!(err.to_string().contains("invalid characters: \"#!\""));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_contract_violations_are_not_recoverable() {
        assert!(!Error::CharacterNotFound('x').is_recoverable());
        assert!(!Error::OutOfRange { index: 62, length: 62 }.is_recoverable());
        assert!(
            !Error::InvalidAlphabet {
                length: 3,
                unique: 3
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_alphabet_not_found_error() {
        let err = AlphabetNotFoundError::new("cyrilic", Some("cyrillic".to_string()));
        let display = format!("{}", err);

        assert!(display.contains("alphabet 'cyrilic' not found"));
        assert!(display.contains("did you mean 'cyrillic'?"));
        assert!(display.contains("base62-cyr --list"));
    }
}
