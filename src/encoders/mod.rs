pub mod codec;
pub mod errors;
pub mod radix;
pub mod translator;

// Re-export error types for public API
pub use errors::{AlphabetNotFoundError, Error, find_closest_alphabet};
