pub mod alphabets;
pub mod codepoint_string;
pub mod config;
pub mod validation;
