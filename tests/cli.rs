//! CLI integration tests for base62-cyr
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn base62_cyr() -> Command {
    Command::cargo_bin("base62-cyr").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    base62_cyr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reversible Base62 encoder"));
}

#[test]
fn test_version() {
    base62_cyr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base62-cyr"));
}

#[test]
fn test_list_alphabets() {
    base62_cyr()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("cyrillic"))
        .stdout(predicate::str::contains("base62_reversed"))
        .stdout(predicate::str::contains("long_division"));
}

// ============================================================================
// Encode/Decode
// ============================================================================

#[test]
fn test_encode_default_alphabet() {
    base62_cyr()
        .write_stdin("Hello")
        .assert()
        .success()
        .stdout("5TP3P3v\n");
}

#[test]
fn test_encode_cyrillic() {
    base62_cyr()
        .args(["--encode", "cyrillic"])
        .write_stdin("Hello")
        .assert()
        .success()
        .stdout("еюшгшгЩ\n");
}

#[test]
fn test_decode_cyrillic() {
    base62_cyr()
        .args(["--decode", "cyrillic"])
        .write_stdin("еюшгшгЩ\n")
        .assert()
        .success()
        .stdout("Hello");
}

#[test]
fn test_transcode_between_alphabets() {
    base62_cyr()
        .args(["-d", "base62", "-e", "cyrillic"])
        .write_stdin("5TP3P3v")
        .assert()
        .success()
        .stdout("еюшгшгЩ\n");
}

#[test]
fn test_big_int_converter() {
    base62_cyr()
        .args(["-e", "cyrillic", "--converter", "big_int"])
        .write_stdin("Hello")
        .assert()
        .success()
        .stdout("еюшгшгЩ\n");
}

#[test]
fn test_decode_invalid_characters() {
    base62_cyr()
        .args(["-d", "cyrillic"])
        .write_stdin("абвxyzx")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid characters: \"xyz\""));
}

#[test]
fn test_unknown_alphabet_suggestion() {
    base62_cyr()
        .args(["-e", "cyrilic"])
        .write_stdin("Hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'cyrillic'?"));
}

#[test]
fn test_unknown_converter() {
    base62_cyr()
        .args(["--converter", "gmp"])
        .write_stdin("Hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown converter"));
}

// ============================================================================
// Integers
// ============================================================================

#[test]
fn test_encode_integer() {
    base62_cyr()
        .args(["-i", "-e", "cyrillic"])
        .write_stdin("123\n")
        .assert()
        .success()
        .stdout("бЯ\n");
}

#[test]
fn test_decode_integer() {
    base62_cyr()
        .args(["-i", "-d", "base62"])
        .write_stdin("LygHa16AHYF")
        .assert()
        .success()
        .stdout("18446744073709551615\n");
}

#[test]
fn test_empty_integer() {
    base62_cyr()
        .args(["-i", "-d", "cyrillic"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_invalid_integer() {
    base62_cyr()
        .arg("-i")
        .write_stdin("12a")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid integer '12a'"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_extra_config_file() {
    let path = std::env::temp_dir().join(format!("base62-cyr-cli-test-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "[settings]\ndefault_alphabet = \"cyrillic_reversed\"\n",
    )
    .unwrap();

    let assert = base62_cyr()
        .arg("--config")
        .arg(&path)
        .write_stdin("Hello")
        .assert();
    std::fs::remove_file(&path).unwrap();

    // same digits as "еюшгшгЩ" with the case order swapped
    assert.success().stdout("ЕЮШГШГщ\n");
}

#[test]
fn test_file_input() {
    let path = std::env::temp_dir().join(format!("base62-cyr-input-{}.bin", std::process::id()));
    std::fs::write(&path, [0u8, 0, b'a', b'b', b'c']).unwrap();

    let assert = base62_cyr().args(["-e", "cyrillic"]).arg(&path).assert();
    std::fs::remove_file(&path).unwrap();

    assert.success().stdout("аащРсц\n");
}
