mod config;
mod logging;

use base62_cyr::{AlphabetRegistry, ConverterKind};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use config::create_codec;

#[derive(Parser, Debug)]
#[command(name = "base62-cyr")]
#[command(version)]
#[command(about = "Reversible Base62 encoder with Latin and Cyrillic alphabets", long_about = None)]
struct Cli {
    /// Encode using this alphabet
    #[arg(short = 'e', long, value_name = "ALPHABET")]
    encode: Option<String>,

    /// Decode from this alphabet
    #[arg(short = 'd', long, value_name = "ALPHABET")]
    decode: Option<String>,

    /// Treat the input as an unsigned integer instead of raw bytes
    #[arg(short = 'i', long)]
    integer: bool,

    /// Radix converter strategy (long_division, big_int)
    #[arg(long, value_name = "KIND")]
    converter: Option<ConverterKind>,

    /// Extra alphabets file merged over the built-in and user alphabets
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// File to process (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// List available alphabets
    #[arg(short, long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    // Load alphabets configuration with user overrides
    let mut config = AlphabetRegistry::load_with_overrides()?;
    if let Some(path) = &cli.config {
        config.merge(AlphabetRegistry::load_from_file(path)?);
    }

    if cli.list {
        print_alphabets(&config);
        return Ok(());
    }

    let input = match &cli.file {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    // Decoding only writes raw output; everything else ends in an encode
    let encode_name = match (&cli.encode, &cli.decode) {
        (Some(name), _) => Some(name.clone()),
        (None, Some(_)) => None,
        (None, None) => Some(config.default_alphabet_name().to_string()),
    };

    if cli.integer {
        let value = match &cli.decode {
            Some(name) => {
                let codec = create_codec(&config, name, cli.converter)?;
                codec.decode_integer(input_text(input)?.trim())?
            }
            None => parse_integer(input_text(input)?.trim())?,
        };

        match encode_name {
            Some(name) => {
                let codec = create_codec(&config, &name, cli.converter)?;
                println!("{}", codec.encode_integer(value));
            }
            None => println!("{}", value.map(|v| v.to_string()).unwrap_or_default()),
        }
        return Ok(());
    }

    let data = match &cli.decode {
        Some(name) => {
            let codec = create_codec(&config, name, cli.converter)?;
            codec.decode(input_text(input)?.trim())?
        }
        None => input,
    };

    match encode_name {
        Some(name) => {
            let codec = create_codec(&config, &name, cli.converter)?;
            println!("{}", codec.encode(&data));
        }
        None => io::stdout().write_all(&data)?,
    }

    Ok(())
}

fn input_text(input: Vec<u8>) -> Result<String, Box<dyn std::error::Error>> {
    String::from_utf8(input).map_err(|_| "Input data is not valid UTF-8 text for decoding".into())
}

fn parse_integer(text: &str) -> Result<Option<u64>, Box<dyn std::error::Error>> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse::<u64>()
        .map(Some)
        .map_err(|e| format!("Invalid integer '{}': {}", text, e).into())
}

fn print_alphabets(config: &AlphabetRegistry) {
    println!("Available alphabets:\n");

    for name in config.names() {
        let Some(alphabet) = config.get_alphabet(&name) else {
            continue;
        };
        let count = alphabet.chars.chars().count();
        let preview: String = alphabet.chars.chars().take(20).collect();
        let suffix = if count > 20 { "..." } else { "" };
        let marker = if name == config.default_alphabet_name() {
            "*"
        } else {
            " "
        };
        println!(
            "{} {:<18} {:<13} {}{}",
            marker,
            name,
            config.converter_for(&name).as_str(),
            preview,
            suffix
        );
        if let Some(description) = &alphabet.description {
            println!("    {}", description);
        }
    }
}
