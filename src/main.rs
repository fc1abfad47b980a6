//! morse CLI - Command line interface for morse_trie
//!
//! Decodes and encodes Morse code with the standard letter/digit table and
//! exports the trie layout for rendering.

use clap::{Parser, Subcommand};
use morse_trie::{Config, MorseTrie, OutputFormat, TreeLayout};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "morse")]
#[command(about = "Decode and encode Morse code with a binary dot/dash trie")]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (json or text)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Fail on unknown or incomplete codes instead of substituting markers
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode space-separated codes (reads stdin when MESSAGE is omitted)
    Decode {
        /// The Morse message, e.g. ".... . .-.. .-.. ---"
        message: Option<String>,
    },

    /// Encode text as space-separated codes
    Encode {
        /// The text to encode
        text: String,
    },

    /// Show the code for a single character
    Code {
        /// The character to look up (case-insensitive)
        character: char,
    },

    /// Show the trie height
    Height,

    /// Export the trie layout
    Tree {
        /// Emit graphviz dot instead of JSON
        #[arg(long)]
        dot: bool,

        /// Decode this message and add it as a caption
        #[arg(short, long)]
        message: Option<String>,
    },

    /// List the seeded alphabet
    Alphabet,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.strict {
        config.strict = true;
    }
    debug!(?config, "resolved configuration");

    let trie = MorseTrie::standard();

    match cli.command {
        Commands::Decode { message } => {
            let message = match message {
                Some(message) => message,
                None => read_stdin()?,
            };
            let message = message.trim();
            let unresolved = message
                .split_whitespace()
                .filter(|token| !trie.decode_token(token).is_found())
                .count();

            let decoded = if config.strict {
                match trie.decode_strict(message) {
                    Ok(decoded) => decoded,
                    Err(e) => fail(&config.format, &e.to_string()),
                }
            } else {
                if unresolved > 0 {
                    warn!(unresolved, "substituted markers for unresolved codes");
                }
                trie.decode_with(message, config.unknown_marker, config.blank_marker)
            };

            let paths = trie.paths(&decoded);
            let text = format!(
                "Decoded message: {}\nNode paths: {}",
                decoded,
                paths
                    .iter()
                    .map(|(c, code)| format!("{} ({})", c, code))
                    .collect::<Vec<_>>()
                    .join("  ")
            );
            output(
                &config.format,
                &serde_json::json!({
                    "message": message,
                    "decoded": decoded,
                    "unresolved": unresolved,
                    "paths": paths
                        .iter()
                        .map(|(c, code)| serde_json::json!({ "char": c, "code": code }))
                        .collect::<Vec<_>>()
                }),
                &text,
            )?;
        }

        Commands::Encode { text } => {
            let encoded = if config.strict {
                match trie.encode_strict(&text) {
                    Ok(encoded) => encoded,
                    Err(e) => fail(&config.format, &e.to_string()),
                }
            } else {
                trie.encode(&text)
            };
            output(
                &config.format,
                &serde_json::json!({
                    "text": text,
                    "encoded": encoded
                }),
                &encoded,
            )?;
        }

        Commands::Code { character } => match trie.lookup_entry(character) {
            Some((stored, code)) => {
                output(
                    &config.format,
                    &serde_json::json!({
                        "char": stored,
                        "code": code
                    }),
                    &code.to_string(),
                )?;
            }
            None => {
                let e = morse_trie::Error::UnknownCharacter(character);
                fail(&config.format, &e.to_string());
            }
        },

        Commands::Height => {
            let height = trie.height();
            output(
                &config.format,
                &serde_json::json!({
                    "height": height,
                    "levels": trie.levels()
                }),
                &height.to_string(),
            )?;
        }

        Commands::Tree { dot, message } => {
            let mut layout = TreeLayout::compute(&trie);
            if let Some(message) = message {
                let decoded =
                    trie.decode_with(&message, config.unknown_marker, config.blank_marker);
                layout = layout.with_caption(&trie, &decoded);
            }

            if dot {
                println!("{}", layout.to_dot());
            } else {
                let value = serde_json::to_value(&layout)?;
                let pretty = serde_json::to_string_pretty(&value)?;
                output(&config.format, &value, &pretty)?;
            }
        }

        Commands::Alphabet => {
            let entries = trie.entries();
            let text = entries
                .iter()
                .map(|(c, code)| format!("{} {}", c, code))
                .collect::<Vec<_>>()
                .join("\n");
            output(
                &config.format,
                &serde_json::json!({
                    "count": entries.len(),
                    "entries": entries
                        .iter()
                        .map(|(c, code)| serde_json::json!({ "char": c, "code": code }))
                        .collect::<Vec<_>>()
                }),
                &text,
            )?;
        }
    }

    Ok(())
}

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {e}"))
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => match Config::default_path() {
            Ok(path) => Config::load(&path)?,
            Err(e) => {
                debug!(error = %e, "no config directory, using defaults");
                Config::default()
            }
        },
    };
    Ok(config)
}

fn read_stdin() -> anyhow::Result<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn output(format: &OutputFormat, value: &serde_json::Value, text: &str) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => println!("{}", text),
    }
    Ok(())
}

fn fail(format: &OutputFormat, message: &str) -> ! {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "status": "error",
                "message": message
            })
        ),
        OutputFormat::Text => eprintln!("error: {}", message),
    }
    std::process::exit(1);
}
