//! LexiKV CLI
//!
//! Offline maintenance tool that works directly on a dictionary file.
//! Don't run it against a file a live server is writing to.

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lexikv::protocol::{error_message, validate_insert, validate_lookup, InsertPayload, Status};
use lexikv::{Result, WordStore};
use tracing_subscriber::{fmt, EnvFilter};

/// LexiKV CLI
#[derive(Parser, Debug)]
#[command(name = "lexikv-cli")]
#[command(about = "Inspect and edit a LexiKV dictionary file")]
#[command(version)]
struct Args {
    /// Dictionary file
    #[arg(short, long, default_value = "dictionary.json")]
    file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a definition
    Get {
        /// The word to look up
        word: String,
    },

    /// Add a new word
    Add {
        /// The word to add
        word: String,

        /// Its definition
        definition: String,
    },

    /// Print the number of entries
    Count,

    /// Print every entry
    List,
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let store = WordStore::open(Path::new(&args.file))?;

    match &args.command {
        Commands::Get { word } => {
            let word = validate_lookup(Some(word.as_str()))?;
            match store.lookup(word) {
                Some(definition) => println!("{}: {}", word, definition),
                None => println!("Word '{}' not found in the dictionary.", word),
            }
        }
        Commands::Add { word, definition } => {
            let payload = InsertPayload::new(word.as_str(), definition.as_str());
            let (word, definition) = validate_insert(&payload)?;
            let total = store.insert(word, definition)?;
            println!("New entry recorded: {} ({} entries)", word, total);
        }
        Commands::Count => println!("{}", store.len()),
        Commands::List => {
            for (word, definition) in store.entries() {
                println!("{}: {}", word, definition);
            }
        }
    }

    Ok(())
}

/// Validation and conflict errors print the API messages, others print in full
fn describe(err: &lexikv::LexiError) -> String {
    match err.status() {
        Status::InternalError => format!("Error: {}", err),
        _ => error_message(err),
    }
}
