//! Lexicon Command Line Interface
//!
//! A CLI tool for adding, looking up, listing and removing dictionary words.

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{add, get, list, open, remove};
use crate::error::Result;

/// Lexicon Command Line Interface
///
/// A persistent word/definition dictionary.
#[derive(Parser, Debug)]
#[command(name = "lexicon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = "Creation times are shown in UTC.")]
pub struct Cli {
    /// Directory holding the dictionary
    #[arg(short, long, env = "LEXICON_DIR", default_value = "./lexicon-data", global = true)]
    pub dir: PathBuf,

    /// Output format; times are shown in UTC
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    Table,
    /// JSON format
    Json,
    /// One fixed-width line per entry
    Plain,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open or create a dictionary (validates the directory)
    Open,

    /// Add a word, replacing any previous definition
    Add {
        /// The word to add
        word: String,

        /// The definition; remaining arguments are joined with spaces
        #[arg(required = true, trailing_var_arg = true)]
        definition: Vec<String>,
    },

    /// Show the definition of a word
    Get {
        /// The word to look up
        word: String,
    },

    /// List every word in alphabetical order
    List,

    /// Remove a word
    Remove {
        /// The word to remove
        word: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lexicon=warn".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Open => open::run(&cli.dir),
        Commands::Add { word, definition } => {
            add::run(&cli.dir, &word, &definition.join(" "), cli.format)
        }
        Commands::Get { word } => get::run(&cli.dir, &word, cli.format),
        Commands::List => list::run(&cli.dir, cli.format),
        Commands::Remove { word } => remove::run(&cli.dir, &word),
    }
}
