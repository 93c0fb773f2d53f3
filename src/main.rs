//! termdeck CLI
//!
//! Present slide decks in the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use termdeck::config;
use termdeck::deck::{load_deck, sample_deck};
use termdeck::report::format_deck_info;
use termdeck::tui;
use termdeck::types::{Deck, OutputFormat};

#[derive(Parser)]
#[command(name = "termdeck")]
#[command(about = "Present slide decks in the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the presentation (built-in sample deck when FILE is omitted)
    Present {
        /// Deck file (JSON)
        file: Option<PathBuf>,

        /// Title reveal speed, characters per second
        #[arg(long)]
        speed: Option<f64>,

        /// Slide to start on (1-based)
        #[arg(long)]
        start: Option<usize>,
    },

    /// Summarize a deck without presenting it
    Info {
        /// Deck file (JSON); the built-in sample deck when omitted
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Print the built-in sample deck as JSON (a starting point for new decks)
    Sample,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Present { file, speed, start } => cmd_present(file, speed, start),
        Commands::Info { file, format } => cmd_info(file, format.into()),
        Commands::Sample => cmd_sample(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// DECK RESOLUTION
// ============================================================================

/// Load the given deck file, or fall back to the built-in sample deck.
fn resolve_deck(file: Option<PathBuf>) -> Result<Deck, String> {
    match file {
        Some(path) => load_deck(&path).map_err(|e| e.to_string()),
        None => {
            eprintln!("No deck file given, using the built-in sample deck.");
            Ok(sample_deck())
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_present(
    file: Option<PathBuf>,
    speed: Option<f64>,
    start: Option<usize>,
) -> Result<(), String> {
    let deck = resolve_deck(file)?;
    let config = config::load_or_default();
    let options = config::resolve(speed, start, &config);
    tui::run::run(deck, &options).map_err(|e| e.to_string())
}

fn cmd_info(file: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    let deck = resolve_deck(file)?;
    print!("{}", format_deck_info(&deck, format));
    Ok(())
}

fn cmd_sample() -> Result<(), String> {
    let json = serde_json::to_string_pretty(&sample_deck()).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}
