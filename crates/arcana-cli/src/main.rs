//! CLI frontend for the Arcana tarot reading pipeline.

mod commands;
mod offline;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arcana",
    about = "Arcana — AI-assisted tarot readings",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a full reading for a question
    Read {
        /// The question to read on
        #[arg(short, long)]
        question: String,

        /// Spread to use (see `arcana spreads`)
        #[arg(short, long, default_value = "three_card")]
        spread: String,

        /// Cards to lay, comma-separated ids with an optional `r` suffix
        /// for reversed (e.g. `0,1r,7`); drawn randomly if omitted
        #[arg(short, long)]
        cards: Option<String>,

        /// Number of cards to draw when --cards is omitted
        #[arg(short = 'n', long, default_value = "3")]
        draw: usize,

        /// RNG seed for reproducible draws and emotion picks
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Path to a knowledge catalog JSON file (builtin if omitted)
        #[arg(short, long)]
        knowledge: Option<PathBuf>,

        /// Sampling temperature
        #[arg(long, default_value = "0.7")]
        temperature: f32,

        /// Nucleus (top-p) sampling threshold
        #[arg(long, default_value = "0.9")]
        top_p: f32,

        /// Maximum length of the generated interpretation
        #[arg(long, default_value = "1500")]
        max_length: u32,

        /// Emit the reading as JSON instead of a rendered table
        #[arg(long)]
        json: bool,
    },

    /// Draw random cards without interpreting them
    Draw {
        /// Number of cards to draw
        #[arg(short = 'n', long, default_value = "3")]
        count: usize,

        /// RNG seed for reproducible draws
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Path to a knowledge catalog JSON file (builtin if omitted)
        #[arg(short, long)]
        knowledge: Option<PathBuf>,
    },

    /// List the cards in the catalog
    Cards {
        /// Path to a knowledge catalog JSON file (builtin if omitted)
        #[arg(short, long)]
        knowledge: Option<PathBuf>,
    },

    /// List the spreads in the catalog
    Spreads {
        /// Path to a knowledge catalog JSON file (builtin if omitted)
        #[arg(short, long)]
        knowledge: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Read {
            question,
            spread,
            cards,
            draw,
            seed,
            knowledge,
            temperature,
            top_p,
            max_length,
            json,
        } => commands::read::run(&commands::read::ReadArgs {
            question,
            spread,
            cards,
            draw,
            seed,
            knowledge,
            temperature,
            top_p,
            max_length,
            json,
        }),
        Commands::Draw {
            count,
            seed,
            knowledge,
        } => commands::draw::run(count, seed, knowledge.as_deref()),
        Commands::Cards { knowledge } => commands::cards::run(knowledge.as_deref()),
        Commands::Spreads { knowledge } => commands::spreads::run(knowledge.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
