//! CLI frontend for the Trickster Duel battle simulator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tduel",
    about = "Trickster Duel — a turn-based narrative battle simulator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one duel and print the narrated battle log
    Run {
        /// RNG seed for a reproducible battle
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Battle length in turns
        #[arg(long, default_value = "20")]
        max_turns: u32,

        /// Comma-separated trait ids for the powerless side
        #[arg(long, default_value = "laughter,picaro,liminality")]
        powerless: String,

        /// Comma-separated trait ids for the powerful side
        #[arg(long, default_value = "rules_laws,money,media_presence")]
        powerful: String,

        /// Selection-policy temperature (lower is greedier)
        #[arg(long, default_value = "1.0")]
        temperature: f64,

        /// Forbid reusing a move for the rest of the battle
        #[arg(long)]
        single_use: bool,

        /// Tie-break at the turn limit: draw, powerless, or powerful
        #[arg(long, default_value = "draw")]
        tie_break: String,

        /// Emit the battle log and outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the move catalog
    Moves,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            seed,
            max_turns,
            powerless,
            powerful,
            temperature,
            single_use,
            tie_break,
            json,
        } => commands::run::run(&commands::run::RunOptions {
            seed,
            max_turns,
            powerless,
            powerful,
            temperature,
            single_use,
            tie_break,
            json,
        }),
        Commands::Moves => commands::moves::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
