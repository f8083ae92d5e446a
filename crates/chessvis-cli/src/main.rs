mod scorelog;
mod session;

use anyhow::Result;
use chessvis_core::{BrotherSquareGame, ColorGame, DiagonalGame, GameRules, KnightPathGame};
use clap::{Parser, Subcommand};
use scorelog::ScoreLog;
use session::Session;
use std::path::PathBuf;

/// Chess board visualization trainer
#[derive(Parser)]
#[command(name = "chess-trainer", version, about)]
struct Cli {
    /// Override the score log location
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Name the color of a random square
    Color {
        /// Number of rounds to play
        #[arg(long, default_value_t = 25)]
        rounds: u32,
    },
    /// Name the brother square and its color
    Brother {
        #[arg(long, default_value_t = 25)]
        rounds: u32,
    },
    /// List every square on the diagonals of a random square
    Diagonal {
        #[arg(long, default_value_t = 25)]
        rounds: u32,
    },
    /// Find a shortest knight path between two random squares
    Knight {
        #[arg(long, default_value_t = 25)]
        rounds: u32,
    },
    /// Show accumulated statistics from the score log
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log = ScoreLog::new(cli.log_file);

    let (game, rounds): (Box<dyn GameRules>, u32) = match cli.command {
        Command::Color { rounds } => (Box::new(ColorGame), rounds),
        Command::Brother { rounds } => (Box::new(BrotherSquareGame), rounds),
        Command::Diagonal { rounds } => (Box::new(DiagonalGame), rounds),
        Command::Knight { rounds } => (Box::new(KnightPathGame), rounds),
        Command::Stats => {
            scorelog::print_stats(&log)?;
            return Ok(());
        }
    };
    anyhow::ensure!(rounds > 0, "number of rounds must be greater than 0");

    Session::new(game, rounds, log).run()
}
