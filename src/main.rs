//! Cube Solution Checker
//!
//! Loads a 3x3x3 cube state, applies a move sequence produced by some external
//! solver, and reports the resulting faces and whether the cube ends up solved.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cubecheck::config::{load_config, CubeConfig};
use cubecheck::moves::{format_sequence, invert_sequence, parse_sequence};
use cubecheck::{logging, persistence, verify, Verdict};

/// Applies move sequences to a 3x3x3 cube and checks the result.
#[derive(Parser)]
#[command(name = "cubecheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with the solved target colors.
    #[arg(long, global = true, default_value = "cubecheck.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a solution to a saved state and report whether it solves it.
    Verify {
        /// State file (face lines or a 54-letter facelet string).
        #[arg(long)]
        state: PathBuf,
        /// Whitespace-separated move tokens, e.g. "R U R' U'".
        #[arg(long, allow_hyphen_values = true)]
        moves: String,
    },
    /// Apply a scramble to the solved cube and print the resulting state.
    Scramble {
        #[arg(long, allow_hyphen_values = true)]
        moves: String,
        /// Also write the state to this file.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the sequence that undoes the given moves.
    Invert {
        #[arg(long, allow_hyphen_values = true)]
        moves: String,
    },
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Dispatches a subcommand. Only the commands that judge or build states
/// read the target config.
fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Verify { state, moves } => {
            let config = load_config(&cli.config)?;
            run_verify(&config, &state, &moves)
        }
        Command::Scramble { moves, output } => {
            let config = load_config(&cli.config)?;
            run_scramble(&config, &moves, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Invert { moves } => {
            let moves = parse_sequence(&moves)?;
            println!("{}", format_sequence(&invert_sequence(&moves)));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Verifies a solution; exits 1 when the cube is left unsolved.
fn run_verify(config: &CubeConfig, state_path: &std::path::Path, moves: &str) -> Result<ExitCode> {
    let initial = persistence::load(state_path)
        .with_context(|| format!("load state {}", state_path.display()))?;
    let verdict = verify(&initial, moves, &config.target)?;

    print!("{}", render_verdict(&verdict));
    Ok(if verdict.solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Scrambles the solved cube, prints it, and optionally saves it.
fn run_scramble(config: &CubeConfig, moves: &str, output: Option<&std::path::Path>) -> Result<()> {
    let state = cubecheck::scramble(moves, &config.target)?;
    print!("{state}");

    if let Some(path) = output {
        persistence::save(path, &state)
            .with_context(|| format!("write state {}", path.display()))?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

fn render_verdict(verdict: &Verdict) -> String {
    format!(
        "Final State ({} moves):\n{}Solved: {}\n",
        verdict.moves_applied, verdict.final_state, verdict.solved
    )
}
