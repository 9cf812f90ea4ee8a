//! Twisty Puzzle CLI
//!
//! Scrambles, analyzes and solves a 3x3x3 twisty cube from the command line,
//! printing the cube as an unfolded facelet net.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::TimestampPrecision;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use twisty::config::EngineConfig;
use twisty::cube::Cube;
use twisty::geometry::Slice;
use twisty::{net, notation, persistence};

/// Default number of quarter turns in a scramble.
const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Scrambles, analyzes and solves a 3x3x3 twisty cube.
#[derive(Parser)]
#[command(name = "twisty")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Allow turns of the S slice, which moves pieces without turning
    /// their stickers.
    #[arg(long, global = true)]
    enable_s_slice: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply random moves, then show the cube and its reversal solution.
    Scramble {
        /// Number of quarter turns.
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: usize,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Save the scrambled session to this directory.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Apply a move sequence, then print and verify the reversal solution.
    Solve {
        /// Moves in standard notation, e.g. "R U2 F'".
        moves: String,
    },
    /// Apply a move sequence and print the cube with its complexity.
    Analyze {
        /// Moves in standard notation, e.g. "R U2 F'".
        moves: String,
    },
    /// Restore a saved session and show it.
    Replay {
        /// Session directory.
        dir: PathBuf,
    },
    /// Show the number of moves in a saved session.
    Count {
        /// Session directory.
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = EngineConfig::default().with_slice_enabled(Slice::S, cli.enable_s_slice);

    let result = match cli.command {
        Some(Command::Scramble { length, seed, save }) => {
            run_scramble(config, length, seed, save.as_deref())
        }
        Some(Command::Solve { moves }) => run_solve(config, &moves),
        Some(Command::Analyze { moves }) => run_analyze(config, &moves),
        Some(Command::Replay { dir }) => run_replay(config, &dir),
        Some(Command::Count { dir }) => {
            run_count(&dir);
            Ok(())
        }
        None => {
            // default: scramble, then solve it back
            run_scramble(config, DEFAULT_SCRAMBLE_LENGTH, None, None)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the net and complexity report of a cube.
fn print_cube(cube: &Cube) {
    print!("{}", net::format_net(cube));
    println!();
    println!("{}", cube.analyze_complexity());
    println!("Solved: {}", if cube.is_solved() { "yes" } else { "no" });
}

/// Solves by reversal, replays the solution and reports the outcome.
fn solve_and_verify(cube: &mut Cube) -> Result<(), String> {
    let solution = cube.solve_by_reversal();
    println!();
    println!("Method: {}", solution.method);
    println!("Solution ({} moves): {}", solution.moves.len(), notation::format_compact(&solution.moves));

    cube.apply_solution(&solution).map_err(|e| e.to_string())?;
    println!("Solved after replay: {}", if cube.is_solved() { "yes" } else { "no" });
    Ok(())
}

/// Applies a notation string to a fresh cube.
fn cube_from_notation(config: EngineConfig, moves: &str) -> Result<Cube, String> {
    let moves = notation::parse_sequence(moves).map_err(|e| e.to_string())?;
    let mut cube = Cube::with_config(config);
    cube.apply_sequence(&moves).map_err(|e| e.to_string())?;
    Ok(cube)
}

fn run_scramble(
    config: EngineConfig,
    length: usize,
    seed: Option<u64>,
    save: Option<&std::path::Path>,
) -> Result<(), String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut cube = Cube::with_config(config);
    let scramble = cube.scramble(length, &mut rng);
    println!("Scramble: {}", notation::format_sequence(&scramble));
    println!();
    print_cube(&cube);

    if let Some(dir) = save {
        persistence::save(dir, &cube).map_err(|e| format!("Failed to save session: {e}"))?;
        println!("Wrote {}", dir.display());
    }

    solve_and_verify(&mut cube)
}

fn run_solve(config: EngineConfig, moves: &str) -> Result<(), String> {
    let mut cube = cube_from_notation(config, moves)?;
    print_cube(&cube);
    solve_and_verify(&mut cube)
}

fn run_analyze(config: EngineConfig, moves: &str) -> Result<(), String> {
    let cube = cube_from_notation(config, moves)?;
    print_cube(&cube);
    Ok(())
}

fn run_replay(config: EngineConfig, dir: &std::path::Path) -> Result<(), String> {
    match persistence::restore(dir, config).map_err(|e| e.to_string())? {
        Some(cube) => {
            println!("Moves: {}", notation::format_sequence(&cube.moves()));
            println!();
            print_cube(&cube);
            Ok(())
        }
        None => Err(format!(
            "No session found in {}. Run 'twisty scramble --save {}' first.",
            dir.display(),
            dir.display()
        )),
    }
}

/// Prints the move count of a saved session.
fn run_count(dir: &std::path::Path) {
    match persistence::count(dir) {
        Some(count) => println!("{} moves", count),
        None => eprintln!("No session found in {}.", dir.display()),
    }
}
