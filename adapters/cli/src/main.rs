#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs the labyrinth pipeline end to end.
//!
//! The pipeline is single-shot: load the map, validate floor connectivity,
//! optionally apply one move, render the grid. The first failure terminates
//! the run with a diagnostic on standard error and exit status 1; nothing is
//! printed to standard output unless the whole pipeline succeeds.

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{anyhow, bail, Result as AnyResult};
use clap::Parser;
use labyrinth_core::{GridLimits, PlayerId, VERSION_BANNER};
use labyrinth_rendering as rendering;
use labyrinth_system_connectivity::Connectivity;
use labyrinth_system_movement::Movement;
use labyrinth_world::{self as world, loader};

const USAGE: &str = "Usage: labyrinth -m <map_file> -p <player_number>";

/// Command-line arguments accepted by the labyrinth binary.
///
/// The map and player flags are optional at the parser level so that
/// `--version` works on its own; [`run`] enforces their presence.
#[derive(Debug, Parser)]
#[command(name = "labyrinth", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path to the map file.
    #[arg(short = 'm', long = "map", value_name = "FILE")]
    map: Option<PathBuf>,

    /// Player digit between 0 and 9.
    #[arg(short = 'p', long = "player", value_name = "DIGIT")]
    player: Option<String>,

    /// Optional single-step move: up, down, left or right.
    #[arg(long = "move", value_name = "DIRECTION")]
    move_direction: Option<String>,

    /// Print the version banner and exit.
    #[arg(short = 'v', long = "version")]
    version: bool,
}

/// Entry point for the labyrinth command-line interface.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AnyResult<()> {
    if cli.version {
        println!("{VERSION_BANNER}");
        return Ok(());
    }

    let (Some(map), Some(player)) = (cli.map, cli.player) else {
        bail!("{USAGE}");
    };
    let player = parse_player(&player)?;

    let mut grid = loader::load_from_path(&map, GridLimits::default())?;
    Connectivity::default().validate(&grid)?;

    if let Some(token) = cli.move_direction {
        let command = Movement::default().plan(&grid, player, &token)?;
        let mut events = Vec::new();
        world::apply(&mut grid, command, &mut events);
    }

    rendering::present(&grid, &mut io::stdout())
}

fn parse_player(argument: &str) -> AnyResult<PlayerId> {
    let mut characters = argument.chars();
    match (characters.next(), characters.next()) {
        (Some(digit), None) => PlayerId::from_digit(digit)
            .ok_or_else(|| anyhow!("Player must be a single digit between 0 and 9.")),
        _ => bail!("Player must be a single digit between 0 and 9."),
    }
}
