//! Hall of Mirrors entry point
//!
//! A line-oriented driver: reads commands on stdin, applies them to a
//! session and prints the board.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use hall_of_mirrors::clues::{ClueSet, ClueStatus};
use hall_of_mirrors::consts::GRID_SIZE;
use hall_of_mirrors::sim::{
    Cell, Command, Coord, Dot, FireOutcome, GridState, Response, Session, scatter,
};
use hall_of_mirrors::{EngineError, Settings};

#[derive(Debug, Parser)]
#[command(name = "hall-of-mirrors")]
#[command(about = "Place mirrors, fire lasers, read off the numbers", version)]
struct Cli {
    /// JSON settings file
    #[arg(long, default_value = "hall_of_mirrors.json")]
    settings: PathBuf,

    /// Start from a layout file (10 lines of `.`, `\` and `/`)
    #[arg(long, conflicts_with = "seed")]
    layout: Option<PathBuf>,

    /// Start from a random valid layout
    #[arg(long)]
    seed: Option<u64>,
}

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Engine(Command),
    Print,
    Check,
    Help,
    Quit,
}

const HELP: &str = "\
m <row> <col>  place or cycle a mirror (rows/cols 1-10)
f <row> <col>  fire the dot at a border position (row or col 0/11)
x              clear lasers
c              clear everything
p              print the board
k              check clues
q              quit";

fn parse_coord(parts: &[&str]) -> Result<(i32, i32)> {
    match parts {
        [row, col] => Ok((
            row.parse().with_context(|| format!("bad row {:?}", row))?,
            col.parse().with_context(|| format!("bad column {:?}", col))?,
        )),
        _ => bail!("expected <row> <col>"),
    }
}

fn parse_input(line: &str) -> Result<Option<Input>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = parts.split_first() else {
        return Ok(None);
    };
    let input = match verb {
        "m" => {
            let (row, col) = parse_coord(args)?;
            Input::Engine(Command::PlaceOrCycle(Cell::new(row, col)?))
        }
        "f" => {
            let (row, col) = parse_coord(args)?;
            Input::Engine(Command::Fire(Dot::new(row, col)?))
        }
        "x" => Input::Engine(Command::ClearLasers),
        "c" => Input::Engine(Command::ClearAll),
        "p" => Input::Print,
        "k" => Input::Check,
        "h" | "?" => Input::Help,
        "q" => Input::Quit,
        other => bail!("unknown command {:?} (h for help)", other),
    };
    Ok(Some(input))
}

/// Render the grid with dot values (and clues, if given) on the border
fn render(session: &Session, clues: Option<&ClueSet>) -> String {
    let mut out = String::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let coord = Coord::new(row, col);
            let text = if let Ok(cell) = Cell::try_from(coord) {
                session.mirror_at(cell).glyph().to_string()
            } else if let Ok(dot) = Dot::try_from(coord) {
                match (session.value_at(dot), clues.and_then(|c| c.clue_at(dot))) {
                    (Some(v), _) => v.to_string(),
                    (None, Some(clue)) => format!("[{}]", clue),
                    (None, None) => "o".to_string(),
                }
            } else {
                String::new()
            };
            out.push_str(&format!("{:>7}", text));
        }
        out.push('\n');
    }
    out
}

fn describe(response: Response) -> String {
    match response {
        Response::Mirror(kind) => format!("mirror: {:?}", kind),
        Response::Fire(FireOutcome::Traced {
            entry_value,
            exit,
            exit_value,
        }) => format!("laser exits at {} ({} / {})", exit, entry_value, exit_value),
        Response::Fire(FireOutcome::Cleared) | Response::Cleared => "cleared".to_string(),
    }
}

fn initial_grid(cli: &Cli, settings: &Settings) -> Result<Option<GridState>> {
    if let Some(path) = &cli.layout {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading layout {}", path.display()))?;
        return Ok(Some(GridState::from_layout(&text)?));
    }
    if let Some(seed) = cli.seed {
        log::info!("Random layout with seed: {}", seed);
        return Ok(Some(scatter(seed, 40)));
    }
    if let Some(text) = &settings.layout {
        return Ok(Some(GridState::from_layout(text)?));
    }
    Ok(None)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Hall of Mirrors starting...");

    let settings = Settings::load(&cli.settings);
    let grid = initial_grid(&cli, &settings)?.unwrap_or_default();
    let mut session = Session::with_grid(grid).with_max_trace_steps(settings.max_trace_steps);
    let clues = settings.show_clues.then_some(&settings.clues);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", render(&session, clues));
    println!("h for help");

    for line in stdin.lock().lines() {
        let line = line?;
        let input = match parse_input(&line) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(e) => {
                println!("error: {:#}", e);
                continue;
            }
        };
        match input {
            Input::Engine(command) => match session.apply(command) {
                Ok(response) => {
                    println!("{}", describe(response));
                    print!("{}", render(&session, clues));
                }
                Err(e @ EngineError::AdjacencyViolation { .. }) => println!("rejected: {}", e),
                Err(e) => println!("error: {}", e),
            },
            Input::Print => print!("{}", render(&session, clues)),
            Input::Check => {
                for status in settings.clues.check(session.values()) {
                    match status {
                        ClueStatus::Pending { dot, expected } => {
                            println!("{} pending ({})", dot, expected)
                        }
                        ClueStatus::Satisfied { dot, value } => println!("{} ok ({})", dot, value),
                        ClueStatus::Conflict {
                            dot,
                            expected,
                            actual,
                        } => println!("{} expected {} got {}", dot, expected, actual),
                    }
                }
            }
            Input::Help => println!("{}", HELP),
            Input::Quit => break,
        }
        stdout.flush()?;
    }
    Ok(())
}
