use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use ttt_engine::{
    Coordinates, Engine, Error, GameConfig, Mark, MoveStrategy, Outcome, PlayerConfig, RoomStore,
    SearchConfig,
};

/// Play tic-tac-toe in the terminal against a friend or a search strategy.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Mark of the player at the keyboard (X moves first).
    #[arg(long, default_value = "X", value_parser = parse_mark)]
    mark: Mark,

    /// Opponent: human, naive, negamax or mcts.
    #[arg(long, default_value = "mcts")]
    opponent: String,

    /// MCTS iterations per move.
    #[arg(long, default_value_t = 10_000, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,

    /// Negamax search depth in plies.
    #[arg(long, default_value_t = 6)]
    depth: u8,

    /// Seed for the random source, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding `<room>.json` game files. Games are not saved
    /// when this is missing.
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Room to resume and save.
    #[arg(long, default_value = "local")]
    room: String,
}

fn parse_mark(s: &str) -> Result<Mark, String> {
    match s.trim().to_uppercase().as_str() {
        "X" | "1" => Ok(Mark::X),
        "O" | "-1" => Ok(Mark::O),
        other => Err(format!("expected X or O, got {}", other)),
    }
}

fn game_config(args: &Args) -> Result<GameConfig> {
    let human = PlayerConfig::human("player-1", "Player 1", args.mark);
    let other = args.mark.opponent();
    let opponent = if args.opponent.eq_ignore_ascii_case("human") {
        PlayerConfig::human("player-2", "Player 2", other)
    } else {
        let strategy: MoveStrategy = args.opponent.parse()?;
        PlayerConfig::automated("botybot", "Botybot", other, strategy)
    };
    Ok(GameConfig {
        players: [human, opponent],
        starting_mark: Mark::X,
    })
}

/// Reads "row col" from stdin. `None` once input is exhausted.
fn read_coordinates(input: &mut impl BufRead, prompt: &str) -> Result<Option<Coordinates>> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        let parsed = match parts.as_slice() {
            [row, col] => row.parse::<usize>().ok().zip(col.parse::<usize>().ok()),
            _ => None,
        };
        match parsed.map(|(row, col)| Coordinates::new(row, col)) {
            Some(Ok(coord)) => return Ok(Some(coord)),
            Some(Err(err)) => println!("{}", err),
            None => println!("Please enter a row and a column, e.g. `1 2`."),
        }
    }
}

fn ask_yes_no(input: &mut impl BufRead, prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = SearchConfig::default()
        .with_iterations(args.iterations)
        .with_depth(args.depth);
    config.seed = args.seed;

    let store = args.state_dir.clone().map(RoomStore::new);
    let mut engine = match &store {
        Some(store) if store.exists(&args.room)? => {
            info!("resuming room {} from {}", args.room, store.dir().display());
            Engine::from_record(store.load(&args.room)?, config)?
        }
        _ => Engine::new(&game_config(&args)?, config)?,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\n{}\n", engine.board());

        match engine.outcome() {
            Outcome::Win(mark) => println!("Player {} wins!", mark),
            Outcome::Tie => println!("Draw!"),
            Outcome::InProgress => {
                let current = engine.players().current();
                let name = current.name().to_string();
                let mark = current.mark();

                let coord = match engine.request_move()? {
                    Some(coord) => {
                        println!("{} ({}) plays {}", name, mark, coord);
                        coord
                    }
                    None => {
                        let prompt = format!("{} ({}), your move [row col]: ", name, mark);
                        match read_coordinates(&mut input, &prompt)? {
                            Some(coord) => coord,
                            None => break,
                        }
                    }
                };

                match engine.play(coord) {
                    Err(Error::Overwrite(cell)) => println!("Cell {} is already taken.", cell),
                    other => {
                        other?;
                    }
                }
                if let Some(store) = &store {
                    store
                        .save(&args.room, &engine.to_record())
                        .context("saving game state")?;
                }
                continue;
            }
        }

        for player in engine.players().players() {
            println!("{} ({}): {}", player.name(), player.mark(), player.score());
        }
        if !ask_yes_no(&mut input, "Play again? [y/N] ")? {
            break;
        }
        engine = engine.rematch()?;
    }

    Ok(())
}
