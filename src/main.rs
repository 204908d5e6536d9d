use clap::Parser;
use crossword_engine::application::engine::{EngineConfig, OverlapPolicy, PuzzleEngine};
use crossword_engine::application::session::{Outcome, PlaySession};
use crossword_engine::domain::player::Player;
use crossword_engine::domain::ports::ScoreboardBox;
use crossword_engine::domain::puzzle::PuzzleDefinition;
use crossword_engine::infrastructure::in_memory::InMemoryScoreboard;
use crossword_engine::infrastructure::json_file::JsonFileScoreboard;
use crossword_engine::interfaces::csv::command_reader::CommandReader;
use crossword_engine::interfaces::json::puzzle_reader::{PuzzleReader, write_puzzle};
use crossword_engine::interfaces::text::board_writer::BoardWriter;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Play commands CSV file (command,row,col,key)
    #[arg(required_unless_present = "dump_puzzle")]
    commands: Option<PathBuf>,

    /// Puzzle definition JSON file. Uses the built-in sample puzzle when omitted.
    #[arg(long)]
    puzzle: Option<PathBuf>,

    /// Path to a JSON scoreboard file (optional). In-memory when omitted.
    #[arg(long)]
    scoreboard: Option<PathBuf>,

    /// Player id wins are recorded under.
    #[arg(long, default_value = "guest")]
    player: String,

    /// Reject puzzles whose entries disagree on a shared cell.
    #[arg(long)]
    strict: bool,

    /// Print the puzzle definition as JSON and exit.
    #[arg(long)]
    dump_puzzle: bool,
}

fn load_puzzle(cli: &Cli) -> Result<PuzzleEngine> {
    let definition = match &cli.puzzle {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            PuzzleReader::new(file).read().into_diagnostic()?
        }
        None => PuzzleDefinition::sample(),
    };

    let config = EngineConfig {
        overlap_policy: if cli.strict {
            OverlapPolicy::Reject
        } else {
            OverlapPolicy::Overwrite
        },
    };
    PuzzleEngine::with_config(definition, config).into_diagnostic()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let engine = load_puzzle(&cli).wrap_err("this puzzle could not be loaded")?;

    if cli.dump_puzzle {
        write_puzzle(io::stdout().lock(), engine.definition()).into_diagnostic()?;
        println!();
        return Ok(());
    }

    let scoreboard: ScoreboardBox = match &cli.scoreboard {
        Some(path) => Box::new(JsonFileScoreboard::open(path)),
        None => Box::new(InMemoryScoreboard::new()),
    };
    let mut session =
        PlaySession::new(engine, scoreboard, Player::new(&cli.player, true)).into_diagnostic()?;

    // Replay commands
    let Some(commands) = &cli.commands else {
        return Ok(());
    };
    let file = File::open(commands).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => {
                let outcome = session.apply(command).await;
                match outcome {
                    Ok(Outcome::Solved { wins: Some(wins) }) => {
                        println!("Solved! {} now has {wins} wins", session.player().id);
                    }
                    Ok(_) => {}
                    Err(e) => eprintln!("Error processing command: {}", e),
                }
            }
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    // Output final board
    let stdout = io::stdout();
    BoardWriter::new(stdout.lock())
        .write_board(session.engine())
        .into_diagnostic()?;
    println!(
        "status: {}",
        if session.is_complete() {
            "solved"
        } else {
            "unsolved"
        }
    );

    Ok(())
}
