//! Kalaha-Rust driver: play against the engine or watch two agents duel.
//!
//! ## Usage
//!
//! - `kalaha-rust` - Run an agent-vs-agent duel with default settings
//! - `kalaha-rust play` - Play against the alpha-beta agent
//! - `kalaha-rust duel` - Configure and run an agent-vs-agent game

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use kalaha_rust::agent::{Algorithm, SearchAgent};
use kalaha_rust::constants::DEFAULT_DEPTH;
use kalaha_rust::state::{State, Winner, apply_move, end_game, is_terminal, legal_moves};

/// Kalaha-Rust: a six-pit Kalaha engine with adversarial search agents
#[derive(Parser)]
#[command(name = "kalaha-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine (you are player 1)
    Play {
        /// Difficulty 0-3, mapped to search depth 2/4/6/8
        #[arg(short, long, default_value_t = 2)]
        difficulty: u32,
    },
    /// Let two agents play each other
    Duel {
        /// Algorithm for player 1
        #[arg(long, value_enum, default_value_t = Algorithm::Minimax)]
        algorithm0: Algorithm,
        /// Algorithm for player 2
        #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
        algorithm1: Algorithm,
        /// Search depth for player 1
        #[arg(long, default_value_t = 2)]
        depth0: u32,
        /// Search depth for player 2
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth1: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { difficulty }) => play(2 + 2 * difficulty.min(3)),
        Some(Commands::Duel {
            algorithm0,
            algorithm1,
            depth0,
            depth1,
        }) => duel([algorithm0, algorithm1], [depth0, depth1]),
        None => duel([Algorithm::Minimax, Algorithm::AlphaBeta], [2, DEFAULT_DEPTH]),
    }
}

/// Interactive game: human as player 1 against an alpha-beta agent.
fn play(depth: u32) -> Result<()> {
    let mut game = State::new();
    let mut agent = SearchAgent::new(Algorithm::AlphaBeta, depth, 1);

    println!("Running game (anti-clockwise). You are player 1.");
    while !is_terminal(&game) {
        println!("\n{game}");
        if game.turn() == 0 {
            let pocket = prompt_move(&game)?;
            apply_move(&mut game, pocket)?;
        } else {
            let Some(pocket) = agent.get_best_move(&game)? else {
                break;
            };
            println!("AI sows from slot {pocket}");
            apply_move(&mut game, pocket)?;
        }
    }

    let winner = end_game(&mut game);
    println!("\n{game}");
    announce(winner);
    println!("AI examined {} states", agent.investigated);
    Ok(())
}

/// Prompt on stdin until the human names a playable slot.
fn prompt_move(game: &State) -> Result<usize> {
    let moves = legal_moves(game);
    let stdin = io::stdin();
    loop {
        print!("Choose a slot to sow {moves:?}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("stdin closed before the game finished");
        }
        match line.trim().parse::<usize>() {
            Ok(pocket) if moves.contains(&pocket) => return Ok(pocket),
            Ok(pocket) => println!("Slot {pocket} is not playable."),
            Err(_) => println!("Not a recognizable slot number, please try again."),
        }
    }
}

/// Agent-vs-agent game; prints the move sequence and search effort.
fn duel(algorithms: [Algorithm; 2], depths: [u32; 2]) -> Result<()> {
    let mut game = State::new();
    let mut agents = [
        SearchAgent::new(algorithms[0], depths[0], 0),
        SearchAgent::new(algorithms[1], depths[1], 1),
    ];
    let mut history: Vec<(usize, usize)> = Vec::new();

    while !is_terminal(&game) {
        let player = game.turn();
        let Some(pocket) = agents[player].get_best_move(&game)? else {
            break;
        };
        history.push((player, pocket));
        apply_move(&mut game, pocket)?;
    }

    let winner = end_game(&mut game);
    println!("{game}");
    announce(winner);
    println!("Game sequence: {history:?}");
    for (player, agent) in agents.iter().enumerate() {
        println!("Player {} examined {} states", player + 1, agent.investigated);
    }
    Ok(())
}

fn announce(winner: Winner) {
    match winner {
        Winner::Player(p) => println!("Game over, winner is player {}", p + 1),
        Winner::Draw => println!("Game over, it is a draw"),
    }
}
