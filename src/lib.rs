//! Kalaha-Rust: a six-pit Kalaha engine with adversarial search agents.
//!
//! This crate provides the game rules for two-player Kalaha (sowing,
//! extra turns, captures, the end-of-game sweep) together with
//! depth-bounded minimax and alpha-beta agents for move selection.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and engine parameters
//! - [`state`] - Core game logic (board state, sowing, captures, scoring)
//! - [`agent`] - Evaluation, child enumeration, and tree search agents
//! - [`mcts`] - Monte Carlo tree node (partially implemented)
//!
//! ## Example
//!
//! ```
//! use kalaha_rust::agent::{Algorithm, SearchAgent};
//! use kalaha_rust::state::{apply_move, is_terminal, State};
//!
//! // Create a new game and an alpha-beta agent for player 0
//! let mut state = State::new();
//! let mut agent = SearchAgent::new(Algorithm::AlphaBeta, 4, 0);
//!
//! // Ask for a move and apply it
//! if let Some(pocket) = agent.get_best_move(&state).unwrap() {
//!     apply_move(&mut state, pocket).unwrap();
//! }
//! assert!(!is_terminal(&state));
//! ```

pub mod agent;
pub mod constants;
pub mod mcts;
pub mod state;
