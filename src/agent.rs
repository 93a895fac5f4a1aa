//! Adversarial search agents for move selection.
//!
//! This module provides:
//! - A static evaluation function (banked score difference)
//! - Child enumeration over independent state clones
//! - Depth-bounded minimax, with and without alpha-beta pruning
//! - A uniform-random fallback agent
//!
//! Both tree searches maximize on the perspective player's turns and
//! minimize on the opponent's, so the same agent can be seated on either
//! side of the board or pitted against itself. Alpha-beta returns the same
//! `(move, value)` as plain minimax; pruning only skips subtrees that
//! cannot change the result.

use std::fmt;

use anyhow::{Result, bail};
use clap::ValueEnum;

use crate::state::{State, apply_move, is_terminal, legal_moves};

/// Move selection algorithm used by a [`SearchAgent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Plain depth-bounded minimax
    Minimax,
    /// Minimax with alpha-beta pruning; same moves, fewer states
    #[value(name = "alphabeta")]
    AlphaBeta,
    /// Uniformly random legal move
    Random,
    /// Monte Carlo tree search (not implemented yet, see [`crate::mcts`])
    #[value(name = "montecarlo")]
    MonteCarlo,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
            Algorithm::Random => "random",
            Algorithm::MonteCarlo => "montecarlo",
        };
        f.write_str(name)
    }
}

/// Static evaluation: `perspective`'s banked score advantage.
///
/// No look-ahead beyond what is already in the stores; this is the leaf
/// value for bounded-depth search.
pub fn evaluate(state: &State, perspective: usize) -> i32 {
    state.score(perspective) as i32 - state.score(1 - perspective) as i32
}

/// All `(pocket, resulting state)` pairs one ply from `state`, in ascending
/// pocket order. Every child is a fully detached clone.
pub fn children(state: &State) -> Vec<(usize, State)> {
    let mut out = Vec::new();
    for pocket in legal_moves(state) {
        let mut child = state.clone();
        if apply_move(&mut child, pocket).is_ok() {
            out.push((pocket, child));
        }
    }
    out
}

/// A game-tree search agent for one seat at the board.
pub struct SearchAgent {
    algorithm: Algorithm,
    depth: u32,
    perspective: usize,
    /// States generated during child enumeration, cumulative across calls.
    /// Reporting only; never influences move selection.
    pub investigated: u64,
}

impl SearchAgent {
    /// Create an agent that plays for `perspective` (0 or 1), searching
    /// `depth` plies ahead.
    pub fn new(algorithm: Algorithm, depth: u32, perspective: usize) -> Self {
        Self {
            algorithm,
            depth,
            perspective,
            investigated: 0,
        }
    }

    /// Pick a move for the player to move in `state`.
    ///
    /// Returns `None` when `state` is already terminal (nothing to apply).
    ///
    /// # Errors
    /// Fails for an algorithm that has no implementation yet.
    pub fn get_best_move(&mut self, state: &State) -> Result<Option<usize>> {
        match self.algorithm {
            Algorithm::Minimax => Ok(self.minimax(state, self.depth).0),
            Algorithm::AlphaBeta => Ok(self.alphabeta(state, self.depth, i32::MIN, i32::MAX).0),
            Algorithm::Random => Ok(random_move(state)),
            Algorithm::MonteCarlo => bail!("algorithm not supported: montecarlo"),
        }
    }

    /// Enumerate children through the shared counter.
    fn expand(&mut self, state: &State) -> Vec<(usize, State)> {
        let kids = children(state);
        self.investigated += kids.len() as u64;
        kids
    }

    /// Depth-bounded minimax.
    ///
    /// Returns the chosen pocket (or `None` at a leaf) and its value from
    /// the perspective player's point of view. Ties keep the first move
    /// enumerated; later equal values never displace the incumbent.
    pub fn minimax(&mut self, state: &State, depth: u32) -> (Option<usize>, i32) {
        if depth == 0 || is_terminal(state) {
            return (None, evaluate(state, self.perspective));
        }
        if state.turn() == self.perspective {
            let mut best = (None, i32::MIN);
            for (pocket, child) in self.expand(state) {
                let (_, value) = self.minimax(&child, depth - 1);
                if value > best.1 {
                    best = (Some(pocket), value);
                }
            }
            best
        } else {
            let mut best = (None, i32::MAX);
            for (pocket, child) in self.expand(state) {
                let (_, value) = self.minimax(&child, depth - 1);
                if value < best.1 {
                    best = (Some(pocket), value);
                }
            }
            best
        }
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// `alpha` is the value the maximizing side can already guarantee,
    /// `beta` the minimizing side's counterpart. Remaining siblings are
    /// dropped as soon as `beta <= alpha`. Kept separate from [`minimax`]
    /// so the two can be compared state-for-state.
    pub fn alphabeta(
        &mut self,
        state: &State,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> (Option<usize>, i32) {
        if depth == 0 || is_terminal(state) {
            return (None, evaluate(state, self.perspective));
        }
        if state.turn() == self.perspective {
            let mut best = (None, i32::MIN);
            for (pocket, child) in self.expand(state) {
                let (_, value) = self.alphabeta(&child, depth - 1, alpha, beta);
                if value > best.1 {
                    best = (Some(pocket), value);
                }
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = (None, i32::MAX);
            for (pocket, child) in self.expand(state) {
                let (_, value) = self.alphabeta(&child, depth - 1, alpha, beta);
                if value < best.1 {
                    best = (Some(pocket), value);
                }
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Pick a uniformly random legal move, or `None` if there is none.
fn random_move(state: &State) -> Option<usize> {
    let moves = legal_moves(state);
    if moves.is_empty() {
        None
    } else {
        Some(moves[fastrand::usize(..moves.len())])
    }
}
