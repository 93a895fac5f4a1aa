//! Constants for board geometry and engine parameters.
//!
//! The board layout is fixed by the rules: two rows of six pits with four
//! seeds each, one store per player.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of pits per player row.
pub const PITS: usize = 6;

/// Number of players.
pub const PLAYERS: usize = 2;

/// Seeds in every pit at the start of a game.
pub const INITIAL_SEEDS: u32 = 4;

/// Total seeds in play. Conserved across pits and stores by every move.
pub const TOTAL_SEEDS: u32 = INITIAL_SEEDS * PITS as u32 * PLAYERS as u32;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth (in plies) for the agent.
pub const DEFAULT_DEPTH: u32 = 6;

/// UCB1 exploration constant for the (unfinished) Monte Carlo tree node.
pub const UCB1_C: f64 = 1.41;
