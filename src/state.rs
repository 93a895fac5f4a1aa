//! Kalaha board state and move execution.
//!
//! This module provides the core game logic, including:
//! - Board state representation (two pit rows, two stores, turn flag)
//! - Sowing with extra-turn and capture handling
//! - Terminal detection and the end-of-game sweep
//!
//! A move sows counter-clockwise: the mover's remaining pits, the mover's
//! store, then the opponent's pits. The opponent's store is never visited.
//! States are plain values; search clones them freely and no clone ever
//! aliases the live game state.

use std::cmp::Ordering;
use std::fmt;

use crate::constants::{INITIAL_SEEDS, PITS, TOTAL_SEEDS};

/// Result of attempting to play an invalid move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Pocket index outside `0..6`
    OutOfRange(usize),
    /// Chosen pocket holds no seeds
    EmptyPocket(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange(pocket) => write!(f, "invalid move: pocket {pocket} out of range"),
            MoveError::EmptyPocket(pocket) => write!(f, "invalid move: pocket {pocket} is empty"),
        }
    }
}

impl std::error::Error for MoveError {}

/// What a successfully applied move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Last seed landed in the mover's own store; the turn did not pass.
    pub extra_turn: bool,
    /// Seeds banked by a capture, including the landing seed (0 if none).
    pub captured: u32,
}

/// Outcome of a finished game, as reported by [`end_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player(usize),
    Draw,
}

/// A Kalaha board state.
///
/// Mutated only through [`apply_move`] and [`end_game`]; everything else
/// sees it through read-only accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// Seed counts, one row of six pits per player
    pits: [[u32; PITS]; 2],
    /// Banked seeds per player
    score: [u32; 2],
    /// Player to move (0 or 1)
    turn: usize,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Create the initial position: four seeds in every pit, player 0 to move.
    pub fn new() -> Self {
        Self {
            pits: [[INITIAL_SEEDS; PITS]; 2],
            score: [0; 2],
            turn: 0,
        }
    }

    /// Build an arbitrary position. Useful for setting up test scenarios.
    pub fn from_parts(pits: [[u32; PITS]; 2], score: [u32; 2], turn: usize) -> Self {
        debug_assert!(turn < 2);
        Self { pits, score, turn }
    }

    /// The given player's pit row.
    pub fn pits(&self, player: usize) -> &[u32; PITS] {
        &self.pits[player]
    }

    /// The given player's banked score.
    pub fn score(&self, player: usize) -> u32 {
        self.score[player]
    }

    /// Player to move next.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Seeds still on the board (both rows, stores excluded).
    pub fn seeds_on_board(&self) -> u32 {
        self.pits[0].iter().sum::<u32>() + self.pits[1].iter().sum::<u32>()
    }
}

/// One slot of the sowing cycle: a pit on some row, or the mover's store.
/// The opponent's store is not part of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Pit(usize, usize),
    Store,
}

/// Advance the sowing cursor one slot counter-clockwise.
fn next_slot(slot: Slot, mover: usize) -> Slot {
    match slot {
        Slot::Pit(row, idx) if idx + 1 < PITS => Slot::Pit(row, idx + 1),
        Slot::Pit(row, _) if row == mover => Slot::Store,
        Slot::Pit(..) => Slot::Pit(mover, 0),
        Slot::Store => Slot::Pit(1 - mover, 0),
    }
}

/// Sow the seeds from `pocket` for the player to move.
///
/// Handles store landings (extra turn), captures, and turn passing.
/// On error the state is left untouched.
///
/// # Errors
/// - [`MoveError::OutOfRange`] if `pocket` is not in `0..6`
/// - [`MoveError::EmptyPocket`] if the mover's pit at `pocket` is empty
pub fn apply_move(state: &mut State, pocket: usize) -> Result<MoveOutcome, MoveError> {
    if pocket >= PITS {
        return Err(MoveError::OutOfRange(pocket));
    }
    let mover = state.turn;
    let mut seeds = state.pits[mover][pocket];
    if seeds == 0 {
        return Err(MoveError::EmptyPocket(pocket));
    }
    state.pits[mover][pocket] = 0;

    let mut cursor = Slot::Pit(mover, pocket);
    // Latched as soon as a seed lands on the opponent's row; such a move is
    // never allowed to capture, even if it comes all the way back around.
    let mut crossed = false;
    while seeds > 0 {
        cursor = next_slot(cursor, mover);
        match cursor {
            Slot::Store => state.score[mover] += 1,
            Slot::Pit(row, idx) => {
                state.pits[row][idx] += 1;
                if row != mover {
                    crossed = true;
                }
            }
        }
        seeds -= 1;
    }

    let mut captured = 0;
    let extra_turn = match cursor {
        Slot::Store => true,
        Slot::Pit(row, idx) => {
            // Capture: the last seed fell into an own pit that was empty
            // before, and the mirrored opponent pit holds seeds.
            let mirror = PITS - 1 - idx;
            if row == mover
                && !crossed
                && state.pits[mover][idx] == 1
                && state.pits[1 - mover][mirror] > 0
            {
                captured = state.pits[mover][idx] + state.pits[1 - mover][mirror];
                state.pits[mover][idx] = 0;
                state.pits[1 - mover][mirror] = 0;
                state.score[mover] += captured;
            }
            false
        }
    };

    if !extra_turn {
        state.turn = 1 - state.turn;
    }
    Ok(MoveOutcome { extra_turn, captured })
}

/// A game is over once either row is completely empty.
pub fn is_terminal(state: &State) -> bool {
    state.pits[0].iter().sum::<u32>() == 0 || state.pits[1].iter().sum::<u32>() == 0
}

/// Pockets the player to move may sow from, in ascending order.
pub fn legal_moves(state: &State) -> Vec<usize> {
    (0..PITS).filter(|&i| state.pits[state.turn][i] > 0).collect()
}

/// Sweep the remaining seeds into their owners' stores and name the winner.
///
/// Meant to be called once [`is_terminal`] holds; afterwards both rows are
/// empty and the scores account for all seeds.
pub fn end_game(state: &mut State) -> Winner {
    for player in 0..2 {
        state.score[player] += state.pits[player].iter().sum::<u32>();
        state.pits[player] = [0; PITS];
    }
    debug_assert_eq!(state.score[0] + state.score[1], TOTAL_SEEDS);
    match state.score[0].cmp(&state.score[1]) {
        Ordering::Greater => Winner::Player(0),
        Ordering::Less => Winner::Player(1),
        Ordering::Equal => Winner::Draw,
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slots:   |")?;
        for i in 0..PITS {
            write!(f, " {i} |")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(39))?;
        // Player 2's row is mirrored so both rows read in sowing direction
        write!(f, "Player 2 |")?;
        for seeds in self.pits[1].iter().rev() {
            write!(f, " {seeds} |")?;
        }
        writeln!(f, " Score: {}", self.score[1])?;
        writeln!(f, "{}", "-".repeat(39))?;
        write!(f, "Player 1 |")?;
        for seeds in self.pits[0].iter() {
            write!(f, " {seeds} |")?;
        }
        writeln!(f, " Score: {}", self.score[0])?;
        write!(f, "{}", "=".repeat(39))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(state: &State) -> u32 {
        state.seeds_on_board() + state.score(0) + state.score(1)
    }

    #[test]
    fn test_initial_state() {
        let state = State::new();
        assert_eq!(state.pits(0), &[4; 6]);
        assert_eq!(state.pits(1), &[4; 6]);
        assert_eq!(state.score(0), 0);
        assert_eq!(state.score(1), 0);
        assert_eq!(state.turn(), 0);
        assert_eq!(total(&state), TOTAL_SEEDS);
    }

    #[test]
    fn test_out_of_range_pocket_leaves_state_unchanged() {
        let mut state = State::new();
        let before = state.clone();
        assert_eq!(apply_move(&mut state, 6), Err(MoveError::OutOfRange(6)));
        assert_eq!(apply_move(&mut state, 42), Err(MoveError::OutOfRange(42)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_empty_pocket_leaves_state_unchanged() {
        let mut state = State::from_parts([[0, 4, 4, 4, 4, 4], [4; 6]], [4, 0], 0);
        let before = state.clone();
        assert_eq!(apply_move(&mut state, 0), Err(MoveError::EmptyPocket(0)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_opening_pocket_two_grants_extra_turn() {
        // Four seeds from pit 2 land in pits 3, 4, 5 and the store.
        let mut state = State::new();
        let outcome = apply_move(&mut state, 2).unwrap();
        assert!(outcome.extra_turn);
        assert_eq!(outcome.captured, 0);
        assert_eq!(state.pits(0), &[4, 4, 0, 5, 5, 5]);
        assert_eq!(state.pits(1), &[4; 6]);
        assert_eq!(state.score(0), 1);
        assert_eq!(state.turn(), 0);
        assert_eq!(total(&state), TOTAL_SEEDS);
    }

    #[test]
    fn test_sowing_continues_into_opponent_first_pit_after_store() {
        // Two seeds from pit 5: one in the store, the next in the opponent's
        // pit 0. No slot is skipped when crossing the store.
        let mut state = State::from_parts([[4, 4, 4, 4, 4, 2], [4; 6]], [2, 0], 0);
        let outcome = apply_move(&mut state, 5).unwrap();
        assert!(!outcome.extra_turn);
        assert_eq!(state.score(0), 3);
        assert_eq!(state.pits(1), &[5, 4, 4, 4, 4, 4]);
        assert_eq!(state.turn(), 1);
        assert_eq!(total(&state), TOTAL_SEEDS);
    }

    #[test]
    fn test_opponent_store_is_skipped() {
        // Eight seeds from pit 5: store, all six opponent pits, then back to
        // the mover's own pit 0. The opponent's store never gains a seed.
        let mut state = State::from_parts([[0, 4, 4, 4, 4, 8], [4; 6]], [0, 0], 0);
        apply_move(&mut state, 5).unwrap();
        assert_eq!(state.score(0), 1);
        assert_eq!(state.score(1), 0);
        assert_eq!(state.pits(1), &[5; 6]);
        assert_eq!(state.pits(0), &[1, 4, 4, 4, 4, 0]);
        assert_eq!(total(&state), TOTAL_SEEDS);
    }

    #[test]
    fn test_capture_from_own_empty_pit() {
        // Two seeds from pit 0 land in pits 1 and 2; pit 2 was empty and the
        // mirrored opponent pit 3 holds 6 seeds, so 1 + 6 are banked.
        let mut state = State::from_parts([[2, 3, 0, 4, 4, 4], [5, 5, 5, 6, 1, 1]], [5, 3], 0);
        let outcome = apply_move(&mut state, 0).unwrap();
        assert_eq!(outcome.captured, 7);
        assert!(!outcome.extra_turn);
        assert_eq!(state.pits(0), &[0, 4, 0, 4, 4, 4]);
        assert_eq!(state.pits(1), &[5, 5, 5, 0, 1, 1]);
        assert_eq!(state.score(0), 12);
        assert_eq!(state.turn(), 1);
        assert_eq!(total(&state), TOTAL_SEEDS);
    }

    #[test]
    fn test_no_capture_when_mirror_pit_is_empty() {
        let mut state = State::from_parts([[2, 3, 0, 4, 4, 4], [5, 5, 5, 0, 5, 5]], [5, 1], 0);
        let outcome = apply_move(&mut state, 0).unwrap();
        assert_eq!(outcome.captured, 0);
        assert_eq!(state.pits(0), &[0, 4, 1, 4, 4, 4]);
        assert_eq!(state.score(0), 5);
    }

    #[test]
    fn test_no_capture_when_landing_pit_was_occupied() {
        let mut state = State::from_parts([[2, 3, 1, 4, 4, 4], [5, 5, 5, 5, 5, 4]], [1, 0], 0);
        let outcome = apply_move(&mut state, 0).unwrap();
        assert_eq!(outcome.captured, 0);
        assert_eq!(state.pits(0)[2], 2);
    }

    #[test]
    fn test_full_lap_never_captures() {
        // Thirteen seeds visit every slot of the cycle once and the last one
        // returns to the emptied starting pit. The sowing touched the
        // opponent's row, so no capture fires even though the landing pit
        // holds exactly one seed and its mirror is occupied.
        let mut state = State::from_parts([[0, 0, 13, 0, 0, 0], [4, 4, 4, 4, 4, 3]], [6, 6], 0);
        let outcome = apply_move(&mut state, 2).unwrap();
        assert_eq!(outcome.captured, 0);
        assert!(!outcome.extra_turn);
        assert_eq!(state.pits(0), &[1, 1, 1, 1, 1, 1]);
        assert_eq!(state.pits(1), &[5, 5, 5, 5, 5, 4]);
        assert_eq!(state.score(0), 7);
        assert_eq!(state.turn(), 1);
        assert_eq!(total(&state), TOTAL_SEEDS);
    }

    #[test]
    fn test_turn_passes_after_plain_move() {
        let mut state = State::new();
        let outcome = apply_move(&mut state, 0).unwrap();
        assert!(!outcome.extra_turn);
        assert_eq!(state.turn(), 1);
    }

    #[test]
    fn test_terminal_when_either_row_is_empty() {
        assert!(!is_terminal(&State::new()));
        let p0_empty = State::from_parts([[0; 6], [4; 6]], [14, 10], 1);
        assert!(is_terminal(&p0_empty));
        let p1_empty = State::from_parts([[4; 6], [0; 6]], [10, 14], 0);
        assert!(is_terminal(&p1_empty));
    }

    #[test]
    fn test_legal_moves_ascending_nonempty() {
        let state = State::from_parts([[0, 2, 0, 1, 0, 7], [4; 6]], [7, 7], 0);
        assert_eq!(legal_moves(&state), vec![1, 3, 5]);
        let state = State::from_parts([[4; 6], [3, 0, 0, 0, 0, 1]], [10, 10], 1);
        assert_eq!(legal_moves(&state), vec![0, 5]);
    }

    #[test]
    fn test_end_game_sweeps_rows_into_scores() {
        let mut state = State::from_parts([[0; 6], [1, 2, 3, 0, 0, 0]], [22, 20], 1);
        assert!(is_terminal(&state));
        let winner = end_game(&mut state);
        assert_eq!(winner, Winner::Player(1));
        assert_eq!(state.pits(0), &[0; 6]);
        assert_eq!(state.pits(1), &[0; 6]);
        assert_eq!(state.score(0) + state.score(1), TOTAL_SEEDS);
        assert_eq!(state.score(1), 26);
    }

    #[test]
    fn test_end_game_draw() {
        let mut state = State::from_parts([[2, 0, 0, 0, 0, 0], [0, 0, 2, 0, 0, 0]], [22, 22], 0);
        assert_eq!(end_game(&mut state), Winner::Draw);
    }

    #[test]
    fn test_conservation_over_move_sequence() {
        let mut state = State::new();
        for pocket in [2, 0, 1, 5, 3, 0, 4] {
            if legal_moves(&state).contains(&pocket) {
                apply_move(&mut state, pocket).unwrap();
            }
            assert_eq!(total(&state), TOTAL_SEEDS);
        }
    }

    #[test]
    fn test_display_mirrors_player_two_row() {
        let state = State::from_parts([[1, 2, 3, 4, 5, 6], [7, 8, 9, 10, 11, 12]], [0, 0], 0);
        let rendered = state.to_string();
        assert!(rendered.contains("Player 2 | 12 | 11 | 10 | 9 | 8 | 7 |"));
        assert!(rendered.contains("Player 1 | 1 | 2 | 3 | 4 | 5 | 6 |"));
    }
}
