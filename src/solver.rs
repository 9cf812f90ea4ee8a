//! Reversal solver.
//!
//! Slice turns form a group, so undoing a recorded sequence means applying
//! the inverse of each move in reverse order. The result is always correct
//! and is deliberately left as is: merging or cancelling moves here would
//! only be safe if it preserved the exact group element, and the reversal
//! is what callers replay.

use std::fmt;

use crate::cube::{Cube, MoveRecord, Piece};
use crate::engine::MoveError;
use crate::geometry::Move;

/// Which path produced a [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveMethod {
    /// Nothing was recorded, so there is nothing to undo.
    AlreadySolved,
    /// The inverted move log.
    Reversal,
}

impl SolveMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            SolveMethod::AlreadySolved => "Already Solved",
            SolveMethod::Reversal => "Reversal",
        }
    }
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A move sequence that returns a cube to the state its log started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub success: bool,
    pub method: SolveMethod,
}

impl Solution {
    fn already_solved() -> Self {
        Self {
            moves: Vec::new(),
            success: true,
            method: SolveMethod::AlreadySolved,
        }
    }
}

/// Reverses the order and inverts each move.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

/// Solves from a recorded log.
pub fn solve_by_reversal(log: &[MoveRecord]) -> Solution {
    if log.is_empty() {
        return Solution::already_solved();
    }
    let moves: Vec<Move> = log.iter().map(|record| record.mv).collect();
    Solution {
        moves: invert_sequence(&moves),
        success: true,
        method: SolveMethod::Reversal,
    }
}

/// Rebuilds the global log from per-piece histories.
///
/// Every move touches at least eight pieces, so each tick appears in some
/// piece's history; duplicates of the same tick are collapsed.
pub fn merge_piece_histories(pieces: &[Piece]) -> Vec<MoveRecord> {
    let mut records: Vec<MoveRecord> = pieces
        .iter()
        .flat_map(|piece| piece.history())
        .map(|entry| MoveRecord {
            mv: entry.mv,
            tick: entry.tick,
        })
        .collect();
    records.sort_unstable_by_key(|record| record.tick);
    records.dedup_by_key(|record| record.tick);
    records
}

impl Cube {
    /// Inverse of the global move log.
    pub fn solve_by_reversal(&self) -> Solution {
        let solution = solve_by_reversal(&self.move_log);
        log::info!(
            "reversal solve: {} moves ({})",
            solution.moves.len(),
            solution.method
        );
        solution
    }

    /// Inverse of the log reconstructed from the pieces' own histories.
    pub fn solve_from_piece_histories(&self) -> Solution {
        solve_by_reversal(&merge_piece_histories(&self.pieces))
    }

    /// Replays a solution through the move engine, all or nothing.
    pub fn apply_solution(&mut self, solution: &Solution) -> Result<(), MoveError> {
        self.apply_sequence(&solution.moves)
    }
}
