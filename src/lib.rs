//! 3x3x3 Twisty Puzzle Engine
//!
//! Tracks the 26 pieces of a twisty cube through quarter turns, keeps a
//! reversible move history, solves by replaying the inverted history and
//! scores how scrambled a cube is.

pub mod analysis;
pub mod config;
pub mod cube;
pub mod engine;
pub mod geometry;
pub mod net;
pub mod notation;
pub mod persistence;
pub mod pieces;
pub mod solver;

use rand::RngCore;

use analysis::Complexity;
use cube::{Cube, MoveRecord, PieceSnapshot};
use engine::MoveError;
use geometry::Move;
use solver::Solution;

/// The puzzle surface a UI or renderer drives.
///
/// Object safe, so callers can hold any puzzle as `dyn PuzzleOps`.
pub trait PuzzleOps {
    /// Applies a move given as UI strings, e.g. `("R", "clockwise")`.
    fn request_move(&mut self, slice: &str, direction: &str) -> Result<MoveRecord, MoveError>;
    fn reset(&mut self);
    fn scramble(&mut self, length: usize, rng: &mut dyn RngCore) -> Vec<Move>;
    fn solve_by_reversal(&self) -> Solution;
    fn is_solved(&self) -> bool;
    fn analyze_complexity(&self) -> Complexity;
    fn snapshot(&self) -> Vec<PieceSnapshot>;
}

impl PuzzleOps for Cube {
    fn request_move(&mut self, slice: &str, direction: &str) -> Result<MoveRecord, MoveError> {
        Cube::apply_move_str(self, slice, direction)
    }

    fn reset(&mut self) {
        Cube::reset(self)
    }

    fn scramble(&mut self, length: usize, rng: &mut dyn RngCore) -> Vec<Move> {
        Cube::scramble(self, length, rng)
    }

    fn solve_by_reversal(&self) -> Solution {
        Cube::solve_by_reversal(self)
    }

    fn is_solved(&self) -> bool {
        Cube::is_solved(self)
    }

    fn analyze_complexity(&self) -> Complexity {
        Cube::analyze_complexity(self)
    }

    fn snapshot(&self) -> Vec<PieceSnapshot> {
        Cube::snapshot(self)
    }
}
