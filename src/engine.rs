//! Move engine: the single path through which cube state changes.
//!
//! A move is first staged into a [`PendingMove`], which computes every
//! affected piece's new position and colors without touching the cube.
//! Committing writes the staged values and appends history in one step,
//! so a partially applied move is never observable. The pending move holds
//! the cube mutably, which rules out a second move starting before the
//! first has been committed.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::cube::{Cube, HistoryEntry, MoveRecord};
use crate::geometry::{Direction, Move, Slice, SliceTransform};
use crate::pieces::{is_valid_position, Coord, FaceColors, NUM_PIECES};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Invalid move: unknown slice {slice:?} or direction {direction:?}")]
    InvalidMove { slice: String, direction: String },
    #[error("Slice {0:?} is disabled in this engine configuration")]
    SliceDisabled(Slice),
    #[error("Move {mv:?} would leave more than one piece at {position:?}")]
    StateInvariantViolation { mv: Move, position: Coord },
}

/// New state for one selected piece.
#[derive(Debug, Clone, Copy)]
struct StagedUpdate {
    index: usize,
    from: Coord,
    to: Coord,
    colors: FaceColors,
}

/// A fully computed move waiting to be committed.
///
/// Dropping it without calling [`PendingMove::commit`] leaves the cube as
/// it was.
#[must_use = "a pending move does nothing until committed"]
pub struct PendingMove<'a> {
    cube: &'a mut Cube,
    mv: Move,
    updates: Vec<StagedUpdate>,
}

impl PendingMove<'_> {
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// `(piece id, from, to)` for each piece the move will carry.
    pub fn affected(&self) -> impl Iterator<Item = (usize, Coord, Coord)> + '_ {
        self.updates
            .iter()
            .map(|update| (self.cube.pieces[update.index].id, update.from, update.to))
    }

    /// Writes the staged state and records the move.
    pub fn commit(self) -> MoveRecord {
        let Self { cube, mv, updates } = self;
        let tick = cube.next_tick;
        cube.next_tick += 1;

        for update in &updates {
            let piece = &mut cube.pieces[update.index];
            piece.position = update.to;
            piece.colors = update.colors;
            piece.history.push(HistoryEntry {
                mv,
                from: update.from,
                to: update.to,
                tick,
            });
        }

        let record = MoveRecord { mv, tick };
        cube.move_log.push(record);
        log::debug!(
            "applied {:?} {:?} to {} pieces at tick {}",
            mv.slice,
            mv.direction,
            updates.len(),
            tick
        );
        record
    }
}

impl Cube {
    /// Stages `mv` against the pieces' current positions.
    pub fn begin_move(&mut self, mv: Move) -> Result<PendingMove<'_>, MoveError> {
        if !self.config.enabled_slices.contains(mv.slice) {
            log::warn!("rejected move on disabled slice {:?}", mv.slice);
            return Err(MoveError::SliceDisabled(mv.slice));
        }

        let transform = SliceTransform::new(mv);
        let updates: Vec<StagedUpdate> = self
            .pieces
            .iter()
            .enumerate()
            .filter(|(_, piece)| transform.selects(piece.position))
            .map(|(index, piece)| StagedUpdate {
                index,
                from: piece.position,
                to: transform.position(piece.position),
                colors: transform.colors(&piece.colors),
            })
            .collect();

        if self.config.verify_invariants {
            self.check_staged_positions(mv, &updates)?;
        }

        Ok(PendingMove {
            cube: self,
            mv,
            updates,
        })
    }

    /// Verifies that the staged move leaves 26 distinct cubie positions.
    fn check_staged_positions(&self, mv: Move, updates: &[StagedUpdate]) -> Result<(), MoveError> {
        let mut next_positions: Vec<Coord> = self.pieces.iter().map(|piece| piece.position).collect();
        for update in updates {
            next_positions[update.index] = update.to;
        }

        let mut occupied: FxHashSet<Coord> = FxHashSet::default();
        for position in next_positions {
            if !is_valid_position(position) || !occupied.insert(position) {
                log::error!("staged {mv:?} breaks position uniqueness at {position:?}");
                return Err(MoveError::StateInvariantViolation { mv, position });
            }
        }
        debug_assert_eq!(occupied.len(), NUM_PIECES);
        Ok(())
    }

    /// Applies one quarter turn.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveRecord, MoveError> {
        Ok(self.begin_move(mv)?.commit())
    }

    /// Applies a move given as loose strings, as UI controls send them.
    ///
    /// The slice is a single letter (`"R"`); the direction is `"clockwise"`,
    /// `"counterclockwise"` or their short forms. Anything else is rejected
    /// with [`MoveError::InvalidMove`] and leaves the cube untouched.
    pub fn apply_move_str(&mut self, slice: &str, direction: &str) -> Result<MoveRecord, MoveError> {
        let parsed = slice
            .parse::<Slice>()
            .ok()
            .zip(direction.parse::<Direction>().ok());
        match parsed {
            Some((slice, direction)) => self.apply_move(Move::new(slice, direction)),
            None => {
                log::warn!("rejected invalid move request {slice:?} {direction:?}");
                Err(MoveError::InvalidMove {
                    slice: slice.to_string(),
                    direction: direction.to_string(),
                })
            }
        }
    }

    /// Applies a sequence of moves, all or nothing.
    ///
    /// Every move is checked against the configuration before the first one
    /// is applied.
    pub fn apply_sequence(&mut self, moves: &[Move]) -> Result<(), MoveError> {
        if let Some(disabled) = moves
            .iter()
            .find(|mv| !self.config.enabled_slices.contains(mv.slice))
        {
            log::warn!("rejected sequence containing disabled slice {:?}", disabled.slice);
            return Err(MoveError::SliceDisabled(disabled.slice));
        }

        for &mv in moves {
            self.apply_move(mv)?;
        }
        Ok(())
    }

    /// Applies `length` random quarter turns drawn from the enabled slices
    /// and returns them. Each goes through [`Cube::apply_move`], so the
    /// scramble is recorded and reversible.
    pub fn scramble<R: Rng + ?Sized>(&mut self, length: usize, rng: &mut R) -> Vec<Move> {
        let slices: Vec<Slice> = self.config.enabled_slices.iter().collect();
        let mut applied = Vec::with_capacity(length);

        for _ in 0..length {
            let Some(&slice) = slices.choose(rng) else {
                log::warn!("no slices enabled, scramble stopped");
                break;
            };
            let direction = if rng.gen_bool(0.5) {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };
            let mv = Move::new(slice, direction);
            match self.apply_move(mv) {
                Ok(_) => applied.push(mv),
                Err(error) => {
                    log::error!("scramble move {mv:?} failed: {error}");
                    break;
                }
            }
        }

        log::info!("scrambled with {} moves", applied.len());
        applied
    }
}
