//! Cube state: the 26 pieces, their logs and the global move log.
//!
//! A [`Cube`] is an owned value. Independent puzzles are independent `Cube`
//! values and never share pieces. Reads never mutate; only [`Cube::new`],
//! [`Cube::reset`] and the move engine change state.

use crate::config::EngineConfig;
use crate::geometry::Move;
use crate::pieces::{solved_colors, solved_position, Coord, FaceColors, PieceKind, NUM_PIECES};

/// One move as seen by a single piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mv: Move,
    pub from: Coord,
    pub to: Coord,
    /// Tick of the move in the owning cube's global log.
    pub tick: u64,
}

/// One entry of the global move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub tick: u64,
}

/// A cubie with a stable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(crate) id: usize,
    pub(crate) position: Coord,
    pub(crate) colors: FaceColors,
    pub(crate) history: Vec<HistoryEntry>,
}

impl Piece {
    fn solved(id: usize) -> Self {
        Self {
            id,
            position: solved_position(id),
            colors: solved_colors(id),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn colors(&self) -> &FaceColors {
        &self.colors
    }

    /// Every move that touched this piece, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn solved_position(&self) -> Coord {
        solved_position(self.id)
    }

    pub fn is_home(&self) -> bool {
        self.position == self.solved_position()
    }

    /// Kind of the piece by identity; a piece keeps its kind wherever it goes.
    pub fn kind(&self) -> PieceKind {
        PieceKind::of(self.solved_position())
    }
}

/// Read-only view of one piece handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub id: usize,
    pub position: Coord,
    pub colors: FaceColors,
}

/// The mutable puzzle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) move_log: Vec<MoveRecord>,
    pub(crate) next_tick: u64,
    pub(crate) config: EngineConfig,
}

impl Cube {
    /// A solved cube with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            pieces: (0..NUM_PIECES).map(Piece::solved).collect(),
            move_log: Vec::new(),
            next_tick: 0,
            config,
        }
    }

    /// Replaces the whole state with a solved cube and clears all history.
    /// The configuration is kept.
    pub fn reset(&mut self) {
        log::info!("resetting cube ({} moves discarded)", self.move_log.len());
        *self = Self::with_config(self.config);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pieces ordered by id.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: usize) -> Option<&Piece> {
        self.pieces.get(id)
    }

    /// The piece currently occupying `position`.
    pub fn piece_at(&self, position: Coord) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.position == position)
    }

    /// Global move log, oldest first.
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    /// The moves of the global log without their ticks.
    pub fn moves(&self) -> Vec<Move> {
        self.move_log.iter().map(|record| record.mv).collect()
    }

    /// Snapshot of every piece, ordered by id, reflecting the last
    /// committed move.
    pub fn snapshot(&self) -> Vec<PieceSnapshot> {
        self.pieces
            .iter()
            .map(|piece| PieceSnapshot {
                id: piece.id,
                position: piece.position,
                colors: piece.colors,
            })
            .collect()
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
