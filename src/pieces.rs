//! Piece catalog: stable piece identities and their solved-state data.
//!
//! The 26 visible cubies are numbered by iterating x, y, z over {-1, 0, 1}
//! in row-major order and skipping the hidden core at the origin. That
//! ordering is the canonical id-to-position mapping.

use std::ops::{Index, IndexMut};

/// A cubie coordinate, each component in {-1, 0, 1}.
pub type Coord = (i32, i32, i32);

/// Number of pieces on a 3x3x3 puzzle (the core is not represented).
pub const NUM_PIECES: usize = 26;

/// Number of cells in the full 3x3x3 grid, core included.
const GRID_SIZE: usize = 27;

/// Cell index of the core at the origin.
const CORE_CELL: usize = 13;

/// Sticker color. `Black` is the color held by faces that point into the
/// puzzle in the solved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Red,
    Orange,
    Yellow,
    White,
    Black,
}

impl Color {
    /// Single-character symbol used by the facelet net.
    pub const fn symbol(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Black => '.',
        }
    }
}

/// One of the six fixed face directions a sticker slot can point along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
    ];

    /// Outward unit normal. Right is +x, top is +y, front is +z.
    pub const fn normal(self) -> Coord {
        match self {
            Face::Front => (0, 0, 1),
            Face::Back => (0, 0, -1),
            Face::Right => (1, 0, 0),
            Face::Left => (-1, 0, 0),
            Face::Top => (0, 1, 0),
            Face::Bottom => (0, -1, 0),
        }
    }

    /// Inverse of [`Face::normal`]. Returns `None` for anything that is not
    /// an axis-aligned unit vector.
    pub const fn from_normal(normal: Coord) -> Option<Face> {
        match normal {
            (0, 0, 1) => Some(Face::Front),
            (0, 0, -1) => Some(Face::Back),
            (1, 0, 0) => Some(Face::Right),
            (-1, 0, 0) => Some(Face::Left),
            (0, 1, 0) => Some(Face::Top),
            (0, -1, 0) => Some(Face::Bottom),
            _ => None,
        }
    }

    /// The color every sticker on this face shows when the puzzle is solved.
    pub const fn canonical_color(self) -> Color {
        match self {
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
            Face::Right => Color::Yellow,
            Face::Left => Color::White,
            Face::Top => Color::Blue,
            Face::Bottom => Color::Green,
        }
    }

    /// Whether a cubie at `position` lies on this face.
    pub const fn contains(self, position: Coord) -> bool {
        let (nx, ny, nz) = self.normal();
        let (x, y, z) = position;
        (nx != 0 && x == nx) || (ny != 0 && y == ny) || (nz != 0 && z == nz)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// The six sticker slots of one piece. Every slot always holds a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceColors([Color; 6]);

impl FaceColors {
    /// All six slots set to the same color.
    pub const fn filled(color: Color) -> Self {
        Self([color; 6])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        Face::ALL.iter().map(move |&face| (face, self[face]))
    }
}

impl Index<Face> for FaceColors {
    type Output = Color;

    fn index(&self, face: Face) -> &Color {
        &self.0[face.index()]
    }
}

impl IndexMut<Face> for FaceColors {
    fn index_mut(&mut self, face: Face) -> &mut Color {
        &mut self.0[face.index()]
    }
}

/// Piece classification by how many faces it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Center,
    Edge,
    Corner,
}

impl PieceKind {
    /// Classifies a position by its number of non-zero coordinates.
    pub const fn of(position: Coord) -> PieceKind {
        let (x, y, z) = position;
        let nonzero = (x != 0) as u8 + (y != 0) as u8 + (z != 0) as u8;
        match nonzero {
            1 => PieceKind::Center,
            2 => PieceKind::Edge,
            _ => PieceKind::Corner,
        }
    }
}

/// Solved positions indexed by piece id.
pub const SOLVED_POSITIONS: [Coord; NUM_PIECES] = build_solved_positions();

const fn build_solved_positions() -> [Coord; NUM_PIECES] {
    let mut positions = [(0, 0, 0); NUM_PIECES];
    let mut cell = 0;
    let mut id = 0;
    while cell < GRID_SIZE {
        if cell != CORE_CELL {
            positions[id] = cell_to_coord(cell);
            id += 1;
        }
        cell += 1;
    }
    positions
}

/// Converts a grid cell index (x-major) to a centered coordinate.
const fn cell_to_coord(cell: usize) -> Coord {
    (
        (cell / 9) as i32 - 1,
        ((cell / 3) % 3) as i32 - 1,
        (cell % 3) as i32 - 1,
    )
}

/// Whether `position` is one of the 26 cubie coordinates.
pub const fn is_valid_position(position: Coord) -> bool {
    let (x, y, z) = position;
    x >= -1 && x <= 1 && y >= -1 && y <= 1 && z >= -1 && z <= 1 && !(x == 0 && y == 0 && z == 0)
}

/// Solved-state position of piece `id`.
///
/// # Panics
///
/// Panics if `id >= NUM_PIECES`.
pub const fn solved_position(id: usize) -> Coord {
    SOLVED_POSITIONS[id]
}

/// Id of the piece whose solved position is `position`.
pub const fn piece_id_at(position: Coord) -> Option<usize> {
    if !is_valid_position(position) {
        return None;
    }
    let (x, y, z) = position;
    let cell = ((x + 1) * 9 + (y + 1) * 3 + (z + 1)) as usize;
    Some(if cell < CORE_CELL { cell } else { cell - 1 })
}

/// Solved-state sticker colors of piece `id`: the canonical color on faces
/// the piece sits on, black everywhere else.
///
/// # Panics
///
/// Panics if `id >= NUM_PIECES`.
pub fn solved_colors(id: usize) -> FaceColors {
    let position = solved_position(id);
    let mut colors = FaceColors::filled(Color::Black);
    for face in Face::ALL {
        if face.contains(position) {
            colors[face] = face.canonical_color();
        }
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_positions_are_distinct_and_valid() {
        let mut seen = rustc_hash::FxHashSet::default();
        for position in SOLVED_POSITIONS {
            assert!(is_valid_position(position), "{position:?} is not a cubie");
            assert!(seen.insert(position), "{position:?} appears twice");
        }
        assert_eq!(seen.len(), NUM_PIECES);
    }

    #[test]
    fn test_canonical_ordering() {
        assert_eq!(solved_position(0), (-1, -1, -1));
        assert_eq!(solved_position(1), (-1, -1, 0));
        assert_eq!(solved_position(12), (0, 0, -1));
        assert_eq!(solved_position(13), (0, 0, 1));
        assert_eq!(solved_position(25), (1, 1, 1));
    }

    #[test]
    fn test_piece_id_lookup_matches_catalog() {
        for id in 0..NUM_PIECES {
            assert_eq!(piece_id_at(solved_position(id)), Some(id));
        }
        assert_eq!(piece_id_at((0, 0, 0)), None);
        assert_eq!(piece_id_at((2, 0, 0)), None);
    }

    #[test]
    fn test_solved_colors_follow_coordinate_extremes() {
        for id in 0..NUM_PIECES {
            let (_, y, _) = solved_position(id);
            let colors = solved_colors(id);
            if y == 1 {
                assert_eq!(colors[Face::Top], Color::Blue);
            } else {
                assert_eq!(colors[Face::Top], Color::Black);
            }
            if y == -1 {
                assert_eq!(colors[Face::Bottom], Color::Green);
            }
        }

        let corner = solved_colors(piece_id_at((1, 1, 1)).unwrap());
        assert_eq!(corner[Face::Right], Color::Yellow);
        assert_eq!(corner[Face::Top], Color::Blue);
        assert_eq!(corner[Face::Front], Color::Red);
        assert_eq!(corner[Face::Left], Color::Black);
    }

    #[test]
    fn test_piece_kind_counts() {
        let count = |kind| {
            SOLVED_POSITIONS
                .iter()
                .filter(|&&position| PieceKind::of(position) == kind)
                .count()
        };
        assert_eq!(count(PieceKind::Center), 6);
        assert_eq!(count(PieceKind::Edge), 12);
        assert_eq!(count(PieceKind::Corner), 8);
    }

    #[test]
    fn test_face_normals_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_normal(face.normal()), Some(face));
        }
        assert_eq!(Face::from_normal((1, 1, 0)), None);
    }

    #[test]
    fn test_face_membership() {
        assert!(Face::Right.contains((1, -1, 0)));
        assert!(!Face::Right.contains((0, -1, 0)));
        assert!(Face::Bottom.contains((0, -1, 0)));
        assert_eq!(
            SOLVED_POSITIONS
                .iter()
                .filter(|&&position| Face::Front.contains(position))
                .count(),
            9
        );
    }
}
