//! Slice transforms: which pieces a quarter turn selects, where it sends
//! them, and how it permutes their sticker slots.
//!
//! A quarter turn is a signed 90 degree rotation about one coordinate axis.
//! The same [`Rotation`] is applied to piece positions and to sticker face
//! normals, so position movement and color movement cannot drift apart.

use crate::pieces::{Coord, Face, FaceColors};

/// Coordinate axis a slice turns about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component of `position` along this axis.
    pub const fn component(self, position: Coord) -> i32 {
        match self {
            Axis::X => position.0,
            Axis::Y => position.1,
            Axis::Z => position.2,
        }
    }
}

/// One of the nine turnable layers: six outer faces and three middle slices.
///
/// `M` turns like `L`, `E` like `D` and `S` like `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slice {
    F,
    B,
    R,
    L,
    U,
    D,
    M,
    E,
    S,
}

impl Slice {
    pub const ALL: [Slice; 9] = [
        Slice::F,
        Slice::B,
        Slice::R,
        Slice::L,
        Slice::U,
        Slice::D,
        Slice::M,
        Slice::E,
        Slice::S,
    ];

    pub const fn axis(self) -> Axis {
        match self {
            Slice::R | Slice::L | Slice::M => Axis::X,
            Slice::U | Slice::D | Slice::E => Axis::Y,
            Slice::F | Slice::B | Slice::S => Axis::Z,
        }
    }

    /// Coordinate value along [`Slice::axis`] that members of the slice have.
    pub const fn layer(self) -> i32 {
        match self {
            Slice::R | Slice::U | Slice::F => 1,
            Slice::L | Slice::D | Slice::B => -1,
            Slice::M | Slice::E | Slice::S => 0,
        }
    }

    /// Membership predicate, evaluated against a piece's current position.
    pub const fn contains(self, position: Coord) -> bool {
        self.axis().component(position) == self.layer()
    }

    /// Whether turning this slice carries sticker colors along with the
    /// pieces. `S` moves positions only.
    pub const fn rotates_colors(self) -> bool {
        !matches!(self, Slice::S)
    }

    pub const fn letter(self) -> char {
        match self {
            Slice::F => 'F',
            Slice::B => 'B',
            Slice::R => 'R',
            Slice::L => 'L',
            Slice::U => 'U',
            Slice::D => 'D',
            Slice::M => 'M',
            Slice::E => 'E',
            Slice::S => 'S',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Slice> {
        match letter {
            'F' => Some(Slice::F),
            'B' => Some(Slice::B),
            'R' => Some(Slice::R),
            'L' => Some(Slice::L),
            'U' => Some(Slice::U),
            'D' => Some(Slice::D),
            'M' => Some(Slice::M),
            'E' => Some(Slice::E),
            'S' => Some(Slice::S),
            _ => None,
        }
    }

    /// Position in [`Slice::ALL`]; used as a bit index and on disk.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Slice> {
        if (index as usize) < Slice::ALL.len() {
            Some(Slice::ALL[index as usize])
        } else {
            None
        }
    }
}

/// Quarter-turn direction, as seen looking at the slice's reference face
/// from outside the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A single quarter turn of one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub slice: Slice,
    pub direction: Direction,
}

impl Move {
    pub const fn new(slice: Slice, direction: Direction) -> Self {
        Self { slice, direction }
    }

    pub const fn clockwise(slice: Slice) -> Self {
        Self::new(slice, Direction::Clockwise)
    }

    pub const fn counter_clockwise(slice: Slice) -> Self {
        Self::new(slice, Direction::CounterClockwise)
    }

    pub const fn inverse(self) -> Self {
        Self::new(self.slice, self.direction.inverse())
    }
}

/// Sense of a 90 degree rotation about the positive axis, right-hand rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quarter {
    Positive,
    Negative,
}

/// A signed quarter rotation about a coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub axis: Axis,
    pub quarter: Quarter,
}

impl Rotation {
    /// The rotation a move performs.
    ///
    /// Clockwise on `R`, `U`, `F` and `S` is a negative quarter about the
    /// positive axis; those slices are viewed from the positive side. `L`,
    /// `D`, `B`, `M` and `E` are viewed from the negative side, which flips
    /// the sign.
    pub const fn of(mv: Move) -> Rotation {
        use Direction::{Clockwise as Cw, CounterClockwise as Ccw};
        use Quarter::{Negative as Neg, Positive as Pos};

        let quarter = match (mv.slice, mv.direction) {
            (Slice::R, Cw) => Neg,
            (Slice::R, Ccw) => Pos,
            (Slice::L, Cw) => Pos,
            (Slice::L, Ccw) => Neg,
            (Slice::M, Cw) => Pos,
            (Slice::M, Ccw) => Neg,
            (Slice::U, Cw) => Neg,
            (Slice::U, Ccw) => Pos,
            (Slice::D, Cw) => Pos,
            (Slice::D, Ccw) => Neg,
            (Slice::E, Cw) => Pos,
            (Slice::E, Ccw) => Neg,
            (Slice::F, Cw) => Neg,
            (Slice::F, Ccw) => Pos,
            (Slice::B, Cw) => Pos,
            (Slice::B, Ccw) => Neg,
            (Slice::S, Cw) => Neg,
            (Slice::S, Ccw) => Pos,
        };

        Rotation {
            axis: mv.slice.axis(),
            quarter,
        }
    }

    pub const fn inverse(self) -> Rotation {
        Rotation {
            axis: self.axis,
            quarter: match self.quarter {
                Quarter::Positive => Quarter::Negative,
                Quarter::Negative => Quarter::Positive,
            },
        }
    }

    /// Rotates a coordinate. In-plane components `(a, b)` go to `(-b, a)`
    /// for a positive quarter and `(b, -a)` for a negative one.
    pub const fn apply(self, (x, y, z): Coord) -> Coord {
        match (self.axis, self.quarter) {
            (Axis::X, Quarter::Positive) => (x, -z, y),
            (Axis::X, Quarter::Negative) => (x, z, -y),
            (Axis::Y, Quarter::Positive) => (z, y, -x),
            (Axis::Y, Quarter::Negative) => (-z, y, x),
            (Axis::Z, Quarter::Positive) => (-y, x, z),
            (Axis::Z, Quarter::Negative) => (y, -x, z),
        }
    }

    /// Direction a sticker slot points after the rotation.
    pub fn apply_face(self, face: Face) -> Face {
        match Face::from_normal(self.apply(face.normal())) {
            Some(rotated) => rotated,
            // a quarter rotation maps unit axis vectors to unit axis vectors
            None => unreachable!("rotation of {face:?} left the axis set"),
        }
    }

    /// Carries each sticker along with the piece: the color that faced `f`
    /// now faces `apply_face(f)`. The two slots on the axis are fixed.
    pub fn permute_colors(self, colors: &FaceColors) -> FaceColors {
        let mut rotated = *colors;
        for (face, color) in colors.iter() {
            rotated[self.apply_face(face)] = color;
        }
        rotated
    }
}

/// Everything the move engine needs to apply one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceTransform {
    pub mv: Move,
    pub rotation: Rotation,
}

impl SliceTransform {
    pub const fn new(mv: Move) -> Self {
        Self {
            mv,
            rotation: Rotation::of(mv),
        }
    }

    /// Whether the move acts on a piece currently at `position`.
    pub const fn selects(&self, position: Coord) -> bool {
        self.mv.slice.contains(position)
    }

    pub const fn position(&self, position: Coord) -> Coord {
        self.rotation.apply(position)
    }

    pub fn colors(&self, colors: &FaceColors) -> FaceColors {
        if self.mv.slice.rotates_colors() {
            self.rotation.permute_colors(colors)
        } else {
            *colors
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{solved_colors, Color, SOLVED_POSITIONS};

    fn all_moves() -> impl Iterator<Item = Move> {
        Slice::ALL.into_iter().flat_map(|slice| {
            [Move::clockwise(slice), Move::counter_clockwise(slice)]
        })
    }

    fn members(slice: Slice) -> Vec<Coord> {
        SOLVED_POSITIONS
            .iter()
            .copied()
            .filter(|&position| slice.contains(position))
            .collect()
    }

    #[test]
    fn test_slice_sizes() {
        for slice in Slice::ALL {
            let expected = if slice.layer() == 0 { 8 } else { 9 };
            assert_eq!(members(slice).len(), expected, "slice {slice:?}");
        }
    }

    #[test]
    fn test_transforms_are_bijections_on_their_slice() {
        for mv in all_moves() {
            let transform = SliceTransform::new(mv);
            let before = members(mv.slice);
            let mut after: Vec<Coord> = before.iter().map(|&p| transform.position(p)).collect();
            for &p in &after {
                assert!(
                    transform.selects(p),
                    "{mv:?} moved a piece out of its slice to {p:?}"
                );
            }
            let mut sorted_before = before.clone();
            sorted_before.sort();
            after.sort();
            assert_eq!(after, sorted_before, "{mv:?} is not a permutation");
        }
    }

    #[test]
    fn test_four_quarters_are_identity() {
        for mv in all_moves() {
            let transform = SliceTransform::new(mv);
            for id in 0..SOLVED_POSITIONS.len() {
                let start = SOLVED_POSITIONS[id];
                if !transform.selects(start) {
                    continue;
                }
                let start_colors = solved_colors(id);
                let mut position = start;
                let mut colors = start_colors;
                for _ in 0..4 {
                    position = transform.position(position);
                    colors = transform.colors(&colors);
                }
                assert_eq!(position, start, "{mv:?} position after four turns");
                assert_eq!(colors, start_colors, "{mv:?} colors after four turns");
            }
        }
    }

    #[test]
    fn test_opposite_directions_cancel() {
        for mv in all_moves() {
            let forward = SliceTransform::new(mv);
            let backward = SliceTransform::new(mv.inverse());
            assert_eq!(forward.rotation.inverse(), backward.rotation);
            for (id, &position) in SOLVED_POSITIONS.iter().enumerate() {
                let colors = solved_colors(id);
                assert_eq!(backward.position(forward.position(position)), position);
                assert_eq!(backward.colors(&forward.colors(&colors)), colors);
            }
        }
    }

    #[test]
    fn test_axis_slots_are_fixed() {
        for mv in all_moves() {
            let transform = SliceTransform::new(mv);
            let axis_faces: Vec<Face> = Face::ALL
                .into_iter()
                .filter(|face| mv.slice.axis().component(face.normal()) != 0)
                .collect();
            assert_eq!(axis_faces.len(), 2);
            for id in 0..SOLVED_POSITIONS.len() {
                let colors = solved_colors(id);
                let turned = transform.colors(&colors);
                for &face in &axis_faces {
                    assert_eq!(turned[face], colors[face], "{mv:?} changed {face:?}");
                }
            }
        }
    }

    #[test]
    fn test_outer_turns_follow_standard_notation() {
        let r = SliceTransform::new(Move::clockwise(Slice::R));
        // R carries the front layer upwards
        assert_eq!(r.position((1, 0, 1)), (1, 1, 0));
        assert_eq!(r.rotation.apply_face(Face::Front), Face::Top);

        let u = SliceTransform::new(Move::clockwise(Slice::U));
        // U carries the front layer to the left
        assert_eq!(u.position((0, 1, 1)), (-1, 1, 0));
        assert_eq!(u.rotation.apply_face(Face::Front), Face::Left);

        let f = SliceTransform::new(Move::clockwise(Slice::F));
        // F carries the top layer to the right
        assert_eq!(f.position((0, 1, 1)), (1, 0, 1));
        assert_eq!(f.rotation.apply_face(Face::Top), Face::Right);

        let l = SliceTransform::new(Move::clockwise(Slice::L));
        assert_eq!(l.position((-1, 1, 0)), (-1, 0, 1));

        let d = SliceTransform::new(Move::clockwise(Slice::D));
        assert_eq!(d.position((0, -1, 1)), (1, -1, 0));

        let b = SliceTransform::new(Move::clockwise(Slice::B));
        assert_eq!(b.position((0, 1, -1)), (-1, 0, -1));
    }

    #[test]
    fn test_middle_slices_follow_their_reference_faces() {
        for (middle, outer) in [(Slice::M, Slice::L), (Slice::E, Slice::D), (Slice::S, Slice::F)] {
            for direction in [Direction::Clockwise, Direction::CounterClockwise] {
                assert_eq!(
                    Rotation::of(Move::new(middle, direction)),
                    Rotation::of(Move::new(outer, direction))
                );
            }
        }
    }

    #[test]
    fn test_color_cycle_tracks_position_rotation() {
        // the front-right-top corner under R ends up back-right-top with its
        // red sticker facing up
        let id = crate::pieces::piece_id_at((1, 1, 1)).unwrap();
        let r = SliceTransform::new(Move::clockwise(Slice::R));
        let colors = r.colors(&solved_colors(id));
        assert_eq!(r.position((1, 1, 1)), (1, 1, -1));
        assert_eq!(colors[Face::Top], Color::Red);
        assert_eq!(colors[Face::Back], Color::Blue);
        assert_eq!(colors[Face::Right], Color::Yellow);
    }

    #[test]
    fn test_s_slice_keeps_colors() {
        let s = SliceTransform::new(Move::clockwise(Slice::S));
        for id in 0..SOLVED_POSITIONS.len() {
            let colors = solved_colors(id);
            assert_eq!(s.colors(&colors), colors);
        }
        assert!(!Slice::S.rotates_colors());
        assert!(Slice::ALL
            .iter()
            .filter(|&&slice| slice != Slice::S)
            .all(|slice| slice.rotates_colors()));
    }

    #[test]
    fn test_slice_letters_and_indices() {
        for slice in Slice::ALL {
            assert_eq!(Slice::from_letter(slice.letter()), Some(slice));
            assert_eq!(Slice::from_index(slice.index()), Some(slice));
        }
        assert_eq!(Slice::from_letter('X'), None);
        assert_eq!(Slice::from_index(9), None);
    }
}
