//! Text rendering of the cube as an unfolded facelet net.
//!
//! Layout, one character per sticker:
//!
//! ```text
//!     UUU
//!     UUU
//!     UUU
//! LLL FFF RRR BBB
//! LLL FFF RRR BBB
//! LLL FFF RRR BBB
//!     DDD
//!     DDD
//!     DDD
//! ```
//!
//! Each face is drawn as seen from outside the cube, with `F` below `U`
//! and above `D`.

use rustc_hash::FxHashMap;

use crate::cube::Cube;
use crate::pieces::{Coord, Face, FaceColors};

/// Cubie coordinate of the sticker in `row`, `column` (0..3, top-left
/// first) of a face viewed from outside.
const fn facelet_position(face: Face, row: i32, column: i32) -> Coord {
    match face {
        Face::Top => (column - 1, 1, row - 1),
        Face::Front => (column - 1, 1 - row, 1),
        Face::Right => (1, 1 - row, 1 - column),
        Face::Back => (1 - column, 1 - row, -1),
        Face::Left => (-1, 1 - row, column - 1),
        Face::Bottom => (column - 1, -1, 1 - row),
    }
}

/// Renders one row of a face.
fn face_row(colors_at: &FxHashMap<Coord, FaceColors>, face: Face, row: i32) -> String {
    (0..3)
        .map(|column| {
            colors_at
                .get(&facelet_position(face, row, column))
                .map_or('?', |colors| colors[face].symbol())
        })
        .collect()
}

/// Formats the 54 outward-facing stickers as an unfolded net.
pub fn format_net(cube: &Cube) -> String {
    let colors_at: FxHashMap<Coord, FaceColors> = cube
        .pieces()
        .iter()
        .map(|piece| (piece.position(), *piece.colors()))
        .collect();

    let mut output = String::new();
    for row in 0..3 {
        output.push_str("    ");
        output.push_str(&face_row(&colors_at, Face::Top, row));
        output.push('\n');
    }

    for row in 0..3 {
        let belt: Vec<String> = [Face::Left, Face::Front, Face::Right, Face::Back]
            .iter()
            .map(|&face| face_row(&colors_at, face, row))
            .collect();
        output.push_str(&belt.join(" "));
        output.push('\n');
    }

    for row in 0..3 {
        output.push_str("    ");
        output.push_str(&face_row(&colors_at, Face::Bottom, row));
        output.push('\n');
    }

    output
}
