//! Standard move notation.
//!
//! `R` is a clockwise quarter turn, `R'` a counterclockwise one and `R2` a
//! double turn. A double is only a notational shorthand: parsing expands it
//! into two quarter turns, so the engine never sees a third direction.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geometry::{Direction, Move, Slice};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Empty move token")]
    Empty,
    #[error("Unknown slice {0:?}")]
    UnknownSlice(String),
    #[error("Unknown direction {0:?}")]
    UnknownDirection(String),
    #[error("Unknown move suffix {suffix:?} in {token:?}")]
    UnknownSuffix { token: String, suffix: String },
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Slice {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(NotationError::Empty),
            (Some(letter), None) => {
                Slice::from_letter(letter).ok_or_else(|| NotationError::UnknownSlice(s.to_string()))
            }
            _ => Err(NotationError::UnknownSlice(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "clockwise"),
            Direction::CounterClockwise => write!(f, "counterclockwise"),
        }
    }
}

impl FromStr for Direction {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clockwise" | "cw" => Ok(Direction::Clockwise),
            "counterclockwise" | "counter-clockwise" | "ccw" | "'" => {
                Ok(Direction::CounterClockwise)
            }
            _ => Err(NotationError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.slice),
            Direction::CounterClockwise => write!(f, "{}'", self.slice),
        }
    }
}

impl FromStr for Move {
    type Err = NotationError;

    /// Parses a single quarter turn. Doubles are rejected here; use
    /// [`parse_sequence`] for those.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_token(s)? {
            (mv, 1) => Ok(mv),
            _ => Err(NotationError::UnknownSuffix {
                token: s.to_string(),
                suffix: s.get(1..).unwrap_or_default().to_string(),
            }),
        }
    }
}

/// Parses one token into a quarter turn and a repeat count.
fn parse_token(token: &str) -> Result<(Move, usize), NotationError> {
    let mut chars = token.chars();
    let letter = chars.next().ok_or(NotationError::Empty)?;
    let slice = Slice::from_letter(letter)
        .ok_or_else(|| NotationError::UnknownSlice(letter.to_string()))?;
    let suffix = chars.as_str();

    match suffix {
        "" => Ok((Move::clockwise(slice), 1)),
        "'" => Ok((Move::counter_clockwise(slice), 1)),
        // a half turn is the same either way round
        "2" | "2'" => Ok((Move::clockwise(slice), 2)),
        _ => Err(NotationError::UnknownSuffix {
            token: token.to_string(),
            suffix: suffix.to_string(),
        }),
    }
}

/// Parses whitespace-separated moves, expanding doubles into quarter turns.
pub fn parse_sequence(input: &str) -> Result<Vec<Move>, NotationError> {
    let mut moves = Vec::new();
    for token in input.split_whitespace() {
        let (mv, count) = parse_token(token)?;
        moves.extend(std::iter::repeat(mv).take(count));
    }
    Ok(moves)
}

/// One token per quarter turn.
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display form that folds adjacent identical quarter turns into a double.
///
/// Only for showing to people; replay from [`parse_sequence`], which
/// expands the doubles again.
pub fn format_compact(moves: &[Move]) -> String {
    let mut tokens = Vec::new();
    let mut index = 0;
    while index < moves.len() {
        let mv = moves[index];
        if moves.get(index + 1) == Some(&mv) {
            tokens.push(format!("{}2", mv.slice));
            index += 2;
        } else {
            tokens.push(mv.to_string());
            index += 1;
        }
    }
    tokens.join(" ")
}
