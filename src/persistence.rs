//! File I/O for saving and restoring a cube's move log.
//!
//! A session directory holds two files:
//! - `session.txt`: the moves in notation followed by the facelet net,
//!   for reading.
//! - `session.bin`: the log itself, used to restore.
//!
//! Binary format for `session.bin` (little endian):
//! - u32: move count
//! - repeat per move:
//!   - u8: slice index (order of `Slice::ALL`)
//!   - u8: direction (0 = clockwise, 1 = counterclockwise)

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;

use crate::config::EngineConfig;
use crate::cube::Cube;
use crate::engine::MoveError;
use crate::geometry::{Direction, Move, Slice};
use crate::net::format_net;
use crate::notation::format_sequence;

const SESSION_BIN: &str = "session.bin";
const SESSION_TXT: &str = "session.txt";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("Session file is corrupt: {0}")]
    Corrupt(String),
    #[error("Session could not be replayed: {0}")]
    Replay(#[from] MoveError),
}

/// Saves the cube's move log to both files in `dir`.
pub fn save(dir: &Path, cube: &Cube) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let moves = cube.moves();
    save_text(dir, cube, &moves)?;
    save_binary(dir, &moves)?;
    log::info!("saved {} moves to {}", moves.len(), dir.display());
    Ok(())
}

/// Saves the session in human-readable form.
fn save_text(dir: &Path, cube: &Cube, moves: &[Move]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(dir.join(SESSION_TXT))?);
    writeln!(file, "Moves ({}): {}", moves.len(), format_sequence(moves))?;
    writeln!(file)?;
    write!(file, "{}", format_net(cube))?;
    file.flush()
}

/// Saves the move log in compact binary form.
fn save_binary(dir: &Path, moves: &[Move]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(dir.join(SESSION_BIN))?);

    file.write_all(&(moves.len() as u32).to_le_bytes())?;
    for mv in moves {
        let direction: u8 = match mv.direction {
            Direction::Clockwise => 0,
            Direction::CounterClockwise => 1,
        };
        file.write_all(&[mv.slice.index(), direction])?;
    }

    file.flush()
}

/// Loads the saved move log. Returns `Ok(None)` if `dir` holds no session.
pub fn load_moves(dir: &Path) -> Result<Option<Vec<Move>>, SessionError> {
    let mut file = match File::open(dir.join(SESSION_BIN)) {
        Ok(file) => file,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(error.into()),
    };

    let mut u32_buffer = [0u8; 4];
    file.read_exact(&mut u32_buffer)?;
    let move_count = u32::from_le_bytes(u32_buffer) as usize;

    let mut body = Vec::new();
    file.read_to_end(&mut body)?;
    if body.len() != move_count * 2 {
        return Err(SessionError::Corrupt(format!(
            "expected {} moves ({} bytes) but found {} bytes",
            move_count,
            move_count * 2,
            body.len()
        )));
    }

    let moves = body
        .chunks_exact(2)
        .map(|pair| {
            let slice = Slice::from_index(pair[0])
                .ok_or_else(|| SessionError::Corrupt(format!("unknown slice index {}", pair[0])))?;
            let direction = match pair[1] {
                0 => Direction::Clockwise,
                1 => Direction::CounterClockwise,
                other => {
                    return Err(SessionError::Corrupt(format!(
                        "unknown direction byte {other}"
                    )))
                }
            };
            Ok(Move::new(slice, direction))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(moves))
}

/// Rebuilds a cube by replaying the saved log onto a solved one.
pub fn restore(dir: &Path, config: EngineConfig) -> Result<Option<Cube>, SessionError> {
    let Some(moves) = load_moves(dir)? else {
        return Ok(None);
    };
    let mut cube = Cube::with_config(config);
    cube.apply_sequence(&moves)?;
    log::info!("restored {} moves from {}", moves.len(), dir.display());
    Ok(Some(cube))
}

/// Returns the number of saved moves without loading them.
pub fn count(dir: &Path) -> Option<usize> {
    let mut file = File::open(dir.join(SESSION_BIN)).ok()?;
    let mut u32_buffer = [0u8; 4];
    file.read_exact(&mut u32_buffer).ok()?;
    Some(u32::from_le_bytes(u32_buffer) as usize)
}
