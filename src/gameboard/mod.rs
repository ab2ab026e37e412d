pub mod algorithms;
pub mod maze;
pub mod ser;

pub use maze::Maze;

use thiserror::Error;

use crate::dims::Dims;

pub const MIN_SIZE: i32 = 2;
pub const MAX_SIZE: i32 = 50;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimension must be between {MIN_SIZE} and {MAX_SIZE}, got {0}")]
    InvalidSize(i32),
    #[error("cell {pos:?} is outside a maze of size {size:?}")]
    IndexOutOfRange { pos: Dims, size: Dims },
}

pub(crate) fn check_size(value: i32) -> Result<(), MazeError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&value) {
        Ok(())
    } else {
        Err(MazeError::InvalidSize(value))
    }
}
