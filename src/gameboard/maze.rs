use smallvec::SmallVec;

use crate::array::Array2D;
use crate::dims::Dims;
use crate::gameboard::{check_size, MazeError};

/// Rectangular maze described by its two wall matrices.
///
/// `right_walls[(x, y)]` is the wall between `(x, y)` and `(x + 1, y)`,
/// `bottom_walls[(x, y)]` the wall between `(x, y)` and `(x, y + 1)`. The
/// right wall of the last column is always present; the outer border is
/// implicit. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    size: Dims,
    right_walls: Array2D<bool>,
    bottom_walls: Array2D<bool>,
}

impl Maze {
    pub fn new(
        size: Dims,
        right_walls: Array2D<bool>,
        bottom_walls: Array2D<bool>,
    ) -> Result<Self, MazeError> {
        check_size(size.1)?;
        check_size(size.0)?;

        assert_eq!(right_walls.size(), size, "right wall matrix size mismatch");
        assert_eq!(bottom_walls.size(), size, "bottom wall matrix size mismatch");

        Ok(Maze {
            size,
            right_walls,
            bottom_walls,
        })
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.size.0 && 0 <= pos.1 && pos.1 < self.size.1
    }

    pub fn has_right_wall(&self, pos: Dims) -> bool {
        self.right_walls[pos]
    }

    pub fn has_bottom_wall(&self, pos: Dims) -> bool {
        self.bottom_walls[pos]
    }

    pub fn right_walls(&self) -> &Array2D<bool> {
        &self.right_walls
    }

    pub fn bottom_walls(&self) -> &Array2D<bool> {
        &self.bottom_walls
    }

    /// Open neighbors of `cell`, scanned in a fixed up, right, down, left
    /// order so traversals over the same maze stay deterministic.
    pub fn neighbors(&self, cell: Dims) -> SmallVec<[Dims; 4]> {
        let Dims(x, y) = cell;
        let mut neighbors = SmallVec::new();

        if y > 0 && !self.bottom_walls[Dims(x, y - 1)] {
            neighbors.push(Dims(x, y - 1));
        }
        if x < self.size.0 - 1 && !self.right_walls[cell] {
            neighbors.push(Dims(x + 1, y));
        }
        if y < self.size.1 - 1 && !self.bottom_walls[cell] {
            neighbors.push(Dims(x, y + 1));
        }
        if x > 0 && !self.right_walls[Dims(x - 1, y)] {
            neighbors.push(Dims(x - 1, y));
        }

        neighbors
    }

    /// Number of open passages between adjacent cells. A perfect maze has
    /// exactly `width * height - 1` of them.
    pub fn passage_count(&self) -> usize {
        let Dims(width, height) = self.size;

        let right = self
            .right_walls
            .iter_pos()
            .filter(|&pos| pos.0 < width - 1 && !self.right_walls[pos])
            .count();
        let bottom = self
            .bottom_walls
            .iter_pos()
            .filter(|&pos| pos.1 < height - 1 && !self.bottom_walls[pos])
            .count();

        right + bottom
    }
}
