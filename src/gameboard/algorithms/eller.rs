use log::debug;
use rand::{thread_rng, Rng as _, SeedableRng as _};

use super::{Random, RowSets};
use crate::array::Array2D;
use crate::dims::Dims;
use crate::gameboard::{check_size, Maze, MazeError};

/// Row-by-row spanning-tree maze generator (Eller's algorithm).
///
/// Works through the grid one row at a time, tracking which columns of the
/// current row are already connected through the rows above with [`RowSets`].
/// Walls between connected columns are forced (no cycles) and every set is
/// guaranteed at least one opening downward (no isolated regions), so the
/// result is a perfect maze regardless of what the coin flips do.
#[derive(Debug)]
pub struct Eller;

impl Eller {
    /// Generates a maze of `size` cells, `Dims(columns, rows)`. With
    /// `seed: None` the seed is drawn from the thread rng.
    pub fn generate(size: Dims, seed: Option<u64>) -> Result<Maze, MazeError> {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = Random::seed_from_u64(seed);

        debug!("generating {}x{} maze with seed {}", size.0, size.1, seed);

        Self::generate_with_rng(size, &mut rng)
    }

    pub fn generate_with_rng(size: Dims, rng: &mut Random) -> Result<Maze, MazeError> {
        check_size(size.1)?;
        let mut sets = RowSets::new(size.0)?;

        let (width, height) = (size.0 as usize, size.1 as usize);
        let mut right_walls = Array2D::new(false, width, height);
        let mut bottom_walls = Array2D::new(false, width, height);

        for row in 0..size.1 {
            Self::random_right_walls(&mut sets, rng, row, size, &mut right_walls);

            if row != size.1 - 1 {
                Self::random_bottom_walls(&mut sets, rng, row, size, &mut bottom_walls);

                // a walled-off column is cut from its set: it cannot carry
                // a connection into the next row
                for col in 0..size.0 {
                    if bottom_walls[Dims(col, row)] {
                        sets.disunion(col);
                    }
                }
            } else {
                Self::close_last_row(&mut sets, row, size, &mut right_walls, &mut bottom_walls);
            }
        }

        Maze::new(size, right_walls, bottom_walls)
    }

    /// Decides the right walls of `row`. Columns already in one set must be
    /// walled apart, otherwise a fair coin picks between a wall and a union.
    fn random_right_walls(
        sets: &mut RowSets,
        rng: &mut Random,
        row: i32,
        size: Dims,
        right_walls: &mut Array2D<bool>,
    ) {
        for col in 0..size.0 - 1 {
            if sets.connected(col, col + 1) || rng.gen() {
                right_walls[Dims(col, row)] = true;
            } else {
                sets.union(col, col + 1);
            }
        }

        right_walls[Dims(size.0 - 1, row)] = true;
    }

    /// Decides the bottom walls of `row`. A singleton column never gets one
    /// (it would seal a one-cell region), and every set must keep at least
    /// one opening downward by the time its right-most column is reached.
    fn random_bottom_walls(
        sets: &mut RowSets,
        rng: &mut Random,
        row: i32,
        size: Dims,
        bottom_walls: &mut Array2D<bool>,
    ) {
        let mut open_count = 0;

        for col in 0..size.0 {
            if sets.is_alone(col) {
                continue;
            }

            let wall = rng.gen::<bool>();
            if !wall {
                open_count += 1;
            }

            let last = sets.is_last_in_set(col);
            if last && open_count == 0 {
                // the set has no opening yet, force this one open
                continue;
            }

            if wall {
                bottom_walls[Dims(col, row)] = true;
            }
            if last {
                open_count = 0;
            }
        }
    }

    /// The last row is fully closed below; adjacent columns still in
    /// different sets get their right wall knocked out instead, which is the
    /// only merge left.
    fn close_last_row(
        sets: &mut RowSets,
        row: i32,
        size: Dims,
        right_walls: &mut Array2D<bool>,
        bottom_walls: &mut Array2D<bool>,
    ) {
        for col in 0..size.0 {
            bottom_walls[Dims(col, row)] = true;
        }

        for col in 0..size.0 - 1 {
            if !sets.connected(col, col + 1) {
                right_walls[Dims(col, row)] = false;
                sets.union(col, col + 1);
            }
        }
    }
}
