use hashbrown::HashMap;

use crate::array::Array2D;
use crate::dims::Dims;
use crate::gameboard::{Maze, MazeError};

/// Iterative depth-first path search over a maze's open passages.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    /// Finds a path from `start` to `end`, both inclusive. Returns
    /// `Ok(None)` when no path exists, which cannot happen on a perfect
    /// maze with in-bounds endpoints.
    pub fn find_path(
        maze: &Maze,
        start: Dims,
        end: Dims,
    ) -> Result<Option<Vec<Dims>>, MazeError> {
        for pos in [start, end] {
            if !maze.is_in_bounds(pos) {
                return Err(MazeError::IndexOutOfRange {
                    pos,
                    size: maze.size(),
                });
            }
        }

        let size = maze.size();
        let mut visited = Array2D::new(false, size.0 as usize, size.1 as usize);
        let mut parents: HashMap<Dims, Dims> = HashMap::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            // cells can sit on the stack more than once, pushed from
            // several frontier cells; only the first pop counts
            if visited[current] {
                continue;
            }
            visited[current] = true;

            if current == end {
                return Ok(Some(Self::walk_back(start, end, &parents)));
            }

            for neighbor in maze.neighbors(current) {
                if !visited[neighbor] {
                    // a pending cell's parent may be rewritten before it is
                    // popped; on a spanning tree the reconstructed path is
                    // the same either way
                    parents.insert(neighbor, current);
                    stack.push(neighbor);
                }
            }
        }

        Ok(None)
    }

    fn walk_back(start: Dims, end: Dims, parents: &HashMap<Dims, Dims>) -> Vec<Dims> {
        let mut path = Vec::new();
        let mut current = end;

        while current != start {
            path.push(current);
            current = parents[&current];
        }
        path.push(start);
        path.reverse();

        path
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{Rng as _, SeedableRng as _};

    use super::*;
    use crate::gameboard::algorithms::{Eller, Random};

    /// Independent breadth-first reference: length of the shortest path in
    /// cells, or `None` when unreachable.
    fn bfs_path_len(maze: &Maze, start: Dims, end: Dims) -> Option<usize> {
        let size = maze.size();
        let mut distance = Array2D::new(None, size.0 as usize, size.1 as usize);
        let mut queue = VecDeque::new();

        distance[start] = Some(1usize);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                return distance[current];
            }
            for neighbor in maze.neighbors(current) {
                if distance[neighbor].is_none() {
                    distance[neighbor] = distance[current].map(|d| d + 1);
                    queue.push_back(neighbor);
                }
            }
        }

        None
    }

    fn assert_valid_path(maze: &Maze, path: &[Dims], start: Dims, end: Dims) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));

        for pair in path.windows(2) {
            assert!(
                maze.neighbors(pair[0]).contains(&pair[1]),
                "no open passage between {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn start_equals_end_is_a_single_cell_path() {
        let maze = Eller::generate(Dims(4, 4), Some(7)).unwrap();

        for cell in [Dims(0, 0), Dims(3, 3), Dims(2, 1)] {
            let path = DepthFirstSearch::find_path(&maze, cell, cell).unwrap();
            assert_eq!(path, Some(vec![cell]));
        }
    }

    #[test]
    fn path_matches_bfs_reference_length() {
        for seed in 0..5 {
            let size = Dims(20, 20);
            let maze = Eller::generate(size, Some(seed)).unwrap();
            let mut rng = Random::seed_from_u64(seed ^ 0xdead_beef);

            for _ in 0..100 {
                let start = Dims(rng.gen_range(0..size.0), rng.gen_range(0..size.1));
                let end = Dims(rng.gen_range(0..size.0), rng.gen_range(0..size.1));

                let path = DepthFirstSearch::find_path(&maze, start, end)
                    .unwrap()
                    .expect("perfect maze connects every pair of cells");

                assert_valid_path(&maze, &path, start, end);
                // the unique simple path of a spanning tree is also the
                // shortest one, so DFS and BFS must agree on length
                assert_eq!(Some(path.len()), bfs_path_len(&maze, start, end));
            }
        }
    }

    #[test]
    fn two_by_two_connects_every_pair() {
        for seed in 0..16 {
            let maze = Eller::generate(Dims(2, 2), Some(seed)).unwrap();
            let cells = [Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)];

            for start in cells {
                for end in cells {
                    let path = DepthFirstSearch::find_path(&maze, start, end)
                        .unwrap()
                        .expect("2x2 perfect maze is fully connected");
                    assert_valid_path(&maze, &path, start, end);
                }
            }
        }
    }

    #[test]
    fn corner_to_corner() {
        let maze = Eller::generate(Dims(50, 50), Some(99)).unwrap();
        let path = DepthFirstSearch::find_path(&maze, Dims(0, 0), Dims(49, 49))
            .unwrap()
            .unwrap();

        assert_valid_path(&maze, &path, Dims(0, 0), Dims(49, 49));
    }

    #[test]
    fn out_of_range_endpoints_are_an_error() {
        let maze = Eller::generate(Dims(5, 5), Some(1)).unwrap();

        for (start, end) in [
            (Dims(-1, 0), Dims(0, 0)),
            (Dims(0, 0), Dims(5, 0)),
            (Dims(0, 5), Dims(0, 0)),
        ] {
            let result = DepthFirstSearch::find_path(&maze, start, end);
            assert!(matches!(result, Err(MazeError::IndexOutOfRange { .. })));
        }
    }

    #[test]
    fn fully_walled_maze_has_no_path() {
        // not a perfect maze; the search must still terminate and report None
        let walls = Array2D::new(true, 2, 2);
        let maze = Maze::new(Dims(2, 2), walls.clone(), walls).unwrap();

        let path = DepthFirstSearch::find_path(&maze, Dims(0, 0), Dims(1, 1)).unwrap();
        assert_eq!(path, None);
    }
}
