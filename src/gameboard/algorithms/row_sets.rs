use crate::gameboard::{check_size, MazeError};

/// Disjoint sets over the columns of a single maze row.
///
/// This is not a general-purpose union-find: it only behaves as documented
/// when driven left to right, one row at a time, by [`Eller`]. Sets are
/// always contiguous runs of columns, because `union` is only ever applied
/// to adjacent columns; `is_alone` and `is_last_in_set` rely on that.
///
/// [`Eller`]: super::Eller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSets {
    ids: Vec<usize>,
    next_id: usize,
}

impl RowSets {
    /// Creates `size` singleton sets with ids `0..size`.
    pub fn new(size: i32) -> Result<Self, MazeError> {
        check_size(size)?;

        Ok(RowSets {
            ids: (0..size as usize).collect(),
            next_id: size as usize,
        })
    }

    fn idx(&self, col: i32) -> usize {
        assert!(
            0 <= col && (col as usize) < self.ids.len(),
            "column {} out of range 0..{}",
            col,
            self.ids.len()
        );
        col as usize
    }

    pub fn id(&self, col: i32) -> usize {
        self.ids[self.idx(col)]
    }

    pub fn connected(&self, a: i32, b: i32) -> bool {
        self.id(a) == self.id(b)
    }

    /// Merges `b`'s set into `a`'s by relabeling every member of `b`'s set.
    /// Only meant for adjacent columns (`b == a + 1`).
    pub fn union(&mut self, a: i32, b: i32) {
        let new_id = self.id(a);
        let old_id = self.id(b);

        for id in self.ids.iter_mut() {
            if *id == old_id {
                *id = new_id;
            }
        }
    }

    /// Moves `col` into a brand-new singleton set. The fresh id is strictly
    /// greater than any id issued so far, so it can never collide with a
    /// surviving set.
    pub fn disunion(&mut self, col: i32) {
        let idx = self.idx(col);
        self.ids[idx] = self.next_id;
        self.next_id += 1;
    }

    /// Whether `col` shares its set with neither neighboring column.
    pub fn is_alone(&self, col: i32) -> bool {
        let idx = self.idx(col);
        let id = self.ids[idx];

        let lone_left = idx == 0 || self.ids[idx - 1] != id;
        let lone_right = idx == self.ids.len() - 1 || self.ids[idx + 1] != id;

        lone_left && lone_right
    }

    /// Whether `col` is the right-most member of its set.
    pub fn is_last_in_set(&self, col: i32) -> bool {
        let idx = self.idx(col);
        idx == self.ids.len() - 1 || self.ids[idx + 1] != self.ids[idx]
    }
}
