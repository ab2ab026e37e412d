use std::ops;

use crate::dims::Dims;

/// Dense 2D grid backed by a flat buffer, indexed by [`Dims`] as `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item.clone(); width * height],
            width,
            height,
        }
    }

    pub fn fill(&mut self, value: T) {
        self.buf.fill(value);
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::{Array2D, Dims};

    #[test]
    fn index_round_trip() {
        let mut array = Array2D::new(0u8, 3, 2);
        array[Dims(2, 1)] = 7;

        assert_eq!(array[Dims(2, 1)], 7);
        assert_eq!(array[Dims(0, 0)], 0);
        assert_eq!(array.len(), 6);
        assert_eq!(array.size(), Dims(3, 2));
    }

    #[test]
    fn out_of_bounds_get_is_none() {
        let array = Array2D::new(false, 3, 2);

        assert_eq!(array.get(Dims(3, 0)), None);
        assert_eq!(array.get(Dims(0, 2)), None);
        assert_eq!(array.get(Dims(-1, 0)), None);
    }

    #[test]
    fn iter_pos_covers_grid_in_row_order() {
        let array = Array2D::new((), 2, 2);
        let positions: Vec<_> = array.iter_pos().collect();

        assert_eq!(
            positions,
            vec![Dims(0, 0), Dims(1, 0), Dims(0, 1), Dims(1, 1)]
        );
    }
}
