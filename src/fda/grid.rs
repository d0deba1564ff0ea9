//! Regular grids of values
use crate::types::{check_index, Error, RealScalar, Result};
use rlst::{rlst_dynamic_array2, DynamicArray, RandomAccessByRef, RandomAccessMut};

/// A `rows x cols` grid of values.
///
/// `get(i, j)` uses matrix indexing: row 0 is the top row. [Grid::cartesian] counts rows from
/// the bottom instead, and [Grid::centered] additionally moves the origin to the middle cell.
pub struct Grid<T: RealScalar> {
    data: DynamicArray<T, 2>,
    rows: usize,
    cols: usize,
}

impl<T: RealScalar> Grid<T> {
    /// Create a grid filled with zeros. Both dimensions must be at least 2.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(Error::InvalidGrid(format!(
                "a grid needs at least 2x2 cells, got {rows}x{cols}"
            )));
        }
        Ok(Self {
            data: rlst_dynamic_array2!(T, [rows, cols]),
            rows,
            cols,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `[rows, cols]`
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    fn check(&self, i: usize, j: usize) -> Result<()> {
        check_index(i, self.rows)?;
        check_index(j, self.cols)
    }

    /// Value in row `i` (counted from the top) and column `j`
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        self.check(i, j)?;
        Ok(self.at(i, j))
    }

    /// Mutable reference to the value in row `i` (counted from the top) and column `j`
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        self.check(i, j)?;
        Ok(self.data.get_mut([i, j]).unwrap())
    }

    /// Set the value in row `i` (counted from the top) and column `j`
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        *self.get_mut(i, j)? = value;
        Ok(())
    }

    /// Value in row `i` counted from the bottom and column `j`
    pub fn cartesian(&self, i: usize, j: usize) -> Result<T> {
        check_index(i, self.rows)?;
        self.get(self.rows - 1 - i, j)
    }

    /// Mutable reference to the value in row `i` counted from the bottom and column `j`
    pub fn cartesian_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        check_index(i, self.rows)?;
        self.get_mut(self.rows - 1 - i, j)
    }

    fn centre_to_cartesian(&self, i: isize, j: isize) -> Result<(usize, usize)> {
        let shift = |k: isize, n: usize| {
            k.checked_add((n / 2) as isize)
                .and_then(|k| usize::try_from(k).ok())
                .ok_or(Error::IndexOutOfRange {
                    index: k.unsigned_abs(),
                    size: n,
                })
        };
        Ok((shift(i, self.rows)?, shift(j, self.cols)?))
    }

    /// Value at cartesian offset `(i, j)` from the middle cell `(rows / 2, cols / 2)`
    pub fn centered(&self, i: isize, j: isize) -> Result<T> {
        let (i, j) = self.centre_to_cartesian(i, j)?;
        self.cartesian(i, j)
    }

    /// Mutable reference to the value at cartesian offset `(i, j)` from the middle cell
    pub fn centered_mut(&mut self, i: isize, j: isize) -> Result<&mut T> {
        let (i, j) = self.centre_to_cartesian(i, j)?;
        self.cartesian_mut(i, j)
    }

    pub(crate) fn at(&self, i: usize, j: usize) -> T {
        *self.data.get([i, j]).unwrap()
    }

    pub(crate) fn set_at(&mut self, i: usize, j: usize, value: T) {
        *self.data.get_mut([i, j]).unwrap() = value;
    }
}
