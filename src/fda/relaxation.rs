//! Jacobi relaxation of the five point Laplace stencil
use super::grid::Grid;
use crate::types::{check_index, Error, RealScalar, Result};
use log::debug;
use num::Float;

/// A grid cell held at a fixed value during relaxation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPoint<T: RealScalar> {
    /// Row, counted from the top
    pub row: usize,
    /// Column
    pub col: usize,
    /// The imposed value
    pub value: T,
}

impl<T: RealScalar> FixedPoint<T> {
    /// Create a new fixed point
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

/// Finite difference solver for the Laplace equation on a regular grid.
///
/// Each sweep replaces every cell by a quarter of the sum of its four neighbours, where
/// neighbours outside the grid count as zero, and then re-imposes the fixed points.
pub struct LaplaceRelaxation<T: RealScalar> {
    current: Grid<T>,
    next: Grid<T>,
    fixed_points: Vec<FixedPoint<T>>,
}

impl<T: RealScalar> LaplaceRelaxation<T> {
    /// Create a solver on a `rows x cols` grid with all values zero
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            current: Grid::new(rows, cols)?,
            next: Grid::new(rows, cols)?,
            fixed_points: vec![],
        })
    }

    /// Create a solver with a set of fixed points
    pub fn with_fixed_points(
        rows: usize,
        cols: usize,
        fixed_points: impl IntoIterator<Item = FixedPoint<T>>,
    ) -> Result<Self> {
        let mut solver = Self::new(rows, cols)?;
        for p in fixed_points {
            solver.push_fixed_point(p)?;
        }
        Ok(solver)
    }

    /// Hold the cell in row `row` and column `col` at `value`
    pub fn add_fixed_point(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.push_fixed_point(FixedPoint::new(row, col, value))
    }

    /// Hold a cell at a fixed value
    pub fn push_fixed_point(&mut self, point: FixedPoint<T>) -> Result<()> {
        check_index(point.row, self.current.rows())?;
        check_index(point.col, self.current.cols())?;
        self.current.set_at(point.row, point.col, point.value);
        self.fixed_points.push(point);
        Ok(())
    }

    /// The fixed points
    pub fn fixed_points(&self) -> &[FixedPoint<T>] {
        &self.fixed_points
    }

    /// The current state of the grid
    pub fn grid(&self) -> &Grid<T> {
        &self.current
    }

    /// Perform one sweep and return the largest change of any cell
    pub fn iterate(&mut self) -> T {
        let quarter = num::cast::<f64, T>(0.25).unwrap();
        let [rows, cols] = self.current.shape();
        for i in 0..rows {
            for j in 0..cols {
                let mut sum: T = num::Zero::zero();
                if i > 0 {
                    sum = sum + self.current.at(i - 1, j);
                }
                if i + 1 < rows {
                    sum = sum + self.current.at(i + 1, j);
                }
                if j > 0 {
                    sum = sum + self.current.at(i, j - 1);
                }
                if j + 1 < cols {
                    sum = sum + self.current.at(i, j + 1);
                }
                self.next.set_at(i, j, quarter * sum);
            }
        }
        for p in &self.fixed_points {
            self.next.set_at(p.row, p.col, p.value);
        }

        let mut update: T = num::Zero::zero();
        for i in 0..rows {
            for j in 0..cols {
                update = Float::max(
                    update,
                    Float::abs(self.next.at(i, j) - self.current.at(i, j)),
                );
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
        update
    }

    /// Iterate until a sweep changes no cell by more than `tolerance`.
    ///
    /// Returns the number of sweeps performed.
    pub fn relax(&mut self, tolerance: T, max_iterations: usize) -> Result<usize> {
        for iteration in 1..=max_iterations {
            let update = self.iterate();
            if update <= tolerance {
                debug!("Relaxation converged after {iteration} iterations (update {update:?})");
                return Ok(iteration);
            }
        }
        Err(Error::NotConverged {
            iterations: max_iterations,
        })
    }
}
