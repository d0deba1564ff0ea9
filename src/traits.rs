//! Trait definitions
use crate::boundary::Point2D;
use crate::types::{Error, RealScalar, Result};
use rlst::{rlst_dynamic_array2, DynamicArray, RandomAccessMut, Shape};

/// A boundary operator whose matrix entries can be computed individually.
///
/// `entry` must not have side effects, so entries may be computed in any order and from
/// several threads at once.
pub trait BoundaryOperator {
    /// Scalar type
    type T: RealScalar;

    /// Shape of the operator matrix
    fn shape(&self) -> [usize; 2];

    /// Compute the entry `(i, j)` of the operator matrix
    fn entry(&self, i: usize, j: usize) -> Result<Self::T>;

    /// Compute row `i` of the operator matrix
    fn row(&self, i: usize) -> Result<Vec<Self::T>> {
        (0..self.shape()[1]).map(|j| self.entry(i, j)).collect()
    }

    /// Assemble the operator into a dense matrix.
    ///
    /// Assembly stops at the first entry that cannot be computed and returns its error; the
    /// output is then only partially filled.
    fn assemble_into_dense(&self, output: &mut DynamicArray<Self::T, 2>) -> Result<()> {
        if output.shape() != self.shape() {
            return Err(Error::ShapeMismatch {
                expected: self.shape(),
                actual: output.shape(),
            });
        }
        let [nrows, ncols] = self.shape();
        for i in 0..nrows {
            for j in 0..ncols {
                *output.get_mut([i, j]).unwrap() = self.entry(i, j)?;
            }
        }
        Ok(())
    }

    /// Assemble the operator into a newly allocated dense matrix
    fn assemble_dense(&self) -> Result<DynamicArray<Self::T, 2>> {
        let mut output = rlst_dynamic_array2!(Self::T, self.shape());
        self.assemble_into_dense(&mut output)?;
        Ok(output)
    }
}

/// A potential operator mapping a boundary density to values at arbitrary points.
pub trait PotentialOperator {
    /// Scalar type
    type T: RealScalar;

    /// Length of the density vectors this operator acts on
    fn density_size(&self) -> usize;

    /// Coefficients `k` such that the potential at `target` is `k . density`
    fn kernel_row(&self, target: &Point2D<Self::T>) -> Result<Vec<Self::T>>;

    /// Evaluate the potential of `density` at each of the `targets`
    fn evaluate(&self, targets: &[Point2D<Self::T>], density: &[Self::T]) -> Result<Vec<Self::T>> {
        if density.len() != self.density_size() {
            return Err(Error::ShapeMismatch {
                expected: [self.density_size(), 1],
                actual: [density.len(), 1],
            });
        }
        targets
            .iter()
            .map(|target| {
                Ok(self
                    .kernel_row(target)?
                    .iter()
                    .zip(density)
                    .fold(num::Zero::zero(), |acc: Self::T, (k, d)| acc + *k * *d))
            })
            .collect()
    }
}
