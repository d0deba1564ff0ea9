//! Double layer assembler
use super::kernels::{default_collinear_tolerance, double_layer_segment};
use crate::boundary::BoundaryCollection;
use crate::traits::BoundaryOperator;
use crate::types::{Error, RealScalar, Result};
use log::trace;

/// Assembler for the Laplace double layer operator on a collection of closed linear curves.
///
/// Entry `(i, j)` integrates the double layer kernel, seen from the source point `j`, over the
/// segment that starts at the collocation point `i` and ends at the next point of the same
/// curve. The integral is evaluated in closed form, so each entry costs `O(1)`.
#[derive(Debug, Clone)]
pub struct DoubleLayerAssembler<'a, T: RealScalar> {
    collection: &'a BoundaryCollection<T>,
    tolerance: T,
}

impl<'a, T: RealScalar> DoubleLayerAssembler<'a, T> {
    /// Create a new double layer assembler
    pub fn new(collection: &'a BoundaryCollection<T>) -> Self {
        Self::with_tolerance(collection, default_collinear_tolerance())
    }

    /// Create a new double layer assembler with a custom collinearity tolerance.
    ///
    /// A source point counts as collinear with a segment, and contributes zero, when the sine of
    /// the angle between the segment and the source point, seen from the segment start, is at
    /// most `tolerance`.
    pub fn with_tolerance(collection: &'a BoundaryCollection<T>, tolerance: T) -> Self {
        Self {
            collection,
            tolerance,
        }
    }

    /// The collection this assembler works on
    pub fn collection(&self) -> &'a BoundaryCollection<T> {
        self.collection
    }

    /// The collinearity tolerance
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Local index of the far end of the segment starting at flat index `i`.
    ///
    /// Flat index `i + 1` (wrapping at the total size) is used when it lies on the same curve as
    /// `i`; otherwise `i` is the last point of its curve and the segment closes to the first
    /// point of that curve.
    fn segment_end(&self, i: usize, curve_index: usize) -> Result<usize> {
        let next = (i + 1) % self.collection.total_size();
        let (next_curve, next_local) = self.collection.resolve(next)?;
        Ok(if next_curve == curve_index {
            next_local
        } else {
            0
        })
    }
}

impl<T: RealScalar> BoundaryOperator for DoubleLayerAssembler<'_, T> {
    type T = T;

    fn shape(&self) -> [usize; 2] {
        let n = self.collection.total_size();
        [n, n]
    }

    fn entry(&self, i: usize, j: usize) -> Result<T> {
        let (bi, ei) = self.collection.resolve(i)?;
        let (bj, ej) = self.collection.resolve(j)?;
        let ni = self.segment_end(i, bi)?;

        let curve = self.collection.boundary(bi)?;
        let xi = curve.position(ei)?;
        let xn = curve.position(ni)?;
        let xj = self.collection.boundary(bj)?.position(ej)?;
        let tangent = curve.forward_tangent(ei)?;

        let value = double_layer_segment(xi, xn, &tangent, xj, self.tolerance).ok_or(
            Error::NumericDegeneracy {
                collocation_index: i,
                source_index: Some(j),
            },
        )?;
        trace!("Double layer entry ({i}, {j}): boundaries ({bi}, {bj}), elements ({ei}, {ej}), segment end {ni}, value {value:?}");
        Ok(value)
    }
}
