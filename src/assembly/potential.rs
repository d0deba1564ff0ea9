//! Double layer potential evaluation
use super::kernels::{default_collinear_tolerance, double_layer_segment};
use crate::boundary::{BoundaryCollection, Point2D};
use crate::traits::PotentialOperator;
use crate::types::{Error, RealScalar, Result};

/// The Laplace double layer potential of a density on a collection of closed linear curves.
///
/// The density takes one value per segment, indexed like the collocation points of
/// [DoubleLayerAssembler](super::DoubleLayerAssembler): entry `i` lives on the segment from flat
/// point `i` to the next point of the same curve.
#[derive(Debug, Clone)]
pub struct DoubleLayerPotential<'a, T: RealScalar> {
    collection: &'a BoundaryCollection<T>,
    tolerance: T,
}

impl<'a, T: RealScalar> DoubleLayerPotential<'a, T> {
    /// Create a new double layer potential
    pub fn new(collection: &'a BoundaryCollection<T>) -> Self {
        Self {
            collection,
            tolerance: default_collinear_tolerance(),
        }
    }

    /// Create a new double layer potential with a custom collinearity tolerance
    pub fn with_tolerance(collection: &'a BoundaryCollection<T>, tolerance: T) -> Self {
        Self {
            collection,
            tolerance,
        }
    }
}

impl<T: RealScalar> PotentialOperator for DoubleLayerPotential<'_, T> {
    type T = T;

    fn density_size(&self) -> usize {
        self.collection.total_size()
    }

    fn kernel_row(&self, target: &Point2D<T>) -> Result<Vec<T>> {
        let mut row = Vec::with_capacity(self.density_size());
        for curve in self.collection.boundaries() {
            let n = curve.size();
            for k in 0..n {
                let value = double_layer_segment(
                    curve.position(k)?,
                    curve.position((k + 1) % n)?,
                    &curve.forward_tangent(k)?,
                    target,
                    self.tolerance,
                )
                .ok_or(Error::NumericDegeneracy {
                    collocation_index: row.len(),
                    source_index: None,
                })?;
                row.push(value);
            }
        }
        Ok(row)
    }
}
