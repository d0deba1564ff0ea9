//! Types specific to bem2d

use rlst::RlstScalar;
use std::fmt::Debug;

/// A real scalar that geometry and operators can be computed with.
pub trait RealScalar:
    num::Float + num::traits::FloatConst + RlstScalar<Real = Self> + Send + Sync + Debug
{
}

impl<T: num::Float + num::traits::FloatConst + RlstScalar<Real = T> + Send + Sync + Debug>
    RealScalar for T
{
}

/// Errors raised by boundary construction, operator assembly and relaxation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A flat or local index does not address an existing point.
    #[error("Index {index} out of range for size {size}")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// The number of addressable items
        size: usize,
    },
    /// The closed-form segment integral is undefined for this pair.
    #[error("Degenerate segment at collocation point {collocation_index}")]
    NumericDegeneracy {
        /// Flat index of the collocation point
        collocation_index: usize,
        /// Flat index of the source point, if the evaluation had one
        source_index: Option<usize>,
    },
    /// A boundary curve that cannot be used for assembly.
    #[error("Malformed boundary: {0}")]
    MalformedBoundary(String),
    /// An output or input array of the wrong shape.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// The required shape
        expected: [usize; 2],
        /// The shape provided
        actual: [usize; 2],
    },
    /// An invalid finite difference grid.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
    /// Relaxation did not reach its tolerance.
    #[error("Relaxation did not converge after {iterations} iterations")]
    NotConverged {
        /// Number of sweeps performed
        iterations: usize,
    },
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Check that `index` is smaller than `size`.
pub(crate) fn check_index(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, size })
    }
}
