//! bem2d
//!
//! Numerical solutions of the two-dimensional Laplace equation. The boundary element part
//! assembles the double layer operator over closed piecewise linear boundary curves using a
//! closed-form integral over each segment; the [fda] module provides a finite difference
//! relaxation on a regular grid.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod assembly;
pub mod boundary;
pub mod fda;
pub mod shapes;
pub mod traits;
pub mod types;

pub use assembly::{DoubleLayerAssembler, DoubleLayerPotential};
pub use boundary::{
    BoundaryCollection, BoundaryCollectionBuilder, BoundaryCurve, Point2D, SampledPoint,
};
pub use types::{Error, RealScalar, Result};
