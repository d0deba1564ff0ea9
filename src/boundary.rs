//! Boundary curves and collections
pub mod collection;
pub mod curve;
pub mod point;

pub use collection::{BoundaryCollection, BoundaryCollectionBuilder};
pub use curve::BoundaryCurve;
pub use point::{Point2D, SampledPoint};
