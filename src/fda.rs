//! Finite difference relaxation on regular grids
pub mod grid;
pub mod relaxation;

pub use grid::Grid;
pub use relaxation::{FixedPoint, LaplaceRelaxation};
