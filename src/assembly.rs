//! Boundary operator assembly
pub mod double_layer;
pub mod kernels;
pub mod potential;

pub use double_layer::DoubleLayerAssembler;
pub use potential::DoubleLayerPotential;
