//! Points and boundary samples
use crate::types::RealScalar;
use num::Float;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A point (or vector) in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D<T: RealScalar> {
    /// x coordinate
    pub x: T,
    /// y coordinate
    pub y: T,
}

impl<T: RealScalar> Point2D<T> {
    /// Create a new point
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin
    pub fn zero() -> Self {
        Self::new(num::Zero::zero(), num::Zero::zero())
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Scalar cross product `self.x * other.y - self.y * other.x`
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean norm
    pub fn norm(&self) -> T {
        Float::hypot(self.x, self.y)
    }

    /// The vector scaled to unit length.
    ///
    /// The zero vector has no direction; its components come back as NaN.
    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }

    /// Check that both coordinates are finite
    pub fn is_finite(&self) -> bool {
        Float::is_finite(self.x) && Float::is_finite(self.y)
    }
}

impl<T: RealScalar> From<[T; 2]> for Point2D<T> {
    fn from(p: [T; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl<T: RealScalar> Add for Point2D<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: RealScalar> Sub for Point2D<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: RealScalar> Neg for Point2D<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: RealScalar> Mul<T> for Point2D<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: RealScalar> Div<T> for Point2D<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// A boundary sample: a position carrying a scalar value.
///
/// Arithmetic acts on the position and the value together, so differences of samples
/// (tangents) carry the change of the value along with the change of position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPoint<T: RealScalar> {
    position: Point2D<T>,
    value: T,
}

impl<T: RealScalar> SampledPoint<T> {
    /// Create a new sample
    pub fn new(position: Point2D<T>, value: T) -> Self {
        Self { position, value }
    }

    /// Create a new sample from coordinates
    pub fn from_coords(x: T, y: T, value: T) -> Self {
        Self::new(Point2D::new(x, y), value)
    }

    /// The position of the sample
    pub fn position(&self) -> &Point2D<T> {
        &self.position
    }

    /// The value carried by the sample
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: RealScalar> Add for SampledPoint<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.position + rhs.position, self.value + rhs.value)
    }
}

impl<T: RealScalar> Sub for SampledPoint<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.position - rhs.position, self.value - rhs.value)
    }
}

impl<T: RealScalar> Neg for SampledPoint<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.position, -self.value)
    }
}

impl<T: RealScalar> Mul<T> for SampledPoint<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.position * rhs, self.value * rhs)
    }
}

impl<T: RealScalar> Div<T> for SampledPoint<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.position / rhs, self.value / rhs)
    }
}
