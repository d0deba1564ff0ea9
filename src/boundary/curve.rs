//! Closed boundary curves
use super::point::{Point2D, SampledPoint};
use crate::types::{check_index, Error, RealScalar, Result};
use itertools::Itertools;

/// A closed polyline of boundary samples.
///
/// The segment after the last sample joins it back to the first, so every neighbour query
/// wraps around the ends of the curve. Curves are expected to be authored counter-clockwise:
/// the normals returned by [BoundaryCurve::normal_from_tangent] then point out of the enclosed
/// region.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCurve<T: RealScalar> {
    points: Vec<SampledPoint<T>>,
}

impl<T: RealScalar> Default for BoundaryCurve<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar> BoundaryCurve<T> {
    /// Create an empty curve
    pub fn new() -> Self {
        Self { points: vec![] }
    }

    /// Create an empty curve with space for `npoints` samples
    pub fn with_capacity(npoints: usize) -> Self {
        Self {
            points: Vec::with_capacity(npoints),
        }
    }

    /// Create a curve from a list of samples
    pub fn from_points(points: Vec<SampledPoint<T>>) -> Self {
        Self { points }
    }

    /// Append a sample
    pub fn push(&mut self, point: SampledPoint<T>) {
        self.points.push(point);
    }

    /// Append a sample given by its coordinates and value
    pub fn add_point(&mut self, x: T, y: T, value: T) {
        self.push(SampledPoint::from_coords(x, y, value));
    }

    /// Number of samples
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Iterate over the samples
    pub fn iter(&self) -> std::slice::Iter<'_, SampledPoint<T>> {
        self.points.iter()
    }

    /// The sample at `index`
    pub fn point(&self, index: usize) -> Result<&SampledPoint<T>> {
        self.points.get(index).ok_or(Error::IndexOutOfRange {
            index,
            size: self.size(),
        })
    }

    /// The position of the sample at `index`
    pub fn position(&self, index: usize) -> Result<&Point2D<T>> {
        Ok(self.point(index)?.position())
    }

    /// The value of the sample at `index`
    pub fn value(&self, index: usize) -> Result<T> {
        Ok(self.point(index)?.value())
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.size()
    }

    fn previous_index(&self, index: usize) -> usize {
        (index + self.size() - 1) % self.size()
    }

    /// `point(index + 1) - point(index)`, wrapping at the end of the curve
    pub fn forward_tangent(&self, index: usize) -> Result<SampledPoint<T>> {
        check_index(index, self.size())?;
        Ok(self.points[self.next_index(index)] - self.points[index])
    }

    /// `point(index) - point(index - 1)`, wrapping at the start of the curve
    pub fn backward_tangent(&self, index: usize) -> Result<SampledPoint<T>> {
        check_index(index, self.size())?;
        Ok(self.points[index] - self.points[self.previous_index(index)])
    }

    /// `(point(index + 1) - point(index - 1)) / 2`, wrapping at both ends
    pub fn central_tangent(&self, index: usize) -> Result<SampledPoint<T>> {
        check_index(index, self.size())?;
        let two = num::cast::<f64, T>(2.0).unwrap();
        Ok((self.points[self.next_index(index)] - self.points[self.previous_index(index)]) / two)
    }

    /// Unit normal of a tangent: its position part rotated by -90 degrees.
    ///
    /// For a tangent `(tx, ty)` this is `(ty, -tx) / |(tx, ty)|`. The value channel of the
    /// tangent is ignored.
    pub fn normal_from_tangent(tangent: &SampledPoint<T>) -> Point2D<T> {
        let t = tangent.position();
        Point2D::new(t.y, -t.x).normalized()
    }

    /// Normal of the forward tangent at `index`
    pub fn forward_normal(&self, index: usize) -> Result<Point2D<T>> {
        Ok(Self::normal_from_tangent(&self.forward_tangent(index)?))
    }

    /// Normal of the backward tangent at `index`
    pub fn backward_normal(&self, index: usize) -> Result<Point2D<T>> {
        Ok(Self::normal_from_tangent(&self.backward_tangent(index)?))
    }

    /// Normal of the central tangent at `index`
    pub fn central_normal(&self, index: usize) -> Result<Point2D<T>> {
        Ok(Self::normal_from_tangent(&self.central_tangent(index)?))
    }

    /// Signed area enclosed by the curve (shoelace formula).
    ///
    /// Positive for counter-clockwise curves.
    pub fn signed_area(&self) -> T {
        let twice_area = self
            .points
            .iter()
            .circular_tuple_windows()
            .fold(num::Zero::zero(), |acc: T, (p, q)| {
                acc + p.position().cross(q.position())
            });
        twice_area / num::cast::<f64, T>(2.0).unwrap()
    }

    /// Check whether the curve is oriented counter-clockwise
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > num::Zero::zero()
    }

    /// Check whether the curve is oriented clockwise.
    ///
    /// Curves enclosing no area, such as two point curves, are neither clockwise nor
    /// counter-clockwise.
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < num::Zero::zero()
    }

    /// Check that the curve can be used for operator assembly.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.size() < 2 {
            return Err(Error::MalformedBoundary(format!(
                "a closed curve needs at least 2 points, got {}",
                self.size()
            )));
        }
        if let Some((index, _)) = self
            .points
            .iter()
            .find_position(|p| !p.position().is_finite() || !num::Float::is_finite(p.value()))
        {
            return Err(Error::MalformedBoundary(format!(
                "point {index} is not finite"
            )));
        }
        Ok(())
    }
}

impl<T: RealScalar> FromIterator<SampledPoint<T>> for BoundaryCurve<T> {
    fn from_iter<I: IntoIterator<Item = SampledPoint<T>>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}
