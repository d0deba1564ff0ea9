//! Definition of various test shapes.

use crate::boundary::{BoundaryCurve, Point2D};
use crate::types::{Error, RealScalar, Result};
use num::Float;

/// Create a regular polygon inscribed in a circle
///
/// The `npoints` vertices lie on the circle of radius `radius` around `centre`, starting at
/// angle zero and running counter-clockwise. Every sample carries `value`.
pub fn regular_polygon<T: RealScalar>(
    centre: Point2D<T>,
    radius: T,
    npoints: usize,
    value: T,
) -> Result<BoundaryCurve<T>> {
    if npoints < 2 {
        return Err(Error::MalformedBoundary(format!(
            "a polygon needs at least 2 points, got {npoints}"
        )));
    }
    let two = num::cast::<f64, T>(2.0).unwrap();
    let n = num::cast::<usize, T>(npoints).unwrap();
    let mut curve = BoundaryCurve::with_capacity(npoints);
    for k in 0..npoints {
        let angle = two * T::PI() * num::cast::<usize, T>(k).unwrap() / n;
        curve.add_point(
            centre.x + radius * Float::cos(angle),
            centre.y + radius * Float::sin(angle),
            value,
        );
    }
    Ok(curve)
}

/// Create an axis-aligned rectangle
///
/// The four corners are listed counter-clockwise starting at `lower_left`.
pub fn rectangle<T: RealScalar>(
    lower_left: Point2D<T>,
    upper_right: Point2D<T>,
    value: T,
) -> Result<BoundaryCurve<T>> {
    if lower_left.x >= upper_right.x || lower_left.y >= upper_right.y {
        return Err(Error::MalformedBoundary(format!(
            "rectangle corners {lower_left:?} and {upper_right:?} do not span a positive area"
        )));
    }
    let mut curve = BoundaryCurve::with_capacity(4);
    curve.add_point(lower_left.x, lower_left.y, value);
    curve.add_point(upper_right.x, lower_left.y, value);
    curve.add_point(upper_right.x, upper_right.y, value);
    curve.add_point(lower_left.x, upper_right.y, value);
    Ok(curve)
}
