//! Closed-form Laplace double layer integrals over straight segments
//!
//! For a segment `x(t) = start + t (end - start)`, `t` in `[0, 1]`, and a target point `x`,
//! the squared distance is the quadratic `|x(t) - x|^2 = a t^2 - b t + c` with
//!
//! - `a = (end - start) . (end - start)`
//! - `b = 2 (x - start) . (end - start)`
//! - `c = (x - start) . (x - start)`
//!
//! and `int_0^1 dt / (a t^2 - b t + c) = 2 / delta (atan((2a - b) / delta) + atan(b / delta))`
//! with `delta = sqrt(4ac - b^2)`.
//!
//! Both `4ac - b^2` and the sum of the arctangents are evaluated without subtraction:
//! `delta = 2 |(end - start) x (x - start)|` and the arctangents add up to the angle
//! `atan2(delta, 2c - b)` subtended by the segment at `x`, where
//! `2c - b = 2 (x - start) . (x - end)`.
use crate::boundary::{BoundaryCurve, Point2D, SampledPoint};
use crate::types::RealScalar;
use log::trace;
use num::Float;

/// Coefficients of the squared distance between a segment and a target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentQuadraticForm<T: RealScalar> {
    /// Squared segment length
    pub a: T,
    /// Twice the projection of `target - start` onto the segment
    pub b: T,
    /// Squared distance from `start` to the target
    pub c: T,
    /// `(end - start) x (target - start)`
    pub cross: T,
    /// `(target - start) . (target - end)`
    pub inner: T,
}

impl<T: RealScalar> SegmentQuadraticForm<T> {
    /// Coefficients for the segment from `start` to `end` seen from `target`
    pub fn new(start: &Point2D<T>, end: &Point2D<T>, target: &Point2D<T>) -> Self {
        let d = *end - *start;
        let r = *target - *start;
        Self {
            a: d.dot(&d),
            b: num::cast::<f64, T>(2.0).unwrap() * r.dot(&d),
            c: r.dot(&r),
            cross: d.cross(&r),
            inner: r.dot(&(*target - *end)),
        }
    }

    /// `4ac - b^2`
    ///
    /// Evaluated as `4 ((end - start) x (target - start))^2`, so it vanishes exactly when the
    /// target lies on the line through the segment.
    pub fn discriminant(&self) -> T {
        num::cast::<f64, T>(4.0).unwrap() * self.cross * self.cross
    }
}

/// Outcome of the closed-form integral of `1 / |x(t) - x|^2` over a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntegral<T: RealScalar> {
    /// The integral and the `delta` used to compute it
    Value {
        /// `sqrt(4ac - b^2)`
        delta: T,
        /// `int_0^1 dt / (a t^2 - b t + c)`
        integral: T,
    },
    /// The target is on the line through the segment
    Collinear,
    /// The segment has zero length or non-finite coordinates
    Degenerate,
}

/// Integrate `1 / |x(t) - x|^2` over the unit parameter interval.
///
/// Targets with `|(end - start) x (target - start)| <= tolerance |end - start| |target - start|`,
/// i.e. seen from `start` at an angle to the segment whose sine is at most `tolerance`, are
/// reported as collinear.
pub fn inverse_square_distance_integral<T: RealScalar>(
    form: &SegmentQuadraticForm<T>,
    tolerance: T,
) -> SegmentIntegral<T> {
    let zero = num::cast::<f64, T>(0.0).unwrap();
    let two = num::cast::<f64, T>(2.0).unwrap();

    if form.a <= zero
        || !Float::is_finite(form.cross)
        || !Float::is_finite(form.inner)
        || !Float::is_finite(form.c)
    {
        return SegmentIntegral::Degenerate;
    }
    if Float::abs(form.cross) <= tolerance * Float::sqrt(form.a * form.c) {
        return SegmentIntegral::Collinear;
    }
    let delta = two * Float::abs(form.cross);
    let angle = Float::atan2(delta, two * form.inner);
    SegmentIntegral::Value {
        delta,
        integral: two / delta * angle,
    }
}

/// The double layer kernel integrated over one segment.
///
/// Computes `1 / (2 pi) * int_segment n . (x - y) / |x - y|^2 ds_y` where `n` is the unit
/// normal of `tangent` (see [BoundaryCurve::normal_from_tangent]) and `tangent = end - start`.
/// The kernel vanishes identically for targets on the line through the segment, in which case
/// zero is returned. Returns `None` if the segment is degenerate.
pub fn double_layer_segment<T: RealScalar>(
    start: &Point2D<T>,
    end: &Point2D<T>,
    tangent: &SampledPoint<T>,
    target: &Point2D<T>,
    tolerance: T,
) -> Option<T> {
    let form = SegmentQuadraticForm::new(start, end, target);
    match inverse_square_distance_integral(&form, tolerance) {
        SegmentIntegral::Degenerate => None,
        SegmentIntegral::Collinear => Some(num::Zero::zero()),
        SegmentIntegral::Value { delta, integral } => {
            let normal = BoundaryCurve::normal_from_tangent(tangent);
            let dot = normal.dot(&(*target - *start));
            let two = num::cast::<f64, T>(2.0).unwrap();
            trace!(
                "Segment {start:?} -> {end:?} seen from {target:?}: a {:?}, b {:?}, c {:?}, delta {delta:?}, integral {integral:?}, normal dot {dot:?}",
                form.a, form.b, form.c
            );
            Some(dot * integral * tangent.position().norm() / (two * T::PI()))
        }
    }
}

/// Default tolerance on the sine of the angle below which a target counts as collinear with a
/// segment
pub fn default_collinear_tolerance<T: RealScalar>() -> T {
    <T as Float>::epsilon() * num::cast::<f64, T>(64.0).unwrap()
}
