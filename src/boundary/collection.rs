//! Collections of boundary curves sharing one flat index space
use super::{curve::BoundaryCurve, point::SampledPoint};
use crate::types::{Error, RealScalar, Result};
use log::{debug, warn};

/// Builder for a [BoundaryCollection].
///
/// Curves are appended in order; the order defines the flat index layout of the collection.
#[derive(Debug, Clone)]
pub struct BoundaryCollectionBuilder<T: RealScalar> {
    boundaries: Vec<BoundaryCurve<T>>,
}

impl<T: RealScalar> Default for BoundaryCollectionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar> BoundaryCollectionBuilder<T> {
    /// Create a new builder
    pub fn new() -> Self {
        Self { boundaries: vec![] }
    }

    /// Create a new builder with space for `nboundaries` curves
    pub fn with_capacity(nboundaries: usize) -> Self {
        Self {
            boundaries: Vec::with_capacity(nboundaries),
        }
    }

    /// Append a curve.
    ///
    /// Curves with fewer than two points or with non-finite samples are rejected.
    pub fn add_boundary(&mut self, curve: BoundaryCurve<T>) -> Result<&mut Self> {
        curve.validate()?;
        if curve.is_clockwise() {
            warn!(
                "Boundary {} is oriented clockwise: its normals point into the region it encloses.",
                self.boundaries.len()
            );
        }
        self.boundaries.push(curve);
        Ok(self)
    }

    /// Number of curves added so far
    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Sum of the sizes of all curves added so far
    pub fn total_size(&self) -> usize {
        self.boundaries.iter().map(|c| c.size()).sum()
    }

    /// Freeze the curves into a collection
    pub fn create_collection(self) -> BoundaryCollection<T> {
        BoundaryCollection::new(self.boundaries)
    }
}

/// An immutable, ordered set of closed curves addressed by flat indices.
///
/// Flat indices `0..total_size()` run through the points of the first curve, then the second
/// curve, and so on.
#[derive(Debug, Clone)]
pub struct BoundaryCollection<T: RealScalar> {
    boundaries: Vec<BoundaryCurve<T>>,
    // offsets[k] is the flat index of the first point of curve k; the last entry is the total size
    offsets: Vec<usize>,
}

impl<T: RealScalar> BoundaryCollection<T> {
    fn new(boundaries: Vec<BoundaryCurve<T>>) -> Self {
        let mut offsets = Vec::with_capacity(boundaries.len() + 1);
        offsets.push(0);
        for c in &boundaries {
            offsets.push(offsets[offsets.len() - 1] + c.size());
        }
        let collection = Self {
            boundaries,
            offsets,
        };
        debug!(
            "Created boundary collection with {} curves and {} points",
            collection.boundary_count(),
            collection.total_size()
        );
        collection
    }

    /// Number of curves
    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }

    /// Total number of points across all curves
    pub fn total_size(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    /// The curve with index `curve_index`
    pub fn boundary(&self, curve_index: usize) -> Result<&BoundaryCurve<T>> {
        self.boundaries
            .get(curve_index)
            .ok_or(Error::IndexOutOfRange {
                index: curve_index,
                size: self.boundary_count(),
            })
    }

    /// Iterate over the curves
    pub fn boundaries(&self) -> impl Iterator<Item = &BoundaryCurve<T>> {
        self.boundaries.iter()
    }

    /// The flat index of the first point of curve `curve_index`
    pub fn offset(&self, curve_index: usize) -> Result<usize> {
        self.boundary(curve_index)?;
        Ok(self.offsets[curve_index])
    }

    /// Map a flat index to `(curve index, local index)`.
    pub fn resolve(&self, flat_index: usize) -> Result<(usize, usize)> {
        if flat_index >= self.total_size() {
            return Err(Error::IndexOutOfRange {
                index: flat_index,
                size: self.total_size(),
            });
        }
        // Number of curves starting at or before flat_index. Every curve holds at least two
        // points, so offsets are strictly increasing and this is at least 1.
        let curve_index = self.offsets.partition_point(|&o| o <= flat_index) - 1;
        Ok((curve_index, flat_index - self.offsets[curve_index]))
    }

    /// The sample with flat index `flat_index`
    pub fn point(&self, flat_index: usize) -> Result<&SampledPoint<T>> {
        let (curve_index, local_index) = self.resolve(flat_index)?;
        self.boundaries[curve_index].point(local_index)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::boundary::Point2D;
    use crate::shapes::regular_polygon;

    fn polygon(npoints: usize) -> BoundaryCurve<f64> {
        regular_polygon(Point2D::new(0.0, 0.0), 1.0, npoints, 0.0).unwrap()
    }

    fn collection(sizes: &[usize]) -> BoundaryCollection<f64> {
        let mut b = BoundaryCollectionBuilder::new();
        for s in sizes {
            b.add_boundary(polygon(*s)).unwrap();
        }
        b.create_collection()
    }

    #[test]
    fn test_resolve() {
        let c = collection(&[5, 3]);
        assert_eq!(c.total_size(), 8);
        assert_eq!(c.boundary_count(), 2);
        assert_eq!(c.resolve(0).unwrap(), (0, 0));
        assert_eq!(c.resolve(4).unwrap(), (0, 4));
        assert_eq!(c.resolve(5).unwrap(), (1, 0));
        assert_eq!(c.resolve(7).unwrap(), (1, 2));
        assert_eq!(
            c.resolve(8).unwrap_err(),
            Error::IndexOutOfRange { index: 8, size: 8 }
        );
    }

    #[test]
    fn test_resolve_is_bijective() {
        let sizes = [4, 2, 7, 3];
        let c = collection(&sizes);
        let mut flat = 0;
        for (k, s) in sizes.iter().enumerate() {
            assert_eq!(c.offset(k).unwrap(), flat);
            for local in 0..*s {
                assert_eq!(c.resolve(flat).unwrap(), (k, local));
                assert_eq!(
                    c.point(flat).unwrap(),
                    c.boundary(k).unwrap().point(local).unwrap()
                );
                flat += 1;
            }
        }
        assert_eq!(flat, c.total_size());
        assert!(c.resolve(flat).is_err());
        assert!(c.offset(sizes.len()).is_err());
    }

    #[test]
    fn test_empty_collection() {
        let c = BoundaryCollectionBuilder::<f64>::new().create_collection();
        assert_eq!(c.total_size(), 0);
        assert!(c.resolve(0).is_err());
        assert!(c.boundary(0).is_err());
    }

    #[test]
    fn test_malformed_boundary_rejected() {
        let mut b = BoundaryCollectionBuilder::<f64>::new();
        let mut c = BoundaryCurve::new();
        c.add_point(0.0, 0.0, 0.0);
        assert!(matches!(
            b.add_boundary(c),
            Err(Error::MalformedBoundary(_))
        ));
        assert_eq!(b.boundary_count(), 0);
        assert_eq!(b.total_size(), 0);

        b.add_boundary(polygon(3)).unwrap();
        assert_eq!(b.total_size(), 3);
    }

    #[test]
    fn test_clockwise_boundary_accepted() {
        let reversed = polygon(6).iter().rev().copied().collect::<BoundaryCurve<f64>>();
        let mut b = BoundaryCollectionBuilder::new();
        b.add_boundary(polygon(4))
            .unwrap()
            .add_boundary(reversed)
            .unwrap();
        let c = b.create_collection();
        assert_eq!(c.total_size(), 10);
        assert_eq!(c.resolve(9).unwrap(), (1, 5));
    }

    #[test]
    fn test_two_point_boundary_accepted() {
        let mut segment = BoundaryCurve::<f64>::new();
        segment.add_point(0.0, 0.0, 1.0);
        segment.add_point(2.0, 0.0, 1.0);
        assert!(!segment.is_clockwise());
        let mut b = BoundaryCollectionBuilder::new();
        b.add_boundary(segment).unwrap();
        let c = b.create_collection();
        assert_eq!(c.total_size(), 2);
        assert_eq!(c.resolve(1).unwrap(), (0, 1));
    }
}
