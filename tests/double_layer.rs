use approx::assert_relative_eq;
use bem2d::shapes::{rectangle, regular_polygon};
use bem2d::traits::{BoundaryOperator, PotentialOperator};
use bem2d::{
    BoundaryCollection, BoundaryCollectionBuilder, BoundaryCurve, DoubleLayerAssembler,
    DoubleLayerPotential, Error, Point2D,
};
use rayon::prelude::*;
use rlst::{rlst_dynamic_array2, RandomAccessByRef, Shape};

fn circle(npoints: usize) -> BoundaryCollection<f64> {
    let mut b = BoundaryCollectionBuilder::new();
    b.add_boundary(regular_polygon(Point2D::new(0.5, -1.0), 2.0, npoints, 0.0).unwrap())
        .unwrap();
    b.create_collection()
}

#[test]
fn test_circle_columns_reproduce_gauss_integral() {
    // On a smooth closed curve the double layer of a unit density is -1/2; on an inscribed
    // regular polygon each vertex sees exactly -(n - 2) / (2n).
    for npoints in [32, 256] {
        let c = circle(npoints);
        let a = DoubleLayerAssembler::new(&c);
        let exact = -((npoints - 2) as f64) / (2 * npoints) as f64;
        for j in 0..npoints {
            let sum = (0..npoints).map(|i| a.entry(i, j).unwrap()).sum::<f64>();
            assert_relative_eq!(sum, exact, epsilon = 1e-10);
            if npoints >= 256 {
                assert_relative_eq!(sum, -0.5, max_relative = 1e-2);
            }
        }
    }
}

#[test]
fn test_separate_curves_do_not_see_each_other_in_total() {
    let mut b = BoundaryCollectionBuilder::new();
    b.add_boundary(regular_polygon(Point2D::new(0.0, 0.0), 1.0, 48, 0.0).unwrap())
        .unwrap();
    b.add_boundary(rectangle(Point2D::new(3.0, -1.0), Point2D::new(4.0, 2.0), 0.0).unwrap())
        .unwrap();
    let c = b.create_collection();
    let a = DoubleLayerAssembler::new(&c);

    for j in 0..c.total_size() {
        let (curve, _) = c.resolve(j).unwrap();
        let start = c.offset(curve).unwrap();
        let own = start..start + c.boundary(curve).unwrap().size();
        let (inside, outside): (Vec<usize>, Vec<usize>) =
            (0..c.total_size()).partition(|i| own.contains(i));
        let own_sum = inside.iter().map(|i| a.entry(*i, j).unwrap()).sum::<f64>();
        let other_sum = outside.iter().map(|i| a.entry(*i, j).unwrap()).sum::<f64>();
        assert!(own_sum < 0.0);
        assert_relative_eq!(other_sum, 0.0, epsilon = 1e-12);
    }
    // Rectangle corners have an interior angle of pi / 2.
    let corner = (48..52).map(|i| a.entry(i, 49).unwrap()).sum::<f64>();
    assert_relative_eq!(corner, -0.25, epsilon = 1e-12);
}

#[test]
fn test_dense_assembly() {
    let c = circle(20);
    let a = DoubleLayerAssembler::new(&c);
    let matrix = a.assemble_dense().unwrap();
    assert_eq!(matrix.shape(), [20, 20]);
    for i in 0..20 {
        let row = a.row(i).unwrap();
        for j in 0..20 {
            assert_eq!(*matrix.get([i, j]).unwrap(), row[j]);
            assert_eq!(row[j], a.entry(i, j).unwrap());
            assert!(row[j].is_finite());
        }
    }

    let mut wrong = rlst_dynamic_array2!(f64, [20, 19]);
    assert_eq!(
        a.assemble_into_dense(&mut wrong).unwrap_err(),
        Error::ShapeMismatch {
            expected: [20, 20],
            actual: [20, 19]
        }
    );
}

#[test]
fn test_dense_assembly_aborts_on_degenerate_segment() {
    let mut curve = BoundaryCurve::new();
    curve.add_point(0.0, 0.0, 0.0);
    curve.add_point(1.0, 0.0, 0.0);
    curve.add_point(1.0, 1.0, 0.0);
    curve.add_point(1.0, 1.0, 0.0);
    curve.add_point(0.0, 1.0, 0.0);
    let mut b = BoundaryCollectionBuilder::new();
    b.add_boundary(curve).unwrap();
    let c = b.create_collection();
    let a = DoubleLayerAssembler::new(&c);
    assert_eq!(
        a.assemble_dense().unwrap_err(),
        Error::NumericDegeneracy {
            collocation_index: 2,
            source_index: Some(0)
        }
    );
    assert!(a.row(1).is_ok());
    assert!(a.row(2).is_err());
}

#[test]
fn test_rows_can_be_assembled_in_parallel() {
    let c = circle(64);
    let a = DoubleLayerAssembler::new(&c);
    let parallel = (0..c.total_size())
        .into_par_iter()
        .map(|i| a.row(i))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    for (i, row) in parallel.iter().enumerate() {
        assert_eq!(*row, a.row(i).unwrap());
    }
}

#[test]
fn test_interior_potential_of_unit_density() {
    let c = circle(64);
    let p = DoubleLayerPotential::new(&c);
    let density = vec![1.0; c.total_size()];
    let targets = [
        Point2D::new(0.5, -1.0),
        Point2D::new(1.9, -0.2),
        Point2D::new(5.0, 5.0),
        Point2D::new(-1.4, -1.0),
    ];
    let values = p.evaluate(&targets, &density).unwrap();
    assert_relative_eq!(values[0], -1.0, epsilon = 1e-12);
    assert_relative_eq!(values[1], -1.0, epsilon = 1e-12);
    assert_relative_eq!(values[2], 0.0, epsilon = 1e-12);
    assert_relative_eq!(values[3], -1.0, epsilon = 1e-12);
}

#[test]
fn test_f32_assembly() {
    let mut b = BoundaryCollectionBuilder::<f32>::new();
    b.add_boundary(regular_polygon(Point2D::new(0.0, 0.0), 1.0, 32, 0.0).unwrap())
        .unwrap();
    let c = b.create_collection();
    let a = DoubleLayerAssembler::new(&c);
    let sum = (0..32).map(|i| a.entry(i, 5).unwrap()).sum::<f32>();
    assert_relative_eq!(sum, -30.0 / 64.0, epsilon = 1e-5);
}
