use super::random_points;
use bvtree3d::bounding_volume::{Aabb, BoundingVolume};
use bvtree3d::math::{Point, Real, Transform, Vector};
use bvtree3d::utils::TransformOps;
use na::{Rotation3, Vector3};
use oorandom::Rand32;

fn test_transform() -> Transform<Real> {
    Transform::new_translation(&Vector::new(3.0, -1.0, 0.5))
        * Rotation3::from_euler_angles(0.3, -0.7, 1.1).to_homogeneous()
        * Transform::new_nonuniform_scaling(&Vector::new(2.0, 0.5, 1.5))
}

#[test]
fn aabb_from_cube_corners() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(1.0, 1.0, 1.0),
    ];
    let aabb = Aabb::from_points(&points).unwrap();

    assert_eq!(aabb.center(), Point::new(0.5, 0.5, 0.5));
    assert_eq!(aabb.half_extents(), Vector3::new(0.5, 0.5, 0.5));
    assert_eq!(aabb.mins(), Point::origin());
    assert_eq!(aabb.maxs(), Point::new(1.0, 1.0, 1.0));
    assert!(!aabb.is_planar());
}

#[test]
fn aabb_contains_its_points() {
    let mut rng = Rand32::new(42);

    for n in [1, 2, 10, 100] {
        let points = random_points(&mut rng, n, 10.0);
        let aabb = Aabb::from_points(&points).unwrap().loosened(1.0e-4);

        for pt in &points {
            assert!(aabb.contains_local_point(pt));
        }

        let indices: Vec<u32> = (0..n as u32).step_by(2).collect();
        let indexed = Aabb::from_indexed_points(&points, &indices)
            .unwrap()
            .loosened(1.0e-4);
        assert!(aabb.loosened(1.0e-4).contains(&indexed));

        for i in &indices {
            assert!(indexed.contains_local_point(&points[*i as usize]));
        }
    }
}

#[test]
fn aabb_of_nothing() {
    assert!(Aabb::from_points(&[]).is_none());
    assert!(Aabb::from_indexed_points(&[Point::origin()], &[]).is_none());
}

#[test]
fn transformed_aabb_contains_transformed_points() {
    let mut rng = Rand32::new(7);
    let m = test_transform();

    for _ in 0..20 {
        let points = random_points(&mut rng, 50, 5.0);
        let aabb = Aabb::from_points(&points).unwrap();
        let transformed = aabb.transform_by(&m).loosened(1.0e-3);

        for pt in &points {
            assert!(transformed.contains_local_point(&m.transform_affine_point(pt)));
        }

        // Transforming the points first gives a tighter box.
        let tight = Aabb::from_transformed_points(&m, &points).unwrap();
        assert!(transformed.contains(&tight));
    }
}

#[test]
fn aabb_set_faces() {
    let mut aabb = Aabb::from_mins_maxs(Point::new(0.0, 0.0, 0.0), Point::new(2.0, 2.0, 2.0));

    aabb.set_max_on_axis(0, 4.0);
    assert_eq!(aabb.mins(), Point::new(0.0, 0.0, 0.0));
    assert_eq!(aabb.maxs(), Point::new(4.0, 2.0, 2.0));

    aabb.set_min_on_axis(1, 1.0);
    assert_eq!(aabb.mins(), Point::new(0.0, 1.0, 0.0));
    assert_eq!(aabb.center(), Point::new(2.0, 1.5, 1.0));

    aabb.set_mins(&Point::new(-2.0, -2.0, -2.0));
    assert_eq!(aabb.maxs(), Point::new(4.0, 2.0, 2.0));
    assert_eq!(aabb.half_extents(), Vector3::new(3.0, 2.0, 2.0));

    aabb.set_maxs(&Point::new(0.0, 0.0, -2.0));
    assert!(aabb.is_planar());
    assert_eq!(aabb.volume(), 0.0);
}

#[test]
fn aabb_merge_contains_both() {
    let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
    let b = Aabb::new(Point::new(3.0, 0.0, 1.0), Vector3::new(0.5, 2.0, 0.5));
    let merged = a.merged(&b);

    assert!(merged.contains(&a));
    assert!(merged.contains(&b));
    assert_eq!(merged.mins(), Point::new(-1.0, -2.0, -1.0));
    assert_eq!(merged.maxs(), Point::new(3.5, 2.0, 1.5));
}
