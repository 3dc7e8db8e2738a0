use super::{random_points, random_range};
use bvtree3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume};
use bvtree3d::math::{Point, Real, Vector};
use bvtree3d::query::{
    self, intersection_test_aabb_aabb, intersection_test_sphere_aabb,
    intersection_test_sphere_aabb_with_tolerances, intersection_test_sphere_sphere,
    QueryTolerances,
};
use oorandom::Rand32;

#[test]
fn touching_spheres_intersect() {
    let s1 = BoundingSphere::new(Point::origin(), 1.0);
    let s2 = BoundingSphere::new(Point::new(2.0, 0.0, 0.0), 1.0);
    let s3 = BoundingSphere::new(Point::new(2.01, 0.0, 0.0), 1.0);

    assert!(intersection_test_sphere_sphere(&s1, &s2));
    assert!(!intersection_test_sphere_sphere(&s1, &s3));
    assert!(s1.intersects(&s2));
}

#[test]
fn touching_boxes_intersect() {
    let a = Aabb::new(Point::origin(), Vector::repeat(1.0));
    let b = Aabb::new(Point::new(2.0, 2.0, 0.0), Vector::repeat(1.0));
    let c = Aabb::new(Point::new(2.0, 2.01, 0.0), Vector::repeat(1.0));

    assert!(intersection_test_aabb_aabb(&a, &b));
    assert!(!intersection_test_aabb_aabb(&a, &c));
}

#[test]
fn pairwise_tests_are_symmetric() {
    let mut rng = Rand32::new(31);

    for _ in 0..500 {
        let centers = random_points(&mut rng, 2, 5.0);
        let s1 = BoundingSphere::new(centers[0], random_range(&mut rng, 2.0).abs());
        let s2 = BoundingSphere::new(centers[1], random_range(&mut rng, 2.0).abs());
        assert_eq!(
            intersection_test_sphere_sphere(&s1, &s2),
            intersection_test_sphere_sphere(&s2, &s1)
        );

        let he = random_points(&mut rng, 2, 3.0);
        let a1 = Aabb::new(centers[0], he[0].coords);
        let a2 = Aabb::new(centers[1], he[1].coords);
        assert_eq!(
            intersection_test_aabb_aabb(&a1, &a2),
            intersection_test_aabb_aabb(&a2, &a1)
        );

        // Overlapping boxes share their center's closest point.
        if intersection_test_aabb_aabb(&a1, &a2) {
            let shared = query::closest_point_on_aabb(&a1.center, &a2);
            let shared = query::closest_point_on_aabb(&shared, &a1);
            assert!(a2.loosened(1.0e-4).contains_local_point(&shared));
        }
    }
}

#[test]
fn sphere_aabb_matches_the_distance_to_the_box() {
    let mut rng = Rand32::new(8);
    let aabb = Aabb::new(Point::new(0.0, 1.0, 0.0), Vector::new(1.0, 2.0, 0.5));

    for center in random_points(&mut rng, 300, 6.0) {
        let radius = random_range(&mut rng, 3.0).abs();
        let sphere = BoundingSphere::new(center, radius);
        let sq_dist = query::squared_distance_point_aabb(&center, &aabb);
        let closest = query::closest_point_on_aabb(&center, &aabb);

        assert_relative_eq!(
            na::distance_squared(&center, &closest),
            sq_dist,
            epsilon = 1.0e-3
        );

        let expected = sq_dist <= radius * radius + QueryTolerances::DEFAULT_SPHERE_AABB_OFFSET;
        assert_eq!(intersection_test_sphere_aabb(&sphere, &aabb), expected);
    }
}

#[test]
fn sphere_aabb_offset_is_configurable() {
    let aabb = Aabb::new(Point::origin(), Vector::repeat(1.0));
    // The sphere is 0.01 away from the top face.
    let sphere = BoundingSphere::new(Point::new(0.0, 2.01, 0.0), 1.0);
    let loose = QueryTolerances {
        sphere_aabb_offset: 0.1,
        ..QueryTolerances::default()
    };

    assert!(!intersection_test_sphere_aabb(&sphere, &aabb));
    assert!(intersection_test_sphere_aabb_with_tolerances(&sphere, &aabb, &loose));

    let touching = BoundingSphere::new(Point::new(0.0, 2.0, 0.0), 1.0);
    assert!(intersection_test_sphere_aabb(&touching, &aabb));
    let inside = BoundingSphere::new(Point::new(0.1, 0.0, 0.0), 0.1);
    assert!(intersection_test_sphere_aabb(&inside, &aabb));
}

#[test]
fn sphere_time_of_impact() {
    let s1 = BoundingSphere::new(Point::origin(), 1.0);
    let s2 = BoundingSphere::new(Point::new(4.0, 0.0, 0.0), 1.0);
    let still: Vector<Real> = Vector::zeros();

    // s2 moves toward s1.
    let closing = Vector::new(-1.0, 0.0, 0.0);
    let toi = query::time_of_impact_sphere_sphere(&s1, &still, &s2, &closing, 10.0);
    assert_eq!(toi, 0.0);

    // s2 moves away from s1, slowly then quickly.
    let slow = Vector::new(1.0, 0.0, 0.0);
    let toi = query::time_of_impact_sphere_sphere(&s1, &still, &s2, &slow, 10.0);
    assert_relative_eq!(toi, 0.25);

    let fast = Vector::new(20.0, 0.0, 0.0);
    let toi = query::time_of_impact_sphere_sphere(&s1, &still, &s2, &fast, 10.0);
    assert_eq!(toi, 10.0);
}
