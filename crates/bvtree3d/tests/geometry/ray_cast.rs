use super::random_points;
use bvtree3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume};
use bvtree3d::math::{Point, Real, Transform, Vector};
use bvtree3d::query::details::{
    local_ray_intersection_with_triangle, ray_toi_with_triangle_plane,
    segment_toi_with_triangle_plane,
};
use bvtree3d::query::{QueryTolerances, Ray, RayCast};
use bvtree3d::shape::{Segment, Triangle};
use bvtree3d::utils::TransformOps;
use na::Rotation3;
use oorandom::Rand32;

#[test]
fn ray_hits_unit_box_front_face() {
    let aabb = Aabb::new(Point::origin(), Vector::new(1.0, 1.0, 1.0));
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::z());
    let hit = aabb.cast_ray(&ray).unwrap();

    assert_relative_eq!(hit.time_of_impact, 4.0);
    assert_relative_eq!(hit.point, Point::new(0.0, 0.0, -1.0));
    assert_eq!(aabb.cast_ray_toi(&ray, 3.0), None);
    assert_eq!(aabb.cast_ray_toi(&ray, 4.5), Some(4.0));
}

#[test]
fn rays_toward_the_center_hit_the_surface() {
    let mut rng = Rand32::new(17);
    let aabb = Aabb::new(Point::new(1.0, -2.0, 3.0), Vector::new(0.5, 2.0, 1.0));
    let sphere = BoundingSphere::new(Point::new(1.0, -2.0, 3.0), 1.5);

    for origin in random_points(&mut rng, 200, 20.0) {
        let origin = origin + aabb.center.coords;
        let ray = Ray::new(origin, aabb.center - origin);

        if !aabb.contains_local_point(&origin) {
            let hit = aabb.cast_ray(&ray).unwrap();
            assert!(hit.time_of_impact > 0.0 && hit.time_of_impact <= 1.0);
            let local = hit.point - aabb.center;
            let on_face = (0..3)
                .any(|i| relative_eq!(local[i].abs(), aabb.half_extents[i], epsilon = 1.0e-3));
            assert!(on_face);
            assert!(aabb.loosened(1.0e-3).contains_local_point(&hit.point));

            // The opposite ray misses.
            assert!(!aabb.intersects_ray(&Ray::new(origin, -ray.dir)));
        }

        if !sphere.contains_local_point(&origin) {
            let hit = sphere.cast_ray(&ray).unwrap();
            assert_relative_eq!(
                na::distance(&hit.point, sphere.center()),
                sphere.radius(),
                epsilon = 1.0e-3
            );
            assert!(!sphere.intersects_ray(&Ray::new(origin, -ray.dir)));
        }
    }
}

#[test]
fn ray_starting_inside_hits_at_zero() {
    let aabb = Aabb::new(Point::origin(), Vector::repeat(1.0));
    let sphere = BoundingSphere::new(Point::origin(), 1.0);
    let ray = Ray::new(Point::new(0.2, 0.1, 0.0), Vector::new(0.0, 1.0, 1.0));

    assert_eq!(aabb.cast_ray(&ray).unwrap().time_of_impact, 0.0);
    assert_eq!(sphere.cast_ray(&ray).unwrap().time_of_impact, 0.0);
}

#[test]
fn ray_parallel_to_a_slab() {
    let aabb = Aabb::new(Point::origin(), Vector::repeat(1.0));
    let inside_slab = Ray::new(Point::new(-3.0, 0.5, 0.5), Vector::x());
    let outside_slab = Ray::new(Point::new(-3.0, 1.5, 0.5), Vector::x());

    assert_relative_eq!(aabb.cast_ray(&inside_slab).unwrap().time_of_impact, 2.0);
    assert!(aabb.cast_ray(&outside_slab).is_none());

    // A coarse parallelism threshold treats the slightly tilted ray as parallel.
    let tilted = Ray::new(Point::new(-3.0, 1.5, 0.5), Vector::new(1.0, -1.0e-3, 0.0));
    let coarse = QueryTolerances {
        parallel_epsilon: 1.0e-2,
        ..QueryTolerances::default()
    };
    assert!(aabb.cast_ray(&tilted).is_none());
    assert!(aabb.cast_ray_with_tolerances(&tilted, &coarse).is_none());
    let reaching = Ray::new(Point::new(-3.0, 1.001, 0.5), Vector::new(1.0, -1.0e-3, 0.0));
    assert!(aabb.cast_ray(&reaching).is_some());
    assert!(aabb.cast_ray_with_tolerances(&reaching, &coarse).is_none());
}

#[test]
fn transformed_ray_hits_transformed_sphere() {
    let m: Transform<Real> = Transform::new_translation(&Vector::new(5.0, 0.0, 0.0))
        * Rotation3::from_euler_angles(0.4, 0.0, 0.9).to_homogeneous();
    let sphere = BoundingSphere::new(Point::new(0.0, 0.0, 2.0), 1.0);
    let ray = Ray::new(Point::new(0.0, 0.0, -3.0), Vector::z());

    let local_hit = sphere.cast_ray(&ray).unwrap();
    let world_hit = sphere.transform_by(&m).cast_ray(&ray.transform_by(&m)).unwrap();

    assert_relative_eq!(
        local_hit.time_of_impact,
        world_hit.time_of_impact,
        epsilon = 1.0e-4
    );
    assert_relative_eq!(
        m.transform_affine_point(&local_hit.point),
        world_hit.point,
        epsilon = 1.0e-4
    );
}

#[test]
fn ray_hits_triangle_at_barycentric_coordinates() {
    let mut rng = Rand32::new(77);
    let pts = random_points(&mut rng, 3, 5.0);
    let triangle = Triangle::new(pts[0], pts[1], pts[2]);
    let normal = triangle.normal().unwrap();

    let target = triangle.a * 0.2 + triangle.b.coords * 0.3 + triangle.c.coords * 0.5;
    let origin = target + *normal * 4.0;
    let ray = Ray::new(origin, target - origin);

    let inter = local_ray_intersection_with_triangle(&triangle, &ray, 1.0e-5).unwrap();
    assert_relative_eq!(inter.hit.time_of_impact, 1.0, epsilon = 1.0e-3);
    assert_relative_eq!(inter.hit.point, target, epsilon = 1.0e-3);
    assert_relative_eq!(inter.barycentric[0], 0.2, epsilon = 1.0e-3);
    assert_relative_eq!(inter.barycentric[1], 0.3, epsilon = 1.0e-3);
    assert_relative_eq!(inter.barycentric[2], 0.5, epsilon = 1.0e-3);

    // Outside of the triangle, but on its plane.
    let outside = triangle.a + (triangle.a - triangle.c);
    let ray = Ray::new(outside + *normal, -*normal);
    assert!(triangle.cast_ray(&ray).is_none());
    let plane_hit = ray_toi_with_triangle_plane(&triangle.a, &triangle.b, &triangle.c, &ray);
    assert_relative_eq!(plane_hit.unwrap().point, outside, epsilon = 1.0e-3);
}

#[test]
fn segment_crosses_triangle_plane() {
    let a = Point::new(0.0, 0.0, 1.0);
    let b = Point::new(1.0, 0.0, 1.0);
    let c = Point::new(0.0, 1.0, 1.0);

    let crossing = Segment::new(Point::new(0.2, 0.2, 0.0), Point::new(0.2, 0.2, 4.0));
    let hit = segment_toi_with_triangle_plane(&a, &b, &c, &crossing).unwrap();
    assert_relative_eq!(hit.time_of_impact, 0.25);
    assert_relative_eq!(hit.point, Point::new(0.2, 0.2, 1.0));

    let short = Segment::new(Point::new(0.2, 0.2, 0.0), Point::new(0.2, 0.2, 0.5));
    assert!(segment_toi_with_triangle_plane(&a, &b, &c, &short).is_none());
}
