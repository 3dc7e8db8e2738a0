use super::random_points;
use bvtree3d::math::{Point, Vector, Vector4};
use bvtree3d::shape::Plane;
use oorandom::Rand32;

fn random_plane(rng: &mut Rand32) -> Plane {
    let pts = random_points(rng, 3, 10.0);
    Plane::from_points(&pts[0], &pts[1], &pts[2]).unwrap()
}

#[test]
fn three_random_planes_meet_on_all_of_them() {
    let mut rng = Rand32::new(3);

    for _ in 0..50 {
        let planes = [
            random_plane(&mut rng),
            random_plane(&mut rng),
            random_plane(&mut rng),
        ];

        if let Some(pt) = Plane::intersect_three_planes(&planes[0], &planes[1], &planes[2]) {
            // Badly conditioned triplets amplify rounding errors.
            let det = planes[0]
                .normal()
                .dot(&planes[1].normal().cross(&planes[2].normal()));
            if det.abs() > 0.1 {
                for plane in &planes {
                    assert_relative_eq!(plane.signed_distance(&pt), 0.0, epsilon = 1.0e-2);
                }
            }
        }
    }
}

#[test]
fn two_random_planes_meet_on_a_line() {
    let mut rng = Rand32::new(4);

    for _ in 0..50 {
        let p1 = random_plane(&mut rng);
        let p2 = random_plane(&mut rng);
        let line = p1.intersect_two_planes(&p2).unwrap();

        assert_relative_eq!(line.direction.dot(&p1.normal()), 0.0, epsilon = 1.0e-4);
        assert_relative_eq!(line.direction.dot(&p2.normal()), 0.0, epsilon = 1.0e-4);

        if line.direction.norm() > 0.1 {
            let far = line.point + line.direction;
            for plane in [p1, p2] {
                assert_relative_eq!(plane.signed_distance(&line.point), 0.0, epsilon = 1.0e-2);
                assert_relative_eq!(plane.signed_distance(&far), 0.0, epsilon = 1.0e-2);
            }
        }
    }
}

#[test]
fn coordinate_planes() {
    let x = Plane::from_vector4(&Vector4::new(1.0, 0.0, 0.0, 1.0));
    let y: Plane = Vector4::new(0.0, 1.0, 0.0, 2.0).into();
    let z = Plane::new(Vector::z(), 3.0);

    assert_eq!(
        Plane::intersect_three_planes(&x, &y, &z),
        Some(Point::new(1.0, 2.0, 3.0))
    );
    assert_eq!(x.to_vector4(), Vector4::new(1.0, 0.0, 0.0, 1.0));

    let shifted = Plane::from_coefficients(2.0, 0.0, 0.0, 5.0);
    assert!(x.intersect_two_planes(&shifted).is_none());
    assert!(Plane::intersect_three_planes(&x, &shifted, &y).is_none());
}
