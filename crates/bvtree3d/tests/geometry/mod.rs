use bvtree3d::math::{Point, Real, Vector};
use oorandom::Rand32;

mod aabb_create;
mod intersection_tests;
mod mark_collided;
mod plane_intersection;
mod ray_cast;

/// Uniformly distributed points in the box `[-extent, extent]³`.
pub fn random_points(rng: &mut Rand32, n: usize, extent: Real) -> Vec<Point<Real>> {
    (0..n)
        .map(|_| {
            Point::new(
                random_range(rng, extent),
                random_range(rng, extent),
                random_range(rng, extent),
            )
        })
        .collect()
}

pub fn random_range(rng: &mut Rand32, extent: Real) -> Real {
    (rng.rand_float() as Real * 2.0 - 1.0) * extent
}

/// A random triangle soup: `n` triangles referencing random vertices.
pub fn random_mesh(rng: &mut Rand32, n: usize, extent: Real) -> (Vec<Point<Real>>, Vec<u32>) {
    let vertices = random_points(rng, n * 2, extent);
    let indices = (0..n * 3)
        .map(|_| rng.rand_range(0..vertices.len() as u32))
        .collect();
    (vertices, indices)
}

/// A regular grid of `n x n` unit quads in the plane `z = 0`, shifted by `shift`.
pub fn grid(n: u32, shift: Vector<Real>) -> (Vec<Point<Real>>, Vec<u32>) {
    let mut vertices = vec![];
    let mut indices = vec![];

    for j in 0..=n {
        for i in 0..=n {
            vertices.push(Point::new(i as Real, j as Real, 0.0) + shift);
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + n + 1;
            let v11 = v01 + 1;
            indices.extend_from_slice(&[v00, v10, v11, v00, v11, v01]);
        }
    }

    (vertices, indices)
}
