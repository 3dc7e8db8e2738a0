use super::grid;
use bvtree3d::bounding_volume::{Aabb, BoundingSphere, BoundingVolume};
use bvtree3d::math::{Real, Vector};
use bvtree3d::partitioning::{mark_collided, Hierarchy, HierarchyVolume};

// Two overlapping grids whose hierarchies are complete binary trees: the barycenters of the
// grid triangles never lie on a splitting plane.
fn overlapping_grids<BV: HierarchyVolume>(shift: Vector<Real>) -> (Hierarchy<BV>, Hierarchy<BV>) {
    let (vertices, indices) = grid(8, Vector::zeros());
    let a = Hierarchy::build(&vertices, &indices, 4).unwrap();
    let (vertices, indices) = grid(8, shift);
    let b = Hierarchy::build(&vertices, &indices, 4).unwrap();

    for tree in [&a, &b] {
        assert_eq!(tree.valid_node_count(), tree.len());
        assert_eq!(tree.leaves().count(), 8);
    }

    (a, b)
}

// Every flagged leaf overlaps a leaf of the other tree. If `complete` is set, every leaf
// overlapping a leaf of the other tree must be flagged too.
fn check_flags<BV: HierarchyVolume>(
    a: &mut Hierarchy<BV>,
    b: &mut Hierarchy<BV>,
    complete: bool,
) {
    let num_pairs = mark_collided(a, b);
    assert!(num_pairs > 0);

    let mut num_overlapping_leaf_pairs = 0;

    for leaf_a in a.leaves() {
        let mut overlaps_any = false;

        for leaf_b in b.leaves() {
            if leaf_a.volume().intersects(leaf_b.volume()) {
                num_overlapping_leaf_pairs += 1;
                overlaps_any = true;

                if complete {
                    assert!(leaf_a.is_collided());
                    assert!(leaf_b.is_collided());
                }
            }
        }

        if leaf_a.is_collided() {
            assert!(overlaps_any);
        }
    }

    for leaf_b in b.collided_leaves() {
        assert!(a
            .leaves()
            .any(|leaf_a| leaf_a.volume().intersects(leaf_b.volume())));
    }

    if complete {
        assert!(num_pairs >= num_overlapping_leaf_pairs);
    }

    assert_eq!(
        a.collided_leaves().count(),
        a.leaves().filter(|leaf| leaf.is_collided()).count()
    );
}

#[test]
fn aabb_dual_tree_descent_is_complete() {
    for shift in [
        Vector::new(2.5, 1.5, 0.0),
        Vector::new(-5.5, 0.5, 0.0),
        Vector::new(6.5, 6.5, 0.0),
    ] {
        let (mut a, mut b) = overlapping_grids(shift);
        check_flags::<Aabb>(&mut a, &mut b, true);
    }
}

#[test]
fn sphere_dual_tree_descent_is_sound() {
    for shift in [Vector::new(2.5, 1.5, 0.0), Vector::new(9.0, 0.0, 0.0)] {
        let (mut a, mut b) = overlapping_grids(shift);
        check_flags::<BoundingSphere>(&mut a, &mut b, false);
    }
}

#[test]
fn disjoint_grids_mark_nothing() {
    let (mut a, mut b) = overlapping_grids::<Aabb>(Vector::new(20.0, 0.0, 0.0));

    assert_eq!(mark_collided(&mut a, &mut b), 0);
    assert_eq!(a.collided_leaves().count(), 0);
    assert!(b.nodes().iter().all(|node| !node.is_collided()));
}
