//! Closed-tour length evaluation.

use peddler_core::{InstanceBatch, SolutionBatch};

/// Closed-tour length of one route over one instance's coordinates.
///
/// `instance` is the interleaved-xy coordinate slice of a single
/// instance (as returned by [`InstanceBatch::instance`]); `route` must
/// be a complete permutation of `[0, C)`. The sum is cyclic: it starts
/// with the wrap-around edge from the last city back to the first.
///
/// Behaviour on a partial or malformed route is undefined (a sentinel
/// slot will panic on indexing); the environment only evaluates
/// completed instances.
pub fn tour_length(instance: &[f32], route: &[usize]) -> f32 {
    let mut total = 0.0f32;
    let mut prev = route[route.len() - 1];
    for &city in route {
        let [px, py] = [instance[prev * 2], instance[prev * 2 + 1]];
        let [cx, cy] = [instance[city * 2], instance[city * 2 + 1]];
        total += (px - cx).hypot(py - cy);
        prev = city;
    }
    total
}

/// Closed-tour length of every instance's route.
///
/// Preconditions match [`tour_length`]: every route in `solutions` must
/// be complete, and `solutions` must share the batch shape of
/// `instances`.
///
/// # Panics
///
/// Panics if the batch shapes disagree.
pub fn evaluate_solutions(instances: &InstanceBatch, solutions: &SolutionBatch) -> Vec<f32> {
    assert_eq!(
        (instances.n_instances(), instances.n_cities()),
        (solutions.n_instances(), solutions.n_cities()),
        "instance and solution batches must share a shape"
    );

    (0..instances.n_instances())
        .map(|b| tour_length(instances.instance(b), solutions.route(b)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::random_instances;
    use proptest::prelude::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn unit_square_perimeter() {
        let coords = vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
        assert_eq!(tour_length(&coords, &[0, 1, 2, 3]), 4.0);
    }

    #[test]
    fn wrap_around_edge_is_included() {
        // Two cities: the tour goes out and back.
        let coords = vec![0.0, 0.0, 3.0, 4.0];
        assert_eq!(tour_length(&coords, &[0, 1]), 10.0);
    }

    #[test]
    fn rotation_invariant() {
        let coords = vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
        let a = tour_length(&coords, &[0, 1, 2, 3]);
        let b = tour_length(&coords, &[2, 3, 0, 1]);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn batched_evaluation_matches_per_instance() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let instances = random_instances(4, 6, &mut rng).unwrap();

        let mut solutions = SolutionBatch::empty(4, 6).unwrap();
        for b in 0..4 {
            let mut perm: Vec<usize> = (0..6).collect();
            perm.shuffle(&mut rng);
            for city in perm {
                solutions.push(b, city);
            }
        }

        let values = evaluate_solutions(&instances, &solutions);
        assert_eq!(values.len(), 4);
        for b in 0..4 {
            assert_eq!(
                values[b],
                tour_length(instances.instance(b), solutions.route(b))
            );
        }
    }

    #[test]
    #[should_panic(expected = "share a shape")]
    fn shape_mismatch_panics() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let instances = random_instances(2, 5, &mut rng).unwrap();
        let solutions = SolutionBatch::empty(2, 4).unwrap();
        evaluate_solutions(&instances, &solutions);
    }

    proptest! {
        #[test]
        fn matches_brute_force_cyclic_sum(seed in 0u64..500, c in 2usize..25) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let instances = random_instances(1, c, &mut rng).unwrap();
            let mut route: Vec<usize> = (0..c).collect();
            route.shuffle(&mut rng);

            let got = tour_length(instances.instance(0), &route);

            let mut expected = 0.0f32;
            for k in 0..c {
                let [ax, ay] = instances.city(0, route[k]);
                let [bx, by] = instances.city(0, route[(k + 1) % c]);
                expected += ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt();
            }

            prop_assert!(
                (got - expected).abs() < 1e-4,
                "cyclic sum mismatch: {got} vs {expected}"
            );
        }
    }
}
