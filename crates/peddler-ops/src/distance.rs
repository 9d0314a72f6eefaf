//! Pairwise Euclidean distance matrices.

use peddler_core::{DistanceBatch, InstanceBatch};

/// Compute the full C × C Euclidean distance matrix for every instance.
///
/// Entry `(i, j)` is the norm of the coordinate difference between
/// cities `i` and `j`. Each matrix is symmetric with a zero diagonal;
/// instances are processed independently. Coincident cities produce a
/// zero off-diagonal distance, which is valid output, not an error.
///
/// Cost is quadratic in the city count per instance. Only the upper
/// triangle is computed; the lower triangle is mirrored.
pub fn compute_distances(instances: &InstanceBatch) -> DistanceBatch {
    let b = instances.n_instances();
    let c = instances.n_cities();
    let mut values = vec![0.0f32; b * c * c];

    for instance in 0..b {
        let base = instance * c * c;
        for i in 0..c {
            let [xi, yi] = instances.city(instance, i);
            for j in (i + 1)..c {
                let [xj, yj] = instances.city(instance, j);
                let d = (xi - xj).hypot(yi - yj);
                values[base + i * c + j] = d;
                values[base + j * c + i] = d;
            }
        }
    }

    DistanceBatch::from_flat(values, b, c).expect("buffer length matches instance shape")
}
