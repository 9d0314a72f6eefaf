//! Distance-weighted sparse edge sampling.
//!
//! Builds a per-instance candidate graph in which the likelihood of an
//! edge decays exponentially with distance: nearby city pairs are
//! "local" moves, distant pairs are rarely connected. Every city is
//! guaranteed an edge to its globally nearest neighbour regardless of
//! the random draws, so no row of the adjacency matrix is empty.

use peddler_core::{AdjacencyBatch, DistanceBatch, SampleError};
use rand::Rng;

/// Sample a sparse candidate graph from a batch of distance matrices.
///
/// For every ordered pair `(i, j)` with `i != j` the edge probability is
/// `p = (1/lambda) * exp(-d(i, j) / lambda)` and the edge is set iff a
/// fresh uniform draw is at most `p` (probabilities above 1 make the
/// edge certain). The two directions of a pair are drawn independently
/// and are **not** symmetrized, so the resulting relation is directed.
/// Afterwards each city's edge to its nearest other city (arg-min, first
/// index among ties) is force-set, guaranteeing out-degree >= 1.
///
/// The diagonal is never drawn and stays zero.
///
/// # Errors
///
/// Returns [`SampleError::NonPositiveLambda`] for a zero, negative, or
/// non-finite `lambda`, before touching `rng`.
pub fn sample_edges<R: Rng>(
    distances: &DistanceBatch,
    lambda: f32,
    rng: &mut R,
) -> Result<AdjacencyBatch, SampleError> {
    if !(lambda > 0.0) || !lambda.is_finite() {
        return Err(SampleError::NonPositiveLambda { value: lambda });
    }

    let b = distances.n_instances();
    let c = distances.n_cities();
    let mut adjacency =
        AdjacencyBatch::zeroed(b, c).expect("distance batch shape is already validated");

    for instance in 0..b {
        for i in 0..c {
            let row = distances.row(instance, i);
            for (j, &d) in row.iter().enumerate() {
                if i == j {
                    continue;
                }
                let p = (1.0 / lambda) * (-d / lambda).exp();
                if rng.gen::<f32>() <= p {
                    adjacency.set_edge(instance, i, j);
                }
            }
        }

        // Nearest-neighbour guarantee: force the arg-min edge per row,
        // first index winning ties.
        for i in 0..c {
            let row = distances.row(instance, i);
            let mut nearest = usize::MAX;
            let mut best = f32::INFINITY;
            for (j, &d) in row.iter().enumerate() {
                if j != i && d < best {
                    best = d;
                    nearest = j;
                }
            }
            adjacency.set_edge(instance, i, nearest);
        }
    }

    Ok(adjacency)
}
