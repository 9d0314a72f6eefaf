//! Stateless vectorized kernels for the Peddler TSP environment.
//!
//! Four operations over [`peddler_core`] batch containers:
//!
//! - [`generate`]: uniform random instance batches within configurable
//!   per-axis bounds
//! - [`distance`]: full pairwise Euclidean distance matrices
//! - [`evaluate`]: closed-tour lengths for complete permutations
//! - [`sample`]: sparse distance-weighted candidate graphs
//!
//! Every kernel is deterministic given its inputs; the stochastic ones
//! take the random source by `&mut` and never retain it. Batched
//! operations never mix data across instances.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod distance;
pub mod evaluate;
pub mod generate;
pub mod sample;

pub use distance::compute_distances;
pub use evaluate::{evaluate_solutions, tour_length};
pub use generate::{random_instances, random_instances_within, InstanceParams};
pub use sample::sample_edges;
