//! Peddler: a batched, steppable TSP decision process.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Peddler sub-crates. For most users, adding `peddler` as a
//! single dependency is sufficient.
//!
//! Peddler is not a TSP solver. It generates random problem instances,
//! enforces valid move sequences while an agent builds one tour per
//! instance, scores completed closed tours, and derives sparse
//! candidate-move graphs — the pieces an iterative (e.g. RL-style)
//! training loop needs around its own policy.
//!
//! # Quick start
//!
//! ```rust
//! use peddler::prelude::*;
//!
//! // One instance whose four cities form the unit square.
//! let coords = vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
//! let instances = InstanceBatch::from_flat(coords, 1, 4).unwrap();
//! let mut env = TspEnv::from_instances(instances, 42);
//!
//! // Walk the perimeter: terminal reward is the closed-tour length.
//! for city in [0, 1, 2] {
//!     let out = env.step(&[city]).unwrap();
//!     assert_eq!(out.rewards, vec![0.0]);
//!     assert_eq!(out.done, vec![false]);
//! }
//! let out = env.step(&[3]).unwrap();
//! assert_eq!(out.done, vec![true]);
//! assert_eq!(out.rewards, vec![4.0]);
//!
//! // A repeated city is a protocol violation, not a bad score.
//! env.reset();
//! env.step(&[2]).unwrap();
//! assert!(env.step(&[2]).is_err());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `peddler-core` | Batch containers, sentinel, error enums |
//! | [`ops`] | `peddler-ops` | Generation, distances, evaluation, edge sampling |
//! | [`env`] | `peddler-env` | The stateful environment and its config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Batch containers and error enums (`peddler-core`).
///
/// [`types::InstanceBatch`], [`types::DistanceBatch`],
/// [`types::AdjacencyBatch`], [`types::SolutionBatch`], the
/// [`types::NO_CITY`] sentinel, and the per-subsystem error types.
pub use peddler_core as types;

/// Stateless vectorized kernels (`peddler-ops`).
///
/// Instance generation ([`ops::random_instances`],
/// [`ops::InstanceParams`]), pairwise distances
/// ([`ops::compute_distances`]), closed-tour evaluation
/// ([`ops::evaluate_solutions`]), and sparse candidate-graph sampling
/// ([`ops::sample_edges`]).
pub use peddler_ops as ops;

/// The stateful environment (`peddler-env`).
///
/// [`env::TspEnv`] with `reset`/`step`/`observation`, configured by
/// [`env::EnvConfig`].
pub use peddler_env as env;

/// Common imports for typical Peddler usage.
///
/// ```rust
/// use peddler::prelude::*;
/// ```
pub mod prelude {
    // Containers and sentinel
    pub use peddler_core::{
        AdjacencyBatch, DistanceBatch, InstanceBatch, SolutionBatch, NO_CITY,
    };

    // Errors
    pub use peddler_core::{GenerateError, SampleError, ShapeError, StepError};

    // Kernels
    pub use peddler_ops::{
        compute_distances, evaluate_solutions, random_instances, random_instances_within,
        sample_edges, tour_length, InstanceParams,
    };

    // Environment
    pub use peddler_env::{EnvConfig, Observation, StepOutcome, TspEnv};
}
