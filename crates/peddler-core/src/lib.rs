//! Core data types and errors for the Peddler TSP environment.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the batch-shaped containers shared by the kernels and the
//! environment — [`InstanceBatch`], [`DistanceBatch`], [`AdjacencyBatch`],
//! [`SolutionBatch`] — plus the error enums for every subsystem.
//!
//! All containers are flat buffers with manual shape arithmetic: a batch
//! of B independent problems over C cities is one contiguous allocation,
//! and per-instance views are plain slices. Instances never interact.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod batch;
mod error;
mod solution;

pub use batch::{AdjacencyBatch, DistanceBatch, InstanceBatch};
pub use error::{Axis, GenerateError, SampleError, ShapeError, StepError};
pub use solution::{SolutionBatch, NO_CITY};
