//! Batched, steppable TSP decision-process environment.
//!
//! [`TspEnv`] holds a batch of B independent TSP instances over C cities
//! and incrementally constructs one tour per instance: each [`step`]
//! call assigns one unvisited city per instance, and a completing
//! instance is scored with its closed-tour length. [`reset`] regenerates
//! the instance batch from the environment's owned, seeded RNG and
//! returns every instance to the fresh state.
//!
//! Episodes per instance move Fresh → InProgress → Complete; there is no
//! automatic transition back to Fresh and no per-instance reset — the
//! whole batch resets together. Step calls are atomic: every action is
//! validated against the episode invariants before any state mutates.
//!
//! [`step`]: TspEnv::step
//! [`reset`]: TspEnv::reset

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod env;

pub use config::EnvConfig;
pub use env::{Observation, StepOutcome, TspEnv};
