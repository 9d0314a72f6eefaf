//! Environment configuration.

use peddler_core::GenerateError;
use peddler_ops::InstanceParams;

/// Construction input for [`TspEnv`](crate::TspEnv).
///
/// Replaces the source framework's dynamic space declarations and device
/// string with a plain struct: batch size, city count, per-axis
/// coordinate bounds, and the seed of the environment's random source.
/// Shape parameters are fixed for the life of the environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvConfig {
    /// Number of independent instances in the batch (B). Must be >= 1.
    pub n_instances: usize,
    /// Number of cities per instance (C). Must be >= 2.
    pub n_cities: usize,
    /// Coordinate bounds `(lo, hi)` on the x axis. Default `(0, 1)`.
    pub x_lim: (f32, f32),
    /// Coordinate bounds `(lo, hi)` on the y axis. Default `(0, 1)`.
    pub y_lim: (f32, f32),
    /// Seed for the environment's deterministic random source.
    pub seed: u64,
}

impl EnvConfig {
    /// Unit-square configuration with the given shape and seed.
    pub fn new(n_instances: usize, n_cities: usize, seed: u64) -> Self {
        Self {
            n_instances,
            n_cities,
            x_lim: (0.0, 1.0),
            y_lim: (0.0, 1.0),
            seed,
        }
    }

    /// Check structural invariants without constructing an environment.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] for a zero batch size, a city count
    /// below 2, or inverted bounds on either axis.
    pub fn validate(&self) -> Result<(), GenerateError> {
        self.instance_params().map(|_| ())
    }

    /// The validated generation parameters implied by this config.
    pub(crate) fn instance_params(&self) -> Result<InstanceParams, GenerateError> {
        InstanceParams::new(self.n_instances, self.n_cities, self.x_lim, self.y_lim)
    }
}
