//! Uniform random instance generation.
//!
//! [`InstanceParams`] validates the requested shape and bounds once;
//! [`InstanceParams::sample`] is then infallible and safe to call on a
//! hot path (the environment's `reset`). The free functions are
//! one-shot conveniences that validate on every call.
//!
//! Determinism contract: `sample` advances the supplied RNG by exactly
//! `2 * n_instances * n_cities` uniform `f32` draws — the x block first,
//! then the y block — so a failed parameter validation never moves the
//! random source at all.

use peddler_core::{Axis, GenerateError, InstanceBatch};
use rand::Rng;

/// Validated parameters for instance generation.
///
/// Construction checks every precondition, so the parameters can be
/// stored and re-sampled indefinitely without re-validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceParams {
    n_instances: usize,
    n_cities: usize,
    x_lim: (f32, f32),
    y_lim: (f32, f32),
}

impl InstanceParams {
    /// Validate generation parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if `n_instances == 0`, `n_cities < 2`,
    /// or either bound pair has `lo > hi` (NaN bounds are treated as
    /// inverted).
    pub fn new(
        n_instances: usize,
        n_cities: usize,
        x_lim: (f32, f32),
        y_lim: (f32, f32),
    ) -> Result<Self, GenerateError> {
        if n_instances == 0 {
            return Err(GenerateError::EmptyBatch);
        }
        if n_cities < 2 {
            return Err(GenerateError::TooFewCities {
                configured: n_cities,
            });
        }
        // `!(lo <= hi)` also catches NaN on either side.
        if !(x_lim.0 <= x_lim.1) {
            return Err(GenerateError::InvertedBounds {
                axis: Axis::X,
                lo: x_lim.0,
                hi: x_lim.1,
            });
        }
        if !(y_lim.0 <= y_lim.1) {
            return Err(GenerateError::InvertedBounds {
                axis: Axis::Y,
                lo: y_lim.0,
                hi: y_lim.1,
            });
        }
        Ok(Self {
            n_instances,
            n_cities,
            x_lim,
            y_lim,
        })
    }

    /// Number of instances per sampled batch (B).
    pub fn n_instances(&self) -> usize {
        self.n_instances
    }

    /// Number of cities per instance (C).
    pub fn n_cities(&self) -> usize {
        self.n_cities
    }

    /// Per-axis x bounds `(lo, hi)`.
    pub fn x_lim(&self) -> (f32, f32) {
        self.x_lim
    }

    /// Per-axis y bounds `(lo, hi)`.
    pub fn y_lim(&self) -> (f32, f32) {
        self.y_lim
    }

    /// Draw a fresh instance batch from `rng`.
    ///
    /// Each coordinate is drawn uniformly in `[0, 1)` and affinely
    /// rescaled into the configured bounds. All x coordinates are drawn
    /// before all y coordinates, batch-major, so the RNG advances by
    /// exactly `2 * B * C` draws in a fixed order.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> InstanceBatch {
        let n = self.n_instances * self.n_cities;

        let xs: Vec<f32> = (0..n)
            .map(|_| self.x_lim.0 + rng.gen::<f32>() * (self.x_lim.1 - self.x_lim.0))
            .collect();
        let ys: Vec<f32> = (0..n)
            .map(|_| self.y_lim.0 + rng.gen::<f32>() * (self.y_lim.1 - self.y_lim.0))
            .collect();

        let mut coords = Vec::with_capacity(n * 2);
        for (x, y) in xs.into_iter().zip(ys) {
            coords.push(x);
            coords.push(y);
        }

        InstanceBatch::from_flat(coords, self.n_instances, self.n_cities)
            .expect("buffer length matches validated shape")
    }
}

/// Generate a batch of instances on the unit square.
///
/// # Errors
///
/// Returns [`GenerateError`] for a zero instance count or a city count
/// below 2, before touching `rng`.
pub fn random_instances<R: Rng>(
    n_instances: usize,
    n_cities: usize,
    rng: &mut R,
) -> Result<InstanceBatch, GenerateError> {
    random_instances_within(n_instances, n_cities, rng, (0.0, 1.0), (0.0, 1.0))
}

/// Generate a batch of instances within explicit per-axis bounds.
///
/// # Errors
///
/// Returns [`GenerateError`] for a zero instance count, a city count
/// below 2, or inverted bounds — all before touching `rng`.
pub fn random_instances_within<R: Rng>(
    n_instances: usize,
    n_cities: usize,
    rng: &mut R,
    x_lim: (f32, f32),
    y_lim: (f32, f32),
) -> Result<InstanceBatch, GenerateError> {
    Ok(InstanceParams::new(n_instances, n_cities, x_lim, y_lim)?.sample(rng))
}
