//! Partial tour storage with sentinel slots.

use crate::error::ShapeError;

/// Sentinel for an unfilled route slot.
///
/// `usize::MAX` can never collide with a real city index (city counts
/// are bounded by the batch shape), so a route slot holding `NO_CITY`
/// unambiguously means "not yet chosen".
pub const NO_CITY: usize = usize::MAX;

/// A batch of per-instance partial tours.
///
/// Each instance owns C route slots filled left to right; unfilled
/// slots hold [`NO_CITY`]. A per-instance filled-count tracks episode
/// progress: the count equals the number of non-sentinel slots, never
/// decreases within an episode, and the tour is complete exactly when
/// it reaches C.
///
/// `push` performs no duplicate or range validation — the environment
/// pre-validates the entire action batch before applying any write, so
/// validation here would run twice per step. Callers outside the
/// environment must uphold the no-duplicate invariant themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionBatch {
    slots: Vec<usize>,
    filled: Vec<usize>,
    n_instances: usize,
    n_cities: usize,
}

impl SolutionBatch {
    /// Create a batch of empty tours (all slots sentinel, counters zero).
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] on an empty batch or a city count below 2.
    pub fn empty(n_instances: usize, n_cities: usize) -> Result<Self, ShapeError> {
        if n_instances == 0 {
            return Err(ShapeError::EmptyBatch);
        }
        if n_cities < 2 {
            return Err(ShapeError::TooFewCities {
                configured: n_cities,
            });
        }
        Ok(Self {
            slots: vec![NO_CITY; n_instances * n_cities],
            filled: vec![0; n_instances],
            n_instances,
            n_cities,
        })
    }

    /// Number of instances in the batch (B).
    pub fn n_instances(&self) -> usize {
        self.n_instances
    }

    /// Number of route slots per instance (C).
    pub fn n_cities(&self) -> usize {
        self.n_cities
    }

    /// The full route of one instance, including sentinel slots.
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn route(&self, instance: usize) -> &[usize] {
        assert!(instance < self.n_instances, "instance index out of range");
        &self.slots[instance * self.n_cities..(instance + 1) * self.n_cities]
    }

    /// The visited prefix of one instance's route (no sentinels).
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn visited(&self, instance: usize) -> &[usize] {
        let n = self.filled[instance];
        &self.route(instance)[..n]
    }

    /// Number of cities assigned so far for one instance.
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn filled(&self, instance: usize) -> usize {
        self.filled[instance]
    }

    /// Whether one instance's tour is complete (all C slots filled).
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn is_complete(&self, instance: usize) -> bool {
        self.filled[instance] == self.n_cities
    }

    /// Whether `city` already occupies a filled slot of one instance.
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn contains(&self, instance: usize, city: usize) -> bool {
        self.visited(instance).contains(&city)
    }

    /// Write `city` into the next free slot of one instance and advance
    /// its counter. See the type-level note: no duplicate or range
    /// checks are performed here.
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range or the tour is already
    /// complete.
    pub fn push(&mut self, instance: usize, city: usize) {
        let n = self.filled[instance];
        assert!(n < self.n_cities, "tour already complete");
        self.slots[instance * self.n_cities + n] = city;
        self.filled[instance] = n + 1;
    }

    /// Reset every tour to empty: all slots sentinel, counters zero.
    pub fn clear(&mut self) {
        self.slots.fill(NO_CITY);
        self.filled.fill(0);
    }
}
