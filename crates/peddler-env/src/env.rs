//! The batched TSP environment state machine.

use peddler_core::{GenerateError, InstanceBatch, SolutionBatch, StepError};
use peddler_ops::{tour_length, InstanceParams};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::EnvConfig;

/// Result of one batched [`TspEnv::step`] call.
///
/// All vectors have one entry per instance, in batch order.
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome {
    /// Closed-tour length for instances that completed on this step,
    /// 0.0 for every other instance. Reward is purely terminal; no
    /// per-step shaping is applied.
    pub rewards: Vec<f32>,
    /// Whether each instance's tour is now complete.
    pub done: Vec<bool>,
    /// Always all-false: the environment never truncates episodes on
    /// its own. Time limits are an external collaborator's concern.
    pub truncated: Vec<bool>,
}

/// Borrowed view of the environment's observable state: the current
/// instance batch and the partial tours.
#[derive(Clone, Copy, Debug)]
pub struct Observation<'a> {
    /// City coordinates for every instance.
    pub instances: &'a InstanceBatch,
    /// Partial tours, sentinel-filled past each instance's progress.
    pub solutions: &'a SolutionBatch,
}

/// A batch of B independent TSP episodes over C cities each.
///
/// Each instance's episode moves Fresh (no cities chosen) through
/// InProgress to Complete (all C slots filled); completed instances
/// reject further steps until the whole batch is [`reset`]. B and C
/// are inferred at construction and fixed thereafter.
///
/// The environment exclusively owns a seeded [`ChaCha8Rng`]; generation
/// on reset draws from it in a fixed order, so a given seed and call
/// sequence reproduces identical batches, tours, and rewards.
///
/// [`reset`]: TspEnv::reset
#[derive(Clone, Debug)]
pub struct TspEnv {
    params: InstanceParams,
    instances: InstanceBatch,
    solutions: SolutionBatch,
    rng: ChaCha8Rng,
}

impl TspEnv {
    /// Create an environment from a config, generating the initial
    /// instance batch from the seeded random source.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the config's shape or bounds are
    /// invalid. Nothing is sampled on failure.
    pub fn new(config: EnvConfig) -> Result<Self, GenerateError> {
        let params = config.instance_params()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let instances = params.sample(&mut rng);
        let solutions = SolutionBatch::empty(params.n_instances(), params.n_cities())
            .expect("shape validated by InstanceParams");
        Ok(Self {
            params,
            instances,
            solutions,
            rng,
        })
    }

    /// Create an environment around a caller-supplied initial batch.
    ///
    /// B and C are inferred from the batch. Later [`reset`] calls
    /// regenerate coordinates on the unit square; use [`TspEnv::new`]
    /// with an [`EnvConfig`] for custom bounds.
    ///
    /// [`reset`]: TspEnv::reset
    pub fn from_instances(instances: InstanceBatch, seed: u64) -> Self {
        let params = InstanceParams::new(
            instances.n_instances(),
            instances.n_cities(),
            (0.0, 1.0),
            (0.0, 1.0),
        )
        .expect("batch shape upholds generation preconditions");
        let solutions = SolutionBatch::empty(instances.n_instances(), instances.n_cities())
            .expect("batch shape upholds generation preconditions");
        Self {
            params,
            instances,
            solutions,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Number of instances in the batch (B).
    pub fn n_instances(&self) -> usize {
        self.instances.n_instances()
    }

    /// Number of cities per instance (C).
    pub fn n_cities(&self) -> usize {
        self.instances.n_cities()
    }

    /// The current instance batch.
    pub fn instances(&self) -> &InstanceBatch {
        &self.instances
    }

    /// The current partial tours.
    pub fn solutions(&self) -> &SolutionBatch {
        &self.solutions
    }

    /// Borrowed view of the observable state (instances + tours).
    pub fn observation(&self) -> Observation<'_> {
        Observation {
            instances: &self.instances,
            solutions: &self.solutions,
        }
    }

    /// Number of cities assigned so far for one instance.
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn steps_taken(&self, instance: usize) -> usize {
        self.solutions.filled(instance)
    }

    /// Whether one instance's tour is complete.
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn is_complete(&self, instance: usize) -> bool {
        self.solutions.is_complete(instance)
    }

    /// Whether every instance in the batch is complete.
    pub fn all_complete(&self) -> bool {
        (0..self.n_instances()).all(|b| self.solutions.is_complete(b))
    }

    /// Exclusive access to the environment's random source.
    ///
    /// Lets callers thread the owned RNG into stateless kernels (e.g.
    /// `peddler_ops::sample_edges`) without breaking the reproducibility
    /// contract: there is exactly one random stream per environment, and
    /// every consumer advances it in call order.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Regenerate the instance batch and return every instance to the
    /// fresh state (all slots sentinel, counters zero).
    ///
    /// Generation parameters were validated at construction, so reset
    /// cannot fail. The owned RNG advances, so consecutive resets
    /// produce different batches.
    pub fn reset(&mut self) {
        self.instances = self.params.sample(&mut self.rng);
        self.solutions.clear();
    }

    /// Assign one chosen city per instance and advance every episode.
    ///
    /// The whole batch is validated before anything mutates: if any
    /// instance is already complete, any action repeats a visited city,
    /// or the action batch is malformed, the call fails atomically and
    /// the environment is left exactly as it was.
    ///
    /// Instances whose tour completes on this step are scored with
    /// their closed-tour length; every other reward is 0.0. The updated
    /// state is readable through [`observation`](Self::observation).
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] naming the first offending instance.
    pub fn step(&mut self, chosen: &[usize]) -> Result<StepOutcome, StepError> {
        let b = self.n_instances();
        let c = self.n_cities();

        if chosen.len() != b {
            return Err(StepError::ActionCountMismatch {
                expected: b,
                got: chosen.len(),
            });
        }

        // Pre-flight pass: every violation is detected before any slot
        // is written, keeping the batched call atomic.
        for (instance, &city) in chosen.iter().enumerate() {
            if city >= c {
                return Err(StepError::CityOutOfRange { instance, city });
            }
            if self.solutions.is_complete(instance) {
                return Err(StepError::EpisodeComplete { instance });
            }
            if self.solutions.contains(instance, city) {
                return Err(StepError::DuplicateCity { instance, city });
            }
        }

        // Apply pass.
        for (instance, &city) in chosen.iter().enumerate() {
            self.solutions.push(instance, city);
        }

        let mut rewards = vec![0.0f32; b];
        let mut done = vec![false; b];
        for instance in 0..b {
            if self.solutions.is_complete(instance) {
                done[instance] = true;
                rewards[instance] = tour_length(
                    self.instances.instance(instance),
                    self.solutions.route(instance),
                );
            }
        }

        Ok(StepOutcome {
            rewards,
            done,
            truncated: vec![false; b],
        })
    }
}
