//! Error types for the Peddler TSP environment.
//!
//! One enum per subsystem: batch construction ([`ShapeError`]), instance
//! generation ([`GenerateError`]), edge sampling ([`SampleError`]), and
//! the environment step protocol ([`StepError`]).
//!
//! Every error is raised before any state mutation. There are no
//! transient or retryable conditions — the domain is deterministic
//! numeric computation with no I/O.

use std::error::Error;
use std::fmt;

/// Coordinate axis, used to report which bound pair was inverted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Errors from constructing a batch container out of a flat buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// The flat buffer length does not match the declared shape.
    LengthMismatch {
        /// Element count implied by the declared shape.
        expected: usize,
        /// Element count actually supplied.
        got: usize,
    },
    /// The declared batch dimension is zero.
    EmptyBatch,
    /// The declared city count is too small for a tour.
    TooFewCities {
        /// The declared city count.
        configured: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "buffer has {got} elements, shape requires {expected}")
            }
            Self::EmptyBatch => write!(f, "batch must contain at least one instance"),
            Self::TooFewCities { configured } => {
                write!(f, "need at least 2 cities for a tour, got {configured}")
            }
        }
    }
}

impl Error for ShapeError {}

/// Errors from instance generation parameters.
///
/// All variants are detected before the random source is touched, so a
/// failed call never advances the RNG.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateError {
    /// `n_instances` is zero.
    EmptyBatch,
    /// `n_cities` is below the minimum of 2.
    TooFewCities {
        /// The requested city count.
        configured: usize,
    },
    /// A bounding interval has `lo > hi`.
    InvertedBounds {
        /// Which axis the interval belongs to.
        axis: Axis,
        /// Lower bound as supplied.
        lo: f32,
        /// Upper bound as supplied.
        hi: f32,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBatch => write!(f, "n_instances must be at least 1"),
            Self::TooFewCities { configured } => {
                write!(f, "n_cities must be at least 2, got {configured}")
            }
            Self::InvertedBounds { axis, lo, hi } => {
                write!(f, "{axis} bounds inverted: lo {lo} > hi {hi}")
            }
        }
    }
}

impl Error for GenerateError {}

/// Errors from edge-sampling parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum SampleError {
    /// The exponential scale parameter is zero, negative, or NaN.
    NonPositiveLambda {
        /// The offending value.
        value: f32,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLambda { value } => {
                write!(f, "lambda must be finite and > 0, got {value}")
            }
        }
    }
}

impl Error for SampleError {}

/// Protocol violations from `TspEnv::step`.
///
/// A step call is atomic for the whole batch: every variant is detected
/// during a pre-flight pass over all instances, before any slot is
/// written or any counter advanced. There is no partial-batch
/// success/failure split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The action batch length does not match the instance batch.
    ActionCountMismatch {
        /// Number of instances in the environment.
        expected: usize,
        /// Number of actions supplied.
        got: usize,
    },
    /// A chosen city index is outside `[0, n_cities)`.
    CityOutOfRange {
        /// Index of the offending instance.
        instance: usize,
        /// The out-of-range city index.
        city: usize,
    },
    /// An instance already has a complete tour; it cannot be stepped
    /// again until the whole batch is reset.
    EpisodeComplete {
        /// Index of the offending instance.
        instance: usize,
    },
    /// The chosen city already occupies a filled slot of the instance's
    /// partial tour.
    DuplicateCity {
        /// Index of the offending instance.
        instance: usize,
        /// The city that was chosen twice.
        city: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ActionCountMismatch { expected, got } => {
                write!(f, "got {got} actions for {expected} instances")
            }
            Self::CityOutOfRange { instance, city } => {
                write!(f, "instance {instance}: city index {city} out of range")
            }
            Self::EpisodeComplete { instance } => {
                write!(f, "instance {instance}: tour already complete, reset required")
            }
            Self::DuplicateCity { instance, city } => {
                write!(f, "instance {instance}: city {city} already visited")
            }
        }
    }
}

impl Error for StepError {}
