//! Benchmark profiles for the Peddler TSP environment.
//!
//! Provides pre-built batch shapes shared by the criterion benches:
//!
//! - [`reference_profile`]: 32 instances × 100 cities
//! - [`stress_profile`]: 64 instances × 500 cities

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use peddler_env::EnvConfig;

/// Reference benchmark shape: 32 instances of 100 cities.
pub fn reference_profile(seed: u64) -> EnvConfig {
    EnvConfig::new(32, 100, seed)
}

/// Stress benchmark shape: 64 instances of 500 cities.
pub fn stress_profile(seed: u64) -> EnvConfig {
    EnvConfig::new(64, 500, seed)
}
