//! Peddler quickstart — a complete, minimal rollout from scratch.
//!
//! Demonstrates:
//!   1. Building a `TspEnv` from an `EnvConfig`
//!   2. Deriving a sparse candidate graph with `sample_edges`
//!   3. Stepping a greedy candidate-following policy to completion
//!   4. Reading terminal rewards and resetting for the next episode
//!
//! Run with:
//!   cargo run --example quickstart

use peddler_core::AdjacencyBatch;
use peddler_env::{EnvConfig, TspEnv};
use peddler_ops::{compute_distances, sample_edges};

const N_INSTANCES: usize = 4;
const N_CITIES: usize = 12;
const SEED: u64 = 42;
const LAMBDA: f32 = 0.3;

/// Pick the next city for one instance: the first unvisited candidate
/// neighbour of the current city, falling back to the first unvisited
/// city when every neighbour is already on the tour.
fn next_city(env: &TspEnv, graph: &AdjacencyBatch, instance: usize) -> usize {
    let visited = env.solutions().visited(instance);
    let unvisited = |city: &usize| !visited.contains(city);

    if let Some(&current) = visited.last() {
        let candidate = (0..env.n_cities())
            .filter(|&j| graph.is_edge(instance, current, j))
            .find(unvisited);
        if let Some(city) = candidate {
            return city;
        }
    }

    (0..env.n_cities())
        .find(unvisited)
        .expect("called only while the tour is incomplete")
}

fn main() {
    let config = EnvConfig::new(N_INSTANCES, N_CITIES, SEED);
    let mut env = TspEnv::new(config).expect("static config is valid");

    for episode in 0..3 {
        // Candidate-move graph for the current batch, drawn from the
        // environment's own random source.
        let distances = compute_distances(env.instances());
        let graph = sample_edges(&distances, LAMBDA, env.rng_mut())
            .expect("static lambda is positive");

        let mut rewards = vec![0.0f32; N_INSTANCES];
        while !env.all_complete() {
            let actions: Vec<usize> = (0..N_INSTANCES)
                .map(|b| next_city(&env, &graph, b))
                .collect();
            let out = env.step(&actions).expect("policy only picks legal moves");
            for (b, r) in out.rewards.iter().enumerate() {
                if out.done[b] {
                    rewards[b] = *r;
                }
            }
        }

        println!("episode {episode}: tour lengths {rewards:?}");
        env.reset();
    }
}
