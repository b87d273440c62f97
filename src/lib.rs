//! # Microevo - Creature Population Simulation
//!
//! A deterministic, single-threaded simulation of simple creature agents on
//! a bounded 2D plane. Creatures forage for food, wander, avoid crowding,
//! interact socially, mate with trait inheritance and mutation, and are
//! classified into social classes each tick. Seasons cycle on a configurable
//! schedule and externally triggered disasters reshape the population.
//!
//! ## Features
//!
//! - Per-tick movement with food seeking and bounded random wandering
//! - Trait inheritance (speed, size, sense, lifespan) with probabilistic mutation
//! - Mutual mate bonds with exactly one offspring per pairing
//! - Social classification and government affiliation from current traits
//! - Seasons, ambient food level, and five disaster kinds
//! - Fully seedable randomness: a fixed seed reproduces an identical run
//! - Immutable per-tick snapshots for rendering and statistics layers
//!
//! ## Core Modules
//!
//! - [`simulation::world`] - World state, the tick loop, and disasters
//! - [`simulation::creature`] - Creature state and lifecycle
//! - [`simulation::snapshot`] - Read-only views for external consumers
//! - [`simulation::events`] - Deferred cross-creature effects

/// Core simulation logic and data structures.
pub mod simulation {
    /// Creature state and lifecycle.
    pub mod creature;
    /// Disaster kinds and effect constants.
    pub mod disaster;
    /// Error types and the crate result alias.
    pub mod error;
    /// Deferred cross-creature effects, applied serially after each pass.
    pub mod events;
    /// Food items that creatures consume.
    pub mod food;
    /// Trait inheritance with probabilistic mutation.
    pub mod genetics;
    /// Per-creature memory of notable encounters.
    pub mod memory;
    /// Simulation parameters and validation.
    pub mod params;
    /// Immutable snapshots of world state.
    pub mod snapshot;
    /// Social classification and governance.
    pub mod social;
    /// KD-tree spatial index with deterministic query ordering.
    pub mod spatial;
    /// World state and the tick loop.
    pub mod world;
}
