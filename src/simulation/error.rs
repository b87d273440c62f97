//! Error types for the simulation engine.

use thiserror::Error;

/// Convenience alias for results produced by the engine.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Configuration problems detected at world creation or reset.
///
/// Invalid configuration always fails fast; values are never silently
/// clamped into range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The initial population must contain at least one creature.
    #[error("initial population must be positive")]
    NonPositivePopulation,

    /// World bounds must enclose a non-empty area.
    #[error("world bounds must be positive, got {width}x{height}")]
    InvalidBounds {
        /// Configured world width.
        width: f64,
        /// Configured world height.
        height: f64,
    },

    /// The mutation rate is a probability and must lie in [0, 1].
    #[error("mutation rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    /// Season length divided by season rate must be at least one tick.
    #[error("season length {length} / season rate {rate} must be >= 1 tick")]
    InvalidSeasonCycle {
        /// Configured season length.
        length: u64,
        /// Configured season change rate.
        rate: u64,
    },

    /// Creatures must start with energy to spend.
    #[error("initial energy must be positive, got {0}")]
    NonPositiveEnergy(f64),

    /// The food spawn step must run at some interval.
    #[error("food spawn interval must be positive")]
    ZeroFoodSpawnInterval,

    /// Spawned food must be worth eating.
    #[error("food energy must be positive, got {0}")]
    NonPositiveFoodEnergy(f64),
}

/// Top-level engine error.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Rejected configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Spatial index construction failed; the tick left the world unchanged.
    #[error("spatial index error: {0:?}")]
    Spatial(kdtree::ErrorKind),

    /// Filesystem failure while saving or loading a world.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// World state failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<kdtree::ErrorKind> for SimulationError {
    fn from(err: kdtree::ErrorKind) -> Self {
        SimulationError::Spatial(err)
    }
}
