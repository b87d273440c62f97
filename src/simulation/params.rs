use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Simulation parameters supplied at world creation.
///
/// Runtime-tunable fields (mutation rate, season length, season rate) are
/// adjusted through setters on [`super::world::World`] so changes are
/// re-validated and stay decoupled from the tick itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Number of creatures spawned at initialization.
    pub initial_population: usize,
    /// Starting energy of every creature, including offspring.
    pub initial_energy: f64,
    /// Starting ambient food level.
    pub initial_food_level: f64,
    /// Length of a full season cycle in ticks.
    pub season_length: u64,
    /// Season change rate; seasons advance every `season_length / season_rate` ticks.
    pub season_rate: u64,
    /// Probability that an inherited trait mutates.
    pub mutation_rate: f64,
    /// Simulation area width.
    pub world_width: f64,
    /// Simulation area height.
    pub world_height: f64,
    /// Seed for the world's random number generator.
    pub seed: u64,
    /// Ticks between food spawn steps.
    pub food_spawn_interval: u64,
    /// Food items spawned per spawn step.
    pub food_per_spawn: usize,
    /// Energy value of each spawned food item.
    pub food_energy: f64,
    /// Maximum food item count (hard cap).
    pub max_food: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            initial_population: 30,
            initial_energy: 100.0,
            initial_food_level: 200.0,
            season_length: 1200,
            season_rate: 5,
            mutation_rate: 0.05,
            world_width: 800.0,
            world_height: 600.0,
            seed: 0,
            food_spawn_interval: 10,
            food_per_spawn: 3,
            food_energy: 20.0,
            max_food: 200,
        }
    }
}

impl Params {
    /// Checks every field, failing fast on the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_population == 0 {
            return Err(ConfigError::NonPositivePopulation);
        }
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(ConfigError::InvalidBounds {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRateOutOfRange(self.mutation_rate));
        }
        self.validate_season_cycle()?;
        if self.initial_energy <= 0.0 {
            return Err(ConfigError::NonPositiveEnergy(self.initial_energy));
        }
        if self.food_spawn_interval == 0 {
            return Err(ConfigError::ZeroFoodSpawnInterval);
        }
        if self.food_energy <= 0.0 {
            return Err(ConfigError::NonPositiveFoodEnergy(self.food_energy));
        }
        Ok(())
    }

    /// Ticks between season changes: `season_length / season_rate`, floored.
    ///
    /// Only meaningful after [`Params::validate`] has accepted the cycle,
    /// which guarantees a nonzero rate.
    pub fn season_interval(&self) -> u64 {
        debug_assert!(self.season_rate > 0);
        self.season_length / self.season_rate
    }

    fn validate_season_cycle(&self) -> Result<(), ConfigError> {
        if self.season_rate == 0 || self.season_length / self.season_rate == 0 {
            return Err(ConfigError::InvalidSeasonCycle {
                length: self.season_length,
                rate: self.season_rate,
            });
        }
        Ok(())
    }
}
