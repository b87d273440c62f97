//! Food items that creatures consume for energy.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A food item sitting somewhere in the world.
///
/// Consumption transfers the item's energy to the eating creature and
/// depletes the item; depleted items are removed at the end of the tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Position in 2D space.
    pub pos: [f64; 2],
    /// Energy value remaining; zero once consumed.
    pub energy: f64,
}

impl Food {
    /// Creates a food item at a uniformly random position within the bounds.
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64, energy: f64) -> Self {
        Self {
            pos: [
                rng.random::<f64>() * width,
                rng.random::<f64>() * height,
            ],
            energy,
        }
    }

    /// Whether this item has already been eaten.
    pub fn is_consumed(&self) -> bool {
        self.energy <= 0.0
    }

    /// Marks this item as eaten.
    pub fn consume(&mut self) {
        self.energy = 0.0;
    }
}
