//! Disaster kinds and their effect constants.
//!
//! Disasters are applied immediately when triggered, outside the tick, by
//! [`super::world::World::trigger_disaster`].

use serde::{Deserialize, Serialize};

/// Creatures smaller than this lose lifespan in a fire.
pub const FIRE_SIZE_THRESHOLD: f64 = 7.0;
/// Lifespan lost by small creatures in a fire.
pub const FIRE_LIFESPAN_LOSS: f64 = 300.0;
/// Maximum positional jitter per axis during a quake.
pub const QUAKE_JITTER: f64 = 15.0;
/// Creatures slower than this drown in a flood.
pub const FLOOD_SPEED_THRESHOLD: f64 = 3.0;
/// Ambient food level lost to a drought.
pub const DROUGHT_FOOD_LOSS: f64 = 50.0;
/// Probability that any one creature dies of plague.
pub const PLAGUE_DEATH_PROBABILITY: f64 = 0.2;

/// Kinds of population-wide disasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disaster {
    /// Small creatures lose lifespan.
    Fire,
    /// Every position is jittered.
    Quake,
    /// Slow creatures die.
    Flood,
    /// The ambient food level drops.
    Drought,
    /// Each creature independently may die.
    Plague,
}

impl Disaster {
    /// Parses a disaster name.
    ///
    /// Unrecognized names return `None`; triggering by an unknown name is a
    /// deliberate no-op rather than an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fire" => Some(Self::Fire),
            "quake" => Some(Self::Quake),
            "flood" => Some(Self::Flood),
            "drought" => Some(Self::Drought),
            "plague" => Some(Self::Plague),
            _ => None,
        }
    }

    /// Canonical name of this disaster.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Quake => "quake",
            Self::Flood => "flood",
            Self::Drought => "drought",
            Self::Plague => "plague",
        }
    }
}
