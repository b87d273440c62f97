//! Creature state and lifecycle management.
//!
//! Creatures move across the world, seek food, interact, mate, and die when
//! their energy depletes or their lifespan runs out. Cross-creature effects
//! are applied through the world's event queue; the methods here only touch
//! the creature itself.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::genetics;
use super::memory::MemoryLog;
use super::social::{Disposition, Government, SocialClass};

/// Stable unique identifier for a creature.
///
/// Mate bonds and memory entries reference creatures by id rather than by
/// index, so they survive removals and serialization round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub u64);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "creature-{}", self.0)
    }
}

/// Transient emotional state shown during interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    /// Set while two creatures are engaged with each other.
    Excited,
}

// Initial trait ranges: base value plus a uniform random span.
const SPEED_BASE: f64 = 2.0;
const SPEED_SPAN: f64 = 3.0;
const SIZE_BASE: f64 = 5.0;
const SIZE_SPAN: f64 = 5.0;
const LIFESPAN_BASE: f64 = 1000.0;
const LIFESPAN_SPAN: f64 = 2000.0;
const SENSE_BASE: f64 = 50.0;
const SENSE_SPAN: f64 = 100.0;

/// A simulated creature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    /// Unique identifier.
    pub id: CreatureId,
    /// Position in 2D space.
    pub pos: [f64; 2],
    /// Movement direction in radians.
    pub direction: f64,
    /// Distance covered per tick.
    pub speed: f64,
    /// Body size; also the reach for consuming food.
    pub size: f64,
    /// Radius within which food and mates are noticed.
    pub sense: f64,
    /// Maximum age in ticks.
    pub lifespan: f64,
    /// Ticks alive so far.
    pub age: f64,
    /// Current energy; the creature dies at zero.
    pub energy: f64,
    /// Fixed temperament.
    pub disposition: Disposition,
    /// Social class, recomputed every tick.
    pub social_class: SocialClass,
    /// Government affiliation, recomputed every tick.
    pub government: Government,
    /// Current mate, if any. Always symmetric with the partner's field.
    pub mate: Option<CreatureId>,
    /// Whether an interaction is currently in progress.
    pub interacting: bool,
    /// Ticks until the creature may interact again.
    pub interaction_cooldown: u32,
    /// Transient emotion, present only while interacting.
    pub emotion: Option<Emotion>,
    /// Remembered encounters.
    pub memory: MemoryLog,
}

impl Creature {
    /// Creates a creature with random traits, position, and temperament.
    pub fn spawn<R: Rng>(
        id: CreatureId,
        rng: &mut R,
        width: f64,
        height: f64,
        initial_energy: f64,
    ) -> Self {
        let speed = SPEED_BASE + rng.random::<f64>() * SPEED_SPAN;
        let size = SIZE_BASE + rng.random::<f64>() * SIZE_SPAN;
        let lifespan = LIFESPAN_BASE + rng.random::<f64>() * LIFESPAN_SPAN;
        let sense = SENSE_BASE + rng.random::<f64>() * SENSE_SPAN;
        Self::place(id, rng, width, height, initial_energy, speed, size, lifespan, sense)
    }

    /// Creates an offspring of two parents.
    ///
    /// Traits are averaged with probabilistic mutation; position, direction,
    /// and disposition are rolled fresh like any newborn.
    #[allow(clippy::too_many_arguments)]
    pub fn offspring<R: Rng>(
        id: CreatureId,
        parent_a: &Creature,
        parent_b: &Creature,
        mutation_rate: f64,
        rng: &mut R,
        width: f64,
        height: f64,
        initial_energy: f64,
    ) -> Self {
        let speed = genetics::inherit(parent_a.speed, parent_b.speed, mutation_rate, rng);
        let size = genetics::inherit(parent_a.size, parent_b.size, mutation_rate, rng);
        let lifespan = genetics::inherit(parent_a.lifespan, parent_b.lifespan, mutation_rate, rng);
        let sense = genetics::inherit(parent_a.sense, parent_b.sense, mutation_rate, rng);
        Self::place(id, rng, width, height, initial_energy, speed, size, lifespan, sense)
    }

    #[allow(clippy::too_many_arguments)]
    fn place<R: Rng>(
        id: CreatureId,
        rng: &mut R,
        width: f64,
        height: f64,
        initial_energy: f64,
        speed: f64,
        size: f64,
        lifespan: f64,
        sense: f64,
    ) -> Self {
        let (social_class, government) = super::social::classify(size, speed);
        Self {
            id,
            pos: [rng.random::<f64>() * width, rng.random::<f64>() * height],
            direction: rng.random::<f64>() * std::f64::consts::TAU,
            speed,
            size,
            sense,
            lifespan,
            age: 0.0,
            energy: initial_energy,
            disposition: if rng.random::<f64>() < 0.5 {
                Disposition::Friendly
            } else {
                Disposition::Aggressive
            },
            social_class,
            government,
            mate: None,
            interacting: false,
            interaction_cooldown: 0,
            emotion: None,
            memory: MemoryLog::new(),
        }
    }

    /// Whether the creature is still alive.
    pub fn is_alive(&self) -> bool {
        self.energy > 0.0 && self.age < self.lifespan
    }

    /// Subtracts energy.
    pub fn consume_energy(&mut self, amount: f64) {
        self.energy -= amount;
    }

    /// Adds energy from consumed food.
    pub fn gain_energy(&mut self, amount: f64) {
        self.energy += amount;
    }

    /// Kills the creature by draining its energy.
    pub fn kill(&mut self) {
        self.energy = 0.0;
    }

    /// Whether the creature may start a new interaction.
    pub fn can_interact(&self) -> bool {
        !self.interacting && self.interaction_cooldown == 0
    }

    /// Marks the creature as engaged with a partner.
    pub fn begin_interaction(&mut self, cooldown: u32) {
        self.interacting = true;
        self.emotion = Some(Emotion::Excited);
        self.interaction_cooldown = cooldown;
    }

    /// Decrements the interaction cooldown; clears the interaction flag and
    /// emotion once it reaches zero.
    pub fn tick_cooldown(&mut self) {
        if self.interaction_cooldown > 0 {
            self.interaction_cooldown -= 1;
            if self.interaction_cooldown == 0 {
                self.interacting = false;
                self.emotion = None;
            }
        }
    }
}
