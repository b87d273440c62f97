//! World state and the tick loop.
//!
//! The world owns the creature population, food items, environment scalars,
//! and the seeded random source. An external caller (render loop, test
//! harness, or the headless runner) drives it one [`World::tick`] at a time;
//! nothing here is thread-safe or asynchronous. External consumers read the
//! [`Snapshot`] returned by each tick, never the live state.

use std::collections::HashSet;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::creature::{Creature, CreatureId};
use super::disaster::{
    DROUGHT_FOOD_LOSS, Disaster, FIRE_LIFESPAN_LOSS, FIRE_SIZE_THRESHOLD, FLOOD_SPEED_THRESHOLD,
    PLAGUE_DEATH_PROBABILITY, QUAKE_JITTER,
};
use super::error::{ConfigError, Result};
use super::events::{self, EventQueue, WorldEvent};
use super::food::Food;
use super::params::Params;
use super::snapshot::Snapshot;
use super::social::{self, Disposition};
use super::spatial::SpatialIndex;

/// Energy lost by every creature each tick.
pub const ENERGY_DECAY: f64 = 0.05;
/// Maximum direction perturbation per tick while wandering, in radians.
pub const WANDER_JITTER: f64 = 0.2;
/// Radius within which creatures push each other apart.
pub const REPULSION_RADIUS: f64 = 40.0;
/// Scale applied to the separation vector during repulsion.
pub const REPULSION_STRENGTH: f64 = 0.02;
/// Radius within which social interactions can start.
pub const INTERACTION_RADIUS: f64 = 60.0;
/// Per-pair probability of starting an interaction each tick.
pub const INTERACTION_PROBABILITY: f64 = 0.02;
/// Ticks a creature stays in (and recovers from) an interaction.
pub const INTERACTION_COOLDOWN_TICKS: u32 = 30;
/// Distance each partner is pushed apart when an interaction starts.
pub const INTERACTION_BOUNCE: f64 = 1.0;
/// Probability of forming a mate bond with a found partner.
pub const MATE_PROBABILITY: f64 = 0.05;
/// Maximum size difference between mates.
pub const MATE_SIZE_TOLERANCE: f64 = 2.0;

/// The four seasons, advanced cyclically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    /// First season of the cycle.
    Spring,
    /// Second season.
    Summer,
    /// Third season.
    Autumn,
    /// Last season before the cycle repeats.
    Winter,
}

impl Season {
    /// The season following this one.
    pub fn next(self) -> Self {
        match self {
            Self::Spring => Self::Summer,
            Self::Summer => Self::Autumn,
            Self::Autumn => Self::Winter,
            Self::Winter => Self::Spring,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }
}

/// The full mutable simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Live creatures in creation order.
    pub creatures: Vec<Creature>,
    /// Food items in creation order.
    pub food: Vec<Food>,
    /// Seeded random source; every stochastic decision draws from it.
    pub rng: ChaCha8Rng,
    params: Params,
    tick: u64,
    season: Season,
    food_level: f64,
    births: u64,
    deaths: u64,
    next_creature_id: u64,
}

impl World {
    /// Creates a world from validated configuration.
    pub fn new(params: Params) -> Result<Self> {
        params.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
        let mut next_creature_id = 0;
        let creatures = (0..params.initial_population)
            .map(|_| {
                let id = CreatureId(next_creature_id);
                next_creature_id += 1;
                Creature::spawn(
                    id,
                    &mut rng,
                    params.world_width,
                    params.world_height,
                    params.initial_energy,
                )
            })
            .collect();

        info!(
            population = params.initial_population,
            seed = params.seed,
            "world initialized"
        );

        Ok(Self {
            creatures,
            food: Vec::new(),
            rng,
            food_level: params.initial_food_level,
            params,
            tick: 0,
            season: Season::Spring,
            births: 0,
            deaths: 0,
            next_creature_id,
        })
    }

    /// Discards all creatures and food and reinitializes from `params`.
    pub fn reset(&mut self, params: Params) -> Result<()> {
        *self = Self::new(params)?;
        Ok(())
    }

    /// Advances the world by exactly one tick and returns a snapshot.
    ///
    /// The spatial index is built before any state changes, so a failure
    /// there surfaces with the world untouched; everything after it is
    /// infallible.
    pub fn tick(&mut self) -> Result<Snapshot> {
        let index = SpatialIndex::build(&self.creatures, &self.food)?;

        self.tick += 1;
        if self.tick % self.params.season_interval() == 0 {
            self.season = self.season.next();
            debug!(tick = self.tick, season = self.season.name(), "season changed");
        }

        // Start-of-tick view for neighbor scans; per-creature updates only
        // mutate the creature itself (and the food it eats), cross-creature
        // effects go through the event queue.
        let start_of_tick = self.creatures.clone();
        let mut queue = EventQueue::new();
        for i in 0..self.creatures.len() {
            self.update_creature(i, &start_of_tick, &index, &mut queue);
        }
        events::apply_events(self, queue);

        self.remove_dead();
        for creature in &mut self.creatures {
            let (class, government) = social::classify(creature.size, creature.speed);
            creature.social_class = class;
            creature.government = government;
        }
        self.food.retain(|f| !f.is_consumed());
        self.spawn_food();

        Ok(Snapshot::capture(self))
    }

    /// Applies a disaster to the whole population, immediately.
    ///
    /// Deaths caused here are removed right away, outside any tick.
    pub fn trigger_disaster(&mut self, kind: Disaster) {
        info!(kind = kind.name(), "disaster triggered");
        match kind {
            Disaster::Fire => {
                for creature in &mut self.creatures {
                    if creature.size < FIRE_SIZE_THRESHOLD {
                        creature.lifespan -= FIRE_LIFESPAN_LOSS;
                    }
                }
            }
            Disaster::Quake => {
                let (width, height) = (self.params.world_width, self.params.world_height);
                for creature in &mut self.creatures {
                    creature.pos[0] += (self.rng.random::<f64>() - 0.5) * 2.0 * QUAKE_JITTER;
                    creature.pos[1] += (self.rng.random::<f64>() - 0.5) * 2.0 * QUAKE_JITTER;
                    clamp_mut(&mut creature.pos, width, height);
                }
            }
            Disaster::Flood => {
                for creature in &mut self.creatures {
                    if creature.speed < FLOOD_SPEED_THRESHOLD {
                        creature.kill();
                    }
                }
            }
            Disaster::Drought => {
                self.food_level = (self.food_level - DROUGHT_FOOD_LOSS).max(0.0);
            }
            Disaster::Plague => {
                for creature in &mut self.creatures {
                    if self.rng.random::<f64>() < PLAGUE_DEATH_PROBABILITY {
                        creature.kill();
                    }
                }
            }
        }
        self.remove_dead();
    }

    /// Applies a disaster by name; unknown names are a recognized no-op.
    pub fn trigger_disaster_by_name(&mut self, name: &str) {
        match Disaster::from_name(name) {
            Some(kind) => self.trigger_disaster(kind),
            None => debug!(name, "ignoring unknown disaster kind"),
        }
    }

    /// Current configuration.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Sets the mutation rate, re-validating the configuration.
    pub fn set_mutation_rate(&mut self, rate: f64) -> std::result::Result<(), ConfigError> {
        let mut params = self.params.clone();
        params.mutation_rate = rate;
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Sets the season length, re-validating the configuration.
    pub fn set_season_length(&mut self, length: u64) -> std::result::Result<(), ConfigError> {
        let mut params = self.params.clone();
        params.season_length = length;
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Sets the season change rate, re-validating the configuration.
    pub fn set_season_rate(&mut self, rate: u64) -> std::result::Result<(), ConfigError> {
        let mut params = self.params.clone();
        params.season_rate = rate;
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Ticks elapsed since initialization.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Current season.
    pub fn season(&self) -> Season {
        self.season
    }

    /// Current ambient food level.
    pub fn food_level(&self) -> f64 {
        self.food_level
    }

    /// Total births since initialization.
    pub fn births(&self) -> u64 {
        self.births
    }

    /// Total deaths since initialization.
    pub fn deaths(&self) -> u64 {
        self.deaths
    }

    /// World bounds as `(width, height)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.params.world_width, self.params.world_height)
    }

    /// Index of the creature with the given id, if it is alive.
    pub fn index_of(&self, id: CreatureId) -> Option<usize> {
        self.creatures.iter().position(|c| c.id == id)
    }

    /// Allocates the next stable creature id.
    pub fn alloc_creature_id(&mut self) -> CreatureId {
        let id = CreatureId(self.next_creature_id);
        self.next_creature_id += 1;
        id
    }

    /// Counts a birth.
    pub fn record_birth(&mut self) {
        self.births += 1;
    }

    /// Clamps a creature's position back into the world bounds.
    pub fn clamp_creature(&mut self, i: usize) {
        let (width, height) = self.bounds();
        clamp_mut(&mut self.creatures[i].pos, width, height);
    }

    /// Saves the world state to a pretty-printed JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a world state from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let world = serde_json::from_str(&json)?;
        Ok(world)
    }

    /// Per-creature update: foraging or wandering, bounds clamp, repulsion,
    /// interaction check, mate search, aging and energy decay.
    fn update_creature(
        &mut self,
        i: usize,
        start_of_tick: &[Creature],
        index: &SpatialIndex,
        queue: &mut EventQueue,
    ) {
        let width = self.params.world_width;
        let height = self.params.world_height;
        let Self {
            creatures,
            food,
            rng,
            ..
        } = self;
        let c = &mut creatures[i];

        c.tick_cooldown();

        // Forage: nearest uneaten food within sense range, ties broken by
        // food creation order. Otherwise wander with a perturbed direction.
        let nearest_food = index
            .food_within(&c.pos, c.sense)
            .into_iter()
            .find(|&(_, fi)| !food[fi].is_consumed());
        if let Some((_, fi)) = nearest_food {
            let target = food[fi].pos;
            let dx = target[0] - c.pos[0];
            let dy = target[1] - c.pos[1];
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > f64::EPSILON {
                c.direction = dy.atan2(dx);
                c.pos[0] += c.direction.cos() * c.speed;
                c.pos[1] += c.direction.sin() * c.speed;
            }

            let dx = target[0] - c.pos[0];
            let dy = target[1] - c.pos[1];
            if (dx * dx + dy * dy).sqrt() < c.size {
                let gained = food[fi].energy;
                food[fi].consume();
                c.gain_energy(gained);
                debug!(creature = %c.id, energy = c.energy, "consumed food");
            }
        } else {
            c.direction += (rng.random::<f64>() - 0.5) * 2.0 * WANDER_JITTER;
            c.pos[0] += c.direction.cos() * c.speed;
            c.pos[1] += c.direction.sin() * c.speed;
        }
        clamp_mut(&mut c.pos, width, height);

        // Crowding repulsion from neighbors at their start-of-tick positions.
        for &(_, j) in &index.creatures_within(&c.pos, REPULSION_RADIUS) {
            if j == i {
                continue;
            }
            let other = &start_of_tick[j];
            c.pos[0] += (c.pos[0] - other.pos[0]) * REPULSION_STRENGTH;
            c.pos[1] += (c.pos[1] - other.pos[1]) * REPULSION_STRENGTH;
        }
        clamp_mut(&mut c.pos, width, height);

        // Social interaction check.
        if c.can_interact() {
            for &(_, j) in &index.creatures_within(&c.pos, INTERACTION_RADIUS) {
                if j == i || !start_of_tick[j].can_interact() {
                    continue;
                }
                if rng.random::<f64>() < INTERACTION_PROBABILITY {
                    queue.push(WorldEvent::InteractionStarted {
                        a: c.id,
                        b: start_of_tick[j].id,
                    });
                    break;
                }
            }
        }

        // Mate search: first eligible partner in creation order.
        if c.mate.is_none() && c.disposition == Disposition::Friendly {
            let mut candidates = index.creatures_within(&c.pos, c.sense / 2.0);
            candidates.sort_by_key(|&(_, j)| j);
            let partner = candidates.into_iter().find(|&(_, j)| {
                j != i
                    && start_of_tick[j].mate.is_none()
                    && (c.size - start_of_tick[j].size).abs() < MATE_SIZE_TOLERANCE
            });
            if let Some((_, j)) = partner {
                if rng.random::<f64>() < MATE_PROBABILITY {
                    queue.push(WorldEvent::MateFormed {
                        a: c.id,
                        b: start_of_tick[j].id,
                    });
                }
            }
        }

        c.age += 1.0;
        c.consume_energy(ENERGY_DECAY);
    }

    /// Removes creatures that are no longer alive in a single pass, clearing
    /// surviving partners' mate links and counting the deaths.
    fn remove_dead(&mut self) {
        let dead: HashSet<CreatureId> = self
            .creatures
            .iter()
            .filter(|c| !c.is_alive())
            .map(|c| c.id)
            .collect();
        if dead.is_empty() {
            return;
        }

        self.creatures.retain(Creature::is_alive);
        for creature in &mut self.creatures {
            if creature.mate.is_some_and(|m| dead.contains(&m)) {
                creature.mate = None;
            }
        }
        self.deaths += dead.len() as u64;
        debug!(count = dead.len(), tick = self.tick, "creatures died");
    }

    /// Spawns food on the periodic schedule while the ambient level allows.
    fn spawn_food(&mut self) {
        if self.tick % self.params.food_spawn_interval != 0 || self.food_level <= 0.0 {
            return;
        }
        let capacity = self.params.max_food.saturating_sub(self.food.len());
        let count = self.params.food_per_spawn.min(capacity);
        for _ in 0..count {
            self.food.push(Food::spawn(
                &mut self.rng,
                self.params.world_width,
                self.params.world_height,
                self.params.food_energy,
            ));
        }
    }
}

fn clamp_mut(pos: &mut [f64; 2], width: f64, height: f64) {
    pos[0] = pos[0].clamp(0.0, width);
    pos[1] = pos[1].clamp(0.0, height);
}
