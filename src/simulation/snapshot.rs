//! Read-only views of world state for external consumers.
//!
//! Rendering and statistics layers consume the [`Snapshot`] produced at the
//! end of each tick; they never touch the live, mutable world. Snapshots
//! compare by value, which is what the determinism tests rely on.

use serde::{Deserialize, Serialize};

use super::creature::{Creature, CreatureId, Emotion};
use super::social::{self, Disposition, Government, SocialClass};
use super::world::{Season, World};

/// Public per-creature fields, frozen at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureView {
    /// Stable identifier.
    pub id: CreatureId,
    /// X position.
    pub x: f64,
    /// Y position.
    pub y: f64,
    /// Movement direction in radians.
    pub direction: f64,
    /// Speed trait.
    pub speed: f64,
    /// Size trait.
    pub size: f64,
    /// Sense radius trait.
    pub sense: f64,
    /// Lifespan trait.
    pub lifespan: f64,
    /// Remaining energy.
    pub energy: f64,
    /// Ticks alive.
    pub age: f64,
    /// Fixed temperament.
    pub disposition: Disposition,
    /// Social class at snapshot time.
    pub social_class: SocialClass,
    /// Government affiliation at snapshot time.
    pub government: Government,
    /// Transient emotion, if interacting.
    pub emotion: Option<Emotion>,
    /// Current mate, if bonded.
    pub mate: Option<CreatureId>,
}

impl From<&Creature> for CreatureView {
    fn from(c: &Creature) -> Self {
        Self {
            id: c.id,
            x: c.pos[0],
            y: c.pos[1],
            direction: c.direction,
            speed: c.speed,
            size: c.size,
            sense: c.sense,
            lifespan: c.lifespan,
            energy: c.energy,
            age: c.age,
            disposition: c.disposition,
            social_class: c.social_class,
            government: c.government,
            emotion: c.emotion,
            mate: c.mate,
        }
    }
}

/// Population-wide trait averages, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitAverages {
    /// Average speed.
    pub speed: f64,
    /// Average size.
    pub size: f64,
    /// Average lifespan.
    pub lifespan: f64,
    /// Average sense radius.
    pub sense: f64,
}

/// Creature counts per social class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    /// Number of workers.
    pub workers: usize,
    /// Number of elites.
    pub elites: usize,
    /// Number of leaders.
    pub leaders: usize,
}

/// Immutable view of the world at the end of a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tick counter value.
    pub tick: u64,
    /// Current season.
    pub season: Season,
    /// Number of live creatures.
    pub population: usize,
    /// Number of uneaten food items.
    pub food_count: usize,
    /// Ambient food level.
    pub food_level: f64,
    /// Total births since initialization.
    pub births: u64,
    /// Total deaths since initialization.
    pub deaths: u64,
    /// Current mutation rate.
    pub mutation_rate: f64,
    /// Population-wide trait averages.
    pub averages: TraitAverages,
    /// Creature counts per social class.
    pub class_counts: ClassCounts,
    /// Most common government affiliation.
    pub dominant_government: Government,
    /// Per-creature public fields.
    pub creatures: Vec<CreatureView>,
}

impl Snapshot {
    /// Freezes the world's current state into a snapshot.
    pub fn capture(world: &World) -> Self {
        let creatures: Vec<CreatureView> =
            world.creatures.iter().map(CreatureView::from).collect();

        let mut class_counts = ClassCounts {
            workers: 0,
            elites: 0,
            leaders: 0,
        };
        for view in &creatures {
            match view.social_class {
                SocialClass::Worker => class_counts.workers += 1,
                SocialClass::Elite => class_counts.elites += 1,
                SocialClass::Leader => class_counts.leaders += 1,
            }
        }

        Self {
            tick: world.tick_count(),
            season: world.season(),
            population: creatures.len(),
            food_count: world.food.len(),
            food_level: world.food_level(),
            births: world.births(),
            deaths: world.deaths(),
            mutation_rate: world.params().mutation_rate,
            averages: TraitAverages {
                speed: average(world.creatures.iter().map(|c| c.speed)),
                size: average(world.creatures.iter().map(|c| c.size)),
                lifespan: average(world.creatures.iter().map(|c| c.lifespan)),
                sense: average(world.creatures.iter().map(|c| c.sense)),
            },
            class_counts,
            dominant_government: social::dominant_government(
                world.creatures.iter().map(|c| c.government),
            ),
            creatures,
        }
    }
}

/// Mean of the values, rounded to two decimals; zero for an empty population.
fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64 * 100.0).round() / 100.0
}
