//! Deferred cross-creature effects.
//!
//! The per-creature pass only mutates the creature being updated; effects
//! that touch a second creature (interaction pairing, mate bonds and the
//! resulting birth) are queued as events and applied serially afterwards.
//! Application re-checks eligibility, so two creatures that both picked the
//! same partner in one pass cannot double-bond.

use tracing::debug;

use super::creature::{Creature, CreatureId};
use super::memory::MemoryKind;
use super::world::{INTERACTION_BOUNCE, INTERACTION_COOLDOWN_TICKS, World};

/// A state change involving two creatures.
#[derive(Debug, Clone, Copy)]
pub enum WorldEvent {
    /// Two creatures came close and start a social interaction.
    InteractionStarted {
        /// The creature whose update noticed the partner.
        a: CreatureId,
        /// The partner.
        b: CreatureId,
    },
    /// Two creatures form a mutual mate bond and produce one offspring.
    MateFormed {
        /// The searching creature.
        a: CreatureId,
        /// The found partner.
        b: CreatureId,
    },
}

/// Queue of events collected during the per-creature pass.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<WorldEvent>,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event.
    pub fn push(&mut self, event: WorldEvent) {
        self.events.push(event);
    }

    /// Drains all events in insertion order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, WorldEvent> {
        self.events.drain(..)
    }
}

/// Applies all queued events to the world.
pub fn apply_events(world: &mut World, mut queue: EventQueue) {
    let events: Vec<WorldEvent> = queue.drain().collect();
    for event in events {
        match event {
            WorldEvent::InteractionStarted { a, b } => apply_interaction(world, a, b),
            WorldEvent::MateFormed { a, b } => apply_mate_bond(world, a, b),
        }
    }
}

fn apply_interaction(world: &mut World, a: CreatureId, b: CreatureId) {
    let Some(ia) = world.index_of(a) else { return };
    let Some(ib) = world.index_of(b) else { return };

    // A creature may have engaged (or died) earlier in the same queue.
    if !world.creatures[ia].is_alive()
        || !world.creatures[ib].is_alive()
        || !world.creatures[ia].can_interact()
        || !world.creatures[ib].can_interact()
    {
        return;
    }

    let tick = world.tick_count();
    world.creatures[ia].begin_interaction(INTERACTION_COOLDOWN_TICKS);
    world.creatures[ib].begin_interaction(INTERACTION_COOLDOWN_TICKS);
    world.creatures[ia].memory.record(tick, MemoryKind::Interacted, b);
    world.creatures[ib].memory.record(tick, MemoryKind::Interacted, a);

    bounce_apart(world, ia, ib);
}

/// Pushes two interacting creatures apart along their separation vector.
///
/// Skipped when the creatures occupy the same point, since the direction is
/// undefined there.
fn bounce_apart(world: &mut World, ia: usize, ib: usize) {
    let pa = world.creatures[ia].pos;
    let pb = world.creatures[ib].pos;
    let dx = pa[0] - pb[0];
    let dy = pa[1] - pb[1];
    let dist = (dx * dx + dy * dy).sqrt();
    if dist <= f64::EPSILON {
        return;
    }

    let (ux, uy) = (dx / dist, dy / dist);
    world.creatures[ia].pos[0] += ux * INTERACTION_BOUNCE;
    world.creatures[ia].pos[1] += uy * INTERACTION_BOUNCE;
    world.creatures[ib].pos[0] -= ux * INTERACTION_BOUNCE;
    world.creatures[ib].pos[1] -= uy * INTERACTION_BOUNCE;
    world.clamp_creature(ia);
    world.clamp_creature(ib);
}

fn apply_mate_bond(world: &mut World, a: CreatureId, b: CreatureId) {
    let Some(ia) = world.index_of(a) else { return };
    let Some(ib) = world.index_of(b) else { return };

    // Either side may have bonded with someone else earlier in the queue.
    if !world.creatures[ia].is_alive()
        || !world.creatures[ib].is_alive()
        || world.creatures[ia].mate.is_some()
        || world.creatures[ib].mate.is_some()
    {
        return;
    }

    let child_id = world.alloc_creature_id();
    let tick = world.tick_count();
    let mutation_rate = world.params().mutation_rate;
    let (width, height) = world.bounds();
    let initial_energy = world.params().initial_energy;

    let child = Creature::offspring(
        child_id,
        &world.creatures[ia],
        &world.creatures[ib],
        mutation_rate,
        &mut world.rng,
        width,
        height,
        initial_energy,
    );

    world.creatures[ia].mate = Some(b);
    world.creatures[ib].mate = Some(a);
    world.creatures[ia].memory.record(tick, MemoryKind::Mated, b);
    world.creatures[ib].memory.record(tick, MemoryKind::Mated, a);
    world.record_birth();

    debug!(parent_a = %a, parent_b = %b, child = %child_id, "mate bond formed");
    world.creatures.push(child);
}
