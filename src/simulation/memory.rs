//! Per-creature memory of notable encounters.

use serde::{Deserialize, Serialize};

use super::creature::CreatureId;

/// A remembered encounter with another creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEvent {
    /// Tick at which the event occurred.
    pub tick: u64,
    /// What happened.
    pub kind: MemoryKind,
    /// The other creature involved.
    pub other: CreatureId,
}

/// Kinds of remembered events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryKind {
    /// Formed a mate bond.
    Mated,
    /// Started a social interaction.
    Interacted,
}

/// Append-only, ordered log of a creature's encounters.
///
/// Growth is unbounded; every recorded event is kept for the creature's
/// lifetime. The growth policy lives entirely behind [`MemoryLog::record`]
/// should a cap ever be wanted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryLog {
    events: Vec<MemoryEvent>,
}

impl MemoryLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn record(&mut self, tick: u64, kind: MemoryKind, other: CreatureId) {
        self.events.push(MemoryEvent { tick, kind, other });
    }

    /// All events in the order they were recorded.
    pub fn events(&self) -> &[MemoryEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether anything has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
