//! Social classification and governance.
//!
//! Social class and government are pure functions of a creature's current
//! size and speed, recomputed every tick. They carry no history: two
//! creatures with identical traits always land in the same class.

use serde::{Deserialize, Serialize};

/// Size above which a slow creature becomes a leader.
pub const LEADER_SIZE_THRESHOLD: f64 = 8.0;
/// Speed below which a large creature becomes a leader.
pub const LEADER_SPEED_THRESHOLD: f64 = 3.0;
/// Speed above which a creature becomes an elite.
pub const ELITE_SPEED_THRESHOLD: f64 = 4.0;

/// Fixed temperament assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    /// Seeks mates.
    Friendly,
    /// Never mates.
    Aggressive,
}

/// Social class, derived from current traits each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocialClass {
    /// Default class.
    Worker,
    /// Fast creatures.
    Elite,
    /// Large, slow creatures.
    Leader,
}

/// Government affiliation, derived from social class.
///
/// `Authoritarian` is a recognized affiliation with no current production
/// rule; no classification assigns it, but it parses, serializes, and is
/// counted like the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Government {
    /// Affiliation of workers and elites.
    Tribal,
    /// Affiliation of leaders.
    Democratic,
    /// Recognized but currently never assigned.
    Authoritarian,
}

/// Classifies a creature from its current size and speed.
pub fn classify(size: f64, speed: f64) -> (SocialClass, Government) {
    if size > LEADER_SIZE_THRESHOLD && speed < LEADER_SPEED_THRESHOLD {
        (SocialClass::Leader, Government::Democratic)
    } else if speed > ELITE_SPEED_THRESHOLD {
        (SocialClass::Elite, Government::Tribal)
    } else {
        (SocialClass::Worker, Government::Tribal)
    }
}

/// Returns the most common government among the given affiliations.
///
/// Ties resolve in declaration order (tribal, then democratic, then
/// authoritarian); an empty population reports tribal.
pub fn dominant_government(affiliations: impl Iterator<Item = Government>) -> Government {
    let mut counts = [0usize; 3];
    for government in affiliations {
        let slot = match government {
            Government::Tribal => 0,
            Government::Democratic => 1,
            Government::Authoritarian => 2,
        };
        counts[slot] += 1;
    }

    let order = [
        Government::Tribal,
        Government::Democratic,
        Government::Authoritarian,
    ];
    let mut best = 0;
    for i in 1..counts.len() {
        if counts[i] > counts[best] {
            best = i;
        }
    }
    order[best]
}
