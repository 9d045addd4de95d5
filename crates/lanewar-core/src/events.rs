//! Events emitted by the simulation for UI and audio feedback.
//!
//! Drained into every snapshot; each event is delivered exactly once.

use serde::{Deserialize, Serialize};

use crate::enums::{Outcome, Side};

/// Things that happened during a tick, for the host's sound/UI layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// A unit entered the arena.
    UnitSpawned {
        unit_id: u32,
        side: Side,
        archetype: usize,
    },
    /// A unit's health reached zero and it was removed.
    UnitDestroyed { unit_id: u32, side: Side },
    /// A unit's health crossed below half and it was shoved backward.
    UnitKnockedBack { unit_id: u32 },
    /// A tower took a hit.
    TowerDamaged {
        side: Side,
        damage: i32,
        health_remaining: i32,
    },
    /// The match reached a terminal outcome.
    MatchEnded { outcome: Outcome },
}
