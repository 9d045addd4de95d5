//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::MovePhase;

/// Marks an entity as one of the two fixed towers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower;

/// Marks an entity as a mobile combat unit and carries its identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitBody {
    /// Stable id assigned at spawn, unique for the match.
    pub unit_id: u32,
    /// Index into the archetype catalog this unit was built from.
    pub archetype: usize,
}

/// Health pool shared by towers and units.
/// `current` is clamped to `[0, max]`; zero means removal (units) or
/// defeat (towers).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Damage dealt per hit, to opposing units on contact and to the opposing
/// tower when in range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Offense {
    pub attack: i32,
}

/// The unit movement state machine.
///
/// Speed is an unsigned per-tick magnitude; direction comes from the
/// entity's `Side` component.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mobility {
    pub speed: f64,
    pub phase: MovePhase,
    /// Timestamp at which a `Paused` unit becomes `Moving` again (ms).
    pub pause_until_ms: u64,
}

/// Tower-attack cooldown. Reset to the spawn timestamp at creation, so a
/// fresh unit cannot strike a tower before one full attack delay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackTimer {
    pub last_attack_ms: u64,
}
