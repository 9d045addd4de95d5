//! Match configuration — every tuning constant the engine consumes.
//!
//! The engine never reads `constants` directly; it reads a `MatchConfig`
//! handed to it at construction, so hosts and tests can reshape the arena,
//! the economy, and the archetype catalog freely.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// A static unit-type definition, selected by catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitArchetype {
    pub cost: u32,
    pub max_health: i32,
    pub attack: i32,
}

/// Complete rule set for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    // --- Arena ---
    pub arena_width: f64,
    pub arena_height: f64,
    /// Distance of each tower's center from its arena edge.
    pub tower_margin: f64,
    pub tower_half_width: f64,
    pub tower_health: i32,

    // --- Economy ---
    pub starting_gold: u32,
    pub gold_increment: u32,
    pub gold_period_ms: u64,

    // --- Combat ---
    pub attack_delay_ms: u64,
    pub stop_distance: f64,
    pub pause_duration_ms: u64,
    pub retreat_distance: f64,

    // --- Units ---
    pub unit_half_width: f64,
    pub unit_speed: f64,
    pub enemy_spawn_period_ms: u64,

    /// Ordered archetype catalog. Spawn requests index into this.
    pub catalog: Vec<UnitArchetype>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        let catalog = (0..UNIT_COSTS.len())
            .map(|i| UnitArchetype {
                cost: UNIT_COSTS[i],
                max_health: UNIT_HEALTH[i],
                attack: UNIT_ATTACK[i],
            })
            .collect();

        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            tower_margin: TOWER_MARGIN,
            tower_half_width: TOWER_HALF_WIDTH,
            tower_health: TOWER_HEALTH,
            starting_gold: STARTING_GOLD,
            gold_increment: GOLD_INCREMENT,
            gold_period_ms: GOLD_PERIOD_MS,
            attack_delay_ms: ATTACK_DELAY_MS,
            stop_distance: STOP_DISTANCE,
            pause_duration_ms: PAUSE_DURATION_MS,
            retreat_distance: RETREAT_DISTANCE,
            unit_half_width: UNIT_HALF_WIDTH,
            unit_speed: UNIT_SPEED,
            enemy_spawn_period_ms: ENEMY_SPAWN_PERIOD_MS,
            catalog,
        }
    }
}

impl MatchConfig {
    /// Center x of the player tower.
    pub fn player_tower_x(&self) -> f64 {
        self.tower_margin
    }

    /// Center x of the enemy tower.
    pub fn enemy_tower_x(&self) -> f64 {
        self.arena_width - self.tower_margin
    }

    /// The lane row all units and towers occupy.
    pub fn lane_y(&self) -> f64 {
        self.arena_height / 2.0
    }

    /// Right edge of the player tower (the face enemy units approach).
    pub fn player_tower_edge(&self) -> f64 {
        self.player_tower_x() + self.tower_half_width
    }

    /// Left edge of the enemy tower (the face player units approach).
    pub fn enemy_tower_edge(&self) -> f64 {
        self.enemy_tower_x() - self.tower_half_width
    }
}
