//! Entity spawn factories for setting up the simulation world.
//!
//! The single construction path for towers and units, shared by the enemy
//! spawner, the player spawn request, and tests.

use hecs::World;

use lanewar_core::components::{AttackTimer, Health, Mobility, Offense, Tower, UnitBody};
use lanewar_core::config::MatchConfig;
use lanewar_core::enums::{MovePhase, Side};
use lanewar_core::types::Position;

/// Spawn both towers at their fixed positions. Towers live for the whole
/// match; only their health is ever mutated.
pub fn spawn_towers(world: &mut World, rules: &MatchConfig) {
    for side in [Side::Player, Side::Enemy] {
        let x = match side {
            Side::Player => rules.player_tower_x(),
            Side::Enemy => rules.enemy_tower_x(),
        };
        world.spawn((
            Tower,
            side,
            Position::new(x, rules.lane_y()),
            Health {
                current: rules.tower_health,
                max: rules.tower_health,
            },
        ));
    }
}

/// Spawn a unit of the given archetype at its side's near tower edge.
///
/// The unit starts `Paused` for one full pause window, and its attack
/// cooldown starts at the spawn timestamp. An out-of-range archetype
/// index yields `None`.
///
/// Returns the entity and the stable unit id assigned to it.
pub fn spawn_unit(
    world: &mut World,
    rules: &MatchConfig,
    side: Side,
    archetype: usize,
    now_ms: u64,
    next_unit_id: &mut u32,
) -> Option<(hecs::Entity, u32)> {
    let stats = rules.catalog.get(archetype)?;

    // Near edge: one tower-width out from the tower center.
    let x = match side {
        Side::Player => rules.player_tower_x() + 2.0 * rules.tower_half_width,
        Side::Enemy => rules.enemy_tower_x() - 2.0 * rules.tower_half_width,
    };

    let unit_id = *next_unit_id;
    *next_unit_id += 1;

    let entity = world.spawn((
        UnitBody { unit_id, archetype },
        side,
        Position::new(x, rules.lane_y()),
        Health {
            current: stats.max_health,
            max: stats.max_health,
        },
        Offense {
            attack: stats.attack,
        },
        Mobility {
            speed: rules.unit_speed,
            phase: MovePhase::Paused,
            pause_until_ms: now_ms + rules.pause_duration_ms,
        },
        AttackTimer {
            last_attack_ms: now_ms,
        },
    ));

    Some((entity, unit_id))
}
