//! Tower attack system.
//!
//! A unit whose leading edge has closed to within stop distance of the
//! opposing tower strikes it once per elapsed attack delay. Attacking does
//! not require the unit to be moving.

use hecs::World;

use lanewar_core::components::{AttackTimer, Health, Offense, Tower, UnitBody};
use lanewar_core::config::MatchConfig;
use lanewar_core::enums::Side;
use lanewar_core::events::MatchEvent;
use lanewar_core::types::Position;

/// Evaluate and apply all tower attacks for this tick.
pub fn run(world: &mut World, rules: &MatchConfig, events: &mut Vec<MatchEvent>, now_ms: u64) {
    let player_tower_reach = rules.player_tower_edge() + rules.stop_distance;
    let enemy_tower_reach = rules.enemy_tower_edge() - rules.stop_distance;

    // Accumulate damage per tower first; tower health is only read after
    // every unit's cooldown has been evaluated, so ordering among units
    // within the tick cannot matter.
    let mut damage_to_player_tower = 0i32;
    let mut damage_to_enemy_tower = 0i32;

    for (_entity, (_body, side, pos, offense, timer)) in
        world.query_mut::<(&UnitBody, &Side, &Position, &Offense, &mut AttackTimer)>()
    {
        let in_range = match side {
            Side::Player => pos.x + rules.unit_half_width >= enemy_tower_reach,
            Side::Enemy => pos.x - rules.unit_half_width <= player_tower_reach,
        };
        if !in_range {
            continue;
        }
        if now_ms.saturating_sub(timer.last_attack_ms) < rules.attack_delay_ms {
            continue;
        }

        timer.last_attack_ms = now_ms;
        match side {
            Side::Player => damage_to_enemy_tower += offense.attack,
            Side::Enemy => damage_to_player_tower += offense.attack,
        }
    }

    for (_entity, (_tower, side, health)) in world.query_mut::<(&Tower, &Side, &mut Health)>() {
        let damage = match side {
            Side::Player => damage_to_player_tower,
            Side::Enemy => damage_to_enemy_tower,
        };
        if damage > 0 {
            health.current = (health.current - damage).max(0);
            events.push(MatchEvent::TowerDamaged {
                side: *side,
                damage,
                health_remaining: health.current,
            });
        }
    }
}
