//! Unit-vs-unit combat resolution.
//!
//! Each tick: find every overlapping (player unit, enemy unit) pair,
//! exchange damage once per pair, apply the half-health knockback, force
//! both members of a mutually-moving pair into a fresh pause window, and
//! remove the dead.

use hecs::{Entity, World};

use lanewar_core::components::{Health, Mobility, Offense, UnitBody};
use lanewar_core::config::MatchConfig;
use lanewar_core::enums::{MovePhase, Side};
use lanewar_core::events::MatchEvent;
use lanewar_core::types::Position;

/// Per-unit data captured before any damage is applied. Attack values are
/// read here once, so both sides of a pair always strike with their
/// pre-damage stats.
#[derive(Debug, Clone, Copy)]
struct Contact {
    entity: Entity,
    x: f64,
    attack: i32,
}

/// Resolve all unit-vs-unit contacts for this tick.
pub fn resolve_contacts(
    world: &mut World,
    rules: &MatchConfig,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<MatchEvent>,
    now_ms: u64,
) {
    let (players, enemies) = collect_rosters(world);

    // Brute-force pairwise sweep. Rosters are small (tens of units), so
    // O(n*m) is fine and keeps the contact list explicit.
    let overlap = 2.0 * rules.unit_half_width;
    let mut pairs: Vec<(Contact, Contact)> = Vec::new();
    for player in &players {
        for enemy in &enemies {
            if (player.x - enemy.x).abs() < overlap {
                pairs.push((*player, *enemy));
            }
        }
    }

    for (player, enemy) in pairs {
        // A unit that died in an earlier pair this tick no longer
        // participates in collisions.
        if !is_alive(world, player.entity) || !is_alive(world, enemy.entity) {
            continue;
        }

        // The pause trigger looks at movement state at the moment of
        // contact, before damage lands.
        let both_moving = is_moving(world, player.entity) && is_moving(world, enemy.entity);

        apply_damage(world, rules, player.entity, enemy.attack, events);
        apply_damage(world, rules, enemy.entity, player.attack, events);

        if both_moving {
            for entity in [player.entity, enemy.entity] {
                if let Ok(mut mobility) = world.get::<&mut Mobility>(entity) {
                    mobility.phase = MovePhase::Paused;
                    mobility.pause_until_ms = now_ms + rules.pause_duration_ms;
                }
            }
        }
    }

    remove_dead(world, despawn_buffer, events);
}

/// Apply one damage hit to a unit: clamp health at zero and knock the unit
/// back if this hit carried it from at-or-above half health to below.
///
/// The threshold check compares health immediately before and after this
/// single application, so the knockback fires at most once in a unit's
/// lifetime (health only decreases).
pub fn apply_damage(
    world: &mut World,
    rules: &MatchConfig,
    entity: Entity,
    damage: i32,
    events: &mut Vec<MatchEvent>,
) {
    let (before, after, max) = {
        let Ok(mut health) = world.get::<&mut Health>(entity) else {
            return;
        };
        let before = health.current;
        health.current = (health.current - damage).max(0);
        (before, health.current, health.max)
    };

    // `before >= max/2 > after` without integer-division loss.
    let crossed_half = 2 * before >= max && 2 * after < max;
    if crossed_half && after > 0 {
        knock_back(world, rules, entity, events);
    }
}

/// Shove a unit backward, opposite its direction of travel.
fn knock_back(world: &mut World, rules: &MatchConfig, entity: Entity, events: &mut Vec<MatchEvent>) {
    let Ok(side) = world.get::<&Side>(entity).map(|s| *s) else {
        return;
    };
    let Ok(unit_id) = world.get::<&UnitBody>(entity).map(|b| b.unit_id) else {
        return;
    };
    if let Ok(mut pos) = world.get::<&mut Position>(entity) {
        pos.x -= side.advance_sign() * rules.retreat_distance;
        events.push(MatchEvent::UnitKnockedBack { unit_id });
    }
}

/// Despawn every unit whose health reached zero, emitting a destruction
/// event for each. Uses a pre-allocated buffer to avoid per-tick
/// allocation.
fn remove_dead(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<MatchEvent>) {
    despawn_buffer.clear();

    for (entity, (body, side, health)) in world.query_mut::<(&UnitBody, &Side, &Health)>() {
        if health.current <= 0 {
            events.push(MatchEvent::UnitDestroyed {
                unit_id: body.unit_id,
                side: *side,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn collect_rosters(world: &mut World) -> (Vec<Contact>, Vec<Contact>) {
    let mut players = Vec::new();
    let mut enemies = Vec::new();

    for (entity, (_body, side, pos, offense)) in
        world.query_mut::<(&UnitBody, &Side, &Position, &Offense)>()
    {
        let contact = Contact {
            entity,
            x: pos.x,
            attack: offense.attack,
        };
        match side {
            Side::Player => players.push(contact),
            Side::Enemy => enemies.push(contact),
        }
    }

    (players, enemies)
}

fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Health>(entity)
        .map(|h| h.current > 0)
        .unwrap_or(false)
}

fn is_moving(world: &World, entity: Entity) -> bool {
    world
        .get::<&Mobility>(entity)
        .map(|m| m.phase == MovePhase::Moving)
        .unwrap_or(false)
}
