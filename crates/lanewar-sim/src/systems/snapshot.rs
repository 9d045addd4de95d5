//! Snapshot system: queries the ECS world and builds a complete MatchSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use lanewar_core::components::{Health, Mobility, Tower, UnitBody};
use lanewar_core::enums::{Outcome, Side};
use lanewar_core::events::MatchEvent;
use lanewar_core::state::{MatchSnapshot, TowerView, UnitView};
use lanewar_core::types::{Position, SimTime};

/// Build a complete MatchSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    outcome: Outcome,
    gold: u32,
    events: Vec<MatchEvent>,
) -> MatchSnapshot {
    let (player_tower, enemy_tower) = build_towers(world);

    MatchSnapshot {
        time: *time,
        outcome,
        gold,
        units: build_units(world),
        player_tower,
        enemy_tower,
        events,
    }
}

/// Build UnitView list from all live units, sorted by unit id so the
/// serialized snapshot is stable for a given world state.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&UnitBody, &Side, &Position, &Health, &Mobility)>()
        .iter()
        .map(|(_, (body, side, pos, health, mobility))| UnitView {
            unit_id: body.unit_id,
            side: *side,
            archetype: body.archetype,
            position: *pos,
            health: health.current,
            max_health: health.max,
            phase: mobility.phase,
        })
        .collect();

    units.sort_by_key(|u| u.unit_id);
    units
}

/// Build the two tower views.
fn build_towers(world: &World) -> (TowerView, TowerView) {
    let mut player = TowerView::default();
    let mut enemy = TowerView::default();

    for (_, (_tower, side, pos, health)) in
        world.query::<(&Tower, &Side, &Position, &Health)>().iter()
    {
        let view = TowerView {
            side: *side,
            position: *pos,
            health: health.current,
            max_health: health.max,
        };
        match side {
            Side::Player => player = view,
            Side::Enemy => enemy = view,
        }
    }

    (player, enemy)
}
