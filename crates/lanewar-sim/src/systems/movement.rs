//! Unit movement system.
//!
//! Advances the Paused/Moving state machine and integrates position for
//! moving units, clamped at the stop boundary in front of the opposing
//! tower. Motion is monotonic: a unit never travels backward here (only
//! combat knockback moves a unit toward its own tower).

use hecs::World;

use lanewar_core::components::{Mobility, UnitBody};
use lanewar_core::config::MatchConfig;
use lanewar_core::enums::{MovePhase, Side};
use lanewar_core::types::Position;

/// Advance all unit state machines by one tick.
pub fn run(world: &mut World, rules: &MatchConfig, now_ms: u64) {
    let player_stop = rules.enemy_tower_edge() - rules.stop_distance;
    let enemy_stop = rules.player_tower_edge() + rules.stop_distance;

    for (_entity, (_body, side, pos, mobility)) in
        world.query_mut::<(&UnitBody, &Side, &mut Position, &mut Mobility)>()
    {
        match mobility.phase {
            MovePhase::Paused => {
                if now_ms >= mobility.pause_until_ms {
                    mobility.phase = MovePhase::Moving;
                }
            }
            MovePhase::Moving => {
                // The boundary is re-checked every tick: units short of it
                // keep walking, units at or past it hold position. The
                // last step is clamped so the leading edge never crosses
                // the boundary.
                match side {
                    Side::Player => {
                        let limit = player_stop - rules.unit_half_width;
                        if pos.x < limit {
                            pos.x = (pos.x + mobility.speed).min(limit);
                        }
                    }
                    Side::Enemy => {
                        let limit = enemy_stop + rules.unit_half_width;
                        if pos.x > limit {
                            pos.x = (pos.x - mobility.speed).max(limit);
                        }
                    }
                }
            }
        }
    }
}
