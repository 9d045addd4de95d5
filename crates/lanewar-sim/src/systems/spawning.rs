//! Spawn controller: the enemy spawn timer and the gold accrual timer.
//!
//! Both timers are elapsed-time counters against the host-supplied clock,
//! seeded lazily from the first tick's timestamp. A late tick fires every
//! owed period, so cadence jitter never drops a spawn or a gold payment.
//! Neither timer runs once the match is over (the engine gates the whole
//! system pass on the outcome).

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use lanewar_core::config::MatchConfig;
use lanewar_core::enums::Side;
use lanewar_core::events::MatchEvent;

use crate::world_setup;

/// Elapsed-time counters owned by the engine, polled once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimers {
    /// Timestamp the enemy spawn period is measured from.
    pub enemy_mark_ms: Option<u64>,
    /// Timestamp the gold accrual period is measured from.
    pub gold_mark_ms: Option<u64>,
}

/// Poll both timers, paying out gold and spawning enemy units for every
/// period that has elapsed.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut SpawnTimers,
    rules: &MatchConfig,
    gold: &mut u32,
    next_unit_id: &mut u32,
    events: &mut Vec<MatchEvent>,
    now_ms: u64,
) {
    let gold_mark = timers.gold_mark_ms.get_or_insert(now_ms);
    while now_ms.saturating_sub(*gold_mark) >= rules.gold_period_ms {
        *gold_mark += rules.gold_period_ms;
        *gold = gold.saturating_add(rules.gold_increment);
    }

    let enemy_mark = timers.enemy_mark_ms.get_or_insert(now_ms);
    while now_ms.saturating_sub(*enemy_mark) >= rules.enemy_spawn_period_ms {
        *enemy_mark += rules.enemy_spawn_period_ms;

        if rules.catalog.is_empty() {
            continue;
        }
        // Enemy spawning is free and unconditional: uniform random
        // archetype, no cost check.
        let archetype = rng.gen_range(0..rules.catalog.len());
        if let Some((_entity, unit_id)) =
            world_setup::spawn_unit(world, rules, Side::Enemy, archetype, now_ms, next_unit_id)
        {
            events.push(MatchEvent::UnitSpawned {
                unit_id,
                side: Side::Enemy,
                archetype,
            });
        }
    }
}
