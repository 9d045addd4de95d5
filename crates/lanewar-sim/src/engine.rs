//! Match engine — the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world (both towers and both unit
//! rosters), processes player commands, runs all systems in a fixed order,
//! and produces `MatchSnapshot`s. Completely headless — the host drives it
//! with `tick(now_ms)` at a roughly fixed cadence (reference: 60 Hz) and
//! renders from the returned snapshot.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lanewar_core::commands::PlayerCommand;
use lanewar_core::components::{Health, Tower};
use lanewar_core::config::MatchConfig;
use lanewar_core::enums::{Outcome, Side};
use lanewar_core::events::MatchEvent;
use lanewar_core::state::MatchSnapshot;
use lanewar_core::types::SimTime;

use crate::systems;
use crate::systems::spawning::SpawnTimers;
use crate::world_setup;

/// Configuration for starting a new match.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// RNG seed for enemy archetype selection. With the same seed and the
    /// same timestamp sequence, the simulation is fully deterministic.
    pub seed: u64,
    /// Rule set for this match.
    pub rules: MatchConfig,
}

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    world: World,
    rules: MatchConfig,
    time: SimTime,
    outcome: Outcome,
    gold: u32,
    rng: ChaCha8Rng,
    timers: SpawnTimers,
    next_unit_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    /// Create a new engine. Both towers are spawned immediately and the
    /// match starts `InProgress`; timers arm on the first tick.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        world_setup::spawn_towers(&mut world, &config.rules);

        Self {
            world,
            gold: config.rules.starting_gold,
            rules: config.rules,
            time: SimTime::default(),
            outcome: Outcome::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            timers: SpawnTimers::default(),
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// `now_ms` is the host's monotonic clock in milliseconds; it must be
    /// non-decreasing across calls. Once the outcome is terminal the tick
    /// mutates nothing — queries keep returning the frozen final state.
    pub fn tick(&mut self, now_ms: u64) -> MatchSnapshot {
        self.process_commands(now_ms);

        if self.outcome == Outcome::InProgress {
            self.run_systems(now_ms);
            self.time.advance(now_ms);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.outcome, self.gold, events)
    }

    /// Try to spawn a player unit of the given archetype right now.
    ///
    /// Returns `true` if the unit was created and its cost deducted.
    /// A finished match, an out-of-range index, or insufficient gold are
    /// all silent no-ops returning `false` — the host is expected to
    /// pre-validate affordability, but the engine re-checks regardless.
    pub fn request_player_spawn(&mut self, archetype_index: usize) -> bool {
        self.try_spawn_player_unit(archetype_index, self.time.now_ms)
    }

    /// Get the current match outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the player's current gold.
    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Get the rule set this match runs under.
    pub fn rules(&self) -> &MatchConfig {
        &self.rules
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self, now_ms: u64) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::SpawnUnit { archetype_index } => {
                    let _ = self.try_spawn_player_unit(archetype_index, now_ms);
                }
            }
        }
    }

    /// Shared validation + spawn path for both spawn entry points.
    fn try_spawn_player_unit(&mut self, archetype_index: usize, now_ms: u64) -> bool {
        if self.outcome != Outcome::InProgress {
            return false;
        }
        let Some(archetype) = self.rules.catalog.get(archetype_index) else {
            return false;
        };
        if self.gold < archetype.cost {
            return false;
        }

        let cost = archetype.cost;
        let Some((_entity, unit_id)) = world_setup::spawn_unit(
            &mut self.world,
            &self.rules,
            Side::Player,
            archetype_index,
            now_ms,
            &mut self.next_unit_id,
        ) else {
            return false;
        };

        self.gold -= cost;
        self.events.push(MatchEvent::UnitSpawned {
            unit_id,
            side: Side::Player,
            archetype: archetype_index,
        });
        true
    }

    /// Run all systems in order. Ordering is load-bearing: a unit killed
    /// in the contact pass cannot strike a tower afterward, and a tower
    /// falling to zero ends the match before any further movement.
    fn run_systems(&mut self, now_ms: u64) {
        // 1. Timers: enemy spawns and gold accrual.
        systems::spawning::run(
            &mut self.world,
            &mut self.rng,
            &mut self.timers,
            &self.rules,
            &mut self.gold,
            &mut self.next_unit_id,
            &mut self.events,
            now_ms,
        );
        // 2. Unit-vs-unit contact combat.
        systems::combat::resolve_contacts(
            &mut self.world,
            &self.rules,
            &mut self.despawn_buffer,
            &mut self.events,
            now_ms,
        );
        // 3. Tower attacks from surviving in-range units.
        systems::tower_attack::run(&mut self.world, &self.rules, &mut self.events, now_ms);
        // 4. Win condition.
        self.check_outcome();
        // 5. Movement state machine, skipped entirely on a terminal tick.
        if self.outcome == Outcome::InProgress {
            systems::movement::run(&mut self.world, &self.rules, now_ms);
        }
    }

    /// Check the win condition. The player tower is checked first: if
    /// both towers hit zero in the same tick, the enemy wins.
    fn check_outcome(&mut self) {
        let mut player_tower_health = i32::MAX;
        let mut enemy_tower_health = i32::MAX;

        for (_entity, (_tower, side, health)) in
            self.world.query_mut::<(&Tower, &Side, &Health)>()
        {
            match side {
                Side::Player => player_tower_health = health.current,
                Side::Enemy => enemy_tower_health = health.current,
            }
        }

        if player_tower_health <= 0 {
            self.outcome = Outcome::EnemyWins;
        } else if enemy_tower_health <= 0 {
            self.outcome = Outcome::PlayerWins;
        }

        if self.outcome != Outcome::InProgress {
            self.events.push(MatchEvent::MatchEnded {
                outcome: self.outcome,
            });
        }
    }

    /// Spawn a unit at an arbitrary x position (for tests building exact
    /// collision and range scenarios).
    #[cfg(test)]
    pub fn spawn_unit_at(
        &mut self,
        side: Side,
        archetype: usize,
        x: f64,
        now_ms: u64,
    ) -> hecs::Entity {
        use lanewar_core::types::Position;

        let (entity, _unit_id) = world_setup::spawn_unit(
            &mut self.world,
            &self.rules,
            side,
            archetype,
            now_ms,
            &mut self.next_unit_id,
        )
        .expect("test archetype index must be valid");
        self.world
            .get::<&mut Position>(entity)
            .expect("just spawned")
            .x = x;
        entity
    }

    /// Overwrite a tower's health (for tests forcing end-game states).
    #[cfg(test)]
    pub fn set_tower_health(&mut self, side: Side, health: i32) {
        for (_entity, (_tower, tower_side, tower_health)) in
            self.world.query_mut::<(&Tower, &Side, &mut Health)>()
        {
            if *tower_side == side {
                tower_health.current = health;
            }
        }
    }

    /// Overwrite the gold counter (for affordability tests).
    #[cfg(test)]
    pub fn set_gold(&mut self, gold: u32) {
        self.gold = gold;
    }

    /// Get a mutable reference to the ECS world (tests only).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
