//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which army an entity belongs to.
///
/// Side also fixes direction of travel: Player units advance in +x toward
/// the enemy tower, Enemy units in -x toward the player tower.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Player,
    Enemy,
}

/// Unit movement state machine.
///
/// Units spawn `Paused`, become `Moving` when their pause window elapses,
/// and are knocked back to `Paused` when two moving units collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovePhase {
    #[default]
    Paused,
    Moving,
}

/// Match outcome (top-level state).
///
/// Once terminal, the simulation freezes: no further health, gold, or
/// roster mutation occurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    PlayerWins,
    EnemyWins,
}

impl Side {
    /// Sign of this side's direction of travel along the x axis.
    pub fn advance_sign(self) -> f64 {
        match self {
            Side::Player => 1.0,
            Side::Enemy => -1.0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}
