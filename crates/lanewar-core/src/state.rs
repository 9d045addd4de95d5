//! Match snapshot — the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{MovePhase, Outcome, Side};
use crate::events::MatchEvent;
use crate::types::{Position, SimTime};

/// Complete read-only view of the match after one tick.
///
/// The renderer and audio layers consume this; they never mutate engine
/// state. Unit views are sorted by `unit_id` so serialized snapshots are
/// stable for a given simulation state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub outcome: Outcome,
    /// Player gold available for spawning.
    pub gold: u32,
    pub units: Vec<UnitView>,
    pub player_tower: TowerView,
    pub enemy_tower: TowerView,
    /// Events that occurred since the previous snapshot.
    pub events: Vec<MatchEvent>,
}

/// A live unit as seen by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub unit_id: u32,
    pub side: Side,
    pub archetype: usize,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub phase: MovePhase,
}

/// A tower as seen by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TowerView {
    pub side: Side,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
}
