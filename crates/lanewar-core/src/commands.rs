//! Player commands sent from the host to the simulation.
//!
//! Commands are validated defensively and applied at the next tick
//! boundary. Invalid commands (bad index, unaffordable cost) degrade to
//! no-ops — they never put the simulation into an undefined state.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Spawn a player unit of the given archetype, gated on affordability.
    ///
    /// The queued form cannot report success; hosts that need the result
    /// call `MatchEngine::request_player_spawn` directly instead.
    SpawnUnit { archetype_index: usize },
}
