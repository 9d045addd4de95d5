//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only). They do not own state — persistent state lives in
//! components or on the engine.

pub mod combat;
pub mod movement;
pub mod snapshot;
pub mod spawning;
pub mod tower_attack;
