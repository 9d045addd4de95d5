//! Simulation engine for LANEWAR.
//!
//! Owns the hecs ECS world, advances the match one tick at a time against
//! a host-supplied monotonic clock, and produces MatchSnapshots for the
//! renderer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::MatchEngine;
pub use lanewar_core as core;
