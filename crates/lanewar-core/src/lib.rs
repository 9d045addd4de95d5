//! Core types and definitions for the LANEWAR simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, configuration, snapshots, and events.
//! It has no dependency on any runtime framework or renderer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
