//! Simulation engine for TINCAN.
//!
//! Owns the hecs ECS world, exposes the three tick entry points
//! (frame, spawn, particle), and produces GameStateSnapshots for the
//! rendering layer. The `runner` module drives all three cadences on a
//! dedicated thread.

pub mod engine;
pub mod runner;
pub mod systems;

pub use engine::SimulationEngine;
pub use tincan_core as core;
