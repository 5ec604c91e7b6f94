//! Simulation systems, one module per concern.

pub mod ballistics;
pub mod particles;
pub mod snapshot;
pub mod spawner;
