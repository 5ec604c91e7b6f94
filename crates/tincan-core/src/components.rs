//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::Velocity;

/// Marks an entity as a hittable target on the range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target;

/// Projectile flight state, fixed at fire time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit direction of travel.
    pub direction: Velocity,
    /// Frame tick at which this projectile was fired.
    pub fired_at_tick: u64,
}

/// Marks an entity as a short-lived burst particle.
/// Its motion state lives in the Position and Velocity components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle;
