//! Game state snapshot — the complete visible state handed to the
//! rendering layer after each frame tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete read-only game state produced by every frame tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    pub targets: Vec<TargetView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    /// Transitions since the previous frame snapshot.
    pub events: Vec<GameEvent>,
}

/// A target to draw. `id` is stable for the target's lifetime and never
/// reused for a later entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u64,
    pub position: Position,
}

/// A projectile in flight. `direction` lets a renderer orient tracers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Position,
    pub direction: Velocity,
}

/// A burst particle to draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: u64,
    pub position: Position,
}
