//! Events emitted by the simulation for the rendering layer and overlay.
//!
//! Events accumulate across all three drivers and are drained into the
//! next frame snapshot.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// State transitions a frontend must reflect (muzzle flash, target pop,
/// overlay changes).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new target appeared on the range.
    TargetSpawned { id: u64, position: Position },
    /// A projectile was fired.
    ShotFired { id: u64 },
    /// A target was hit and removed. `position` is where it stood,
    /// which is also where the particle burst is seeded.
    TargetDestroyed { id: u64, position: Position },
    /// The spawn tick found the range full; the game is lost.
    GameOver { final_score: u32 },
    /// A restart reconstructed a fresh game.
    Restarted,
}
