//! Player commands sent from the input source to the simulation.
//!
//! Commands are queued and processed at the next frame-tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Velocity;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Update the aim direction. The vector is normalized on receipt;
    /// a zero-length vector is ignored and the previous aim retained.
    SetAim { direction: Velocity },
    /// Fire one projectile along the current aim. Ignored while GameOver.
    Fire,
    /// Reconstruct a fresh game. Accepted only while GameOver.
    Restart,
}
