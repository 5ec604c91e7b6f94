//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// The only runtime transition is `Playing -> GameOver`, driven by the
/// spawn tick's loss-threshold check. `GameOver` is terminal until an
/// external `Restart` command reconstructs a fresh game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}
