//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D position in scene space (distance-units, Cartesian).
/// y = Up; targets sit on the y = 0 ground plane, z runs downrange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity in scene space (distance-units per tick).
/// Also used as a direction carrier where the magnitude is 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking for the frame-tick driver.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame tick (increments by 1 each frame tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Position advanced along a direction by a scalar step.
    pub fn stepped(&self, direction: &Velocity, step: f64) -> Position {
        Position::new(
            self.x + direction.x * step,
            self.y + direction.y * step,
            self.z + direction.z * step,
        )
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Speed magnitude (distance-units per tick).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector with this direction, or `None` for a zero or
    /// non-finite vector.
    pub fn normalized(&self) -> Option<Velocity> {
        let speed = self.speed();
        if speed <= f64::EPSILON || !speed.is_finite() {
            return None;
        }
        Some(Velocity::new(self.x / speed, self.y / speed, self.z / speed))
    }
}

impl SimTime {
    /// Seconds per frame tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one frame tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
