//! Simulation constants and tuning parameters.

/// Frame tick rate (Hz). The ballistics step and snapshot production run
/// at this cadence.
pub const TICK_RATE: u32 = 60;

/// Nominal rate of the particle integration driver (Hz). A separate
/// driver from the frame tick; same nominal cadence.
pub const PARTICLE_TICK_RATE: u32 = 60;

// --- Spawning ---

/// Interval between target spawn ticks (milliseconds).
pub const SPAWN_INTERVAL_MS: u64 = 1000;

/// Target count at which the spawn tick declares the game lost instead
/// of spawning.
pub const TARGET_LOSS_THRESHOLD: usize = 10;

/// Target spawn area: x uniform in [-10, 10).
pub const TARGET_SPAWN_X_MIN: f64 = -10.0;
pub const TARGET_SPAWN_X_MAX: f64 = 10.0;

/// Target spawn area: z uniform in [-10, 0). Targets sit on y = 0.
pub const TARGET_SPAWN_Z_MIN: f64 = -10.0;
pub const TARGET_SPAWN_Z_MAX: f64 = 0.0;

// --- Projectiles ---

/// Projectile speed (distance-units per frame tick).
pub const PROJECTILE_SPEED: f64 = 0.5;

/// Collision radius for a projectile-target hit (distance-units).
pub const COLLISION_RADIUS: f64 = 2.0;

/// Projectile time-to-live (milliseconds).
pub const PROJECTILE_TTL_MS: u64 = 2000;

/// Projectile time-to-live in frame ticks.
pub const PROJECTILE_TTL_TICKS: u64 = PROJECTILE_TTL_MS * TICK_RATE as u64 / 1000;

/// Muzzle position in scene coordinates — projectiles originate here.
pub const MUZZLE_X: f64 = 0.0;
pub const MUZZLE_Y: f64 = -4.0;
pub const MUZZLE_Z: f64 = 1.0;

// --- Particles ---

/// Number of particles spawned per hit burst.
pub const PARTICLE_BURST_COUNT: usize = 20;

/// Horizontal burst speed range: r uniform in [0.1, 0.4).
pub const PARTICLE_HORIZONTAL_SPEED_MIN: f64 = 0.1;
pub const PARTICLE_HORIZONTAL_SPEED_MAX: f64 = 0.4;

/// Upward burst speed range: u uniform in [0.1, 0.3).
pub const PARTICLE_UPWARD_SPEED_MIN: f64 = 0.1;
pub const PARTICLE_UPWARD_SPEED_MAX: f64 = 0.3;

/// Per-tick multiplier applied to horizontal particle velocity.
pub const PARTICLE_DAMPING: f64 = 0.98;

/// Per-tick downward acceleration applied to vertical particle velocity.
pub const PARTICLE_GRAVITY: f64 = 0.05;

/// Particles are despawned once their y position falls below this.
pub const PARTICLE_FLOOR_Y: f64 = -10.0;
