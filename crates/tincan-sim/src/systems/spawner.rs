//! Target spawning system — one target per spawn tick, and the loss check.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tincan_core::components::Target;
use tincan_core::constants::{
    TARGET_LOSS_THRESHOLD, TARGET_SPAWN_X_MAX, TARGET_SPAWN_X_MIN, TARGET_SPAWN_Z_MAX,
    TARGET_SPAWN_Z_MIN,
};
use tincan_core::events::GameEvent;
use tincan_core::types::Position;

/// Result of one spawn tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// One new target was created.
    Spawned,
    /// The range already holds the loss-threshold count; nothing was
    /// spawned and the engine must transition to GameOver.
    LossThresholdReached,
}

/// Run one spawn tick: evaluate the loss condition, otherwise spawn one
/// target at a randomized position on the ground plane.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) -> SpawnOutcome {
    let target_count = {
        let mut query = world.query::<&Target>();
        query.iter().count()
    };
    if target_count >= TARGET_LOSS_THRESHOLD {
        return SpawnOutcome::LossThresholdReached;
    }

    let x: f64 = rng.gen_range(TARGET_SPAWN_X_MIN..TARGET_SPAWN_X_MAX);
    let z: f64 = rng.gen_range(TARGET_SPAWN_Z_MIN..TARGET_SPAWN_Z_MAX);
    let position = Position::new(x, 0.0, z);

    let entity = world.spawn((Target, position));
    events.push(GameEvent::TargetSpawned {
        id: entity.to_bits().get(),
        position,
    });
    SpawnOutcome::Spawned
}
