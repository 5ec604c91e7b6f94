//! Particle effect system — hit bursts and their gravity/damping
//! integration. Runs on its own driver, independent of the frame tick.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tincan_core::components::Particle;
use tincan_core::constants::{
    PARTICLE_BURST_COUNT, PARTICLE_DAMPING, PARTICLE_FLOOR_Y, PARTICLE_GRAVITY,
    PARTICLE_HORIZONTAL_SPEED_MAX, PARTICLE_HORIZONTAL_SPEED_MIN, PARTICLE_UPWARD_SPEED_MAX,
    PARTICLE_UPWARD_SPEED_MIN,
};
use tincan_core::types::{Position, Velocity};

/// Spawn one burst at a hit position: a fixed count of particles thrown
/// on a radial cone with a randomized upward kick.
pub fn spawn_burst(world: &mut World, rng: &mut ChaCha8Rng, origin: Position) {
    for _ in 0..PARTICLE_BURST_COUNT {
        let theta: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let horizontal: f64 =
            rng.gen_range(PARTICLE_HORIZONTAL_SPEED_MIN..PARTICLE_HORIZONTAL_SPEED_MAX);
        let upward: f64 = rng.gen_range(PARTICLE_UPWARD_SPEED_MIN..PARTICLE_UPWARD_SPEED_MAX);

        let velocity = Velocity::new(theta.cos() * horizontal, upward, theta.sin() * horizontal);
        world.spawn((Particle, origin, velocity));
    }
}

/// Run one particle integration tick: damp horizontal velocity, apply
/// gravity to the vertical component, integrate position, and despawn
/// anything below the floor.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_particle, pos, vel)) in
        world.query_mut::<(&Particle, &mut Position, &mut Velocity)>()
    {
        vel.x *= PARTICLE_DAMPING;
        vel.z *= PARTICLE_DAMPING;
        vel.y -= PARTICLE_GRAVITY;

        pos.x += vel.x;
        pos.y += vel.y;
        pos.z += vel.z;

        if pos.y < PARTICLE_FLOOR_Y {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
