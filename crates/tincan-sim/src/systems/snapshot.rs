//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot. This system is read-only — it never modifies the
//! world.

use hecs::World;

use tincan_core::components::{Particle, Projectile, Target};
use tincan_core::enums::GamePhase;
use tincan_core::events::GameEvent;
use tincan_core::state::{GameStateSnapshot, ParticleView, ProjectileView, TargetView};
use tincan_core::types::{Position, SimTime, Velocity};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: u32,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score,
        targets: build_targets(world),
        projectiles: build_projectiles(world),
        particles: build_particles(world),
        events,
    }
}

/// Build TargetView list from all target entities.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Position)>()
        .iter()
        .map(|(entity, (_target, pos))| TargetView {
            id: entity.to_bits().get(),
            position: *pos,
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}

/// Build ProjectileView list from all projectiles in flight.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (proj, pos))| ProjectileView {
            id: entity.to_bits().get(),
            position: *pos,
            direction: proj.direction,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

/// Build ParticleView list from all live burst particles.
fn build_particles(world: &World) -> Vec<ParticleView> {
    let mut particles: Vec<ParticleView> = world
        .query::<(&Particle, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (_particle, pos, _vel))| ParticleView {
            id: entity.to_bits().get(),
            position: *pos,
        })
        .collect();

    particles.sort_by_key(|p| p.id);
    particles
}
