//! Ballistics system — per frame tick, advances every projectile,
//! resolves collisions against targets, and expires stale projectiles.
//!
//! The whole projectile set is one logical batch: targets are snapshotted
//! at the start of the pass and each target can absorb at most one hit per
//! tick. Projectiles are processed in creation order. When several targets
//! fall inside the collision radius, the nearest one wins; an exact
//! distance tie falls to the earlier entry in the start-of-tick snapshot.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use tincan_core::components::{Projectile, Target};
use tincan_core::constants::{COLLISION_RADIUS, PROJECTILE_SPEED, PROJECTILE_TTL_TICKS};
use tincan_core::events::GameEvent;
use tincan_core::types::Position;

use crate::systems::particles;

/// A target as seen by this tick's collision pass.
struct TargetSlot {
    entity: Entity,
    position: Position,
    claimed: bool,
}

/// Run the ballistics step for one frame tick.
///
/// `scoring` is false once the game is over: hits still remove targets and
/// burst particles, but the score stays frozen.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    scoring: bool,
    score: &mut u32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    current_tick: u64,
) {
    despawn_buffer.clear();

    // Targets as of the start of this tick.
    let mut targets: Vec<TargetSlot> = {
        let mut query = world.query::<(&Target, &Position)>();
        query
            .iter()
            .map(|(entity, (_target, pos))| TargetSlot {
                entity,
                position: *pos,
                claimed: false,
            })
            .collect()
    };

    // Projectiles in creation order.
    let mut projectiles: Vec<(Entity, Position, Projectile)> = {
        let mut query = world.query::<(&Projectile, &Position)>();
        query
            .iter()
            .map(|(entity, (proj, pos))| (entity, *pos, *proj))
            .collect()
    };
    projectiles.sort_by_key(|(entity, _, proj)| (proj.fired_at_tick, entity.to_bits().get()));

    let mut bursts: Vec<Position> = Vec::new();

    for (entity, position, projectile) in projectiles {
        let advanced = position.stepped(&projectile.direction, PROJECTILE_SPEED);

        // Nearest unclaimed target strictly inside the collision radius.
        let mut nearest: Option<(usize, f64)> = None;
        for (index, slot) in targets.iter().enumerate() {
            if slot.claimed {
                continue;
            }
            let distance = advanced.range_to(&slot.position);
            if distance < COLLISION_RADIUS {
                match nearest {
                    Some((_, best)) if best <= distance => {}
                    _ => nearest = Some((index, distance)),
                }
            }
        }

        if let Some((index, _)) = nearest {
            let slot = &mut targets[index];
            slot.claimed = true;
            despawn_buffer.push(slot.entity);
            despawn_buffer.push(entity);
            bursts.push(slot.position);
            events.push(GameEvent::TargetDestroyed {
                id: slot.entity.to_bits().get(),
                position: slot.position,
            });
            if scoring {
                *score += 1;
            }
            continue;
        }

        if current_tick.saturating_sub(projectile.fired_at_tick) >= PROJECTILE_TTL_TICKS {
            despawn_buffer.push(entity);
            continue;
        }

        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = advanced;
        }
    }

    // Despawn collected entities. A stale handle is a no-op.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Bursts are inserted after the full pass; the particle driver picks
    // them up on its next tick.
    for hit_position in bursts {
        particles::spawn_burst(world, rng, hit_position);
    }
}
