//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the game state (phase,
//! score, aim). It is single-threaded and cooperative: each of the three
//! tick entry points runs one update to completion, so the host may drive
//! them at independent cadences without any locking. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tincan_core::commands::PlayerCommand;
use tincan_core::components::Projectile;
use tincan_core::constants::{MUZZLE_X, MUZZLE_Y, MUZZLE_Z};
use tincan_core::enums::GamePhase;
use tincan_core::events::GameEvent;
use tincan_core::state::GameStateSnapshot;
use tincan_core::types::{Position, SimTime, Velocity};

use crate::systems;
use crate::systems::spawner::SpawnOutcome;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same tick and command
    /// schedule = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Aim direction before the input source reports one: straight downrange.
fn default_aim() -> Velocity {
    Velocity::new(0.0, 0.0, -1.0)
}

/// The simulation engine. Owns the ECS world and all game state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    score: u32,
    /// Current aim, kept normalized.
    aim: Velocity,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// The game starts in `Playing` with an empty range; the spawn tick
    /// fills it over time.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            score: 0,
            aim: default_aim(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next frame-tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the frame-tick driver by one tick and return the resulting
    /// snapshot: process queued commands, run ballistics, build views.
    ///
    /// Runs in every phase — after GameOver, in-flight projectiles still
    /// move, expire, and may remove targets cosmetically, but scoring is
    /// frozen.
    pub fn frame_tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        systems::ballistics::run(
            &mut self.world,
            &mut self.rng,
            self.phase == GamePhase::Playing,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
            self.time.tick,
        );
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, self.score, events)
    }

    /// Advance the spawn driver by one tick. Nominally fired every
    /// `SPAWN_INTERVAL_MS`; inert after GameOver.
    ///
    /// The count check and the GameOver transition happen in the same
    /// synchronous call, so no target is ever spawned past the threshold.
    pub fn spawn_tick(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        match systems::spawner::run(&mut self.world, &mut self.rng, &mut self.events) {
            SpawnOutcome::Spawned => {}
            SpawnOutcome::LossThresholdReached => {
                self.phase = GamePhase::GameOver;
                self.events.push(GameEvent::GameOver {
                    final_score: self.score,
                });
                tracing::info!(score = self.score, "range full, game over");
            }
        }
    }

    /// Advance the particle integration driver by one tick. A separate
    /// driver from the frame tick; continues after GameOver.
    pub fn particle_tick(&mut self) {
        systems::particles::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current frame-tick time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a target at a fixed position (for tests needing precise
    /// collision geometry).
    #[cfg(test)]
    pub fn spawn_target_at(&mut self, position: Position) -> hecs::Entity {
        self.world.spawn((tincan_core::components::Target, position))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Invalid commands (fire after
    /// GameOver, restart while Playing, zero-length aim) are no-ops.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetAim { direction } => {
                if let Some(unit) = direction.normalized() {
                    self.aim = unit;
                }
            }
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Playing {
                    self.fire();
                }
            }
            PlayerCommand::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.restart();
                }
            }
        }
    }

    /// Spawn one projectile at the muzzle along the current aim.
    fn fire(&mut self) {
        let muzzle = Position::new(MUZZLE_X, MUZZLE_Y, MUZZLE_Z);
        let entity = self.world.spawn((
            Projectile {
                direction: self.aim,
                fired_at_tick: self.time.tick,
            },
            muzzle,
        ));
        self.events.push(GameEvent::ShotFired {
            id: entity.to_bits().get(),
        });
    }

    /// Reconstruct a fresh game: empty world, zero score, Playing phase.
    /// Not a resume — everything including the frame clock starts over.
    fn restart(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.aim = default_aim();
        self.events.clear();
        self.events.push(GameEvent::Restarted);
        tracing::debug!("game restarted");
    }
}
