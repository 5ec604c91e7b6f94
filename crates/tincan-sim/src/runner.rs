//! Game loop runner — drives the engine's three periodic drivers on one
//! dedicated thread and publishes snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in a shared mailbox for synchronous polling. All game logic
//! stays single-threaded: the frame tick, the spawn tick, and the
//! particle tick are multiplexed by deadline on this one thread, so the
//! world and game state need no locking.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tincan_core::commands::PlayerCommand;
use tincan_core::constants::{PARTICLE_TICK_RATE, SPAWN_INTERVAL_MS, TICK_RATE};
use tincan_core::state::GameStateSnapshot;

use crate::engine::{SimConfig, SimulationEngine};

/// Nominal duration of one frame tick.
const FRAME_TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Nominal duration of one particle tick.
const PARTICLE_TICK_DURATION: Duration =
    Duration::from_nanos(1_000_000_000 / PARTICLE_TICK_RATE as u64);

/// Duration of the spawn interval.
const SPAWN_INTERVAL: Duration = Duration::from_millis(SPAWN_INTERVAL_MS);

/// Messages sent from the host to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handle to a running game loop: command sender, snapshot mailbox, and
/// the thread itself. Dropping the handle without `shutdown()` leaves the
/// thread running until its channel disconnects.
pub struct GameLoopHandle {
    cmd_tx: mpsc::Sender<LoopCommand>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    join_handle: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Forward a player command to the loop. Returns false if the loop
    /// thread is gone.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.cmd_tx.send(LoopCommand::Player(command)).is_ok()
    }

    /// The most recent frame snapshot, if any frame tick has run yet.
    pub fn latest_snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop all three drivers and join the loop thread.
    pub fn shutdown(self) {
        let _ = self.cmd_tx.send(LoopCommand::Shutdown);
        let _ = self.join_handle.join();
    }
}

/// Spawn the game loop in a new thread and return its handle.
pub fn spawn_game_loop(config: SimConfig) -> GameLoopHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>> = Arc::new(Mutex::new(None));
    let mailbox = Arc::clone(&latest_snapshot);

    let join_handle = std::thread::Builder::new()
        .name("tincan-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &mailbox);
        })
        .expect("Failed to spawn game loop thread");

    GameLoopHandle {
        cmd_tx,
        latest_snapshot,
        join_handle,
    }
}

/// Deadlines for the three periodic drivers.
struct DriverSchedule {
    next_frame: Instant,
    next_spawn: Instant,
    next_particle: Instant,
}

impl DriverSchedule {
    /// Fresh deadlines, one full period out from `now`.
    fn anchored_at(now: Instant) -> Self {
        Self {
            next_frame: now + FRAME_TICK_DURATION,
            next_spawn: now + SPAWN_INTERVAL,
            next_particle: now + PARTICLE_TICK_DURATION,
        }
    }

    fn earliest(&self) -> Instant {
        self.next_frame.min(self.next_spawn).min(self.next_particle)
    }
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut schedule = DriverSchedule::anchored_at(Instant::now());
    tracing::info!("game loop started");

    loop {
        // 1. Drain all pending commands. A Restart also cancels and
        //    recreates all three driver schedules.
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Player(command)) => {
                    if matches!(command, PlayerCommand::Restart) {
                        schedule = DriverSchedule::anchored_at(Instant::now());
                    }
                    engine.queue_command(command);
                }
                Ok(LoopCommand::Shutdown) => {
                    tracing::info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!("command channel disconnected, game loop stopping");
                    return;
                }
            }
        }

        // 2. Run whichever drivers are due.
        let now = Instant::now();

        if now >= schedule.next_spawn {
            engine.spawn_tick();
            schedule.next_spawn = advance_deadline(schedule.next_spawn, SPAWN_INTERVAL, now);
        }

        if now >= schedule.next_particle {
            engine.particle_tick();
            schedule.next_particle =
                advance_deadline(schedule.next_particle, PARTICLE_TICK_DURATION, now);
        }

        if now >= schedule.next_frame {
            let snapshot = engine.frame_tick();
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot);
            }
            schedule.next_frame = advance_deadline(schedule.next_frame, FRAME_TICK_DURATION, now);
        }

        // 3. Sleep until the earliest deadline.
        let next_due = schedule.earliest();
        let now = Instant::now();
        if next_due > now {
            std::thread::sleep(next_due - now);
        }
    }
}

/// Step a driver deadline forward one period. If the loop has fallen more
/// than two periods behind, re-anchor to now instead of replaying the
/// backlog in a catch-up spiral.
fn advance_deadline(deadline: Instant, period: Duration, now: Instant) -> Instant {
    let next = deadline + period;
    if now.duration_since(deadline) > period * 2 {
        now + period
    } else {
        next
    }
}
