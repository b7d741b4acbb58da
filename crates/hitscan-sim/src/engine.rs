//! Range engine: one weapon on a firing range, ticked at a fixed rate.
//!
//! `RangeEngine` owns the hecs world of targets and the weapon controller,
//! processes queued commands, drives the weapon's timed sequences, and
//! produces `RangeSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use hitscan_core::commands::RangeCommand;
use hitscan_core::config::{ConfigError, WeaponConfig};
use hitscan_core::constants::DEFAULT_TARGET_COUNT;
use hitscan_core::state::RangeSnapshot;
use hitscan_core::types::SimTime;

use crate::presentation::EventLog;
use crate::systems;
use crate::systems::hit_scan::WorldHitResolver;
use crate::weapon::WeaponController;
use crate::world_setup;

/// Configuration for starting a new range session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for target placement. Same seed = same range.
    pub seed: u64,
    pub weapon: WeaponConfig,
    pub target_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            weapon: WeaponConfig::default(),
            target_count: DEFAULT_TARGET_COUNT,
        }
    }
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub shots_fired: u32,
    pub hits: u32,
    pub targets_destroyed: u32,
    pub reloads: u32,
}

/// The range engine. Owns the ECS world, the weapon and all session state.
pub struct RangeEngine {
    world: World,
    weapon: WeaponController<EventLog>,
    time: SimTime,
    trigger_held: bool,
    command_queue: VecDeque<RangeCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    score: ScoreState,
}

impl RangeEngine {
    /// Create an engine with a freshly populated range and an activated weapon.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let weapon = WeaponController::new(config.weapon, EventLog::new())?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new();
        world_setup::setup_range(&mut world, &mut rng, config.target_count);
        log::info!(
            "range ready: {} target(s), seed {}",
            config.target_count,
            config.seed
        );

        Ok(Self {
            world,
            weapon,
            time: SimTime::default(),
            trigger_held: false,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            score: ScoreState::default(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: RangeCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = RangeCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the range by one tick and return the resulting snapshot.
    ///
    /// Order: due continuations, queued commands, held trigger, cleanup.
    pub fn tick(&mut self) -> RangeSnapshot {
        let now = self.time.elapsed_secs;

        self.weapon.advance(now);
        self.process_commands(now);
        if self.trigger_held {
            self.try_fire(now);
        }
        self.score.targets_destroyed +=
            systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        self.time.advance();

        let events = self.weapon.presentation_mut().drain();
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.weapon.snapshot(self.time.elapsed_secs),
            self.trigger_held,
            events,
            &self.score,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the weapon.
    pub fn weapon(&self) -> &WeaponController<EventLog> {
        &self.weapon
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn trigger_held(&self) -> bool {
        self.trigger_held
    }

    /// Mutable world access for tests that stage their own range.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self, now: f64) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, now);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: RangeCommand, now: f64) {
        match command {
            RangeCommand::Aim { origin, direction } => {
                self.weapon.set_muzzle(origin, direction);
            }
            RangeCommand::Fire => {
                self.try_fire(now);
            }
            RangeCommand::PullTrigger => {
                self.trigger_held = true;
            }
            RangeCommand::ReleaseTrigger => {
                self.trigger_held = false;
            }
            RangeCommand::Reload => {
                if self.weapon.reload(now) {
                    self.score.reloads += 1;
                }
            }
            RangeCommand::Activate => {
                self.weapon.activate();
            }
            RangeCommand::Deactivate => {
                self.weapon.deactivate();
                self.trigger_held = false;
            }
        }
    }

    /// Attempt one shot against the range world.
    fn try_fire(&mut self, now: f64) -> bool {
        let mut resolver = WorldHitResolver::new(&mut self.world);
        if !self.weapon.fire(now, &mut resolver) {
            return false;
        }

        self.score.shots_fired += 1;
        if self.weapon.last_shot().is_some_and(|shot| shot.damaged) {
            self.score.hits += 1;
        }
        true
    }
}
