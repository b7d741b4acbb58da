//! Weapon controller: fire-rate gate, shot resolution, ammo bookkeeping,
//! and the timed shot-effect and reload sequences.
//!
//! State machine:
//!
//! ```text
//!   Ready --fire, last round--> Empty
//!   Ready | Empty --reload(now)--> Reloading --reload_duration--> Ready
//! ```
//!
//! `fire` and `reload` never suspend. Timed work is parked on the
//! controller's `Scheduler` and resumed by the host through `advance(now)`.

use glam::DVec3;

use hitscan_core::config::{ConfigError, WeaponConfig};
use hitscan_core::enums::{AudioCue, ParticleEffect, WeaponState};
use hitscan_core::state::WeaponSnapshot;
use hitscan_core::types::{MuzzlePose, TrailSegment};

use crate::hit::{HitResolver, RayOutcome};
use crate::presentation::Presentation;
use crate::scheduler::Scheduler;

/// A suspended timed sequence and the data it resumes with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sequence {
    /// Trail is on screen; clear it when this resumes.
    ShotEffect { impact_point: DVec3 },
    /// Reload delay elapsed; fill the magazine when this resumes.
    Reload,
}

/// Outcome of the most recent successful shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotReport {
    pub fired_at: f64,
    pub impact_point: DVec3,
    /// Surface normal at the impact. `None` when the shot ran to max range.
    pub impact_normal: Option<DVec3>,
    /// The ray struck something.
    pub hit: bool,
    /// What it struck could take damage, and was handed the shot's damage.
    pub damaged: bool,
}

/// One weapon instance. Owns its ammunition, its state, and its pending
/// timed sequences; the world and presentation are collaborators.
#[derive(Debug)]
pub struct WeaponController<P: Presentation> {
    config: WeaponConfig,
    state: WeaponState,
    magazine_ammo: u32,
    ammo_reserve: u32,
    /// Time of the last successful shot. `None` lets the first shot through.
    last_fire: Option<f64>,
    muzzle: MuzzlePose,
    /// The single trail-visibility slot shared by all shot effects.
    trail: Option<TrailSegment>,
    last_shot: Option<ShotReport>,
    sequences: Scheduler<Sequence>,
    presentation: P,
}

impl<P: Presentation> WeaponController<P> {
    /// Build an activated weapon: full magazine, Ready.
    pub fn new(config: WeaponConfig, presentation: P) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut weapon = Self {
            ammo_reserve: config.ammo_reserve,
            magazine_ammo: 0,
            config,
            state: WeaponState::Ready,
            last_fire: None,
            muzzle: MuzzlePose::default(),
            trail: None,
            last_shot: None,
            sequences: Scheduler::new(),
            presentation,
        };
        weapon.activate();
        Ok(weapon)
    }

    /// Fill the magazine to capacity and make the weapon ready to fire.
    ///
    /// The reserve is not charged for this fill. Anything still pending from
    /// before is dropped, so at most one reload is ever in flight.
    pub fn activate(&mut self) {
        self.drop_sequences();
        self.magazine_ammo = self.config.magazine_capacity;
        self.state = WeaponState::Ready;
        self.last_fire = None;
        log::info!(
            "weapon activated: {}/{} rounds, {} in reserve",
            self.magazine_ammo,
            self.config.magazine_capacity,
            self.ammo_reserve
        );
    }

    /// Drop every pending sequence and hide the trail.
    ///
    /// An interrupted reload never completes; the weapon stays Reloading
    /// until `activate` is called.
    pub fn deactivate(&mut self) {
        let dropped = self.drop_sequences();
        log::info!("weapon deactivated, {dropped} pending sequence(s) dropped");
    }

    fn drop_sequences(&mut self) -> usize {
        let dropped = self.sequences.len();
        self.sequences.clear();
        if self.trail.take().is_some() {
            self.presentation.hide_trail();
        }
        dropped
    }

    /// Move the muzzle. Rejects poses without a usable forward direction.
    pub fn set_muzzle(&mut self, position: DVec3, forward: DVec3) -> bool {
        match MuzzlePose::new(position, forward) {
            Some(pose) => {
                self.muzzle = pose;
                true
            }
            None => {
                log::warn!("ignoring muzzle pose at {position} facing {forward}");
                false
            }
        }
    }

    /// Whether a shot at `now` would pass the state and rate gates.
    pub fn can_fire(&self, now: f64) -> bool {
        now.is_finite()
            && self.state == WeaponState::Ready
            && self
                .last_fire
                .map_or(true, |last| now >= last + self.config.fire_interval)
    }

    /// Try to fire at time `now`. Returns whether a shot was fired.
    ///
    /// A refused shot is not an error and changes nothing.
    pub fn fire<R>(&mut self, now: f64, resolver: &mut R) -> bool
    where
        R: HitResolver + ?Sized,
    {
        if !now.is_finite() {
            log::warn!("ignoring shot at non-finite time {now}");
            return false;
        }
        if !self.can_fire(now) {
            return false;
        }

        self.last_fire = Some(now);
        self.sequences.observe(now);
        self.shoot(now, resolver);
        true
    }

    /// Resolve the shot, update ammo, and launch its effect sequence.
    fn shoot<R>(&mut self, now: f64, resolver: &mut R)
    where
        R: HitResolver + ?Sized,
    {
        let origin = self.muzzle.position;
        let forward = self.muzzle.forward;
        let damage = self.config.damage;

        let (impact_point, impact_normal, target) =
            match resolver.resolve(origin, forward, self.config.max_range) {
                RayOutcome::Hit(hit) => (hit.point, Some(hit.normal), hit.target),
                RayOutcome::Miss => (self.muzzle.point_at(self.config.max_range), None, None),
            };

        // The whole shot is committed before the target sees the hit.
        self.consume_round();
        self.start_shot_effect(impact_point);
        let report = ShotReport {
            fired_at: now,
            impact_point,
            impact_normal,
            hit: impact_normal.is_some(),
            damaged: target.is_some(),
        };
        self.last_shot = Some(report);
        log::debug!(
            "shot at t={now:.3}: {} at {}, {} round(s) left",
            if report.hit { "hit" } else { "miss" },
            report.impact_point,
            self.magazine_ammo
        );

        if let (Some(target), Some(normal)) = (target, impact_normal) {
            target.on_damage(damage, impact_point, normal);
        }
    }

    /// Take one round; the last round empties the weapon in the same step.
    fn consume_round(&mut self) {
        self.magazine_ammo = self.magazine_ammo.saturating_sub(1);
        if self.magazine_ammo == 0 {
            self.state = WeaponState::Empty;
        }
    }

    /// Muzzle effects and trail now; trail cleared after `trail_duration`.
    fn start_shot_effect(&mut self, impact_point: DVec3) {
        self.presentation.play_particles(ParticleEffect::MuzzleFlash);
        self.presentation.play_particles(ParticleEffect::ShellEject);
        self.presentation.play_audio(AudioCue::Shot);

        let segment = TrailSegment {
            from: self.muzzle.position,
            to: impact_point,
        };
        self.trail = Some(segment);
        self.presentation.show_trail(segment.from, segment.to);

        self.sequences
            .wait(self.config.trail_duration, Sequence::ShotEffect { impact_point });
    }

    /// Try to start a reload at time `now`. Returns whether one was started.
    ///
    /// Refused while already reloading, with nothing in reserve, or with a
    /// full magazine. The magazine fills `reload_duration` after `now`.
    pub fn reload(&mut self, now: f64) -> bool {
        if !now.is_finite() {
            log::warn!("ignoring reload at non-finite time {now}");
            return false;
        }
        if self.state == WeaponState::Reloading
            || self.ammo_reserve == 0
            || self.magazine_ammo >= self.config.magazine_capacity
        {
            return false;
        }

        self.state = WeaponState::Reloading;
        self.presentation.play_audio(AudioCue::Reload);
        self.sequences.observe(now);
        let done_at = self
            .sequences
            .wait_from(now, self.config.reload_duration, Sequence::Reload);
        log::info!("reload started at t={now:.3}, done at t={done_at:.3}");
        true
    }

    fn finish_reload(&mut self) {
        let room = self.config.magazine_capacity - self.magazine_ammo;
        let ammo_to_fill = room.min(self.ammo_reserve);

        self.magazine_ammo += ammo_to_fill;
        self.ammo_reserve -= ammo_to_fill;
        self.state = WeaponState::Ready;
        log::info!(
            "reload complete: {}/{} rounds, {} in reserve",
            self.magazine_ammo,
            self.config.magazine_capacity,
            self.ammo_reserve
        );
    }

    /// Resume every sequence due by `now`. Returns how many resumed.
    pub fn advance(&mut self, now: f64) -> usize {
        let due = self.sequences.advance(now);
        let resumed = due.len();
        for sequence in due {
            log::trace!("resuming {sequence:?} at t={:.3}", self.sequences.now());
            match sequence {
                Sequence::ShotEffect { .. } => {
                    // Shared slot: this clears whatever trail is showing,
                    // even one drawn by a later shot.
                    self.trail = None;
                    self.presentation.hide_trail();
                }
                Sequence::Reload => self.finish_reload(),
            }
        }
        resumed
    }

    pub fn state(&self) -> WeaponState {
        self.state
    }

    pub fn magazine_ammo(&self) -> u32 {
        self.magazine_ammo
    }

    pub fn ammo_reserve(&self) -> u32 {
        self.ammo_reserve
    }

    pub fn magazine_capacity(&self) -> u32 {
        self.config.magazine_capacity
    }

    pub fn config(&self) -> &WeaponConfig {
        &self.config
    }

    pub fn muzzle(&self) -> MuzzlePose {
        self.muzzle
    }

    pub fn trail(&self) -> Option<TrailSegment> {
        self.trail
    }

    pub fn last_shot(&self) -> Option<ShotReport> {
        self.last_shot
    }

    /// Sequences still waiting to resume.
    pub fn pending_sequences(&self) -> usize {
        self.sequences.len()
    }

    /// Seconds until the in-flight reload completes, measured from `now`.
    pub fn reload_remaining(&self, now: f64) -> Option<f64> {
        self.sequences
            .next_resume_where(|s| matches!(s, Sequence::Reload))
            .map(|at| (at - now).max(0.0))
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut P {
        &mut self.presentation
    }

    /// HUD view of the weapon at time `now`.
    pub fn snapshot(&self, now: f64) -> WeaponSnapshot {
        WeaponSnapshot {
            state: self.state,
            magazine_ammo: self.magazine_ammo,
            magazine_capacity: self.config.magazine_capacity,
            ammo_reserve: self.ammo_reserve,
            trail: self.trail,
            reload_remaining_secs: self.reload_remaining(now),
        }
    }
}
