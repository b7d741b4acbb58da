//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Where shots leave the weapon and which way they travel.
/// x = East, y = North, z = Up. `forward` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuzzlePose {
    pub position: DVec3,
    pub forward: DVec3,
}

impl Default for MuzzlePose {
    /// At the origin, facing North.
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            forward: DVec3::Y,
        }
    }
}

impl MuzzlePose {
    /// Build a pose, normalizing `forward`.
    ///
    /// Returns `None` when `forward` has no usable direction (zero length or
    /// non-finite components) or `position` is non-finite.
    pub fn new(position: DVec3, forward: DVec3) -> Option<Self> {
        if !position.is_finite() {
            return None;
        }
        let forward = forward.try_normalize()?;
        Some(Self { position, forward })
    }

    /// Point `distance` meters along the firing line.
    pub fn point_at(&self, distance: f64) -> DVec3 {
        self.position + self.forward * distance
    }
}

/// The visible shot trail, from the muzzle to where the shot ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSegment {
    pub from: DVec3,
    pub to: DVec3,
}

impl TrailSegment {
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    ///
    /// Elapsed time is derived from the tick count so it never drifts.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * self.dt();
    }
}
