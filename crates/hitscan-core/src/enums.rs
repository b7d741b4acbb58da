//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Weapon lifecycle phase. Exactly one is held at any instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponState {
    /// Rounds chambered, may fire once the rate gate allows.
    #[default]
    Ready,
    /// Magazine is empty. Only a reload gets out of here.
    Empty,
    /// Reload in flight. Fire and further reloads are refused.
    Reloading,
}

/// One-shot audio clips the weapon triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    Shot,
    Reload,
}

/// Particle bursts played at the muzzle on every shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleEffect {
    MuzzleFlash,
    ShellEject,
}
