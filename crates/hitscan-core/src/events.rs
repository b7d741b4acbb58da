//! Events emitted by the weapon for audio, particle and trail presentation.
//!
//! Fire-and-forget: nothing in the simulation reads them back.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::{AudioCue, ParticleEffect};

/// Presentation side effects, in the order they were triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PresentationEvent {
    /// Play a one-shot audio clip.
    Audio { cue: AudioCue },
    /// Play a particle burst at the muzzle.
    Particles { effect: ParticleEffect },
    /// Draw the shot trail from the muzzle to the impact point.
    TrailShown { from: DVec3, to: DVec3 },
    /// Stop drawing the shot trail.
    TrailHidden,
}
