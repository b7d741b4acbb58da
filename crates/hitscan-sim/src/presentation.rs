//! Presentation seam: audio, particles and the shot trail.
//!
//! Calls are fire-and-forget. Nothing returned here feeds back into the weapon.

use glam::DVec3;

use hitscan_core::enums::{AudioCue, ParticleEffect};
use hitscan_core::events::PresentationEvent;

/// Output side of the weapon, injected at construction.
pub trait Presentation {
    fn play_audio(&mut self, cue: AudioCue);
    fn play_particles(&mut self, effect: ParticleEffect);
    fn show_trail(&mut self, from: DVec3, to: DVec3);
    fn hide_trail(&mut self);
}

/// Records every presentation call as a `PresentationEvent`.
///
/// The range engine drains it into each snapshot for the frontend to play.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<PresentationEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded since the last drain, oldest first.
    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<PresentationEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Presentation for EventLog {
    fn play_audio(&mut self, cue: AudioCue) {
        self.events.push(PresentationEvent::Audio { cue });
    }

    fn play_particles(&mut self, effect: ParticleEffect) {
        self.events.push(PresentationEvent::Particles { effect });
    }

    fn show_trail(&mut self, from: DVec3, to: DVec3) {
        self.events.push(PresentationEvent::TrailShown { from, to });
    }

    fn hide_trail(&mut self) {
        self.events.push(PresentationEvent::TrailHidden);
    }
}
