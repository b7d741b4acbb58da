//! Snapshots of visible state, for HUD and telemetry.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::WeaponState;
use crate::events::PresentationEvent;
use crate::types::{SimTime, TrailSegment};

/// Read-only view of one weapon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponSnapshot {
    pub state: WeaponState,
    pub magazine_ammo: u32,
    pub magazine_capacity: u32,
    pub ammo_reserve: u32,
    /// Trail currently on screen, if any.
    pub trail: Option<TrailSegment>,
    /// Seconds until an in-flight reload completes.
    pub reload_remaining_secs: Option<f64>,
}

/// Complete range state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeSnapshot {
    pub time: SimTime,
    pub weapon: WeaponSnapshot,
    pub trigger_held: bool,
    pub targets: Vec<TargetView>,
    /// Presentation events raised since the previous snapshot.
    pub events: Vec<PresentationEvent>,
    pub score: ScoreView,
}

/// A live target on the range display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    pub number: u32,
    pub position: DVec3,
    pub health: f64,
    pub max_health: f64,
    /// Where the most recent shot landed on this target.
    pub last_impact: Option<DVec3>,
}

/// Running score for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    /// Shots that landed on something able to take damage.
    pub hits: u32,
    pub targets_destroyed: u32,
    pub reloads: u32,
}
