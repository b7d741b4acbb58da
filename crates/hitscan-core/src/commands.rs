//! Commands sent by the host (input layer, scripts) to the range engine.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// All possible actions on the weapon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RangeCommand {
    /// Move the muzzle and point it along `direction`.
    Aim { origin: DVec3, direction: DVec3 },
    /// Attempt a single shot this tick.
    Fire,
    /// Hold the trigger: a shot is attempted every tick until released.
    PullTrigger,
    /// Release a held trigger.
    ReleaseTrigger,
    /// Attempt a reload.
    Reload,
    /// (Re)activate the weapon: full magazine, ready to fire.
    Activate,
    /// Deactivate the weapon, dropping pending effects and reloads.
    Deactivate,
}
