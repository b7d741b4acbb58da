//! ECS components for hecs entities on the firing range.
//!
//! Components are plain data structs. Damage handling for `Health`
//! lives with the hit resolution code, not here.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// World-space position of an entity (meters).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Collision volume, centered on the entity's `Position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Sphere { radius: f64 },
    /// Axis-aligned box.
    Box { half_extents: DVec3 },
}

/// A single received hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    pub amount: f64,
    pub point: DVec3,
    pub normal: DVec3,
}

/// Hit points. Entities without it stop shots but take no damage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
    /// Most recent hit, for impact markers.
    pub last_impact: Option<Impact>,
    /// Total number of hits taken.
    pub hits_taken: u32,
}

impl Health {
    pub fn new(max: f64) -> Self {
        Self {
            current: max,
            max,
            last_impact: None,
            hits_taken: 0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Marks an entity as a shootable range target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Target {
    /// Stable number shown on the range display.
    pub number: u32,
}

/// Marks an entity as indestructible cover.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Barrier;
