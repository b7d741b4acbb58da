//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Weapon defaults ---

/// Damage dealt per shot.
pub const DEFAULT_DAMAGE: f64 = 25.0;

/// Maximum shot distance in meters.
pub const DEFAULT_MAX_RANGE: f64 = 50.0;

/// Rounds held outside the magazine at activation.
pub const DEFAULT_AMMO_RESERVE: u32 = 100;

/// Rounds per full magazine.
pub const DEFAULT_MAGAZINE_CAPACITY: u32 = 25;

/// Minimum seconds between two shots.
pub const DEFAULT_FIRE_INTERVAL: f64 = 0.12;

/// Seconds a reload takes.
pub const DEFAULT_RELOAD_DURATION: f64 = 1.8;

/// Seconds the shot trail stays visible.
pub const SHOT_TRAIL_DURATION: f64 = 0.03;

// --- Firing range ---

/// Number of targets placed on a fresh range.
pub const DEFAULT_TARGET_COUNT: usize = 5;

/// Hit points of a range target.
pub const TARGET_HEALTH: f64 = 100.0;

/// Radius of a spherical range target (meters).
pub const TARGET_RADIUS: f64 = 0.5;

/// Closest distance a target is placed from the firing line origin.
pub const TARGET_MIN_DISTANCE: f64 = 10.0;

/// Farthest distance a target is placed. Inside default max range.
pub const TARGET_MAX_DISTANCE: f64 = 45.0;

/// Half-angle of the placement cone around North (radians, ~30°).
pub const TARGET_SPREAD_HALF_ANGLE: f64 = 0.52;

/// Target height band (meters above ground).
pub const TARGET_MIN_HEIGHT: f64 = 0.5;
pub const TARGET_MAX_HEIGHT: f64 = 2.0;

/// Cover barrier placed beside the firing lane.
pub const BARRIER_CENTER: [f64; 3] = [8.0, 20.0, 1.0];
pub const BARRIER_HALF_EXTENTS: [f64; 3] = [1.0, 0.25, 1.0];
