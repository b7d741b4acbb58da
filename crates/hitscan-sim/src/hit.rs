//! Hit resolution seam: what a shot's ray runs into, and who takes the damage.
//!
//! The weapon has no knowledge of the world. It asks a `HitResolver` where a
//! ray ends and hands damage to whatever `DamageSink` comes back.

use glam::DVec3;

/// Anything that can receive damage from a shot.
pub trait DamageSink {
    fn on_damage(&mut self, amount: f64, point: DVec3, normal: DVec3);
}

/// A ray that struck something.
pub struct Hit<'a> {
    pub point: DVec3,
    pub normal: DVec3,
    /// The damage capability of what was struck, if it has one.
    pub target: Option<&'a mut dyn DamageSink>,
}

impl std::fmt::Debug for Hit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hit")
            .field("point", &self.point)
            .field("normal", &self.normal)
            .field("has_target", &self.target.is_some())
            .finish()
    }
}

/// Result of a ray query.
#[derive(Debug)]
pub enum RayOutcome<'a> {
    Hit(Hit<'a>),
    /// Nothing within range; the shot ends at max range.
    Miss,
}

/// Casts shot rays against the world.
///
/// `resolve` is a query: it must not change world state itself. The returned
/// target borrows from the resolver for as long as the hit is held.
pub trait HitResolver {
    fn resolve(&mut self, origin: DVec3, direction: DVec3, max_distance: f64) -> RayOutcome<'_>;
}

/// A resolver for an empty world: every shot misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSky;

impl HitResolver for OpenSky {
    fn resolve(&mut self, _origin: DVec3, _direction: DVec3, _max_distance: f64) -> RayOutcome<'_> {
        RayOutcome::Miss
    }
}
