//! Ray casting against range colliders.
//!
//! `WorldHitResolver` answers the weapon's hit queries from the hecs world:
//! the nearest collider along the ray within range wins, and its `Health`
//! (if any) is handed back as the damage sink.

use glam::DVec3;
use hecs::{Entity, World};

use hitscan_core::components::{Collider, Health, Impact, Position};

use crate::hit::{DamageSink, Hit, HitResolver, RayOutcome};

impl DamageSink for Health {
    fn on_damage(&mut self, amount: f64, point: DVec3, normal: DVec3) {
        self.current = (self.current - amount).max(0.0);
        self.hits_taken += 1;
        self.last_impact = Some(Impact {
            amount,
            point,
            normal,
        });
    }
}

/// Where a ray first enters a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayContact {
    pub entity: Entity,
    pub distance: f64,
    pub point: DVec3,
    pub normal: DVec3,
}

/// Hit queries against every `(Position, Collider)` entity in a world.
pub struct WorldHitResolver<'w> {
    world: &'w mut World,
}

impl<'w> WorldHitResolver<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }
}

impl HitResolver for WorldHitResolver<'_> {
    fn resolve(&mut self, origin: DVec3, direction: DVec3, max_distance: f64) -> RayOutcome<'_> {
        let Some(contact) = cast_ray(self.world, origin, direction, max_distance) else {
            return RayOutcome::Miss;
        };

        let target = self
            .world
            .query_one_mut::<&mut Health>(contact.entity)
            .ok()
            .map(|health| health as &mut dyn DamageSink);

        RayOutcome::Hit(Hit {
            point: contact.point,
            normal: contact.normal,
            target,
        })
    }
}

/// Nearest collider contact along a unit `direction` within `max_distance`.
///
/// Colliders that already contain `origin` are not hit.
pub fn cast_ray(
    world: &World,
    origin: DVec3,
    direction: DVec3,
    max_distance: f64,
) -> Option<RayContact> {
    let mut nearest: Option<RayContact> = None;

    for (entity, (pos, collider)) in world.query::<(&Position, &Collider)>().iter() {
        let contact = match *collider {
            Collider::Sphere { radius } => ray_sphere(origin, direction, pos.0, radius),
            Collider::Box { half_extents } => {
                ray_box(origin, direction, pos.0 - half_extents, pos.0 + half_extents)
            }
        };
        let Some((distance, normal)) = contact else {
            continue;
        };
        if distance > max_distance {
            continue;
        }
        if nearest.map_or(true, |n| distance < n.distance) {
            nearest = Some(RayContact {
                entity,
                distance,
                point: origin + direction * distance,
                normal,
            });
        }
    }

    nearest
}

/// Entry distance and outward normal of a ray against a sphere.
fn ray_sphere(origin: DVec3, dir: DVec3, center: DVec3, radius: f64) -> Option<(f64, DVec3)> {
    let oc = origin - center;
    let c = oc.length_squared() - radius * radius;
    if c <= 0.0 {
        return None; // origin inside
    }
    let b = oc.dot(dir);
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    if t < 0.0 {
        return None; // sphere behind the origin
    }
    let point = origin + dir * t;
    Some((t, (point - center) / radius))
}

/// Entry distance and face normal of a ray against an axis-aligned box (slab test).
fn ray_box(origin: DVec3, dir: DVec3, min: DVec3, max: DVec3) -> Option<(f64, DVec3)> {
    let mut t_near = f64::NEG_INFINITY;
    let mut t_far = f64::INFINITY;
    let mut normal = DVec3::ZERO;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < 1e-12 {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let mut t0 = (min[axis] - o) / d;
        let mut t1 = (max[axis] - o) / d;
        // Entering through the min face means the normal faces -axis.
        let mut sign = -1.0;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
            sign = 1.0;
        }
        if t0 > t_near {
            t_near = t0;
            normal = DVec3::ZERO;
            normal[axis] = sign;
        }
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_near <= 0.0 {
        return None; // origin inside or box behind
    }
    Some((t_near, normal))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_ray_sphere_front_hit() {
        let (t, n) = ray_sphere(DVec3::ZERO, DVec3::Y, DVec3::new(0.0, 10.0, 0.0), 0.5).unwrap();
        assert!((t - 9.5).abs() < EPS);
        assert!((n - DVec3::NEG_Y).length() < EPS);
    }

    #[test]
    fn test_ray_sphere_misses() {
        // Passes beside
        assert!(ray_sphere(DVec3::ZERO, DVec3::Y, DVec3::new(2.0, 10.0, 0.0), 0.5).is_none());
        // Behind
        assert!(ray_sphere(DVec3::ZERO, DVec3::Y, DVec3::new(0.0, -10.0, 0.0), 0.5).is_none());
        // Origin inside
        assert!(ray_sphere(DVec3::ZERO, DVec3::Y, DVec3::ZERO, 0.5).is_none());
    }

    #[test]
    fn test_ray_box_face_normals() {
        let min = DVec3::new(-1.0, 5.0, -1.0);
        let max = DVec3::new(1.0, 6.0, 1.0);

        let (t, n) = ray_box(DVec3::ZERO, DVec3::Y, min, max).unwrap();
        assert!((t - 5.0).abs() < EPS);
        assert_eq!(n, DVec3::NEG_Y);

        // From the far side, travelling south
        let (t, n) = ray_box(DVec3::new(0.0, 10.0, 0.0), DVec3::NEG_Y, min, max).unwrap();
        assert!((t - 4.0).abs() < EPS);
        assert_eq!(n, DVec3::Y);
    }

    #[test]
    fn test_ray_box_misses() {
        let min = DVec3::new(-1.0, 5.0, -1.0);
        let max = DVec3::new(1.0, 6.0, 1.0);
        assert!(ray_box(DVec3::new(3.0, 0.0, 0.0), DVec3::Y, min, max).is_none());
        assert!(ray_box(DVec3::ZERO, DVec3::NEG_Y, min, max).is_none());
        assert!(ray_box(DVec3::new(0.0, 5.5, 0.0), DVec3::Y, min, max).is_none());
    }

    #[test]
    fn test_cast_ray_picks_nearest_within_range() {
        let mut world = World::new();
        let far = world.spawn((
            Position(DVec3::new(0.0, 20.0, 0.0)),
            Collider::Sphere { radius: 1.0 },
        ));
        let near = world.spawn((
            Position(DVec3::new(0.0, 10.0, 0.0)),
            Collider::Sphere { radius: 1.0 },
        ));

        let contact = cast_ray(&world, DVec3::ZERO, DVec3::Y, 50.0).unwrap();
        assert_eq!(contact.entity, near);
        assert!((contact.distance - 9.0).abs() < EPS);

        let _ = world.despawn(near);
        let contact = cast_ray(&world, DVec3::ZERO, DVec3::Y, 50.0).unwrap();
        assert_eq!(contact.entity, far);

        assert!(cast_ray(&world, DVec3::ZERO, DVec3::Y, 18.0).is_none());
    }

    #[test]
    fn test_resolver_returns_health_as_target() {
        let mut world = World::new();
        let entity = world.spawn((
            Position(DVec3::new(0.0, 10.0, 0.0)),
            Collider::Sphere { radius: 0.5 },
            Health::new(100.0),
        ));

        let mut resolver = WorldHitResolver::new(&mut world);
        match resolver.resolve(DVec3::ZERO, DVec3::Y, 50.0) {
            RayOutcome::Hit(hit) => {
                let target = hit.target.expect("health should be a damage sink");
                target.on_damage(30.0, hit.point, hit.normal);
            }
            RayOutcome::Miss => panic!("expected a hit"),
        }

        let health = world.get::<&Health>(entity).unwrap();
        assert_eq!(health.current, 70.0);
        assert_eq!(health.hits_taken, 1);
        let impact = health.last_impact.unwrap();
        assert!((impact.point - DVec3::new(0.0, 9.5, 0.0)).length() < EPS);
    }

    #[test]
    fn test_resolver_hit_without_health_has_no_target() {
        let mut world = World::new();
        world.spawn((
            Position(DVec3::new(0.0, 10.0, 0.0)),
            Collider::Box {
                half_extents: DVec3::splat(1.0),
            },
        ));

        let mut resolver = WorldHitResolver::new(&mut world);
        match resolver.resolve(DVec3::ZERO, DVec3::Y, 50.0) {
            RayOutcome::Hit(hit) => assert!(hit.target.is_none()),
            RayOutcome::Miss => panic!("expected a hit"),
        }
    }

    #[test]
    fn test_health_floors_at_zero() {
        let mut health = Health::new(10.0);
        health.on_damage(25.0, DVec3::ZERO, DVec3::Z);
        assert_eq!(health.current, 0.0);
        assert!(health.is_dead());
    }
}
