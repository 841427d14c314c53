//! Sphere primitive for ray tracing.

use crate::hit::{solve_quadratic, Intersect, LocalHit};
use glint_math::{DVec2, DVec3, Ray};
use std::f64::consts::PI;

/// The unit sphere centered at the local origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl Sphere {
    pub fn new() -> Self {
        Self
    }

    /// Get the UV coordinates for a point on the unit sphere.
    fn sphere_uv(p: DVec3) -> (f64, f64) {
        // u: azimuth around Z, v: polar angle from +Z, both mapped to [-1, 1]
        let u = p.y.atan2(p.x) / PI;
        let v = 1.0 - 2.0 * p.z.clamp(-1.0, 1.0).acos() / PI;
        (u, v)
    }
}

impl Intersect for Sphere {
    fn intersect_local(&self, ray: &Ray) -> Option<LocalHit> {
        let origin = ray.origin();
        let dir = ray.direction();

        // a = 1 for a unit direction
        let b = 2.0 * origin.dot(dir);
        let c = origin.length_squared() - 1.0;
        let (t1, t2) = solve_quadratic(1.0, b, c)?;

        // Find the nearest root in front of the origin
        let t = if t1 > 0.0 {
            t1
        } else if t2 > 0.0 {
            t2
        } else {
            return None;
        };

        let point = origin + dir * t;
        let (u, v) = Self::sphere_uv(point);

        Some(LocalHit {
            t,
            point,
            normal: point,
            uv: DVec2::new(u, v),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(DVec3::new(0.0, -10.0, 0.0), DVec3::ZERO);
        let hit = Sphere.intersect_local(&ray).unwrap();

        assert!((hit.t - 9.0).abs() < 1e-12);
        assert!((hit.point - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-12);
        assert!((hit.normal - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        // Ray pointing away from sphere
        let ray = Ray::new(DVec3::new(0.0, -10.0, 0.0), DVec3::new(0.0, -11.0, 0.0));
        assert!(Sphere.intersect_local(&ray).is_none());

        // Ray passing beside it
        let ray = Ray::new(DVec3::new(2.0, -10.0, 0.0), DVec3::new(2.0, 0.0, 0.0));
        assert!(Sphere.intersect_local(&ray).is_none());
    }

    #[test]
    fn test_tangent_ray_is_miss() {
        // Discriminant is exactly zero
        let ray = Ray::new(DVec3::new(1.0, -5.0, 0.0), DVec3::new(1.0, 0.0, 0.0));
        assert!(Sphere.intersect_local(&ray).is_none());
    }

    #[test]
    fn test_ray_from_inside_hits_far_side() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        let hit = Sphere.intersect_local(&ray).unwrap();

        assert!((hit.t - 1.0).abs() < 1e-12);
        assert!((hit.uv.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_uv_range() {
        let ray = Ray::new(DVec3::new(-10.0, 0.0, 0.0), DVec3::ZERO);
        let hit = Sphere.intersect_local(&ray).unwrap();

        // Equator on the -X side
        assert!((hit.uv.x.abs() - 1.0).abs() < 1e-12);
        assert!(hit.uv.y.abs() < 1e-12);
    }
}
