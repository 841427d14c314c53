//! Cone primitive.

use crate::hit::{intersect_cap, nearest, solve_quadratic, Intersect, LocalHit};
use glint_math::{DVec2, DVec3, Ray};
use std::f64::consts::PI;

/// A cone with its apex at the local origin, opening along +Z to a unit
/// disk cap at z = 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cone;

impl Cone {
    pub fn new() -> Self {
        Self
    }

    /// Intersect x^2 + y^2 = z^2, keeping hits with 0 < z < 1.
    fn intersect_side(origin: DVec3, dir: DVec3) -> [Option<LocalHit>; 2] {
        let a = dir.x * dir.x + dir.y * dir.y - dir.z * dir.z;
        let b = 2.0 * (origin.x * dir.x + origin.y * dir.y - origin.z * dir.z);
        let c = origin.x * origin.x + origin.y * origin.y - origin.z * origin.z;

        let Some((t1, t2)) = solve_quadratic(a, b, c) else {
            return [None, None];
        };

        [t1, t2].map(|t| {
            let point = origin + dir * t;
            if t <= 0.0 || point.z <= 0.0 || point.z >= 1.0 {
                return None;
            }

            let radial = point.x.hypot(point.y);
            Some(LocalHit {
                t,
                point,
                normal: DVec3::new(point.x, point.y, -radial),
                uv: DVec2::new(point.y.atan2(point.x) / PI, 2.0 * point.z - 1.0),
            })
        })
    }
}

impl Intersect for Cone {
    fn intersect_local(&self, ray: &Ray) -> Option<LocalHit> {
        let origin = ray.origin();
        let dir = ray.direction();

        let [side1, side2] = Self::intersect_side(origin, dir);
        let cap = intersect_cap(origin, dir, 1.0, DVec3::Z);

        nearest([side1, side2, cap])
    }
}
