//! Capped cylinder primitive.

use crate::hit::{intersect_cap, nearest, solve_quadratic, Intersect, LocalHit};
use glint_math::{DVec2, DVec3, Ray};
use std::f64::consts::PI;

/// A unit-radius cylinder around local Z, capped by disks at z = -1 and z = 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cylinder;

impl Cylinder {
    pub fn new() -> Self {
        Self
    }

    /// Intersect the infinite tube x^2 + y^2 = 1, keeping hits with |z| < 1.
    fn intersect_side(origin: DVec3, dir: DVec3) -> [Option<LocalHit>; 2] {
        let a = dir.x * dir.x + dir.y * dir.y;
        let b = 2.0 * (origin.x * dir.x + origin.y * dir.y);
        let c = origin.x * origin.x + origin.y * origin.y - 1.0;

        let Some((t1, t2)) = solve_quadratic(a, b, c) else {
            return [None, None];
        };

        [t1, t2].map(|t| {
            let point = origin + dir * t;
            if t <= 0.0 || point.z.abs() >= 1.0 {
                return None;
            }

            Some(LocalHit {
                t,
                point,
                normal: DVec3::new(point.x, point.y, 0.0),
                uv: DVec2::new(point.y.atan2(point.x) / PI, point.z),
            })
        })
    }
}

impl Intersect for Cylinder {
    fn intersect_local(&self, ray: &Ray) -> Option<LocalHit> {
        let origin = ray.origin();
        let dir = ray.direction();

        let [side1, side2] = Self::intersect_side(origin, dir);
        let top = intersect_cap(origin, dir, 1.0, DVec3::Z);
        let bottom = intersect_cap(origin, dir, -1.0, DVec3::NEG_Z);

        nearest([side1, side2, top, bottom])
    }
}
