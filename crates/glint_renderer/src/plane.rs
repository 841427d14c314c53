//! Plane primitive: the unit square in the local z = 0 plane.

use crate::hit::{Intersect, LocalHit};
use glint_math::{close_enough, DVec2, DVec3, Ray};

/// A flat square spanning [-1, 1] in local x and y.
///
/// The normal always points along local -Z regardless of which side is hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plane;

impl Plane {
    pub fn new() -> Self {
        Self
    }
}

impl Intersect for Plane {
    fn intersect_local(&self, ray: &Ray) -> Option<LocalHit> {
        let origin = ray.origin();
        let dir = ray.direction();

        // Ray is parallel to the plane
        if close_enough(dir.z, 0.0) {
            return None;
        }

        let t = origin.z / -dir.z;
        if t <= 0.0 {
            return None;
        }

        let u = origin.x + t * dir.x;
        let v = origin.y + t * dir.y;
        // Written so that NaN coordinates fall outside the square
        if !(u.abs() <= 1.0 && v.abs() <= 1.0) {
            return None;
        }

        Some(LocalHit {
            t,
            point: origin + dir * t,
            normal: DVec3::NEG_Z,
            uv: DVec2::new(u, v),
        })
    }
}
