//! Intersection results and the local-space intersection trait.

use glint_math::{close_enough, DVec2, DVec3, Ray};

use crate::Color;

/// Outcome of one intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Whether the ray hit the object
    pub hit: bool,
    /// Surface parameterization at the hit point
    pub uv: DVec2,
}

impl Default for Hit {
    fn default() -> Self {
        Self {
            hit: false,
            uv: DVec2::ZERO,
        }
    }
}

impl Hit {
    /// A successful hit at the given UV.
    pub fn new(uv: DVec2) -> Self {
        Self { hit: true, uv }
    }

    /// A miss with UV (0, 0).
    pub fn miss() -> Self {
        Self::default()
    }
}

/// World-space details of an intersection, filled in by a successful test.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub point: DVec3,
    /// Unit surface normal
    pub normal: DVec3,
    /// Base color of the object that was hit
    pub color: Color,
}

/// A primitive's answer in its own local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalHit {
    /// Distance along the normalized local ray
    pub t: f64,
    /// Local intersection point
    pub point: DVec3,
    /// Local normal candidate, mapped to world space by the owning object
    pub normal: DVec3,
    /// Surface parameterization
    pub uv: DVec2,
}

/// Trait for primitives that can be intersected in local space.
pub trait Intersect: Send + Sync {
    /// Intersect a ray that has already been mapped into local space.
    ///
    /// Returns the nearest valid hit in front of the ray origin.
    fn intersect_local(&self, ray: &Ray) -> Option<LocalHit>;
}

/// Pick the candidate with the smallest t.
pub(crate) fn nearest<I>(candidates: I) -> Option<LocalHit>
where
    I: IntoIterator<Item = Option<LocalHit>>,
{
    candidates
        .into_iter()
        .flatten()
        .min_by(|a, b| a.t.total_cmp(&b.t))
}

/// Both roots of `at^2 + bt + c = 0`, or None when the discriminant is not
/// positive or the equation is not quadratic.
pub(crate) fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if close_enough(a, 0.0) {
        return None;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    Some(((-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a)))
}

/// Intersect the unit disk lying in the plane `z = cap_z`.
pub(crate) fn intersect_cap(origin: DVec3, dir: DVec3, cap_z: f64, normal: DVec3) -> Option<LocalHit> {
    if close_enough(dir.z, 0.0) {
        return None;
    }

    let t = (origin.z - cap_z) / -dir.z;
    if t <= 0.0 {
        return None;
    }

    let point = origin + dir * t;
    if point.x.hypot(point.y) >= 1.0 {
        return None;
    }

    Some(LocalHit {
        t,
        point,
        normal,
        uv: DVec2::new(point.x, point.y),
    })
}
