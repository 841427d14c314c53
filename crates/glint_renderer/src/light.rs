//! Light sources and shadow testing.

use crate::material::RAY_BIAS;
use crate::scene::{ObjectId, Scene};
use crate::Color;
use glint_math::{DVec3, Ray};
use std::f64::consts::FRAC_PI_2;

/// Light arriving at a surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    pub color: Color,
    /// Scalar weight in [0, base intensity]
    pub intensity: f64,
}

/// A light that emits uniformly in all directions from one point.
///
/// Intensity falls off with incidence angle only, not with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: DVec3,
    pub color: Color,
    pub intensity: f64,
}

impl PointLight {
    pub fn new(position: DVec3, color: Color, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(DVec3::ZERO, Color::ONE, 1.0)
    }
}

/// The closed set of light sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point(PointLight),
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

impl Light {
    pub fn position(&self) -> DVec3 {
        match self {
            Light::Point(p) => p.position,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Light::Point(p) => p.color,
        }
    }

    /// Whether another object blocks the path from `point` to this light.
    ///
    /// Only occluders nearer than the light count, and `object` (the surface
    /// being shaded) is never tested against its own shadow ray.
    pub fn is_occluded(&self, point: DVec3, scene: &Scene, object: ObjectId) -> bool {
        let to_light = self.position() - point;
        let distance = to_light.length();
        let Some(dir) = to_light.try_normalize() else {
            return false;
        };

        let origin = point + dir * RAY_BIAS;
        let shadow_ray = Ray::new(origin, origin + dir);
        scene.is_occluded(&shadow_ray, distance - RAY_BIAS, object)
    }

    /// Light reaching `point` on a surface with unit `normal`.
    ///
    /// Returns `None` when the point is in shadow or faces away from the
    /// light.
    pub fn compute_lighting(
        &self,
        point: DVec3,
        normal: DVec3,
        scene: &Scene,
        object: ObjectId,
    ) -> Option<Illumination> {
        let Light::Point(light) = self;

        let light_dir = (light.position - point).try_normalize()?;

        if self.is_occluded(point, scene, object) {
            return None;
        }

        let angle = normal.dot(light_dir).clamp(-1.0, 1.0).acos();
        if angle > FRAC_PI_2 {
            return None;
        }

        Some(Illumination {
            color: light.color,
            intensity: light.intensity * (1.0 - angle / FRAC_PI_2),
        })
    }
}
