//! Surface shading: diffuse lighting, Phong-style specular and bounded
//! mirror reflection.
//!
//! Reflection recursion is bounded by an explicit `depth` / `max_depth`
//! pair passed down each call chain, so every primary ray starts fresh.

use crate::scene::{RayHit, Scene, TextureId};
use glint_math::{DVec2, DVec3, Ray};

/// Color type alias (RGB values typically 0-1)
pub type Color = DVec3;

/// Offset applied to secondary ray origins along their direction.
pub(crate) const RAY_BIAS: f64 = 1e-3;

/// Diffuse-only material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffuseMaterial {
    /// Base color, used when no texture is assigned
    pub color: Color,
    /// Optional texture overriding the base color
    pub texture: Option<TextureId>,
}

impl DiffuseMaterial {
    pub fn new(color: Color) -> Self {
        Self { color, texture: None }
    }

    /// Builder: sample the base color from a texture.
    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Reflective material with a specular highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetallicMaterial {
    /// Base color, used when no texture is assigned
    pub color: Color,
    /// Optional texture overriding the base color
    pub texture: Option<TextureId>,
    /// Mirror weight in [0, 1]
    pub reflectivity: f64,
    /// Specular exponent; 0 disables the highlight
    pub shininess: f64,
}

impl MetallicMaterial {
    /// Create a metallic material. Reflectivity is clamped to [0, 1] and
    /// shininess to non-negative values.
    pub fn new(color: Color, reflectivity: f64, shininess: f64) -> Self {
        Self {
            color,
            texture: None,
            reflectivity: reflectivity.clamp(0.0, 1.0),
            shininess: shininess.max(0.0),
        }
    }

    /// Builder: sample the base color from a texture.
    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// The closed set of shading strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    Diffuse(DiffuseMaterial),
    Metallic(MetallicMaterial),
}

impl From<DiffuseMaterial> for Material {
    fn from(m: DiffuseMaterial) -> Self {
        Material::Diffuse(m)
    }
}

impl From<MetallicMaterial> for Material {
    fn from(m: MetallicMaterial) -> Self {
        Material::Metallic(m)
    }
}

impl Material {
    /// Base color at a surface parameterization: the texture sample when a
    /// texture is assigned, else the flat material color.
    pub fn base_color(&self, scene: &Scene, uv: DVec2) -> Color {
        let (color, texture) = match self {
            Material::Diffuse(m) => (m.color, m.texture),
            Material::Metallic(m) => (m.color, m.texture),
        };

        match texture {
            Some(id) => scene.texture(id).color_at(uv),
            None => color,
        }
    }

    /// Shade a hit seen along `ray`.
    ///
    /// `depth` is the number of reflections already taken to reach this hit.
    pub fn compute_color(
        &self,
        scene: &Scene,
        hit: &RayHit,
        ray: &Ray,
        depth: u32,
        max_depth: u32,
    ) -> Color {
        let base = self.base_color(scene, hit.uv);
        let diffuse = compute_diffuse(scene, hit, base);

        match self {
            Material::Diffuse(_) => diffuse,
            Material::Metallic(m) => {
                let reflection = if m.reflectivity > 0.0 {
                    compute_reflection(scene, hit, ray, depth, max_depth)
                } else {
                    Color::ZERO
                };

                let specular = if m.shininess > 0.0 {
                    compute_specular(scene, hit, ray, m.reflectivity, m.shininess)
                } else {
                    Color::ZERO
                };

                reflection * m.reflectivity + diffuse * (1.0 - m.reflectivity) + specular
            }
        }
    }
}

/// Sum of unshadowed light contributions, multiplied channel-wise by `base`.
pub fn compute_diffuse(scene: &Scene, hit: &RayHit, base: Color) -> Color {
    let mut total = Color::ZERO;

    for light in scene.lights() {
        if let Some(illum) = light.compute_lighting(hit.point, hit.normal, scene, hit.object) {
            total += illum.color * illum.intensity;
        }
    }

    total * base
}

/// Color arriving along the mirror direction, or black once `depth` has
/// reached `max_depth` or the reflected ray escapes the scene.
pub fn compute_reflection(scene: &Scene, hit: &RayHit, ray: &Ray, depth: u32, max_depth: u32) -> Color {
    if depth >= max_depth {
        return Color::ZERO;
    }

    let dir = ray.direction().reflect(hit.normal);
    let origin = hit.point + dir * RAY_BIAS;
    let reflected = Ray::new(origin, origin + dir);

    match scene.cast_ray(&reflected) {
        Some(next) => scene.shade(&reflected, &next, depth + 1, max_depth),
        None => Color::ZERO,
    }
}

/// Phong-style highlight summed over every light that can see the point.
pub fn compute_specular(scene: &Scene, hit: &RayHit, ray: &Ray, reflectivity: f64, shininess: f64) -> Color {
    let view = ray.direction();
    let mut total = Color::ZERO;

    for light in scene.lights() {
        if light.is_occluded(hit.point, scene, hit.object) {
            continue;
        }

        let light_dir = (light.position() - hit.point).normalize();
        let mirrored = light_dir.reflect(hit.normal);
        let alignment = mirrored.dot(view);

        if alignment > 0.0 {
            total += light.color() * reflectivity * alignment.powf(shininess);
        }
    }

    total
}
