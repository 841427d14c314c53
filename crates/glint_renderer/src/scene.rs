//! Scene container: objects, materials, textures, lights and one camera.
//!
//! Objects, materials and textures live in flat arenas and refer to each
//! other through copyable handles. A scene is built once and then shared
//! read-only across render workers.

use crate::hit::HitRecord;
use crate::material::compute_diffuse;
use crate::{Camera, Color, Light, Material, Object, Texture};
use glint_math::{DVec2, DVec3, Ray};

/// Handle to an object in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

/// Handle to a material in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

/// Handle to a texture in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl MaterialId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl TextureId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The nearest intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Object that was hit
    pub object: ObjectId,
    /// World-space intersection point
    pub point: DVec3,
    /// Unit world-space normal
    pub normal: DVec3,
    /// Base color of the object
    pub color: Color,
    /// Surface parameterization
    pub uv: DVec2,
}

/// Everything needed to render one image.
///
/// Handles are only meaningful for the scene that issued them.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Object>,
    materials: Vec<Material>,
    textures: Vec<Texture>,
    lights: Vec<Light>,
    camera: Camera,
}

impl Scene {
    /// Create an empty scene viewed through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    pub fn add_object(&mut self, object: Object) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn add_material(&mut self, material: impl Into<Material>) -> MaterialId {
        self.materials.push(material.into());
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_texture(&mut self, texture: Texture) -> TextureId {
        self.textures.push(texture);
        TextureId(self.textures.len() - 1)
    }

    pub fn add_light(&mut self, light: impl Into<Light>) {
        self.lights.push(light.into());
    }

    pub fn object(&self, id: ObjectId) -> &Object {
        &self.objects[id.0]
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn texture(&self, id: TextureId) -> &Texture {
        &self.textures[id.0]
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Find the nearest object hit by `ray`.
    ///
    /// Every object is tested; the hit closest to the ray origin wins. Hits
    /// at a non-finite distance, as produced by a singular transform, are
    /// ignored.
    pub fn cast_ray(&self, ray: &Ray) -> Option<RayHit> {
        let origin = ray.origin();
        let mut closest: Option<(f64, RayHit)> = None;

        for (index, object) in self.objects.iter().enumerate() {
            let mut rec = HitRecord::default();
            let hit = object.test_intersection(ray, &mut rec);
            if !hit.hit {
                continue;
            }

            let distance = (rec.point - origin).length();
            if !distance.is_finite() {
                continue;
            }

            if closest.map_or(true, |(best, _)| distance < best) {
                closest = Some((
                    distance,
                    RayHit {
                        object: ObjectId(index),
                        point: rec.point,
                        normal: rec.normal,
                        color: rec.color,
                        uv: hit.uv,
                    },
                ));
            }
        }

        closest.map(|(_, hit)| hit)
    }

    /// Whether any object other than `skip` is hit by `ray` closer than
    /// `max_distance` from its origin.
    pub fn is_occluded(&self, ray: &Ray, max_distance: f64, skip: ObjectId) -> bool {
        let origin = ray.origin();

        self.objects.iter().enumerate().any(|(index, object)| {
            if index == skip.0 {
                return false;
            }

            let mut rec = HitRecord::default();
            object.test_intersection(ray, &mut rec).hit && (rec.point - origin).length() < max_distance
        })
    }

    /// Shade a hit with its object's material, or plain diffuse lighting of
    /// the object's base color when it has none.
    pub fn shade(&self, ray: &Ray, hit: &RayHit, depth: u32, max_depth: u32) -> Color {
        match self.object(hit.object).material() {
            Some(id) => self.material(id).compute_color(self, hit, ray, depth, max_depth),
            None => compute_diffuse(self, hit, hit.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, PointLight, Sphere, Transform};

    fn sphere_at(y: f64) -> Object {
        Object::new(Sphere::new())
            .with_transform(Transform::new(DVec3::new(0.0, y, 0.0), DVec3::ZERO, DVec3::ONE))
    }

    #[test]
    fn test_cast_ray_nearest_wins() {
        let mut scene = Scene::new(Camera::default());
        let far = scene.add_object(sphere_at(5.0));
        let near = scene.add_object(sphere_at(0.0));

        let ray = Ray::new(DVec3::new(0.0, -10.0, 0.0), DVec3::ZERO);
        let hit = scene.cast_ray(&ray).unwrap();

        assert_eq!(hit.object, near);
        assert_ne!(hit.object, far);
        assert!((hit.point - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_degenerate_object_does_not_mask_others() {
        let mut scene = Scene::new(Camera::default());
        // Zero z scale leaves the transform without an inverse
        scene.add_object(
            Object::new(Plane::new())
                .with_transform(Transform::new(DVec3::new(0.0, 50.0, 0.0), DVec3::ZERO, DVec3::new(1.0, 1.0, 0.0))),
        );
        let sphere = scene.add_object(sphere_at(0.0));

        let ray = Ray::new(DVec3::new(0.0, -10.0, 0.0), DVec3::ZERO);
        let hit = scene.cast_ray(&ray).unwrap();

        assert_eq!(hit.object, sphere);
        assert!((hit.point - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_cast_ray_miss() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(sphere_at(0.0));

        let ray = Ray::new(DVec3::new(0.0, -10.0, 0.0), DVec3::new(0.0, -20.0, 0.0));
        assert!(scene.cast_ray(&ray).is_none());
    }

    #[test]
    fn test_cast_ray_is_repeatable() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(sphere_at(0.0).with_color(Color::new(0.3, 0.6, 0.9)));

        let ray = Ray::new(DVec3::new(0.3, -10.0, 0.2), DVec3::ZERO);
        assert_eq!(scene.cast_ray(&ray), scene.cast_ray(&ray));
    }

    #[test]
    fn test_is_occluded_skips_self() {
        let mut scene = Scene::new(Camera::default());
        let only = scene.add_object(sphere_at(0.0));

        let ray = Ray::new(DVec3::new(0.0, -10.0, 0.0), DVec3::ZERO);
        assert!(!scene.is_occluded(&ray, 100.0, only));
        // Occluder farther than the limit does not count
        let other = scene.add_object(sphere_at(20.0));
        assert!(!scene.is_occluded(&ray, 5.0, other));
        assert!(scene.is_occluded(&ray, 100.0, other));
    }

    #[test]
    fn test_shade_diffuse_fallback() {
        let mut scene = Scene::new(Camera::default());
        scene.add_object(sphere_at(0.0).with_color(Color::new(0.5, 0.25, 1.0)));
        scene.add_light(PointLight::new(DVec3::new(0.0, -10.0, 0.0), Color::new(1.0, 0.5, 1.0), 1.0));

        let ray = Ray::new(DVec3::new(0.0, -10.0, 0.0), DVec3::ZERO);
        let hit = scene.cast_ray(&ray).unwrap();
        let color = scene.shade(&ray, &hit, 0, 3);

        assert!((color - Color::new(0.5, 0.125, 1.0)).length() < 1e-9);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut scene = Scene::new(Camera::default());
        let a = scene.add_object(sphere_at(0.0));
        let b = scene.add_object(sphere_at(3.0));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(scene.objects().len(), 2);
    }
}
