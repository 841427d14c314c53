//! Scene objects: a shape placed in the world by a transform.

use crate::hit::{Hit, HitRecord, Intersect, LocalHit};
use crate::scene::MaterialId;
use crate::{Color, Cone, Cylinder, Plane, Sphere, TriangleMesh};
use glint_math::{DVec3, Ray, Transform};

/// The closed set of primitive shapes.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Cylinder(Cylinder),
    Cone(Cone),
    Mesh(TriangleMesh),
}

impl Intersect for Shape {
    fn intersect_local(&self, ray: &Ray) -> Option<LocalHit> {
        match self {
            Shape::Sphere(s) => s.intersect_local(ray),
            Shape::Plane(p) => p.intersect_local(ray),
            Shape::Cylinder(c) => c.intersect_local(ray),
            Shape::Cone(c) => c.intersect_local(ray),
            Shape::Mesh(m) => m.intersect_local(ray),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

impl From<Cylinder> for Shape {
    fn from(c: Cylinder) -> Self {
        Shape::Cylinder(c)
    }
}

impl From<Cone> for Shape {
    fn from(c: Cone) -> Self {
        Shape::Cone(c)
    }
}

impl From<TriangleMesh> for Shape {
    fn from(m: TriangleMesh) -> Self {
        Shape::Mesh(m)
    }
}

/// A shape with a transform, base color and optional material.
///
/// Objects without a material are shaded with plain diffuse lighting of
/// their base color.
#[derive(Debug, Clone)]
pub struct Object {
    shape: Shape,
    transform: Transform,
    color: Color,
    material: Option<MaterialId>,
}

impl Object {
    /// Create an object at the origin with a white base color.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            transform: Transform::default(),
            color: Color::ONE,
            material: None,
        }
    }

    /// Builder: set the transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder: set the base color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder: assign a material.
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_material(&mut self, material: Option<MaterialId>) {
        self.material = material;
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn material(&self) -> Option<MaterialId> {
        self.material
    }

    /// Intersect a world-space ray with this object.
    ///
    /// On a hit, `rec` receives the world-space point, the unit world normal
    /// and the object's base color. On a miss `rec` is left untouched.
    pub fn test_intersection(&self, ray: &Ray, rec: &mut HitRecord) -> Hit {
        let local_ray = self.transform.inverse_transform_ray(ray);

        let Some(local) = self.shape.intersect_local(&local_ray) else {
            return Hit::miss();
        };

        // Strip translation from the normal by subtracting the mapped origin.
        // Only exact for uniform scale.
        let origin = self.transform.apply(DVec3::ZERO);
        let normal = (self.transform.apply(local.normal) - origin).normalize();

        rec.point = self.transform.apply(local.point);
        rec.normal = normal;
        rec.color = self.color;

        Hit::new(local.uv)
    }
}
