// Affine object transform with a cached inverse.
//
// Maps points and rays between world space and an object's local space.

use glam::{DMat4, DVec3};

use crate::Ray;

/// A forward 4x4 affine matrix and its inverse.
///
/// The forward matrix is composed as `T * Rx * Ry * Rz * S`. A scale with a
/// zero component makes the inverse non-finite; that case is not guarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    forward: DMat4,
    inverse: DMat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            forward: DMat4::IDENTITY,
            inverse: DMat4::IDENTITY,
        }
    }
}

impl Transform {
    /// Build a transform from translation, rotation angles (radians) and scale.
    pub fn new(translation: DVec3, rotation: DVec3, scale: DVec3) -> Self {
        let mut transform = Self::default();
        transform.set_transform(translation, rotation, scale);
        transform
    }

    /// Build a transform directly from a forward matrix.
    pub fn from_matrix(forward: DMat4) -> Self {
        Self {
            forward,
            inverse: forward.inverse(),
        }
    }

    /// Rebuild both matrices from translation, rotation and scale.
    pub fn set_transform(&mut self, translation: DVec3, rotation: DVec3, scale: DVec3) {
        let forward = DMat4::from_translation(translation)
            * DMat4::from_rotation_x(rotation.x)
            * DMat4::from_rotation_y(rotation.y)
            * DMat4::from_rotation_z(rotation.z)
            * DMat4::from_scale(scale);

        self.forward = forward;
        self.inverse = forward.inverse();
    }

    /// The local-to-world matrix.
    pub fn forward(&self) -> DMat4 {
        self.forward
    }

    /// The world-to-local matrix.
    pub fn inverse(&self) -> DMat4 {
        self.inverse
    }

    /// Map a local-space point to world space.
    #[inline]
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.forward.transform_point3(point)
    }

    /// Map a world-space point to local space.
    #[inline]
    pub fn inverse_apply(&self, point: DVec3) -> DVec3 {
        self.inverse.transform_point3(point)
    }

    /// Map both points of a local-space ray to world space.
    pub fn transform_ray(&self, ray: &Ray) -> Ray {
        Ray::new(self.apply(ray.origin()), self.apply(ray.endpoint()))
    }

    /// Map both points of a world-space ray to local space.
    pub fn inverse_transform_ray(&self, ray: &Ray) -> Ray {
        Ray::new(self.inverse_apply(ray.origin()), self.inverse_apply(ray.endpoint()))
    }
}
