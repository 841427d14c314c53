//! Pinhole camera for primary ray generation.

use glint_math::{DVec3, Ray};

/// A pinhole camera projecting onto a flat screen in front of it.
///
/// The screen basis is cached and rebuilt by every setter, so rays can be
/// generated from a shared reference during rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    // Camera positioning
    position: DVec3,
    look_at: DVec3,
    up: DVec3,

    // Screen settings
    length: f64,       // Distance from position to the screen center
    horizon_size: f64, // Half-width of the screen
    aspect_ratio: f64, // Width over height

    // Cached computed values (set by update_geometry())
    alignment: DVec3,
    screen_u: DVec3,
    screen_v: DVec3,
    screen_center: DVec3,
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self {
            position: DVec3::new(0.0, -10.0, 0.0),
            look_at: DVec3::ZERO,
            up: DVec3::Z,
            length: 1.0,
            horizon_size: 1.0,
            aspect_ratio: 1.0,
            alignment: DVec3::Y,
            screen_u: DVec3::X,
            screen_v: DVec3::Z,
            screen_center: DVec3::ZERO,
        };
        camera.update_geometry();
        camera
    }
}

impl Camera {
    /// Create a camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set camera position.
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.set_position(position);
        self
    }

    /// Set the point the camera looks at.
    pub fn with_look_at(mut self, look_at: DVec3) -> Self {
        self.set_look_at(look_at);
        self
    }

    /// Set the up vector.
    pub fn with_up(mut self, up: DVec3) -> Self {
        self.set_up(up);
        self
    }

    /// Set the focal length.
    pub fn with_length(mut self, length: f64) -> Self {
        self.set_length(length);
        self
    }

    /// Set the horizontal screen size.
    pub fn with_horizon_size(mut self, horizon_size: f64) -> Self {
        self.set_horizon_size(horizon_size);
        self
    }

    /// Set the aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.set_aspect_ratio(aspect_ratio);
        self
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
        self.update_geometry();
    }

    pub fn set_look_at(&mut self, look_at: DVec3) {
        self.look_at = look_at;
        self.update_geometry();
    }

    pub fn set_up(&mut self, up: DVec3) {
        self.up = up;
        self.update_geometry();
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length;
        self.update_geometry();
    }

    pub fn set_horizon_size(&mut self, horizon_size: f64) {
        self.horizon_size = horizon_size;
        self.update_geometry();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) {
        self.aspect_ratio = aspect_ratio;
        self.update_geometry();
    }

    /// Recompute the cached screen basis.
    fn update_geometry(&mut self) {
        self.alignment = (self.look_at - self.position).normalize();

        let u_unit = self.alignment.cross(self.up).normalize();
        self.screen_u = u_unit * self.horizon_size;
        self.screen_v = u_unit.cross(self.alignment).normalize() * (self.horizon_size / self.aspect_ratio);

        self.screen_center = self.position + self.alignment * self.length;
    }

    /// Generate a ray through normalized screen coordinates in [-1, 1].
    pub fn generate_ray(&self, x: f64, y: f64) -> Ray {
        let screen_point = self.screen_center + self.screen_u * x + self.screen_v * y;
        Ray::new(self.position, screen_point)
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn look_at(&self) -> DVec3 {
        self.look_at
    }

    pub fn up(&self) -> DVec3 {
        self.up
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn horizon_size(&self) -> f64 {
        self.horizon_size
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Unit vector from the position toward the look-at point.
    pub fn alignment(&self) -> DVec3 {
        self.alignment
    }

    pub fn screen_u(&self) -> DVec3 {
        self.screen_u
    }

    pub fn screen_v(&self) -> DVec3 {
        self.screen_v
    }

    pub fn screen_center(&self) -> DVec3 {
        self.screen_center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let camera = Camera::default();

        assert!((camera.alignment() - DVec3::Y).length() < 1e-12);
        assert!((camera.screen_u() - DVec3::X).length() < 1e-12);
        assert!((camera.screen_v() - DVec3::Z).length() < 1e-12);
        assert!((camera.screen_center() - DVec3::new(0.0, -9.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_aspect_ratio_shrinks_v() {
        let camera = Camera::default().with_aspect_ratio(2.0).with_horizon_size(0.5);

        assert!((camera.screen_u().length() - 0.5).abs() < 1e-12);
        assert!((camera.screen_v().length() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_center_ray_on_axis() {
        let camera = Camera::default();
        let ray = camera.generate_ray(0.0, 0.0);

        assert_eq!(ray.origin(), DVec3::new(0.0, -10.0, 0.0));
        assert!((ray.direction() - DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn test_corner_ray() {
        let camera = Camera::default().with_length(2.0);
        let ray = camera.generate_ray(1.0, -1.0);

        assert!((ray.endpoint() - DVec3::new(1.0, -8.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_setter_rebuilds_basis() {
        let mut camera = Camera::default();
        camera.set_position(DVec3::new(10.0, 0.0, 0.0));

        assert!((camera.alignment() - DVec3::NEG_X).length() < 1e-12);
        assert!((camera.screen_center() - DVec3::new(9.0, 0.0, 0.0)).length() < 1e-12);
    }
}
