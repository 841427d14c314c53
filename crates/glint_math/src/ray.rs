use crate::DVec3;

/// A ray in 3D space defined by two points.
///
/// The ray starts at `origin` and passes through `endpoint`. The direction
/// is derived from the two points, which keeps rays meaningful after being
/// pushed through an affine transform point by point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: DVec3,
    endpoint: DVec3,
}

impl Ray {
    /// Create a new ray from `origin` through `endpoint`.
    pub fn new(origin: DVec3, endpoint: DVec3) -> Self {
        Self { origin, endpoint }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the second point the ray passes through.
    #[inline]
    pub fn endpoint(&self) -> DVec3 {
        self.endpoint
    }

    /// The unnormalized vector from origin to endpoint.
    #[inline]
    pub fn lab(&self) -> DVec3 {
        self.endpoint - self.origin
    }

    /// The unit direction of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.lab().normalize()
    }

    /// Get the point along the ray at distance t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction() * t
    }

    pub fn set_origin(&mut self, origin: DVec3) {
        self.origin = origin;
    }

    pub fn set_endpoint(&mut self, endpoint: DVec3) {
        self.endpoint = endpoint;
    }
}
