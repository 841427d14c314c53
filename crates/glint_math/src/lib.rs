// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
mod transform;
pub use ray::Ray;
pub use transform::Transform;

/// Absolute tolerance used for "close enough" comparisons.
///
/// Only meaningful because every primitive is intersected in its own
/// unit-scale local space.
pub const EPSILON: f64 = f64::EPSILON;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn close_enough(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
