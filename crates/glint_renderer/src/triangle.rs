//! Triangle mesh primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use crate::hit::{Intersect, LocalHit};
use glint_core::{MeshData, MeshResult};
use glint_math::{DVec2, DVec3, Ray};
use std::path::Path;

/// A static list of triangles in local space, flat shaded.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Validated vertex index triplets
    triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Build a mesh from loaded mesh data, dropping invalid faces.
    pub fn new(data: &MeshData) -> Self {
        Self {
            vertices: data.positions.clone(),
            triangles: data.triangles(),
        }
    }

    /// Load a mesh from an OBJ file.
    pub fn load(path: impl AsRef<Path>) -> MeshResult<Self> {
        let data = MeshData::load_obj(path)?;
        Ok(Self::new(&data))
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// The corners of one face.
    fn corners(&self, face: [u32; 3]) -> [DVec3; 3] {
        face.map(|i| self.vertices[i as usize])
    }
}

/// Möller-Trumbore ray-triangle intersection.
///
/// Returns `(t, u, v)` with barycentric `u`, `v` for hits in front of the
/// origin. Both faces of the triangle are hittable.
fn intersect_triangle(origin: DVec3, dir: DVec3, v0: DVec3, v1: DVec3, v2: DVec3) -> Option<(f64, f64, f64)> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = dir.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < 1e-12 {
        return None;
    }

    let f = 1.0 / a;
    let s = origin - v0;
    let u = f * s.dot(h);

    // Check if intersection is outside triangle (u parameter)
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * dir.dot(q);

    // Check if intersection is outside triangle (v parameter)
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    if t <= 0.0 {
        return None;
    }

    Some((t, u, v))
}

impl Intersect for TriangleMesh {
    fn intersect_local(&self, ray: &Ray) -> Option<LocalHit> {
        let origin = ray.origin();
        let dir = ray.direction();

        let mut closest: Option<LocalHit> = None;

        for &face in &self.triangles {
            let [v0, v1, v2] = self.corners(face);
            let Some((t, u, v)) = intersect_triangle(origin, dir, v0, v1, v2) else {
                continue;
            };

            if closest.map_or(true, |hit| t < hit.t) {
                closest = Some(LocalHit {
                    t,
                    point: origin + dir * t,
                    normal: (v1 - v0).cross(v2 - v0).normalize(),
                    uv: DVec2::new(u, v),
                });
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> TriangleMesh {
        // Triangle in XY plane at z=-1
        TriangleMesh::new(&MeshData::new(
            vec![
                DVec3::new(-1.0, -1.0, -1.0),
                DVec3::new(1.0, -1.0, -1.0),
                DVec3::new(0.0, 1.0, -1.0),
            ],
            vec![0, 1, 2],
        ))
    }

    #[test]
    fn test_triangle_hit() {
        let mesh = single_triangle();
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));
        let hit = mesh.intersect_local(&ray).unwrap();

        assert!((hit.t - 1.0).abs() < 1e-12);
        assert!((hit.normal - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_triangle_miss() {
        let mesh = single_triangle();

        // Ray pointing away
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0));
        assert!(mesh.intersect_local(&ray).is_none());

        // Ray passing outside the edges
        let ray = Ray::new(DVec3::new(3.0, 0.0, 0.0), DVec3::new(3.0, 0.0, -1.0));
        assert!(mesh.intersect_local(&ray).is_none());
    }

    #[test]
    fn test_closest_triangle_wins() {
        let mesh = TriangleMesh::new(&MeshData::new(
            vec![
                DVec3::new(-1.0, -1.0, -3.0),
                DVec3::new(1.0, -1.0, -3.0),
                DVec3::new(0.0, 1.0, -3.0),
                DVec3::new(-1.0, -1.0, -2.0),
                DVec3::new(1.0, -1.0, -2.0),
                DVec3::new(0.0, 1.0, -2.0),
            ],
            // Far triangle first
            vec![0, 1, 2, 3, 4, 5],
        ));
        assert_eq!(mesh.triangle_count(), 2);

        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));
        let hit = mesh.intersect_local(&ray).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_back_face_is_hit() {
        let mesh = single_triangle();
        let ray = Ray::new(DVec3::new(0.0, 0.0, -5.0), DVec3::new(0.0, 0.0, -4.0));
        let hit = mesh.intersect_local(&ray).unwrap();

        assert!((hit.t - 4.0).abs() < 1e-12);
        // Flat face normal does not flip toward the ray
        assert!((hit.normal - DVec3::Z).length() < 1e-12);
    }
}
