//! Triangle mesh data for the renderer's mesh primitive.
//!
//! Only vertex positions and triangle indices are consumed; normals and
//! UVs present in the source file are ignored.

use std::path::Path;

use glint_math::DVec3;
use thiserror::Error;

/// Errors that can occur during mesh loading.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Failed to load OBJ {path}: {source}")]
    Obj {
        path: String,
        #[source]
        source: tobj::LoadError,
    },

    #[error("No models found in OBJ file: {0}")]
    NoModels(String),
}

pub type MeshResult<T> = Result<T, MeshError>;

/// Vertex positions and triangle indices.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    /// Vertex positions (one DVec3 per vertex)
    pub positions: Vec<DVec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create a new mesh from positions and flat triangle indices.
    pub fn new(positions: Vec<DVec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Load a mesh from a Wavefront OBJ file.
    ///
    /// Faces are triangulated and every model in the file is merged into a
    /// single index space.
    pub fn load_obj(path: impl AsRef<Path>) -> MeshResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                single_index: true,
                triangulate: true,
                ..Default::default()
            },
        )
        .map_err(|source| MeshError::Obj {
            path: display.clone(),
            source,
        })?;

        if models.is_empty() {
            return Err(MeshError::NoModels(display));
        }

        let mut mesh = MeshData::default();
        for model in &models {
            let offset = mesh.positions.len() as u32;
            mesh.positions.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64)),
            );
            mesh.indices
                .extend(model.mesh.indices.iter().map(|i| i + offset));
        }

        log::debug!(
            "Loaded mesh: {} ({} models, {} vertices, {} triangles)",
            display,
            models.len(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(mesh)
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Triangle index triplets with out-of-range faces removed.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());

        for chunk in self.indices.chunks_exact(3) {
            let face = [chunk[0], chunk[1], chunk[2]];

            if face.iter().any(|&i| i as usize >= self.positions.len()) {
                log::warn!(
                    "Invalid triangle indices: {:?}, vertex count: {}",
                    face,
                    self.positions.len()
                );
                continue;
            }

            triangles.push(face);
        }

        triangles
    }
}
