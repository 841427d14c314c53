//! Glint Core - external resource sources for the renderer.
//!
//! This crate provides:
//!
//! - **Image textures**: `ImageTexture`, a decoded RGB grid loaded from disk
//! - **Meshes**: `MeshData`, vertex positions and triangle indices from OBJ files
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{ImageTexture, MeshData};
//!
//! let texture = ImageTexture::load("textures/brick.png")?;
//! let mesh = MeshData::load_obj("models/teapot.obj")?;
//! println!("{:?} texture, {} triangles", texture.size(), mesh.triangle_count());
//! ```

pub mod mesh;
pub mod texture;

// Re-export commonly used types
pub use mesh::{MeshData, MeshError, MeshResult};
pub use texture::{ImageTexture, TextureError, TextureResult};
